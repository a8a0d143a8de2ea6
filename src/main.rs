use iced::keyboard::{self, key, Key};
use iced::widget::{column, container, scrollable, text, Space};
use iced::{event, mouse, window, Element, Event, Length, Subscription, Task, Theme};
use log::{debug, info, warn};
use rfd::AsyncFileDialog;
use std::path::PathBuf;

mod config;
mod error;
mod state;
mod ui;
mod upload;

use config::GalleryConfig;
use error::GalleryError;
use state::gallery::Gallery;
use state::reorder::{DragState, DropOutcome};
use ui::grid::{self, Slot};
use ui::header::{self, HeaderMode};
use ui::tile::{self, TileState};
use upload::{Payload, Session, SessionId};

/// Spacing between grid cells in logical pixels
const GRID_SPACING: f32 = 12.0;

/// Main application state
struct ImageGallery {
    config: GalleryConfig,
    /// Uploaded images and the selection over them
    gallery: Gallery<Payload>,
    /// Pending drag-to-reorder gesture
    drag: DragState,
    /// Current upload session; renewed when the gallery is cleared
    session: Session,
    /// Uploads that failed, shown until dismissed
    failures: Vec<GalleryError>,
    /// Status message to display to the user
    status: String,
}

/// Application messages (events)
#[derive(Debug, Clone)]
enum Message {
    /// User asked for the file picker
    PickFiles,
    /// User asked for the folder picker
    ImportFolder,
    /// Folder picker closed
    FolderChosen(Option<PathBuf>),
    /// Background folder scan finished
    FolderScanned(SessionId, error::Result<Vec<PathBuf>>),
    /// Files to decode and append
    FilesChosen(Vec<PathBuf>),
    /// One background decode finished
    Decoded(SessionId, error::Result<Payload>),
    /// Pointer pressed on the tile at this index
    TilePressed(usize),
    /// Pointer released on the tile at this index
    TileReleased(usize),
    /// Pointer entered the tile at this index
    TileEntered(usize),
    /// Pointer released outside any tile, or Escape
    CancelDrag,
    /// Delete every selected image
    DeleteSelected,
    /// Drop all images and cancel in-flight decodes
    ClearGallery,
    /// Hide the failed-upload list
    DismissFailures,
}

impl ImageGallery {
    /// Create a new instance of the application
    fn new() -> (Self, Task<Message>) {
        let config = GalleryConfig::load();
        info!(
            "Image Gallery started ({} columns, {}px thumbnails)",
            config.columns, config.thumbnail_size
        );

        (Self::with_config(config), Task::none())
    }

    fn with_config(config: GalleryConfig) -> Self {
        Self {
            config,
            gallery: Gallery::new(),
            drag: DragState::default(),
            session: Session::new(),
            failures: Vec::new(),
            status: "Ready. Upload some images to get started.".to_string(),
        }
    }

    /// Handle application messages and update state
    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::PickFiles => Task::perform(pick_files(), Message::FilesChosen),
            Message::ImportFolder => Task::perform(pick_folder(), Message::FolderChosen),
            Message::FolderChosen(Some(folder)) => {
                self.status = format!("Scanning {}...", folder.display());
                let session = self.session.id();
                Task::perform(
                    upload::scan_folder(folder, self.session.token()),
                    move |result| Message::FolderScanned(session, result),
                )
            }
            Message::FolderChosen(None) => Task::none(),
            Message::FolderScanned(session, _) if !self.session.accepts(session) => {
                debug!("Discarding folder scan from a cleared session");
                Task::none()
            }
            Message::FolderScanned(_, Ok(paths)) => self.start_decodes(paths),
            Message::FolderScanned(_, Err(e)) if e.is_cancelled() => {
                debug!("{}", e);
                Task::none()
            }
            Message::FolderScanned(_, Err(e)) => {
                warn!("{}", e);
                self.status = "Folder import failed.".to_string();
                self.failures.push(e);
                Task::none()
            }
            Message::FilesChosen(paths) => self.start_decodes(paths),
            Message::Decoded(session, result) => {
                self.finish_decode(session, result);
                Task::none()
            }
            Message::TilePressed(index) => {
                self.drag.start(index);
                Task::none()
            }
            Message::TileEntered(index) => {
                self.drag.hover(index);
                Task::none()
            }
            Message::TileReleased(index) => {
                self.finish_drag(index);
                Task::none()
            }
            Message::CancelDrag => {
                self.drag.cancel();
                Task::none()
            }
            Message::DeleteSelected => {
                self.drag.cancel();
                let removed = self.gallery.delete_selected();
                if !removed.is_empty() {
                    info!("Deleted {} images", removed.len());
                    self.status = format!(
                        "Deleted {} images. {} remaining.",
                        removed.len(),
                        self.gallery.len()
                    );
                }
                Task::none()
            }
            Message::ClearGallery => {
                let in_flight = self.session.pending();
                self.session.renew();
                self.gallery.clear();
                self.drag.cancel();
                self.failures.clear();
                info!("Cleared gallery ({} decodes cancelled)", in_flight);
                self.status = "Gallery cleared.".to_string();
                Task::none()
            }
            Message::DismissFailures => {
                self.failures.clear();
                Task::none()
            }
        }
    }

    /// Spawn one decode task per file; they complete in any order
    fn start_decodes(&mut self, paths: Vec<PathBuf>) -> Task<Message> {
        if paths.is_empty() {
            return Task::none();
        }

        info!("Decoding {} files", paths.len());
        self.session.begin(paths.len());

        let session = self.session.id();
        let token = self.session.token();
        let max_edge = self.config.thumbnail_size;
        let tasks = paths.into_iter().map(|path| {
            Task::perform(
                upload::decode_file(path, max_edge, token.clone()),
                move |result| Message::Decoded(session, result),
            )
        });

        Task::batch(tasks)
    }

    /// Append a decoded image, or record why it failed
    fn finish_decode(&mut self, session: SessionId, result: error::Result<Payload>) {
        if !self.session.accepts(session) {
            debug!("Discarding decode result from a cleared session");
            return;
        }
        self.session.complete();

        match result {
            Ok(payload) => {
                debug!(
                    "Added {} ({}x{}, {} bytes) at {}",
                    payload.name,
                    payload.width,
                    payload.height,
                    payload.source_len,
                    payload.added_at.format("%H:%M:%S")
                );
                self.status = format!("Added {}.", payload.name);
                self.gallery.push(payload);
            }
            Err(e) if e.is_cancelled() => debug!("{}", e),
            Err(e) => {
                warn!("{}", e);
                self.failures.push(e);
            }
        }

        if self.session.pending() == 0 {
            self.status = format!("{} images in gallery.", self.gallery.len());
        }
    }

    /// Resolve a pointer release on a tile into a swap or a click
    fn finish_drag(&mut self, index: usize) {
        match self.drag.finish(index) {
            DropOutcome::Swap { from, to } => {
                if let Err(e) = self.gallery.swap(from, to) {
                    warn!("Rejected swap {} <-> {}: {}", from, to, e);
                    self.status = format!("Could not move image: {}.", e);
                }
            }
            DropOutcome::Click(index) => {
                if let Err(e) = self.gallery.toggle_at(index) {
                    warn!("{}", e);
                }
            }
            DropOutcome::Ignored => {}
        }
    }

    fn tile_state(&self, index: usize) -> TileState {
        if self.drag.is_dragging() && self.drag.drop_target() == Some(index) {
            return TileState::DropTarget;
        }

        self.gallery
            .get(index)
            .and_then(|entry| self.gallery.selection_rank(entry.id))
            .map_or(TileState::Idle, TileState::Selected)
    }

    /// Build the user interface
    fn view(&self) -> Element<'_, Message> {
        let mode = HeaderMode::for_counts(self.gallery.len(), self.gallery.selected_count());
        let placements = grid::layout(
            self.gallery.len(),
            self.config.columns,
            self.config.hero_span,
        );

        let cells = grid::view(&placements, self.config.tile_size, GRID_SPACING, |slot, size| {
            match slot {
                Slot::Image(index) => match self.gallery.get(index) {
                    Some(entry) => {
                        tile::image_tile(index, &entry.payload, size, self.tile_state(index))
                    }
                    None => Space::new(size, size).into(),
                },
                Slot::Upload => tile::upload_tile(size),
            }
        });

        let grid_area = container(cells).width(Length::Fill).padding([16, 0]);

        let status = if self.session.pending() > 0 {
            format!("{} Decoding {} files...", self.status, self.session.pending())
        } else if self.drag.is_dragging() {
            "Release on another image to swap, or press Escape to cancel.".to_string()
        } else {
            self.status.clone()
        };

        let mut content = column![header::view(mode, !self.gallery.is_empty())].spacing(12);
        if let Some(failures) = header::failures(&self.failures) {
            content = content.push(failures);
        }
        content = content
            .push(scrollable(grid_area).height(Length::Fill))
            .push(text(status).size(14));

        container(content.padding(24))
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    }

    fn subscription(&self) -> Subscription<Message> {
        Subscription::batch([
            keyboard::on_key_press(|key, _modifiers| match key {
                Key::Named(key::Named::Delete) => Some(Message::DeleteSelected),
                Key::Named(key::Named::Escape) => Some(Message::CancelDrag),
                _ => None,
            }),
            event::listen_with(release_outside_tiles),
        ])
    }

    /// Set the application theme
    fn theme(&self) -> Theme {
        Theme::Dark
    }
}

/// A left-button release that no tile captured ends the pending drag,
/// wherever in the window it happened
fn release_outside_tiles(
    event: Event,
    status: event::Status,
    _window: window::Id,
) -> Option<Message> {
    match (event, status) {
        (
            Event::Mouse(mouse::Event::ButtonReleased(mouse::Button::Left)),
            event::Status::Ignored,
        ) => Some(Message::CancelDrag),
        _ => None,
    }
}

/// Show the native multi-file picker. No type filter.
async fn pick_files() -> Vec<PathBuf> {
    AsyncFileDialog::new()
        .set_title("Select Images")
        .pick_files()
        .await
        .unwrap_or_default()
        .into_iter()
        .map(|file| file.path().to_path_buf())
        .collect()
}

async fn pick_folder() -> Option<PathBuf> {
    AsyncFileDialog::new()
        .set_title("Select Folder with Images")
        .pick_folder()
        .await
        .map(|folder| folder.path().to_path_buf())
}

fn main() -> iced::Result {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    iced::application("Image Gallery", ImageGallery::update, ImageGallery::view)
        .subscription(ImageGallery::subscription)
        .theme(ImageGallery::theme)
        .window_size((1200.0, 900.0))
        .centered()
        .run_with(ImageGallery::new)
}

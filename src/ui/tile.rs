/// Grid cells: image tiles and the trailing upload control
use iced::alignment::Horizontal;
use iced::widget::{button, container, image, mouse_area, stack, text};
use iced::{Border, Color, ContentFit, Element, Length, Theme};
use iced_aw::Badge;

use crate::upload::Payload;
use crate::Message;

const SELECTED_BORDER: Color = Color::from_rgb(0.23, 0.51, 0.96);
const DROP_TARGET_BORDER: Color = Color::from_rgb(0.96, 0.62, 0.04);
const IDLE_BORDER: Color = Color::from_rgb(0.42, 0.45, 0.50);

/// How a tile should be highlighted
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TileState {
    Idle,
    /// Selected, with its 1-based selection number
    Selected(usize),
    /// Under the pointer while another tile is being dragged
    DropTarget,
}

/// One image tile. Press, release and hover feed the drag state machine;
/// a press and release on the same tile is a click.
pub fn image_tile<'a>(
    index: usize,
    payload: &Payload,
    size: f32,
    state: TileState,
) -> Element<'a, Message> {
    let border_color = match state {
        TileState::Idle => IDLE_BORDER,
        TileState::Selected(_) => SELECTED_BORDER,
        TileState::DropTarget => DROP_TARGET_BORDER,
    };
    let border_width = if state == TileState::Idle { 1.0 } else { 3.0 };

    let picture = container(
        image(payload.handle.clone())
            .width(Length::Fill)
            .height(Length::Fill)
            .content_fit(ContentFit::Cover),
    )
    .width(Length::Fixed(size))
    .height(Length::Fixed(size))
    .padding(border_width)
    .style(move |_theme: &Theme| container::Style {
        border: Border {
            color: border_color,
            width: border_width,
            radius: 6.0.into(),
        },
        ..container::Style::default()
    });

    let content: Element<'a, Message> = match state {
        TileState::Selected(rank) => {
            let badge = container(Badge::new(text(rank.to_string()).size(14)))
                .width(Length::Fill)
                .align_x(Horizontal::Right)
                .padding(8);
            stack![picture, badge].into()
        }
        _ => picture.into(),
    };

    mouse_area(content)
        .on_press(Message::TilePressed(index))
        .on_release(Message::TileReleased(index))
        .on_enter(Message::TileEntered(index))
        .into()
}

/// The upload control that always closes the grid
pub fn upload_tile<'a>(size: f32) -> Element<'a, Message> {
    button(container(text("Upload Image").size(18)).center(Length::Fill))
        .width(Length::Fixed(size))
        .height(Length::Fixed(size))
        .style(button::secondary)
        .on_press(Message::PickFiles)
        .into()
}

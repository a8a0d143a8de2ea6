/// Header above the grid: title or selection summary, plus toolbar
use iced::widget::{button, container, horizontal_space, row, text, Row};
use iced::{Alignment, Element, Length};
use iced_aw::{Badge, Wrap};

use crate::error::GalleryError;
use crate::Message;

/// What the header shows for the current state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeaderMode {
    /// Nothing uploaded yet
    Empty,
    /// Images present, nothing selected
    Gallery,
    /// This many images selected
    Selection(usize),
}

impl HeaderMode {
    pub fn for_counts(image_count: usize, selected_count: usize) -> Self {
        if selected_count > 0 {
            HeaderMode::Selection(selected_count)
        } else if image_count > 0 {
            HeaderMode::Gallery
        } else {
            HeaderMode::Empty
        }
    }
}

pub fn view<'a>(mode: HeaderMode, can_clear: bool) -> Element<'a, Message> {
    let summary: Element<'a, Message> = match mode {
        HeaderMode::Empty => horizontal_space().into(),
        HeaderMode::Gallery => text("Gallery").size(24).into(),
        HeaderMode::Selection(count) => row![
            Badge::new(text(count.to_string())),
            text("Files selected").size(18),
            button("Delete Files")
                .style(button::danger)
                .on_press(Message::DeleteSelected),
        ]
        .spacing(12)
        .align_y(Alignment::Center)
        .into(),
    };

    let toolbar = row![
        button("Upload Images").on_press(Message::PickFiles),
        button("Import Folder").on_press(Message::ImportFolder),
        button("Clear Gallery")
            .style(button::secondary)
            .on_press_maybe(can_clear.then_some(Message::ClearGallery)),
    ]
    .spacing(8);

    row![summary, horizontal_space(), toolbar]
        .align_y(Alignment::Center)
        .width(Length::Fill)
        .into()
}

/// Failed uploads as dismissable chips
pub fn failures<'a>(failures: &[GalleryError]) -> Option<Element<'a, Message>> {
    if failures.is_empty() {
        return None;
    }

    let chips = failures
        .iter()
        .map(|failure| {
            container(text(failure.to_string()).size(13))
                .padding([4, 8])
                .style(container::rounded_box)
                .into()
        })
        .collect::<Vec<Element<'a, Message>>>();

    let dismiss = button(text("Dismiss").size(13))
        .style(button::text)
        .on_press(Message::DismissFailures);

    Some(
        Row::new()
            .push(Wrap::with_elements(chips).spacing(6.0).line_spacing(6.0))
            .push(dismiss)
            .spacing(8)
            .into(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_header_mode_follows_counts() {
        assert_eq!(HeaderMode::for_counts(0, 0), HeaderMode::Empty);
        assert_eq!(HeaderMode::for_counts(3, 0), HeaderMode::Gallery);
        assert_eq!(HeaderMode::for_counts(3, 2), HeaderMode::Selection(2));
    }
}

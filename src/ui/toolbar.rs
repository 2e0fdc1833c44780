use iced::widget::{button, row, text, Button};
use iced::{Alignment, Element, Length};

use super::SEMIBOLD;
use crate::Message;

/// Height shared by every action button
const BUTTON_HEIGHT: f32 = 45.0;

/// A filled, rounded button with a centered label
pub fn text_button<'a>(label: &'a str, on_press: Message) -> Button<'a, Message> {
    button(
        text(label)
            .size(16)
            .font(SEMIBOLD)
            .width(Length::Fill)
            .align_x(Alignment::Center),
    )
    .on_press(on_press)
    .height(BUTTON_HEIGHT)
    .padding(10)
    .style(button::secondary)
}

/// "Sort By" and "Filter", side by side
pub fn toolbar<'a>() -> Element<'a, Message> {
    row![
        text_button("Sort By", Message::SortBy).width(Length::FillPortion(1)),
        text_button("Filter", Message::OpenFilter).width(Length::FillPortion(1)),
    ]
    .spacing(20)
    .width(Length::Fill)
    .align_y(Alignment::Center)
    .into()
}

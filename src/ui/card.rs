use std::collections::HashMap;

use iced::widget::{column, container, image, row, scrollable, text, Column};
use iced::{Alignment, Border, Color, ContentFit, Element, Length, Theme};

use super::SEMIBOLD;
use crate::api::avatar::AVATAR_SIZE;
use crate::state::data::Character;
use crate::Message;

const NAME_COLOR: Color = Color::from_rgb(0.0, 0.0, 1.0);
const BORDER_COLOR: Color = Color::from_rgb(0x7F as f32 / 255.0, 0x7F as f32 / 255.0, 0x7F as f32 / 255.0);

/// Scrollable list of cards, one per character, in the given order
pub fn card_list<'a>(
    characters: &'a [Character],
    avatars: &'a HashMap<String, image::Handle>,
) -> Element<'a, Message> {
    let cards = characters
        .iter()
        .map(|character| character_card(character, avatars.get(&character.image)));

    scrollable(Column::with_children(cards).spacing(10).padding([0, 10]))
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

/// Avatar on the left, name / status / last known location on the right
pub fn character_card<'a>(
    character: &'a Character,
    avatar: Option<&image::Handle>,
) -> Element<'a, Message> {
    let size = AVATAR_SIZE as f32;

    let picture: Element<'a, Message> = match avatar {
        Some(handle) => image(handle.clone())
            .width(size)
            .height(size)
            .content_fit(ContentFit::Cover)
            .into(),
        // Not loaded yet, or the download failed
        None => container(text("?").size(32))
            .width(size)
            .height(size)
            .center_x(size)
            .center_y(size)
            .style(container::rounded_box)
            .into(),
    };

    let details = column![
        text(&character.name).size(18).font(SEMIBOLD).color(NAME_COLOR),
        row![
            text("Status: "),
            text(&character.status).size(14).font(SEMIBOLD),
        ],
        column![
            text("Last known location:"),
            text(&character.location.name).size(14).font(SEMIBOLD),
        ]
        .spacing(5),
    ]
    .spacing(12)
    .width(Length::Fill);

    container(
        row![picture, details]
            .spacing(10)
            .align_y(Alignment::Center),
    )
    .padding(5)
    .width(Length::Fill)
    .style(card_style)
    .into()
}

fn card_style(_theme: &Theme) -> container::Style {
    container::Style {
        border: Border {
            color: BORDER_COLOR,
            width: 0.7,
            radius: 10.0.into(),
        },
        ..container::Style::default()
    }
}

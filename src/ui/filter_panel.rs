use iced::widget::{center, checkbox, column, container, mouse_area, opaque, scrollable, stack, text, Column};
use iced::{Color, Element, Length};

use super::toolbar::text_button;
use super::{BOLD, SEMIBOLD};
use crate::state::filter::FilterToggleMap;
use crate::Message;

const PANEL_WIDTH: f32 = 340.0;
const PANEL_MAX_HEIGHT: f32 = 640.0;

/// Checkbox lists for every known status and location, plus "Close"
pub fn filter_panel<'a>(
    statuses: &'a FilterToggleMap,
    locations: &'a FilterToggleMap,
) -> Element<'a, Message> {
    let options = column![
        text("Filter Characters").size(20).font(BOLD),
        toggle_list(statuses, Message::ToggleStatus),
        text("Filter Locations").size(20).font(BOLD),
        toggle_list(locations, Message::ToggleLocation),
    ]
    .spacing(15);

    // Close keeps its height; the list scrolls in the rest
    let content = column![
        scrollable(options).height(Length::Fill),
        text_button("Close", Message::CloseFilter).width(Length::Fixed(PANEL_WIDTH * 0.45)),
    ]
    .spacing(20);

    container(content)
        .width(PANEL_WIDTH)
        .max_height(PANEL_MAX_HEIGHT)
        .padding(20)
        .style(container::rounded_box)
        .into()
}

fn toggle_list<'a>(
    toggles: &'a FilterToggleMap,
    on_toggle: fn(String) -> Message,
) -> Element<'a, Message> {
    let boxes = toggles.iter().map(|(value, selected)| -> Element<'a, Message> {
        let key = value.to_string();
        checkbox(value, selected)
            .on_toggle(move |_| on_toggle(key.clone()))
            .text_size(16)
            .font(SEMIBOLD)
            .into()
    });

    Column::with_children(boxes).spacing(10).into()
}

/// Lay `content` over a dimmed `base`. Clicking the backdrop sends `on_blur`.
pub fn modal<'a>(
    base: impl Into<Element<'a, Message>>,
    content: impl Into<Element<'a, Message>>,
    on_blur: Message,
) -> Element<'a, Message> {
    stack![
        base.into(),
        opaque(
            mouse_area(center(opaque(content)).style(|_theme| {
                container::Style {
                    background: Some(
                        Color {
                            a: 0.6,
                            ..Color::BLACK
                        }
                        .into(),
                    ),
                    ..container::Style::default()
                }
            }))
            .on_press(on_blur)
        )
    ]
    .into()
}

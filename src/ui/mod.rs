/// Widgets for the character screen
///
/// - Action buttons above the list (toolbar.rs)
/// - Character cards and the scrollable list (card.rs)
/// - The filter overlay and the modal helper it uses (filter_panel.rs)

pub mod card;
pub mod filter_panel;
pub mod toolbar;

use iced::{font, Font};

/// Semibold variant of the default font
pub const SEMIBOLD: Font = Font {
    weight: font::Weight::Semibold,
    ..Font::DEFAULT
};

/// Bold variant of the default font
pub const BOLD: Font = Font {
    weight: font::Weight::Bold,
    ..Font::DEFAULT
};

use std::collections::{HashMap, HashSet};

use clap::Parser;
use iced::widget::{column, image, text};
use iced::{keyboard, Element, Length, Subscription, Task, Theme};
use tracing::{debug, info, warn};

mod api;
mod config;
mod state;
mod ui;

use api::{avatar, client, FetchError};
use config::Config;
use state::browser::BrowserState;
use state::data::CharacterPage;

/// Main application state
struct CharacterBrowser {
    config: Config,
    /// Shared HTTP connection pool
    http: reqwest::Client,
    /// Fetched characters, filter toggles and the filtered view
    browser: BrowserState,
    /// Decoded avatar thumbnails keyed by image URL
    avatars: HashMap<String, image::Handle>,
    /// Whether the filter overlay is shown
    filter_visible: bool,
}

/// Application messages (events)
#[derive(Debug, Clone)]
enum Message {
    /// The character fetch finished
    CharactersLoaded(Result<CharacterPage, FetchError>),
    /// One avatar download finished
    AvatarLoaded(String, Result<image::Handle, FetchError>),
    /// User clicked "Sort By"
    SortBy,
    /// User clicked "Filter"
    OpenFilter,
    /// User dismissed the filter overlay
    CloseFilter,
    /// User flipped a status checkbox
    ToggleStatus(String),
    /// User flipped a location checkbox
    ToggleLocation(String),
}

impl CharacterBrowser {
    /// Create the screen and kick off the one character fetch
    fn new(config: Config) -> (Self, Task<Message>) {
        let http = reqwest::Client::new();

        let fetch = Task::perform(
            client::fetch_characters(http.clone(), config.endpoint.clone()),
            Message::CharactersLoaded,
        );

        (
            CharacterBrowser {
                config,
                http,
                browser: BrowserState::new(),
                avatars: HashMap::new(),
                filter_visible: false,
            },
            fetch,
        )
    }

    /// Handle application messages and update state
    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::CharactersLoaded(result) => {
                if self.browser.receive(result) {
                    self.avatars.clear();
                    return self.load_avatars();
                }
                Task::none()
            }
            Message::AvatarLoaded(url, Ok(handle)) => {
                self.avatars.insert(url, handle);
                Task::none()
            }
            Message::AvatarLoaded(url, Err(err)) => {
                warn!("⚠️  Avatar {} failed: {}", url, err);
                Task::none()
            }
            Message::SortBy => {
                // Sorting is not implemented
                info!("Sort By pressed");
                Task::none()
            }
            Message::OpenFilter => {
                debug!("filter panel opened");
                self.filter_visible = true;
                Task::none()
            }
            Message::CloseFilter => {
                debug!("filter panel closed");
                self.filter_visible = false;
                Task::none()
            }
            Message::ToggleStatus(status) => {
                self.browser.toggle_status(&status);
                Task::none()
            }
            Message::ToggleLocation(location) => {
                self.browser.toggle_location(&location);
                Task::none()
            }
        }
    }

    /// Download every avatar of the current characters in the background
    fn load_avatars(&self) -> Task<Message> {
        let urls: HashSet<&str> = self
            .browser
            .characters()
            .iter()
            .map(|character| character.image.as_str())
            .filter(|url| !url.is_empty())
            .collect();

        // Characters sharing an image share one download
        let downloads = urls.into_iter().map(|url| {
            let url = url.to_string();
            Task::perform(
                avatar::fetch_avatar(self.http.clone(), url.clone()),
                move |result| {
                    Message::AvatarLoaded(
                        url.clone(),
                        result.map(|a| image::Handle::from_rgba(a.width, a.height, a.pixels)),
                    )
                },
            )
        });

        Task::batch(downloads)
    }

    /// Line shown under the action buttons
    fn summary(&self) -> String {
        if self.browser.is_loaded() {
            format!(
                "Showing {} of {} characters",
                self.browser.filtered().len(),
                self.browser.characters().len()
            )
        } else {
            "Loading characters...".to_string()
        }
    }

    /// Build the user interface
    fn view(&self) -> Element<Message> {
        let content = column![
            ui::toolbar::toolbar(),
            text(self.summary()).size(14),
            ui::card::card_list(self.browser.filtered(), &self.avatars),
        ]
        .spacing(12)
        .padding(20)
        .width(Length::Fill)
        .height(Length::Fill);

        if self.filter_visible {
            ui::filter_panel::modal(
                content,
                ui::filter_panel::filter_panel(
                    self.browser.status_filters(),
                    self.browser.location_filters(),
                ),
                Message::CloseFilter,
            )
        } else {
            content.into()
        }
    }

    /// Escape closes the filter overlay
    fn subscription(&self) -> Subscription<Message> {
        if !self.filter_visible {
            return Subscription::none();
        }

        keyboard::on_key_press(|key, _modifiers| match key {
            keyboard::Key::Named(keyboard::key::Named::Escape) => Some(Message::CloseFilter),
            _ => None,
        })
    }

    /// Set the application theme
    fn theme(&self) -> Theme {
        self.config.theme.theme()
    }
}

fn main() -> iced::Result {
    let config = Config::parse();
    config::init_logging(&config);

    info!(
        endpoint = %config.endpoint,
        theme = ?config.theme,
        "🎨 Character Browser starting"
    );

    iced::application(
        "Character Browser",
        CharacterBrowser::update,
        CharacterBrowser::view,
    )
    .theme(CharacterBrowser::theme)
    .subscription(CharacterBrowser::subscription)
    .window_size((480.0, 860.0))
    .centered()
    .run_with(move || CharacterBrowser::new(config))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::data::{Character, Location};

    fn app() -> CharacterBrowser {
        let (app, _fetch) = CharacterBrowser::new(Config::default());
        app
    }

    fn page() -> CharacterPage {
        let character = |id: u64, status: &str, location: &str| Character {
            id,
            name: format!("Character {}", id),
            status: status.to_string(),
            location: Location {
                name: location.to_string(),
                url: String::new(),
            },
            ..Character::default()
        };

        CharacterPage {
            info: None,
            results: vec![
                character(1, "Alive", "Earth"),
                character(2, "Dead", "Mars"),
                character(3, "Alive", "Mars"),
            ],
        }
    }

    #[test]
    fn test_initial_state() {
        let app = app();
        assert!(!app.filter_visible);
        assert!(!app.browser.is_loaded());
        assert_eq!(app.summary(), "Loading characters...");
    }

    #[test]
    fn test_failed_fetch_is_swallowed() {
        let mut app = app();

        let _ = app.update(Message::CharactersLoaded(Err(FetchError::Status(503))));

        assert!(!app.browser.is_loaded());
        assert!(app.browser.filtered().is_empty());
        assert_eq!(app.summary(), "Loading characters...");
    }

    #[test]
    fn test_loaded_then_filtered() {
        let mut app = app();

        let _ = app.update(Message::CharactersLoaded(Ok(page())));
        assert_eq!(app.summary(), "Showing 3 of 3 characters");

        let _ = app.update(Message::ToggleStatus("Alive".to_string()));
        assert_eq!(app.summary(), "Showing 2 of 3 characters");

        let _ = app.update(Message::ToggleLocation("Mars".to_string()));
        assert_eq!(app.summary(), "Showing 1 of 3 characters");
        assert_eq!(app.browser.filtered()[0].id, 3);
    }

    #[test]
    fn test_filter_panel_visibility() {
        let mut app = app();

        let _ = app.update(Message::OpenFilter);
        assert!(app.filter_visible);

        let _ = app.update(Message::CloseFilter);
        assert!(!app.filter_visible);
    }

    #[test]
    fn test_sort_by_changes_nothing() {
        let mut app = app();
        let _ = app.update(Message::CharactersLoaded(Ok(page())));
        let before: Vec<u64> = app.browser.filtered().iter().map(|c| c.id).collect();

        let _ = app.update(Message::SortBy);

        let after: Vec<u64> = app.browser.filtered().iter().map(|c| c.id).collect();
        assert_eq!(before, after);
    }

    #[test]
    fn test_failed_avatar_leaves_placeholder() {
        let mut app = app();
        let _ = app.update(Message::CharactersLoaded(Ok(page())));

        let _ = app.update(Message::AvatarLoaded(
            "https://example.test/1.jpeg".to_string(),
            Err(FetchError::Status(404)),
        ));
        assert!(app.avatars.is_empty());

        let handle = image::Handle::from_rgba(1, 1, vec![0u8, 0, 0, 255]);
        let _ = app.update(Message::AvatarLoaded("https://example.test/2.jpeg".to_string(), Ok(handle)));
        assert!(app.avatars.contains_key("https://example.test/2.jpeg"));
    }

    #[test]
    fn test_avatars_for_characters_without_id_stay_apart() {
        let mut app = app();
        let anonymous = |image: &str| Character {
            name: "Unnamed".to_string(),
            image: image.to_string(),
            ..Character::default()
        };
        let _ = app.update(Message::CharactersLoaded(Ok(CharacterPage {
            info: None,
            results: vec![anonymous("https://example.test/a.png"), anonymous("https://example.test/b.png")],
        })));

        let red = image::Handle::from_rgba(1, 1, vec![255u8, 0, 0, 255]);
        let blue = image::Handle::from_rgba(1, 1, vec![0u8, 0, 255, 255]);
        let _ = app.update(Message::AvatarLoaded("https://example.test/a.png".to_string(), Ok(red.clone())));
        let _ = app.update(Message::AvatarLoaded("https://example.test/b.png".to_string(), Ok(blue.clone())));

        assert_eq!(app.avatars.len(), 2);
        let characters = app.browser.filtered();
        assert_eq!(characters[0].id, characters[1].id);
        assert_eq!(app.avatars.get(&characters[0].image).map(image::Handle::id), Some(red.id()));
        assert_eq!(app.avatars.get(&characters[1].image).map(image::Handle::id), Some(blue.id()));
    }
}

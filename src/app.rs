// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration between the landing screen and
//! the requirements deck.
//!
//! The `App` struct wires together the domains (landing sections, deck
//! navigation, signup submission, localization) and translates messages into
//! side effects like anchor scrolling or the enrollment POST. All ambient
//! mutable UI state (active screen, open modal, landing scroll offset) is
//! owned here explicitly and mutated only through dedicated handlers.

use crate::config;
use crate::error::SubmitError;
use crate::i18n::fluent::I18n;
use crate::signup;
use crate::ui::deck::{self, slides};
use crate::ui::notifications::{Manager as NotificationManager, Notification, Toast};
use crate::ui::sections::{self, SectionId};
use crate::ui::state::NavHideTimeout;
use crate::ui::theming::ThemeMode;
use crate::ui::{beta_modal, carousel_modal, navbar};
use iced::widget::scrollable::RelativeOffset;
use iced::widget::{operation, Column, Container, Id, Scrollable, Stack};
use iced::{event, keyboard, mouse, time, window, Element, Length, Subscription, Task, Theme};
use std::fmt;
use std::time::Instant;

/// Root Iced application state bridging the landing experience, the deck,
/// and the two modal dialogs.
pub struct App {
    pub i18n: I18n,
    screen: Screen,
    modal: Option<Modal>,
    /// Deck controller; exists only while the deck screen is mounted so the
    /// slide index resets on re-entry.
    deck: Option<deck::State>,
    beta: beta_modal::State,
    carousel: carousel_modal::State,
    notifications: NotificationManager,
    /// Landing scroll offset, tracked for the navbar's condensed style.
    landing_scroll: f32,
    theme_mode: ThemeMode,
    nav_hide: NavHideTimeout,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Screens the user can navigate between.
pub enum Screen {
    Landing,
    Deck,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Modal dialogs that can cover the landing screen.
pub enum Modal {
    Beta,
    SneakPeek,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("screen", &self.screen)
            .field("modal", &self.modal)
            .finish()
    }
}

/// Top-level messages consumed by [`App::update`]. The variants forward
/// lower-level component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    Navbar(navbar::Message),
    Section(sections::Message),
    Deck(deck::Message),
    Beta(beta_modal::Message),
    Carousel(carousel_modal::Message),
    /// Outcome of the in-flight signup submission.
    SignupCompleted(Result<(), SubmitError>),
    Notification(crate::ui::notifications::NotificationMessage),
    LandingScrolled(f32),
    RawEvent {
        window: window::Id,
        event: event::Event,
    },
    Tick(Instant), // Periodic tick for chrome auto-hide and toast expiry
}

/// Runtime flags passed in from the CLI or launcher to tweak startup behavior.
#[derive(Debug, Default, Clone)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `fr`, `en-US`).
    pub lang: Option<String>,
    /// Optional directory containing Fluent `.ftl` files for custom builds.
    pub i18n_dir: Option<String>,
    /// Open the requirements deck directly instead of the landing screen.
    pub start_deck: bool,
}

pub const WINDOW_DEFAULT_WIDTH: u32 = 1280;
pub const WINDOW_DEFAULT_HEIGHT: u32 = 800;
pub const MIN_WINDOW_WIDTH: u32 = 900;
pub const MIN_WINDOW_HEIGHT: u32 = 650;

const LANDING_SCROLLABLE_ID: &str = "landing";

/// Builds the window settings
pub fn window_settings() -> window::Settings {
    let icon = crate::icon::load_window_icon();

    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        icon,
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    iced::application(move || App::new(flags.clone()), App::update, App::view)
        .title(|state: &App| state.title())
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl Default for App {
    fn default() -> Self {
        Self {
            i18n: I18n::default(),
            screen: Screen::Landing,
            modal: None,
            deck: None,
            beta: beta_modal::State::default(),
            carousel: carousel_modal::State::default(),
            notifications: NotificationManager::new(),
            landing_scroll: 0.0,
            theme_mode: ThemeMode::default(),
            nav_hide: NavHideTimeout::default(),
        }
    }
}

impl App {
    /// Initializes application state from persisted preferences and launcher
    /// flags.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let config = config::load().unwrap_or_default();
        let i18n = I18n::new(flags.lang.clone(), flags.i18n_dir.clone(), &config);

        let mut app = App {
            i18n,
            ..Self::default()
        };

        app.theme_mode = config.theme_mode;
        app.nav_hide =
            NavHideTimeout::new(config.nav_hide_secs.unwrap_or(config::DEFAULT_NAV_HIDE_SECS));

        if flags.start_deck {
            app.enter_deck();
        }

        (app, Task::none())
    }

    fn title(&self) -> String {
        self.i18n.tr("window-title")
    }

    fn theme(&self) -> Theme {
        if self.theme_mode.is_dark() {
            Theme::Dark
        } else {
            Theme::Light
        }
    }

    fn subscription(&self) -> Subscription<Message> {
        // Keyboard input and pointer movement arrive as raw events; the
        // update loop routes them by screen. Events captured by a focused
        // widget (e.g. a form input) are not forwarded.
        let event_subscription = event::listen_with(|event, status, window_id| {
            let relevant = matches!(event, event::Event::Keyboard(_))
                || matches!(
                    event,
                    event::Event::Mouse(mouse::Event::CursorMoved { .. })
                );
            match (relevant, status) {
                (true, event::Status::Ignored) => Some(Message::RawEvent {
                    window: window_id,
                    event,
                }),
                _ => None,
            }
        });

        // Periodic tick while the deck chrome can auto-hide or while toasts
        // are waiting to expire.
        let tick_subscription = if self.screen == Screen::Deck || self.notifications.has_notifications()
        {
            time::every(std::time::Duration::from_millis(100)).map(Message::Tick)
        } else {
            Subscription::none()
        };

        Subscription::batch([event_subscription, tick_subscription])
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Navbar(navbar_message) => self.handle_navbar_event(navbar::update(navbar_message)),
            Message::Section(section_message) => self.handle_section_message(section_message),
            Message::Deck(deck_message) => self.handle_deck_message(deck_message),
            Message::Beta(beta_message) => self.handle_beta_message(beta_message),
            Message::Carousel(carousel_message) => {
                match self.carousel.update(carousel_message) {
                    carousel_modal::Event::None => {}
                    carousel_modal::Event::Close => self.modal = None,
                }
                Task::none()
            }
            Message::SignupCompleted(result) => self.handle_signup_completed(&result),
            Message::Notification(notification_message) => {
                self.notifications.handle_message(&notification_message);
                Task::none()
            }
            Message::LandingScrolled(offset) => {
                self.landing_scroll = offset;
                Task::none()
            }
            Message::RawEvent { event, .. } => self.handle_raw_event(event),
            Message::Tick(_instant) => {
                if let Some(deck) = self.deck.as_mut() {
                    deck.handle(deck::NavMessage::Tick);
                }
                self.notifications.tick();
                Task::none()
            }
        }
    }

    fn handle_navbar_event(&mut self, event: navbar::Event) -> Task<Message> {
        match event {
            navbar::Event::JumpTo(section) => self.scroll_to_section(section),
            navbar::Event::OpenSneakPeek => {
                self.open_sneak_peek();
                Task::none()
            }
            navbar::Event::OpenBeta => {
                self.modal = Some(Modal::Beta);
                Task::none()
            }
        }
    }

    fn handle_section_message(&mut self, message: sections::Message) -> Task<Message> {
        match message {
            sections::Message::OpenBeta => self.modal = Some(Modal::Beta),
            sections::Message::OpenSneakPeek => self.open_sneak_peek(),
            sections::Message::OpenDeck => self.enter_deck(),
        }
        Task::none()
    }

    fn handle_deck_message(&mut self, message: deck::Message) -> Task<Message> {
        match message {
            deck::Message::Nav(nav) => {
                if let Some(deck) = self.deck.as_mut() {
                    deck.handle(nav);
                }
            }
            deck::Message::GoHome => self.leave_deck(),
        }
        Task::none()
    }

    fn handle_beta_message(&mut self, message: beta_modal::Message) -> Task<Message> {
        match self.beta.update(message) {
            beta_modal::Event::None => Task::none(),
            beta_modal::Event::Close => {
                self.modal = None;
                Task::none()
            }
            beta_modal::Event::Submit(request) => {
                Task::perform(signup::submit(request), Message::SignupCompleted)
            }
        }
    }

    fn handle_signup_completed(
        &mut self,
        result: &Result<(), SubmitError>,
    ) -> Task<Message> {
        self.beta.submission_finished(result);
        match result {
            Ok(()) => {
                if self.modal == Some(Modal::Beta) {
                    self.modal = None;
                }
                // A delivered application starts the next visitor fresh.
                self.beta = beta_modal::State::default();
                self.notifications
                    .push(Notification::success("notification-signup-sent"));
            }
            Err(err) => {
                self.notifications.push(Notification::error(err.i18n_key()));
            }
        }
        Task::none()
    }

    /// Routes raw keyboard and pointer events by screen.
    fn handle_raw_event(&mut self, event: event::Event) -> Task<Message> {
        match self.screen {
            Screen::Deck => self.handle_deck_raw_event(event),
            Screen::Landing => {
                if let event::Event::Keyboard(keyboard::Event::KeyPressed {
                    key: keyboard::Key::Named(keyboard::key::Named::Escape),
                    ..
                }) = event
                {
                    self.modal = None;
                }
                Task::none()
            }
        }
    }

    fn handle_deck_raw_event(&mut self, event: event::Event) -> Task<Message> {
        // Dismissal is the app's job, not the controller's.
        if let event::Event::Keyboard(keyboard::Event::KeyPressed {
            key: keyboard::Key::Named(keyboard::key::Named::Escape),
            ..
        }) = event
        {
            self.leave_deck();
            return Task::none();
        }

        let Some(deck) = self.deck.as_mut() else {
            return Task::none();
        };

        match event {
            event::Event::Keyboard(keyboard::Event::KeyPressed { key, .. }) => match key {
                keyboard::Key::Named(keyboard::key::Named::ArrowRight)
                | keyboard::Key::Named(keyboard::key::Named::Space) => {
                    deck.handle(deck::NavMessage::Next);
                }
                keyboard::Key::Named(keyboard::key::Named::ArrowLeft) => {
                    deck.handle(deck::NavMessage::Previous);
                }
                keyboard::Key::Named(keyboard::key::Named::Home) => {
                    deck.handle(deck::NavMessage::First);
                }
                keyboard::Key::Named(keyboard::key::Named::End) => {
                    deck.handle(deck::NavMessage::Last);
                }
                _ => {}
            },
            event::Event::Mouse(mouse::Event::CursorMoved { position }) => {
                deck.handle(deck::NavMessage::PointerMoved(position));
            }
            _ => {}
        }
        Task::none()
    }

    fn scroll_to_section(&mut self, section: SectionId) -> Task<Message> {
        operation::snap_to(
            Id::new(LANDING_SCROLLABLE_ID),
            RelativeOffset {
                x: 0.0,
                y: section.anchor_fraction(),
            },
        )
    }

    fn open_sneak_peek(&mut self) {
        // The carousel always opens on the first frame, like a fresh mount.
        self.carousel = carousel_modal::State::default();
        self.modal = Some(Modal::SneakPeek);
    }

    fn enter_deck(&mut self) {
        self.modal = None;
        self.deck = Some(deck::State::new(
            slides::total(),
            self.nav_hide.as_duration(),
        ));
        self.screen = Screen::Deck;
    }

    fn leave_deck(&mut self) {
        if let Some(deck) = self.deck.as_mut() {
            deck.dispose();
        }
        self.deck = None;
        self.screen = Screen::Landing;
    }

    fn view(&self) -> Element<'_, Message> {
        let screen: Element<'_, Message> = match self.screen {
            Screen::Landing => self.landing_view(),
            Screen::Deck => match &self.deck {
                Some(deck_state) => deck::view(
                    deck::ViewContext { i18n: &self.i18n },
                    deck_state,
                )
                .map(Message::Deck),
                // Unreachable while the screen/deck pair is kept in sync.
                None => Container::new(iced::widget::Text::new(""))
                    .width(Length::Fill)
                    .height(Length::Fill)
                    .into(),
            },
        };

        let toasts = Toast::view_overlay(&self.notifications, &self.i18n).map(Message::Notification);

        Stack::new().push(screen).push(toasts).into()
    }

    fn landing_view(&self) -> Element<'_, Message> {
        let ctx = sections::ViewContext { i18n: &self.i18n };

        let content: Element<'_, sections::Message> = Column::new()
            .spacing(crate::ui::design_tokens::spacing::SECTION)
            .padding([0.0, crate::ui::design_tokens::spacing::SECTION])
            .max_width(crate::ui::design_tokens::sizing::CONTENT_WIDTH)
            .push(sections::hero::view(&ctx))
            .push(sections::problem::view(&ctx))
            .push(sections::solution::view(&ctx))
            .push(sections::features::view(&ctx))
            .push(sections::impact::view(&ctx))
            .push(sections::roadmap::view(&ctx))
            .push(sections::cta::view(&ctx))
            .push(sections::footer::view(&ctx))
            .into();

        let page = Scrollable::new(
            Container::new(content.map(Message::Section))
                .width(Length::Fill)
                .align_x(iced::alignment::Horizontal::Center),
        )
        .id(Id::new(LANDING_SCROLLABLE_ID))
        .on_scroll(|viewport| Message::LandingScrolled(viewport.absolute_offset().y))
        .width(Length::Fill)
        .height(Length::Fill);

        let bar = navbar::view(navbar::ViewContext {
            i18n: &self.i18n,
            condensed: self.landing_scroll > navbar::SCROLL_THRESHOLD,
        })
        .map(Message::Navbar);

        let mut layers = Stack::new()
            .push(
                Container::new(page)
                    .width(Length::Fill)
                    .height(Length::Fill)
                    .style(landing_background),
            )
            .push(Container::new(bar).width(Length::Fill));

        match self.modal {
            Some(Modal::Beta) => {
                layers = layers.push(beta_modal::view(&self.i18n, &self.beta).map(Message::Beta));
            }
            Some(Modal::SneakPeek) => {
                layers = layers
                    .push(carousel_modal::view(&self.i18n, &self.carousel).map(Message::Carousel));
            }
            None => {}
        }

        layers.into()
    }
}

fn landing_background(_theme: &Theme) -> iced::widget::container::Style {
    iced::widget::container::Style {
        background: Some(iced::Background::Color(
            crate::ui::design_tokens::palette::DEEP,
        )),
        text_color: Some(crate::ui::design_tokens::palette::TEXT_PRIMARY),
        ..Default::default()
    }
}

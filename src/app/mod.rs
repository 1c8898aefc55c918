// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration.
//!
//! The `App` struct wires the demo screen to the snackbar host and keeps
//! localization and theme settings loaded from the config file.

pub mod config;
mod message;
pub mod paths;
mod subscription;
mod view;

pub use message::{Flags, Message};

use config::Config;
use crate::i18n::fluent::I18n;
use crate::snackbar::{Color, DisplayDuration, SnackbarBuilder, Text};
use crate::ui::theming::ThemeMode;
use crate::ui::{demo_screen, snackbar};
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;

/// Background of the startup prompt shown when settings cannot be read.
const CONFIG_WARNING_COLOR: Color = Color::from_rgb8(0xE5, 0x39, 0x35);

/// Root Iced application state.
pub struct App {
    pub i18n: I18n,
    /// Resolved once at startup; `System` mode queries the OS only here.
    theme: Theme,
    /// Snackbar host for the demo screen.
    snackbars: snackbar::Manager,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("theme", &self.theme)
            .field("has_snackbar", &self.snackbars.has_snackbar())
            .finish()
    }
}

pub const WINDOW_DEFAULT_HEIGHT: u32 = 560;
pub const WINDOW_DEFAULT_WIDTH: u32 = 480;
pub const MIN_WINDOW_HEIGHT: u32 = 400;
pub const MIN_WINDOW_WIDTH: u32 = 360;

/// Builds the window settings
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // iced 0.14 requires a `Fn` boot function; flags are consumed on the first call
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state.borrow_mut().take().unwrap_or_default();
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl Default for App {
    fn default() -> Self {
        Self {
            i18n: I18n::default(),
            theme: ThemeMode::System.theme(),
            snackbars: snackbar::Manager::new(),
        }
    }
}

impl App {
    /// Initializes application state from `Flags` and the config file.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        paths::init_cli_override(flags.config_dir);
        let (config, config_warning) = config::load();
        (Self::from_config(flags.lang, &config, config_warning), Task::none())
    }

    /// Builds the state from loaded settings, queuing a prompt for `config_warning`.
    fn from_config(lang: Option<String>, config: &Config, config_warning: Option<String>) -> Self {
        let i18n = I18n::new(lang, config);
        let theme = config.general.theme_mode.theme();
        tracing::info!(locale = %i18n.current_locale(), ?theme, "starting snackbar demo");

        let mut app = App {
            i18n,
            theme,
            snackbars: snackbar::Manager::with_metrics(config.snackbar.metrics()),
        };

        if let Some(key) = config_warning {
            SnackbarBuilder::with_duration(
                &mut app.snackbars,
                Text::resource(key),
                DisplayDuration::Indefinite,
            )
            .system_prompt(CONFIG_WARNING_COLOR)
            .set_action_text(Text::resource("snackbar-action-ok"), None)
            .show();
        }

        app
    }

    fn title(&self) -> String {
        self.i18n.tr("window-title")
    }

    fn theme(&self) -> Theme {
        self.theme.clone()
    }

    fn subscription(&self) -> Subscription<Message> {
        subscription::create_tick_subscription(self.snackbars.has_snackbar())
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Demo(demo_message) => {
                demo_screen::show(demo_message, &mut self.snackbars);
            }
            Message::Snackbar(snackbar_message) => {
                self.snackbars.handle_message(&snackbar_message);
            }
        }
        Task::none()
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            snackbars: &self.snackbars,
        })
    }
}

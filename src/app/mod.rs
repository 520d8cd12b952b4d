// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration between the gallery and detail
//! screens.
//!
//! The `App` owns every piece of state: the gallery pager lives for the whole
//! process, while the detail screen state exists only while that screen is
//! shown. Network work runs as `Task`s against the shared [`Gateway`] and
//! comes back as [`Message`]s.
//!
//! [`Gateway`]: crate::api::Gateway

mod message;
pub mod paths;
mod screen;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};
pub use screen::Screen;

use crate::api::{HttpGateway, SharedGateway};
use crate::config::{self, Config};
use crate::gallery::thumbnails::ThumbnailCache;
use crate::gallery::{GalleryPager, ListingParams};
use crate::i18n::fluent::I18n;
use crate::ui::detail;
use crate::ui::notifications;
use crate::ui::theming::ThemeMode;
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;
use std::sync::Arc;

/// Root Iced application state.
pub struct App {
    pub i18n: I18n,
    screen: Screen,
    theme_mode: ThemeMode,
    /// `None` when the HTTP client could not be built; requests then fail
    /// with a network error notification.
    gateway: Option<SharedGateway>,
    pager: GalleryPager,
    thumbnails: ThumbnailCache,
    detail: Option<detail::State>,
    /// Counter identifying detail screen visits.
    detail_sessions: u64,
    notifications: notifications::Manager,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("screen", &self.screen)
            .field("images", &self.pager.images().len())
            .field("phase", &self.pager.phase())
            .finish()
    }
}

pub const WINDOW_DEFAULT_HEIGHT: u32 = 720;
pub const WINDOW_DEFAULT_WIDTH: u32 = 560;
pub const MIN_WINDOW_HEIGHT: u32 = 480;
pub const MIN_WINDOW_WIDTH: u32 = 520;

fn window_settings() -> window::Settings {
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

    // iced calls `boot` through `Fn`; the flags are consumed on the first call.
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

impl App {
    /// Loads the configuration, builds the gateway and requests the first
    /// page.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let (mut config, config_warning) = config::load();
        if let Some(base_url) = flags.base_url {
            config.backend.base_url = Some(base_url);
        }

        let i18n = I18n::new(flags.lang, &config);

        let gateway = match HttpGateway::from_config(&config.backend) {
            Ok(gateway) => Some(Arc::new(gateway) as SharedGateway),
            Err(err) => {
                tracing::error!(error = %err, "failed to build HTTP client");
                None
            }
        };

        let mut app = Self::with_gateway(&config, i18n, gateway);

        if let Some(key) = config_warning {
            app.notifications
                .push(notifications::Notification::warning(key));
        }

        let task = update::load_next_page(&mut app.update_context());
        (app, task)
    }

    fn with_gateway(config: &Config, i18n: I18n, gateway: Option<SharedGateway>) -> Self {
        Self {
            i18n,
            screen: Screen::Gallery,
            theme_mode: config.general.theme_mode,
            gateway,
            pager: GalleryPager::new(ListingParams::from_config(&config.backend)),
            thumbnails: ThumbnailCache::new(),
            detail: None,
            detail_sessions: 0,
            notifications: notifications::Manager::new(),
        }
    }

    fn update_context(&mut self) -> update::UpdateContext<'_> {
        update::UpdateContext {
            screen: &mut self.screen,
            gateway: self.gateway.as_ref(),
            pager: &mut self.pager,
            thumbnails: &mut self.thumbnails,
            detail: &mut self.detail,
            detail_sessions: &mut self.detail_sessions,
            notifications: &mut self.notifications,
        }
    }

    fn title(&self) -> String {
        let app_name = self.i18n.tr("window-title");
        match self.screen {
            Screen::Gallery => app_name,
            Screen::Detail => format!("{} - {app_name}", self.i18n.tr("detail-title")),
        }
    }

    fn theme(&self) -> Theme {
        self.theme_mode.theme()
    }

    fn subscription(&self) -> Subscription<Message> {
        Subscription::batch([
            subscription::create_event_subscription(self.screen),
            subscription::create_tick_subscription(self.notifications.has_notifications()),
        ])
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Gallery(message) => {
                update::handle_gallery_message(&mut self.update_context(), &message)
            }
            Message::Detail(message) => {
                update::handle_detail_message(&mut self.update_context(), message)
            }
            Message::PageLoaded(outcome) => {
                update::handle_page_loaded(&mut self.update_context(), outcome)
            }
            Message::ThumbnailLoaded { url, result } => {
                update::handle_thumbnail_loaded(&mut self.update_context(), &url, result)
            }
            Message::SubmissionFinished { session, result } => {
                update::handle_submission_finished(&mut self.update_context(), session, result)
            }
            Message::Notification(message) => {
                self.notifications.handle_message(&message);
                Task::none()
            }
            Message::Tick(_instant) => {
                self.notifications.tick();
                Task::none()
            }
        }
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            screen: self.screen,
            pager: &self.pager,
            thumbnails: &self.thumbnails,
            detail: self.detail.as_ref(),
            notifications: &self.notifications,
        })
    }
}

// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.

use super::{Message, Screen};
use crate::ui::{detail, gallery};
use iced::keyboard::{self, key::Named, Key};
use iced::{event, time, Subscription};
use std::time::Duration;

/// Keyboard shortcuts of the current screen:
/// - Gallery: `F5` refreshes
/// - Detail: `Escape` goes back
///
/// Keys already captured by a widget (e.g. a focused text input) are ignored.
pub fn create_event_subscription(screen: Screen) -> Subscription<Message> {
    match screen {
        Screen::Gallery => event::listen_with(|event, status, _window| {
            if status == event::Status::Captured {
                return None;
            }
            match event {
                event::Event::Keyboard(keyboard::Event::KeyPressed {
                    key: Key::Named(Named::F5),
                    ..
                }) => Some(Message::Gallery(gallery::Message::RefreshPressed)),
                _ => None,
            }
        }),
        Screen::Detail => event::listen_with(|event, status, _window| {
            if status == event::Status::Captured {
                return None;
            }
            match event {
                event::Event::Keyboard(keyboard::Event::KeyPressed {
                    key: Key::Named(Named::Escape),
                    ..
                }) => Some(Message::Detail(detail::Message::BackPressed)),
                _ => None,
            }
        }),
    }
}

/// Periodic tick driving notification auto-dismiss; idle when no toast is
/// shown.
pub fn create_tick_subscription(has_notifications: bool) -> Subscription<Message> {
    if has_notifications {
        time::every(Duration::from_millis(100)).map(Message::Tick)
    } else {
        Subscription::none()
    }
}

// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.

use super::{Message, Screen};
use crate::gallery::thumbnails::ThumbnailCache;
use crate::gallery::GalleryPager;
use crate::i18n::fluent::I18n;
use crate::ui::detail;
use crate::ui::gallery::{self, ViewContext as GalleryViewContext};
use crate::ui::notifications::{self, Toast};
use iced::widget::{Container, Stack};
use iced::{Element, Length};

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub screen: Screen,
    pub pager: &'a GalleryPager,
    pub thumbnails: &'a ThumbnailCache,
    pub detail: Option<&'a detail::State>,
    pub notifications: &'a notifications::Manager,
}

/// Renders the active screen with the toast overlay on top.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let current_view: Element<'_, Message> = match (ctx.screen, ctx.detail) {
        (Screen::Detail, Some(state)) => state
            .view(detail::ViewContext {
                i18n: ctx.i18n,
                thumbnails: ctx.thumbnails,
            })
            .map(Message::Detail),
        // A detail screen without state falls back to the gallery.
        (Screen::Gallery | Screen::Detail, _) => gallery::view(GalleryViewContext {
            i18n: ctx.i18n,
            pager: ctx.pager,
            thumbnails: ctx.thumbnails,
        })
        .map(Message::Gallery),
    };

    let base = Container::new(current_view)
        .width(Length::Fill)
        .height(Length::Fill);

    let toasts = Toast::view_overlay(ctx.notifications, ctx.i18n).map(Message::Notification);

    Stack::new()
        .push(base)
        .push(toasts)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

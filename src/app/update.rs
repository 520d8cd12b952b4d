// SPDX-License-Identifier: MPL-2.0
//! Update logic and message handlers for the application.
//!
//! Handlers mutate the state borrowed through [`UpdateContext`] and return
//! the background work (listing requests, image downloads, submissions) as
//! `Task`s.

use super::{Message, Screen};
use crate::api::SharedGateway;
use crate::error::Error;
use crate::gallery::thumbnails::ThumbnailCache;
use crate::gallery::{self, GalleryPager, PageOutcome, PageRequest};
use crate::submission::{self, SubmissionPayload, SubmitOutcome};
use crate::ui::detail::{self, Event as DetailEvent};
use crate::ui::gallery::{self as gallery_screen, Event as GalleryEvent};
use crate::ui::notifications::{self, Notification};
use iced::Task;

/// Mutable view of the application state used by the handlers.
pub struct UpdateContext<'a> {
    pub screen: &'a mut Screen,
    pub gateway: Option<&'a SharedGateway>,
    pub pager: &'a mut GalleryPager,
    pub thumbnails: &'a mut ThumbnailCache,
    pub detail: &'a mut Option<detail::State>,
    pub detail_sessions: &'a mut u64,
    pub notifications: &'a mut notifications::Manager,
}

fn gateway_unavailable() -> Error {
    Error::Http("HTTP client unavailable".to_string())
}

pub fn handle_gallery_message(
    ctx: &mut UpdateContext<'_>,
    message: &gallery_screen::Message,
) -> Task<Message> {
    match gallery_screen::update(message) {
        GalleryEvent::None => Task::none(),
        GalleryEvent::LoadMore => load_next_page(ctx),
        GalleryEvent::Refresh => refresh(ctx),
        GalleryEvent::OpenDetail(url) => {
            open_detail(ctx, url);
            Task::none()
        }
    }
}

/// Requests the next page unless one is in flight or the list is exhausted.
pub fn load_next_page(ctx: &mut UpdateContext<'_>) -> Task<Message> {
    match ctx.pager.load_next_page() {
        Some(request) => fetch_page_task(ctx.gateway, request),
        None => Task::none(),
    }
}

pub fn refresh(ctx: &mut UpdateContext<'_>) -> Task<Message> {
    match ctx.pager.refresh() {
        Some(request) => fetch_page_task(ctx.gateway, request),
        None => Task::none(),
    }
}

fn fetch_page_task(gateway: Option<&SharedGateway>, request: PageRequest) -> Task<Message> {
    let Some(gateway) = gateway.cloned() else {
        return Task::done(Message::PageLoaded(PageOutcome::Failed(gateway_unavailable())));
    };
    Task::perform(
        async move { gallery::fetch_page(gateway.as_ref(), &request).await },
        Message::PageLoaded,
    )
}

pub fn handle_page_loaded(ctx: &mut UpdateContext<'_>, outcome: PageOutcome) -> Task<Message> {
    match &outcome {
        PageOutcome::Failed(err) => ctx.notifications.push(Notification::from_error(err)),
        PageOutcome::Page(_) => ctx.notifications.clear_key("notification-network-error"),
        PageOutcome::Malformed => {}
    }

    let replaces_list =
        ctx.pager.is_refreshing() && matches!(&outcome, PageOutcome::Page(records) if !records.is_empty());

    ctx.pager.complete(outcome);
    if replaces_list {
        ctx.thumbnails
            .retain_listed(ctx.pager.images().iter().map(|record| record.remote_image_url.as_str()));
    }
    request_thumbnails(ctx)
}

/// Starts downloads for every listed image not seen before.
fn request_thumbnails(ctx: &mut UpdateContext<'_>) -> Task<Message> {
    let Some(gateway) = ctx.gateway else {
        return Task::none();
    };

    let mut downloads = Vec::new();
    for record in ctx.pager.images() {
        let url = &record.remote_image_url;
        if !ctx.thumbnails.request(url) {
            continue;
        }
        let gateway = gateway.clone();
        let url = url.clone();
        downloads.push(Task::perform(
            async move {
                let result = gateway.download(&url).await;
                (url, result)
            },
            |(url, result)| Message::ThumbnailLoaded { url, result },
        ));
    }

    if !downloads.is_empty() {
        tracing::debug!(count = downloads.len(), "downloading thumbnails");
    }
    Task::batch(downloads)
}

pub fn handle_thumbnail_loaded(
    ctx: &mut UpdateContext<'_>,
    url: &str,
    result: Result<Vec<u8>, Error>,
) -> Task<Message> {
    ctx.thumbnails.finish(url, result);
    Task::none()
}

fn open_detail(ctx: &mut UpdateContext<'_>, image_url: String) {
    *ctx.detail_sessions += 1;
    tracing::debug!(%image_url, session = *ctx.detail_sessions, "opening detail screen");
    *ctx.detail = Some(detail::State::new(image_url, *ctx.detail_sessions));
    *ctx.screen = Screen::Detail;
}

fn close_detail(ctx: &mut UpdateContext<'_>) {
    *ctx.detail = None;
    *ctx.screen = Screen::Gallery;
}

pub fn handle_detail_message(
    ctx: &mut UpdateContext<'_>,
    message: detail::Message,
) -> Task<Message> {
    let Some(state) = ctx.detail.as_mut() else {
        return Task::none();
    };
    let session = state.session();

    match state.handle_message(message) {
        DetailEvent::None => Task::none(),
        DetailEvent::Back => {
            close_detail(ctx);
            Task::none()
        }
        DetailEvent::Submit(payload) => submit_task(ctx.gateway, session, payload),
    }
}

fn submit_task(
    gateway: Option<&SharedGateway>,
    session: u64,
    payload: SubmissionPayload,
) -> Task<Message> {
    let Some(gateway) = gateway.cloned() else {
        return Task::done(Message::SubmissionFinished {
            session,
            result: Err(gateway_unavailable()),
        });
    };
    tracing::info!(session, "submitting contact form");
    Task::perform(
        async move { submission::submit(gateway.as_ref(), payload).await },
        move |result| Message::SubmissionFinished { session, result },
    )
}

pub fn handle_submission_finished(
    ctx: &mut UpdateContext<'_>,
    session: u64,
    result: Result<(), Error>,
) -> Task<Message> {
    let Some(state) = ctx.detail.as_mut().filter(|s| s.session() == session) else {
        tracing::debug!(session, "submission result for a closed detail screen ignored");
        return Task::none();
    };

    match state.finish_submit(result) {
        Some(SubmitOutcome::Succeeded) => {
            ctx.notifications
                .push(Notification::success("detail-submit-success"));
            close_detail(ctx);
        }
        Some(SubmitOutcome::Failed(err)) => {
            ctx.notifications.push(Notification::from_error(&err));
        }
        None => {}
    }
    Task::none()
}

// SPDX-License-Identifier: MPL-2.0
//! Gallery screen: a two-column grid of remote images that asks for the next
//! page as the user scrolls towards the end.
//!
//! The screen holds no state of its own. It renders the [`GalleryPager`] and
//! the [`ThumbnailCache`] owned by the application and reports user intent as
//! [`Event`]s.

use crate::config::END_REACHED_THRESHOLD;
use crate::gallery::thumbnails::{Thumbnail, ThumbnailCache};
use crate::gallery::{GalleryPager, ImageRecord, PagerPhase};
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{palette, radius, sizing, spacing, typography};
use iced::widget::scrollable::Viewport;
use iced::widget::{button, container, image, scrollable, text, Column, Container, Row, Space};
use iced::{alignment, Border, ContentFit, Element, Length, Theme};

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub pager: &'a GalleryPager,
    pub thumbnails: &'a ThumbnailCache,
}

#[derive(Debug, Clone)]
pub enum Message {
    Scrolled {
        offset_y: f32,
        viewport_height: f32,
        content_height: f32,
    },
    LoadMorePressed,
    RefreshPressed,
    TileSelected(String),
}

/// Events propagated to the parent application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    None,
    LoadMore,
    Refresh,
    OpenDetail(String),
}

#[must_use]
pub fn update(message: &Message) -> Event {
    match message {
        Message::Scrolled {
            offset_y,
            viewport_height,
            content_height,
        } => {
            if is_near_end(
                *offset_y,
                *viewport_height,
                *content_height,
                END_REACHED_THRESHOLD,
            ) {
                Event::LoadMore
            } else {
                Event::None
            }
        }
        Message::LoadMorePressed => Event::LoadMore,
        Message::RefreshPressed => Event::Refresh,
        Message::TileSelected(url) => Event::OpenDetail(url.clone()),
    }
}

/// Whether the unseen part below the viewport is within `threshold` visible
/// heights.
#[must_use]
pub fn is_near_end(offset_y: f32, viewport_height: f32, content_height: f32, threshold: f32) -> bool {
    if viewport_height <= 0.0 {
        return false;
    }
    let remaining = content_height - (offset_y + viewport_height);
    remaining <= viewport_height * threshold
}

/// Tile height for a record shown at [`sizing::TILE_WIDTH`].
#[must_use]
pub fn tile_height(record: &ImageRecord) -> f32 {
    (sizing::TILE_WIDTH / record.aspect_ratio()).clamp(sizing::TILE_MIN_HEIGHT, sizing::TILE_MAX_HEIGHT)
}

/// Splits records over two columns, each going to the currently shorter one.
fn masonry(records: &[ImageRecord]) -> [Vec<&ImageRecord>; 2] {
    let mut columns: [Vec<&ImageRecord>; 2] = [Vec::new(), Vec::new()];
    let mut heights = [0.0_f32; 2];
    for record in records {
        let target = usize::from(heights[1] < heights[0]);
        heights[target] += tile_height(record) + spacing::XS;
        columns[target].push(record);
    }
    columns
}

#[must_use]
#[allow(clippy::needless_pass_by_value)]
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let images = ctx.pager.images();

    let refresh_button = button(text(ctx.i18n.tr("gallery-refresh-button")).size(typography::BODY))
        .on_press_maybe((!ctx.pager.is_loading()).then_some(Message::RefreshPressed));

    let header = Row::new()
        .spacing(spacing::SM)
        .align_y(alignment::Vertical::Center)
        .push(text(ctx.i18n.tr("gallery-title")).size(typography::TITLE_MD))
        .push(
            text(ctx.i18n.tr_with_args(
                "gallery-count",
                &[("count", images.len().to_string().as_str())],
            ))
            .size(typography::CAPTION),
        )
        .push(Space::new().width(Length::Fill))
        .push(refresh_button);

    let body: Element<'_, Message> = if images.is_empty() {
        let key = if ctx.pager.is_loading() {
            "gallery-loading"
        } else {
            "gallery-empty"
        };
        Container::new(text(ctx.i18n.tr(key)).size(typography::BODY))
            .width(Length::Fill)
            .height(Length::Fill)
            .center_x(Length::Fill)
            .center_y(Length::Fill)
            .into()
    } else {
        let [left, right] = masonry(images);
        let grid = Row::new()
            .spacing(spacing::XS)
            .push(tile_column(&ctx, left))
            .push(tile_column(&ctx, right));

        let content = Column::new()
            .spacing(spacing::MD)
            .align_x(alignment::Horizontal::Center)
            .push(grid)
            .push(footer(&ctx));

        scrollable(
            Container::new(content)
                .width(Length::Fill)
                .center_x(Length::Fill)
                .padding(spacing::MD),
        )
        .width(Length::Fill)
        .height(Length::Fill)
        .on_scroll(|viewport: Viewport| Message::Scrolled {
            offset_y: viewport.absolute_offset().y,
            viewport_height: viewport.bounds().height,
            content_height: viewport.content_bounds().height,
        })
        .into()
    };

    Column::new()
        .spacing(spacing::SM)
        .padding(spacing::MD)
        .push(header)
        .push(body)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

fn tile_column<'a>(ctx: &ViewContext<'a>, records: Vec<&'a ImageRecord>) -> Element<'a, Message> {
    records
        .into_iter()
        .fold(Column::new().spacing(spacing::XS), |column, record| {
            column.push(tile(ctx, record))
        })
        .width(Length::Fixed(sizing::TILE_WIDTH))
        .into()
}

fn tile<'a>(ctx: &ViewContext<'a>, record: &'a ImageRecord) -> Element<'a, Message> {
    let height = tile_height(record);
    let url = record.remote_image_url.as_str();

    let content: Element<'a, Message> = match ctx.thumbnails.get(url) {
        Some(Thumbnail::Ready(handle)) => image(handle.clone())
            .width(Length::Fill)
            .height(Length::Fixed(height))
            .content_fit(ContentFit::Cover)
            .into(),
        Some(Thumbnail::Failed) => placeholder(ctx.i18n.tr("gallery-image-unavailable"), height),
        Some(Thumbnail::Pending) | None => placeholder("…".to_string(), height),
    };

    button(content)
        .padding(0)
        .width(Length::Fill)
        .on_press(Message::TileSelected(url.to_string()))
        .style(|theme: &Theme, status| {
            let mut style = button::text(theme, status);
            style.border = Border {
                radius: radius::SM.into(),
                ..Default::default()
            };
            style
        })
        .into()
}

fn placeholder<'a>(label: String, height: f32) -> Element<'a, Message> {
    Container::new(text(label).size(typography::CAPTION))
        .width(Length::Fill)
        .height(Length::Fixed(height))
        .center_x(Length::Fill)
        .center_y(Length::Fixed(height))
        .style(|_theme: &Theme| container::Style {
            border: Border {
                color: palette::GRAY_200,
                width: 1.0,
                radius: radius::SM.into(),
            },
            ..Default::default()
        })
        .into()
}

fn footer<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    match ctx.pager.phase() {
        PagerPhase::Loading => text(ctx.i18n.tr("gallery-loading"))
            .size(typography::CAPTION)
            .into(),
        PagerPhase::Exhausted => text(ctx.i18n.tr("gallery-end-reached"))
            .size(typography::CAPTION)
            .color(palette::GRAY_400)
            .into(),
        PagerPhase::Idle => button(text(ctx.i18n.tr("gallery-load-more-button")).size(typography::BODY))
            .on_press(Message::LoadMorePressed)
            .into(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(width: &str, height: &str) -> ImageRecord {
        ImageRecord {
            id: None,
            remote_image_url: format!("https://img.test/{width}x{height}.jpg"),
            width: Some(width.into()),
            height: Some(height.into()),
        }
    }

    #[test]
    fn near_end_within_half_a_viewport() {
        // 1000px of content, 400px viewport: the end is 600px away at offset 0.
        assert!(!is_near_end(0.0, 400.0, 1000.0, 0.5));
        // 200px remaining <= 0.5 * 400px
        assert!(is_near_end(400.0, 400.0, 1000.0, 0.5));
        assert!(is_near_end(600.0, 400.0, 1000.0, 0.5));
    }

    #[test]
    fn short_content_is_already_at_the_end() {
        assert!(is_near_end(0.0, 800.0, 300.0, 0.5));
    }

    #[test]
    fn zero_sized_viewport_never_triggers() {
        assert!(!is_near_end(0.0, 0.0, 1000.0, 0.5));
    }

    #[test]
    fn scroll_far_from_end_is_ignored() {
        let event = update(&Message::Scrolled {
            offset_y: 0.0,
            viewport_height: 300.0,
            content_height: 3000.0,
        });
        assert_eq!(event, Event::None);
    }

    #[test]
    fn tile_selection_opens_detail() {
        let event = update(&Message::TileSelected("https://img.test/1.jpg".into()));
        assert_eq!(event, Event::OpenDetail("https://img.test/1.jpg".into()));
        assert_eq!(update(&Message::RefreshPressed), Event::Refresh);
    }

    #[test]
    fn tile_height_follows_aspect_ratio() {
        assert_eq!(tile_height(&record("400", "400")), sizing::TILE_WIDTH);
        assert_eq!(tile_height(&record("480", "240")), sizing::TILE_WIDTH / 2.0);
        assert_eq!(tile_height(&record("10", "1000")), sizing::TILE_MAX_HEIGHT);
    }

    #[test]
    fn masonry_balances_columns() {
        let records = vec![
            record("100", "300"),
            record("300", "100"),
            record("300", "100"),
            record("300", "100"),
        ];
        let [left, right] = masonry(&records);
        assert_eq!(left.len(), 1);
        assert_eq!(right.len(), 3);
    }
}

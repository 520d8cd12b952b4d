// SPDX-License-Identifier: MPL-2.0
//! Detail screen: the selected image above a contact form.
//!
//! The state is created when the user opens an image and dropped when they
//! leave, so nothing typed here outlives the screen.

use crate::error::Error;
use crate::gallery::thumbnails::ThumbnailCache;
use crate::i18n::fluent::I18n;
use crate::submission::{
    FormField, SubmissionForm, SubmissionPayload, SubmitAttempt, SubmitOutcome,
};
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use iced::widget::{button, image, scrollable, text, text_input, Column, Container, Row, Space};
use iced::{alignment, ContentFit, Element, Length};

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub thumbnails: &'a ThumbnailCache,
}

#[derive(Debug, Clone)]
pub enum Message {
    FieldChanged(FormField, String),
    SubmitPressed,
    BackPressed,
}

/// Events propagated to the parent application.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    None,
    Submit(SubmissionPayload),
    Back,
}

#[derive(Debug, Clone)]
pub struct State {
    image_url: String,
    /// Distinguishes this visit from later ones so a result that arrives
    /// after the user left is not applied to a new form.
    session: u64,
    form: SubmissionForm,
}

impl State {
    #[must_use]
    pub fn new(image_url: String, session: u64) -> Self {
        Self {
            image_url,
            session,
            form: SubmissionForm::new(),
        }
    }

    #[must_use]
    pub fn image_url(&self) -> &str {
        &self.image_url
    }

    #[must_use]
    pub fn session(&self) -> u64 {
        self.session
    }

    #[must_use]
    pub fn form(&self) -> &SubmissionForm {
        &self.form
    }

    pub fn handle_message(&mut self, message: Message) -> Event {
        match message {
            Message::FieldChanged(field, value) => {
                self.form.set_field(field, value);
                Event::None
            }
            Message::SubmitPressed => match self.form.begin_submit(&self.image_url) {
                SubmitAttempt::Ready(payload) => Event::Submit(payload),
                SubmitAttempt::Invalid(_) | SubmitAttempt::InFlight => Event::None,
            },
            Message::BackPressed => Event::Back,
        }
    }

    pub fn finish_submit(&mut self, result: Result<(), Error>) -> Option<SubmitOutcome> {
        self.form.finish_submit(result)
    }

    #[must_use]
    #[allow(clippy::needless_pass_by_value)]
    pub fn view<'a>(&'a self, ctx: ViewContext<'a>) -> Element<'a, Message> {
        let back_button = button(
            text(format!("← {}", ctx.i18n.tr("detail-back-button"))).size(typography::BODY),
        )
        .on_press(Message::BackPressed);

        let header = Row::new()
            .spacing(spacing::SM)
            .align_y(alignment::Vertical::Center)
            .push(back_button)
            .push(text(ctx.i18n.tr("detail-title")).size(typography::TITLE_MD));

        let picture: Element<'a, Message> = match ctx.thumbnails.handle(&self.image_url) {
            Some(handle) => image(handle.clone())
                .width(Length::Fill)
                .height(Length::Fixed(sizing::DETAIL_IMAGE_HEIGHT))
                .content_fit(ContentFit::Contain)
                .into(),
            None => Container::new(text(ctx.i18n.tr("gallery-image-unavailable")))
                .width(Length::Fill)
                .height(Length::Fixed(sizing::DETAIL_IMAGE_HEIGHT))
                .center_x(Length::Fill)
                .center_y(Length::Fixed(sizing::DETAIL_IMAGE_HEIGHT))
                .into(),
        };

        let fields = FormField::ALL
            .into_iter()
            .fold(Column::new().spacing(spacing::SM), |column, field| {
                column.push(self.field(&ctx, field))
            });

        let submitting = self.form.is_submitting();
        let submit_label = if submitting {
            ctx.i18n.tr("detail-submitting")
        } else {
            ctx.i18n.tr("detail-submit-button")
        };
        let submit_button = button(text(submit_label).size(typography::BODY))
            .width(Length::Fill)
            .on_press_maybe((!submitting).then_some(Message::SubmitPressed));

        let form = Column::new()
            .spacing(spacing::MD)
            .width(Length::Fixed(sizing::FORM_WIDTH))
            .push(fields)
            .push(submit_button);

        let content = Column::new()
            .spacing(spacing::LG)
            .align_x(alignment::Horizontal::Center)
            .push(picture)
            .push(form)
            .push(Space::new().height(Length::Fixed(spacing::LG)));

        Column::new()
            .spacing(spacing::SM)
            .padding(spacing::MD)
            .push(header)
            .push(scrollable(content).width(Length::Fill).height(Length::Fill))
            .into()
    }

    /// Label, input and the field's error, if any.
    fn field<'a>(&'a self, ctx: &ViewContext<'a>, field: FormField) -> Element<'a, Message> {
        let mut column = Column::new().spacing(spacing::XXS);

        column = column.push(text(ctx.i18n.tr(field.label_key())).size(typography::BODY));

        let placeholder = ctx.i18n.tr(field.placeholder_key());
        let mut input = text_input(&placeholder, self.form.values().get(field))
            .padding(spacing::XS)
            .size(typography::BODY_LG);
        if !self.form.is_submitting() {
            input = input.on_input(move |value| Message::FieldChanged(field, value));
        }
        column = column.push(input);

        if let Some(key) = self.form.errors().get(field) {
            column = column.push(
                text(ctx.i18n.tr(key))
                    .size(typography::CAPTION)
                    .color(palette::ERROR_500),
            );
        }

        column.into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fill(state: &mut State) {
        for (field, value) in [
            (FormField::FirstName, "Ada"),
            (FormField::LastName, "Lovelace"),
            (FormField::Email, "ada@example.com"),
            (FormField::Phone, "1234567890"),
        ] {
            state.handle_message(Message::FieldChanged(field, value.into()));
        }
    }

    #[test]
    fn invalid_submit_emits_nothing() {
        let mut state = State::new("https://img.test/1.jpg".into(), 1);
        assert_eq!(state.handle_message(Message::SubmitPressed), Event::None);
        assert_eq!(state.form().errors().len(), 4);
    }

    #[test]
    fn valid_submit_emits_payload_once() {
        let mut state = State::new("https://img.test/1.jpg".into(), 1);
        fill(&mut state);

        let Event::Submit(payload) = state.handle_message(Message::SubmitPressed) else {
            panic!("expected a submission");
        };
        assert_eq!(payload.image_url, "https://img.test/1.jpg");
        assert_eq!(state.handle_message(Message::SubmitPressed), Event::None);
    }

    #[test]
    fn back_is_forwarded() {
        let mut state = State::new("https://img.test/1.jpg".into(), 1);
        assert_eq!(state.handle_message(Message::BackPressed), Event::Back);
    }
}

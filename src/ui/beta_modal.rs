// SPDX-License-Identifier: MPL-2.0
//! Beta-signup modal: the enrollment form and its submission lifecycle.
//!
//! The modal owns the field values and the single in-flight submission
//! status. Validation happens locally before anything is sent; the actual
//! POST is performed by the app through [`crate::signup::submit`], and the
//! outcome is reported back via [`State::submission_finished`]. A failed
//! transport leaves the form editable and re-submittable with the entered
//! values intact.

use crate::error::SubmitError;
use crate::i18n::fluent::I18n;
use crate::signup::{SignupRequest, SubmissionStatus};
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::icons;
use crate::ui::styles;
use iced::alignment::{Horizontal, Vertical};
use iced::widget::{button, text_input, Column, Container, Row, Text};
use iced::{Element, Length};

/// Form state for the signup modal.
#[derive(Debug, Clone, Default)]
pub struct State {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub social: String,
    pub phone: String,
    /// i18n key of the current validation error, if any.
    field_error_key: Option<&'static str>,
    status: SubmissionStatus,
}

/// Messages emitted by the signup modal.
#[derive(Debug, Clone)]
pub enum Message {
    FirstNameChanged(String),
    LastNameChanged(String),
    EmailChanged(String),
    SocialChanged(String),
    PhoneChanged(String),
    Submit,
    Close,
}

/// Events propagated to the parent application.
#[derive(Debug, Clone)]
pub enum Event {
    None,
    /// Dismiss the modal.
    Close,
    /// Validated record ready to be posted.
    Submit(SignupRequest),
}

impl State {
    /// Current submission status.
    #[must_use]
    pub fn status(&self) -> SubmissionStatus {
        self.status
    }

    /// The record assembled from the current field values.
    #[must_use]
    pub fn request(&self) -> SignupRequest {
        SignupRequest {
            first_name: self.first_name.trim().to_string(),
            last_name: self.last_name.trim().to_string(),
            email: self.email.trim().to_string(),
            social: self.social.trim().to_string(),
            phone: self.phone.trim().to_string(),
        }
    }

    /// Handle a modal message.
    pub fn update(&mut self, message: Message) -> Event {
        match message {
            Message::FirstNameChanged(value) => {
                self.first_name = value;
                Event::None
            }
            Message::LastNameChanged(value) => {
                self.last_name = value;
                Event::None
            }
            Message::EmailChanged(value) => {
                self.email = value;
                Event::None
            }
            Message::SocialChanged(value) => {
                self.social = value;
                Event::None
            }
            Message::PhoneChanged(value) => {
                self.phone = value;
                Event::None
            }
            Message::Submit => {
                if !self.status.is_editable() {
                    return Event::None;
                }
                let request = self.request();
                match request.validate() {
                    Some(error_key) => {
                        self.field_error_key = Some(error_key);
                        Event::None
                    }
                    None => {
                        self.field_error_key = None;
                        self.status = SubmissionStatus::Sending;
                        Event::Submit(request)
                    }
                }
            }
            Message::Close => Event::Close,
        }
    }

    /// Record the outcome of the in-flight submission.
    pub fn submission_finished(&mut self, result: &Result<(), SubmitError>) {
        self.status = match result {
            Ok(()) => SubmissionStatus::Sent,
            Err(_) => SubmissionStatus::Failed,
        };
    }
}

/// Render the signup modal over a dimmed backdrop.
pub fn view<'a>(i18n: &'a I18n, state: &'a State) -> Element<'a, Message> {
    let editable = state.status().is_editable();

    let kicker = Row::new()
        .spacing(spacing::XS)
        .align_y(Vertical::Center)
        .push(
            icons::sized(icons::terminal(), sizing::ICON_SM)
                .style(styles::overlay::icon(palette::CYAN)),
        )
        .push(
            Text::new(i18n.tr("beta-kicker"))
                .size(typography::CAPTION)
                .color(palette::CYAN),
        );

    let close = button(
        icons::sized(icons::cross(), sizing::ICON_MD)
            .style(styles::overlay::icon(palette::TEXT_SECONDARY)),
    )
    .on_press(Message::Close)
    .padding(spacing::XS)
    .style(styles::button::text_link);

    let header = Row::new()
        .align_y(Vertical::Center)
        .push(
            Column::new()
                .spacing(spacing::XS)
                .push(kicker)
                .push(
                    Text::new(i18n.tr("beta-title"))
                        .size(typography::TITLE_MD)
                        .color(palette::TEXT_PRIMARY),
                )
                .width(Length::Fill),
        )
        .push(close);

    let name_row = Row::new()
        .spacing(spacing::MD)
        .push(labeled_input(
            i18n,
            "beta-first-name",
            "beta-first-name-placeholder",
            &state.first_name,
            editable,
            Message::FirstNameChanged,
        ))
        .push(labeled_input(
            i18n,
            "beta-last-name",
            "beta-last-name-placeholder",
            &state.last_name,
            editable,
            Message::LastNameChanged,
        ));

    let mut form = Column::new()
        .spacing(spacing::MD)
        .push(name_row)
        .push(labeled_input(
            i18n,
            "beta-email",
            "beta-email-placeholder",
            &state.email,
            editable,
            Message::EmailChanged,
        ))
        .push(optional_input(
            i18n,
            "beta-social",
            "beta-social-placeholder",
            &state.social,
            editable,
            Message::SocialChanged,
        ))
        .push(optional_input(
            i18n,
            "beta-phone",
            "beta-phone-placeholder",
            &state.phone,
            editable,
            Message::PhoneChanged,
        ));

    if let Some(error_key) = state.field_error_key {
        form = form.push(
            Text::new(i18n.tr(error_key))
                .size(typography::BODY)
                .color(palette::RED),
        );
    }

    let submit_label = if state.status() == SubmissionStatus::Sending {
        i18n.tr("beta-sending")
    } else {
        i18n.tr("beta-submit")
    };
    let submit = button(
        Container::new(Text::new(submit_label).size(typography::BODY_LG))
            .width(Length::Fill)
            .align_x(Horizontal::Center),
    )
    .on_press_maybe(editable.then_some(Message::Submit))
    .padding([spacing::SM, spacing::LG])
    .width(Length::Fill)
    .style(styles::button::primary);

    let privacy = Text::new(i18n.tr("beta-privacy"))
        .size(typography::FINE)
        .color(palette::TEXT_MUTED);

    let panel = Column::new()
        .spacing(spacing::LG)
        .push(header)
        .push(form)
        .push(submit)
        .push(privacy);

    let modal = Container::new(panel)
        .width(Length::Fixed(sizing::MODAL_WIDTH))
        .padding(spacing::XL)
        .style(styles::container::modal);

    Container::new(modal)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(Horizontal::Center)
        .align_y(Vertical::Center)
        .style(styles::container::backdrop)
        .into()
}

fn labeled_input<'a>(
    i18n: &'a I18n,
    label_key: &str,
    placeholder_key: &str,
    value: &str,
    editable: bool,
    on_input: fn(String) -> Message,
) -> Element<'a, Message> {
    let label = Text::new(i18n.tr(label_key))
        .size(typography::CAPTION)
        .color(palette::CYAN);

    let placeholder = i18n.tr(placeholder_key);
    let mut input = text_input(&placeholder, value).padding(spacing::SM);
    if editable {
        input = input.on_input(on_input);
    }

    Column::new()
        .spacing(spacing::XS)
        .push(label)
        .push(input)
        .width(Length::Fill)
        .into()
}

fn optional_input<'a>(
    i18n: &'a I18n,
    label_key: &str,
    placeholder_key: &str,
    value: &str,
    editable: bool,
    on_input: fn(String) -> Message,
) -> Element<'a, Message> {
    let label_row = Row::new()
        .push(
            Text::new(i18n.tr(label_key))
                .size(typography::CAPTION)
                .color(palette::CYAN)
                .width(Length::Fill),
        )
        .push(
            Text::new(i18n.tr("beta-optional"))
                .size(typography::CAPTION)
                .color(palette::TEXT_MUTED),
        );

    let placeholder = i18n.tr(placeholder_key);
    let mut input = text_input(&placeholder, value).padding(spacing::SM);
    if editable {
        input = input.on_input(on_input);
    }

    Column::new()
        .spacing(spacing::XS)
        .push(label_row)
        .push(input)
        .width(Length::Fill)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled_state() -> State {
        State {
            first_name: "Ada".into(),
            last_name: "Lovelace".into(),
            email: "ada@university.edu".into(),
            ..State::default()
        }
    }

    #[test]
    fn field_edits_update_state() {
        let mut state = State::default();
        state.update(Message::FirstNameChanged("Odie".into()));
        state.update(Message::EmailChanged("odie@ros.org".into()));
        assert_eq!(state.first_name, "Odie");
        assert_eq!(state.email, "odie@ros.org");
    }

    #[test]
    fn submit_with_missing_fields_reports_error_and_stays_idle() {
        let mut state = State::default();
        let event = state.update(Message::Submit);
        assert!(matches!(event, Event::None));
        assert_eq!(state.status(), SubmissionStatus::Idle);
        assert!(state.field_error_key.is_some());
    }

    #[test]
    fn submit_with_valid_fields_locks_form_and_emits_request() {
        let mut state = filled_state();
        let event = state.update(Message::Submit);
        match event {
            Event::Submit(request) => {
                assert_eq!(request.first_name, "Ada");
                assert_eq!(request.email, "ada@university.edu");
            }
            other => panic!("expected Submit event, got {:?}", other),
        }
        assert_eq!(state.status(), SubmissionStatus::Sending);

        // A second submit while sending is ignored
        let event = state.update(Message::Submit);
        assert!(matches!(event, Event::None));
    }

    #[test]
    fn failed_submission_leaves_form_resubmittable() {
        let mut state = filled_state();
        state.update(Message::Submit);
        state.submission_finished(&Err(SubmitError::Connection));

        assert_eq!(state.status(), SubmissionStatus::Failed);
        assert_eq!(state.first_name, "Ada", "entered values survive a failure");

        let event = state.update(Message::Submit);
        assert!(matches!(event, Event::Submit(_)));
    }

    #[test]
    fn successful_submission_reaches_sent() {
        let mut state = filled_state();
        state.update(Message::Submit);
        state.submission_finished(&Ok(()));
        assert_eq!(state.status(), SubmissionStatus::Sent);
    }

    #[test]
    fn validation_error_clears_after_successful_validation() {
        let mut state = State::default();
        state.update(Message::Submit);
        assert!(state.field_error_key.is_some());

        state.first_name = "Ada".into();
        state.last_name = "Lovelace".into();
        state.email = "ada@university.edu".into();
        state.update(Message::Submit);
        assert!(state.field_error_key.is_none());
    }

    #[test]
    fn beta_modal_view_renders() {
        let i18n = I18n::default();
        let state = State::default();
        let _element = view(&i18n, &state);
    }

    #[test]
    fn beta_modal_view_renders_while_sending() {
        let i18n = I18n::default();
        let mut state = filled_state();
        state.update(Message::Submit);
        let _element = view(&i18n, &state);
    }
}

// SPDX-License-Identifier: MPL-2.0
//! Contact form with inline field validation.
//!
//! Errors are reported next to the offending field, never through the
//! notification channel. Editing a field clears its error; committing a
//! field (Enter) validates just that field; the send button validates
//! everything and only then reports success to the parent.

use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::styles;
use crate::ui::theming::ColorScheme;
use iced::widget::{button, text_input, Column, Text};
use iced::{Element, Length};

/// The form fields, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    Email,
    Subject,
    Message,
}

impl Field {
    /// All fields in display order.
    pub const ALL: [Field; 4] = [Field::Name, Field::Email, Field::Subject, Field::Message];

    /// Returns the i18n key for the field label.
    #[must_use]
    pub fn label_key(self) -> &'static str {
        match self {
            Field::Name => "contact-field-name",
            Field::Email => "contact-field-email",
            Field::Subject => "contact-field-subject",
            Field::Message => "contact-field-message",
        }
    }
}

/// Messages emitted by the form.
#[derive(Debug, Clone)]
pub enum Message {
    /// Text changed in one of the fields.
    Input(Field, String),
    /// A field was committed with Enter, validating just that field.
    FieldSubmitted(Field),
    /// The send button was pressed.
    Submit,
}

/// Events propagated to the parent application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    None,
    /// Every field validated; the parent announces the success.
    Submitted,
}

/// Form state: field values plus per-field error keys.
#[derive(Debug, Default)]
pub struct State {
    name: String,
    email: String,
    subject: String,
    message: String,
    errors: Errors,
}

#[derive(Debug, Default)]
struct Errors {
    name: Option<&'static str>,
    email: Option<&'static str>,
    subject: Option<&'static str>,
    message: Option<&'static str>,
}

impl State {
    /// Creates an empty form.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the current value of a field.
    #[must_use]
    pub fn value(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Subject => &self.subject,
            Field::Message => &self.message,
        }
    }

    /// Returns the i18n key of the field's current error, if any.
    #[must_use]
    pub fn error(&self, field: Field) -> Option<&'static str> {
        match field {
            Field::Name => self.errors.name,
            Field::Email => self.errors.email,
            Field::Subject => self.errors.subject,
            Field::Message => self.errors.message,
        }
    }

    /// Handles a form message.
    pub fn update(&mut self, message: Message) -> Event {
        match message {
            Message::Input(field, value) => {
                self.set_value(field, value);
                self.set_error(field, None);
                Event::None
            }
            Message::FieldSubmitted(field) => {
                let error = self.validate_field(field);
                self.set_error(field, error);
                Event::None
            }
            Message::Submit => {
                let mut valid = true;
                for field in Field::ALL {
                    let error = self.validate_field(field);
                    if error.is_some() {
                        valid = false;
                    }
                    self.set_error(field, error);
                }

                if valid {
                    *self = Self::default();
                    Event::Submitted
                } else {
                    Event::None
                }
            }
        }
    }

    fn validate_field(&self, field: Field) -> Option<&'static str> {
        match field {
            Field::Name => self
                .name
                .trim()
                .is_empty()
                .then_some("contact-error-name-required"),
            Field::Email => {
                if self.email.trim().is_empty() {
                    Some("contact-error-email-required")
                } else if !is_valid_email(&self.email) {
                    Some("contact-error-email-invalid")
                } else {
                    None
                }
            }
            Field::Subject => self
                .subject
                .trim()
                .is_empty()
                .then_some("contact-error-subject-required"),
            Field::Message => self
                .message
                .trim()
                .is_empty()
                .then_some("contact-error-message-required"),
        }
    }

    fn set_value(&mut self, field: Field, value: String) {
        match field {
            Field::Name => self.name = value,
            Field::Email => self.email = value,
            Field::Subject => self.subject = value,
            Field::Message => self.message = value,
        }
    }

    fn set_error(&mut self, field: Field, error: Option<&'static str>) {
        match field {
            Field::Name => self.errors.name = error,
            Field::Email => self.errors.email = error,
            Field::Subject => self.errors.subject = error,
            Field::Message => self.errors.message = error,
        }
    }
}

/// Checks the conventional `local@domain.tld` shape: exactly one `@`, a
/// `.` somewhere after it, and no whitespace anywhere.
fn is_valid_email(value: &str) -> bool {
    if value.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    match domain.rsplit_once('.') {
        Some((host, tld)) => !host.is_empty() && !tld.is_empty(),
        None => false,
    }
}

/// Render the form.
pub fn view<'a>(
    state: &'a State,
    i18n: &'a I18n,
    scheme: ColorScheme,
    font_factor: f32,
) -> Element<'a, Message> {
    let mut column = Column::new().spacing(spacing::MD).width(Length::Fill);

    for field in Field::ALL {
        column = column.push(build_field(state, field, i18n, scheme, font_factor));
    }

    let submit = button(Text::new(i18n.tr("contact-submit")).size(typography::BODY * font_factor))
        .on_press(Message::Submit)
        .padding([spacing::XS, spacing::LG])
        .style(styles::button::primary(scheme, false));

    column.push(submit).into()
}

/// Build one labeled input with its inline error caption.
fn build_field<'a>(
    state: &'a State,
    field: Field,
    i18n: &'a I18n,
    scheme: ColorScheme,
    font_factor: f32,
) -> Element<'a, Message> {
    let label = Text::new(i18n.tr(field.label_key())).size(typography::BODY_SM * font_factor);

    let input = text_input("", state.value(field))
        .on_input(move |value| Message::Input(field, value))
        .on_submit(Message::FieldSubmitted(field))
        .padding(spacing::XS)
        .size(typography::BODY * font_factor);

    let mut column = Column::new()
        .spacing(spacing::XXS)
        .push(label)
        .push(input);

    if let Some(error_key) = state.error(field) {
        column = column.push(
            Text::new(i18n.tr(error_key))
                .size(typography::CAPTION * font_factor)
                .color(scheme.error),
        );
    }

    column.into()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled_state() -> State {
        let mut state = State::new();
        state.update(Message::Input(Field::Name, "Maria Souza".into()));
        state.update(Message::Input(Field::Email, "maria@exemplo.com.br".into()));
        state.update(Message::Input(Field::Subject, "Encomenda".into()));
        state.update(Message::Input(Field::Message, "Gostaria de encomendar queijos.".into()));
        state
    }

    #[test]
    fn empty_submit_flags_every_field() {
        let mut state = State::new();
        let event = state.update(Message::Submit);

        assert_eq!(event, Event::None);
        assert_eq!(state.error(Field::Name), Some("contact-error-name-required"));
        assert_eq!(
            state.error(Field::Email),
            Some("contact-error-email-required")
        );
        assert_eq!(
            state.error(Field::Subject),
            Some("contact-error-subject-required")
        );
        assert_eq!(
            state.error(Field::Message),
            Some("contact-error-message-required")
        );
    }

    #[test]
    fn input_clears_the_field_error() {
        let mut state = State::new();
        state.update(Message::Submit);
        assert!(state.error(Field::Name).is_some());

        state.update(Message::Input(Field::Name, "M".into()));
        assert_eq!(state.error(Field::Name), None);
        // Other errors stay until their fields change
        assert!(state.error(Field::Email).is_some());
    }

    #[test]
    fn committing_a_field_validates_only_that_field() {
        let mut state = State::new();
        state.update(Message::Input(Field::Email, "não-é-email".into()));
        state.update(Message::FieldSubmitted(Field::Email));

        assert_eq!(
            state.error(Field::Email),
            Some("contact-error-email-invalid")
        );
        assert_eq!(state.error(Field::Name), None);
    }

    #[test]
    fn successful_submit_resets_the_form() {
        let mut state = filled_state();
        let event = state.update(Message::Submit);

        assert_eq!(event, Event::Submitted);
        for field in Field::ALL {
            assert_eq!(state.value(field), "");
            assert_eq!(state.error(field), None);
        }
    }

    #[test]
    fn invalid_email_blocks_submit() {
        let mut state = filled_state();
        state.update(Message::Input(Field::Email, "maria@exemplo".into()));

        let event = state.update(Message::Submit);
        assert_eq!(event, Event::None);
        assert_eq!(
            state.error(Field::Email),
            Some("contact-error-email-invalid")
        );
        assert_eq!(state.value(Field::Name), "Maria Souza");
    }

    #[test]
    fn whitespace_only_name_is_rejected() {
        let mut state = filled_state();
        state.update(Message::Input(Field::Name, "   ".into()));
        state.update(Message::FieldSubmitted(Field::Name));

        assert_eq!(state.error(Field::Name), Some("contact-error-name-required"));
    }

    #[test]
    fn email_shape_check() {
        assert!(is_valid_email("a@b.c"));
        assert!(is_valid_email("cliente@fazenda.com.br"));
        assert!(!is_valid_email("a@b"));
        assert!(!is_valid_email("@b.c"));
        assert!(!is_valid_email("a@.c"));
        assert!(!is_valid_email("a@b."));
        assert!(!is_valid_email("a@@b.c"));
        assert!(!is_valid_email("a b@c.d"));
        assert!(!is_valid_email(" a@b.c"));
        assert!(!is_valid_email(""));
    }

    #[test]
    fn form_view_renders() {
        let i18n = I18n::default();
        let mut state = State::new();
        {
            let _pristine = view(&state, &i18n, ColorScheme::standard(), 1.0);
        }

        state.update(Message::Submit);
        let _with_errors = view(&state, &i18n, ColorScheme::standard(), 1.0);
    }
}

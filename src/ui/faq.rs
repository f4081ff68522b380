// SPDX-License-Identifier: MPL-2.0
//! FAQ accordion for the storefront's questions section.
//!
//! At most one topic is expanded at a time: expanding a topic collapses
//! the previously expanded one, and activating the expanded topic again
//! collapses it.

use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::styles;
use crate::ui::theming::ColorScheme;
use iced::widget::{button, Column, Container, Row, Text};
use iced::{alignment, Element, Length};

/// The fixed set of FAQ topics, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Topic {
    /// Delivery area and schedule.
    Delivery,
    /// Accepted payment methods.
    Payment,
    /// Whether the produce is organic.
    Organic,
    /// Wholesale orders for restaurants and shops.
    Wholesale,
}

impl Topic {
    /// All topics in display order.
    pub const ALL: [Topic; 4] = [
        Topic::Delivery,
        Topic::Payment,
        Topic::Organic,
        Topic::Wholesale,
    ];

    /// Returns the i18n key for the question line.
    #[must_use]
    pub fn question_key(self) -> &'static str {
        match self {
            Topic::Delivery => "faq-delivery-question",
            Topic::Payment => "faq-payment-question",
            Topic::Organic => "faq-organic-question",
            Topic::Wholesale => "faq-wholesale-question",
        }
    }

    /// Returns the i18n key for the answer body.
    #[must_use]
    pub fn answer_key(self) -> &'static str {
        match self {
            Topic::Delivery => "faq-delivery-answer",
            Topic::Payment => "faq-payment-answer",
            Topic::Organic => "faq-organic-answer",
            Topic::Wholesale => "faq-wholesale-answer",
        }
    }
}

/// Messages emitted by the accordion.
#[derive(Debug, Clone, Copy)]
pub enum Message {
    /// A question row was activated.
    Toggle(Topic),
}

/// Accordion state: which topic is expanded, if any.
#[derive(Debug, Default)]
pub struct State {
    expanded: Option<Topic>,
}

impl State {
    /// Creates the initial state with every topic collapsed.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the currently expanded topic, if any.
    #[must_use]
    pub fn expanded(&self) -> Option<Topic> {
        self.expanded
    }

    /// Handles an accordion message.
    pub fn update(&mut self, message: Message) {
        match message {
            Message::Toggle(topic) => {
                if self.expanded == Some(topic) {
                    self.expanded = None;
                } else {
                    self.expanded = Some(topic);
                }
            }
        }
    }
}

/// Render the accordion.
pub fn view<'a>(
    state: &State,
    i18n: &'a I18n,
    scheme: ColorScheme,
    font_factor: f32,
) -> Element<'a, Message> {
    let mut column = Column::new().spacing(spacing::SM).width(Length::Fill);

    for topic in Topic::ALL {
        let expanded = state.expanded() == Some(topic);
        column = column.push(build_entry(topic, expanded, i18n, scheme, font_factor));
    }

    column.into()
}

/// Build one question row plus its answer when expanded.
fn build_entry<'a>(
    topic: Topic,
    expanded: bool,
    i18n: &'a I18n,
    scheme: ColorScheme,
    font_factor: f32,
) -> Element<'a, Message> {
    let marker = if expanded { "−" } else { "+" };

    let question_row = Row::new()
        .spacing(spacing::SM)
        .align_y(alignment::Vertical::Center)
        .push(
            Text::new(i18n.tr(topic.question_key()))
                .size(typography::BODY_LG * font_factor)
                .width(Length::Fill),
        )
        .push(Text::new(marker).size(typography::BODY_LG * font_factor));

    let header = button(question_row)
        .on_press(Message::Toggle(topic))
        .padding([spacing::SM, spacing::MD])
        .width(Length::Fill)
        .style(styles::button::accordion(scheme, expanded));

    let mut entry = Column::new().push(header);

    if expanded {
        let answer = Container::new(
            Text::new(i18n.tr(topic.answer_key()))
                .size(typography::BODY * font_factor)
                .color(scheme.text_secondary),
        )
        .padding([spacing::SM, spacing::MD])
        .width(Length::Fill);
        entry = entry.push(answer);
    }

    entry.into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_expands_and_collapses() {
        let mut state = State::new();
        assert_eq!(state.expanded(), None);

        state.update(Message::Toggle(Topic::Delivery));
        assert_eq!(state.expanded(), Some(Topic::Delivery));

        state.update(Message::Toggle(Topic::Delivery));
        assert_eq!(state.expanded(), None);
    }

    #[test]
    fn expanding_another_topic_collapses_the_first() {
        let mut state = State::new();
        state.update(Message::Toggle(Topic::Delivery));
        state.update(Message::Toggle(Topic::Payment));

        assert_eq!(state.expanded(), Some(Topic::Payment));
    }

    #[test]
    fn topic_keys_are_distinct() {
        for (i, a) in Topic::ALL.iter().enumerate() {
            for b in Topic::ALL.iter().skip(i + 1) {
                assert_ne!(a.question_key(), b.question_key());
                assert_ne!(a.answer_key(), b.answer_key());
            }
        }
    }

    #[test]
    fn accordion_view_renders() {
        let i18n = I18n::default();
        let mut state = State::new();
        let _collapsed = view(&state, &i18n, ColorScheme::standard(), 1.0);

        state.update(Message::Toggle(Topic::Organic));
        let _expanded = view(&state, &i18n, ColorScheme::standard(), 1.0);
    }
}

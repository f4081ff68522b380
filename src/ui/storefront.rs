// SPDX-License-Identifier: MPL-2.0
//! The storefront page: hero, product grid, services, FAQ, and contact form
//! stacked inside one scrollable.
//!
//! Sections have fixed design heights, which lets the scroll spy and the
//! reveal sweep work from arithmetic instead of widget measurements. The
//! active section and the set of revealed cards live here; the cart and the
//! panels live with the app.

use crate::cart;
use crate::catalog::{Catalog, Product, ProductId};
use crate::i18n::fluent::I18n;
use crate::ui::contact_form;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::faq;
use crate::ui::navbar::Section;
use crate::ui::styles;
use crate::ui::theming::ColorScheme;
use iced::widget::scrollable::Viewport;
use iced::widget::{button, Column, Container, Id, Row, Scrollable, Text};
use iced::{alignment, Element, Length};
use std::collections::HashSet;
use std::time::{Duration, Instant};

/// Identifier of the page scrollable, used for programmatic jumps.
pub const SCROLLABLE_ID: &str = "storefront-scrollable";

/// Detection allowance above each section top while spying.
const SPY_ALLOWANCE: f32 = 100.0;
/// Gap left above a section after a programmatic jump.
const SCROLL_MARGIN: f32 = 20.0;
/// Bottom margin subtracted from the viewport when sweeping reveals.
const REVEAL_MARGIN: f32 = 50.0;
/// Viewport height assumed for the initial reveal sweep before any scroll.
const INITIAL_VIEWPORT: f32 = 680.0;
/// Minimum time between processed scroll events.
const SPY_THROTTLE: Duration = Duration::from_millis(100);

/// Vertical offset of the values row inside the home section.
const VALUES_ROW_OFFSET: f32 = 360.0;
/// Vertical offset of the first card row inside a section.
const CARD_GRID_OFFSET: f32 = 160.0;
/// Vertical distance between product card rows.
const CARD_ROW_STRIDE: f32 = 280.0;
/// Products per grid row.
const GRID_COLUMNS: usize = 3;

/// Glyph, title key, and text key for the value cards on the home section.
const VALUES: [(&str, &str, &str); 3] = [
    ("🌱", "value-natural-title", "value-natural-text"),
    ("🤝", "value-local-title", "value-local-text"),
    ("⭐", "value-quality-title", "value-quality-text"),
];

/// Glyph, title key, and text key for the service cards.
const SERVICES: [(&str, &str, &str); 3] = [
    ("🚚", "service-delivery-title", "service-delivery-text"),
    ("🧺", "service-baskets-title", "service-baskets-text"),
    ("🎉", "service-events-title", "service-events-text"),
];

/// Fixed design height of each section.
pub fn section_height(section: Section) -> f32 {
    match section {
        Section::Home => 640.0,
        Section::Products => 720.0,
        Section::Services => 560.0,
        Section::Faq => 520.0,
        Section::Contact => 640.0,
    }
}

/// Offset of a section's top edge from the top of the page.
pub fn section_top(section: Section) -> f32 {
    let mut top = 0.0;
    for candidate in Section::ALL {
        if candidate == section {
            break;
        }
        top += section_height(candidate);
    }
    top
}

/// Section owning a given scroll offset, if any.
///
/// Each section claims the range starting [`SPY_ALLOWANCE`] above its top
/// edge; the last matching section wins. Past the end of the page nothing
/// matches and the caller keeps the previous answer.
fn section_at(y: f32) -> Option<Section> {
    let mut current = None;
    for section in Section::ALL {
        let adjusted_top = section_top(section) - SPY_ALLOWANCE;
        if y >= adjusted_top && y < adjusted_top + section_height(section) {
            current = Some(section);
        }
    }
    current
}

/// A card that participates in the scroll reveal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Card {
    Value(u8),
    Product(ProductId),
    Service(u8),
}

/// Messages emitted by the storefront page.
#[derive(Debug, Clone)]
pub enum Message {
    /// The page scrollable moved.
    Scrolled { y: f32, viewport_height: f32 },
    /// An in-page link such as the hero call-to-action was activated.
    JumpPressed(Section),
    /// A product card's add button was activated.
    AddToCart(ProductId),
    Faq(faq::Message),
    Form(contact_form::Message),
}

/// Effects the app layer must carry out.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Event {
    None,
    /// Scroll the page to the given section.
    JumpTo(Section),
    /// Add the product to the cart and confirm with a notification.
    AddToCart(ProductId),
    /// The contact form validated and was cleared.
    FormSubmitted,
}

/// Scroll tracking plus the in-page component states.
#[derive(Debug)]
pub struct State {
    active_section: Section,
    scroll_offset: f32,
    last_spy_at: Option<Instant>,
    revealed: HashSet<Card>,
    faq: faq::State,
    form: contact_form::State,
}

impl Default for State {
    fn default() -> Self {
        Self::new()
    }
}

impl State {
    pub fn new() -> Self {
        Self {
            active_section: Section::Home,
            scroll_offset: 0.0,
            last_spy_at: None,
            revealed: HashSet::new(),
            faq: faq::State::new(),
            form: contact_form::State::default(),
        }
    }

    /// Section currently highlighted in the navbar.
    pub fn active_section(&self) -> Section {
        self.active_section
    }

    /// Last scroll offset accepted by the throttle.
    pub fn scroll_offset(&self) -> f32 {
        self.scroll_offset
    }

    /// Whether a card has been revealed. Reveals never revert.
    pub fn is_revealed(&self, card: Card) -> bool {
        self.revealed.contains(&card)
    }

    /// Marks the section active and returns the scroll offset to jump to.
    pub fn jump_to(&mut self, section: Section) -> f32 {
        self.active_section = section;
        (section_top(section) - SCROLL_MARGIN).max(0.0)
    }

    /// Runs the reveal sweep for the resting page before any scroll arrives.
    pub fn seed_reveal(&mut self, catalog: &Catalog) {
        self.sweep_reveals(0.0, INITIAL_VIEWPORT, catalog);
    }

    pub fn update(&mut self, message: Message, now: Instant, catalog: &Catalog) -> Event {
        match message {
            Message::Scrolled { y, viewport_height } => {
                self.handle_scroll(y, viewport_height, now, catalog);
                Event::None
            }
            Message::JumpPressed(section) => Event::JumpTo(section),
            Message::AddToCart(id) => Event::AddToCart(id),
            Message::Faq(message) => {
                self.faq.update(message);
                Event::None
            }
            Message::Form(message) => match self.form.update(message) {
                contact_form::Event::Submitted => Event::FormSubmitted,
                contact_form::Event::None => Event::None,
            },
        }
    }

    /// Throttled scroll handler: spy plus reveal sweep.
    ///
    /// Events arriving within [`SPY_THROTTLE`] of the last processed one are
    /// dropped outright; the next event past the window catches up.
    fn handle_scroll(&mut self, y: f32, viewport_height: f32, now: Instant, catalog: &Catalog) {
        if self
            .last_spy_at
            .is_some_and(|last| now.duration_since(last) < SPY_THROTTLE)
        {
            return;
        }
        self.last_spy_at = Some(now);
        self.scroll_offset = y;

        if let Some(section) = section_at(y) {
            self.active_section = section;
        }
        self.sweep_reveals(y, viewport_height, catalog);
    }

    fn sweep_reveals(&mut self, y: f32, viewport_height: f32, catalog: &Catalog) {
        let visible_bottom = y + viewport_height - REVEAL_MARGIN;
        for (card, top) in reveal_candidates(catalog) {
            if top < visible_bottom {
                self.revealed.insert(card);
            }
        }
    }
}

/// Every revealable card paired with the offset of its top edge.
fn reveal_candidates(catalog: &Catalog) -> Vec<(Card, f32)> {
    let mut cards = Vec::new();

    let values_top = section_top(Section::Home) + VALUES_ROW_OFFSET;
    for index in 0..VALUES.len() as u8 {
        cards.push((Card::Value(index), values_top));
    }

    let products_top = section_top(Section::Products) + CARD_GRID_OFFSET;
    for (index, product) in catalog.products().iter().enumerate() {
        let row = (index / GRID_COLUMNS) as f32;
        cards.push((
            Card::Product(product.id),
            products_top + row * CARD_ROW_STRIDE,
        ));
    }

    let services_top = section_top(Section::Services) + CARD_GRID_OFFSET;
    for index in 0..SERVICES.len() as u8 {
        cards.push((Card::Service(index), services_top));
    }

    cards
}

/// Contextual data needed to render the page.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub catalog: &'a Catalog,
    pub scheme: ColorScheme,
    pub font_factor: f32,
}

/// Render the storefront page.
pub fn view<'a>(state: &'a State, ctx: ViewContext<'a>) -> Element<'a, Message> {
    let page = Column::new()
        .push(build_home(state, &ctx))
        .push(build_products(state, &ctx))
        .push(build_services(state, &ctx))
        .push(build_faq(state, &ctx))
        .push(build_contact(state, &ctx));

    Scrollable::new(page)
        .id(Id::new(SCROLLABLE_ID))
        .width(Length::Fill)
        .height(Length::Fill)
        .on_scroll(|viewport: Viewport| Message::Scrolled {
            y: viewport.absolute_offset().y,
            viewport_height: viewport.bounds().height,
        })
        .into()
}

/// Wrap section content in the fixed-height band.
fn build_section<'a>(
    section: Section,
    tinted: bool,
    scheme: ColorScheme,
    content: Element<'a, Message>,
) -> Element<'a, Message> {
    Container::new(content)
        .width(Length::Fill)
        .height(Length::Fixed(section_height(section)))
        .padding([spacing::XL, spacing::LG])
        .align_x(alignment::Horizontal::Center)
        .style(styles::container::section(scheme, tinted))
        .into()
}

fn section_title<'a>(key: &str, ctx: &ViewContext<'a>) -> Element<'a, Message> {
    Text::new(ctx.i18n.tr(key))
        .size(typography::TITLE_MD * ctx.font_factor)
        .into()
}

fn build_home<'a>(state: &'a State, ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let hero = Container::new(
        Column::new()
            .spacing(spacing::MD)
            .align_x(alignment::Horizontal::Center)
            .push(
                Text::new(ctx.i18n.tr("hero-title")).size(typography::TITLE_LG * ctx.font_factor),
            )
            .push(
                Text::new(ctx.i18n.tr("hero-subtitle"))
                    .size(typography::BODY_LG * ctx.font_factor)
                    .color(ctx.scheme.text_secondary),
            )
            .push(
                button(Text::new(ctx.i18n.tr("hero-cta")).size(typography::BODY * ctx.font_factor))
                    .on_press(Message::JumpPressed(Section::Products))
                    .padding([spacing::SM, spacing::XL])
                    .style(styles::button::primary(ctx.scheme, false)),
            ),
    )
    .width(Length::Fill)
    .padding([spacing::XL, spacing::LG])
    .align_x(alignment::Horizontal::Center)
    .style(styles::container::hero(ctx.scheme));

    let mut values = Row::new().spacing(spacing::LG);
    for (index, &(glyph, title_key, text_key)) in VALUES.iter().enumerate() {
        let revealed = state.is_revealed(Card::Value(index as u8));
        values = values.push(build_info_card(ctx, revealed, glyph, title_key, text_key));
    }

    build_section(
        Section::Home,
        false,
        ctx.scheme,
        Column::new()
            .spacing(spacing::XL)
            .align_x(alignment::Horizontal::Center)
            .push(hero)
            .push(values)
            .into(),
    )
}

fn build_products<'a>(state: &'a State, ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let body: Element<'a, Message> = if ctx.catalog.is_empty() {
        Text::new(ctx.i18n.tr("products-empty-state"))
            .size(typography::BODY_LG * ctx.font_factor)
            .color(ctx.scheme.text_secondary)
            .into()
    } else {
        let mut grid = Column::new()
            .spacing(spacing::LG)
            .align_x(alignment::Horizontal::Center);
        let mut row = Row::new().spacing(spacing::LG);
        let mut in_row = 0;

        for product in ctx.catalog.products() {
            if in_row == GRID_COLUMNS {
                grid = grid.push(row);
                row = Row::new().spacing(spacing::LG);
                in_row = 0;
            }
            row = row.push(build_product_card(state, ctx, product));
            in_row += 1;
        }
        grid.push(row).into()
    };

    build_section(
        Section::Products,
        true,
        ctx.scheme,
        Column::new()
            .spacing(spacing::LG)
            .align_x(alignment::Horizontal::Center)
            .push(section_title("section-products-title", ctx))
            .push(body)
            .into(),
    )
}

fn build_services<'a>(state: &'a State, ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let mut cards = Row::new().spacing(spacing::LG);
    for (index, &(glyph, title_key, text_key)) in SERVICES.iter().enumerate() {
        let revealed = state.is_revealed(Card::Service(index as u8));
        cards = cards.push(build_info_card(ctx, revealed, glyph, title_key, text_key));
    }

    build_section(
        Section::Services,
        false,
        ctx.scheme,
        Column::new()
            .spacing(spacing::LG)
            .align_x(alignment::Horizontal::Center)
            .push(section_title("section-services-title", ctx))
            .push(cards)
            .into(),
    )
}

fn build_faq<'a>(state: &'a State, ctx: &ViewContext<'a>) -> Element<'a, Message> {
    build_section(
        Section::Faq,
        true,
        ctx.scheme,
        Column::new()
            .spacing(spacing::LG)
            .align_x(alignment::Horizontal::Center)
            .push(section_title("section-faq-title", ctx))
            .push(
                Container::new(
                    faq::view(&state.faq, ctx.i18n, ctx.scheme, ctx.font_factor).map(Message::Faq),
                )
                .width(Length::Fixed(sizing::SECTION_CONTENT_WIDTH)),
            )
            .into(),
    )
}

fn build_contact<'a>(state: &'a State, ctx: &ViewContext<'a>) -> Element<'a, Message> {
    build_section(
        Section::Contact,
        false,
        ctx.scheme,
        Column::new()
            .spacing(spacing::LG)
            .align_x(alignment::Horizontal::Center)
            .push(section_title("section-contact-title", ctx))
            .push(
                Text::new(ctx.i18n.tr("contact-intro"))
                    .size(typography::BODY * ctx.font_factor)
                    .color(ctx.scheme.text_secondary),
            )
            .push(
                Container::new(
                    contact_form::view(&state.form, ctx.i18n, ctx.scheme, ctx.font_factor)
                        .map(Message::Form),
                )
                .width(Length::Fixed(sizing::SECTION_CONTENT_WIDTH)),
            )
            .into(),
    )
}

/// Build a value or service card.
fn build_info_card<'a>(
    ctx: &ViewContext<'a>,
    revealed: bool,
    glyph: &'static str,
    title_key: &'static str,
    text_key: &'static str,
) -> Element<'a, Message> {
    Container::new(
        Column::new()
            .spacing(spacing::SM)
            .align_x(alignment::Horizontal::Center)
            .push(Text::new(glyph).size(typography::TITLE_MD * ctx.font_factor))
            .push(Text::new(ctx.i18n.tr(title_key)).size(typography::BODY_LG * ctx.font_factor))
            .push(
                Text::new(ctx.i18n.tr(text_key))
                    .size(typography::BODY_SM * ctx.font_factor)
                    .color(ctx.scheme.text_secondary),
            ),
    )
    .width(Length::Fixed(sizing::PRODUCT_CARD_WIDTH))
    .padding(spacing::MD)
    .style(styles::container::card(ctx.scheme, revealed))
    .into()
}

fn build_product_card<'a>(
    state: &'a State,
    ctx: &ViewContext<'a>,
    product: &'a Product,
) -> Element<'a, Message> {
    let revealed = state.is_revealed(Card::Product(product.id));
    let initial = product.name.chars().next().unwrap_or('?');

    let thumbnail = Container::new(
        Text::new(initial.to_string()).size(typography::TITLE_LG * ctx.font_factor),
    )
    .width(Length::Fill)
    .height(Length::Fixed(sizing::CARD_IMAGE_HEIGHT))
    .align_x(alignment::Horizontal::Center)
    .align_y(alignment::Vertical::Center)
    .style(styles::container::card_image(ctx.scheme));

    let price = cart::format_price(product.price);
    let price_tag = Text::new(
        ctx.i18n
            .tr_with_args("price-tag", &[("amount", price.as_str())]),
    )
    .size(typography::BODY * ctx.font_factor)
    .color(ctx.scheme.brand_primary);

    let add = button(
        Text::new(ctx.i18n.tr("product-add-to-cart")).size(typography::BODY_SM * ctx.font_factor),
    )
    .on_press(Message::AddToCart(product.id))
    .padding([spacing::XS, spacing::MD])
    .width(Length::Fill)
    .style(styles::button::primary(ctx.scheme, false));

    Container::new(
        Column::new()
            .spacing(spacing::SM)
            .push(thumbnail)
            .push(Text::new(product.name.as_str()).size(typography::BODY_LG * ctx.font_factor))
            .push(price_tag)
            .push(add),
    )
    .width(Length::Fixed(sizing::PRODUCT_CARD_WIDTH))
    .padding(spacing::MD)
    .style(styles::container::card(ctx.scheme, revealed))
    .into()
}

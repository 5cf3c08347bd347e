//! Product card
//!
//! Ambient view: archive badge, code name, title, media, first two tags and
//! the first technique. A sustained press switches to the full-detail view,
//! which gives the whole card to the uncropped media.

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use vitrine_app::CardPreview;
use vitrine_core::Product;

use super::media::MediaArea;
use crate::theme::{icons::IconSet, styles};

pub struct ProductCard<'a> {
    product: &'a Product,
    preview: &'a CardPreview,
    focused: bool,
    icons: IconSet,
    frame: u64,
}

impl<'a> ProductCard<'a> {
    pub fn new(product: &'a Product, preview: &'a CardPreview, icons: IconSet) -> Self {
        Self {
            product,
            preview,
            focused: false,
            icons,
            frame: 0,
        }
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    /// Animation tick for the loading spinner
    pub fn frame(mut self, frame: u64) -> Self {
        self.frame = frame;
        self
    }

    fn header(&self) -> Line<'a> {
        let name_style = if self.focused {
            styles::accent_bold()
        } else {
            styles::text_bold()
        };
        Line::from(Span::styled(self.product.code_name.as_str(), name_style))
    }

    fn tags(&self) -> Line<'a> {
        let spans: Vec<Span> = self
            .product
            .card_tags()
            .iter()
            .flat_map(|tag| [Span::styled(format!("#{tag}"), styles::tag()), Span::raw(" ")])
            .collect();
        Line::from(spans)
    }

    fn technique(&self) -> Line<'a> {
        match self.product.craft.primary_technique() {
            Some(technique) => Line::from(vec![
                Span::styled("\u{25c6} ", styles::accent()),
                Span::styled(technique.to_string(), styles::text_muted()),
            ]),
            None => Line::default(),
        }
    }
}

impl Widget for ProductCard<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let kind = self.product.media.kind();
        let badge = Line::from(Span::styled(
            format!(" {} ", self.product.archive_id),
            styles::accent(),
        ));
        let kind_label = Line::from(Span::styled(
            format!(" {} {} ", self.icons.media(kind), kind.label()),
            styles::text_muted(),
        ))
        .right_aligned();

        let block = if self.preview.is_pressed() {
            styles::pressed_block()
        } else {
            styles::glass_block(self.focused)
        }
        .title(badge)
        .title_top(kind_label);

        let inner = block.inner(area);
        block.render(area, buf);
        if inner.is_empty() {
            return;
        }

        let media = MediaArea::new(kind, self.preview.media(), self.icons, self.frame);

        if self.preview.is_full_detail() {
            let [name, media_area] =
                Layout::vertical([Constraint::Length(1), Constraint::Min(0)]).areas(inner);
            Paragraph::new(self.header()).render(name, buf);
            media.full_frame(true).render(media_area, buf);
            return;
        }

        let [name, title, media_area, tags, technique] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Min(1),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .areas(inner);

        Paragraph::new(self.header()).render(name, buf);
        Paragraph::new(Span::styled(
            self.product.title.as_str(),
            styles::text_secondary(),
        ))
        .render(title, buf);
        media.render(media_area, buf);
        Paragraph::new(self.tags()).render(tags, buf);
        Paragraph::new(self.technique()).render(technique, buf);
    }
}

//! Detail overlay for the selected product

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::{Paragraph, Widget, Wrap},
};

use vitrine_core::{MediaStatus, Product};

use super::media::describe_hints;
use super::modal_overlay::{clear_area, dim_background, render_shadow};
use crate::layout::OverlayAreas;
use crate::theme::{icons::IconSet, styles};

/// Modal card with the full record and the "add to order" control.
///
/// Rendered over the whole frame: dims the gallery, then draws into
/// `areas.modal`.
pub struct DetailOverlay<'a> {
    product: &'a Product,
    media: MediaStatus,
    areas: OverlayAreas,
    icons: IconSet,
    frame: u64,
}

impl<'a> DetailOverlay<'a> {
    pub fn new(product: &'a Product, media: MediaStatus, areas: OverlayAreas, icons: IconSet) -> Self {
        Self {
            product,
            media,
            areas,
            icons,
            frame: 0,
        }
    }

    pub fn frame(mut self, frame: u64) -> Self {
        self.frame = frame;
        self
    }

    fn media_line(&self) -> Line<'a> {
        let kind = self.product.media.kind();
        if self.media.is_ready() {
            Line::from(vec![
                Span::styled(
                    format!("{} {}", self.icons.media(kind), kind.label()),
                    styles::media(kind, true),
                ),
                Span::styled(
                    format!("  {}", describe_hints(kind.hints())),
                    styles::text_muted(),
                ),
            ])
        } else {
            Line::from(Span::styled(
                format!("{} loading media", self.icons.spinner(self.frame)),
                styles::text_muted(),
            ))
        }
    }

    fn body(&self) -> Vec<Line<'a>> {
        let product = self.product;
        let mut lines = vec![
            Line::from(vec![
                Span::styled(product.archive_id.as_str(), styles::accent()),
                Span::raw("  "),
                Span::styled(product.code_name.as_str(), styles::accent_bold()),
            ]),
            Line::from(Span::styled(product.title.as_str(), styles::text_secondary())),
            Line::default(),
            self.media_line(),
            Line::default(),
        ];

        if !product.tags.is_empty() {
            let tags = product
                .tags
                .iter()
                .map(|t| format!("#{t}"))
                .collect::<Vec<_>>()
                .join(" ");
            lines.push(Line::from(vec![
                Span::styled("Tags        ", styles::text_muted()),
                Span::styled(tags, styles::tag()),
            ]));
        }

        for (i, technique) in product.craft.techniques.iter().enumerate() {
            let label = if i == 0 { "Techniques  " } else { "            " };
            lines.push(Line::from(vec![
                Span::styled(label, styles::text_muted()),
                Span::styled(format!("{}. {technique}", i + 1), styles::text_primary()),
            ]));
        }

        if let Some(materials) = &product.craft.materials {
            lines.push(Line::from(vec![
                Span::styled("Materials   ", styles::text_muted()),
                Span::styled(materials.as_str(), styles::text_primary()),
            ]));
        }
        if let Some(size) = &product.craft.size {
            lines.push(Line::from(vec![
                Span::styled("Size        ", styles::text_muted()),
                Span::styled(size.as_str(), styles::text_primary()),
            ]));
        }
        lines
    }
}

impl Widget for DetailOverlay<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let modal = self.areas.modal;
        dim_background(buf, area);
        render_shadow(buf, modal);
        clear_area(buf, modal);

        let block = styles::modal_block(" Detail ").title_bottom(
            Line::from(Span::styled(" Esc close ", styles::text_muted())).right_aligned(),
        );
        let inner = block.inner(modal);
        block.render(modal, buf);
        if inner.is_empty() {
            return;
        }

        let [body, _gap, _controls] = Layout::vertical([
            Constraint::Min(0),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .areas(inner);
        Paragraph::new(self.body())
            .wrap(Wrap { trim: false })
            .render(body, buf);

        let close = self.areas.close;
        buf.set_stringn(
            close.x,
            close.y,
            format!("[{}]", self.icons.close()),
            usize::from(close.width),
            styles::accent_bold(),
        );

        let order = self.areas.order;
        let label = format!("{} Add to order (o)", self.icons.cart());
        Paragraph::new(Span::styled(label, styles::focused_selected()))
            .centered()
            .style(styles::focused_selected())
            .render(order, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout;
    use crate::test_utils::{test_product, TestTerminal};
    use vitrine_app::config::IconMode;

    fn render(product: &Product, media: MediaStatus) -> TestTerminal {
        let mut term = TestTerminal::new();
        let areas = layout::overlay(term.area());
        let overlay = DetailOverlay::new(product, media, areas, IconSet::new(IconMode::Unicode));
        term.render_widget(overlay, term.area());
        term
    }

    #[test]
    fn test_overlay_shows_full_record() {
        let product = test_product("s1", "shaker", "media/s1.mp4");
        let term = render(&product, MediaStatus::Ready);

        assert!(term.buffer_contains("NO.s1"));
        assert!(term.buffer_contains("Code s1"));
        assert!(term.buffer_contains("Title s1"));
        assert!(term.buffer_contains("#amber #resin #hidden"));
        assert!(term.buffer_contains("1. oil pour"));
        assert!(term.buffer_contains("2. hand polish"));
        assert!(term.buffer_contains("acrylic"));
        assert!(term.buffer_contains("80 x 80 mm"));
        assert!(term.buffer_contains("autoplay"));
    }

    #[test]
    fn test_overlay_shows_controls() {
        let product = test_product("s2", "shaker", "media/s2.jpg");
        let term = render(&product, MediaStatus::Loading);
        let areas = layout::overlay(term.area());

        assert!(term.buffer_contains("Add to order"));
        assert!(term.line_contains(areas.order.y, "Add to order"));
        assert_eq!(term.cell_at(areas.close.x, areas.close.y), Some("["));
        assert!(term.buffer_contains("loading media"));
    }
}

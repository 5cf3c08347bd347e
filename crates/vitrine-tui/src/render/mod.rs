//! Main render/view function (View in TEA pattern)


use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph};
use ratatui::Frame;

use vitrine_app::{AppState, CardPreview};
use vitrine_core::Slot;

use crate::layout::GalleryLayout;
use crate::theme::{icons::IconSet, palette, styles};
use crate::widgets;

/// Render the complete UI (View function in TEA). Read-only over the state.
pub fn view(frame: &mut Frame, state: &AppState) {
    let area = frame.area();

    let bg_block = Block::default().style(Style::default().bg(palette::DEEPEST_BG));
    frame.render_widget(bg_block, area);

    let layout = GalleryLayout::compute(area, state);
    let icons = IconSet::new(state.settings.ui.icons);

    frame.render_widget(
        widgets::CategoryBar::new(
            &state.catalogue.categories,
            &state.active_category,
            &layout.tabs,
        ),
        layout.screen.header,
    );

    render_gallery(frame, state, &layout, icons);

    frame.render_widget(widgets::StatusBar::new(state, icons), layout.screen.status);

    if let (Some(areas), Some(open), Some(product)) = (
        layout.overlay,
        state.overlay.current(),
        state.selected_product(),
    ) {
        frame.render_widget(
            widgets::DetailOverlay::new(product, open.media, areas, icons)
                .frame(state.animation_frame),
            area,
        );
    }
}

fn render_gallery(frame: &mut Frame, state: &AppState, layout: &GalleryLayout, icons: IconSet) {
    let slots = state.slots();
    if slots.is_empty() {
        render_empty(frame, layout.screen.gallery);
        return;
    }

    let idle = CardPreview::new();
    for placed in &layout.gallery.slots {
        let focused = placed.index == state.focus;
        match slots.get(placed.index) {
            Some(Slot::Product(product)) => {
                let preview = state.card(&product.id).unwrap_or(&idle);
                frame.render_widget(
                    widgets::ProductCard::new(product, preview, icons)
                        .focused(focused)
                        .frame(state.animation_frame),
                    placed.rect,
                );
            }
            Some(Slot::Placeholder) => {
                frame.render_widget(
                    widgets::PlaceholderCard::new(icons).focused(focused),
                    placed.rect,
                );
            }
            None => {}
        }
    }

    let total = slots.len();
    if let Some(pager) = layout.gallery.pager {
        if total > 1 {
            frame.render_widget(widgets::PagerDots::new(total, state.focus, icons), pager);
        }
    }
    if let Some(hint) = layout.gallery.hint {
        if state.swipe_hint.should_render(total, state.layout_mode()) {
            frame.render_widget(widgets::SwipeHint::new(icons), hint);
        }
    }
}

/// An empty filtered result is a valid state, not an error
fn render_empty(frame: &mut Frame, area: Rect) {
    if area.is_empty() {
        return;
    }
    let message = Paragraph::new(Line::from(Span::styled(
        "Nothing in this category yet",
        styles::text_muted(),
    )))
    .centered();
    let row = Rect::new(area.x, area.y + area.height / 2, area.width, 1);
    frame.render_widget(message, row);
}

//! Application state (Model in TEA pattern)
//!
//! `AppState` is the gallery container's explicit state record: active
//! category, per-card interaction state, swipe hint, selected product and
//! focus. Widgets only read it; the update function is the only writer.

use std::collections::HashMap;

use vitrine_core::prelude::*;
use vitrine_core::{visible_slots, Catalogue, CategoryId, Product, ProductId, Slot};

use crate::card::{CardPreview, PressToken};
use crate::config::Settings;
use crate::overlay::DetailOverlay;
use crate::swipe_hint::SwipeHint;
use crate::viewport::{LayoutMode, Viewport};

/// Application lifecycle phase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AppPhase {
    #[default]
    Running,
    Quitting,
}

/// Complete application state (the Model in TEA)
#[derive(Debug, Clone)]
pub struct AppState {
    /// Static content, never mutated after startup
    pub catalogue: Catalogue,

    pub settings: Settings,

    /// Always one of the catalogue's category ids
    pub active_category: CategoryId,

    /// Interaction state of every mounted (visible) card
    pub cards: HashMap<ProductId, CardPreview>,

    pub swipe_hint: SwipeHint,

    pub overlay: DetailOverlay,

    pub viewport: Viewport,

    /// Index of the focused slot
    pub focus: usize,

    /// Products handed to the order context this session
    pub orders_requested: usize,

    pub phase: AppPhase,

    /// Spinner frame, advanced on every tick
    pub animation_frame: u64,

    next_press_token: u64,
}

impl AppState {
    /// Create the gallery state and mount the cards of the initial category
    pub fn new(catalogue: Catalogue, settings: Settings) -> Self {
        let active_category = initial_category(&catalogue, &settings);

        let mut state = Self {
            catalogue,
            settings,
            active_category,
            cards: HashMap::new(),
            swipe_hint: SwipeHint::default(),
            overlay: DetailOverlay::default(),
            viewport: Viewport::default(),
            focus: 0,
            orders_requested: 0,
            phase: AppPhase::Running,
            animation_frame: 0,
            next_press_token: 0,
        };
        state.reconcile_cards();
        state
    }

    pub fn should_quit(&self) -> bool {
        self.phase == AppPhase::Quitting
    }

    // ─────────────────────────────────────────────────────────
    // Derived views
    // ─────────────────────────────────────────────────────────

    /// Visible slots for the active category
    pub fn slots(&self) -> Vec<Slot<'_>> {
        visible_slots(&self.catalogue.products, &self.active_category)
    }

    pub fn total_slots(&self) -> usize {
        vitrine_core::total_slots(&self.catalogue.products, &self.active_category)
    }

    /// Ids of the products currently rendered as cards, in order
    pub fn visible_product_ids(&self) -> Vec<ProductId> {
        vitrine_core::filter(&self.catalogue.products, &self.active_category)
            .into_iter()
            .map(|p| p.id.clone())
            .collect()
    }

    pub fn layout_mode(&self) -> LayoutMode {
        self.viewport.layout_mode(&self.settings.layout)
    }

    pub fn focused_slot(&self) -> Option<Slot<'_>> {
        self.slots().get(self.focus).copied()
    }

    pub fn focused_product_id(&self) -> Option<ProductId> {
        self.focused_slot()
            .and_then(Slot::product)
            .map(|p| p.id.clone())
    }

    pub fn product(&self, id: &ProductId) -> Option<&Product> {
        self.catalogue.product(id)
    }

    /// Product shown in the detail overlay
    pub fn selected_product(&self) -> Option<&Product> {
        self.overlay.selected().and_then(|id| self.product(id))
    }

    pub fn card(&self, id: &ProductId) -> Option<&CardPreview> {
        self.cards.get(id)
    }

    pub fn card_mut(&mut self, id: &ProductId) -> Option<&mut CardPreview> {
        self.cards.get_mut(id)
    }

    /// The card with a press in progress, if any
    pub fn pressed_card(&self) -> Option<&ProductId> {
        self.cards
            .iter()
            .find(|(_, card)| card.is_pressed())
            .map(|(id, _)| id)
    }

    /// Position of the active category among the controls
    pub fn active_category_index(&self) -> usize {
        self.catalogue
            .categories
            .iter()
            .position(|c| c.id == self.active_category)
            .unwrap_or(0)
    }

    // ─────────────────────────────────────────────────────────
    // Mutations used by the update function
    // ─────────────────────────────────────────────────────────

    /// Allocate a press token that is unique for the session
    pub fn allocate_press_token(&mut self) -> PressToken {
        self.next_press_token += 1;
        PressToken::new(self.next_press_token)
    }

    /// Mount cards for newly visible products and unmount the rest.
    ///
    /// Cards that stay visible keep their state. Returns the ids of unmounted
    /// cards that still had a long-press timer armed; their timers must be
    /// cancelled.
    pub fn reconcile_cards(&mut self) -> Vec<ProductId> {
        let visible = self.visible_product_ids();

        let mut cancelled = Vec::new();
        self.cards.retain(|id, card| {
            let keep = visible.contains(id);
            if !keep && card.has_pending_timer() {
                cancelled.push(id.clone());
            }
            keep
        });

        for id in visible {
            self.cards.entry(id).or_default();
        }

        if !cancelled.is_empty() {
            debug!("Unmounted {} card(s) with pending press timers", cancelled.len());
        }
        cancelled
    }

    /// Keep focus inside `0..total_slots`
    pub fn clamp_focus(&mut self) {
        let total = self.total_slots();
        self.focus = if total == 0 {
            0
        } else {
            self.focus.min(total - 1)
        };
    }

    /// Cards whose media should start loading now, marked as requested.
    ///
    /// Motion media load as soon as the card is mounted; still media wait
    /// until the card is near the viewport.
    pub fn take_media_to_request(&mut self) -> Vec<ProductId> {
        let near = self.layout_mode().near_viewport(
            self.focus,
            self.total_slots(),
            self.viewport.rows_per_screen(),
        );

        let candidates: Vec<(ProductId, bool)> = self
            .slots()
            .into_iter()
            .enumerate()
            .filter_map(|(index, slot)| {
                slot.product().map(|p| {
                    let eager = !p.media.kind().hints().lazy;
                    (p.id.clone(), eager || near.contains(&index))
                })
            })
            .collect();

        let mut requested = Vec::new();
        for (id, due) in candidates {
            if !due {
                continue;
            }
            if let Some(card) = self.cards.get_mut(&id) {
                if card.mark_media_requested() {
                    requested.push(id);
                }
            }
        }
        requested
    }
}

/// Category selected at startup: the configured one when declared, otherwise
/// `all` or the first declared category
fn initial_category(catalogue: &Catalogue, settings: &Settings) -> CategoryId {
    if let Some(configured) = settings.gallery.initial_category.as_deref() {
        let id = CategoryId::new(configured);
        if catalogue.has_category(&id) {
            return id;
        }
        warn!("Configured initial category '{}' is not declared", configured);
    }
    catalogue
        .default_category()
        .cloned()
        .unwrap_or_else(CategoryId::all)
}

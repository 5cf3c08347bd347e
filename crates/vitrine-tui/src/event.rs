//! Terminal event polling
//!
//! Converts crossterm events into gallery messages. Mouse events are hit
//! tested against the same geometry the renderer uses.

use std::time::Duration;

use crossterm::event::{
    self, Event, KeyCode, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::layout::{Position, Rect};

use vitrine_app::input_key::InputKey;
use vitrine_app::{AppState, LayoutMode, Message};
use vitrine_core::prelude::*;
use vitrine_core::{ProductId, Slot};

use crate::layout::{GalleryLayout, HitTarget};

/// Convert crossterm KeyEvent to InputKey
pub fn key_event_to_input(key: crossterm::event::KeyEvent) -> Option<InputKey> {
    match key.code {
        KeyCode::Char(c) if key.modifiers.contains(KeyModifiers::CONTROL) => {
            Some(InputKey::CharCtrl(c))
        }
        KeyCode::Char(c) => Some(InputKey::Char(c)),
        KeyCode::Enter => Some(InputKey::Enter),
        KeyCode::Esc => Some(InputKey::Esc),
        KeyCode::Tab if key.modifiers.contains(KeyModifiers::SHIFT) => Some(InputKey::BackTab),
        KeyCode::Tab => Some(InputKey::Tab),
        KeyCode::BackTab => Some(InputKey::BackTab),
        KeyCode::Up => Some(InputKey::Up),
        KeyCode::Down => Some(InputKey::Down),
        KeyCode::Left => Some(InputKey::Left),
        KeyCode::Right => Some(InputKey::Right),
        KeyCode::Home => Some(InputKey::Home),
        KeyCode::End => Some(InputKey::End),
        _ => None,
    }
}

/// Translate a mouse event into gesture and navigation messages
pub fn mouse_event_to_messages(mouse: MouseEvent, state: &AppState) -> Vec<Message> {
    let area = Rect::new(0, 0, state.viewport.width, state.viewport.height);
    let layout = GalleryLayout::compute(area, state);
    let position = Position::new(mouse.column, mouse.row);

    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => {
            match layout.hit_test(mouse.column, mouse.row) {
                HitTarget::Category(index) => state
                    .catalogue
                    .categories
                    .get(index)
                    .map(|c| Message::SelectCategory { id: c.id.clone() })
                    .into_iter()
                    .collect(),
                HitTarget::Slot(index) => match state.slots().get(index) {
                    Some(Slot::Product(product)) => vec![
                        Message::FocusSlot { index },
                        Message::PressStart {
                            product_id: product.id.clone(),
                        },
                    ],
                    Some(Slot::Placeholder) => vec![Message::FocusSlot { index }],
                    None => Vec::new(),
                },
                HitTarget::CloseDetail => vec![Message::CloseDetail],
                HitTarget::AddToOrder => vec![Message::AddToOrder],
                HitTarget::Nothing => Vec::new(),
            }
        }

        MouseEventKind::Up(MouseButton::Left) => match pressed_card_rect(state, &layout) {
            Some((product_id, rect)) if rect.contains(position) => {
                vec![Message::PressEnd { product_id }]
            }
            Some((product_id, _)) => vec![Message::PressCancel { product_id }],
            None => Vec::new(),
        },

        // Leaving the card while holding cancels the gesture
        MouseEventKind::Drag(MouseButton::Left) => match pressed_card_rect(state, &layout) {
            Some((product_id, rect)) if !rect.contains(position) => {
                vec![Message::PressCancel { product_id }]
            }
            _ => Vec::new(),
        },

        MouseEventKind::ScrollDown | MouseEventKind::ScrollRight => scroll(state, 1, mouse.kind),
        MouseEventKind::ScrollUp | MouseEventKind::ScrollLeft => scroll(state, -1, mouse.kind),

        _ => Vec::new(),
    }
}

/// The pressed card and where it is drawn
fn pressed_card_rect(state: &AppState, layout: &GalleryLayout) -> Option<(ProductId, Rect)> {
    let pressed = state.pressed_card()?;
    let index = state
        .slots()
        .iter()
        .position(|slot| slot.product().is_some_and(|p| &p.id == pressed))?;
    // A pressed card scrolled off screen no longer contains the pointer
    let rect = layout.slot_rect(index).unwrap_or_default();
    Some((pressed.clone(), rect))
}

fn scroll(state: &AppState, direction: i32, kind: MouseEventKind) -> Vec<Message> {
    if state.overlay.is_open() {
        return Vec::new();
    }
    let vertical = matches!(kind, MouseEventKind::ScrollDown | MouseEventKind::ScrollUp);
    let message = match state.layout_mode() {
        LayoutMode::Carousel => Message::CarouselScrolled { delta: direction },
        LayoutMode::Grid { columns } if vertical => Message::MoveFocus {
            delta: direction * columns as i32,
        },
        LayoutMode::Grid { .. } => Message::MoveFocus { delta: direction },
    };
    vec![message]
}

/// Convert one terminal event
pub fn translate(event: Event, state: &AppState) -> Vec<Message> {
    match event {
        Event::Key(key) if key.kind == KeyEventKind::Press => key_event_to_input(key)
            .map(Message::Key)
            .into_iter()
            .collect(),
        Event::Mouse(mouse) => mouse_event_to_messages(mouse, state),
        Event::Resize(width, height) => vec![Message::Resize { width, height }],
        Event::FocusLost => state
            .pressed_card()
            .map(|id| Message::PressCancel {
                product_id: id.clone(),
            })
            .into_iter()
            .collect(),
        _ => Vec::new(),
    }
}

/// Poll for terminal events, producing a `Tick` on timeout
pub fn poll(state: &AppState, timeout: Duration) -> Result<Vec<Message>> {
    if event::poll(timeout)? {
        let event = event::read()?;
        Ok(translate(event, state))
    } else {
        Ok(vec![Message::Tick])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::create_test_state;
    use crossterm::event::KeyEvent;
    use vitrine_app::handler::update;
    use vitrine_core::CategoryId;

    fn mouse(kind: MouseEventKind, column: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind,
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }
    }

    fn down(column: u16, row: u16) -> MouseEvent {
        mouse(MouseEventKind::Down(MouseButton::Left), column, row)
    }

    #[test]
    fn test_char_conversion() {
        let key = KeyEvent::new(KeyCode::Char('a'), KeyModifiers::NONE);
        assert_eq!(key_event_to_input(key), Some(InputKey::Char('a')));
    }

    #[test]
    fn test_char_with_ctrl_conversion() {
        let key = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(key_event_to_input(key), Some(InputKey::CharCtrl('c')));
    }

    #[test]
    fn test_backtab_with_shift() {
        let key = KeyEvent::new(KeyCode::Tab, KeyModifiers::SHIFT);
        assert_eq!(key_event_to_input(key), Some(InputKey::BackTab));
        let key = KeyEvent::new(KeyCode::BackTab, KeyModifiers::SHIFT);
        assert_eq!(key_event_to_input(key), Some(InputKey::BackTab));
    }

    #[test]
    fn test_unsupported_key_ignored() {
        let key = KeyEvent::new(KeyCode::F(5), KeyModifiers::NONE);
        assert_eq!(key_event_to_input(key), None);
    }

    #[test]
    fn test_key_release_is_ignored() {
        let state = create_test_state(100, 30);
        let mut key = KeyEvent::new(KeyCode::Char(' '), KeyModifiers::NONE);
        key.kind = KeyEventKind::Release;
        assert!(translate(Event::Key(key), &state).is_empty());
    }

    #[test]
    fn test_resize_event() {
        let state = create_test_state(100, 30);
        assert_eq!(
            translate(Event::Resize(60, 20), &state),
            vec![Message::Resize {
                width: 60,
                height: 20
            }]
        );
    }

    #[test]
    fn test_press_on_card_focuses_and_starts_press() {
        let state = create_test_state(100, 30);
        assert_eq!(
            mouse_event_to_messages(down(60, 5), &state),
            vec![
                Message::FocusSlot { index: 1 },
                Message::PressStart {
                    product_id: "s2".into()
                },
            ]
        );
    }

    #[test]
    fn test_press_on_placeholder_only_focuses() {
        let mut state = create_test_state(100, 30);
        update(&mut state, Message::FocusSlot { index: 4 });

        // Rows scrolled by one: slots 2 and 3 on top, the placeholder below
        assert_eq!(
            mouse_event_to_messages(down(10, 16), &state),
            vec![Message::FocusSlot { index: 4 }]
        );
    }

    #[test]
    fn test_click_on_category_tab() {
        let state = create_test_state(100, 30);
        let layout = GalleryLayout::compute(Rect::new(0, 0, 100, 30), &state);
        let tab = layout.tabs[2];

        assert_eq!(
            mouse_event_to_messages(down(tab.x + 1, tab.y), &state),
            vec![Message::SelectCategory {
                id: CategoryId::new("stand")
            }]
        );
    }

    #[test]
    fn test_release_inside_card_ends_press() {
        let mut state = create_test_state(100, 30);
        update(
            &mut state,
            Message::PressStart {
                product_id: "s1".into(),
            },
        );

        assert_eq!(
            mouse_event_to_messages(mouse(MouseEventKind::Up(MouseButton::Left), 5, 6), &state),
            vec![Message::PressEnd {
                product_id: "s1".into()
            }]
        );
    }

    #[test]
    fn test_release_outside_card_cancels_press() {
        let mut state = create_test_state(100, 30);
        update(
            &mut state,
            Message::PressStart {
                product_id: "s1".into(),
            },
        );

        assert_eq!(
            mouse_event_to_messages(mouse(MouseEventKind::Up(MouseButton::Left), 70, 6), &state),
            vec![Message::PressCancel {
                product_id: "s1".into()
            }]
        );
    }

    #[test]
    fn test_drag_out_of_card_cancels_press() {
        let mut state = create_test_state(100, 30);
        update(
            &mut state,
            Message::PressStart {
                product_id: "s1".into(),
            },
        );

        let inside = mouse(MouseEventKind::Drag(MouseButton::Left), 8, 6);
        assert!(mouse_event_to_messages(inside, &state).is_empty());

        let outside = mouse(MouseEventKind::Drag(MouseButton::Left), 8, 20);
        assert_eq!(
            mouse_event_to_messages(outside, &state),
            vec![Message::PressCancel {
                product_id: "s1".into()
            }]
        );
    }

    #[test]
    fn test_release_without_press_does_nothing() {
        let state = create_test_state(100, 30);
        let up = mouse(MouseEventKind::Up(MouseButton::Left), 5, 6);
        assert!(mouse_event_to_messages(up, &state).is_empty());
    }

    #[test]
    fn test_wheel_scrolls_carousel() {
        let state = create_test_state(40, 24);
        assert_eq!(
            mouse_event_to_messages(mouse(MouseEventKind::ScrollDown, 5, 5), &state),
            vec![Message::CarouselScrolled { delta: 1 }]
        );
        assert_eq!(
            mouse_event_to_messages(mouse(MouseEventKind::ScrollLeft, 5, 5), &state),
            vec![Message::CarouselScrolled { delta: -1 }]
        );
    }

    #[test]
    fn test_wheel_moves_grid_focus_by_rows() {
        let state = create_test_state(100, 30);
        assert_eq!(
            mouse_event_to_messages(mouse(MouseEventKind::ScrollDown, 5, 5), &state),
            vec![Message::MoveFocus { delta: 2 }]
        );
        assert_eq!(
            mouse_event_to_messages(mouse(MouseEventKind::ScrollRight, 5, 5), &state),
            vec![Message::MoveFocus { delta: 1 }]
        );
    }

    #[test]
    fn test_overlay_controls_and_modality() {
        let mut state = create_test_state(100, 30);
        update(
            &mut state,
            Message::SelectProduct {
                product_id: "s3".into(),
            },
        );
        let layout = GalleryLayout::compute(Rect::new(0, 0, 100, 30), &state);
        let overlay = layout.overlay.unwrap();

        assert_eq!(
            mouse_event_to_messages(down(overlay.close.x, overlay.close.y), &state),
            vec![Message::CloseDetail]
        );
        assert_eq!(
            mouse_event_to_messages(down(overlay.order.x + 2, overlay.order.y), &state),
            vec![Message::AddToOrder]
        );
        assert!(mouse_event_to_messages(down(2, 5), &state).is_empty());
        assert!(
            mouse_event_to_messages(mouse(MouseEventKind::ScrollDown, 5, 5), &state).is_empty()
        );
    }

    #[test]
    fn test_focus_lost_cancels_press() {
        let mut state = create_test_state(100, 30);
        update(
            &mut state,
            Message::PressStart {
                product_id: "s2".into(),
            },
        );

        assert_eq!(
            translate(Event::FocusLost, &state),
            vec![Message::PressCancel {
                product_id: "s2".into()
            }]
        );
    }
}

//! Key event handlers for the gallery and the detail overlay

use crate::input_key::InputKey;
use crate::message::Message;
use crate::state::AppState;

/// Convert key events to messages; the overlay captures keys while open
pub fn handle_key(state: &AppState, key: InputKey) -> Option<Message> {
    if state.overlay.is_open() {
        handle_key_overlay(key)
    } else {
        handle_key_gallery(state, key)
    }
}

/// Handle key events while the detail overlay is shown
fn handle_key_overlay(key: InputKey) -> Option<Message> {
    match key {
        InputKey::Esc | InputKey::Char('q') => Some(Message::CloseDetail),
        InputKey::Char('o' | 'O') => Some(Message::AddToOrder),
        InputKey::CharCtrl('c') => Some(Message::Quit),
        _ => None,
    }
}

/// Handle key events in the gallery
fn handle_key_gallery(state: &AppState, key: InputKey) -> Option<Message> {
    let mode = state.layout_mode();
    let columns = mode.columns() as i32;

    match key {
        InputKey::Char('q') | InputKey::Esc | InputKey::CharCtrl('c') => Some(Message::Quit),

        // Category controls
        InputKey::Tab => Some(Message::NextCategory),
        InputKey::BackTab => Some(Message::PreviousCategory),
        InputKey::Char(c @ '1'..='9') => {
            let index = c.to_digit(10)? as usize - 1;
            state
                .catalogue
                .categories
                .get(index)
                .map(|category| Message::SelectCategory {
                    id: category.id.clone(),
                })
        }

        // Horizontal movement scrolls the carousel container
        InputKey::Left | InputKey::Char('h') => Some(horizontal(mode.is_carousel(), -1)),
        InputKey::Right | InputKey::Char('l') => Some(horizontal(mode.is_carousel(), 1)),

        InputKey::Up | InputKey::Char('k') if !mode.is_carousel() => {
            Some(Message::MoveFocus { delta: -columns })
        }
        InputKey::Down | InputKey::Char('j') if !mode.is_carousel() => {
            Some(Message::MoveFocus { delta: columns })
        }

        InputKey::Home => Some(Message::FocusSlot { index: 0 }),
        InputKey::End => Some(Message::FocusSlot {
            index: state.total_slots().saturating_sub(1),
        }),

        // Card gestures
        InputKey::Enter => Some(Message::ActivateFocused),
        InputKey::Char(' ') => Some(Message::TogglePressFocused),

        _ => None,
    }
}

fn horizontal(carousel: bool, delta: i32) -> Message {
    if carousel {
        Message::CarouselScrolled { delta }
    } else {
        Message::MoveFocus { delta }
    }
}

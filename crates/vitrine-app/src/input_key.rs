//! Abstract input key event, independent of terminal library.
//!
//! The gallery engine only sees `InputKey`; the TUI converts crossterm key
//! events at its boundary so other frontends can drive the engine without
//! depending on crossterm.

/// Abstract input key event, independent of terminal library.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputKey {
    /// Regular character key (a-z, 0-9, symbols)
    Char(char),
    /// Character with Ctrl modifier (Ctrl+c, ...)
    CharCtrl(char),

    Up,
    Down,
    Left,
    Right,
    Home,
    End,

    Enter,
    Esc,
    Tab,
    /// Shift+Tab
    BackTab,
}

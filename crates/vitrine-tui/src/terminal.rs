//! Terminal setup and restoration

use std::io::stdout;

use crossterm::event::{
    DisableFocusChange, DisableMouseCapture, EnableFocusChange, EnableMouseCapture,
};
use crossterm::execute;

use vitrine_core::prelude::*;

/// Install a panic hook that restores the terminal
pub fn install_panic_hook() {
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = execute!(stdout(), DisableMouseCapture, DisableFocusChange);
        ratatui::restore();
        original_hook(panic_info);
    }));
}

/// Report mouse and focus events; needed for press gestures
pub fn enable_mouse_capture() -> Result<()> {
    execute!(stdout(), EnableMouseCapture, EnableFocusChange)
        .map_err(|e| Error::terminal(format!("Failed to enable mouse capture: {}", e)))
}

pub fn disable_mouse_capture() -> Result<()> {
    execute!(stdout(), DisableMouseCapture, DisableFocusChange)
        .map_err(|e| Error::terminal(format!("Failed to disable mouse capture: {}", e)))
}

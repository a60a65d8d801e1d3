//! Platform-agnostic input event types.
//!
//! Every backend maps its native input to these enums. The core components
//! never see raw platform input.

use serde::{Deserialize, Serialize};

/// A platform-agnostic input event.
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    /// A named key pressed (non-text).
    KeyPress(Key),
    /// Character typed.
    TextInput(char),
    /// Backspace / delete-left.
    Backspace,
    /// Pointer click at absolute position (mouse or touch).
    PointerClick { x: i32, y: i32 },
    /// The page gained focus.
    FocusGained,
    /// The page lost focus.
    FocusLost,
    /// User requested quit (window close, etc.).
    Quit,
}

/// Named keys that map across all backends.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Key {
    Enter,
    Escape,
    Tab,
    Up,
    Down,
    Left,
    Right,
}

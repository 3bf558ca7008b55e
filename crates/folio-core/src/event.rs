#![forbid(unsafe_code)]

//! Input vocabulary shared by all carousel surfaces.
//!
//! Hosts forward DOM pointer and keyboard events; only the pieces the
//! controllers act on are modelled here.

use serde::{Deserialize, Serialize};

/// Pointer button reported with pointer-down/up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PointerButton {
    Primary,
    Middle,
    Secondary,
}

impl PointerButton {
    /// Map a DOM `PointerEvent.button` value.
    ///
    /// Returns `None` for back/forward/eraser buttons.
    #[must_use]
    pub const fn from_dom(button: i16) -> Option<Self> {
        match button {
            0 => Some(Self::Primary),
            1 => Some(Self::Middle),
            2 => Some(Self::Secondary),
            _ => None,
        }
    }
}

/// Keys that carousel surfaces respond to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KeyCode {
    ArrowLeft,
    ArrowRight,
    ArrowUp,
    ArrowDown,
    Home,
    End,
    Escape,
}

impl KeyCode {
    /// Map a DOM `KeyboardEvent.key` string.
    ///
    /// Legacy IE/Edge names (`Left`, `Esc`, ...) are accepted.
    #[must_use]
    pub fn from_dom_key(key: &str) -> Option<Self> {
        Some(match key {
            "ArrowLeft" | "Left" => Self::ArrowLeft,
            "ArrowRight" | "Right" => Self::ArrowRight,
            "ArrowUp" | "Up" => Self::ArrowUp,
            "ArrowDown" | "Down" => Self::ArrowDown,
            "Home" => Self::Home,
            "End" => Self::End,
            "Escape" | "Esc" => Self::Escape,
            _ => return None,
        })
    }
}

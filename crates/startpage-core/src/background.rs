//! Page background preference.
//!
//! The preference is a hex color string persisted in the store. A missing or
//! unparseable value falls back to the theme default; reads never fail the
//! page.

use log::warn;
use startpage_types::color::{Color, parse_hex_color};
use startpage_types::error::Result;

use crate::display::DisplayRegistry;
use crate::display::helpers::ensure_fill;
use crate::store::KeyValueStore;
use crate::theme::{self, Theme};

/// Store key for the background preference.
pub const BACKGROUND_KEY: &str = "background";

/// Preset page colors cycled by the background shortcut.
pub const PRESETS: [&str; 4] = ["#12121e", "#1e1e2e", "#0f1419", "#26203a"];

/// Background color state for the page.
#[derive(Debug)]
pub struct Background {
    /// User-chosen color, or `None` for the theme default.
    color: Option<Color>,
}

impl Background {
    pub fn new() -> Self {
        Self { color: None }
    }

    /// Restore the preference from the store. Invalid stored values are
    /// logged and ignored.
    pub fn load(store: &dyn KeyValueStore) -> Self {
        let color = match store.get(BACKGROUND_KEY) {
            Some(raw) => match parse_hex_color(&raw) {
                Some(c) => Some(c),
                None => {
                    warn!("ignoring invalid background value {raw:?}");
                    None
                }
            },
            None => None,
        };
        Self { color }
    }

    /// Apply and persist a new background color. Returns `false` without
    /// touching anything when the hex string does not parse.
    pub fn set(&mut self, store: &mut dyn KeyValueStore, hex: &str) -> Result<bool> {
        match parse_hex_color(hex) {
            Some(c) => {
                self.color = Some(c);
                store.set(BACKGROUND_KEY, hex)?;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Advance to the next preset color and persist it. Starts from the
    /// first preset when the current color is not a preset.
    pub fn cycle_preset(&mut self, store: &mut dyn KeyValueStore) -> Result<&'static str> {
        let current = self
            .color
            .and_then(|c| PRESETS.iter().position(|p| parse_hex_color(p) == Some(c)));
        let next = match current {
            Some(i) => (i + 1) % PRESETS.len(),
            None => 0,
        };
        let hex = PRESETS[next];
        self.set(store, hex)?;
        Ok(hex)
    }

    /// Drop the preference and fall back to the theme default.
    pub fn reset(&mut self, store: &mut dyn KeyValueStore) -> Result<()> {
        self.color = None;
        store.remove(BACKGROUND_KEY)
    }

    /// Color to paint the page with.
    pub fn effective(&self, th: &Theme) -> Color {
        self.color.unwrap_or(th.page_bg)
    }

    /// Synchronize the full-page background fill.
    pub fn update_display(&self, reg: &mut DisplayRegistry, th: &Theme) {
        ensure_fill(
            reg,
            "page_bg",
            0,
            0,
            theme::SCREEN_W,
            theme::SCREEN_H,
            self.effective(th),
            theme::Z_PAGE,
        );
    }
}

impl Default for Background {
    fn default() -> Self {
        Self::new()
    }
}

//! Quick-link grid.
//!
//! The in-memory link list is the source of truth; the display registry and
//! the store are both derived from it. Defaults come from config and are not
//! persisted, user-added links are.

pub mod store;

pub use store::{QUICK_LINKS_KEY, QuickLink, load_links, save_links};

use startpage_types::config::DefaultLink;
use startpage_types::error::Result;

use crate::display::DisplayRegistry;
use crate::display::helpers::{ensure_fill, ensure_text};
use crate::store::KeyValueStore;
use crate::theme::{self, Theme};

/// Grid of quick-link tiles with a keyboard cursor.
#[derive(Debug)]
pub struct LinkGrid {
    defaults: Vec<QuickLink>,
    custom: Vec<QuickLink>,
    cursor: usize,
}

impl LinkGrid {
    pub fn new(defaults: &[DefaultLink]) -> Self {
        Self {
            defaults: defaults
                .iter()
                .map(|d| QuickLink::new(&d.title, &d.url))
                .collect(),
            custom: Vec::new(),
            cursor: 0,
        }
    }

    /// Restore user-added links from the store.
    pub fn load_custom(&mut self, store: &dyn KeyValueStore) {
        self.custom = load_links(store);
        self.clamp_cursor();
    }

    /// Total number of links, defaults first.
    pub fn len(&self) -> usize {
        self.defaults.len() + self.custom.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Number of tiles actually shown.
    pub fn visible_len(&self) -> usize {
        self.len().min(theme::MAX_TILES)
    }

    /// Whether the grid has no room for another tile. A link added past
    /// this point would be stored but never rendered, so callers refuse
    /// the add instead.
    pub fn is_full(&self) -> bool {
        self.len() >= theme::MAX_TILES
    }

    pub fn get(&self, index: usize) -> Option<&QuickLink> {
        if index < self.defaults.len() {
            self.defaults.get(index)
        } else {
            self.custom.get(index - self.defaults.len())
        }
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Link under the cursor.
    pub fn selected(&self) -> Option<&QuickLink> {
        self.get(self.cursor)
    }

    /// Append a user link and persist the custom set. The caller validates
    /// the URL first.
    pub fn add_link(&mut self, store: &mut dyn KeyValueStore, title: &str, url: &str) -> Result<()> {
        self.custom.push(QuickLink::new(title, url));
        save_links(store, &self.custom)
    }

    /// Move the cursor directly to a tile. Out-of-range indexes are ignored.
    pub fn select(&mut self, index: usize) {
        if index < self.visible_len() {
            self.cursor = index;
        }
    }

    /// Move the cursor one step in grid coordinates.
    pub fn move_cursor(&mut self, dx: i32, dy: i32) {
        if self.visible_len() == 0 {
            return;
        }
        let cols = theme::GRID_COLS;
        let mut col = (self.cursor % cols) as i32 + dx;
        let mut row = (self.cursor / cols) as i32 + dy;
        let last = self.visible_len() as i32 - 1;
        let last_row = last / cols as i32;
        col = col.clamp(0, cols as i32 - 1);
        row = row.clamp(0, last_row);
        let next = (row * cols as i32 + col).min(last);
        self.cursor = next as usize;
    }

    fn clamp_cursor(&mut self) {
        if self.visible_len() == 0 {
            self.cursor = 0;
        } else {
            self.cursor = self.cursor.min(self.visible_len() - 1);
        }
    }

    /// Tile index under a page-space point, if any.
    pub fn tile_at(&self, x: i32, y: i32) -> Option<usize> {
        let rel_x = x - theme::GRID_X;
        let rel_y = y - theme::GRID_Y;
        if rel_x < 0 || rel_y < 0 {
            return None;
        }
        let pitch_x = theme::TILE_W + theme::TILE_GAP_X;
        let pitch_y = theme::TILE_H + theme::TILE_GAP_Y;
        let col = rel_x / pitch_x;
        let row = rel_y / pitch_y;
        if col >= theme::GRID_COLS as i32 {
            return None;
        }
        // Clicks in the gap between tiles land past the tile extent.
        if rel_x % pitch_x >= theme::TILE_W || rel_y % pitch_y >= theme::TILE_H {
            return None;
        }
        let index = (row * theme::GRID_COLS as i32 + col) as usize;
        if index < self.visible_len() {
            Some(index)
        } else {
            None
        }
    }

    /// Synchronize the tile display regions.
    pub fn update_display(&self, reg: &mut DisplayRegistry, th: &Theme) {
        for i in 0..theme::MAX_TILES {
            let bg_name = format!("tile_{i}_bg");
            let glyph_name = format!("tile_{i}_glyph");
            let title_name = format!("tile_{i}_title");
            let Some(link) = self.get(i).filter(|_| i < self.visible_len()) else {
                for name in [&bg_name, &glyph_name, &title_name] {
                    if let Ok(obj) = reg.get_mut(name) {
                        obj.visible = false;
                    }
                }
                continue;
            };

            let col = (i % theme::GRID_COLS) as i32;
            let row = (i / theme::GRID_COLS) as i32;
            let x = theme::GRID_X + col * (theme::TILE_W + theme::TILE_GAP_X);
            let y = theme::GRID_Y + row * (theme::TILE_H + theme::TILE_GAP_Y);

            let bg = if i == self.cursor { th.cursor } else { th.tile_bg };
            ensure_fill(reg, &bg_name, x, y, theme::TILE_W, theme::TILE_H, bg, theme::Z_CONTENT);
            if let Ok(obj) = reg.get_mut(&bg_name) {
                obj.fill = Some(bg);
                obj.visible = true;
            }

            let glyph = link
                .title
                .chars()
                .next()
                .map(|c| c.to_uppercase().to_string())
                .unwrap_or_else(|| "?".to_string());
            ensure_text(
                reg,
                &glyph_name,
                x + theme::TILE_W / 2,
                y + 1,
                theme::tile_accent(i),
                theme::Z_CONTENT + 1,
            );
            if let Ok(obj) = reg.get_mut(&glyph_name) {
                obj.text = Some(glyph);
                obj.visible = true;
            }

            let mut title = link.title.clone();
            let max = (theme::TILE_W - 2) as usize;
            if title.chars().count() > max {
                title = title.chars().take(max.saturating_sub(1)).collect();
                title.push('\u{2026}');
            }
            let title_x = x + (theme::TILE_W - title.chars().count() as i32) / 2;
            ensure_text(reg, &title_name, title_x, y + 2, th.text, theme::Z_CONTENT + 1);
            if let Ok(obj) = reg.get_mut(&title_name) {
                obj.text = Some(title);
                obj.visible = true;
            }
        }
    }
}

//! Layout constants and page palette.
//!
//! The page is laid out on a fixed cell grid. Backends map one cell to one
//! terminal cell (or a scaled pixel block); all component geometry below is
//! expressed in cells.

use startpage_types::color::Color;

/// Page width in cells.
pub const SCREEN_W: i32 = 100;
/// Page height in cells.
pub const SCREEN_H: i32 = 30;

/// Frame loop cadence. Backends poll input with a 100ms timeout, so ten
/// ticks approximate one second.
pub const TICKS_PER_SEC: u32 = 10;

// -- Clock --------------------------------------------------------------------

pub const CLOCK_TIME_Y: i32 = 2;
pub const CLOCK_DATE_Y: i32 = 4;

// -- Search bar ---------------------------------------------------------------

pub const SEARCH_Y: i32 = 7;
pub const SEARCH_X: i32 = 14;
pub const SEARCH_W: i32 = 56;
/// Engine selector sits left of the input field.
pub const ENGINE_X: i32 = 2;
pub const ENGINE_W: i32 = 12;
/// Search button sits right of the input field.
pub const SEARCH_BTN_X: i32 = 72;
pub const SEARCH_BTN_W: i32 = 10;

// -- Link grid ----------------------------------------------------------------

pub const GRID_X: i32 = 2;
pub const GRID_Y: i32 = 10;
pub const GRID_COLS: usize = 5;
pub const TILE_W: i32 = 18;
pub const TILE_H: i32 = 4;
pub const TILE_GAP_X: i32 = 1;
pub const TILE_GAP_Y: i32 = 1;
/// Maximum tiles the fixed grid area can show (three rows).
pub const MAX_TILES: usize = 15;

// -- Toast --------------------------------------------------------------------

pub const TOAST_Y: i32 = SCREEN_H - 2;

// -- Modal --------------------------------------------------------------------

pub const MODAL_W: i32 = 52;
pub const MODAL_H: i32 = 10;

// -- Z order ------------------------------------------------------------------

/// Page background.
pub const Z_PAGE: i32 = 0;
/// Tiles, search bar, clock.
pub const Z_CONTENT: i32 = 100;
/// Toast sits above content.
pub const Z_TOAST: i32 = 900;
/// Modal overlay sits above everything.
pub const Z_MODAL: i32 = 950;

/// Page palette.
#[derive(Debug, Clone)]
pub struct Theme {
    pub page_bg: Color,
    pub text: Color,
    pub dim_text: Color,
    pub accent: Color,
    pub tile_bg: Color,
    /// Highlight for the tile under the keyboard cursor.
    pub cursor: Color,
    pub field_bg: Color,
    pub field_focus: Color,
    pub modal_bg: Color,
    pub info: Color,
    pub success: Color,
    pub error: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            page_bg: Color::rgb(18, 18, 30),
            text: Color::rgb(230, 230, 235),
            dim_text: Color::rgb(140, 140, 155),
            accent: Color::rgb(102, 126, 234),
            tile_bg: Color::rgb(40, 42, 62),
            cursor: Color::rgb(118, 75, 162),
            field_bg: Color::rgb(32, 32, 48),
            field_focus: Color::rgb(102, 126, 234),
            modal_bg: Color::rgb(28, 28, 44),
            info: Color::rgb(90, 140, 220),
            success: Color::rgb(80, 180, 110),
            error: Color::rgb(210, 80, 90),
        }
    }
}

/// Accent palette cycled across tiles by index.
pub const TILE_ACCENTS: [Color; 6] = [
    Color::rgb(102, 126, 234),
    Color::rgb(118, 75, 162),
    Color::rgb(80, 160, 140),
    Color::rgb(200, 120, 80),
    Color::rgb(170, 90, 150),
    Color::rgb(90, 140, 200),
];

/// Accent color for the tile at `index`.
pub fn tile_accent(index: usize) -> Color {
    TILE_ACCENTS[index % TILE_ACCENTS.len()]
}

//! Search bar: engine selection and query redirection.
//!
//! A submitted query becomes a redirect URL for the selected engine, with the
//! query percent-encoded. Empty and whitespace-only queries are ignored.

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};

use crate::display::DisplayRegistry;
use crate::display::helpers::{ensure_fill, ensure_text};
use crate::theme::{self, Theme};
use crate::ui::InputField;

/// Characters left untouched when encoding a query, matching the unreserved
/// set of `encodeURIComponent`.
const QUERY_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Supported search engines, in cycling order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchEngine {
    Google,
    Baidu,
    Bing,
    DuckDuckGo,
}

impl SearchEngine {
    pub const ALL: [SearchEngine; 4] = [
        SearchEngine::Google,
        SearchEngine::Baidu,
        SearchEngine::Bing,
        SearchEngine::DuckDuckGo,
    ];

    /// Identifier used in config files.
    pub fn key(self) -> &'static str {
        match self {
            SearchEngine::Google => "google",
            SearchEngine::Baidu => "baidu",
            SearchEngine::Bing => "bing",
            SearchEngine::DuckDuckGo => "duckduckgo",
        }
    }

    /// Human-readable label for the engine selector.
    pub fn label(self) -> &'static str {
        match self {
            SearchEngine::Google => "Google",
            SearchEngine::Baidu => "Baidu",
            SearchEngine::Bing => "Bing",
            SearchEngine::DuckDuckGo => "DuckDuckGo",
        }
    }

    /// URL prefix the encoded query is appended to.
    pub fn prefix(self) -> &'static str {
        match self {
            SearchEngine::Google => "https://www.google.com/search?q=",
            SearchEngine::Baidu => "https://www.baidu.com/s?wd=",
            SearchEngine::Bing => "https://www.bing.com/search?q=",
            SearchEngine::DuckDuckGo => "https://duckduckgo.com/?q=",
        }
    }

    /// Look up an engine by its config identifier.
    pub fn from_key(key: &str) -> Option<SearchEngine> {
        Self::ALL.iter().copied().find(|e| e.key() == key)
    }

    /// The next engine in cycling order, wrapping around.
    pub fn next(self) -> SearchEngine {
        let idx = Self::ALL.iter().position(|e| *e == self).unwrap_or(0);
        Self::ALL[(idx + 1) % Self::ALL.len()]
    }
}

/// Build the redirect URL for a raw query, or `None` when the trimmed query
/// is empty.
pub fn query_url(engine: SearchEngine, raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    let encoded = utf8_percent_encode(trimmed, QUERY_SET);
    Some(format!("{}{encoded}", engine.prefix()))
}

/// Search bar state: the input field plus the selected engine.
#[derive(Debug)]
pub struct SearchBar {
    pub field: InputField,
    pub engine: SearchEngine,
}

impl SearchBar {
    pub fn new(engine: SearchEngine) -> Self {
        Self {
            field: InputField::with_placeholder("Search or press / to focus"),
            engine,
        }
    }

    /// Cycle to the next engine.
    pub fn cycle_engine(&mut self) {
        self.engine = self.engine.next();
    }

    /// Consume the current query and return the redirect URL. The field is
    /// left untouched when the query is empty.
    pub fn submit(&mut self) -> Option<String> {
        let url = query_url(self.engine, &self.field.text)?;
        self.field.clear();
        Some(url)
    }

    /// Synchronize the search bar display regions.
    pub fn update_display(&self, reg: &mut DisplayRegistry, th: &Theme) {
        ensure_fill(
            reg,
            "search_engine",
            theme::ENGINE_X,
            theme::SEARCH_Y,
            theme::ENGINE_W,
            1,
            th.field_bg,
            theme::Z_CONTENT,
        );
        if let Ok(obj) = reg.get_mut("search_engine") {
            obj.text = Some(format!("[{}]", self.engine.label()));
            obj.text_color = th.accent;
        }

        let field_bg = if self.field.focused {
            th.field_focus
        } else {
            th.field_bg
        };
        ensure_fill(
            reg,
            "search_field",
            theme::SEARCH_X,
            theme::SEARCH_Y,
            theme::SEARCH_W,
            1,
            field_bg,
            theme::Z_CONTENT,
        );
        if let Ok(obj) = reg.get_mut("search_field") {
            let mut text = self.field.render_text().to_string();
            if self.field.focused {
                text.push('_');
            }
            obj.text = Some(text);
            obj.text_color = if self.field.text.is_empty() && !self.field.focused {
                th.dim_text
            } else {
                th.text
            };
        }

        ensure_fill(
            reg,
            "search_button",
            theme::SEARCH_BTN_X,
            theme::SEARCH_Y,
            theme::SEARCH_BTN_W,
            1,
            th.accent,
            theme::Z_CONTENT,
        );
        if let Ok(obj) = reg.get_mut("search_button") {
            obj.text = Some(" Search ".to_string());
            obj.text_color = th.page_bg;
        }
    }

    /// Whether a page-space click lands on the search field.
    pub fn hit_field(&self, x: i32, y: i32) -> bool {
        y == theme::SEARCH_Y && (theme::SEARCH_X..theme::SEARCH_X + theme::SEARCH_W).contains(&x)
    }

    /// Whether a page-space click lands on the search button.
    pub fn hit_button(&self, x: i32, y: i32) -> bool {
        y == theme::SEARCH_Y
            && (theme::SEARCH_BTN_X..theme::SEARCH_BTN_X + theme::SEARCH_BTN_W).contains(&x)
    }

    /// Whether a page-space click lands on the engine selector.
    pub fn hit_engine(&self, x: i32, y: i32) -> bool {
        y == theme::SEARCH_Y && (theme::ENGINE_X..theme::ENGINE_X + theme::ENGINE_W).contains(&x)
    }
}

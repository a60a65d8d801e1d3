//! Add-link modal dialog.
//!
//! Opening always starts from a blank form with the title field focused.
//! Submission validates before anything is handed back; on failure the modal
//! stays open with the input intact.

use crate::display::DisplayRegistry;
use crate::display::helpers::{ensure_fill, ensure_text, hide_objects};
use crate::theme::{self, Theme};
use crate::ui::InputField;
use crate::validate::is_valid_url;

/// Which modal field has keyboard focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModalField {
    Title,
    Url,
}

/// Result of a save attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SaveOutcome {
    /// Both fields passed validation; the modal has closed.
    Saved { title: String, url: String },
    /// A trimmed field was empty; the modal stays open.
    EmptyFields,
    /// The URL failed validation; the modal stays open.
    InvalidUrl,
}

const MODAL_OBJECTS: [&str; 8] = [
    "modal_bg",
    "modal_heading",
    "modal_title_label",
    "modal_title_field",
    "modal_url_label",
    "modal_url_field",
    "modal_save",
    "modal_cancel",
];

/// Modal state for adding a quick link.
#[derive(Debug)]
pub struct AddLinkModal {
    open: bool,
    pub title: InputField,
    pub url: InputField,
    focus: ModalField,
}

impl AddLinkModal {
    pub fn new() -> Self {
        Self {
            open: false,
            title: InputField::with_placeholder("Title"),
            url: InputField::with_placeholder("https://"),
            focus: ModalField::Title,
        }
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn focus(&self) -> ModalField {
        self.focus
    }

    /// Open with cleared fields and focus on the title.
    pub fn open(&mut self) {
        self.open = true;
        self.title.clear();
        self.url.clear();
        self.set_focus(ModalField::Title);
    }

    /// Close, discarding any input.
    pub fn close(&mut self) {
        self.open = false;
        self.title.clear();
        self.url.clear();
    }

    pub fn set_focus(&mut self, field: ModalField) {
        self.focus = field;
        self.title.focused = field == ModalField::Title;
        self.url.focused = field == ModalField::Url;
    }

    /// Move focus to the other field.
    pub fn toggle_focus(&mut self) {
        let next = match self.focus {
            ModalField::Title => ModalField::Url,
            ModalField::Url => ModalField::Title,
        };
        self.set_focus(next);
    }

    fn focused_field_mut(&mut self) -> &mut InputField {
        match self.focus {
            ModalField::Title => &mut self.title,
            ModalField::Url => &mut self.url,
        }
    }

    /// Type a character into the focused field.
    pub fn insert(&mut self, ch: char) {
        self.focused_field_mut().insert(ch);
    }

    /// Backspace in the focused field.
    pub fn backspace(&mut self) {
        self.focused_field_mut().backspace();
    }

    /// Validate and, on success, close and return the trimmed values.
    pub fn submit(&mut self) -> SaveOutcome {
        let title = self.title.text.trim().to_string();
        let url = self.url.text.trim().to_string();
        if title.is_empty() || url.is_empty() {
            return SaveOutcome::EmptyFields;
        }
        if !is_valid_url(&url) {
            return SaveOutcome::InvalidUrl;
        }
        self.close();
        SaveOutcome::Saved { title, url }
    }

    fn origin() -> (i32, i32) {
        (
            (theme::SCREEN_W - theme::MODAL_W) / 2,
            (theme::SCREEN_H - theme::MODAL_H) / 2,
        )
    }

    /// Whether a page-space point lies inside the modal box.
    pub fn contains(&self, x: i32, y: i32) -> bool {
        let (mx, my) = Self::origin();
        (mx..mx + theme::MODAL_W).contains(&x) && (my..my + theme::MODAL_H).contains(&y)
    }

    /// Field under a page-space point, if any.
    pub fn field_at(&self, x: i32, y: i32) -> Option<ModalField> {
        let (mx, my) = Self::origin();
        let in_row = (mx + 2..mx + theme::MODAL_W - 2).contains(&x);
        if in_row && y == my + 3 {
            Some(ModalField::Title)
        } else if in_row && y == my + 5 {
            Some(ModalField::Url)
        } else {
            None
        }
    }

    /// Whether a page-space point lands on the save button.
    pub fn hit_save(&self, x: i32, y: i32) -> bool {
        let (mx, my) = Self::origin();
        y == my + theme::MODAL_H - 2 && (mx + 2..mx + 10).contains(&x)
    }

    /// Whether a page-space point lands on the cancel button.
    pub fn hit_cancel(&self, x: i32, y: i32) -> bool {
        let (mx, my) = Self::origin();
        y == my + theme::MODAL_H - 2 && (mx + 12..mx + 22).contains(&x)
    }

    /// Synchronize the modal display regions.
    pub fn update_display(&self, reg: &mut DisplayRegistry, th: &Theme) {
        if !self.open {
            hide_objects(reg, &MODAL_OBJECTS);
            return;
        }
        let (mx, my) = Self::origin();

        ensure_fill(
            reg,
            "modal_bg",
            mx,
            my,
            theme::MODAL_W,
            theme::MODAL_H,
            th.modal_bg,
            theme::Z_MODAL,
        );
        if let Ok(obj) = reg.get_mut("modal_bg") {
            obj.visible = true;
        }

        ensure_text(reg, "modal_heading", mx + 2, my + 1, th.text, theme::Z_MODAL + 1);
        if let Ok(obj) = reg.get_mut("modal_heading") {
            obj.text = Some("Add Quick Link".to_string());
            obj.visible = true;
        }

        ensure_text(reg, "modal_title_label", mx + 2, my + 2, th.dim_text, theme::Z_MODAL + 1);
        if let Ok(obj) = reg.get_mut("modal_title_label") {
            obj.text = Some("Title".to_string());
            obj.visible = true;
        }
        self.sync_field(reg, th, "modal_title_field", &self.title, mx + 2, my + 3);

        ensure_text(reg, "modal_url_label", mx + 2, my + 4, th.dim_text, theme::Z_MODAL + 1);
        if let Ok(obj) = reg.get_mut("modal_url_label") {
            obj.text = Some("URL".to_string());
            obj.visible = true;
        }
        self.sync_field(reg, th, "modal_url_field", &self.url, mx + 2, my + 5);

        ensure_fill(
            reg,
            "modal_save",
            mx + 2,
            my + theme::MODAL_H - 2,
            8,
            1,
            th.accent,
            theme::Z_MODAL + 1,
        );
        if let Ok(obj) = reg.get_mut("modal_save") {
            obj.text = Some("  Save  ".to_string());
            obj.text_color = th.page_bg;
            obj.visible = true;
        }

        ensure_fill(
            reg,
            "modal_cancel",
            mx + 12,
            my + theme::MODAL_H - 2,
            10,
            1,
            th.field_bg,
            theme::Z_MODAL + 1,
        );
        if let Ok(obj) = reg.get_mut("modal_cancel") {
            obj.text = Some("  Cancel  ".to_string());
            obj.text_color = th.text;
            obj.visible = true;
        }
    }

    fn sync_field(
        &self,
        reg: &mut DisplayRegistry,
        th: &Theme,
        name: &str,
        field: &InputField,
        x: i32,
        y: i32,
    ) {
        let bg = if field.focused { th.field_focus } else { th.field_bg };
        ensure_fill(reg, name, x, y, theme::MODAL_W - 4, 1, bg, theme::Z_MODAL + 1);
        if let Ok(obj) = reg.get_mut(name) {
            let mut text = field.render_text().to_string();
            if field.focused {
                text.push('_');
            }
            obj.fill = Some(bg);
            obj.text = Some(text);
            obj.text_color = if field.text.is_empty() && !field.focused {
                th.dim_text
            } else {
                th.text
            };
            obj.visible = true;
        }
    }
}

impl Default for AddLinkModal {
    fn default() -> Self {
        Self::new()
    }
}

//! Toast notifications.
//!
//! One toast at a time; a new notification replaces the current one and
//! resets the countdown. Dismissal is tick-driven so the frame loop owns all
//! timing.

use crate::display::DisplayRegistry;
use crate::display::helpers::ensure_fill;
use crate::theme::{self, Theme};
use startpage_types::color::Color;

/// How long a toast stays visible, in frame ticks.
pub const TOAST_TICKS: u32 = 3 * theme::TICKS_PER_SEC;

/// Visual severity of a toast.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Info,
    Success,
    Error,
}

impl ToastKind {
    fn color(self, th: &Theme) -> Color {
        match self {
            ToastKind::Info => th.info,
            ToastKind::Success => th.success,
            ToastKind::Error => th.error,
        }
    }
}

/// Transient notification banner at the bottom of the page.
#[derive(Debug)]
pub struct Toast {
    message: String,
    kind: ToastKind,
    ticks_remaining: u32,
}

impl Toast {
    pub fn new() -> Self {
        Self {
            message: String::new(),
            kind: ToastKind::Info,
            ticks_remaining: 0,
        }
    }

    /// Show a message, replacing any current toast.
    pub fn notify(&mut self, message: &str, kind: ToastKind) {
        self.message = message.to_string();
        self.kind = kind;
        self.ticks_remaining = TOAST_TICKS;
    }

    /// Advance the countdown by one frame.
    pub fn tick(&mut self) {
        self.ticks_remaining = self.ticks_remaining.saturating_sub(1);
    }

    pub fn visible(&self) -> bool {
        self.ticks_remaining > 0
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn kind(&self) -> ToastKind {
        self.kind
    }

    /// Synchronize the toast display region.
    pub fn update_display(&self, reg: &mut DisplayRegistry, th: &Theme) {
        let w = (self.message.len() as i32 + 4).min(theme::SCREEN_W);
        let x = (theme::SCREEN_W - w) / 2;
        ensure_fill(
            reg,
            "toast",
            x,
            theme::TOAST_Y,
            w,
            1,
            self.kind.color(th),
            theme::Z_TOAST,
        );
        if let Ok(obj) = reg.get_mut("toast") {
            if self.visible() {
                obj.text = Some(format!("  {}  ", self.message));
                obj.text_color = th.page_bg;
            } else {
                obj.visible = false;
            }
        }
    }
}

impl Default for Toast {
    fn default() -> Self {
        Self::new()
    }
}

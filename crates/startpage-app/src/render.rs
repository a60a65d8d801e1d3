//! Frame rendering: project component state into the display registry.

use startpage_core::display::DisplayRegistry;

use crate::state::App;

/// Synchronize every component's display regions, back to front.
pub fn sync_display(app: &App, reg: &mut DisplayRegistry) {
    app.background.update_display(reg, &app.theme);
    app.clock.update_display(reg, &app.theme);
    app.search.update_display(reg, &app.theme);
    app.grid.update_display(reg, &app.theme);
    app.toast.update_display(reg, &app.theme);
    app.modal.update_display(reg, &app.theme);
}

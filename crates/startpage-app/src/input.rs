//! Input dispatch.
//!
//! The modal, when open, captures all input; otherwise events go to the
//! page. Failures surface as toasts, never as a crashed page.

use log::warn;
use startpage_core::modal::SaveOutcome;
use startpage_core::nav::{Navigator, safe_navigate};
use startpage_core::notify::ToastKind;
use startpage_types::input::{InputEvent, Key};

use crate::state::App;

/// Route one input event.
pub fn handle_event(app: &mut App, nav: &mut dyn Navigator, event: InputEvent) {
    if event == InputEvent::Quit {
        app.running = false;
        return;
    }
    if app.modal.is_open() {
        handle_modal_event(app, event);
    } else {
        handle_page_event(app, nav, event);
    }
}

fn handle_page_event(app: &mut App, nav: &mut dyn Navigator, event: InputEvent) {
    match event {
        InputEvent::TextInput(ch) => {
            if app.search.field.focused {
                app.search.field.insert(ch);
            } else {
                match ch {
                    '/' => app.search.field.focused = true,
                    'a' => open_add_modal(app),
                    'e' => app.search.cycle_engine(),
                    'b' => cycle_background(app),
                    'B' => reset_background(app),
                    's' => app
                        .toast
                        .notify("Settings are not available yet", ToastKind::Info),
                    'q' => app.running = false,
                    _ => {}
                }
            }
        }
        InputEvent::Backspace => {
            if app.search.field.focused {
                app.search.field.backspace();
            }
        }
        InputEvent::KeyPress(Key::Enter) => {
            if app.search.field.focused {
                if let Some(url) = app.search.submit() {
                    navigate(app, nav, &url);
                }
            } else if let Some(link) = app.grid.selected() {
                let url = link.url.clone();
                navigate(app, nav, &url);
            }
        }
        InputEvent::KeyPress(Key::Escape) => {
            app.search.field.focused = false;
        }
        InputEvent::KeyPress(Key::Up) => grid_move(app, 0, -1),
        InputEvent::KeyPress(Key::Down) => grid_move(app, 0, 1),
        InputEvent::KeyPress(Key::Left) => grid_move(app, -1, 0),
        InputEvent::KeyPress(Key::Right) => grid_move(app, 1, 0),
        InputEvent::PointerClick { x, y } => handle_page_click(app, nav, x, y),
        _ => {}
    }
}

fn grid_move(app: &mut App, dx: i32, dy: i32) {
    if !app.search.field.focused {
        app.grid.move_cursor(dx, dy);
    }
}

fn handle_page_click(app: &mut App, nav: &mut dyn Navigator, x: i32, y: i32) {
    if app.search.hit_field(x, y) {
        app.search.field.focused = true;
        return;
    }
    app.search.field.focused = false;
    if app.search.hit_engine(x, y) {
        app.search.cycle_engine();
    } else if app.search.hit_button(x, y) {
        if let Some(url) = app.search.submit() {
            navigate(app, nav, &url);
        }
    } else if let Some(index) = app.grid.tile_at(x, y) {
        app.grid.select(index);
        if let Some(link) = app.grid.get(index) {
            let url = link.url.clone();
            navigate(app, nav, &url);
        }
    }
}

fn handle_modal_event(app: &mut App, event: InputEvent) {
    match event {
        InputEvent::TextInput(ch) => app.modal.insert(ch),
        InputEvent::Backspace => app.modal.backspace(),
        InputEvent::KeyPress(Key::Tab) => app.modal.toggle_focus(),
        InputEvent::KeyPress(Key::Escape) => app.modal.close(),
        InputEvent::KeyPress(Key::Enter) => submit_modal(app),
        InputEvent::PointerClick { x, y } => {
            if !app.modal.contains(x, y) || app.modal.hit_cancel(x, y) {
                app.modal.close();
            } else if let Some(field) = app.modal.field_at(x, y) {
                app.modal.set_focus(field);
            } else if app.modal.hit_save(x, y) {
                submit_modal(app);
            }
        }
        _ => {}
    }
}

fn open_add_modal(app: &mut App) {
    if app.grid.is_full() {
        app.toast.notify("Link grid is full", ToastKind::Error);
    } else {
        app.modal.open();
    }
}

fn submit_modal(app: &mut App) {
    match app.modal.submit() {
        SaveOutcome::Saved { title, url } => {
            if app.grid.is_full() {
                app.toast.notify("Link grid is full", ToastKind::Error);
            } else {
                match app.grid.add_link(&mut *app.store, &title, &url) {
                    Ok(()) => app.toast.notify("Link added", ToastKind::Success),
                    Err(e) => {
                        warn!("failed to persist link: {e}");
                        app.toast.notify("Could not save link", ToastKind::Error);
                    }
                }
            }
        }
        SaveOutcome::EmptyFields => app
            .toast
            .notify("Title and URL are required", ToastKind::Error),
        SaveOutcome::InvalidUrl => app
            .toast
            .notify("Enter a valid http(s) URL", ToastKind::Error),
    }
}

fn cycle_background(app: &mut App) {
    match app.background.cycle_preset(&mut *app.store) {
        Ok(hex) => app
            .toast
            .notify(&format!("Background set to {hex}"), ToastKind::Info),
        Err(e) => {
            warn!("failed to persist background: {e}");
            app.toast
                .notify("Could not save background", ToastKind::Error);
        }
    }
}

fn reset_background(app: &mut App) {
    match app.background.reset(&mut *app.store) {
        Ok(()) => app.toast.notify("Background reset", ToastKind::Info),
        Err(e) => {
            warn!("failed to reset background: {e}");
            app.toast
                .notify("Could not reset background", ToastKind::Error);
        }
    }
}

fn navigate(app: &mut App, nav: &mut dyn Navigator, url: &str) {
    if let Err(e) = safe_navigate(nav, url) {
        warn!("navigation failed: {e}");
        app.toast.notify("Could not open link", ToastKind::Error);
    }
}

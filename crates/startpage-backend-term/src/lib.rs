//! Terminal backend.
//!
//! Owns the terminal session (raw mode, alternate screen, mouse capture),
//! translates crossterm events into platform-agnostic input events, and
//! paints the display registry through a composed cell buffer each frame.

use std::io::{Stdout, Write, stdout};
use std::time::Duration;

use crossterm::event::{
    DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind, KeyModifiers,
    MouseButton, MouseEventKind,
};
use crossterm::style::{Color as TermColor, Colors, SetColors};
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, SetTitle, disable_raw_mode, enable_raw_mode,
};
use crossterm::{cursor, event, execute, queue};
use log::debug;

use startpage_core::display::DisplayRegistry;
use startpage_core::theme::{SCREEN_H, SCREEN_W};
use startpage_types::color::Color;
use startpage_types::error::{Result, StartpageError};
use startpage_types::input::{InputEvent, Key};

mod buffer;

pub use buffer::CellBuffer;

/// Terminal session wrapper. Restores the terminal on drop.
pub struct TermBackend {
    out: Stdout,
    buffer: CellBuffer,
    restored: bool,
}

impl TermBackend {
    /// Take over the terminal: raw mode, alternate screen, mouse capture.
    pub fn init(title: &str) -> Result<Self> {
        enable_raw_mode().map_err(|e| StartpageError::Backend(e.to_string()))?;
        let mut out = stdout();
        execute!(
            out,
            EnterAlternateScreen,
            EnableMouseCapture,
            SetTitle(title),
            cursor::Hide
        )
        .map_err(|e| StartpageError::Backend(e.to_string()))?;
        debug!("terminal session started");
        Ok(Self {
            out,
            buffer: CellBuffer::new(SCREEN_W, SCREEN_H),
            restored: false,
        })
    }

    /// Wait up to `timeout` for one input event.
    ///
    /// Returns `None` on timeout and on native events that have no
    /// platform-agnostic meaning (resize, key release).
    pub fn poll_event(&mut self, timeout: Duration) -> Result<Option<InputEvent>> {
        if !event::poll(timeout).map_err(|e| StartpageError::Backend(e.to_string()))? {
            return Ok(None);
        }
        let native = event::read().map_err(|e| StartpageError::Backend(e.to_string()))?;
        Ok(map_event(native))
    }

    /// Compose the registry into the cell buffer and repaint the terminal.
    pub fn draw(&mut self, reg: &DisplayRegistry) -> Result<()> {
        self.buffer.compose(reg);
        for y in 0..self.buffer.height() {
            queue!(self.out, cursor::MoveTo(0, y as u16))
                .map_err(|e| StartpageError::Backend(e.to_string()))?;
            for x in 0..self.buffer.width() {
                let Some(cell) = self.buffer.cell(x, y) else {
                    continue;
                };
                queue!(
                    self.out,
                    SetColors(Colors::new(to_term(cell.fg), to_term(cell.bg)))
                )
                .map_err(|e| StartpageError::Backend(e.to_string()))?;
                queue!(self.out, crossterm::style::Print(cell.ch))
                    .map_err(|e| StartpageError::Backend(e.to_string()))?;
            }
        }
        self.out
            .flush()
            .map_err(|e| StartpageError::Backend(e.to_string()))?;
        Ok(())
    }

    /// Release the terminal. Safe to call more than once.
    pub fn shutdown(&mut self) -> Result<()> {
        if self.restored {
            return Ok(());
        }
        self.restored = true;
        execute!(
            self.out,
            cursor::Show,
            DisableMouseCapture,
            LeaveAlternateScreen
        )
        .map_err(|e| StartpageError::Backend(e.to_string()))?;
        disable_raw_mode().map_err(|e| StartpageError::Backend(e.to_string()))?;
        debug!("terminal session restored");
        Ok(())
    }
}

impl Drop for TermBackend {
    fn drop(&mut self) {
        let _ = self.shutdown();
    }
}

fn to_term(c: Color) -> TermColor {
    TermColor::Rgb {
        r: c.r,
        g: c.g,
        b: c.b,
    }
}

/// Map a native crossterm event to a platform-agnostic input event.
pub fn map_event(native: Event) -> Option<InputEvent> {
    match native {
        Event::Key(key) => {
            if key.kind != KeyEventKind::Press {
                return None;
            }
            match key.code {
                KeyCode::Char('c') | KeyCode::Char('q')
                    if key.modifiers.contains(KeyModifiers::CONTROL) =>
                {
                    Some(InputEvent::Quit)
                }
                KeyCode::Char(ch) => Some(InputEvent::TextInput(ch)),
                KeyCode::Backspace => Some(InputEvent::Backspace),
                KeyCode::Enter => Some(InputEvent::KeyPress(Key::Enter)),
                KeyCode::Esc => Some(InputEvent::KeyPress(Key::Escape)),
                KeyCode::Tab => Some(InputEvent::KeyPress(Key::Tab)),
                KeyCode::Up => Some(InputEvent::KeyPress(Key::Up)),
                KeyCode::Down => Some(InputEvent::KeyPress(Key::Down)),
                KeyCode::Left => Some(InputEvent::KeyPress(Key::Left)),
                KeyCode::Right => Some(InputEvent::KeyPress(Key::Right)),
                _ => None,
            }
        }
        Event::Mouse(mouse) => match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => Some(InputEvent::PointerClick {
                x: mouse.column as i32,
                y: mouse.row as i32,
            }),
            _ => None,
        },
        Event::FocusGained => Some(InputEvent::FocusGained),
        Event::FocusLost => Some(InputEvent::FocusLost),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyEvent, KeyEventState, MouseEvent};

    fn key(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    #[test]
    fn chars_become_text_input() {
        assert_eq!(
            map_event(key(KeyCode::Char('a'))),
            Some(InputEvent::TextInput('a'))
        );
        assert_eq!(
            map_event(key(KeyCode::Char('/'))),
            Some(InputEvent::TextInput('/'))
        );
    }

    #[test]
    fn named_keys_map() {
        assert_eq!(
            map_event(key(KeyCode::Enter)),
            Some(InputEvent::KeyPress(Key::Enter))
        );
        assert_eq!(
            map_event(key(KeyCode::Esc)),
            Some(InputEvent::KeyPress(Key::Escape))
        );
        assert_eq!(
            map_event(key(KeyCode::Tab)),
            Some(InputEvent::KeyPress(Key::Tab))
        );
        assert_eq!(
            map_event(key(KeyCode::Up)),
            Some(InputEvent::KeyPress(Key::Up))
        );
    }

    #[test]
    fn backspace_maps() {
        assert_eq!(map_event(key(KeyCode::Backspace)), Some(InputEvent::Backspace));
    }

    #[test]
    fn ctrl_c_and_ctrl_q_quit() {
        for ch in ['c', 'q'] {
            let e = Event::Key(KeyEvent::new(KeyCode::Char(ch), KeyModifiers::CONTROL));
            assert_eq!(map_event(e), Some(InputEvent::Quit));
        }
    }

    #[test]
    fn plain_c_is_text() {
        assert_eq!(
            map_event(key(KeyCode::Char('c'))),
            Some(InputEvent::TextInput('c'))
        );
    }

    #[test]
    fn key_release_is_dropped() {
        let mut e = KeyEvent::new(KeyCode::Char('a'), KeyModifiers::NONE);
        e.kind = KeyEventKind::Release;
        e.state = KeyEventState::NONE;
        assert_eq!(map_event(Event::Key(e)), None);
    }

    #[test]
    fn left_click_becomes_pointer_click() {
        let e = Event::Mouse(MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column: 12,
            row: 7,
            modifiers: KeyModifiers::NONE,
        });
        assert_eq!(map_event(e), Some(InputEvent::PointerClick { x: 12, y: 7 }));
    }

    #[test]
    fn scroll_and_right_click_are_dropped() {
        for kind in [
            MouseEventKind::Down(MouseButton::Right),
            MouseEventKind::ScrollUp,
            MouseEventKind::Moved,
        ] {
            let e = Event::Mouse(MouseEvent {
                kind,
                column: 0,
                row: 0,
                modifiers: KeyModifiers::NONE,
            });
            assert_eq!(map_event(e), None);
        }
    }

    #[test]
    fn focus_events_map() {
        assert_eq!(map_event(Event::FocusGained), Some(InputEvent::FocusGained));
        assert_eq!(map_event(Event::FocusLost), Some(InputEvent::FocusLost));
    }

    #[test]
    fn resize_is_dropped() {
        assert_eq!(map_event(Event::Resize(80, 24)), None);
    }
}

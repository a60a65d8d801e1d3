//! Cell buffer composition.
//!
//! Display objects are flattened into a fixed-size grid of cells in draw
//! order, so overlapping objects layer correctly before anything touches the
//! terminal.

use startpage_core::display::DisplayRegistry;
use startpage_types::color::Color;

/// One terminal cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub ch: char,
    pub fg: Color,
    pub bg: Color,
}

impl Cell {
    fn blank() -> Self {
        Self {
            ch: ' ',
            fg: Color::WHITE,
            bg: Color::BLACK,
        }
    }
}

/// Fixed-size compose target for one frame.
#[derive(Debug)]
pub struct CellBuffer {
    width: i32,
    height: i32,
    cells: Vec<Cell>,
}

impl CellBuffer {
    pub fn new(width: i32, height: i32) -> Self {
        Self {
            width,
            height,
            cells: vec![Cell::blank(); (width * height) as usize],
        }
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    /// Cell at (x, y), or `None` outside the buffer.
    pub fn cell(&self, x: i32, y: i32) -> Option<Cell> {
        if x < 0 || y < 0 || x >= self.width || y >= self.height {
            return None;
        }
        self.cells.get((y * self.width + x) as usize).copied()
    }

    fn cell_mut(&mut self, x: i32, y: i32) -> Option<&mut Cell> {
        if x < 0 || y < 0 || x >= self.width || y >= self.height {
            return None;
        }
        self.cells.get_mut((y * self.width + x) as usize)
    }

    /// Flatten the registry into the buffer. Fills paint first within each
    /// object, then its text run; objects apply in registry draw order.
    pub fn compose(&mut self, reg: &DisplayRegistry) {
        for cell in &mut self.cells {
            *cell = Cell::blank();
        }
        for (_, obj) in reg.draw_list() {
            if let Some(fill) = obj.fill {
                for dy in 0..obj.h {
                    for dx in 0..obj.w {
                        if let Some(cell) = self.cell_mut(obj.x + dx, obj.y + dy) {
                            cell.ch = ' ';
                            cell.bg = fill;
                        }
                    }
                }
            }
            if let Some(ref text) = obj.text {
                for (i, ch) in text.chars().enumerate() {
                    if let Some(cell) = self.cell_mut(obj.x + i as i32, obj.y) {
                        cell.ch = ch;
                        cell.fg = obj.text_color;
                    }
                }
            }
        }
    }

    /// Row as a plain string, for tests and debugging.
    pub fn row_text(&self, y: i32) -> String {
        (0..self.width)
            .filter_map(|x| self.cell(x, y))
            .map(|c| c.ch)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn buffer() -> CellBuffer {
        CellBuffer::new(20, 5)
    }

    #[test]
    fn starts_blank() {
        let buf = buffer();
        assert_eq!(buf.row_text(0), " ".repeat(20));
    }

    #[test]
    fn cell_out_of_range_is_none() {
        let buf = buffer();
        assert!(buf.cell(-1, 0).is_none());
        assert!(buf.cell(0, -1).is_none());
        assert!(buf.cell(20, 0).is_none());
        assert!(buf.cell(0, 5).is_none());
        assert!(buf.cell(19, 4).is_some());
    }

    #[test]
    fn fill_paints_background() {
        let mut reg = DisplayRegistry::new();
        let obj = reg.create("panel");
        obj.x = 1;
        obj.y = 1;
        obj.w = 3;
        obj.h = 2;
        obj.fill = Some(Color::rgb(10, 20, 30));

        let mut buf = buffer();
        buf.compose(&reg);
        assert_eq!(buf.cell(1, 1).unwrap().bg, Color::rgb(10, 20, 30));
        assert_eq!(buf.cell(3, 2).unwrap().bg, Color::rgb(10, 20, 30));
        assert_eq!(buf.cell(4, 1).unwrap().bg, Color::BLACK);
    }

    #[test]
    fn text_paints_characters() {
        let mut reg = DisplayRegistry::new();
        let obj = reg.create("label");
        obj.x = 2;
        obj.y = 0;
        obj.text = Some("hi".to_string());
        obj.text_color = Color::rgb(1, 2, 3);

        let mut buf = buffer();
        buf.compose(&reg);
        assert_eq!(buf.cell(2, 0).unwrap().ch, 'h');
        assert_eq!(buf.cell(3, 0).unwrap().ch, 'i');
        assert_eq!(buf.cell(2, 0).unwrap().fg, Color::rgb(1, 2, 3));
    }

    #[test]
    fn text_over_fill_keeps_background() {
        let mut reg = DisplayRegistry::new();
        let obj = reg.create("button");
        obj.w = 6;
        obj.h = 1;
        obj.fill = Some(Color::rgb(5, 5, 5));
        obj.text = Some("ok".to_string());

        let mut buf = buffer();
        buf.compose(&reg);
        assert_eq!(buf.cell(0, 0).unwrap().ch, 'o');
        assert_eq!(buf.cell(0, 0).unwrap().bg, Color::rgb(5, 5, 5));
    }

    #[test]
    fn higher_z_wins() {
        let mut reg = DisplayRegistry::new();
        let below = reg.create("below");
        below.w = 5;
        below.h = 1;
        below.fill = Some(Color::rgb(1, 1, 1));
        below.z = 0;
        let above = reg.create("above");
        above.w = 5;
        above.h = 1;
        above.fill = Some(Color::rgb(2, 2, 2));
        above.z = 10;

        let mut buf = buffer();
        buf.compose(&reg);
        assert_eq!(buf.cell(0, 0).unwrap().bg, Color::rgb(2, 2, 2));
    }

    #[test]
    fn hidden_objects_are_skipped() {
        let mut reg = DisplayRegistry::new();
        let obj = reg.create("ghost");
        obj.w = 5;
        obj.h = 1;
        obj.fill = Some(Color::rgb(9, 9, 9));
        obj.visible = false;

        let mut buf = buffer();
        buf.compose(&reg);
        assert_eq!(buf.cell(0, 0).unwrap().bg, Color::BLACK);
    }

    #[test]
    fn out_of_bounds_is_clipped() {
        let mut reg = DisplayRegistry::new();
        let obj = reg.create("wide");
        obj.x = 18;
        obj.y = 4;
        obj.w = 10;
        obj.h = 10;
        obj.fill = Some(Color::rgb(7, 7, 7));
        obj.text = Some("overflowing".to_string());

        let mut buf = buffer();
        buf.compose(&reg);
        assert_eq!(buf.cell(19, 4).unwrap().bg, Color::rgb(7, 7, 7));
    }

    #[test]
    fn negative_origin_is_clipped() {
        let mut reg = DisplayRegistry::new();
        let obj = reg.create("offscreen");
        obj.x = -2;
        obj.y = -1;
        obj.w = 4;
        obj.h = 3;
        obj.fill = Some(Color::rgb(3, 3, 3));

        let mut buf = buffer();
        buf.compose(&reg);
        assert_eq!(buf.cell(0, 0).unwrap().bg, Color::rgb(3, 3, 3));
        assert_eq!(buf.cell(1, 1).unwrap().bg, Color::rgb(3, 3, 3));
        assert_eq!(buf.cell(2, 0).unwrap().bg, Color::BLACK);
    }

    #[test]
    fn compose_resets_previous_frame() {
        let mut reg = DisplayRegistry::new();
        let obj = reg.create("flash");
        obj.w = 3;
        obj.h = 1;
        obj.fill = Some(Color::rgb(8, 8, 8));

        let mut buf = buffer();
        buf.compose(&reg);
        reg.get_mut("flash").unwrap().visible = false;
        buf.compose(&reg);
        assert_eq!(buf.cell(0, 0).unwrap().bg, Color::BLACK);
    }
}

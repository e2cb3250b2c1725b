use super::cell::Cell;
use super::style::{Pen, Rgb};
use super::text::char_width;

/// Grid of cells, one per terminal column and row.
#[derive(Debug, Clone)]
pub struct Buffer {
    width: u16,
    height: u16,
    cells: Vec<Cell>,
}

impl Buffer {
    pub fn new(width: u16, height: u16) -> Self {
        let cells = vec![Cell::default(); (width as usize) * (height as usize)];
        Self {
            width,
            height,
            cells,
        }
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    pub fn get(&self, x: u16, y: u16) -> Option<&Cell> {
        if x < self.width && y < self.height {
            Some(&self.cells[self.index(x, y)])
        } else {
            None
        }
    }

    pub fn set(&mut self, x: u16, y: u16, cell: Cell) {
        if x < self.width && y < self.height {
            let idx = self.index(x, y);
            self.cells[idx] = cell;
        }
    }

    fn index(&self, x: u16, y: u16) -> usize {
        (y as usize) * (self.width as usize) + (x as usize)
    }

    /// Fill a row with a background color.
    pub fn fill_row(&mut self, y: u16, bg: Rgb) {
        for x in 0..self.width {
            self.set(x, y, Cell::default().with_bg(bg));
        }
    }

    /// Write `text` starting at (`x`, `y`), clipped to `max_width` columns and
    /// to the buffer edge. Returns the number of columns written.
    pub fn put_str(&mut self, x: u16, y: u16, text: &str, max_width: u16, pen: Pen) -> u16 {
        let limit = x.saturating_add(max_width).min(self.width);
        let mut col = x;
        for ch in text.chars() {
            let w = char_width(ch) as u16;
            if w == 0 {
                continue;
            }
            if col + w > limit {
                break;
            }
            self.set(col, y, pen.cell(ch));
            if w == 2 {
                let mut cont = pen.cell(' ');
                cont.wide_continuation = true;
                self.set(col + 1, y, cont);
            }
            col += w;
        }
        col - x
    }

    /// Text content of a row, without trailing spaces.
    pub fn row_text(&self, y: u16) -> String {
        let mut line = String::new();
        for x in 0..self.width {
            if let Some(cell) = self.get(x, y) {
                if !cell.wide_continuation {
                    line.push(cell.char);
                }
            }
        }
        line.trim_end().to_string()
    }

    pub fn diff<'a>(&'a self, other: &'a Buffer) -> impl Iterator<Item = (u16, u16, &'a Cell)> {
        self.cells
            .iter()
            .zip(other.cells.iter())
            .enumerate()
            .filter(|(_, (a, b))| a != b)
            .map(move |(i, (cell, _))| {
                let x = (i % self.width as usize) as u16;
                let y = (i / self.width as usize) as u16;
                (x, y, cell)
            })
    }

    pub fn clear(&mut self, bg: Rgb) {
        for cell in &mut self.cells {
            *cell = Cell::default().with_bg(bg);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PEN: Pen = Pen::new(Rgb::new(255, 255, 255), Rgb::new(0, 0, 0));

    #[test]
    fn test_put_str_clips_to_width() {
        let mut buf = Buffer::new(10, 1);
        let written = buf.put_str(2, 0, "abcdef", 3, PEN);
        assert_eq!(written, 3);
        assert_eq!(buf.row_text(0), "  abc");
    }

    #[test]
    fn test_put_str_clips_to_buffer_edge() {
        let mut buf = Buffer::new(4, 1);
        buf.put_str(1, 0, "abcdef", 20, PEN);
        assert_eq!(buf.row_text(0), " abc");
    }

    #[test]
    fn test_diff_reports_changed_cells() {
        let a = Buffer::new(3, 2);
        let mut b = Buffer::new(3, 2);
        b.set(1, 1, Cell::new('x'));
        let changed: Vec<_> = b.diff(&a).map(|(x, y, c)| (x, y, c.char)).collect();
        assert_eq!(changed, [(1, 1, 'x')]);
    }
}

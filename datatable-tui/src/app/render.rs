//! Draws the table screen into a buffer.

use datatable_lib::{Column, Record};

use super::action::{HitMap, Target};
use super::App;
use crate::term::{char_width, display_width, truncate_to_width, Buffer, Pen, Rect, Rgb, TextStyle};

/// Left margin in columns.
const MARGIN: u16 = 1;
/// Width of the `[x] ` checkbox column.
const CHECKBOX_WIDTH: u16 = 4;
/// First row of the header line.
const HEADER_Y: u16 = 4;
/// Rows below the table body: spacer, pager, two selection lines, help.
const FOOTER_HEIGHT: u16 = 5;
const COLUMN_WEIGHTS: [u16; 4] = [3, 2, 4, 4];
const HELP: &str =
    "Type to search  F1-F4 sort  F5 sort mode  ↑↓ move  Enter select  PgUp/PgDn page  Esc quit";

/// Paint the whole screen and return the clickable regions.
pub fn render(app: &App, buf: &mut Buffer) -> HitMap {
    let theme = app.theme();
    let mut hits = HitMap::new();

    buf.clear(theme.background);
    render_title(app, buf);
    render_search(app, buf);

    let widths = column_widths(buf.width());
    render_header(app, buf, &widths, &mut hits);

    let body_rows = buf.height().saturating_sub(HEADER_Y + 1 + FOOTER_HEIGHT);
    render_body(app, buf, &widths, body_rows, &mut hits);

    let footer_y = buf.height().saturating_sub(FOOTER_HEIGHT);
    render_pager(app, buf, footer_y + 1, &mut hits);
    render_selection(app, buf, footer_y + 2);

    let help_y = buf.height().saturating_sub(1);
    let pen = Pen::new(theme.muted, theme.background);
    match app.status() {
        Some(status) => buf.put_str(MARGIN, help_y, status, buf.width(), pen.with_fg(theme.warning)),
        None => buf.put_str(MARGIN, help_y, HELP, buf.width(), pen),
    };

    hits
}

fn render_title(app: &App, buf: &mut Buffer) {
    let theme = app.theme();
    buf.fill_row(0, theme.surface);
    let pen = Pen::new(theme.accent, theme.surface);
    let mut x = MARGIN;
    x += buf.put_str(x, 0, "Contacts", buf.width(), pen.with_style(TextStyle::new().bold()));
    x += 2;

    let view = app.view();
    if view.is_loading() {
        for cell in app.spinner().current() {
            let pen = Pen::new(theme.accent.darken(cell.darken), theme.surface);
            x += buf.put_str(x, 0, &cell.ch.to_string(), 2, pen);
        }
        buf.put_str(x + 1, 0, "Loading...", buf.width(), pen.with_fg(theme.text));
    } else if view.error().is_some() {
        buf.put_str(x, 0, "Load failed", buf.width(), pen.with_fg(theme.error));
    } else {
        let summary = format!("{} of {} records", view.filtered().len(), view.records().len());
        buf.put_str(x, 0, &summary, buf.width(), pen.with_fg(theme.muted));
    }
}

fn render_search(app: &App, buf: &mut Buffer) {
    let theme = app.theme();
    let y = 2;
    let label = "Search: ";
    let x = MARGIN + buf.put_str(MARGIN, y, label, buf.width(), Pen::new(theme.muted, theme.background));

    let field_width = buf.width().saturating_sub(x + MARGIN);
    let field = Pen::new(theme.text, theme.surface);
    for dx in 0..field_width {
        buf.put_str(x + dx, y, " ", 1, field);
    }

    let query = app.view().query();
    if query.is_empty() {
        buf.put_str(x, y, "name", field_width, field.with_fg(theme.muted));
    } else {
        // Keep the end of a long query visible
        let visible = tail_to_width(query, field_width.saturating_sub(1) as usize);
        let written = buf.put_str(x, y, &visible, field_width, field);
        buf.put_str(x + written, y, "▏", 1, field.with_fg(theme.accent));
    }
}

fn render_header(app: &App, buf: &mut Buffer, widths: &[u16; 4], hits: &mut HitMap) {
    let theme = app.theme();
    let view = app.view();
    let pen = Pen::new(theme.text, theme.background).with_style(TextStyle::new().bold().underline());

    let mut x = MARGIN + CHECKBOX_WIDTH;
    for (column, &width) in Column::ALL.iter().zip(widths) {
        let mut label = column.label().to_string();
        if view.sort_column() == Some(*column) {
            if let Some(direction) = view.sort_direction() {
                label.push(' ');
                label.push(direction.arrow());
            }
        }
        let cell_pen = if view.sort_column() == Some(*column) {
            pen.with_fg(theme.accent)
        } else {
            pen
        };
        buf.put_str(x, HEADER_Y, &label, width.saturating_sub(1), cell_pen);
        hits.insert(Rect::new(x, HEADER_Y, width, 1), Target::Header(*column));
        x += width;
    }
}

fn render_body(app: &App, buf: &mut Buffer, widths: &[u16; 4], body_rows: u16, hits: &mut HitMap) {
    let theme = app.theme();
    let view = app.view();
    let top = HEADER_Y + 1;
    let muted = Pen::new(theme.muted, theme.background);

    let rows = view.page_rows();
    if rows.is_empty() {
        let message = if view.is_loading() {
            "Loading..."
        } else {
            "No matching records"
        };
        buf.put_str(MARGIN + CHECKBOX_WIDTH, top, message, buf.width(), muted);
        return;
    }

    let offset = scroll_offset(app.cursor(), body_rows as usize);
    for (i, record) in rows.iter().enumerate().skip(offset).take(body_rows as usize) {
        let y = top + (i - offset) as u16;
        let focused = i == app.cursor();
        let bg = if focused { theme.surface } else { theme.background };
        if focused {
            buf.fill_row(y, bg);
        }
        render_row(app, buf, record, y, widths, bg);
        hits.insert(Rect::new(0, y, buf.width(), 1), Target::Row(i));
    }
}

fn render_row(app: &App, buf: &mut Buffer, record: &Record, y: u16, widths: &[u16; 4], bg: Rgb) {
    let theme = app.theme();
    let selected = app.view().is_selected(&record.email);
    let (checkbox, fg) = if selected {
        ("[x]", theme.success)
    } else {
        ("[ ]", theme.muted)
    };
    buf.put_str(MARGIN, y, checkbox, CHECKBOX_WIDTH, Pen::new(fg, bg));

    let pen = Pen::new(theme.text, bg);
    let mut x = MARGIN + CHECKBOX_WIDTH;
    for (column, &width) in Column::ALL.iter().zip(widths) {
        let text = truncate_to_width(column.value(record), width.saturating_sub(1) as usize);
        buf.put_str(x, y, &text, width, pen);
        x += width;
    }
}

fn render_pager(app: &App, buf: &mut Buffer, y: u16, hits: &mut HitMap) {
    let theme = app.theme();
    let view = app.view();
    let enabled = Pen::new(theme.accent, theme.surface).with_style(TextStyle::new().bold());
    let disabled = Pen::new(theme.muted, theme.background).with_style(TextStyle::new().dim());

    let mut x = MARGIN;
    let previous = " < Previous ";
    let pen = if view.has_previous() { enabled } else { disabled };
    let w = buf.put_str(x, y, previous, buf.width(), pen);
    if view.has_previous() {
        hits.insert(Rect::new(x, y, w, 1), Target::Previous);
    }
    x += w + 2;

    let next = " Next > ";
    let pen = if view.has_next() { enabled } else { disabled };
    let w = buf.put_str(x, y, next, buf.width(), pen);
    if view.has_next() {
        hits.insert(Rect::new(x, y, w, 1), Target::Next);
    }
    x += w + 2;

    let page = format!("Page {}/{}", view.current_page(), view.page_count());
    buf.put_str(x, y, &page, buf.width(), Pen::new(theme.text, theme.background));
}

fn render_selection(app: &App, buf: &mut Buffer, y: u16) {
    let theme = app.theme();
    let json = app.view().selected_json().unwrap_or_else(|_| "[]".to_string());
    let text = format!("Selected rows: {}", json);
    let width = buf.width().saturating_sub(MARGIN * 2) as usize;
    let pen = Pen::new(theme.text, theme.background);
    for (i, line) in wrap_chars(&text, width, 2).iter().enumerate() {
        buf.put_str(MARGIN, y + i as u16, line, width as u16, pen);
    }
}

/// Split the available width across the data columns by weight.
fn column_widths(total: u16) -> [u16; 4] {
    let available = total.saturating_sub(MARGIN * 2 + CHECKBOX_WIDTH);
    let weight_sum: u16 = COLUMN_WEIGHTS.iter().sum();
    let mut widths = [0; 4];
    let mut used = 0;
    for (i, weight) in COLUMN_WEIGHTS.iter().enumerate() {
        widths[i] = (available as u32 * *weight as u32 / weight_sum as u32) as u16;
        used += widths[i];
    }
    // Remainder goes to the last column
    widths[3] += available - used;
    widths
}

/// First visible page row so that `cursor` stays on screen.
fn scroll_offset(cursor: usize, visible: usize) -> usize {
    if visible == 0 || cursor < visible {
        0
    } else {
        cursor + 1 - visible
    }
}

/// Longest suffix of `s` that fits in `max_width` columns.
fn tail_to_width(s: &str, max_width: usize) -> String {
    if display_width(s) <= max_width {
        return s.to_string();
    }
    let mut tail: Vec<char> = Vec::new();
    let mut width = 0;
    for ch in s.chars().rev() {
        let w = char_width(ch);
        if width + w > max_width {
            break;
        }
        tail.push(ch);
        width += w;
    }
    tail.into_iter().rev().collect()
}

/// Break `s` into at most `max_lines` lines of `width` columns. The last
/// line ends in `…` if text was cut.
fn wrap_chars(s: &str, width: usize, max_lines: usize) -> Vec<String> {
    if width == 0 || max_lines == 0 {
        return Vec::new();
    }
    let mut lines = vec![String::new()];
    let mut line_width = 0;
    for (i, ch) in s.char_indices() {
        let w = char_width(ch);
        if line_width + w > width {
            if lines.len() == max_lines {
                let last = lines.pop().unwrap_or_default();
                let rest = format!("{}{}", last, &s[i..]);
                lines.push(truncate_to_width(&rest, width));
                return lines;
            }
            lines.push(String::new());
            line_width = 0;
        }
        if let Some(line) = lines.last_mut() {
            line.push(ch);
        }
        line_width += w;
    }
    lines
}

#[cfg(test)]
mod tests {
    use datatable_lib::source::fixture;
    use datatable_lib::{TableConfig, TableView};

    use super::*;
    use crate::app::Action;

    fn app_with(n: usize) -> App {
        let records = fixture::records().unwrap().into_iter().take(n).collect();
        App::new(TableView::with_records(TableConfig::default(), records))
    }

    fn screen(app: &App, width: u16, height: u16) -> (Buffer, HitMap) {
        let mut buf = Buffer::new(width, height);
        let hits = render(app, &mut buf);
        (buf, hits)
    }

    #[test]
    fn test_column_widths_fill_space() {
        let widths = column_widths(100);
        assert_eq!(widths.iter().sum::<u16>(), 100 - 2 - 4);
        assert!(widths[2] > widths[1]);
        assert_eq!(column_widths(0), [0, 0, 0, 0]);
    }

    #[test]
    fn test_scroll_offset() {
        assert_eq!(scroll_offset(0, 10), 0);
        assert_eq!(scroll_offset(9, 10), 0);
        assert_eq!(scroll_offset(10, 10), 1);
        assert_eq!(scroll_offset(24, 10), 15);
    }

    #[test]
    fn test_wrap_chars() {
        assert_eq!(wrap_chars("abcdef", 3, 2), ["abc", "def"]);
        assert_eq!(wrap_chars("abcdefgh", 3, 2), ["abc", "de…"]);
        assert_eq!(wrap_chars("ab", 3, 2), ["ab"]);
    }

    #[test]
    fn test_tail_to_width() {
        assert_eq!(tail_to_width("hello", 10), "hello");
        assert_eq!(tail_to_width("hello", 3), "llo");
    }

    #[test]
    fn test_first_page_layout() {
        let app = app_with(30);
        let (buf, hits) = screen(&app, 120, 40);

        assert!(buf.row_text(0).contains("30 of 30 records"));
        assert!(buf.row_text(2).contains("Search:"));
        let header = buf.row_text(HEADER_Y);
        for column in Column::ALL {
            assert!(header.contains(column.label()));
        }
        let first = &app.view().page_rows()[0];
        let row = buf.row_text(HEADER_Y + 1);
        assert!(row.contains("[ ]"));
        assert!(row.contains(&first.name));

        let pager = buf.row_text(40 - FOOTER_HEIGHT + 1);
        assert!(pager.contains("Page 1/2"));
        assert!(hits.rect_of(Target::Next).is_some());
        assert!(hits.rect_of(Target::Previous).is_none());
        assert!(buf.row_text(40 - FOOTER_HEIGHT + 2).contains("Selected rows: []"));
    }

    #[test]
    fn test_click_next_then_previous() {
        let mut app = app_with(30);
        let (_, hits) = screen(&app, 120, 40);
        let next = hits.rect_of(Target::Next).unwrap();
        assert_eq!(hits.target_at(next.x, next.y), Some(Target::Next));

        app.handle(Action::NextPage);
        let (buf, hits) = screen(&app, 120, 40);
        assert!(buf.row_text(40 - FOOTER_HEIGHT + 1).contains("Page 2/2"));
        assert!(hits.rect_of(Target::Next).is_none());
        assert!(hits.rect_of(Target::Previous).is_some());
    }

    #[test]
    fn test_sort_indicator_and_selection_dump() {
        let mut app = app_with(3);
        app.handle(Action::Sort(Column::Name));
        app.handle(Action::ToggleRow);
        let (buf, _) = screen(&app, 200, 20);

        assert!(buf.row_text(HEADER_Y).contains("Name ▲"));
        assert!(buf.row_text(HEADER_Y + 1).contains("[x]"));
        let email = &app.view().page_rows()[0].email;
        assert!(buf.row_text(20 - FOOTER_HEIGHT + 2).contains(email.as_str()));
    }

    #[test]
    fn test_loading_screen() {
        let app = App::new(TableView::default());
        let (buf, hits) = screen(&app, 80, 24);
        assert!(buf.row_text(0).contains("Loading..."));
        assert!(buf.row_text(HEADER_Y + 1).contains("Loading..."));
        assert!(buf.row_text(24 - FOOTER_HEIGHT + 1).contains("Page 1/0"));
        assert!(hits.rect_of(Target::Next).is_none());
    }

    #[test]
    fn test_small_terminal_scrolls_to_cursor() {
        let mut app = app_with(25);
        for _ in 0..20 {
            app.handle(Action::CursorDown);
        }
        let (buf, hits) = screen(&app, 120, 20);
        let cursor_name = &app.view().page_rows()[20].name;
        let body: Vec<String> = (HEADER_Y + 1..20 - FOOTER_HEIGHT).map(|y| buf.row_text(y)).collect();
        assert!(body.iter().any(|line| line.contains(cursor_name.as_str())));
        assert!(hits.rect_of(Target::Row(0)).is_none());
    }
}

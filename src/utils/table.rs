//! Plain-text table rendering for CLI output.

use crate::utils::colors::strip_ansi;
use unicode_width::UnicodeWidthStr;

pub struct Table {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl Table {
    pub fn new<S: Into<String>>(headers: impl IntoIterator<Item = S>) -> Self {
        Self {
            headers: headers.into_iter().map(Into::into).collect(),
            rows: Vec::new(),
        }
    }

    pub fn add_row(&mut self, row: Vec<String>) {
        self.rows.push(row);
    }

    fn visible_width(s: &str) -> usize {
        UnicodeWidthStr::width(strip_ansi(s).as_str())
    }

    /// Column widths over header and cells, ignoring color codes.
    pub fn widths(&self) -> Vec<usize> {
        let mut widths: Vec<usize> = self.headers.iter().map(|h| Self::visible_width(h)).collect();

        for row in &self.rows {
            for (i, cell) in row.iter().enumerate().take(widths.len()) {
                widths[i] = widths[i].max(Self::visible_width(cell));
            }
        }

        widths
    }

    pub fn render(&self) -> String {
        let widths = self.widths();
        let mut out = String::new();

        let push_line = |out: &mut String, cells: &[String]| {
            for (i, w) in widths.iter().enumerate() {
                let cell = cells.get(i).map(String::as_str).unwrap_or("");
                let pad = w.saturating_sub(Self::visible_width(cell));
                out.push_str(cell);
                out.push_str(&" ".repeat(pad + 2));
            }
            // trailing padding is noise in copied output
            let trimmed = out.trim_end_matches(' ').len();
            out.truncate(trimmed);
            out.push('\n');
        };

        push_line(&mut out, &self.headers);

        let rule: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
        push_line(&mut out, &rule);

        for row in &self.rows {
            push_line(&mut out, row);
        }

        out
    }
}

#[cfg(test)]
mod tests {
    use super::Table;
    use crate::utils::colors::colorize_status;

    #[test]
    fn colored_cells_keep_columns_aligned() {
        let mut t = Table::new(["Name", "Status"]);
        t.add_row(vec!["Ann".into(), colorize_status("Late")]);
        t.add_row(vec!["Bartholomew".into(), colorize_status("On Time")]);

        assert_eq!(t.widths(), vec![11, 7]);

        let rendered = t.render();
        let first = rendered.lines().next().unwrap_or_default();
        assert_eq!(first, "Name         Status");
    }
}

use crate::models::Punctuality;
use pdf_writer::{Content, Name, Pdf, Rect, Ref, Str};
use std::fs;
use std::path::Path;

const FONT_REGULAR: Name<'static> = Name(b"F1");
const FONT_BOLD: Name<'static> = Name(b"F2");

/// Page size and table metrics, in points.
#[derive(Debug, Clone, Copy)]
struct PageGeometry {
    width: f32,
    height: f32,
    margin: f32,
    row_height: f32,
    title_gap: f32,
}

impl PageGeometry {
    /// A4 landscape: ten attendance columns do not fit in portrait.
    const A4_LANDSCAPE: Self = Self {
        width: 842.0,
        height: 595.0,
        margin: 36.0,
        row_height: 18.0,
        title_gap: 30.0,
    };

    fn usable_width(&self) -> f32 {
        self.width - 2.0 * self.margin
    }

    /// Baseline of the header row.
    fn table_top(&self) -> f32 {
        self.height - self.margin - self.title_gap
    }

    /// Body rows that fit under the header row.
    fn rows_per_page(&self) -> usize {
        let body = self.table_top() - self.row_height - self.margin;
        ((body / self.row_height).floor() as usize).max(1)
    }
}

/// Style of one table row.
#[derive(Clone, Copy)]
enum RowKind {
    Header,
    Body { banded: bool },
}

/// Paginated table report built with `pdf-writer` and the standard
/// Helvetica fonts.
pub struct PdfManager {
    pdf: Pdf,
    geometry: PageGeometry,
    catalog: Ref,
    page_tree: Ref,
    pages: Vec<Ref>,
    next_ref: i32,
    font_size: f32,
    title_size: f32,
}

impl PdfManager {
    pub fn landscape() -> Self {
        let mut pdf = Pdf::new();

        let catalog = Ref::new(1);
        let page_tree = Ref::new(2);
        pdf.type1_font(Ref::new(3)).base_font(Name(b"Helvetica"));
        pdf.type1_font(Ref::new(4)).base_font(Name(b"Helvetica-Bold"));

        Self {
            pdf,
            geometry: PageGeometry::A4_LANDSCAPE,
            catalog,
            page_tree,
            pages: Vec::new(),
            next_ref: 5,
            font_size: 8.5,
            title_size: 14.0,
        }
    }

    fn alloc(&mut self) -> Ref {
        let r = Ref::new(self.next_ref);
        self.next_ref += 1;
        r
    }

    /// Register a page and attach its content stream.
    fn emit_page(&mut self, content: Content) {
        let page_ref = self.alloc();
        let content_ref = self.alloc();
        let g = self.geometry;

        {
            let mut page = self.pdf.page(page_ref);
            page.parent(self.page_tree)
                .media_box(Rect::new(0.0, 0.0, g.width, g.height))
                .contents(content_ref);

            let mut resources = page.resources();
            let mut fonts = resources.fonts();
            fonts.pair(FONT_REGULAR, Ref::new(3));
            fonts.pair(FONT_BOLD, Ref::new(4));
        }

        self.pdf.stream(content_ref, &content.finish());
        self.pages.push(page_ref);
    }

    /// Column widths proportional to the longest cell, scaled to the page.
    fn column_widths(&self, headers: &[&str], rows: &[Vec<String>]) -> Vec<f32> {
        let char_w = self.font_size * 0.6;
        let mut widths: Vec<f32> = headers
            .iter()
            .map(|h| h.chars().count() as f32 * char_w + 8.0)
            .collect();

        for row in rows {
            for (w, cell) in widths.iter_mut().zip(row) {
                *w = w.max(cell.chars().count() as f32 * char_w + 8.0);
            }
        }

        let total: f32 = widths.iter().sum();
        let usable = self.geometry.usable_width();
        if total > usable {
            let scale = usable / total;
            widths.iter_mut().for_each(|w| *w *= scale);
        }

        widths
    }

    /// Multi-page table, header repeated on every page, footer "Page i of n".
    /// Cells of the `highlight` columns reading "Late" are printed bold red.
    pub fn write_table(
        &mut self,
        title: &str,
        headers: &[&str],
        rows: &[Vec<String>],
        highlight: &[usize],
    ) {
        let widths = self.column_widths(headers, rows);
        let header_cells: Vec<String> = headers.iter().map(|h| h.to_string()).collect();

        let per_page = self.geometry.rows_per_page();
        let mut chunks: Vec<&[Vec<String>]> = rows.chunks(per_page).collect();
        if chunks.is_empty() {
            chunks.push(&[]);
        }
        let total_pages = chunks.len();

        for (page_no, chunk) in chunks.into_iter().enumerate() {
            let g = self.geometry;
            let mut content = Content::new();

            self.text(&mut content, g.margin, g.height - g.margin + 8.0, FONT_BOLD, self.title_size, title);
            self.text(
                &mut content,
                g.width - g.margin - 60.0,
                g.margin - 24.0,
                FONT_REGULAR,
                self.font_size,
                &format!("Page {} of {}", page_no + 1, total_pages),
            );

            let mut y = g.table_top();
            self.row(&mut content, y, &widths, &header_cells, RowKind::Header, &[]);

            for (i, cells) in chunk.iter().enumerate() {
                y -= g.row_height;
                self.row(&mut content, y, &widths, cells, RowKind::Body { banded: i % 2 == 0 }, highlight);
            }

            self.emit_page(content);
        }
    }

    fn row(
        &self,
        content: &mut Content,
        y: f32,
        widths: &[f32],
        cells: &[String],
        kind: RowKind,
        highlight: &[usize],
    ) {
        let g = self.geometry;
        let table_w: f32 = widths.iter().sum();

        let band = match kind {
            RowKind::Header => Some((0.85, 0.87, 0.90)),
            RowKind::Body { banded: true } => Some((0.96, 0.96, 0.96)),
            RowKind::Body { banded: false } => None,
        };

        if let Some((r, gr, b)) = band {
            content.save_state();
            content.set_fill_rgb(r, gr, b);
            content.rect(g.margin, y, table_w, g.row_height);
            content.fill_nonzero();
            content.restore_state();
        }

        let mut x = g.margin;
        for (col, (w, cell)) in widths.iter().zip(cells).enumerate() {
            let late = highlight.contains(&col)
                && Punctuality::from_label(cell).is_some_and(|p| p.is_late());
            let font = match kind {
                RowKind::Header => FONT_BOLD,
                _ if late => FONT_BOLD,
                _ => FONT_REGULAR,
            };

            let clipped = self.fit(cell, *w);

            content.save_state();
            if late {
                content.set_fill_rgb(0.75, 0.0, 0.0);
            }
            self.text(content, x + 3.0, y + 5.0, font, self.font_size, &clipped);
            content.set_stroke_rgb(0.65, 0.65, 0.65);
            content.rect(x, y, *w, g.row_height);
            content.stroke();
            content.restore_state();

            x += w;
        }
    }

    /// Shorten `s` with a trailing "..." when it would overflow `width`.
    fn fit(&self, s: &str, width: f32) -> String {
        let char_w = self.font_size * 0.5;
        let max_chars = ((width - 6.0) / char_w).floor().max(1.0) as usize;

        if s.chars().count() <= max_chars {
            return s.to_string();
        }

        let keep = max_chars.saturating_sub(3);
        let mut out: String = s.chars().take(keep).collect();
        out.push_str("...");
        out
    }

    fn text(&self, content: &mut Content, x: f32, y: f32, font: Name, size: f32, s: &str) {
        // Type1 standard fonts: anything outside ASCII becomes '?'
        let ascii: String = s
            .chars()
            .map(|c| if c.is_ascii() { c } else { '?' })
            .collect();

        content.begin_text();
        content.set_font(font, size);
        content.next_line(x, y);
        content.show(Str(ascii.as_bytes()));
        content.end_text();
    }

    pub fn save(mut self, path: &Path) -> std::io::Result<()> {
        self.pdf.catalog(self.catalog).pages(self.page_tree);
        self.pdf
            .pages(self.page_tree)
            .kids(self.pages.iter().copied())
            .count(self.pages.len() as i32);

        fs::write(path, self.pdf.finish())
    }
}

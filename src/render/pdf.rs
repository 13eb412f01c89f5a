//! PDF report rendering with `printpdf`.
//!
//! Uses the built-in Helvetica family so no font assets are required at
//! runtime. Chart images arrive as PNG data URLs captured by the UI and are
//! decoded with the `image` crate before embedding; an undecodable image is
//! skipped with a warning rather than failing the whole report.

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;
use image::GenericImageView;
use log::{debug, warn};
use printpdf::{
    BuiltinFont, Color, ColorBits, ColorSpace, Image, ImageXObject, IndirectFontRef, Line, Mm,
    PdfDocument, PdfDocumentReference, PdfLayerReference, Point, Px, Rgb,
};

use crate::error::{Result, SizingError};
use crate::format::{format_gb, format_mb, format_quantity, format_storage};
use crate::models::projection::{ExamResult, MarginType};
use crate::models::report::ReportRequest;
use crate::render::ReportRenderer;

const PAGE_WIDTH: f64 = 210.0;
const PAGE_HEIGHT: f64 = 297.0;
const MARGIN_LEFT: f64 = 15.0;
const MARGIN_TOP: f64 = 20.0;
const MARGIN_BOTTOM: f64 = 20.0;
const CONTENT_WIDTH: f64 = PAGE_WIDTH - 2.0 * MARGIN_LEFT;
const MAX_CHART_HEIGHT: f64 = 110.0;

/// Rough glyph advance for Helvetica, used to right-align numeric cells.
const MM_PER_PT: f64 = 25.4 / 72.0;
const AVG_GLYPH_EM: f64 = 0.5;

fn primary() -> Color {
    Color::Rgb(Rgb::new(0.020, 0.353, 0.443, None))
}

fn accent() -> Color {
    Color::Rgb(Rgb::new(0.141, 0.808, 0.773, None))
}

fn body_text() -> Color {
    Color::Rgb(Rgb::new(0.2, 0.2, 0.2, None))
}

fn muted() -> Color {
    Color::Rgb(Rgb::new(0.4, 0.4, 0.4, None))
}

fn white() -> Color {
    Color::Rgb(Rgb::new(1.0, 1.0, 1.0, None))
}

fn rule_line() -> Color {
    Color::Rgb(Rgb::new(0.85, 0.85, 0.85, None))
}

fn total_row_fill() -> Color {
    Color::Rgb(Rgb::new(0.91, 0.956, 0.97, None))
}

// ---------------------------------------------------------------------------
// PdfReportRenderer
// ---------------------------------------------------------------------------

/// Renders a [`ReportRequest`] into an A4 PDF report.
///
/// The layout follows the classic report shape: title header, executive
/// summary, per-exam detail table, distribution chart, projection table,
/// growth chart, footer. Instances hold no mutable state and can be shared
/// freely across threads.
pub struct PdfReportRenderer {
    title: String,
}

impl PdfReportRenderer {
    pub fn new() -> Self {
        Self {
            title: "PACS Storage Projection Report".to_string(),
        }
    }

    /// Override the document title line.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }
}

impl Default for PdfReportRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportRenderer for PdfReportRenderer {
    fn render(&self, request: &ReportRequest) -> Result<Vec<u8>> {
        request.validate()?;

        // Per-exam rows are recomputed here from the raw exam data rather
        // than trusted from the client, so the table always reflects the
        // canonical formulas. Rows without both a size and a quantity do
        // not contribute and are left out of the table.
        let mut exams: Vec<ExamResult> = request
            .exam_inputs()
            .iter()
            .filter(|input| input.size_mb > 0.0 && input.quantity.daily() > 0.0)
            .map(ExamResult::from_input)
            .collect();
        exams.sort_by(|a, b| {
            b.monthly_gb
                .partial_cmp(&a.monthly_gb)
                .unwrap_or(std::cmp::Ordering::Equal)
        });

        debug!(
            "rendering report for unit '{}' with {} exam rows",
            request.unit_name,
            exams.len()
        );

        let (doc, page, layer) = PdfDocument::new(
            self.title.clone(),
            Mm(PAGE_WIDTH),
            Mm(PAGE_HEIGHT),
            "content",
        );
        let fonts = Fonts::load(&doc)?;
        let mut composer = Composer {
            doc: &doc,
            layer: doc.get_page(page).get_layer(layer),
            fonts: &fonts,
            y: MARGIN_TOP,
        };
        composer.footer();

        self.draw_header(&mut composer, request);
        self.draw_summary(&mut composer, request, &exams);
        self.draw_exam_table(&mut composer, &exams);
        if let Some(charts) = &request.chart_images {
            if let Some(url) = &charts.distribution {
                composer.chart(url, "Storage Distribution by Exam Type");
            }
        }
        self.draw_projection_table(&mut composer, request);
        if let Some(charts) = &request.chart_images {
            if let Some(url) = &charts.growth {
                composer.chart(url, "Projected Storage Growth");
            }
        }

        let mut writer = std::io::BufWriter::new(Vec::new());
        doc.save(&mut writer)
            .map_err(|e| SizingError::RenderFailed(e.to_string()))?;
        writer
            .into_inner()
            .map_err(|e| SizingError::RenderFailed(e.to_string()))
    }
}

impl PdfReportRenderer {
    fn draw_header(&self, c: &mut Composer<'_>, request: &ReportRequest) {
        c.text_colored(&self.title, 16.0, Style::Bold, MARGIN_LEFT, primary());
        c.advance(8.0);
        c.rule(accent(), 0.8);
        c.advance(6.0);
        c.text(&format!("Unit: {}", request.unit_name), 10.0, Style::Regular);
        c.advance(5.0);
        c.text_colored(
            &format!("Generated: {}", request.date),
            9.0,
            Style::Regular,
            MARGIN_LEFT,
            muted(),
        );
        c.advance(8.0);
    }

    fn draw_summary(&self, c: &mut Composer<'_>, request: &ReportRequest, exams: &[ExamResult]) {
        let total_monthly_gb: f64 = exams.iter().map(|e| e.monthly_gb).sum();

        c.heading("Executive Summary");
        c.text(
            &format!("Total monthly storage: {}", format_storage(total_monthly_gb)),
            10.0,
            Style::Regular,
        );
        c.advance(5.0);
        c.text(
            &format!("Projected annual storage: {}", request.results.annual),
            10.0,
            Style::Regular,
        );
        c.advance(5.0);
        c.text(
            &format!("Exam types configured: {}", exams.len()),
            10.0,
            Style::Regular,
        );
        c.advance(5.0);

        if request.results.margin_applied {
            let kind = match request.results.margin_type {
                Some(MarginType::Progressive) => "progressive per year",
                _ => "fixed for all periods",
            };
            c.text_colored(
                &format!(
                    "Safety margin applied: {}% ({kind})",
                    request.results.margin_percentage
                ),
                10.0,
                Style::Bold,
                MARGIN_LEFT,
                primary(),
            );
            c.advance(5.0);
        }
        c.advance(4.0);
    }

    fn draw_exam_table(&self, c: &mut Composer<'_>, exams: &[ExamResult]) {
        c.heading("Detail by Exam Type");

        let columns = [
            TableColumn::new("Exam Type", 52.0, Align::Left),
            TableColumn::new("Avg Size", 20.0, Align::Right),
            TableColumn::new("Monthly Goal", 24.0, Align::Right),
            TableColumn::new("Exams/Day", 20.0, Align::Right),
            TableColumn::new("Daily", 21.0, Align::Right),
            TableColumn::new("Monthly", 21.0, Align::Right),
            TableColumn::new("Annual", 22.0, Align::Right),
        ];

        let mut rows: Vec<Vec<String>> = exams
            .iter()
            .map(|exam| {
                let name = if exam.custom {
                    format!("{} *", exam.display_name)
                } else {
                    exam.display_name.clone()
                };
                vec![
                    name,
                    format_mb(exam.size_mb),
                    format!("{:.0}", exam.monthly_goal),
                    format_quantity(exam.daily_quantity),
                    format_mb(exam.daily_mb),
                    format_gb(exam.monthly_gb),
                    format_gb(exam.annual_gb),
                ]
            })
            .collect();

        let total_daily: f64 = exams.iter().map(|e| e.daily_mb).sum();
        let total_monthly: f64 = exams.iter().map(|e| e.monthly_gb).sum();
        let total_annual: f64 = exams.iter().map(|e| e.annual_gb).sum();
        rows.push(vec![
            "TOTAL".to_string(),
            String::new(),
            String::new(),
            String::new(),
            format_mb(total_daily),
            format_gb(total_monthly),
            format_gb(total_annual),
        ]);

        c.table(&columns, &rows, true);

        if exams.iter().any(|e| e.custom) {
            c.advance(2.0);
            c.text_colored(
                "* custom exam types added by the user",
                8.0,
                Style::Oblique,
                MARGIN_LEFT,
                muted(),
            );
            c.advance(4.0);
        }
        c.advance(2.0);
        c.text_colored(
            "Daily quantities are derived from monthly goals at 30 days per month.",
            8.0,
            Style::Oblique,
            MARGIN_LEFT,
            muted(),
        );
        c.advance(8.0);
    }

    fn draw_projection_table(&self, c: &mut Composer<'_>, request: &ReportRequest) {
        c.heading("Storage Projection");

        if request.results.margin_applied {
            let kind = match request.results.margin_type {
                Some(MarginType::Progressive) => "applied progressively per year",
                _ => "applied equally to all periods",
            };
            c.text_colored(
                &format!(
                    "Values include a safety margin of {}% ({kind}).",
                    request.results.margin_percentage
                ),
                8.0,
                Style::Oblique,
                MARGIN_LEFT,
                muted(),
            );
            c.advance(5.0);
        }

        let columns = [
            TableColumn::new("Period", 90.0, Align::Left),
            TableColumn::new("Projected Storage", 90.0, Align::Right),
        ];

        let results = &request.results;
        let mut rows = vec![
            vec!["Annual".to_string(), results.annual.clone()],
            vec!["1 Year".to_string(), results.year1.clone()],
            vec!["5 Years".to_string(), results.year5.clone()],
            vec!["10 Years".to_string(), results.year10.clone()],
            vec!["20 Years".to_string(), results.year20.clone()],
        ];
        if let Some(custom) = &results.custom {
            rows.push(vec![format!("{} Years", custom.years), custom.value.clone()]);
        }

        c.table(&columns, &rows, false);
        c.advance(6.0);
    }
}

// ---------------------------------------------------------------------------
// Composer — page cursor and drawing primitives
// ---------------------------------------------------------------------------

struct Fonts {
    regular: IndirectFontRef,
    bold: IndirectFontRef,
    oblique: IndirectFontRef,
}

impl Fonts {
    fn load(doc: &PdfDocumentReference) -> Result<Self> {
        let load = |font: BuiltinFont| {
            doc.add_builtin_font(font)
                .map_err(|e| SizingError::RenderFailed(e.to_string()))
        };
        Ok(Self {
            regular: load(BuiltinFont::Helvetica)?,
            bold: load(BuiltinFont::HelveticaBold)?,
            oblique: load(BuiltinFont::HelveticaOblique)?,
        })
    }

    fn get(&self, style: Style) -> &IndirectFontRef {
        match style {
            Style::Regular => &self.regular,
            Style::Bold => &self.bold,
            Style::Oblique => &self.oblique,
        }
    }
}

#[derive(Clone, Copy)]
enum Style {
    Regular,
    Bold,
    Oblique,
}

#[derive(Clone, Copy)]
enum Align {
    Left,
    Right,
}

struct TableColumn {
    header: &'static str,
    width: f64,
    align: Align,
}

impl TableColumn {
    fn new(header: &'static str, width: f64, align: Align) -> Self {
        Self {
            header,
            width,
            align,
        }
    }
}

/// Tracks the write position from the top of the current page and opens a
/// fresh page whenever the next element would spill past the bottom margin.
struct Composer<'a> {
    doc: &'a PdfDocumentReference,
    layer: PdfLayerReference,
    fonts: &'a Fonts,
    /// Distance from the top edge, in millimetres.
    y: f64,
}

impl Composer<'_> {
    fn baseline(&self) -> Mm {
        Mm(PAGE_HEIGHT - self.y)
    }

    fn advance(&mut self, mm: f64) {
        self.y += mm;
    }

    fn ensure_space(&mut self, needed: f64) {
        if self.y + needed > PAGE_HEIGHT - MARGIN_BOTTOM {
            let (page, layer) = self.doc.add_page(Mm(PAGE_WIDTH), Mm(PAGE_HEIGHT), "content");
            self.layer = self.doc.get_page(page).get_layer(layer);
            self.y = MARGIN_TOP;
            self.footer();
        }
    }

    fn footer(&mut self) {
        let text = "Generated automatically by the PACS storage sizing service";
        let width = estimate_width(text, 7.0);
        self.layer.set_fill_color(muted());
        self.layer.use_text(
            text,
            7.0,
            Mm((PAGE_WIDTH - width) / 2.0),
            Mm(10.0),
            &self.fonts.regular,
        );
        self.layer.set_fill_color(body_text());
    }

    fn text(&mut self, text: &str, size: f64, style: Style) {
        self.text_colored(text, size, style, MARGIN_LEFT, body_text());
    }

    fn text_colored(&mut self, text: &str, size: f64, style: Style, x: f64, color: Color) {
        self.ensure_space(size * MM_PER_PT + 2.0);
        self.layer.set_fill_color(color);
        self.layer
            .use_text(text, size, Mm(x), self.baseline(), self.fonts.get(style));
        self.layer.set_fill_color(body_text());
    }

    fn heading(&mut self, text: &str) {
        self.ensure_space(14.0);
        self.text_colored(text, 12.0, Style::Bold, MARGIN_LEFT, primary());
        self.advance(2.0);
        self.rule(accent(), 0.4);
        self.advance(6.0);
    }

    fn rule(&mut self, color: Color, thickness: f64) {
        self.layer.set_outline_color(color);
        self.layer.set_outline_thickness(thickness);
        self.layer.add_shape(Line {
            points: vec![
                (Point::new(Mm(MARGIN_LEFT), self.baseline()), false),
                (
                    Point::new(Mm(MARGIN_LEFT + CONTENT_WIDTH), self.baseline()),
                    false,
                ),
            ],
            is_closed: false,
            has_fill: false,
            has_stroke: true,
            is_clipping_path: false,
        });
    }

    fn fill_rect(&mut self, x: f64, top: f64, width: f64, height: f64, color: Color) {
        let y0 = Mm(PAGE_HEIGHT - top - height);
        let y1 = Mm(PAGE_HEIGHT - top);
        self.layer.set_fill_color(color);
        self.layer.add_shape(Line {
            points: vec![
                (Point::new(Mm(x), y0), false),
                (Point::new(Mm(x + width), y0), false),
                (Point::new(Mm(x + width), y1), false),
                (Point::new(Mm(x), y1), false),
            ],
            is_closed: true,
            has_fill: true,
            has_stroke: false,
            is_clipping_path: false,
        });
        self.layer.set_fill_color(body_text());
    }

    /// Draw a bordered table. When `emphasize_last` is set the final row is
    /// shaded and set in bold (the TOTAL row).
    fn table(&mut self, columns: &[TableColumn], rows: &[Vec<String>], emphasize_last: bool) {
        const ROW_HEIGHT: f64 = 6.5;
        const CELL_PAD: f64 = 1.8;
        const FONT_SIZE: f64 = 8.0;

        self.ensure_space(ROW_HEIGHT * 2.0);

        // Header row.
        let top = self.y;
        let table_width: f64 = columns.iter().map(|c| c.width).sum();
        self.fill_rect(MARGIN_LEFT, top, table_width, ROW_HEIGHT, primary());
        let mut x = MARGIN_LEFT;
        for column in columns {
            let text_x = match column.align {
                Align::Left => x + CELL_PAD,
                Align::Right => {
                    x + column.width - CELL_PAD - estimate_width(column.header, FONT_SIZE)
                }
            };
            self.layer.set_fill_color(white());
            self.layer.use_text(
                column.header,
                FONT_SIZE,
                Mm(text_x),
                Mm(PAGE_HEIGHT - top - ROW_HEIGHT + CELL_PAD),
                &self.fonts.bold,
            );
            x += column.width;
        }
        self.layer.set_fill_color(body_text());
        self.advance(ROW_HEIGHT);

        // Body rows.
        for (index, row) in rows.iter().enumerate() {
            self.ensure_space(ROW_HEIGHT);
            let top = self.y;
            let last = index == rows.len() - 1;
            if emphasize_last && last {
                self.fill_rect(MARGIN_LEFT, top, table_width, ROW_HEIGHT, total_row_fill());
            }
            let font = if emphasize_last && last {
                &self.fonts.bold
            } else {
                &self.fonts.regular
            };

            let mut x = MARGIN_LEFT;
            for (column, cell) in columns.iter().zip(row) {
                if !cell.is_empty() {
                    let text_x = match column.align {
                        Align::Left => x + CELL_PAD,
                        Align::Right => {
                            x + column.width - CELL_PAD - estimate_width(cell, FONT_SIZE)
                        }
                    };
                    self.layer.use_text(
                        cell.as_str(),
                        FONT_SIZE,
                        Mm(text_x),
                        Mm(PAGE_HEIGHT - top - ROW_HEIGHT + CELL_PAD),
                        font,
                    );
                }
                x += column.width;
            }

            self.advance(ROW_HEIGHT);
            self.rule_at(self.y, table_width, rule_line(), 0.2);
        }
    }

    fn rule_at(&mut self, top: f64, width: f64, color: Color, thickness: f64) {
        self.layer.set_outline_color(color);
        self.layer.set_outline_thickness(thickness);
        self.layer.add_shape(Line {
            points: vec![
                (Point::new(Mm(MARGIN_LEFT), Mm(PAGE_HEIGHT - top)), false),
                (
                    Point::new(Mm(MARGIN_LEFT + width), Mm(PAGE_HEIGHT - top)),
                    false,
                ),
            ],
            is_closed: false,
            has_fill: false,
            has_stroke: true,
            is_clipping_path: false,
        });
    }

    /// Decode and embed a chart image captured as a data URL. A malformed
    /// or undecodable image is logged and skipped.
    fn chart(&mut self, data_url: &str, caption: &str) {
        let decoded = match decode_data_url(data_url).and_then(|bytes| {
            image::load_from_memory(&bytes)
                .map_err(|e| SizingError::RenderFailed(e.to_string()))
        }) {
            Ok(image) => image,
            Err(e) => {
                warn!("skipping chart image: {e}");
                return;
            }
        };

        let (px_width, px_height) = decoded.dimensions();
        if px_width == 0 || px_height == 0 {
            warn!("skipping chart image with zero dimensions");
            return;
        }

        // Chart canvases are captured at screen resolution; 96 dpi is the
        // CSS reference pixel density.
        const DPI: f64 = 96.0;
        let natural_width = f64::from(px_width) * 25.4 / DPI;
        let natural_height = f64::from(px_height) * 25.4 / DPI;
        let scale = (CONTENT_WIDTH / natural_width)
            .min(MAX_CHART_HEIGHT / natural_height)
            .min(1.0);
        let drawn_width = natural_width * scale;
        let drawn_height = natural_height * scale;

        self.ensure_space(drawn_height + 14.0);
        self.text_colored(caption, 10.0, Style::Bold, MARGIN_LEFT, primary());
        self.advance(4.0);

        let rgb = decoded.to_rgb8();
        let xobject = ImageXObject {
            width: Px(px_width as usize),
            height: Px(px_height as usize),
            color_space: ColorSpace::Rgb,
            bits_per_component: ColorBits::Bit8,
            interpolate: true,
            image_data: rgb.into_raw(),
            image_filter: None,
            clipping_bbox: None,
        };
        let x = MARGIN_LEFT + (CONTENT_WIDTH - drawn_width) / 2.0;
        let y = PAGE_HEIGHT - self.y - drawn_height;
        Image::from(xobject).add_to_layer(
            self.layer.clone(),
            Some(Mm(x)),
            Some(Mm(y)),
            None,
            Some(scale),
            Some(scale),
            Some(DPI),
        );
        self.advance(drawn_height + 8.0);
    }
}

fn estimate_width(text: &str, size_pt: f64) -> f64 {
    text.chars().count() as f64 * size_pt * AVG_GLYPH_EM * MM_PER_PT
}

/// Extract the binary payload from a `data:<mime>;base64,<payload>` URL.
pub fn decode_data_url(url: &str) -> Result<Vec<u8>> {
    let rest = url
        .strip_prefix("data:")
        .ok_or_else(|| SizingError::RenderFailed("not a data URL".to_string()))?;
    let (meta, payload) = rest
        .split_once(',')
        .ok_or_else(|| SizingError::RenderFailed("malformed data URL".to_string()))?;
    if !meta.ends_with(";base64") {
        return Err(SizingError::RenderFailed(
            "data URL is not base64-encoded".to_string(),
        ));
    }
    BASE64
        .decode(payload)
        .map_err(|e| SizingError::RenderFailed(format!("invalid base64 payload: {e}")))
}

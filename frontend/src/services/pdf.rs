//! Finance report PDF rendering.
//!
//! Lays the compiled report out on A4 pages: title and totals block on the
//! first page, then a ruled table of transaction rows that continues onto
//! fresh pages when it overflows. Only produces the bytes; the browser
//! download lives in [`super::download`].

use anyhow::{anyhow, Result};
use printpdf::{BuiltinFont, IndirectFontRef, Line, Mm, PdfDocument, PdfLayerReference, Point};
use shared::{FinanceReport, ReportRow, REPORT_TITLE, TABLE_HEADER};

const PAGE_WIDTH: f32 = 210.0;
const PAGE_HEIGHT: f32 = 297.0;
const MARGIN_LEFT: f32 = 14.0;
const MARGIN_RIGHT: f32 = 14.0;
const MARGIN_BOTTOM: f32 = 20.0;
const TITLE_Y: f32 = PAGE_HEIGHT - 20.0;
const TOTALS_START_Y: f32 = PAGE_HEIGHT - 30.0;
const TOTALS_LINE_HEIGHT: f32 = 6.0;
const TABLE_START_Y: f32 = PAGE_HEIGHT - 54.0;
const CONTINUATION_START_Y: f32 = PAGE_HEIGHT - 20.0;
const ROW_HEIGHT: f32 = 7.0;
const COLUMN_X: [f32; 4] = [14.0, 92.0, 132.0, 162.0];
const DESCRIPTION_MAX_CHARS: usize = 40;

/// Render a report to PDF bytes.
pub fn render_report(report: &FinanceReport) -> Result<Vec<u8>> {
    let (doc, first_page, first_layer) =
        PdfDocument::new(REPORT_TITLE, Mm(PAGE_WIDTH), Mm(PAGE_HEIGHT), "Layer 1");
    let font = doc
        .add_builtin_font(BuiltinFont::Helvetica)
        .map_err(|e| anyhow!("failed to load font: {e}"))?;
    let bold = doc
        .add_builtin_font(BuiltinFont::HelveticaBold)
        .map_err(|e| anyhow!("failed to load font: {e}"))?;

    for (page_index, page_rows) in paginate(&report.rows).iter().enumerate() {
        let layer = if page_index == 0 {
            doc.get_page(first_page).get_layer(first_layer)
        } else {
            let (page, layer) = doc.add_page(Mm(PAGE_WIDTH), Mm(PAGE_HEIGHT), "Layer 1");
            doc.get_page(page).get_layer(layer)
        };

        let mut y = if page_index == 0 {
            layer.use_text(REPORT_TITLE, 18.0, Mm(MARGIN_LEFT), Mm(TITLE_Y), &bold);
            layer.use_text(
                format!("Generated on {}", report.generated_on),
                10.0,
                Mm(PAGE_WIDTH - MARGIN_RIGHT - 55.0),
                Mm(TITLE_Y),
                &font,
            );
            let mut totals_y = TOTALS_START_Y;
            for total_line in report.total_lines() {
                layer.use_text(total_line, 12.0, Mm(MARGIN_LEFT), Mm(totals_y), &font);
                totals_y -= TOTALS_LINE_HEIGHT;
            }
            TABLE_START_Y
        } else {
            CONTINUATION_START_Y
        };

        draw_header_row(&layer, &bold, y);
        y -= ROW_HEIGHT;

        for row in *page_rows {
            let description = truncate_cell(&row.description, DESCRIPTION_MAX_CHARS);
            let cells = [
                description.as_str(),
                row.amount.as_str(),
                row.kind.as_str(),
                row.date.as_str(),
            ];
            for (cell, x) in cells.iter().zip(COLUMN_X) {
                layer.use_text(*cell, 11.0, Mm(x), Mm(y), &font);
            }
            y -= ROW_HEIGHT;
        }
    }

    doc.save_to_bytes()
        .map_err(|e| anyhow!("failed to serialize PDF: {e}"))
}

fn draw_header_row(layer: &PdfLayerReference, bold: &IndirectFontRef, y: f32) {
    for (cell, x) in TABLE_HEADER.iter().zip(COLUMN_X) {
        layer.use_text(*cell, 11.0, Mm(x), Mm(y), bold);
    }

    let rule_y = y - 2.0;
    let divider = Line {
        points: vec![
            (Point::new(Mm(MARGIN_LEFT), Mm(rule_y)), false),
            (Point::new(Mm(PAGE_WIDTH - MARGIN_RIGHT), Mm(rule_y)), false),
        ],
        is_closed: false,
    };
    layer.set_outline_thickness(0.5);
    layer.add_line(divider);
}

/// Rows that fit from `start_y` down to the bottom margin
fn rows_that_fit(start_y: f32) -> usize {
    let usable = start_y - MARGIN_BOTTOM;
    if usable < ROW_HEIGHT {
        0
    } else {
        (usable / ROW_HEIGHT) as usize
    }
}

/// Split report rows into per-page chunks. The first page loses space to
/// the title and totals block; every page repeats the header row.
fn paginate(rows: &[ReportRow]) -> Vec<&[ReportRow]> {
    let first_capacity = rows_that_fit(TABLE_START_Y - ROW_HEIGHT).max(1);
    let continuation_capacity = rows_that_fit(CONTINUATION_START_Y - ROW_HEIGHT).max(1);

    let mut pages = Vec::new();
    let first_end = rows.len().min(first_capacity);
    pages.push(&rows[..first_end]);

    let mut index = first_end;
    while index < rows.len() {
        let end = rows.len().min(index + continuation_capacity);
        pages.push(&rows[index..end]);
        index = end;
    }
    pages
}

fn truncate_cell(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let truncated: String = text.chars().take(max_chars.saturating_sub(3)).collect();
    format!("{}...", truncated)
}

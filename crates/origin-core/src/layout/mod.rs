//! # Certificate layout
//!
//! The layout is a static table mapping each [`Field`] to a position on the
//! page. [`Layout::plan`] turns a [`SubmissionRecord`] into positioned
//! [`TextRun`]s without drawing anything, so placement can be tested apart
//! from PDF generation.
//!
//! Coordinates are PDF points with the origin at the bottom-left corner of
//! the page; each additional wrapped line moves down by its `line_height`.

mod wrap;

pub use wrap::*;

use crate::{Field, SubmissionRecord};

/// Font size of every field.
pub const FONT_SIZE: f32 = 9.0;

/// Vertical distance between wrapped lines.
pub const LINE_HEIGHT: f32 = 12.0;

/// Wrap width of the exporter and consignee address blocks.
pub const ADDRESS_WIDTH: usize = 45;

/// One column of a [`Placement::Table`] row.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Column {
    pub field: Field,
    pub x: f32,
    pub width: usize,
}

/// Where and how one part of the record is drawn.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Placement {
    /// A single line drawn verbatim.
    Line { field: Field, x: f32, y: f32 },
    /// Text wrapped to `width` characters, one line per `line_height`.
    Block {
        field: Field,
        x: f32,
        y: f32,
        width: usize,
        line_height: f32,
    },
    /// Columns wrapped independently, padded to equal length and drawn
    /// row-aligned.
    Table {
        y: f32,
        line_height: f32,
        columns: [Column; 4],
    },
}

impl Placement {
    /// Fields drawn by this placement.
    pub fn fields(&self) -> Vec<Field> {
        match self {
            Placement::Line { field, .. } | Placement::Block { field, .. } => vec![*field],
            Placement::Table { columns, .. } => columns.iter().map(|c| c.field).collect(),
        }
    }
}

/// A piece of text at a fixed position.
#[derive(Clone, Debug, PartialEq)]
pub struct TextRun {
    pub field: Field,
    pub x: f32,
    pub y: f32,
    pub text: String,
}

/// An ordered set of placements.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Layout {
    pub placements: &'static [Placement],
}

const fn line(field: Field, x: f32, y: f32) -> Placement {
    Placement::Line { field, x, y }
}

const fn block(field: Field, x: f32, y: f32) -> Placement {
    Placement::Block {
        field,
        x,
        y,
        width: ADDRESS_WIDTH,
        line_height: LINE_HEIGHT,
    }
}

const fn column(field: Field, x: f32, width: usize) -> Column {
    Column { field, x, width }
}

/// The certificate-of-origin form layout.
pub static CERTIFICATE_LAYOUT: Layout = Layout {
    placements: &[
        block(Field::Exporter, 60.0, 730.0),
        block(Field::Consignee, 60.0, 615.0),
        line(Field::PreCarriageBy, 60.0, 525.0),
        line(Field::PlaceOfReceipt, 160.0, 525.0),
        line(Field::VesselFlightNo, 60.0, 495.0),
        line(Field::PortOfLoading, 160.0, 495.0),
        line(Field::LcNo, 300.0, 495.0),
        line(Field::PortOfDischarge, 60.0, 465.0),
        line(Field::FinalDestination, 160.0, 465.0),
        line(Field::BlAwbNo, 300.0, 465.0),
        Placement::Table {
            y: 410.0,
            line_height: LINE_HEIGHT,
            columns: [
                column(Field::MarksNosAndContainerNo, 55.0, 22),
                column(Field::NumAndKindOfPkgs, 150.0, 15),
                column(Field::DescriptionOfGoods, 280.0, 22),
                column(Field::Quantity, 420.0, 10),
            ],
        },
        line(Field::Destination, 130.0, 300.0),
        line(Field::Consignor, 130.0, 265.0),
        line(Field::InvoiceNumber, 140.0, 235.0),
        line(Field::Manufacturer, 130.0, 220.0),
        line(Field::Nationality, 130.0, 200.0),
        line(Field::TotalQuantity, 470.0, 160.0),
        line(Field::Date, 100.0, 40.0),
        line(Field::CertificationPlace, 100.0, 25.0),
        line(Field::ExporterSignature, 200.0, 50.0),
    ],
};

impl Default for Layout {
    fn default() -> Self {
        CERTIFICATE_LAYOUT
    }
}

impl Layout {
    /// Every field the layout draws, in placement order.
    pub fn fields(&self) -> Vec<Field> {
        self.placements.iter().flat_map(Placement::fields).collect()
    }

    /// Positions every non-empty line of `record`.
    pub fn plan(&self, record: &SubmissionRecord) -> Vec<TextRun> {
        let mut runs = Vec::new();

        for placement in self.placements {
            match *placement {
                Placement::Line { field, x, y } => {
                    push_run(&mut runs, field, x, y, record.get(field).to_owned());
                }
                Placement::Block {
                    field,
                    x,
                    y,
                    width,
                    line_height,
                } => {
                    for (i, text) in wrap(record.get(field), width).into_iter().enumerate() {
                        push_run(&mut runs, field, x, row_y(y, line_height, i), text);
                    }
                }
                Placement::Table {
                    y,
                    line_height,
                    columns,
                } => {
                    let wrapped = pad_columns(columns.map(|c| wrap(record.get(c.field), c.width)));
                    let rows = wrapped[0].len();
                    let mut cells = wrapped.map(Vec::into_iter);
                    for i in 0..rows {
                        for (column, cell) in columns.iter().zip(cells.iter_mut()) {
                            let text = cell.next().unwrap_or_default();
                            push_run(&mut runs, column.field, column.x, row_y(y, line_height, i), text);
                        }
                    }
                }
            }
        }

        runs
    }
}

fn row_y(y: f32, line_height: f32, row: usize) -> f32 {
    y - row as f32 * line_height
}

fn push_run(runs: &mut Vec<TextRun>, field: Field, x: f32, y: f32, text: String) {
    if !text.is_empty() {
        runs.push(TextRun { field, x, y, text });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::FIELD_COUNT;
    use std::collections::HashSet;

    fn record() -> SubmissionRecord {
        let mut record = SubmissionRecord::default();
        for field in Field::ALL {
            *record.get_mut(field) = format!("{field} value");
        }
        record
    }

    fn runs_for(runs: &[TextRun], field: Field) -> Vec<&TextRun> {
        runs.iter().filter(|r| r.field == field).collect()
    }

    #[test]
    fn layout_places_every_field_exactly_once() {
        let fields = CERTIFICATE_LAYOUT.fields();
        assert_eq!(fields.len(), FIELD_COUNT);
        assert_eq!(fields.iter().collect::<HashSet<_>>().len(), FIELD_COUNT);
    }

    #[test]
    fn long_exporter_wraps_at_address_width() {
        let exporter =
            "Acme Trading Co, 123 Long Street Name That Exceeds Forty Five Characters In Total Length";
        let mut record = record();
        record.exporter = exporter.to_owned();

        let runs = CERTIFICATE_LAYOUT.plan(&record);
        let lines = runs_for(&runs, Field::Exporter);

        assert!(lines.len() >= 2, "expected wrapping, got {lines:?}");
        for (i, run) in lines.iter().enumerate() {
            assert!(run.text.chars().count() <= ADDRESS_WIDTH);
            assert_eq!(run.x, 60.0);
            assert_eq!(run.y, 730.0 - 12.0 * i as f32);
        }
        let joined = lines.iter().map(|r| r.text.as_str()).collect::<Vec<_>>().join(" ");
        assert_eq!(joined, exporter);
    }

    #[test]
    fn single_line_fields_are_verbatim() {
        let mut record = record();
        record.port_of_loading = "A port name that is much longer than any wrap width on this form".into();

        let runs = CERTIFICATE_LAYOUT.plan(&record);
        let lines = runs_for(&runs, Field::PortOfLoading);
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].text, record.port_of_loading);
        assert_eq!((lines[0].x, lines[0].y), (160.0, 495.0));
    }

    #[test]
    fn table_columns_are_row_aligned() {
        let mut record = record();
        record.marks_nosandcontainer_no = "PKG-001".into();
        record.num_and_kind_of_pkgs = "10 cartons".into();
        record.description_of_goods = "cotton shirts, assorted sizes, packed flat".into();
        record.quantity = "".into();

        let runs = CERTIFICATE_LAYOUT.plan(&record);
        let desc = runs_for(&runs, Field::DescriptionOfGoods);
        let marks = runs_for(&runs, Field::MarksNosAndContainerNo);

        assert_eq!(desc.len(), wrap(&record.description_of_goods, 22).len());
        assert!(desc.len() > 1);
        assert_eq!(marks.len(), 1);
        assert_eq!(marks[0].y, desc[0].y);
        assert_eq!(desc[1].y, 410.0 - 12.0);
        assert!(desc.iter().all(|r| r.x == 280.0));
        assert!(runs_for(&runs, Field::Quantity).is_empty());
    }

    #[test]
    fn empty_fields_draw_nothing() {
        let runs = CERTIFICATE_LAYOUT.plan(&SubmissionRecord::default());
        assert!(runs.is_empty());
    }

    #[test]
    fn short_record_yields_one_run_per_field() {
        let mut record = SubmissionRecord::default();
        for field in Field::ALL {
            *record.get_mut(field) = "7".into();
        }
        let runs = CERTIFICATE_LAYOUT.plan(&record);
        assert_eq!(runs.len(), FIELD_COUNT);
        assert!(runs.iter().all(|r| r.text == "7"));
    }
}

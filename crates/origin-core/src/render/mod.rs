//! # PDF rendering
//!
//! [`Renderer::render`] is a pure record-to-bytes step. It applies a
//! two-branch background policy: the image is drawn when it can be loaded,
//! otherwise a diagnostic line is drawn in its place and rendering continues.
//! Errors past that point fail the whole document; no partial PDF is ever
//! returned.

mod backdrop;
mod pdf;

pub use backdrop::*;
pub use pdf::{DIAGNOSTIC_FONT_SIZE, DIAGNOSTIC_POSITION, PAGE_HEIGHT, PAGE_WIDTH};

use crate::{CERTIFICATE_LAYOUT, Layout, Result, SubmissionRecord};
use std::path::{Path, PathBuf};

/// File name of the scanned blank form used as the page background.
pub const DEFAULT_BACKGROUND: &str = "Certificate of Origin (CII)_page-0001.jpg";

/// Renders certificates over a fixed background image.
///
/// The background is re-read on every render so that a replaced or restored
/// file is picked up without restarting the service.
#[derive(Clone, Debug)]
pub struct Renderer {
    background: PathBuf,
    layout: Layout,
}

impl Renderer {
    pub fn new(background: impl Into<PathBuf>) -> Self {
        Self {
            background: background.into(),
            layout: CERTIFICATE_LAYOUT,
        }
    }

    pub fn with_layout(mut self, layout: Layout) -> Self {
        self.layout = layout;
        self
    }

    pub fn background(&self) -> &Path {
        &self.background
    }

    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    /// Produces a single-page A4 PDF for `record`.
    #[tracing::instrument(level = "debug", skip_all)]
    pub fn render(&self, record: &SubmissionRecord) -> Result<Vec<u8>> {
        let backdrop = Backdrop::load(&self.background);
        let runs = self.layout.plan(record);
        pdf::compose(backdrop, &runs)
    }
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new(DEFAULT_BACKGROUND)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Field;
    use image::RgbImage;
    use lopdf::{Document, Object, content::Content};

    fn record() -> SubmissionRecord {
        let mut record = SubmissionRecord::default();
        for field in Field::ALL {
            *record.get_mut(field) = format!("{field}");
        }
        record.exporter =
            "Acme Trading Co, 123 Long Street Name That Exceeds Forty Five Characters In Total Length"
                .into();
        record
    }

    struct Page {
        operators: Vec<String>,
        texts: Vec<String>,
        has_background: bool,
    }

    fn inspect(pdf: &[u8]) -> Page {
        let doc = Document::load_mem(pdf).unwrap();
        let pages = doc.get_pages();
        assert_eq!(pages.len(), 1, "expected a single page");
        let page_id = *pages.values().next().unwrap();

        let content = Content::decode(&doc.get_page_content(page_id).unwrap()).unwrap();
        let texts = content
            .operations
            .iter()
            .filter(|op| op.operator == "Tj")
            .filter_map(|op| match op.operands.first() {
                Some(Object::String(bytes, _)) => Some(String::from_utf8_lossy(bytes).into_owned()),
                _ => None,
            })
            .collect();

        let resources_id = doc
            .get_dictionary(page_id)
            .and_then(|page| page.get(b"Resources"))
            .and_then(Object::as_reference)
            .unwrap();
        let has_background = doc
            .get_dictionary(resources_id)
            .and_then(|r| r.get(b"XObject"))
            .and_then(Object::as_dict)
            .is_ok_and(|x| x.has(b"Bg"));

        Page {
            operators: content.operations.into_iter().map(|op| op.operator).collect(),
            texts,
            has_background,
        }
    }

    #[test]
    fn missing_background_still_renders_with_diagnostic() {
        let dir = tempfile::tempdir().unwrap();
        let renderer = Renderer::new(dir.path().join("missing.jpg"));

        let pdf = renderer.render(&record()).unwrap();
        assert!(pdf.starts_with(b"%PDF-1.5"));

        let page = inspect(&pdf);
        assert!(!page.has_background);
        assert!(!page.operators.iter().any(|op| op == "Do"));
        assert!(page.texts[0].starts_with("Error loading image: "), "{:?}", page.texts[0]);
        assert!(page.texts.iter().any(|t| t == "port_of_loading"));
    }

    #[test]
    fn background_is_drawn_before_text() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("background.png");
        RgbImage::from_pixel(21, 30, image::Rgb([240, 240, 230])).save(&path).unwrap();

        let pdf = Renderer::new(&path).render(&record()).unwrap();
        let page = inspect(&pdf);

        assert!(page.has_background);
        let draw = page.operators.iter().position(|op| op == "Do").unwrap();
        let first_text = page.operators.iter().position(|op| op == "Tj").unwrap();
        assert!(draw < first_text);
        assert!(!page.texts.iter().any(|t| t.starts_with("Error loading image")));
    }

    #[test]
    fn exporter_text_is_split_across_lines_without_loss() {
        let dir = tempfile::tempdir().unwrap();
        let record = record();
        let pdf = Renderer::new(dir.path().join("missing.jpg")).render(&record).unwrap();
        let page = inspect(&pdf);

        let exporter_lines = crate::wrap(&record.exporter, crate::ADDRESS_WIDTH);
        assert!(exporter_lines.len() >= 2);
        // Runs follow the diagnostic line in layout order, exporter first.
        assert_eq!(&page.texts[1..=exporter_lines.len()], exporter_lines.as_slice());
        assert_eq!(exporter_lines.join(" "), record.exporter);
    }

    #[test]
    fn each_render_is_independent() {
        let dir = tempfile::tempdir().unwrap();
        let renderer = Renderer::new(dir.path().join("missing.jpg"));
        let mut other = record();
        other.consignee = "Somebody Else".into();

        let a = inspect(&renderer.render(&record()).unwrap());
        let b = inspect(&renderer.render(&other).unwrap());
        assert!(a.texts.iter().any(|t| t == "consignee"));
        assert!(b.texts.iter().any(|t| t == "Somebody Else"));
        assert!(!b.texts.iter().any(|t| t == "consignee"));
    }

    #[test]
    fn custom_layout_draws_only_its_placements() {
        static CONSIGNEE_ONLY: [crate::Placement; 1] = [crate::Placement::Line {
            field: Field::Consignee,
            x: 100.0,
            y: 400.0,
        }];
        let layout = Layout {
            placements: &CONSIGNEE_ONLY,
        };

        let dir = tempfile::tempdir().unwrap();
        let renderer = Renderer::new(dir.path().join("missing.jpg")).with_layout(layout);
        assert_eq!(renderer.layout(), &layout);

        let page = inspect(&renderer.render(&record()).unwrap());
        assert_eq!(page.texts.len(), 2, "{:?}", page.texts);
        assert!(page.texts[0].starts_with("Error loading image: "));
        assert_eq!(page.texts[1], "consignee");
    }

    #[test]
    fn default_renderer_uses_certificate_form() {
        let renderer = Renderer::default();
        assert_eq!(renderer.background(), Path::new(DEFAULT_BACKGROUND));
        assert_eq!(renderer.layout(), &CERTIFICATE_LAYOUT);
        assert_ne!(
            Renderer::new("other.jpg").with_layout(CERTIFICATE_LAYOUT).background(),
            renderer.background()
        );
    }
}

use crate::{Backdrop, FONT_SIZE, Result, TextRun};
use lopdf::{
    Dictionary, Document, Object, Stream, StringFormat,
    content::{Content, Operation},
    dictionary,
};

/// A4 in PDF points.
pub const PAGE_WIDTH: f32 = 595.2756;
pub const PAGE_HEIGHT: f32 = 841.8898;

/// Position and size of the message drawn when the background is missing.
pub const DIAGNOSTIC_POSITION: (f32, f32) = (100.0, 800.0);
pub const DIAGNOSTIC_FONT_SIZE: f32 = 12.0;

const FONT_KEY: &str = "F1";
const BACKGROUND_KEY: &str = "Bg";

/// Assembles a single-page PDF: the backdrop stretched over the page, then
/// every run in Helvetica.
pub(crate) fn compose(backdrop: Backdrop, runs: &[TextRun]) -> Result<Vec<u8>> {
    let mut doc = Document::with_version("1.5");
    let pages_id = doc.new_object_id();

    let font_id = doc.add_object(dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => "Helvetica",
        "Encoding" => "WinAnsiEncoding",
    });

    let mut operations = Vec::with_capacity(runs.len() * 5 + 5);
    let mut xobjects = Dictionary::new();

    match backdrop {
        Backdrop::Image(image) => {
            let image_id = doc.add_object(Stream::new(
                dictionary! {
                    "Type" => "XObject",
                    "Subtype" => "Image",
                    "Width" => i64::from(image.width),
                    "Height" => i64::from(image.height),
                    "ColorSpace" => image.color_space,
                    "BitsPerComponent" => 8,
                    "Filter" => "DCTDecode",
                },
                image.data,
            ));
            xobjects.set(BACKGROUND_KEY, image_id);

            operations.push(Operation::new("q", vec![]));
            operations.push(Operation::new(
                "cm",
                vec![
                    PAGE_WIDTH.into(),
                    0.into(),
                    0.into(),
                    PAGE_HEIGHT.into(),
                    0.into(),
                    0.into(),
                ],
            ));
            operations.push(Operation::new("Do", vec![BACKGROUND_KEY.into()]));
            operations.push(Operation::new("Q", vec![]));
        }
        Backdrop::Diagnostic(message) => {
            let (x, y) = DIAGNOSTIC_POSITION;
            push_text(&mut operations, DIAGNOSTIC_FONT_SIZE, x, y, &message);
        }
    }

    for run in runs {
        push_text(&mut operations, FONT_SIZE, run.x, run.y, &run.text);
    }

    let content_id = doc.add_object(Stream::new(
        Dictionary::new(),
        Content { operations }.encode()?,
    ));

    let resources_id = doc.add_object(dictionary! {
        "Font" => dictionary! { FONT_KEY => font_id },
        "XObject" => xobjects,
    });

    let page_id = doc.add_object(dictionary! {
        "Type" => "Page",
        "Parent" => pages_id,
        "Contents" => content_id,
        "Resources" => resources_id,
        "MediaBox" => vec![0.into(), 0.into(), PAGE_WIDTH.into(), PAGE_HEIGHT.into()],
    });

    doc.objects.insert(
        pages_id,
        Object::Dictionary(dictionary! {
            "Type" => "Pages",
            "Kids" => vec![page_id.into()],
            "Count" => 1,
        }),
    );

    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    doc.trailer.set("Root", catalog_id);

    let mut buffer = Vec::new();
    doc.save_to(&mut buffer)?;
    Ok(buffer)
}

fn push_text(operations: &mut Vec<Operation>, size: f32, x: f32, y: f32, text: &str) {
    operations.push(Operation::new("BT", vec![]));
    operations.push(Operation::new("Tf", vec![FONT_KEY.into(), size.into()]));
    operations.push(Operation::new("Td", vec![x.into(), y.into()]));
    operations.push(Operation::new(
        "Tj",
        vec![Object::String(encode_win_ansi(text), StringFormat::Literal)],
    ));
    operations.push(Operation::new("ET", vec![]));
}

/// Maps text onto the single-byte font encoding. Latin-1 characters keep
/// their code point, other whitespace becomes a space, everything else `?`.
pub(crate) fn encode_win_ansi(text: &str) -> Vec<u8> {
    text.chars()
        .map(|c| match u8::try_from(u32::from(c)) {
            Ok(byte) if !c.is_control() => byte,
            _ if c.is_whitespace() => b' ',
            _ => b'?',
        })
        .collect()
}

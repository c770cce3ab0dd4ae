use image::{
    ColorType, ExtendedColorType, ImageDecoder, ImageFormat,
    codecs::jpeg::{JpegDecoder, JpegEncoder},
};
use std::{fs, io::Cursor, path::Path};

/// Quality used when a non-JPEG background has to be re-encoded.
const REENCODE_QUALITY: u8 = 90;

/// Why a background image could not be used.
#[derive(thiserror::Error, Debug)]
pub enum BackdropError {
    #[error("{0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Image(#[from] image::ImageError),
}

/// A background image ready to embed with the `DCTDecode` filter.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct JpegImage {
    pub width: u32,
    pub height: u32,
    /// PDF color space name, `DeviceRGB` or `DeviceGray`.
    pub color_space: &'static str,
    pub data: Vec<u8>,
}

impl JpegImage {
    pub fn open(path: &Path) -> Result<Self, BackdropError> {
        Self::from_bytes(fs::read(path)?)
    }

    /// Baseline RGB or grayscale JPEGs are kept byte for byte; anything else
    /// the `image` crate can decode is converted to an RGB JPEG.
    pub fn from_bytes(bytes: Vec<u8>) -> Result<Self, BackdropError> {
        if image::guess_format(&bytes)? == ImageFormat::Jpeg {
            let header = {
                let decoder = JpegDecoder::new(Cursor::new(bytes.as_slice()))?;
                let (width, height) = decoder.dimensions();
                match decoder.color_type() {
                    ColorType::Rgb8 => Some((width, height, "DeviceRGB")),
                    ColorType::L8 => Some((width, height, "DeviceGray")),
                    _ => None,
                }
            };
            if let Some((width, height, color_space)) = header {
                return Ok(Self {
                    width,
                    height,
                    color_space,
                    data: bytes,
                });
            }
        }

        let rgb = image::load_from_memory(&bytes)?.to_rgb8();
        let (width, height) = rgb.dimensions();
        let mut data = Vec::new();
        JpegEncoder::new_with_quality(&mut data, REENCODE_QUALITY).encode(
            rgb.as_raw(),
            width,
            height,
            ExtendedColorType::Rgb8,
        )?;

        Ok(Self {
            width,
            height,
            color_space: "DeviceRGB",
            data,
        })
    }
}

/// What gets drawn underneath the fields.
///
/// Loading never fails: an unusable image becomes a [`Backdrop::Diagnostic`]
/// carrying a message that is drawn on the page instead.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Backdrop {
    Image(JpegImage),
    Diagnostic(String),
}

impl Backdrop {
    pub fn load(path: &Path) -> Self {
        match JpegImage::open(path) {
            Ok(image) => Backdrop::Image(image),
            Err(err) => {
                tracing::warn!(path = %path.display(), "Background image unavailable: {err}");
                Backdrop::Diagnostic(format!("Error loading image: {err}"))
            }
        }
    }
}

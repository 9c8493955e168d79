//! QR encoder producing PNG images with a fixed profile.

use std::io::Cursor;

use bytes::Bytes;
use image::{ImageBuffer, ImageFormat, Luma};
use qrcode::types::QrError;
use qrcode::{EcLevel, QrCode, Version};

use labinv_core::config::LinkCodeConfig;
use labinv_core::error::AppError;
use labinv_core::result::AppResult;
use labinv_core::traits::LinkEncoder;

const MAX_VERSION: i16 = 40;

/// Encodes content as a black-on-white QR PNG.
///
/// The profile (version, error correction, module size, border) is fixed
/// at construction, so identical content always yields identical bytes.
#[derive(Debug, Clone)]
pub struct QrPngEncoder {
    version: i16,
    ec_level: EcLevel,
    module_size: u32,
    border: u32,
    fit: bool,
}

impl QrPngEncoder {
    /// Build an encoder from the link-code configuration.
    pub fn from_config(config: &LinkCodeConfig) -> AppResult<Self> {
        if !(1..=MAX_VERSION).contains(&config.version) {
            return Err(AppError::configuration(format!(
                "Invalid link code version: {}. Expected 1-{MAX_VERSION}",
                config.version
            )));
        }
        if config.module_size == 0 {
            return Err(AppError::configuration(
                "Link code module_size must be at least 1",
            ));
        }
        Ok(Self {
            version: config.version,
            ec_level: parse_ec_level(&config.error_correction)?,
            module_size: config.module_size,
            border: config.border,
            fit: config.fit,
        })
    }

    fn symbol(&self, content: &str) -> AppResult<QrCode> {
        let last = if self.fit { MAX_VERSION } else { self.version };
        for v in self.version..=last {
            match QrCode::with_version(content.as_bytes(), Version::Normal(v), self.ec_level) {
                Ok(code) => return Ok(code),
                Err(QrError::DataTooLong) => continue,
                Err(e) => {
                    return Err(AppError::with_source(
                        labinv_core::error::ErrorKind::Encoding,
                        format!("Failed to encode link code: {e}"),
                        e,
                    ));
                }
            }
        }
        Err(AppError::encoding(format!(
            "Content of {} bytes does not fit a version {last} link code",
            content.len()
        )))
    }
}

impl LinkEncoder for QrPngEncoder {
    fn encode(&self, content: &str) -> AppResult<Bytes> {
        let code = self.symbol(content)?;
        let symbol = code
            .render::<Luma<u8>>()
            .quiet_zone(false)
            .module_dimensions(self.module_size, self.module_size)
            .build();

        let pad = self.border * self.module_size;
        let mut canvas = ImageBuffer::from_pixel(
            symbol.width() + 2 * pad,
            symbol.height() + 2 * pad,
            Luma([255u8]),
        );
        image::imageops::overlay(&mut canvas, &symbol, i64::from(pad), i64::from(pad));

        let mut out = Cursor::new(Vec::new());
        canvas
            .write_to(&mut out, ImageFormat::Png)
            .map_err(|e| AppError::encoding(format!("Failed to write PNG: {e}")))?;
        Ok(Bytes::from(out.into_inner()))
    }
}

fn parse_ec_level(level: &str) -> AppResult<EcLevel> {
    match level.trim().to_ascii_uppercase().as_str() {
        "L" => Ok(EcLevel::L),
        "M" => Ok(EcLevel::M),
        "Q" => Ok(EcLevel::Q),
        "H" => Ok(EcLevel::H),
        other => Err(AppError::configuration(format!(
            "Unknown error correction level: '{other}'. Supported: L, M, Q, H"
        ))),
    }
}

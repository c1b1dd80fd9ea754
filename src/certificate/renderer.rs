//! Fixed-layout certificate documenting one run

use crate::certificate::font::{draw_text, draw_text_centered};
use crate::io::configuration::{
    ACCENT_COLOR, AUTHENTICATION_TEXT, BACKGROUND_COLOR, CERTIFICATE_FOOTER, CERTIFICATE_HEIGHT,
    CERTIFICATE_TITLE, CERTIFICATE_WIDTH, FIELD_SPACING, FIELD_START_Y, FOOTER_OFFSET,
    FRAME_COLOR, FRAME_MARGIN, GRID_COLOR, GRID_SPACING, LABEL_COLOR, LABEL_X, TIMESTAMP_FORMAT,
    TITLE_Y, VALUE_COLOR, VALUE_X,
};
use crate::io::error::{MementoError, Result};
use crate::transform::Mode;
use chrono::NaiveDateTime;
use image::imageops::{self, FilterType};
use image::{Rgb, RgbImage};
use std::path::{Path, PathBuf};

const TITLE_SCALE: u32 = 6;
const LABEL_SCALE: u32 = 2;
const VALUE_SCALE: u32 = 3;
const FOOTER_SCALE: u32 = 2;
const FRAME_THICKNESS: u32 = 2;
// Centres label glyphs against the taller value glyphs
const LABEL_BASELINE_OFFSET: u32 = 4;

/// Renders certificates onto either a configured background or a generated grid
#[derive(Debug, Clone, Default)]
pub struct CertificateRenderer {
    background: Option<PathBuf>,
}

impl CertificateRenderer {
    /// Renderer that always draws the generated grid background
    pub const fn new() -> Self {
        Self { background: None }
    }

    /// Renderer that uses `path` as background whenever the file exists
    pub fn with_background<P: AsRef<Path>>(path: P) -> Self {
        Self {
            background: Some(path.as_ref().to_path_buf()),
        }
    }

    /// Configured background path, if any
    pub fn background(&self) -> Option<&Path> {
        self.background.as_deref()
    }

    /// Render the certificate for one run
    ///
    /// # Errors
    ///
    /// Returns [`MementoError::RenderUnavailable`] if the configured background
    /// exists but cannot be decoded
    pub fn render(
        &self,
        token: &str,
        probability: f64,
        mode: Mode,
        timestamp: NaiveDateTime,
    ) -> Result<RgbImage> {
        let mut cert = self.load_background()?;

        draw_frame(&mut cert);
        draw_text_centered(
            &mut cert,
            CERTIFICATE_TITLE,
            CERTIFICATE_WIDTH / 2,
            TITLE_Y,
            TITLE_SCALE,
            Rgb(ACCENT_COLOR),
        );

        let fields = [
            ("TOKEN ID", token.to_string()),
            ("PHYSICAL ENTROPY", percentage_text(probability)),
            ("OBSERVER MODE", mode.key().to_uppercase()),
            (
                "TIMESTAMP",
                timestamp.format(TIMESTAMP_FORMAT).to_string(),
            ),
            ("AUTH", AUTHENTICATION_TEXT.to_string()),
        ];

        for (index, (label, value)) in fields.iter().enumerate() {
            let y = FIELD_START_Y + index as u32 * FIELD_SPACING;
            draw_text(
                &mut cert,
                &format!("// {label}"),
                LABEL_X,
                y + LABEL_BASELINE_OFFSET,
                LABEL_SCALE,
                Rgb(LABEL_COLOR),
            );
            draw_text(&mut cert, value, VALUE_X, y, VALUE_SCALE, Rgb(VALUE_COLOR));
        }

        draw_text_centered(
            &mut cert,
            CERTIFICATE_FOOTER,
            CERTIFICATE_WIDTH / 2,
            CERTIFICATE_HEIGHT - FOOTER_OFFSET,
            FOOTER_SCALE,
            Rgb(FRAME_COLOR),
        );

        Ok(cert)
    }

    fn load_background(&self) -> Result<RgbImage> {
        match &self.background {
            Some(path) if path.exists() => {
                let img = image::open(path).map_err(|e| MementoError::RenderUnavailable {
                    resource: path.clone(),
                    source: e,
                })?;
                Ok(imageops::resize(
                    &img.to_rgb8(),
                    CERTIFICATE_WIDTH,
                    CERTIFICATE_HEIGHT,
                    FilterType::Triangle,
                ))
            }
            _ => Ok(grid_background()),
        }
    }
}

/// Probability as a percentage with ten decimal places, e.g. `50.0000000000%`
pub fn percentage_text(probability: f64) -> String {
    format!("{:.10}%", probability * 100.0)
}

/// Dark fill crossed by a square grid
pub fn grid_background() -> RgbImage {
    let mut img = RgbImage::from_pixel(
        CERTIFICATE_WIDTH,
        CERTIFICATE_HEIGHT,
        Rgb(BACKGROUND_COLOR),
    );

    for x in (0..CERTIFICATE_WIDTH).step_by(GRID_SPACING as usize) {
        for y in 0..CERTIFICATE_HEIGHT {
            img.put_pixel(x, y, Rgb(GRID_COLOR));
        }
    }
    for y in (0..CERTIFICATE_HEIGHT).step_by(GRID_SPACING as usize) {
        for x in 0..CERTIFICATE_WIDTH {
            img.put_pixel(x, y, Rgb(GRID_COLOR));
        }
    }
    img
}

fn draw_frame(img: &mut RgbImage) {
    let left = FRAME_MARGIN;
    let top = FRAME_MARGIN;
    let right = CERTIFICATE_WIDTH - FRAME_MARGIN;
    let bottom = CERTIFICATE_HEIGHT - FRAME_MARGIN;

    for offset in 0..FRAME_THICKNESS {
        for x in left..=right {
            img.put_pixel(x, top + offset, Rgb(FRAME_COLOR));
            img.put_pixel(x, bottom - offset, Rgb(FRAME_COLOR));
        }
        for y in top..=bottom {
            img.put_pixel(left + offset, y, Rgb(FRAME_COLOR));
            img.put_pixel(right - offset, y, Rgb(FRAME_COLOR));
        }
    }
}

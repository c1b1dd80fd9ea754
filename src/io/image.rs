//! Conversion between image files and `height × width × 3` arrays

use crate::io::error::{MementoError, Result, invalid_image};
use crate::transform::CHANNELS;
use image::RgbImage;
use ndarray::Array3;
use std::path::Path;

/// Load any supported image format and flatten it to 8-bit RGB
///
/// # Errors
///
/// Returns an error if the file cannot be read or decoded
pub fn load_rgb_array<P: AsRef<Path>>(path: P) -> Result<Array3<u8>> {
    let path_buf = path.as_ref().to_path_buf();
    let img = image::open(&path_buf).map_err(|e| MementoError::ImageLoad {
        path: path_buf,
        source: e,
    })?;
    rgb_to_array(&img.to_rgb8())
}

/// Copy an RGB image into an array indexed as `(row, column, channel)`
///
/// # Errors
///
/// Returns an error if the pixel buffer does not match the image dimensions
pub fn rgb_to_array(img: &RgbImage) -> Result<Array3<u8>> {
    let (width, height) = (img.width() as usize, img.height() as usize);
    Array3::from_shape_vec((height, width, CHANNELS), img.as_raw().clone())
        .map_err(|e| invalid_image(&format!("pixel buffer does not match {width}x{height}: {e}")))
}

/// Copy an array back into an RGB image
///
/// # Errors
///
/// Returns an error if the array does not have exactly 3 channels
pub fn array_to_rgb(array: &Array3<u8>) -> Result<RgbImage> {
    let (height, width, channels) = array.dim();
    if channels != CHANNELS {
        return Err(invalid_image(&format!(
            "expected {CHANNELS} channels, found {channels}"
        )));
    }

    let pixels: Vec<u8> = array.iter().copied().collect();
    RgbImage::from_raw(width as u32, height as u32, pixels)
        .ok_or_else(|| invalid_image(&format!("cannot build a {width}x{height} image")))
}

/// Save an RGB image, creating parent directories as needed
///
/// The format follows the file extension.
///
/// # Errors
///
/// Returns an error if:
/// - The parent directory cannot be created
/// - The image cannot be encoded or written
pub fn save_rgb<P: AsRef<Path>>(img: &RgbImage, path: P) -> Result<()> {
    let path = path.as_ref();
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent).map_err(|e| MementoError::FileSystem {
            path: parent.to_path_buf(),
            operation: "create directory",
            source: e,
        })?;
    }

    img.save(path).map_err(|e| MementoError::ImageExport {
        path: path.to_path_buf(),
        source: e,
    })
}

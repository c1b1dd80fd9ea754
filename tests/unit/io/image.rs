//! Tests for conversion between image files and RGB arrays

#[cfg(test)]
mod tests {
    use image::{Rgb, RgbImage};
    use ndarray::Array3;
    use qmemento::MementoError;
    use qmemento::io::image::{array_to_rgb, load_rgb_array, rgb_to_array, save_rgb};

    fn gradient(width: u32, height: u32) -> RgbImage {
        RgbImage::from_fn(width, height, |x, y| {
            Rgb([(x * 20) as u8, (y * 30) as u8, ((x + y) * 5) as u8])
        })
    }

    // Tests pixel (x, y) lands at array index (y, x)
    // Verified by transposing the array shape
    #[test]
    fn test_rgb_to_array_layout() {
        let img = gradient(5, 3);
        let array = rgb_to_array(&img).expect("matching buffer");

        assert_eq!(array.dim(), (3, 5, 3));
        for (x, y, pixel) in img.enumerate_pixels() {
            for channel in 0..3 {
                assert_eq!(
                    array[(y as usize, x as usize, channel)],
                    pixel.0[channel]
                );
            }
        }
    }

    // Tests converting back restores the same image
    // Verified by iterating columns before rows
    #[test]
    fn test_array_to_rgb_restores_image() {
        let img = gradient(7, 4);
        let array = rgb_to_array(&img).expect("matching buffer");
        assert_eq!(array_to_rgb(&array).expect("three channels"), img);
    }

    // Tests arrays with an alpha channel are refused
    // Verified by removing the channel check
    #[test]
    fn test_array_to_rgb_rejects_rgba() {
        let array = Array3::<u8>::zeros((2, 2, 4));
        assert!(matches!(
            array_to_rgb(&array),
            Err(MementoError::InvalidImage { .. })
        ));
    }

    // Tests saved PNGs load back unchanged, creating directories on the way
    // Verified by skipping directory creation
    #[test]
    fn test_save_and_load_png() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("nested").join("photo.png");
        let img = gradient(6, 6);

        save_rgb(&img, &path).expect("saved");
        let loaded = load_rgb_array(&path).expect("loaded");
        assert_eq!(loaded, rgb_to_array(&img).expect("matching buffer"));
    }

    // Tests missing files report ImageLoad with the path
    // Verified by mapping to a generic file system error
    #[test]
    fn test_load_missing_file() {
        let result = load_rgb_array("does/not/exist.png");
        assert!(matches!(result, Err(MementoError::ImageLoad { .. })));
    }
}

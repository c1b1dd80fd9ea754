//! Tests for entanglement mode mirroring, blending and channel order

#[cfg(test)]
mod tests {
    use ndarray::{Array3, array};
    use qmemento::transform::entanglement::{apply, swap_to_bgr};
    use qmemento::transform::{Mode, transform};
    use rand::{SeedableRng, rngs::StdRng};

    fn three_pixel_fixture() -> Array3<u8> {
        array![[[10, 20, 30], [40, 50, 60], [70, 80, 90]]]
    }

    // Tests mix 0 keeps the left half, mirrors it, and leaves the odd column
    // Verified by mirroring the right half instead
    #[test]
    fn test_unmixed_odd_width() {
        let mut rng = StdRng::seed_from_u64(0);
        let output =
            transform(&three_pixel_fixture(), 0.0, Mode::Entanglement, &mut rng).expect("valid");
        let expected: Array3<u8> = array![[[30, 20, 10], [30, 20, 10], [90, 80, 70]]];
        assert_eq!(output, expected);
    }

    // Tests full mix replaces the left half with the inverted right half
    // Verified by omitting the 255 inversion
    #[test]
    fn test_full_mix_inverts() {
        let mut rng = StdRng::seed_from_u64(0);
        let output =
            transform(&three_pixel_fixture(), 0.5, Mode::Entanglement, &mut rng).expect("valid");
        let expected: Array3<u8> = array![[[195, 205, 215], [195, 205, 215], [90, 80, 70]]];
        assert_eq!(output, expected);
    }

    // Tests channel order is reversed on every pixel
    // Verified by rotating channels instead of reversing them
    #[test]
    fn test_swap_to_bgr() {
        let working = array![[[1.0, 2.0, 3.0], [4.0, 5.0, 6.0]]];
        assert_eq!(
            swap_to_bgr(&working),
            array![[[3.0, 2.0, 1.0], [6.0, 5.0, 4.0]]]
        );
    }

    // Tests the right half always mirrors the left half before the swap
    // Verified by copying without flipping
    #[test]
    fn test_right_half_mirrors_left() {
        let mut working = Array3::from_shape_fn((3, 8, 3), |(row, col, channel)| {
            (row * 31 + col * 7 + channel * 3) as f64
        });
        apply(&mut working, 0.3);

        for row in 0..3 {
            for col in 0..4 {
                for channel in 0..3 {
                    assert!(
                        (working[(row, col, channel)] - working[(row, 7 - col, channel)]).abs()
                            < 1e-9
                    );
                }
            }
        }
    }

    // Tests partial mixing blends linearly
    // Verified by weighting the left half with mix instead of 1 - mix
    #[test]
    fn test_partial_mix() {
        let image: Array3<u8> = array![[[100, 100, 100], [55, 55, 55]]];
        let mut rng = StdRng::seed_from_u64(0);
        let output = transform(&image, 0.25, Mode::Entanglement, &mut rng).expect("valid");
        // mix 0.5: 100 * 0.5 + (255 - 55) * 0.5 = 150
        let expected: Array3<u8> = array![[[150, 150, 150], [150, 150, 150]]];
        assert_eq!(output, expected);
    }
}

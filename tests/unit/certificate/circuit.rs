//! Tests for the circuit diagram

#[cfg(test)]
mod tests {
    use image::Rgb;
    use qmemento::certificate::circuit::{CIRCUIT_HEIGHT, CIRCUIT_WIDTH, render_circuit_diagram};

    // Tests the diagram size and paper colour
    // Verified by swapping width and height
    #[test]
    fn test_diagram_dimensions() {
        let img = render_circuit_diagram();
        assert_eq!(img.dimensions(), (CIRCUIT_WIDTH, CIRCUIT_HEIGHT));
        assert_eq!(*img.get_pixel(0, 0), Rgb([255, 255, 255]));
    }

    // Tests both gate boxes are filled with their colours
    // Verified by filling the measurement box with the gate colour
    #[test]
    fn test_diagram_gates() {
        let img = render_circuit_diagram();
        assert_eq!(*img.get_pixel(155, 50), Rgb([0x6F, 0xA4, 0xFF]));
        assert_eq!(*img.get_pixel(295, 50), Rgb([0x9E, 0x9E, 0x9E]));
        // Box outline
        assert_eq!(*img.get_pixel(150, 50), Rgb([0, 0, 0]));
    }

    // Tests the quantum wire and the doubled classical wire
    // Verified by drawing a single classical line
    #[test]
    fn test_diagram_wires() {
        let img = render_circuit_diagram();
        let black = Rgb([0, 0, 0]);
        assert_eq!(*img.get_pixel(100, 70), black);
        assert_eq!(*img.get_pixel(100, 150), black);
        assert_eq!(*img.get_pixel(100, 154), black);
        assert_eq!(*img.get_pixel(100, 152), Rgb([255, 255, 255]));
    }
}

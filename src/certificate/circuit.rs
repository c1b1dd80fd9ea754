//! Diagram of the sampling circuit: one qubit, a Hadamard gate, one measurement

use crate::certificate::font::{draw_text, draw_text_centered};
use image::{Rgb, RgbImage};

/// Diagram width in pixels
pub const CIRCUIT_WIDTH: u32 = 480;
/// Diagram height in pixels
pub const CIRCUIT_HEIGHT: u32 = 200;

const PAPER: Rgb<u8> = Rgb([255, 255, 255]);
const INK: Rgb<u8> = Rgb([0, 0, 0]);
const GATE_FILL: Rgb<u8> = Rgb([0x6F, 0xA4, 0xFF]);
const METER_FILL: Rgb<u8> = Rgb([0x9E, 0x9E, 0x9E]);

const WIRE_START: u32 = 70;
const WIRE_END: u32 = 450;
const QUANTUM_WIRE_Y: u32 = 70;
const CLASSICAL_WIRE_Y: u32 = 150;
const CLASSICAL_GAP: u32 = 4;
const GATE_SIZE: u32 = 50;
const HADAMARD_X: u32 = 150;
const MEASURE_X: u32 = 290;

/// Render the diagram in the familiar textbook layout
///
/// The quantum wire `Q` carries an `H` box followed by an `M` box whose double
/// line drops to the classical wire `C`, annotated with the bit index.
pub fn render_circuit_diagram() -> RgbImage {
    let mut img = RgbImage::from_pixel(CIRCUIT_WIDTH, CIRCUIT_HEIGHT, PAPER);

    draw_text(&mut img, "Q", 24, QUANTUM_WIRE_Y - 10, 3, INK);
    draw_text(&mut img, "C", 24, CLASSICAL_WIRE_Y - 8, 3, INK);

    horizontal_line(&mut img, WIRE_START, WIRE_END, QUANTUM_WIRE_Y, INK);
    horizontal_line(&mut img, WIRE_START, WIRE_END, CLASSICAL_WIRE_Y, INK);
    horizontal_line(
        &mut img,
        WIRE_START,
        WIRE_END,
        CLASSICAL_WIRE_Y + CLASSICAL_GAP,
        INK,
    );

    gate(&mut img, HADAMARD_X, "H", GATE_FILL);
    gate(&mut img, MEASURE_X, "M", METER_FILL);

    let drop_x = MEASURE_X + GATE_SIZE / 2;
    let drop_top = QUANTUM_WIRE_Y + GATE_SIZE / 2;
    vertical_line(&mut img, drop_x - 2, drop_top, CLASSICAL_WIRE_Y, INK);
    vertical_line(&mut img, drop_x + 2, drop_top, CLASSICAL_WIRE_Y, INK);
    draw_text_centered(&mut img, "0", drop_x + 16, CLASSICAL_WIRE_Y + 20, 2, INK);

    img
}

fn gate(img: &mut RgbImage, left: u32, label: &str, fill: Rgb<u8>) {
    let top = QUANTUM_WIRE_Y - GATE_SIZE / 2;
    for y in top..top + GATE_SIZE {
        for x in left..left + GATE_SIZE {
            let edge =
                x == left || x == left + GATE_SIZE - 1 || y == top || y == top + GATE_SIZE - 1;
            img.put_pixel(x, y, if edge { INK } else { fill });
        }
    }
    draw_text_centered(img, label, left + GATE_SIZE / 2, QUANTUM_WIRE_Y, 4, INK);
}

fn horizontal_line(img: &mut RgbImage, from_x: u32, to_x: u32, y: u32, color: Rgb<u8>) {
    for x in from_x..to_x {
        img.put_pixel(x, y, color);
    }
}

fn vertical_line(img: &mut RgbImage, x: u32, from_y: u32, to_y: u32, color: Rgb<u8>) {
    for y in from_y..to_y {
        img.put_pixel(x, y, color);
    }
}

//! Run constants and runtime configuration defaults

use std::time::Duration;

// Sampling limits mirror the range offered to users of the photo booth
/// Default number of shots drawn from the probability source
pub const DEFAULT_SHOTS: u32 = 2048;
/// Smallest shot count accepted from the command line
pub const MIN_SHOTS: u32 = 512;
/// Largest shot count accepted from the command line
pub const MAX_SHOTS: u32 = 4096;

/// Bias of the simulated qubit after a Hadamard gate
pub const EQUAL_SUPERPOSITION: f64 = 0.5;

/// Default wall-clock limit for a single sampling call
pub const DEFAULT_SOURCE_TIMEOUT: Duration = Duration::from_secs(30);

// Output locations
/// Append-only research log written once per run
pub const DEFAULT_LOG_FILE: &str = "quantum_research_log.csv";
/// Optional certificate background, used when it exists on disk
pub const DEFAULT_BACKGROUND_FILE: &str = "cert_bg.jpg";
/// Suffix added to transformed image filenames
pub const OUTPUT_SUFFIX: &str = "_moment";
/// Suffix added to certificate filenames
pub const CERTIFICATE_SUFFIX: &str = "_certificate";
/// Default filename for the circuit diagram
pub const DEFAULT_CIRCUIT_FILE: &str = "circuit_diagram.png";

/// Timestamp layout shared by the research log and certificates
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";
/// Characters of the v4 UUID kept for a run token
pub const TOKEN_LENGTH: usize = 16;

// Certificate geometry
/// Certificate width in pixels
pub const CERTIFICATE_WIDTH: u32 = 1200;
/// Certificate height in pixels
pub const CERTIFICATE_HEIGHT: u32 = 750;
/// Spacing of the generated background grid
pub const GRID_SPACING: u32 = 60;
/// Inset of the decorative frame from the certificate edge
pub const FRAME_MARGIN: u32 = 40;
/// Vertical centre of the title line
pub const TITLE_Y: u32 = 110;
/// Top of the first labelled field
pub const FIELD_START_Y: u32 = 280;
/// Vertical distance between labelled fields
pub const FIELD_SPACING: u32 = 75;
/// Left edge of field labels
pub const LABEL_X: u32 = 180;
/// Left edge of field values
pub const VALUE_X: u32 = 460;
/// Distance of the footer centre from the bottom edge
pub const FOOTER_OFFSET: u32 = 80;

// Certificate palette
/// Background fill when no background image is available
pub const BACKGROUND_COLOR: [u8; 3] = [0x02, 0x05, 0x0A];
/// Generated grid line colour
pub const GRID_COLOR: [u8; 3] = [0x0A, 0x1E, 0x3D];
/// Frame and footer colour
pub const FRAME_COLOR: [u8; 3] = [0x1E, 0x3A, 0x5F];
/// Title colour
pub const ACCENT_COLOR: [u8; 3] = [0x00, 0xF2, 0xFF];
/// Field label colour
pub const LABEL_COLOR: [u8; 3] = [0x4A, 0x90, 0xE2];
/// Field value colour
pub const VALUE_COLOR: [u8; 3] = [0xFF, 0xFF, 0xFF];

// Certificate text
/// Certificate heading
pub const CERTIFICATE_TITLE: &str = "QUANTUM MOMENT CERTIFICATE";
/// Fixed authentication field value
pub const AUTHENTICATION_TEXT: &str = "HADAMARD-GATE / WAVEFUNCTION COLLAPSE";
/// Footer line
pub const CERTIFICATE_FOOTER: &str =
    "VERIFIED BY Q-MEMENTO ENGINE | GLOBALLY UNIQUE DIGITAL ASSET";

mod utils;

use smart_leds::RGB8;
pub use utils::{parse_hex, rgb_from_u32, scale_color};

pub type Rgb = RGB8;

/// Opaque hex color of a pixel that is switched off.
pub const OFF: &str = "000000";

/// Hex colors of the stock Blinkt palette.
pub const BLUE: &str = "000B87";
pub const GREEN: &str = "00FF00";
pub const RED: &str = "FF0000";

use crate::util::ResultExt;
use csscolorparser::Color;

pub const STONE: &str = "#1c1917";
pub const RED: &str = "#ef4444";
pub const BLUE: &str = "#3b82f6";
pub const GREEN: &str = "#22c55e";

pub const COLORS: [&str; 4] = [STONE, RED, BLUE, GREEN];

/// Erasing paints with the canvas background.
pub const ERASER: &str = "#f5f5f4";

pub const THIN: u32 = 2;
pub const MEDIUM: u32 = 5;
pub const THICK: u32 = 10;

pub const WIDTHS: [(&str, u32); 3] = [("Fin", THIN), ("Moyen", MEDIUM), ("Épais", THICK)];

/// Parses one of the compiled-in hex colors, falling back to opaque black.
pub fn color(hex: &str) -> Color {
	csscolorparser::parse(hex).ok_or_log(hex).unwrap_or_default()
}

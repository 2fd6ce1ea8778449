//! Color constants for the Reelview desktop client.
//!
//! Dark cinema palette: near-black backgrounds with an amber accent.

use eframe::egui::Color32;

/// Main background - Near black
pub const BG_DARK: Color32 = Color32::from_rgb(0x14, 0x12, 0x18);

/// Card background for movie entries
pub const CARD_BG: Color32 = Color32::from_rgb(0x20, 0x1D, 0x27);

/// Top bar background
pub const TOP_BAR_BG: Color32 = Color32::from_rgb(0x1B, 0x18, 0x21);

/// Accent - Amber
pub const ACCENT: Color32 = Color32::from_rgb(0xE8, 0xA8, 0x3C);

/// Primary text on dark backgrounds
pub const TEXT_LIGHT: Color32 = Color32::from_rgb(0xEF, 0xEA, 0xE2);

/// Secondary text - Muted gray
pub const TEXT_SECONDARY: Color32 = Color32::from_rgb(0x9A, 0x93, 0xA5);

/// Error text - Soft red
pub const ERROR: Color32 = Color32::from_rgb(0xE5, 0x73, 0x73);

/// Star rating color
pub const STAR: Color32 = Color32::from_rgb(0xF2, 0xC9, 0x4C);

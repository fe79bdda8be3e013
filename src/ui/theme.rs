//! Color theme constants for the qflash UI
//!
//! Emerald and sand palette on a dark terminal.

use ratatui::style::Color;

// ============================================================================
// Base Colors
// ============================================================================

/// Primary border color
pub const COLOR_BORDER: Color = Color::DarkGray;

/// Highlighted borders and selected elements - emerald
pub const COLOR_ACCENT: Color = Color::Rgb(16, 185, 129); // emerald #10B981

/// Header and title text
pub const COLOR_HEADER: Color = Color::White;

/// Dim text for hints and less important info
pub const COLOR_DIM: Color = Color::DarkGray;

/// Secondary text (descriptions, captions)
pub const COLOR_MUTED: Color = Color::Gray;

// ============================================================================
// Card Colors
// ============================================================================

/// Arabic script on the card face - sand
pub const COLOR_ARABIC: Color = Color::Rgb(238, 214, 170);

/// Transliteration line
pub const COLOR_TRANSLITERATION: Color = Color::Rgb(110, 231, 183); // emerald-300

/// English gloss
pub const COLOR_GLOSS: Color = Color::White;

/// Example ayah text - amber
pub const COLOR_EXAMPLE: Color = Color::Rgb(251, 191, 36);

/// Disabled controls
pub const COLOR_DISABLED: Color = Color::Rgb(70, 70, 70);

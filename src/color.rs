//! The seedling palette and the radial gradient used for the background.

use palette::{Mix, Srgb};

/// An opaque 8-bit sRGB color.
pub type Color = Srgb<u8>;

// ============================================================================
// Palette
// ============================================================================

/// Meadow green at the middle of the background disc.
pub const BACKGROUND_CENTER: Color = Srgb::new(76, 139, 66);

/// Darker green at the rim of the background disc.
pub const BACKGROUND_EDGE: Color = Srgb::new(56, 102, 48);

pub const STEM: Color = Srgb::new(139, 115, 85);

pub const LEAF_LIGHT: Color = Srgb::new(144, 198, 82);

pub const LEAF_DARK: Color = Srgb::new(106, 168, 56);

pub const SOIL: Color = Srgb::new(101, 67, 33);

// ============================================================================
// Gradient
// ============================================================================

/// Returns the color of background ring `ring` out of `radius` rings.
///
/// The outermost ring (`ring == radius`) is exactly `edge`; smaller rings move
/// linearly towards `center`. Channels are truncated, not rounded, so the
/// innermost ring only approaches `center` for small radii.
pub fn radial_step(edge: Color, center: Color, ring: u32, radius: u32) -> Color {
    if radius == 0 {
        return center;
    }
    let ratio = f64::from(ring) / f64::from(radius);
    let mixed = widen(edge).mix(widen(center), 1.0 - ratio);
    Srgb::new(mixed.red as u8, mixed.green as u8, mixed.blue as u8)
}

/// Lifts 8-bit channels into `f64` without normalizing them to 0..1.
fn widen(color: Color) -> Srgb<f64> {
    let (r, g, b) = color.into_components();
    Srgb::new(f64::from(r), f64::from(g), f64::from(b))
}

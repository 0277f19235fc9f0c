//! The seedling artwork.
//!
//! [`render`] paints a sprout growing out of a soil mound on a circular
//! green background. Every coordinate is derived from the requested edge
//! length, so the drawing keeps its proportions at any size.

use image::RgbaImage;

use crate::canvas::Canvas;
use crate::color;
use crate::geometry::{PointPx, RectPx, scale};

/// Renders the icon as a `size` x `size` RGBA image.
///
/// The result is fully determined by `size`. A zero size yields an empty
/// image rather than an error.
///
/// The corners stay transparent for every size from 4 up except 5, where the
/// 2 px minimum stem half-width reaches pixel (0, 0).
pub fn render(size: u32) -> RgbaImage {
    let Some(mut canvas) = Canvas::new(size) else {
        return RgbaImage::new(0, 0);
    };
    let layout = Layout::new(size);

    paint_background(&mut canvas);
    paint_stem(&mut canvas, &layout);
    paint_leaves(&mut canvas, &layout);
    paint_soil(&mut canvas, &layout);

    canvas.into_image()
}

// ============================================================================
// Layout
// ============================================================================

/// Size-derived geometry shared by the seedling parts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Layout {
    center: i32,
    stem_x: i32,
    stem_width: i32,
    stem_top: i32,
    stem_bottom: i32,
    leaf_size: i32,
    soil_half_width: i32,
    soil_height: i32,
}

impl Layout {
    fn new(size: u32) -> Self {
        let size = i32::try_from(size).unwrap_or(i32::MAX);
        let center = size / 2;
        let stem_bottom = center + scale(size, 0.15);

        Self {
            center,
            stem_x: center,
            stem_width: (size / 40).max(2),
            stem_top: stem_bottom - scale(size, 0.45),
            stem_bottom,
            leaf_size: scale(size, 0.25),
            soil_half_width: scale(size, 0.15),
            soil_height: scale(size, 0.12),
        }
    }

    /// Offset from the stem top, as a truncated fraction of the leaf size.
    fn leaf(&self, factor: f64) -> i32 {
        scale(self.leaf_size, factor)
    }
}

// ============================================================================
// Parts
// ============================================================================

/// Paints the background disc as concentric rings, outermost first, so each
/// smaller and lighter ring overwrites the one before it.
fn paint_background(canvas: &mut Canvas) {
    let size = canvas.size();
    let radius = size / 2;
    let center = size as f32 / 2.0;

    for ring in (1..=radius).rev() {
        let color = color::radial_step(
            color::BACKGROUND_EDGE,
            color::BACKGROUND_CENTER,
            ring,
            radius,
        );
        canvas.fill_circle(center, center, ring as f32, color);
    }
}

fn paint_stem(canvas: &mut Canvas, layout: &Layout) {
    let bounds = RectPx::from_ltrb(
        layout.stem_x - layout.stem_width,
        layout.stem_top,
        layout.stem_x + layout.stem_width,
        layout.stem_bottom,
    );
    canvas.fill_rounded_rect(bounds, layout.stem_width, color::STEM);
}

/// Paints both leaves. The right leaf is the left one mirrored across the
/// stem, each made of a dark blade with a lighter highlight on top.
fn paint_leaves(canvas: &mut Canvas, layout: &Layout) {
    let blade = left_blade(layout);
    let highlight = left_highlight(layout);

    paint_leaf(canvas, &blade, &highlight);
    paint_leaf(
        canvas,
        &mirror(&blade, layout.stem_x),
        &mirror(&highlight, layout.stem_x),
    );
}

fn paint_leaf(canvas: &mut Canvas, blade: &[PointPx; 3], highlight: &[PointPx; 3]) {
    canvas.fill_polygon(blade, color::LEAF_DARK);
    canvas.fill_polygon(highlight, color::LEAF_LIGHT);
}

fn left_blade(layout: &Layout) -> [PointPx; 3] {
    let (x, top) = (layout.stem_x, layout.stem_top);
    [
        PointPx::new(x, top + layout.leaf(0.3)),
        PointPx::new(x - layout.leaf(0.7), top - layout.leaf(0.4)),
        PointPx::new(x - layout.leaf(0.2), top),
    ]
}

fn left_highlight(layout: &Layout) -> [PointPx; 3] {
    let (x, top) = (layout.stem_x, layout.stem_top);
    [
        PointPx::new(x - layout.leaf(0.1), top + layout.leaf(0.2)),
        PointPx::new(x - layout.leaf(0.5), top - layout.leaf(0.2)),
        PointPx::new(x - layout.leaf(0.2), top + layout.leaf(0.05)),
    ]
}

fn mirror(points: &[PointPx; 3], axis: i32) -> [PointPx; 3] {
    points.map(|p| p.mirror_x(axis))
}

fn paint_soil(canvas: &mut Canvas, layout: &Layout) {
    let bounds = RectPx::from_ltrb(
        layout.center - layout.soil_half_width,
        layout.stem_bottom,
        layout.center + layout.soil_half_width,
        layout.stem_bottom + layout.soil_height,
    );
    canvas.fill_ellipse(bounds, color::SOIL);
}

// ============================================================================
// Tests
// ============================================================================

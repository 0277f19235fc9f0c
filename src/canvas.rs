//! Raster drawing surface for the icon artwork.
//!
//! [`Canvas`] wraps a `tiny-skia` pixmap and exposes the handful of filled
//! primitives the seedling needs. Anti-aliasing is disabled: every fill covers
//! exactly the pixels whose centers fall inside the shape and replaces them
//! with an opaque color, so later draws cleanly overpaint earlier ones and the
//! output is reproducible bit for bit.

use image::{Rgba, RgbaImage};
use resvg::tiny_skia::{FillRule, Paint, Path, PathBuilder, Pixmap, Rect, Transform};

use crate::color::Color;
use crate::geometry::{PointPx, RectPx};

/// Control point distance for approximating a quarter circle with a cubic.
const KAPPA: f32 = 0.552_284_8;

// ============================================================================
// Canvas
// ============================================================================

/// A square, initially transparent RGBA drawing surface.
pub struct Canvas {
    pixmap: Pixmap,
}

impl Canvas {
    /// Allocates a transparent `size` x `size` canvas.
    ///
    /// Returns `None` when `size` is zero or too large to allocate.
    pub fn new(size: u32) -> Option<Self> {
        Pixmap::new(size, size).map(|pixmap| Self { pixmap })
    }

    /// Returns the edge length in pixels.
    pub fn size(&self) -> u32 {
        self.pixmap.width()
    }

    /// Fills a circle given by a (possibly fractional) center and radius.
    pub fn fill_circle(&mut self, cx: f32, cy: f32, radius: f32, color: Color) {
        let Some(path) = PathBuilder::from_circle(cx, cy, radius) else {
            return;
        };
        self.fill(&path, color);
    }

    /// Fills the ellipse inscribed in `bounds`.
    pub fn fill_ellipse(&mut self, bounds: RectPx, color: Color) {
        let Some(oval) = to_rect(bounds) else {
            return;
        };
        let Some(path) = PathBuilder::from_oval(oval) else {
            return;
        };
        self.fill(&path, color);
    }

    /// Fills the closed polygon through `points`.
    ///
    /// Polygons that enclose no area are skipped.
    pub fn fill_polygon(&mut self, points: &[PointPx], color: Color) {
        let [first, rest @ ..] = points else {
            return;
        };
        let mut pb = PathBuilder::new();
        pb.move_to(first.x as f32, first.y as f32);
        for point in rest {
            pb.line_to(point.x as f32, point.y as f32);
        }
        pb.close();
        let Some(path) = pb.finish() else {
            return;
        };
        self.fill(&path, color);
    }

    /// Fills `bounds` with corners rounded to `radius`.
    ///
    /// The radius is clamped to half of the shorter side, so a radius equal
    /// to half the width produces fully rounded caps.
    pub fn fill_rounded_rect(&mut self, bounds: RectPx, radius: i32, color: Color) {
        if bounds.is_empty() {
            return;
        }
        let (l, t) = (bounds.left as f32, bounds.top as f32);
        let (r, b) = (bounds.right as f32, bounds.bottom as f32);
        let radius = (radius.max(0) as f32)
            .min(bounds.width() as f32 / 2.0)
            .min(bounds.height() as f32 / 2.0);
        let k = KAPPA * radius;

        let mut pb = PathBuilder::new();
        pb.move_to(l + radius, t);
        pb.line_to(r - radius, t);
        pb.cubic_to(r - radius + k, t, r, t + radius - k, r, t + radius);
        pb.line_to(r, b - radius);
        pb.cubic_to(r, b - radius + k, r - radius + k, b, r - radius, b);
        pb.line_to(l + radius, b);
        pb.cubic_to(l + radius - k, b, l, b - radius + k, l, b - radius);
        pb.line_to(l, t + radius);
        pb.cubic_to(l, t + radius - k, l + radius - k, t, l + radius, t);
        pb.close();
        let Some(path) = pb.finish() else {
            return;
        };
        self.fill(&path, color);
    }

    /// Converts the canvas into an un-premultiplied RGBA image.
    pub fn into_image(self) -> RgbaImage {
        let mut image = RgbaImage::new(self.pixmap.width(), self.pixmap.height());
        for (dst, src) in image.pixels_mut().zip(self.pixmap.pixels()) {
            let color = src.demultiply();
            *dst = Rgba([color.red(), color.green(), color.blue(), color.alpha()]);
        }
        image
    }

    fn fill(&mut self, path: &Path, color: Color) {
        let mut paint = Paint::default();
        paint.set_color_rgba8(color.red, color.green, color.blue, u8::MAX);
        paint.anti_alias = false;
        self.pixmap
            .fill_path(path, &paint, FillRule::Winding, Transform::identity(), None);
    }
}

fn to_rect(bounds: RectPx) -> Option<Rect> {
    if bounds.is_empty() {
        return None;
    }
    Rect::from_ltrb(
        bounds.left as f32,
        bounds.top as f32,
        bounds.right as f32,
        bounds.bottom as f32,
    )
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use palette::Srgb;

    const RED: Color = Srgb::new(255, 0, 0);
    const BLUE: Color = Srgb::new(0, 0, 255);

    #[test]
    fn new_canvas_is_transparent() {
        let image = Canvas::new(8).unwrap().into_image();
        assert_eq!(image.dimensions(), (8, 8));
        assert!(image.pixels().all(|p| p.0 == [0, 0, 0, 0]));
    }

    #[test]
    fn zero_size_canvas_is_rejected() {
        assert!(Canvas::new(0).is_none());
    }

    #[test]
    fn later_fills_overpaint_earlier_ones() {
        let mut canvas = Canvas::new(20).unwrap();
        canvas.fill_circle(10.0, 10.0, 9.0, RED);
        canvas.fill_circle(10.0, 10.0, 3.0, BLUE);
        let image = canvas.into_image();

        assert_eq!(image.get_pixel(10, 10).0, [0, 0, 255, 255]);
        assert_eq!(image.get_pixel(10, 3).0, [255, 0, 0, 255]);
        assert_eq!(image.get_pixel(0, 0).0, [0, 0, 0, 0]);
    }

    #[test]
    fn fills_are_hard_edged() {
        let mut canvas = Canvas::new(32).unwrap();
        canvas.fill_circle(16.0, 16.0, 11.0, RED);
        let image = canvas.into_image();
        assert!(image.pixels().all(|p| p[3] == 0 || p[3] == 255));
    }

    #[test]
    fn polygon_covers_its_interior_only() {
        let mut canvas = Canvas::new(10).unwrap();
        let square = [
            PointPx::new(2, 2),
            PointPx::new(8, 2),
            PointPx::new(8, 8),
            PointPx::new(2, 8),
        ];
        canvas.fill_polygon(&square, RED);
        let image = canvas.into_image();

        assert_eq!(image.get_pixel(2, 2).0, [255, 0, 0, 255]);
        assert_eq!(image.get_pixel(7, 7).0, [255, 0, 0, 255]);
        assert_eq!(image.get_pixel(8, 8)[3], 0);
        assert_eq!(image.get_pixel(1, 5)[3], 0);
    }

    #[test]
    fn degenerate_shapes_are_skipped() {
        let mut canvas = Canvas::new(10).unwrap();
        canvas.fill_polygon(&[], RED);
        canvas.fill_polygon(&[PointPx::new(3, 3), PointPx::new(3, 3)], RED);
        canvas.fill_ellipse(RectPx::from_ltrb(4, 4, 4, 9), RED);
        canvas.fill_rounded_rect(RectPx::from_ltrb(6, 2, 2, 8), 1, RED);
        let image = canvas.into_image();
        assert!(image.pixels().all(|p| p[3] == 0));
    }

    #[test]
    fn rounded_rect_clears_its_corners() {
        let mut canvas = Canvas::new(20).unwrap();
        canvas.fill_rounded_rect(RectPx::from_ltrb(4, 2, 16, 18), 6, BLUE);
        let image = canvas.into_image();

        assert_eq!(image.get_pixel(10, 10).0, [0, 0, 255, 255]);
        assert_eq!(image.get_pixel(4, 2)[3], 0);
        assert_eq!(image.get_pixel(15, 17)[3], 0);
        assert_eq!(image.get_pixel(10, 2)[3], 255);
    }

    #[test]
    fn ellipse_stays_inside_bounds() {
        let mut canvas = Canvas::new(20).unwrap();
        canvas.fill_ellipse(RectPx::from_ltrb(2, 8, 18, 12), RED);
        let image = canvas.into_image();

        assert_eq!(image.get_pixel(10, 10).0, [255, 0, 0, 255]);
        assert_eq!(image.get_pixel(10, 7)[3], 0);
        assert_eq!(image.get_pixel(10, 12)[3], 0);
        assert_eq!(image.get_pixel(2, 8)[3], 0);
    }
}

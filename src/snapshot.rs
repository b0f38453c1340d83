//! Headless rendering of a scene into a PNG.
//!
//! Rasterizes on the CPU, no GPU readback. Strokes are centered on the
//! geometry edge, half in and half out, matching how the shapes look on the
//! canvas.

use std::path::Path;

use image::{ImageFormat, Rgba, RgbaImage};
use log::info;
use thiserror::Error;

use crate::color::Color;
use crate::scene::Scene;
use crate::shape::{Shape, ShapeGeometry};

/// Errors from PNG export. `image::ImageError` folds encode and I/O failures
/// together, so one variant carries both.
#[derive(Debug, Error)]
pub enum SnapshotError {
    #[error("failed to write snapshot: {0}")]
    Image(#[from] image::ImageError),
}

fn to_rgba(color: Color) -> Rgba<u8> {
    Rgba([color.r, color.g, color.b, color.a])
}

fn from_rgba(pixel: Rgba<u8>) -> Color {
    Color::new(pixel.0[0], pixel.0[1], pixel.0[2], pixel.0[3])
}

/// Rasterizes the scene at the given pixel size, back to front over the
/// background color.
pub fn render_scene(scene: &Scene, width: u32, height: u32) -> RgbaImage {
    let mut image = RgbaImage::from_pixel(width, height, to_rgba(scene.background()));
    for shape in scene.shapes() {
        draw_shape(&mut image, shape);
    }
    image
}

/// Renders the scene and writes it to `path` as PNG.
pub fn export_png(
    scene: &Scene,
    width: u32,
    height: u32,
    path: &Path,
) -> Result<(), SnapshotError> {
    let image = render_scene(scene, width, height);
    image.save_with_format(path, ImageFormat::Png)?;
    info!("exported {width}x{height} snapshot to {}", path.display());
    Ok(())
}

/// What a pixel center hits within one shape.
enum Coverage {
    None,
    Fill,
    Outline,
}

fn draw_shape(image: &mut RgbaImage, shape: &Shape) {
    let half = (shape.outline_thickness.max(0.0)) / 2.0;
    // Bounding box of geometry plus the outward stroke half, clamped to the
    // image. Degenerate shapes produce an empty box here and draw nothing.
    let bounds = match shape.geometry {
        ShapeGeometry::Rectangle { x, y, width, height } => {
            if width <= 0.0 || height <= 0.0 {
                return;
            }
            (x - half, y - half, x + width + half, y + height + half)
        }
        ShapeGeometry::Ellipse {
            center_x,
            center_y,
            radius_x,
            radius_y,
        } => {
            if radius_x <= 0.0 || radius_y <= 0.0 {
                return;
            }
            (
                center_x - radius_x - half,
                center_y - radius_y - half,
                center_x + radius_x + half,
                center_y + radius_y + half,
            )
        }
    };

    let x0 = bounds.0.floor().max(0.0) as u32;
    let y0 = bounds.1.floor().max(0.0) as u32;
    let x1 = (bounds.2.ceil().max(0.0) as u32).min(image.width());
    let y1 = (bounds.3.ceil().max(0.0) as u32).min(image.height());

    for py in y0..y1 {
        for px in x0..x1 {
            // Sample at the pixel center.
            let sx = f64::from(px) + 0.5;
            let sy = f64::from(py) + 0.5;
            let color = match coverage(shape, sx, sy, half) {
                Coverage::None => continue,
                Coverage::Fill => shape.fill,
                Coverage::Outline => shape.outline,
            };
            let dst = from_rgba(*image.get_pixel(px, py));
            image.put_pixel(px, py, to_rgba(color.over(dst)));
        }
    }
}

fn coverage(shape: &Shape, sx: f64, sy: f64, half: f64) -> Coverage {
    match shape.geometry {
        ShapeGeometry::Rectangle { x, y, width, height } => {
            let in_band = |lo: f64, hi: f64, v: f64, pad: f64| v >= lo - pad && v <= hi + pad;
            let in_outer = in_band(x, x + width, sx, half) && in_band(y, y + height, sy, half);
            if !in_outer {
                return Coverage::None;
            }
            let in_inner = sx >= x + half
                && sx <= x + width - half
                && sy >= y + half
                && sy <= y + height - half;
            if half > 0.0 && !in_inner {
                Coverage::Outline
            } else if sx >= x && sx <= x + width && sy >= y && sy <= y + height {
                Coverage::Fill
            } else {
                Coverage::None
            }
        }
        ShapeGeometry::Ellipse {
            center_x,
            center_y,
            radius_x,
            radius_y,
        } => {
            let norm = |rx: f64, ry: f64| {
                if rx <= 0.0 || ry <= 0.0 {
                    return f64::INFINITY;
                }
                let dx = (sx - center_x) / rx;
                let dy = (sy - center_y) / ry;
                dx * dx + dy * dy
            };
            if half > 0.0 {
                let in_outer = norm(radius_x + half, radius_y + half) <= 1.0;
                let in_inner = norm(radius_x - half, radius_y - half) <= 1.0;
                if in_outer && !in_inner {
                    return Coverage::Outline;
                }
            }
            if norm(radius_x, radius_y) <= 1.0 {
                Coverage::Fill
            } else {
                Coverage::None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shape::{Point, ShapeKind, Style};

    fn style(fill: Color, outline: Color, thickness: f64) -> Style {
        Style {
            fill,
            outline,
            outline_thickness: thickness,
        }
    }

    const RED: Color = Color::from_rgb(0xff, 0, 0);
    const BLUE: Color = Color::from_rgb(0, 0, 0xff);
    const GREEN: Color = Color::from_rgb(0, 0xff, 0);

    #[test]
    fn background_shows_where_nothing_is_drawn() {
        let scene = Scene::new();
        let image = render_scene(&scene, 8, 8);
        assert_eq!(from_rgba(*image.get_pixel(0, 0)), scene.background());
    }

    #[test]
    fn rectangle_fill_and_outline_land_where_expected() {
        let mut scene = Scene::new();
        let id = scene.create_shape(
            ShapeKind::Rectangle,
            Point::new(10.0, 10.0),
            style(RED, BLUE, 4.0),
        );
        scene.resize_shape(id, Point::new(40.0, 40.0));
        let image = render_scene(&scene, 64, 64);

        assert_eq!(from_rgba(*image.get_pixel(25, 25)), RED, "interior is fill");
        assert_eq!(from_rgba(*image.get_pixel(10, 25)), BLUE, "edge is outline");
        assert_eq!(
            from_rgba(*image.get_pixel(5, 5)),
            scene.background(),
            "outside is background"
        );
    }

    #[test]
    fn front_shape_wins_on_overlap() {
        let mut scene = Scene::new();
        let back = scene.create_shape(ShapeKind::Rectangle, Point::new(0.0, 0.0), style(RED, RED, 0.0));
        scene.resize_shape(back, Point::new(30.0, 30.0));
        let front =
            scene.create_shape(ShapeKind::Rectangle, Point::new(10.0, 10.0), style(GREEN, GREEN, 0.0));
        scene.resize_shape(front, Point::new(40.0, 40.0));

        let image = render_scene(&scene, 64, 64);
        assert_eq!(from_rgba(*image.get_pixel(20, 20)), GREEN);
        assert_eq!(from_rgba(*image.get_pixel(5, 5)), RED);
    }

    #[test]
    fn negative_dimensions_draw_nothing() {
        let mut scene = Scene::new();
        let id = scene.create_shape(ShapeKind::Rectangle, Point::new(30.0, 30.0), style(RED, RED, 2.0));
        scene.resize_shape(id, Point::new(10.0, 10.0));
        let image = render_scene(&scene, 64, 64);
        for (_, _, pixel) in image.enumerate_pixels() {
            assert_eq!(from_rgba(*pixel), scene.background());
        }
    }

    #[test]
    fn ellipse_fills_inside_but_not_its_corner() {
        let mut scene = Scene::new();
        let id = scene.create_shape(ShapeKind::Ellipse, Point::new(32.0, 32.0), style(RED, RED, 0.0));
        scene.resize_shape(id, Point::new(52.0, 44.0));
        let image = render_scene(&scene, 64, 64);
        assert_eq!(from_rgba(*image.get_pixel(32, 32)), RED);
        // The bounding-box corner lies outside the ellipse.
        assert_eq!(from_rgba(*image.get_pixel(13, 21)), scene.background());
    }
}

//! Orthographic 3-D rendering of a pixel-intensity height field.
//!
//! A grayscale region becomes a mesh of quads whose height tracks pixel
//! intensity, viewed from a fixed elevation/azimuth and painted back to
//! front. Heights are stretched to the region's own min/max so low-contrast
//! regions still fill the vertical extent of the plot box.

use luma_ops::GrayBuffer;

use crate::rendering::chart::{Rect, GRID_LINE};
use crate::rendering::colormap::ColorMap;
use crate::rendering::svg::SvgDoc;

/// Mesh resolution cap per axis; larger regions are stride-subsampled.
pub const MAX_MESH_QUADS: usize = 64;

/// Camera angles for the orthographic projection, in degrees.
#[derive(Debug, Clone, Copy)]
pub struct SurfaceView {
    pub elevation_deg: f64,
    pub azimuth_deg: f64,
}

impl Default for SurfaceView {
    fn default() -> Self {
        Self {
            elevation_deg: 30.0,
            azimuth_deg: -60.0,
        }
    }
}

#[derive(Debug, Clone, Copy)]
struct Vertex {
    sx: f64,
    sy: f64,
    depth: f64,
    height: f64,
}

/// Paints the height field of `buf` into `rect`. Regions smaller than
/// 2x2 have no quads and leave the document untouched.
pub fn draw_surface(doc: &mut SvgDoc, rect: Rect, buf: &GrayBuffer, view: SurfaceView) {
    let (w, h) = buf.dimensions();
    if w < 2 || h < 2 {
        return;
    }

    let (min, max) = match buf.min_max() {
        Some(bounds) => bounds,
        None => return,
    };
    let span = (max - min) as f64;

    let xs = sample_indices(w);
    let ys = sample_indices(h);

    let mut grid: Vec<Vec<Vertex>> = Vec::with_capacity(ys.len());
    for &y in &ys {
        let mut row = Vec::with_capacity(xs.len());
        for &x in &xs {
            let nx = x as f64 / (w - 1) as f64 * 2.0 - 1.0;
            let ny = y as f64 / (h - 1) as f64 * 2.0 - 1.0;
            let height = if span > 0.0 {
                (buf.get(x, y) - min) as f64 / span
            } else {
                0.5
            };
            let (sx, sy, depth) = project(nx, ny, height, view);
            row.push(Vertex { sx, sy, depth, height });
        }
        grid.push(row);
    }

    let fit = FitTransform::new(&grid, rect);
    draw_floor(doc, &fit, view);

    // Painter's algorithm: collect quads, then fill from the farthest
    // (smallest depth toward the viewer) to the nearest.
    let mut quads = Vec::with_capacity((ys.len() - 1) * (xs.len() - 1));
    for j in 0..ys.len() - 1 {
        for i in 0..xs.len() - 1 {
            let corners = [
                grid[j][i],
                grid[j][i + 1],
                grid[j + 1][i + 1],
                grid[j + 1][i],
            ];
            let depth = corners.iter().map(|v| v.depth).sum::<f64>() / 4.0;
            let height = corners.iter().map(|v| v.height).sum::<f64>() / 4.0;
            quads.push((depth, height, corners));
        }
    }
    quads.sort_by(|a, b| a.0.total_cmp(&b.0));

    for (_, height, corners) in &quads {
        let points: Vec<(f64, f64)> = corners.iter().map(|v| fit.apply(v.sx, v.sy)).collect();
        let (r, g, b) = ColorMap::Hot.sample(*height);
        let fill = format!("#{r:02x}{g:02x}{b:02x}");
        let edge = format!(
            "#{:02x}{:02x}{:02x}",
            (r as f64 * 0.75) as u8,
            (g as f64 * 0.75) as u8,
            (b as f64 * 0.75) as u8
        );
        doc.polygon_stroked(&points, &fill, &edge, 0.4);
    }
}

/// Screen position and viewer-distance of a normalized point. `nx`/`ny`
/// span [-1, 1] across the region, `nz` is the unit height.
fn project(nx: f64, ny: f64, nz: f64, view: SurfaceView) -> (f64, f64, f64) {
    let (sin_a, cos_a) = view.azimuth_deg.to_radians().sin_cos();
    let (sin_e, cos_e) = view.elevation_deg.to_radians().sin_cos();
    let turned = nx * cos_a + ny * sin_a;
    let sx = -nx * sin_a + ny * cos_a;
    let sy = -turned * sin_e + nz * cos_e;
    let depth = turned * cos_e + nz * sin_e;
    (sx, sy, depth)
}

/// Evenly strided indices covering `0..n`, first and last always included,
/// at most [`MAX_MESH_QUADS`] + 1 entries.
fn sample_indices(n: usize) -> Vec<usize> {
    let stride = ((n - 1 + MAX_MESH_QUADS - 1) / MAX_MESH_QUADS).max(1);
    let mut indices: Vec<usize> = (0..n - 1).step_by(stride).collect();
    indices.push(n - 1);
    indices
}

/// Uniform scale-and-center of projected coordinates into a pixel rect.
struct FitTransform {
    scale: f64,
    mid_sx: f64,
    mid_sy: f64,
    cx: f64,
    cy: f64,
}

impl FitTransform {
    fn new(grid: &[Vec<Vertex>], rect: Rect) -> Self {
        let mut min_x = f64::MAX;
        let mut max_x = f64::MIN;
        let mut min_y = f64::MAX;
        let mut max_y = f64::MIN;
        for row in grid {
            for v in row {
                min_x = min_x.min(v.sx);
                max_x = max_x.max(v.sx);
                min_y = min_y.min(v.sy);
                max_y = max_y.max(v.sy);
            }
        }
        let scale = (rect.w / (max_x - min_x).max(1e-9))
            .min(rect.h / (max_y - min_y).max(1e-9))
            * 0.92;
        Self {
            scale,
            mid_sx: (min_x + max_x) / 2.0,
            mid_sy: (min_y + max_y) / 2.0,
            cx: rect.x + rect.w / 2.0,
            cy: rect.y + rect.h / 2.0,
        }
    }

    fn apply(&self, sx: f64, sy: f64) -> (f64, f64) {
        (
            self.cx + (sx - self.mid_sx) * self.scale,
            self.cy - (sy - self.mid_sy) * self.scale,
        )
    }
}

/// Dashed outline of the zero-height plane, drawn behind the mesh.
fn draw_floor(doc: &mut SvgDoc, fit: &FitTransform, view: SurfaceView) {
    let corners = [(-1.0, -1.0), (1.0, -1.0), (1.0, 1.0), (-1.0, 1.0), (-1.0, -1.0)];
    let points: Vec<(f64, f64)> = corners
        .iter()
        .map(|&(nx, ny)| {
            let (sx, sy, _) = project(nx, ny, 0.0, view);
            fit.apply(sx, sy)
        })
        .collect();
    for pair in points.windows(2) {
        doc.dashed_line(
            pair[0].0, pair[0].1, pair[1].0, pair[1].1, GRID_LINE, 1.0, "4 3",
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_project_head_on_view() {
        // Elevation and azimuth both zero: the x axis points at the
        // viewer, y maps to screen-x and height to screen-y.
        let view = SurfaceView { elevation_deg: 0.0, azimuth_deg: 0.0 };
        let (sx, sy, depth) = project(0.5, -0.25, 0.75, view);
        assert!((sx - -0.25).abs() < 1e-12);
        assert!((sy - 0.75).abs() < 1e-12);
        assert!((depth - 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_project_top_down_view() {
        let view = SurfaceView { elevation_deg: 90.0, azimuth_deg: 0.0 };
        let (_, sy, depth) = project(0.4, 0.0, 0.9, view);
        // Looking straight down, height is all depth and no screen-y.
        assert!((sy - -0.4).abs() < 1e-12);
        assert!((depth - 0.9).abs() < 1e-12);
    }

    #[test]
    fn test_sample_indices_cover_endpoints() {
        let indices = sample_indices(127);
        assert_eq!(indices[0], 0);
        assert_eq!(*indices.last().unwrap(), 126);
        assert!(indices.len() <= MAX_MESH_QUADS + 1);
    }

    #[test]
    fn test_sample_indices_small_axis_keeps_every_pixel() {
        assert_eq!(sample_indices(5), vec![0, 1, 2, 3, 4]);
    }

    #[test]
    fn test_draw_surface_emits_mesh() {
        let buf = GrayBuffer::new(
            vec![0, 64, 128, 64, 128, 192, 128, 192, 255],
            3,
            3,
        );
        let mut doc = SvgDoc::new(400, 300, "#ffffff");
        let rect = Rect { x: 20.0, y: 20.0, w: 360.0, h: 260.0 };
        draw_surface(&mut doc, rect, &buf, SurfaceView::default());
        let svg = doc.finish();
        // 2x2 quads from a 3x3 region.
        assert_eq!(svg.matches("<polygon").count(), 4);
    }

    #[test]
    fn test_draw_surface_skips_degenerate_region() {
        let buf = GrayBuffer::new(vec![7], 1, 1);
        let mut doc = SvgDoc::new(100, 100, "#ffffff");
        let rect = Rect { x: 0.0, y: 0.0, w: 100.0, h: 100.0 };
        draw_surface(&mut doc, rect, &buf, SurfaceView::default());
        assert!(!doc.finish().contains("polygon"));
    }
}

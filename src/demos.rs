//! Plotting capability demos: synthetic-data figures used by the course
//! material to show what the renderer can do.
//!
//! These are the only figures allowed to draw non-deterministic data; the
//! sample points exist to make the chart styles visible, not to carry
//! meaning.

use std::f64::consts::PI;

use rand::Rng;

use crate::error::Error;
use crate::figures::{FigureRenderer, RenderedFigure};
use crate::rendering::chart::{self, AxisMapper, PanelGrid, Rect};
use crate::rendering::colormap::{apply, ColorMap, DEMO_MAPS};
use crate::rendering::svg::{Anchor, SvgDoc};
use crate::rendering::{rgb_to_png, to_base64};
use crate::store::ImageStore;

/// Image the colormap gallery is built from; the gallery is skipped when
/// the store does not have it.
pub const COLORMAP_DEMO_IMAGE: &str = "Fig0219(rose1024).tif";

// Matplotlib single-letter color codes, kept literal so the demos look
// like the plots they teach.
const PLOT_BLUE: &str = "#0000ff";
const PLOT_RED: &str = "#ff0000";
const PLOT_GREEN: &str = "#008000";

/// The three demo figures.
pub struct DemoSet {
    pub subplot_layouts: RenderedFigure,
    /// `None` when [`COLORMAP_DEMO_IMAGE`] is absent.
    pub colormaps: Option<RenderedFigure>,
    pub figure_customization: RenderedFigure,
}

/// Renders all demo figures.
pub fn demo_figures(renderer: &FigureRenderer, store: &ImageStore) -> Result<DemoSet, Error> {
    Ok(DemoSet {
        subplot_layouts: subplot_layouts(renderer)?,
        colormaps: colormap_gallery(renderer, store)?,
        figure_customization: figure_customization(renderer)?,
    })
}

/// Title, frame, and grid for one demo panel; returns the plotting area.
fn demo_panel(doc: &mut SvgDoc, rect: Rect, title: &str) -> Rect {
    let area = chart::draw_panel_title(doc, rect, &[title]);
    let inner = area.inset(40.0, 6.0, 12.0, 24.0);
    chart::draw_axes_frame(doc, inner);
    inner
}

fn format_tick(v: f64) -> String {
    if (v - v.round()).abs() < 1e-9 {
        format!("{v:.0}")
    } else {
        format!("{v:.2}")
    }
}

/// Axis range labels at the corners of the plotting area.
fn range_labels(doc: &mut SvgDoc, mapper: &AxisMapper) {
    let inner = mapper.inner;
    for (v, x) in [(mapper.x0, inner.x), (mapper.x1, inner.x + inner.w)] {
        doc.text(
            x,
            inner.y + inner.h + 14.0,
            9.0,
            Anchor::Middle,
            chart::AXIS_TEXT,
            &format_tick(v),
        );
    }
    for (v, y) in [(mapper.y0, inner.y + inner.h), (mapper.y1, inner.y)] {
        doc.text(
            inner.x - 5.0,
            y + 3.0,
            9.0,
            Anchor::End,
            chart::AXIS_TEXT,
            &format_tick(v),
        );
    }
}

fn draw_legend(doc: &mut SvgDoc, x: f64, y: f64, entries: &[(&str, &str)]) {
    let mut ly = y;
    for (label, color) in entries {
        doc.line(x, ly - 4.0, x + 18.0, ly - 4.0, color, 2.0);
        doc.text(x + 24.0, ly, 10.0, Anchor::Start, chart::INK, label);
        ly += 15.0;
    }
}

fn draw_arrow(doc: &mut SvgDoc, from: (f64, f64), to: (f64, f64), color: &str) {
    doc.line(from.0, from.1, to.0, to.1, color, 1.2);
    let dx = to.0 - from.0;
    let dy = to.1 - from.1;
    let len = (dx * dx + dy * dy).sqrt().max(1e-9);
    let (ux, uy) = (dx / len, dy / len);
    let (hx, hy) = (to.0 - ux * 7.0, to.1 - uy * 7.0);
    doc.polygon(
        &[
            (to.0, to.1),
            (hx - uy * 3.5, hy + ux * 3.5),
            (hx + uy * 3.5, hy - ux * 3.5),
        ],
        color,
        1.0,
    );
}

/// Samples a standard normal deviate with the Box-Muller transform.
fn standard_normal(rng: &mut impl Rng) -> f64 {
    let u1: f64 = rng.gen_range(f64::MIN_POSITIVE..1.0);
    let u2: f64 = rng.gen();
    (-2.0 * u1.ln()).sqrt() * (2.0 * PI * u2).cos()
}

fn curve(mapper: &AxisMapper, n: usize, x0: f64, x1: f64, f: impl Fn(f64) -> f64) -> Vec<(f64, f64)> {
    (0..n)
        .map(|i| {
            let x = x0 + (x1 - x0) * i as f64 / (n - 1) as f64;
            (mapper.x(x), mapper.y(f(x)))
        })
        .collect()
}

/// 2x3 grid of basic chart styles.
fn subplot_layouts(renderer: &FigureRenderer) -> Result<RenderedFigure, Error> {
    let mut rng = rand::thread_rng();
    let mut doc = SvgDoc::new(1680, 960, "#ffffff");
    let grid = PanelGrid::new(1680, 960, 2, 3).with_suptitle_band();
    chart::draw_suptitle(&mut doc, "plt.subplot() - Grid Layouts");

    // Line plot: one sine period.
    let inner = demo_panel(&mut doc, grid.panel(0, 0), "Line Plot");
    let mapper = AxisMapper::new(inner, (0.0, 2.0 * PI), (-1.1, 1.1));
    doc.polyline(&curve(&mapper, 200, 0.0, 2.0 * PI, f64::sin), PLOT_BLUE, 2.0, 1.0);
    range_labels(&mut doc, &mapper);

    // Scatter: 50 random points colored through viridis.
    let inner = demo_panel(&mut doc, grid.panel(0, 1), "Scatter");
    let mapper = AxisMapper::new(inner, (0.0, 1.0), (0.0, 1.0));
    for _ in 0..50 {
        let (x, y, c): (f64, f64, f64) = (rng.gen(), rng.gen(), rng.gen());
        let (r, g, b) = ColorMap::Viridis.sample(c);
        doc.circle(mapper.x(x), mapper.y(y), 5.5, &format!("#{r:02x}{g:02x}{b:02x}"), 0.7);
    }
    range_labels(&mut doc, &mapper);

    // Bar chart: four labeled categories.
    let inner = demo_panel(&mut doc, grid.panel(0, 2), "Bar Chart");
    let mapper = AxisMapper::new(inner, (0.0, 4.0), (0.0, 7.7));
    let bars = [
        ("A", 3.0, chart::RED),
        ("B", 7.0, chart::BLUE),
        ("C", 2.0, chart::GREEN),
        ("D", 5.0, chart::ORANGE),
    ];
    for (i, (label, value, color)) in bars.iter().enumerate() {
        let x0 = mapper.x(i as f64 + 0.15);
        let x1 = mapper.x(i as f64 + 0.85);
        let top = mapper.y(*value);
        let base = mapper.y(0.0);
        doc.rect(x0, top, x1 - x0, base - top, color);
        doc.text(
            (x0 + x1) / 2.0,
            base + 14.0,
            9.0,
            Anchor::Middle,
            chart::AXIS_TEXT,
            label,
        );
    }

    // Histogram: 500 normal deviates in 30 bins.
    let inner = demo_panel(&mut doc, grid.panel(1, 0), "Histogram");
    let samples: Vec<f64> = (0..500).map(|_| standard_normal(&mut rng)).collect();
    let lo = samples.iter().copied().fold(f64::MAX, f64::min);
    let hi = samples.iter().copied().fold(f64::MIN, f64::max);
    let mut counts = [0u32; 30];
    for &s in &samples {
        let bin = (((s - lo) / (hi - lo) * 30.0) as usize).min(29);
        counts[bin] += 1;
    }
    let peak = *counts.iter().max().unwrap_or(&1) as f64;
    let mapper = AxisMapper::new(inner, (lo, hi), (0.0, peak * 1.08));
    let bin_w = (hi - lo) / 30.0;
    for (i, &count) in counts.iter().enumerate() {
        if count == 0 {
            continue;
        }
        let x0 = mapper.x(lo + i as f64 * bin_w);
        let x1 = mapper.x(lo + (i + 1) as f64 * bin_w);
        let top = mapper.y(count as f64);
        let base = mapper.y(0.0);
        doc.polygon(&[(x0, top), (x1, top), (x1, base), (x0, base)], chart::PURPLE, 0.7);
        doc.rect_outline(x0, top, x1 - x0, base - top, "#ffffff", 1.0);
    }
    range_labels(&mut doc, &mapper);

    // Filled plot: the band between sine and cosine.
    let inner = demo_panel(&mut doc, grid.panel(1, 1), "Filled Plot");
    let mapper = AxisMapper::new(inner, (0.0, 2.0 * PI), (-1.1, 1.1));
    let sine = curve(&mapper, 200, 0.0, 2.0 * PI, f64::sin);
    let cosine = curve(&mapper, 200, 0.0, 2.0 * PI, f64::cos);
    let mut band = sine.clone();
    band.extend(cosine.iter().rev());
    doc.polygon(&band, chart::RED, 0.3);
    doc.polyline(&sine, PLOT_RED, 1.5, 1.0);
    doc.polyline(&cosine, PLOT_BLUE, 1.5, 1.0);
    range_labels(&mut doc, &mapper);

    // Step plot: ten random integers, steps centered on each index.
    let inner = demo_panel(&mut doc, grid.panel(1, 2), "Step Plot");
    let mapper = AxisMapper::new(inner, (-0.5, 9.5), (0.0, 10.0));
    let mut steps = Vec::with_capacity(20);
    for i in 0..10 {
        let v: u32 = rng.gen_range(1..10);
        steps.push((mapper.x(i as f64 - 0.5), mapper.y(v as f64)));
        steps.push((mapper.x(i as f64 + 0.5), mapper.y(v as f64)));
    }
    doc.polyline(&steps, chart::TEAL, 2.0, 1.0);
    range_labels(&mut doc, &mapper);

    renderer.finish(doc)
}

/// The same image under every colormap, each with its own colorbar.
fn colormap_gallery(
    renderer: &FigureRenderer,
    store: &ImageStore,
) -> Result<Option<RenderedFigure>, Error> {
    let buf = match store.load(COLORMAP_DEMO_IMAGE) {
        Ok(buf) => buf,
        Err(Error::NotFound(_)) => {
            tracing::debug!(filename = COLORMAP_DEMO_IMAGE, "gallery image missing, skipping");
            return Ok(None);
        }
        Err(e) => return Err(e),
    };

    let mut doc = SvgDoc::new(1680, 1080, "#ffffff");
    let grid = PanelGrid::new(1680, 1080, 2, 3).with_suptitle_band();
    chart::draw_suptitle(&mut doc, "plt.imshow() with Different Colormaps");

    let (vmin, vmax) = buf.min_max().unwrap_or((0, 0));
    for (i, &map) in DEMO_MAPS.iter().enumerate() {
        let rect = grid.panel(i / 3, i % 3);
        let title = format!("cmap='{}'", map.name());
        let area = chart::draw_panel_title(&mut doc, rect, &[&title]);
        let rgb = apply(&buf, map);
        let png = rgb_to_png(&rgb, buf.width() as u32, buf.height() as u32)?;
        chart::draw_image_into(
            &mut doc,
            area.inset(0.0, 0.0, 48.0, 0.0),
            &to_base64(&png),
            buf.width(),
            buf.height(),
        );
        let bar = Rect {
            x: area.x + area.w - 34.0,
            y: area.y + 8.0,
            w: 14.0,
            h: area.h - 16.0,
        };
        chart::draw_colorbar(&mut doc, bar, map, vmin, vmax);
    }

    renderer.finish(doc).map(Some)
}

/// Annotated trig plot beside a polar rose.
fn figure_customization(renderer: &FigureRenderer) -> Result<RenderedFigure, Error> {
    let mut doc = SvgDoc::new(1440, 600, "#ffffff");
    let grid = PanelGrid::new(1440, 600, 1, 2).with_suptitle_band();
    chart::draw_suptitle(&mut doc, "plt.figure() Customization & Annotations");

    // Left: sin/cos with reference lines, an annotation, and a legend.
    let area = chart::draw_panel_title(&mut doc, grid.panel(0, 0), &["Trigonometric Functions"]);
    let inner = area.inset(46.0, 6.0, 12.0, 36.0);
    chart::draw_axes_frame(&mut doc, inner);
    let mapper = AxisMapper::new(inner, (0.0, 4.0 * PI), (-1.5, 1.5));

    doc.line(
        mapper.x(0.0),
        mapper.y(0.0),
        mapper.x(4.0 * PI),
        mapper.y(0.0),
        "#000000",
        0.5,
    );
    doc.dashed_line(
        mapper.x(PI),
        inner.y,
        mapper.x(PI),
        inner.y + inner.h,
        "#808080",
        1.0,
        "2 3",
    );
    doc.polyline(&curve(&mapper, 300, 0.0, 4.0 * PI, f64::sin), PLOT_BLUE, 2.0, 1.0);
    doc.dashed_polyline(&curve(&mapper, 300, 0.0, 4.0 * PI, f64::cos), PLOT_RED, 2.0, "6 4");

    let text_at = (mapper.x(PI / 2.0 + 1.0), mapper.y(1.3));
    doc.text(text_at.0, text_at.1, 10.0, Anchor::Start, chart::RED, "Peak");
    draw_arrow(
        &mut doc,
        (text_at.0 - 4.0, text_at.1 + 3.0),
        (mapper.x(PI / 2.0), mapper.y(1.0)),
        chart::RED,
    );

    doc.text(
        inner.x + inner.w / 2.0,
        inner.y + inner.h + 30.0,
        11.0,
        Anchor::Middle,
        chart::AXIS_TEXT,
        "Time (radians)",
    );
    doc.text_vertical(inner.x - 36.0, inner.y + inner.h / 2.0, 11.0, chart::AXIS_TEXT, "Amplitude");
    draw_legend(
        &mut doc,
        inner.x + inner.w - 96.0,
        inner.y + 16.0,
        &[("sin(t)", PLOT_BLUE), ("cos(t)", PLOT_RED)],
    );
    range_labels(&mut doc, &mapper);

    // Right: polar rose r = 1 + cos(3 theta).
    let area = chart::draw_panel_title(
        &mut doc,
        grid.panel(0, 1),
        &["Polar Plot: r = 1 + cos(3\u{03b8})"],
    );
    let cx = area.x + area.w / 2.0;
    let cy = area.y + area.h / 2.0;
    let scale = (area.w.min(area.h) / 2.0) * 0.82 / 2.0;
    for ring in [0.5, 1.0, 1.5, 2.0] {
        doc.circle_outline(cx, cy, ring * scale, chart::GRID_LINE, 1.0);
    }
    for spoke in 0..8 {
        let angle = spoke as f64 * PI / 4.0;
        doc.line(
            cx,
            cy,
            cx + 2.0 * scale * angle.cos(),
            cy - 2.0 * scale * angle.sin(),
            chart::GRID_LINE,
            1.0,
        );
    }
    for (label, angle) in [("0\u{00b0}", 0.0), ("90\u{00b0}", PI / 2.0), ("180\u{00b0}", PI), ("270\u{00b0}", 1.5 * PI)] {
        doc.text(
            cx + 2.0 * scale * angle.cos() * 1.09,
            cy - 2.0 * scale * angle.sin() * 1.09 + 3.0,
            9.0,
            Anchor::Middle,
            chart::AXIS_TEXT,
            label,
        );
    }
    let rose: Vec<(f64, f64)> = (0..100)
        .map(|i| {
            let theta = 2.0 * PI * i as f64 / 99.0;
            let r = (1.0 + (3.0 * theta).cos()) * scale;
            (cx + r * theta.cos(), cy - r * theta.sin())
        })
        .collect();
    doc.polygon(&rose, PLOT_GREEN, 0.2);
    doc.polyline(&rose, PLOT_GREEN, 2.0, 1.0);

    renderer.finish(doc)
}

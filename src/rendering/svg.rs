//! Minimal SVG document builder for figure composition.
//!
//! Figures are assembled as SVG text and rasterized afterwards. The builder
//! keeps coordinates in pixels (one SVG unit = one output pixel) and knows
//! only the handful of elements the figures use: rects, lines, polylines,
//! polygons, text, and embedded raster images.

use std::fmt::Write;

/// Escapes the characters XML treats specially in text content and
/// attribute values.
pub fn escape_xml(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(c),
        }
    }
    out
}

/// Horizontal anchor for [`SvgDoc::text`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Anchor {
    Start,
    Middle,
    End,
}

impl Anchor {
    fn as_svg(self) -> &'static str {
        match self {
            Anchor::Start => "start",
            Anchor::Middle => "middle",
            Anchor::End => "end",
        }
    }
}

/// An SVG document under construction.
#[derive(Debug)]
pub struct SvgDoc {
    width: u32,
    height: u32,
    body: String,
}

impl SvgDoc {
    /// Starts a document of the given pixel size filled with `background`.
    pub fn new(width: u32, height: u32, background: &str) -> Self {
        let mut doc = Self {
            width,
            height,
            body: String::new(),
        };
        let _ = write!(
            doc.body,
            r##"<rect x="0" y="0" width="{width}" height="{height}" fill="{background}"/>"##
        );
        doc
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn rect(&mut self, x: f64, y: f64, w: f64, h: f64, fill: &str) {
        let _ = write!(
            self.body,
            r##"<rect x="{x:.1}" y="{y:.1}" width="{w:.1}" height="{h:.1}" fill="{fill}"/>"##
        );
    }

    pub fn rect_outline(&mut self, x: f64, y: f64, w: f64, h: f64, stroke: &str, stroke_width: f64) {
        let _ = write!(
            self.body,
            r##"<rect x="{x:.1}" y="{y:.1}" width="{w:.1}" height="{h:.1}" fill="none" stroke="{stroke}" stroke-width="{stroke_width}"/>"##
        );
    }

    pub fn line(&mut self, x1: f64, y1: f64, x2: f64, y2: f64, stroke: &str, stroke_width: f64) {
        let _ = write!(
            self.body,
            r##"<line x1="{x1:.1}" y1="{y1:.1}" x2="{x2:.1}" y2="{y2:.1}" stroke="{stroke}" stroke-width="{stroke_width}"/>"##
        );
    }

    pub fn dashed_line(
        &mut self,
        x1: f64,
        y1: f64,
        x2: f64,
        y2: f64,
        stroke: &str,
        stroke_width: f64,
        dash: &str,
    ) {
        let _ = write!(
            self.body,
            r##"<line x1="{x1:.1}" y1="{y1:.1}" x2="{x2:.1}" y2="{y2:.1}" stroke="{stroke}" stroke-width="{stroke_width}" stroke-dasharray="{dash}"/>"##
        );
    }

    /// Open polyline through `points`, stroked and unfilled.
    pub fn polyline(&mut self, points: &[(f64, f64)], stroke: &str, stroke_width: f64, opacity: f64) {
        if points.is_empty() {
            return;
        }
        let _ = write!(
            self.body,
            r##"<polyline points="{}" fill="none" stroke="{stroke}" stroke-width="{stroke_width}" opacity="{opacity}"/>"##,
            join_points(points)
        );
    }

    /// Open polyline with a dash pattern, e.g. `"6 4"`.
    pub fn dashed_polyline(
        &mut self,
        points: &[(f64, f64)],
        stroke: &str,
        stroke_width: f64,
        dash: &str,
    ) {
        if points.is_empty() {
            return;
        }
        let _ = write!(
            self.body,
            r##"<polyline points="{}" fill="none" stroke="{stroke}" stroke-width="{stroke_width}" stroke-dasharray="{dash}"/>"##,
            join_points(points)
        );
    }

    /// Closed filled polygon through `points`.
    pub fn polygon(&mut self, points: &[(f64, f64)], fill: &str, opacity: f64) {
        if points.is_empty() {
            return;
        }
        let _ = write!(
            self.body,
            r##"<polygon points="{}" fill="{fill}" opacity="{opacity}"/>"##,
            join_points(points)
        );
    }

    /// Closed polygon with both fill and stroke, used by the surface mesh.
    pub fn polygon_stroked(
        &mut self,
        points: &[(f64, f64)],
        fill: &str,
        stroke: &str,
        stroke_width: f64,
    ) {
        if points.is_empty() {
            return;
        }
        let _ = write!(
            self.body,
            r##"<polygon points="{}" fill="{fill}" stroke="{stroke}" stroke-width="{stroke_width}"/>"##,
            join_points(points)
        );
    }

    pub fn circle(&mut self, cx: f64, cy: f64, r: f64, fill: &str, opacity: f64) {
        let _ = write!(
            self.body,
            r##"<circle cx="{cx:.1}" cy="{cy:.1}" r="{r:.1}" fill="{fill}" opacity="{opacity}"/>"##
        );
    }

    pub fn circle_outline(&mut self, cx: f64, cy: f64, r: f64, stroke: &str, stroke_width: f64) {
        let _ = write!(
            self.body,
            r##"<circle cx="{cx:.1}" cy="{cy:.1}" r="{r:.1}" fill="none" stroke="{stroke}" stroke-width="{stroke_width}"/>"##
        );
    }

    pub fn text(&mut self, x: f64, y: f64, size: f64, anchor: Anchor, fill: &str, content: &str) {
        let _ = write!(
            self.body,
            r##"<text x="{x:.1}" y="{y:.1}" font-family="DejaVu Sans, sans-serif" font-size="{size:.1}" text-anchor="{}" fill="{fill}">{}</text>"##,
            anchor.as_svg(),
            escape_xml(content)
        );
    }

    pub fn text_bold(&mut self, x: f64, y: f64, size: f64, anchor: Anchor, fill: &str, content: &str) {
        let _ = write!(
            self.body,
            r##"<text x="{x:.1}" y="{y:.1}" font-family="DejaVu Sans, sans-serif" font-size="{size:.1}" font-weight="bold" text-anchor="{}" fill="{fill}">{}</text>"##,
            anchor.as_svg(),
            escape_xml(content)
        );
    }

    /// Text rotated 90 degrees counter-clockwise around its anchor point,
    /// for y-axis labels.
    pub fn text_vertical(&mut self, x: f64, y: f64, size: f64, fill: &str, content: &str) {
        let _ = write!(
            self.body,
            r##"<text x="{x:.1}" y="{y:.1}" font-family="DejaVu Sans, sans-serif" font-size="{size:.1}" text-anchor="middle" fill="{fill}" transform="rotate(-90, {x:.1}, {y:.1})">{}</text>"##,
            escape_xml(content)
        );
    }

    /// Embeds a PNG (already base64-encoded) stretched to the given box.
    pub fn image_png_base64(&mut self, x: f64, y: f64, w: f64, h: f64, base64_png: &str) {
        let _ = write!(
            self.body,
            r##"<image x="{x:.1}" y="{y:.1}" width="{w:.1}" height="{h:.1}" preserveAspectRatio="none" href="data:image/png;base64,{base64_png}"/>"##
        );
    }

    /// Serializes the document.
    pub fn finish(self) -> String {
        format!(
            r##"<svg xmlns="http://www.w3.org/2000/svg" width="{}" height="{}" viewBox="0 0 {} {}">{}</svg>"##,
            self.width, self.height, self.width, self.height, self.body
        )
    }
}

fn join_points(points: &[(f64, f64)]) -> String {
    let mut out = String::with_capacity(points.len() * 12);
    for (i, (x, y)) in points.iter().enumerate() {
        if i > 0 {
            out.push(' ');
        }
        let _ = write!(out, "{x:.1},{y:.1}");
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_xml() {
        assert_eq!(escape_xml("a < b & c > 'd'"), "a &lt; b &amp; c &gt; &apos;d&apos;");
        assert_eq!(escape_xml("plain"), "plain");
    }

    #[test]
    fn test_document_envelope() {
        let doc = SvgDoc::new(120, 80, "white");
        let svg = doc.finish();
        assert!(svg.starts_with("<svg "));
        assert!(svg.ends_with("</svg>"));
        assert!(svg.contains(r#"width="120""#));
        assert!(svg.contains(r#"viewBox="0 0 120 80""#));
    }

    #[test]
    fn test_text_is_escaped() {
        let mut doc = SvgDoc::new(10, 10, "white");
        doc.text(0.0, 0.0, 10.0, Anchor::Start, "#000", "cmap='<hot>'");
        let svg = doc.finish();
        assert!(svg.contains("cmap=&apos;&lt;hot&gt;&apos;"));
        assert!(!svg.contains("<hot>"));
    }

    #[test]
    fn test_polyline_points_format() {
        let mut doc = SvgDoc::new(10, 10, "white");
        doc.polyline(&[(0.0, 1.0), (2.5, 3.25)], "#000", 1.0, 1.0);
        let svg = doc.finish();
        assert!(svg.contains(r#"points="0.0,1.0 2.5,3.2""#));
    }
}

//! Color maps for heatmap panels and the colormap demo gallery.
//!
//! `Gray` and `Hot` are the two maps the analysis figures rely on; the rest
//! exist for the side-by-side colormap demonstration. All maps sample a
//! piecewise-linear ramp, which is visually close enough to the reference
//! palettes for teaching purposes.

use luma_ops::GrayBuffer;

/// Available color maps.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorMap {
    Gray,
    Hot,
    Viridis,
    Plasma,
    Inferno,
    CoolWarm,
}

/// The gallery order used by the colormap demo figure.
pub const DEMO_MAPS: [ColorMap; 6] = [
    ColorMap::Gray,
    ColorMap::Hot,
    ColorMap::Viridis,
    ColorMap::Plasma,
    ColorMap::Inferno,
    ColorMap::CoolWarm,
];

/// Anchor colors for the perceptual maps, evenly spaced over [0, 1].
const VIRIDIS: [(u8, u8, u8); 5] = [
    (0x44, 0x01, 0x54),
    (0x3b, 0x52, 0x8b),
    (0x21, 0x91, 0x8c),
    (0x5e, 0xc9, 0x62),
    (0xfd, 0xe7, 0x25),
];
const PLASMA: [(u8, u8, u8); 5] = [
    (0x0d, 0x08, 0x87),
    (0x7e, 0x03, 0xa8),
    (0xcc, 0x47, 0x78),
    (0xf8, 0x95, 0x40),
    (0xf0, 0xf9, 0x21),
];
const INFERNO: [(u8, u8, u8); 5] = [
    (0x00, 0x00, 0x04),
    (0x57, 0x10, 0x6e),
    (0xbc, 0x37, 0x54),
    (0xf9, 0x8e, 0x09),
    (0xfc, 0xff, 0xa4),
];
const COOLWARM: [(u8, u8, u8); 3] = [
    (0x3b, 0x4c, 0xc0),
    (0xdd, 0xdd, 0xdd),
    (0xb4, 0x04, 0x26),
];

impl ColorMap {
    /// Lowercase name as shown in panel titles.
    pub fn name(self) -> &'static str {
        match self {
            ColorMap::Gray => "gray",
            ColorMap::Hot => "hot",
            ColorMap::Viridis => "viridis",
            ColorMap::Plasma => "plasma",
            ColorMap::Inferno => "inferno",
            ColorMap::CoolWarm => "coolwarm",
        }
    }

    /// Samples the map at `t` in [0, 1]; out-of-range values are clamped.
    pub fn sample(self, t: f64) -> (u8, u8, u8) {
        let t = t.clamp(0.0, 1.0);
        match self {
            ColorMap::Gray => {
                let v = (t * 255.0).round() as u8;
                (v, v, v)
            }
            // Classic thirds ramp: black -> red -> yellow -> white.
            ColorMap::Hot => {
                let r = (3.0 * t).clamp(0.0, 1.0);
                let g = (3.0 * t - 1.0).clamp(0.0, 1.0);
                let b = (3.0 * t - 2.0).clamp(0.0, 1.0);
                (
                    (r * 255.0).round() as u8,
                    (g * 255.0).round() as u8,
                    (b * 255.0).round() as u8,
                )
            }
            ColorMap::Viridis => sample_anchors(&VIRIDIS, t),
            ColorMap::Plasma => sample_anchors(&PLASMA, t),
            ColorMap::Inferno => sample_anchors(&INFERNO, t),
            ColorMap::CoolWarm => sample_anchors(&COOLWARM, t),
        }
    }
}

fn sample_anchors(anchors: &[(u8, u8, u8)], t: f64) -> (u8, u8, u8) {
    let segments = anchors.len() - 1;
    let scaled = t * segments as f64;
    let idx = (scaled.floor() as usize).min(segments - 1);
    let frac = scaled - idx as f64;
    let (r0, g0, b0) = anchors[idx];
    let (r1, g1, b1) = anchors[idx + 1];
    let lerp = |a: u8, b: u8| (a as f64 + (b as f64 - a as f64) * frac).round() as u8;
    (lerp(r0, r1), lerp(g0, g1), lerp(b0, b1))
}

/// Maps every intensity through the color map, producing packed RGB bytes.
pub fn apply(buf: &GrayBuffer, map: ColorMap) -> Vec<u8> {
    let mut rgb = Vec::with_capacity(buf.len() * 3);
    for &v in buf.data() {
        let (r, g, b) = map.sample(v as f64 / 255.0);
        rgb.push(r);
        rgb.push(g);
        rgb.push(b);
    }
    rgb
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gray_endpoints() {
        assert_eq!(ColorMap::Gray.sample(0.0), (0, 0, 0));
        assert_eq!(ColorMap::Gray.sample(1.0), (255, 255, 255));
        assert_eq!(ColorMap::Gray.sample(0.5), (128, 128, 128));
    }

    #[test]
    fn test_hot_ramp_stages() {
        assert_eq!(ColorMap::Hot.sample(0.0), (0, 0, 0));
        // One third in: full red, no green yet.
        let (r, g, b) = ColorMap::Hot.sample(1.0 / 3.0);
        assert_eq!((r, g, b), (255, 0, 0));
        // Two thirds in: yellow.
        let (r, g, b) = ColorMap::Hot.sample(2.0 / 3.0);
        assert_eq!((r, g), (255, 255));
        assert_eq!(b, 0);
        assert_eq!(ColorMap::Hot.sample(1.0), (255, 255, 255));
    }

    #[test]
    fn test_anchor_maps_hit_their_endpoints() {
        assert_eq!(ColorMap::Viridis.sample(0.0), (0x44, 0x01, 0x54));
        assert_eq!(ColorMap::Viridis.sample(1.0), (0xfd, 0xe7, 0x25));
        assert_eq!(ColorMap::CoolWarm.sample(0.5), (0xdd, 0xdd, 0xdd));
    }

    #[test]
    fn test_sample_clamps_out_of_range() {
        assert_eq!(ColorMap::Gray.sample(-1.0), (0, 0, 0));
        assert_eq!(ColorMap::Gray.sample(2.0), (255, 255, 255));
    }

    #[test]
    fn test_apply_packs_rgb() {
        let buf = GrayBuffer::new(vec![0, 255], 2, 1);
        let rgb = apply(&buf, ColorMap::Gray);
        assert_eq!(rgb, vec![0, 0, 0, 255, 255, 255]);
    }
}

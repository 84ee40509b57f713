//! Spatial difference pipeline: load two images, reconcile shapes,
//! subtract, enhance, and summarize.

use luma_ops::{absolute_difference, normalize_to_full_range, summarize, GrayBuffer};
use serde::Serialize;

use crate::convert::resize_buffer;
use crate::error::Error;
use crate::rendering::gray_to_base64_png;
use crate::store::ImageStore;

/// Image shapes before reconciliation, serialized as `[height, width]`
/// pairs to match the row-major convention of the reports.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct ShapePair {
    pub image1: [usize; 2],
    pub image2: [usize; 2],
}

/// Scalar summary of a difference image plus the shape bookkeeping of the
/// run that produced it. `resized` and `original_shapes` are always
/// present, whether or not a resize happened.
#[derive(Debug, Clone, Serialize)]
pub struct DifferenceStats {
    pub mean_difference: f64,
    pub max_difference: u8,
    pub min_difference: u8,
    pub std_difference: f64,
    pub nonzero_pixels: u64,
    pub total_pixels: u64,
    pub nonzero_percentage: f64,
    pub resized: bool,
    pub original_shapes: ShapePair,
    pub final_shape: [usize; 2],
}

/// In-memory result of the difference pipeline, kept as raw buffers so
/// figure rendering and narration can reuse them without re-decoding.
#[derive(Debug, Clone)]
pub struct DifferenceOutcome {
    pub image1: GrayBuffer,
    /// Second image on image1's pixel grid.
    pub image2: GrayBuffer,
    pub difference: GrayBuffer,
    pub enhanced: GrayBuffer,
    pub stats: DifferenceStats,
}

/// Transport form: every image base64-PNG encoded.
#[derive(Debug, Clone, Serialize)]
pub struct DifferenceReport {
    pub image1: String,
    pub image2: String,
    pub difference: String,
    pub difference_enhanced: String,
    pub stats: DifferenceStats,
}

fn shape_of(buf: &GrayBuffer) -> [usize; 2] {
    [buf.height(), buf.width()]
}

/// Computes `|image1 - image2|` after bringing image2 onto image1's grid.
///
/// The difference keeps image1's shape. Enhancement stretches the
/// difference to the full [0, 255] range unless it is entirely zero.
pub fn difference_pipeline(image1: &GrayBuffer, image2: &GrayBuffer) -> Result<DifferenceOutcome, Error> {
    let original_shapes = ShapePair {
        image1: shape_of(image1),
        image2: shape_of(image2),
    };

    let resized = image2.dimensions() != image1.dimensions();
    let image2 = if resized {
        tracing::debug!(
            from = ?image2.dimensions(),
            to = ?image1.dimensions(),
            "resizing second image onto first image's grid"
        );
        resize_buffer(image2, image1.width(), image1.height())
    } else {
        image2.clone()
    };

    let difference = absolute_difference(image1, &image2)?;
    let enhanced = match difference.min_max() {
        Some((_, max)) if max > 0 => normalize_to_full_range(&difference),
        _ => difference.clone(),
    };

    let summary = summarize(&difference);
    let stats = DifferenceStats {
        mean_difference: summary.mean,
        max_difference: summary.max,
        min_difference: summary.min,
        std_difference: summary.std_dev,
        nonzero_pixels: summary.nonzero_count,
        total_pixels: summary.total_count,
        nonzero_percentage: summary.nonzero_percentage,
        resized,
        original_shapes,
        final_shape: shape_of(image1),
    };

    Ok(DifferenceOutcome {
        image1: image1.clone(),
        image2,
        difference,
        enhanced,
        stats,
    })
}

/// Loads both images from the store and runs the pipeline.
pub fn difference_from_store(
    store: &ImageStore,
    filename1: &str,
    filename2: &str,
) -> Result<DifferenceOutcome, Error> {
    let image1 = store.load(filename1)?;
    let image2 = store.load(filename2)?;
    difference_pipeline(&image1, &image2)
}

impl DifferenceReport {
    pub fn from_outcome(outcome: &DifferenceOutcome) -> Result<Self, Error> {
        Ok(Self {
            image1: gray_to_base64_png(&outcome.image1)?,
            image2: gray_to_base64_png(&outcome.image2)?,
            difference: gray_to_base64_png(&outcome.difference)?,
            difference_enhanced: gray_to_base64_png(&outcome.enhanced)?,
            stats: outcome.stats.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn buf(data: Vec<u8>, w: usize, h: usize) -> GrayBuffer {
        GrayBuffer::new(data, w, h)
    }

    #[test]
    fn test_identical_images_yield_zero_difference() {
        let a = buf(vec![10, 20, 30, 40], 2, 2);
        let outcome = difference_pipeline(&a, &a).unwrap();
        assert!(outcome.difference.data().iter().all(|&v| v == 0));
        // An all-zero difference is passed through, not stretched.
        assert_eq!(outcome.enhanced.data(), outcome.difference.data());
        assert!(!outcome.stats.resized);
        assert_eq!(outcome.stats.mean_difference, 0.0);
        assert_eq!(outcome.stats.nonzero_percentage, 0.0);
        assert_eq!(outcome.stats.final_shape, [2, 2]);
    }

    #[test]
    fn test_known_difference_and_enhancement() {
        let a = buf(vec![10, 20, 30, 40], 2, 2);
        let b = buf(vec![0, 40, 10, 60], 2, 2);
        let outcome = difference_pipeline(&a, &b).unwrap();
        assert_eq!(outcome.difference.data(), &[10, 20, 20, 20]);
        // Stretch maps min 10 -> 0 and max 20 -> 255.
        assert_eq!(outcome.enhanced.data(), &[0, 255, 255, 255]);
        assert_eq!(outcome.stats.max_difference, 20);
        assert_eq!(outcome.stats.min_difference, 10);
        assert_eq!(outcome.stats.mean_difference, 17.5);
        assert_eq!(outcome.stats.nonzero_pixels, 4);
        assert_eq!(outcome.stats.nonzero_percentage, 100.0);
    }

    #[test]
    fn test_mismatched_shapes_resize_second_image() {
        let a = buf(vec![50; 16], 4, 4);
        let b = buf(vec![100; 4], 2, 2);
        let outcome = difference_pipeline(&a, &b).unwrap();
        assert!(outcome.stats.resized);
        assert_eq!(outcome.image2.dimensions(), (4, 4));
        assert_eq!(outcome.stats.original_shapes.image1, [4, 4]);
        assert_eq!(outcome.stats.original_shapes.image2, [2, 2]);
        assert_eq!(outcome.stats.final_shape, [4, 4]);
        // Constant images stay constant under resampling.
        assert!(outcome.difference.data().iter().all(|&v| v == 50));
    }

    #[test]
    fn test_report_serializes_with_transport_keys() {
        let a = buf(vec![0, 255], 2, 1);
        let b = buf(vec![255, 0], 2, 1);
        let outcome = difference_pipeline(&a, &b).unwrap();
        let report = DifferenceReport::from_outcome(&outcome).unwrap();
        let value = serde_json::to_value(&report).unwrap();
        assert!(value["image1"].is_string());
        assert!(value["difference_enhanced"].is_string());
        assert_eq!(value["stats"]["mean_difference"], 255.0);
        assert_eq!(value["stats"]["resized"], false);
        assert_eq!(
            value["stats"]["original_shapes"]["image1"],
            serde_json::json!([1, 2])
        );
    }
}

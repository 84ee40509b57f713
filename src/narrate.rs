//! Step-by-step narration of the difference pipeline for the teaching view.
//!
//! One call produces exactly six ordered steps, each pairing a fixed
//! explanation and an illustrative code snippet with a typed data snapshot
//! of what the pipeline actually did. The snippets are documentation
//! content; nothing evaluates them.

use luma_ops::{region_extract, GrayBuffer};
use serde::Serialize;

use crate::difference::{difference_pipeline, DifferenceStats, ShapePair};
use crate::error::Error;
use crate::rendering::gray_to_base64_png;
use crate::store::ImageStore;

/// One narrated pipeline step.
#[derive(Debug, Clone, Serialize)]
pub struct PipelineStep {
    pub step_number: usize,
    pub title: String,
    pub explanation: String,
    pub code: String,
    pub data: StepData,
}

/// On-disk metadata of one input file.
#[derive(Debug, Clone, Serialize)]
pub struct FileInfo {
    pub filename: String,
    pub size_bytes: u64,
    pub size_kb: f64,
}

/// Decoded-array metadata of one input.
#[derive(Debug, Clone, Serialize)]
pub struct ArrayInfo {
    /// `[height, width]`.
    pub shape: [usize; 2],
    pub element_type: &'static str,
    pub min: u8,
    pub max: u8,
    /// Up-to-5x5 window around the image center.
    pub center_sample: Vec<Vec<u8>>,
}

/// Typed data snapshot carried by each step, tagged by `kind`.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum StepData {
    FileMeta {
        image1: FileInfo,
        image2: FileInfo,
    },
    ArrayMeta {
        image1: ArrayInfo,
        image2: ArrayInfo,
    },
    ResizeDecision {
        resized: bool,
        original_shapes: ShapePair,
        final_shape: [usize; 2],
    },
    Difference {
        image1_sample: Vec<Vec<u8>>,
        image2_sample: Vec<Vec<u8>>,
        difference_sample: Vec<Vec<u8>>,
    },
    Statistics {
        stats: DifferenceStats,
    },
    Normalized {
        before_range: [u8; 2],
        after_range: [u8; 2],
        difference_image: String,
        enhanced_image: String,
    },
}

fn center_sample(buf: &GrayBuffer) -> Vec<Vec<u8>> {
    region_extract(buf, buf.width() / 2, buf.height() / 2, 2).grid
}

fn array_info(buf: &GrayBuffer) -> ArrayInfo {
    let (min, max) = buf.min_max().unwrap_or((0, 0));
    ArrayInfo {
        shape: [buf.height(), buf.width()],
        element_type: "u8",
        min,
        max,
        center_sample: center_sample(buf),
    }
}

fn range_of(buf: &GrayBuffer) -> [u8; 2] {
    let (min, max) = buf.min_max().unwrap_or((0, 0));
    [min, max]
}

/// Runs the difference pipeline on `filename1`/`filename2` and narrates it
/// as six fixed steps.
pub fn narrate(
    store: &ImageStore,
    filename1: &str,
    filename2: &str,
) -> Result<Vec<PipelineStep>, Error> {
    let file1 = FileInfo {
        filename: filename1.to_string(),
        size_bytes: store.file_size_bytes(filename1)?,
        size_kb: store.file_size_kb(filename1)?,
    };
    let file2 = FileInfo {
        filename: filename2.to_string(),
        size_bytes: store.file_size_bytes(filename2)?,
        size_kb: store.file_size_kb(filename2)?,
    };

    let image1 = store.load(filename1)?;
    let image2 = store.load(filename2)?;
    let outcome = difference_pipeline(&image1, &image2)?;

    let steps = vec![
        PipelineStep {
            step_number: 1,
            title: "Load Images".to_string(),
            explanation: "Both files are read from the image directory. At this point \
                          they are just bytes on disk; nothing is decoded yet."
                .to_string(),
            code: format!(
                "let image1 = store.load(\"{filename1}\")?;\nlet image2 = store.load(\"{filename2}\")?;"
            ),
            data: StepData::FileMeta {
                image1: file1,
                image2: file2,
            },
        },
        PipelineStep {
            step_number: 2,
            title: "Decode to Arrays".to_string(),
            explanation: "Each file decodes into a row-major array of 8-bit intensity \
                          samples, one per pixel, with 0 black and 255 white. The 5x5 \
                          window shows the raw values at the image center."
                .to_string(),
            code: "let buf: GrayBuffer = buffer_from_gray(&decoded.to_luma8());".to_string(),
            data: StepData::ArrayMeta {
                image1: array_info(&image1),
                image2: array_info(&image2),
            },
        },
        PipelineStep {
            step_number: 3,
            title: "Reconcile Shapes".to_string(),
            explanation: "Pixel-wise subtraction needs both arrays on the same grid. \
                          When shapes differ, the second image is resampled onto the \
                          first image's dimensions; otherwise it is used as-is."
                .to_string(),
            code: "let image2 = resize_buffer(&image2, image1.width(), image1.height());"
                .to_string(),
            data: StepData::ResizeDecision {
                resized: outcome.stats.resized,
                original_shapes: outcome.stats.original_shapes,
                final_shape: outcome.stats.final_shape,
            },
        },
        PipelineStep {
            step_number: 4,
            title: "Absolute Difference".to_string(),
            explanation: "Every output pixel is |a - b| of the corresponding inputs. \
                          The magnitude keeps where the images disagree; the sign (which \
                          one was brighter) is discarded."
                .to_string(),
            code: "let diff = absolute_difference(&image1, &image2)?;".to_string(),
            data: StepData::Difference {
                image1_sample: center_sample(&outcome.image1),
                image2_sample: center_sample(&outcome.image2),
                difference_sample: center_sample(&outcome.difference),
            },
        },
        PipelineStep {
            step_number: 5,
            title: "Summary Statistics".to_string(),
            explanation: "Scalar summaries of the difference array: how large the \
                          disagreement is on average, its extremes, and how much of the \
                          image changed at all."
                .to_string(),
            code: "let stats = summarize(&diff);".to_string(),
            data: StepData::Statistics {
                stats: outcome.stats.clone(),
            },
        },
        PipelineStep {
            step_number: 6,
            title: "Normalize for Display".to_string(),
            explanation: "Differences are often faint. Stretching the array so its \
                          minimum maps to 0 and its maximum to 255 makes the structure \
                          visible without changing which pixels differ."
                .to_string(),
            code: "let enhanced = normalize_to_full_range(&diff);".to_string(),
            data: StepData::Normalized {
                before_range: range_of(&outcome.difference),
                after_range: range_of(&outcome.enhanced),
                difference_image: gray_to_base64_png(&outcome.difference)?,
                enhanced_image: gray_to_base64_png(&outcome.enhanced)?,
            },
        },
    ];

    Ok(steps)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::GrayImage;
    use tempfile::TempDir;

    fn stage(images: &[(&str, GrayImage)]) -> TempDir {
        let dir = TempDir::new().unwrap();
        for (name, img) in images {
            img.save(dir.path().join(name)).unwrap();
        }
        dir
    }

    fn gradient(w: u32, h: u32) -> GrayImage {
        GrayImage::from_fn(w, h, |x, y| image::Luma([(x * 7 + y * 11) as u8]))
    }

    #[test]
    fn test_narration_has_six_ordered_steps() {
        let dir = stage(&[("a.png", gradient(8, 8)), ("b.png", gradient(8, 8))]);
        let store = ImageStore::new(dir.path());
        let steps = narrate(&store, "a.png", "b.png").unwrap();
        assert_eq!(steps.len(), 6);
        for (i, step) in steps.iter().enumerate() {
            assert_eq!(step.step_number, i + 1);
            assert!(!step.title.is_empty());
            assert!(!step.explanation.is_empty());
            assert!(!step.code.is_empty());
        }
    }

    #[test]
    fn test_step_data_kinds_are_tagged_in_order() {
        let dir = stage(&[("a.png", gradient(8, 8)), ("b.png", gradient(6, 6))]);
        let store = ImageStore::new(dir.path());
        let steps = narrate(&store, "a.png", "b.png").unwrap();
        let kinds: Vec<String> = steps
            .iter()
            .map(|s| serde_json::to_value(&s.data).unwrap()["kind"].as_str().unwrap().to_string())
            .collect();
        assert_eq!(
            kinds,
            vec![
                "file_meta",
                "array_meta",
                "resize_decision",
                "difference",
                "statistics",
                "normalized"
            ]
        );
    }

    #[test]
    fn test_mismatched_inputs_record_the_resize() {
        let dir = stage(&[("a.png", gradient(8, 8)), ("b.png", gradient(6, 6))]);
        let store = ImageStore::new(dir.path());
        let steps = narrate(&store, "a.png", "b.png").unwrap();
        match &steps[2].data {
            StepData::ResizeDecision { resized, original_shapes, final_shape } => {
                assert!(resized);
                assert_eq!(original_shapes.image2, [6, 6]);
                assert_eq!(*final_shape, [8, 8]);
            }
            other => panic!("expected resize decision, got {other:?}"),
        }
    }

    #[test]
    fn test_center_samples_are_5x5_and_images_encoded() {
        let dir = stage(&[("a.png", gradient(9, 9)), ("b.png", gradient(9, 9))]);
        let store = ImageStore::new(dir.path());
        let steps = narrate(&store, "a.png", "b.png").unwrap();
        match &steps[3].data {
            StepData::Difference { difference_sample, .. } => {
                assert_eq!(difference_sample.len(), 5);
                assert_eq!(difference_sample[0].len(), 5);
            }
            other => panic!("expected difference data, got {other:?}"),
        }
        match &steps[5].data {
            StepData::Normalized { difference_image, enhanced_image, before_range, .. } => {
                assert!(!difference_image.is_empty());
                assert!(!enhanced_image.is_empty());
                // Identical inputs: the difference is flat zero.
                assert_eq!(*before_range, [0, 0]);
            }
            other => panic!("expected normalized data, got {other:?}"),
        }
    }
}

//! Tests for the step-by-step pipeline narration.

mod common;

use common::fixtures::{self, names};
use graylab::narrate::{narrate, StepData};
use graylab::store::ImageStore;
use pretty_assertions::assert_eq;

#[test]
fn test_pipeline_runs_six_ordered_steps() {
    let dir = fixtures::stage_default_images();
    let store = ImageStore::new(dir.path());

    let steps = narrate(&store, names::GRADIENT, names::MARKED).unwrap();

    let numbers: Vec<usize> = steps.iter().map(|s| s.step_number).collect();
    assert_eq!(numbers, vec![1, 2, 3, 4, 5, 6]);

    let titles: Vec<&str> = steps.iter().map(|s| s.title.as_str()).collect();
    assert_eq!(
        titles,
        vec![
            "Load Images",
            "Decode to Arrays",
            "Reconcile Shapes",
            "Absolute Difference",
            "Summary Statistics",
            "Normalize for Display",
        ]
    );
    assert!(steps
        .iter()
        .all(|s| !s.explanation.is_empty() && !s.code.is_empty()));
}

#[test]
fn test_step_data_is_tagged_by_kind() {
    let dir = fixtures::stage_default_images();
    let store = ImageStore::new(dir.path());

    let steps = narrate(&store, names::GRADIENT, names::MARKED).unwrap();
    let value = serde_json::to_value(&steps).unwrap();
    let kinds: Vec<&str> = value
        .as_array()
        .unwrap()
        .iter()
        .map(|s| s["data"]["kind"].as_str().unwrap())
        .collect();
    assert_eq!(
        kinds,
        vec![
            "file_meta",
            "array_meta",
            "resize_decision",
            "difference",
            "statistics",
            "normalized",
        ]
    );
}

#[test]
fn test_resize_decision_reflects_shapes() {
    let dir = fixtures::stage_default_images();
    let store = ImageStore::new(dir.path());

    let steps = narrate(&store, names::FLAT, names::FLAT_SMALL).unwrap();
    match &steps[2].data {
        StepData::ResizeDecision {
            resized,
            original_shapes,
            final_shape,
        } => {
            assert!(*resized);
            assert_eq!(original_shapes.image1, [16, 16]);
            assert_eq!(original_shapes.image2, [8, 8]);
            assert_eq!(*final_shape, [16, 16]);
        }
        other => panic!("expected resize decision, got {other:?}"),
    }

    let steps = narrate(&store, names::FLAT, names::FLAT).unwrap();
    match &steps[2].data {
        StepData::ResizeDecision { resized, .. } => assert!(!*resized),
        other => panic!("expected resize decision, got {other:?}"),
    }
}

#[test]
fn test_samples_and_normalization_snapshots() {
    let dir = fixtures::stage_default_images();
    let store = ImageStore::new(dir.path());

    let steps = narrate(&store, names::GRADIENT, names::GRADIENT).unwrap();

    match &steps[1].data {
        StepData::ArrayMeta { image1, .. } => {
            assert_eq!(image1.shape, [16, 16]);
            assert_eq!(image1.element_type, "u8");
            assert_eq!(image1.center_sample.len(), 5);
            assert_eq!(image1.center_sample[0].len(), 5);
        }
        other => panic!("expected array metadata, got {other:?}"),
    }

    // Identical inputs leave nothing to normalize.
    match &steps[5].data {
        StepData::Normalized {
            before_range,
            after_range,
            difference_image,
            enhanced_image,
        } => {
            assert_eq!(*before_range, [0, 0]);
            assert_eq!(*after_range, [0, 0]);
            common::assert_base64_png(difference_image);
            common::assert_base64_png(enhanced_image);
        }
        other => panic!("expected normalization snapshot, got {other:?}"),
    }
}

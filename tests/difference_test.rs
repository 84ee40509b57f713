//! Tests for the spatial difference pipeline run against staged files.

mod common;

use common::fixtures::{self, names};
use common::{assert_base64_png, decode_base64_gray};
use graylab::difference::{difference_from_store, DifferenceReport};
use graylab::store::ImageStore;
use pretty_assertions::assert_eq;

#[test]
fn test_identical_pair_has_zero_statistics() {
    let dir = fixtures::stage_default_images();
    let store = ImageStore::new(dir.path());

    let outcome = difference_from_store(&store, names::GRADIENT, names::GRADIENT).unwrap();
    let stats = &outcome.stats;

    assert_eq!(stats.mean_difference, 0.0);
    assert_eq!(stats.max_difference, 0);
    assert_eq!(stats.nonzero_pixels, 0);
    assert_eq!(stats.nonzero_percentage, 0.0);
    assert!(!stats.resized);
    assert_eq!(stats.final_shape, [16, 16]);
    assert!(outcome.difference.data().iter().all(|&v| v == 0));
    // Nothing to stretch in an all-zero difference.
    assert_eq!(outcome.enhanced, outcome.difference);
}

#[test]
fn test_marked_block_is_isolated_by_difference() {
    let dir = fixtures::stage_default_images();
    let store = ImageStore::new(dir.path());

    let outcome = difference_from_store(&store, names::GRADIENT, names::MARKED).unwrap();
    let stats = &outcome.stats;

    // The fixtures differ exactly in a 4x4 block.
    assert_eq!(stats.nonzero_pixels, 16);
    assert_eq!(stats.nonzero_percentage, 6.25);
    assert_eq!(stats.total_pixels, 256);
    // Largest gap is at the block corner nearest the origin: 255 - (3*4 + 5*4).
    assert_eq!(stats.max_difference, 223);
    assert_eq!(stats.min_difference, 0);
    assert!((stats.mean_difference - 3376.0 / 256.0).abs() < 1e-9);

    // Enhancement stretches the strongest change to full white.
    assert_eq!(outcome.enhanced.min_max(), Some((0, 255)));
}

#[test]
fn test_shape_mismatch_resizes_second_image() {
    let dir = fixtures::stage_default_images();
    let store = ImageStore::new(dir.path());

    let outcome = difference_from_store(&store, names::FLAT, names::FLAT_SMALL).unwrap();
    let stats = &outcome.stats;

    assert!(stats.resized);
    assert_eq!(stats.original_shapes.image1, [16, 16]);
    assert_eq!(stats.original_shapes.image2, [8, 8]);
    assert_eq!(stats.final_shape, [16, 16]);
    // Upscaling a constant image stays constant, so the pair still matches.
    assert_eq!(stats.mean_difference, 0.0);
    assert_eq!(stats.nonzero_pixels, 0);
}

#[test]
fn test_report_carries_transport_fields() {
    let dir = fixtures::stage_default_images();
    let store = ImageStore::new(dir.path());

    let outcome = difference_from_store(&store, names::GRADIENT, names::MARKED).unwrap();
    let report = DifferenceReport::from_outcome(&outcome).unwrap();
    assert_base64_png(&report.image1);
    assert_base64_png(&report.image2);

    let difference = decode_base64_gray(&report.difference);
    assert_eq!(difference.dimensions(), (16, 16));
    assert_eq!(difference.get_pixel(0, 0).0[0], 0);
    assert_eq!(difference.get_pixel(4, 4).0[0], 223);

    let value = serde_json::to_value(&report).unwrap();
    assert!(value["difference_enhanced"].is_string());
    assert_eq!(value["stats"]["nonzero_pixels"], 16);
    assert_eq!(value["stats"]["original_shapes"]["image1"][0], 16);
}

//! End-to-end pipeline tests: decode a file, cartoonify, and check the
//! output the way a user of the binary would see it.

mod common;

use cartoon_core::{build_palette, Cartoonifier, ReduceStrategy};
use cartoonify::codec;
use cartoonify::output::OutputDir;
use pretty_assertions::assert_eq;

#[test]
fn test_interval_pipeline_from_file_to_file() {
    let tmp = tempfile::tempdir().unwrap();
    let photo = common::synthetic_photo(32, 32);
    let input = common::write_png(&tmp, "photo.png", &photo);

    let image = codec::load_grid(&input).unwrap();
    let result = Cartoonifier::new()
        .strategy(ReduceStrategy::Interval { step: 50 })
        .cartoonify(&image)
        .unwrap();

    // Every output pixel is a palette entry.
    let palette = build_palette(50).unwrap();
    for &pixel in result.pixels() {
        assert!(palette.colors().contains(&pixel));
    }

    // And the result survives a save/load round trip unchanged.
    let out = OutputDir::prepare(tmp.path().join("out")).unwrap();
    let final_path = out.final_path(&input);
    codec::save_grid(&result, &final_path).unwrap();
    assert_eq!(codec::load_grid(&final_path).unwrap(), result);
}

#[test]
fn test_segmentation_pipeline_shrinks_the_color_count() {
    let tmp = tempfile::tempdir().unwrap();
    let photo = common::synthetic_photo(32, 32);
    let input = common::write_png(&tmp, "photo.png", &photo);

    let image = codec::load_grid(&input).unwrap();
    let result = Cartoonifier::new()
        .strategy(ReduceStrategy::Segmentation { deviation: 60 })
        .cartoonify(&image)
        .unwrap();

    let distinct = |g: &cartoon_core::PixelGrid| {
        let mut colors: Vec<_> = g.pixels().to_vec();
        colors.sort_unstable_by_key(|c| (c.r, c.g, c.b));
        colors.dedup();
        colors.len()
    };
    assert!(
        distinct(&result) < distinct(&image),
        "segmentation should reduce the number of distinct colors",
    );
    assert_eq!(result.dimensions(), image.dimensions());
}

#[test]
fn test_stage_snapshots_land_in_the_output_dir() {
    let tmp = tempfile::tempdir().unwrap();
    let photo = common::synthetic_photo(16, 16);
    let input = common::write_png(&tmp, "cat.png", &photo);

    let image = codec::load_grid(&input).unwrap();
    let out = OutputDir::prepare(tmp.path().join("out")).unwrap();

    let mut edges = cartoon_core::detect_edges(&image, 10);
    codec::save_grid(edges.as_grid(), &out.stage_path("edges", &input)).unwrap();
    cartoon_core::dilate(&mut edges, 3);
    codec::save_grid(edges.as_grid(), &out.stage_path("zoomed_edges", &input)).unwrap();

    assert!(out.root().join("edges_cat.png").exists());
    assert!(out.root().join("zoomed_edges_cat.png").exists());

    // Snapshots decode back to binary masks.
    let snapshot = codec::load_grid(&out.root().join("zoomed_edges_cat.png")).unwrap();
    for &pixel in snapshot.pixels() {
        assert!(pixel == cartoon_core::Rgb::BLACK || pixel == cartoon_core::Rgb::WHITE);
    }
}

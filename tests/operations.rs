mod common;

use common::synthetic_image::{checkerboard_rgb, gradient_gray, uniform_gray};
use raster_enhance::progress::{Recorder, Silent};
use raster_enhance::{convolve, geometry, histogram, point, Operation, RasterBuffer};

#[test]
fn negative_is_an_involution_on_any_gray_buffer() {
    let g = gradient_gray(32, 8);
    let twice = point::negative(&point::negative(&g).unwrap()).unwrap();
    assert_eq!(twice, g, "negative(negative(g)) must equal g");
}

#[test]
fn grayscale_of_color_is_single_channel_and_stable() {
    let rgb = checkerboard_rgb(16, 16, 4);
    let gray = point::grayscale(&rgb).unwrap();
    assert_eq!(gray.channels(), 1);
    assert_eq!((gray.width(), gray.height()), (16, 16));
    // Applying again to the already-gray result is a no-op copy.
    assert_eq!(point::grayscale(&gray).unwrap(), gray);
}

#[test]
fn threshold_splits_into_pure_black_and_white() {
    let g = gradient_gray(64, 4);
    let out = point::threshold(&g, 100).unwrap();
    assert!(out.as_slice().iter().all(|&v| v == 0 || v == 255));
    for x in 0..64 {
        let expected = if g.get(x, 0, 0) > 100 { 255 } else { 0 };
        assert_eq!(out.get(x, 0, 0), expected, "column {x}");
    }
}

#[test]
fn smooth_flattens_a_checkerboard() {
    let rgb = checkerboard_rgb(12, 12, 2);
    let out = convolve::smooth(&rgb, 5, &mut Silent).unwrap();
    assert_eq!(out.channels(), 3);
    // A 5x5 box over 2-pixel cells mixes both colors; the result must sit
    // strictly between the two extremes away from the border.
    let v = out.get(6, 6, 0);
    assert!(v > 32 && v < 220, "interior should be blended, got {v}");
}

#[test]
fn laplacian_edge_stays_quiet_on_flat_input() {
    let flat = uniform_gray(9, 9, 0);
    let out = convolve::laplacian_edge(&flat, &mut Silent).unwrap();
    assert_eq!(out.channels(), 1);
    assert!(out.as_slice().iter().all(|&v| v == 0));
}

#[test]
fn laplacian_edge_of_color_checkerboard_finds_cell_borders() {
    let rgb = checkerboard_rgb(16, 16, 4);
    let out = convolve::laplacian_edge(&rgb, &mut Silent).unwrap();
    assert_eq!(out.channels(), 1);
    assert!(
        out.max_sample() >= 254,
        "strongest edge normalized to ~255, got {}",
        out.max_sample()
    );
    // Cell interiors are flat.
    assert_eq!(out.get(2, 2, 0), 0);
}

#[test]
fn resize_shape_is_exact_for_both_layouts() {
    let gray = gradient_gray(20, 10);
    let out = geometry::resize(&gray, 13, 7, &mut Silent).unwrap();
    assert_eq!((out.width(), out.height(), out.channels()), (13, 7, 1));

    let rgb = checkerboard_rgb(8, 8, 2);
    let out = geometry::resize(&rgb, 32, 16, &mut Silent).unwrap();
    assert_eq!((out.width(), out.height(), out.channels()), (32, 16, 3));
}

#[test]
fn rotate_zero_returns_the_input_exactly() {
    let rgb = checkerboard_rgb(10, 6, 2);
    let out = geometry::rotate(&rgb, 0.0, &mut Silent).unwrap();
    assert_eq!(out, rgb);

    let full_turn = geometry::rotate(&rgb, 360.0, &mut Silent).unwrap();
    assert_eq!(
        (full_turn.width(), full_turn.height()),
        (rgb.width(), rgb.height()),
        "360° keeps the bounding box"
    );
}

#[test]
fn progress_contract_holds_for_every_long_running_operation() {
    let rgb = checkerboard_rgb(24, 18, 3);
    let ops = [
        Operation::Smooth { kernel_size: 3 },
        Operation::Sharpen { intensity: 0.8 },
        Operation::LaplacianEdge,
        Operation::Resize {
            width: 12,
            height: 9,
        },
        Operation::Rotate { angle_deg: 33.0 },
    ];
    for op in &ops {
        let mut rec = Recorder::default();
        op.apply(&rgb, &mut rec).unwrap();
        assert!(
            rec.satisfies_contract(),
            "{}: progress must be non-decreasing and end at 100, got {:?}",
            op.name(),
            rec.reports
        );
    }
}

#[test]
fn histogram_totals_match_pixel_count() {
    let rgb = checkerboard_rgb(16, 12, 4);
    let hist = histogram::histogram(&rgb).unwrap();
    assert_eq!(hist.total(), 16 * 12);
    // Two-tone board: exactly two populated luma bins.
    let populated = hist.counts().iter().filter(|&&c| c > 0).count();
    assert_eq!(populated, 2);
}

#[test]
fn operations_never_mutate_their_input() {
    let g = gradient_gray(16, 16);
    let before = g.clone();
    point::contrast(&g, 1.7).unwrap();
    convolve::smooth(&g, 3, &mut Silent).unwrap();
    geometry::rotate(&g, 12.0, &mut Silent).unwrap();
    histogram::histogram(&g).unwrap();
    assert_eq!(g, before);
}

#[test]
fn log_transforms_brighten_dark_regions() {
    let g = gradient_gray(64, 2);
    let scaled = point::log_scaled(&g).unwrap();
    let unit = point::log_unit(&g).unwrap();
    // Log compression lifts low intensities well above the linear ramp.
    assert!(scaled.get(8, 0, 0) > g.get(8, 0, 0));
    assert!(unit.get(8, 0, 0) > g.get(8, 0, 0));
    // Both keep the black point black.
    assert_eq!(scaled.get(0, 0, 0), 0);
    assert_eq!(unit.get(0, 0, 0), 0);
}

#[test]
fn empty_and_misshapen_buffers_are_rejected() {
    assert!(RasterBuffer::from_raw(0, 0, 1, vec![]).is_err());
    assert!(RasterBuffer::from_raw(2, 2, 2, vec![0; 8]).is_err());
}

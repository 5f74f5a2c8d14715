//! Srcset and target width tests.
//!
//! Tests verify:
//! - Default target widths match the reference table
//! - Fluid srcsets for the pass-through operation
//! - Pixel-ratio srcsets with and without variable quality
//! - Explicit width lists for each operation
//! - Range validation and the legacy fallback

use imageboss::{
    format_auto, target_widths, try_target_widths, Operation, RangeError, SrcsetConfig,
    DEFAULT_WIDTHS,
};

use super::test_utils::{builder, signed_builder};

fn entries(srcset: &str) -> Vec<&str> {
    srcset.split(",\n").collect()
}

// =============================================================================
// Target Widths
// =============================================================================

#[test]
fn test_default_target_widths() {
    let widths = try_target_widths(100, 8192, 0.08).unwrap();
    assert_eq!(widths, DEFAULT_WIDTHS.to_vec());
    assert_eq!(widths.len(), 31);
    assert_eq!(widths.first(), Some(&100));
    assert_eq!(widths.last(), Some(&8192));
}

#[test]
fn test_target_widths_custom_tolerance() {
    assert_eq!(
        try_target_widths(320, 1200, 0.1).unwrap(),
        vec![320, 384, 461, 553, 664, 796, 956, 1147, 1200]
    );
}

#[test]
fn test_target_widths_are_strictly_increasing() {
    for (min, max, tolerance) in [(0, 50, 0.01), (10, 500, 0.05), (1, 8192, 0.3)] {
        let widths = try_target_widths(min, max, tolerance).unwrap();
        assert!(widths.windows(2).all(|pair| pair[0] < pair[1]));
        assert_eq!(widths.last().copied(), Some(max as u32));
    }
}

#[test]
fn test_target_widths_errors() {
    assert!(matches!(
        try_target_widths(-1, 100, 0.08),
        Err(RangeError::NegativeWidth { .. })
    ));
    assert!(matches!(
        try_target_widths(500, 100, 0.08),
        Err(RangeError::Inverted { .. })
    ));
    assert!(matches!(
        try_target_widths(100, 500, 0.001),
        Err(RangeError::ToleranceTooSmall { .. })
    ));
}

#[test]
fn test_target_widths_legacy_fallback() {
    assert_eq!(target_widths(500, 100, 0.08), DEFAULT_WIDTHS.to_vec());
    assert_eq!(target_widths(100, 380, 0.08).len(), 10);
}

// =============================================================================
// Fluid Srcset
// =============================================================================

#[test]
fn test_fluid_srcset() {
    let config = SrcsetConfig::default()
        .with_min_width(100)
        .with_max_width(200);
    let srcset = builder()
        .create_srcset("examples/02.jpg", &Operation::cdn(), &[], &config)
        .unwrap();

    assert_eq!(
        entries(&srcset),
        vec![
            "https://img.imageboss.me/mywebsite-images/width/100/examples/02.jpg 100w",
            "https://img.imageboss.me/mywebsite-images/width/116/examples/02.jpg 116w",
            "https://img.imageboss.me/mywebsite-images/width/135/examples/02.jpg 135w",
            "https://img.imageboss.me/mywebsite-images/width/156/examples/02.jpg 156w",
            "https://img.imageboss.me/mywebsite-images/width/181/examples/02.jpg 181w",
            "https://img.imageboss.me/mywebsite-images/width/200/examples/02.jpg 200w",
        ]
    );
}

#[test]
fn test_fluid_srcset_default_range() {
    let srcset = builder()
        .create_srcset("a.jpg", &Operation::cdn(), &[], &SrcsetConfig::default())
        .unwrap();
    assert_eq!(entries(&srcset).len(), DEFAULT_WIDTHS.len());
}

#[test]
fn test_fluid_srcset_from_zero_width() {
    let config = SrcsetConfig::default()
        .with_min_width(0)
        .with_max_width(380);
    let srcset = builder()
        .create_srcset("a.jpg", &Operation::cdn(), &[], &config)
        .unwrap();

    let widths = try_target_widths(0, 380, 0.08).unwrap();
    assert_eq!(entries(&srcset).len(), widths.len());
    assert_eq!(widths[0], 1);
}

#[test]
fn test_fluid_srcset_invalid_range() {
    let config = SrcsetConfig::default()
        .with_min_width(400)
        .with_max_width(100);
    let result = builder().create_srcset("a.jpg", &Operation::cdn(), &[], &config);
    assert_eq!(result, Err(RangeError::Inverted { min: 400, max: 100 }));
}

#[test]
fn test_fluid_srcset_signed_entries() {
    let config = SrcsetConfig::default()
        .with_min_width(100)
        .with_max_width(120);
    let srcset = signed_builder()
        .create_srcset("01.jpg", &Operation::cdn(), &[], &config)
        .unwrap();

    for entry in entries(&srcset) {
        let (url, descriptor) = entry.rsplit_once(' ').unwrap();
        assert!(descriptor.ends_with('w'));
        assert!(url.contains("?bossToken="));
    }
}

// =============================================================================
// Pixel-Ratio Srcset
// =============================================================================

#[test]
fn test_dpr_srcset_variable_quality() {
    let srcset = builder()
        .create_srcset(
            "examples/02.jpg",
            &Operation::cover(300, 300).unwrap(),
            &[format_auto()],
            &SrcsetConfig::default(),
        )
        .unwrap();

    let prefix = "https://img.imageboss.me/mywebsite-images/cover/300x300/format:auto";
    assert_eq!(
        entries(&srcset),
        vec![
            format!("{}/quality:75/examples/02.jpg 1x", prefix),
            format!("{}/quality:50/examples/02.jpg 2x", prefix),
            format!("{}/quality:35/examples/02.jpg 3x", prefix),
            format!("{}/quality:23/examples/02.jpg 4x", prefix),
            format!("{}/quality:20/examples/02.jpg 5x", prefix),
        ]
    );
}

#[test]
fn test_dpr_srcset_fixed_quality() {
    let config = SrcsetConfig::default().with_variable_quality(false);
    let srcset = builder()
        .create_srcset("a.jpg", &Operation::width(400).unwrap(), &[], &config)
        .unwrap();

    for (entry, ratio) in entries(&srcset).iter().zip(1..=5) {
        assert_eq!(
            *entry,
            format!(
                "https://img.imageboss.me/mywebsite-images/width/400/a.jpg {}x",
                ratio
            )
        );
    }
}

#[test]
fn test_dpr_srcset_ignores_width_range() {
    let config = SrcsetConfig::default()
        .with_min_width(-5)
        .with_max_width(-10);
    let srcset = builder()
        .create_srcset("a.jpg", &Operation::height(200).unwrap(), &[], &config)
        .unwrap();
    assert_eq!(entries(&srcset).len(), 5);
}

// =============================================================================
// Explicit Widths
// =============================================================================

#[test]
fn test_srcset_from_widths_per_operation() {
    let builder = builder();
    let widths = [300, 0, 600];

    let width = builder.create_srcset_from_widths("a.jpg", &Operation::cdn(), &[], &widths);
    assert_eq!(
        width,
        "https://img.imageboss.me/mywebsite-images/width/300/a.jpg 300w,\n\
         https://img.imageboss.me/mywebsite-images/width/600/a.jpg 600w"
    );

    let height =
        builder.create_srcset_from_widths("a.jpg", &Operation::height(1).unwrap(), &[], &widths);
    assert!(height.contains("/height/300/a.jpg 300w"));
    assert!(height.contains("/height/600/a.jpg 600w"));

    let cover = builder.create_srcset_from_widths(
        "a.jpg",
        &Operation::cover_mode(100, 50, "face").unwrap(),
        &[],
        &widths,
    );
    assert_eq!(
        entries(&cover),
        vec![
            "https://img.imageboss.me/mywebsite-images/cover:face/100x50/a.jpg 300w",
            "https://img.imageboss.me/mywebsite-images/cover:face/100x50/a.jpg 600w",
        ]
    );
}

#[test]
fn test_srcset_from_empty_widths() {
    assert_eq!(
        builder().create_srcset_from_widths("a.jpg", &Operation::cdn(), &[], &[]),
        ""
    );
}

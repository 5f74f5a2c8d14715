//! Target width generation.
//!
//! Fluid srcsets use a geometric sequence of widths: each step grows by
//! roughly `2 * tolerance`, so the browser never picks an image more than
//! `tolerance` away from the size it needs while keeping the list short.

use tracing::warn;

use crate::error::RangeError;

/// Default smallest width of a fluid srcset.
pub const DEFAULT_MIN_WIDTH: u32 = 100;

/// Hard ceiling for generated widths, also the default largest width.
pub const MAX_WIDTH: u32 = 8192;

/// Default width tolerance (8%).
pub const DEFAULT_TOLERANCE: f64 = 0.08;

/// Smallest accepted tolerance.
pub const MIN_TOLERANCE: f64 = 0.01;

/// Output of `try_target_widths(100, 8192, 0.08)`.
pub const DEFAULT_WIDTHS: [u32; 31] = [
    100, 116, 135, 156, 181, 210, 244, 283, 328, 380, 441, 512, 594, 689, 799, 927, 1075, 1247,
    1446, 1678, 1946, 2257, 2619, 3038, 3524, 4087, 4741, 5500, 6380, 7401, 8192,
];

/// Device pixel ratios of a fixed-dimension srcset.
pub const DPR_RATIOS: [u32; 5] = [1, 2, 3, 4, 5];

/// A validated width range.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WidthRange {
    min_width: u32,
    max_width: u32,
    tolerance: f64,
}

impl WidthRange {
    /// Validate a range.
    ///
    /// Bounds must be non-negative with `min <= max`, the maximum must be
    /// positive, the minimum must not exceed [`MAX_WIDTH`] and the tolerance
    /// must be at least [`MIN_TOLERANCE`]. A maximum above the ceiling is
    /// clamped. A minimum of zero is raised to 1, so every generated width
    /// can be rendered as a `width` operation.
    pub fn new(min_width: i64, max_width: i64, tolerance: f64) -> Result<Self, RangeError> {
        if min_width < 0 || max_width < 0 {
            return Err(RangeError::NegativeWidth {
                min: min_width,
                max: max_width,
            });
        }
        if max_width < min_width {
            return Err(RangeError::Inverted {
                min: min_width,
                max: max_width,
            });
        }
        if max_width == 0 {
            return Err(RangeError::ZeroMaxWidth);
        }
        if tolerance.is_nan() || tolerance < MIN_TOLERANCE {
            return Err(RangeError::ToleranceTooSmall {
                tolerance,
                minimum: MIN_TOLERANCE,
            });
        }
        if min_width > i64::from(MAX_WIDTH) {
            return Err(RangeError::AboveCeiling {
                min: min_width,
                ceiling: MAX_WIDTH,
            });
        }

        Ok(Self {
            min_width: (min_width as u32).max(1),
            max_width: max_width.min(i64::from(MAX_WIDTH)) as u32,
            tolerance,
        })
    }

    /// Smallest width, never below 1.
    pub fn min_width(&self) -> u32 {
        self.min_width
    }

    /// Largest width, already clamped to [`MAX_WIDTH`].
    pub fn max_width(&self) -> u32 {
        self.max_width
    }

    /// Tolerance between consecutive widths.
    pub fn tolerance(&self) -> f64 {
        self.tolerance
    }

    /// Generate the ascending target widths for this range.
    pub fn widths(&self) -> Vec<u32> {
        if self.min_width == self.max_width {
            return vec![self.min_width];
        }

        let max = f64::from(self.max_width);
        let step = 1.0 + self.tolerance * 2.0;

        let mut widths = Vec::new();
        let mut current = f64::from(self.min_width);
        while current < max && current < f64::from(MAX_WIDTH) {
            widths.push(current.round() as u32);
            // At least one pixel per step, so tiny starts still advance
            current = (current * step).max(current + 1.0);
        }

        if widths.last().is_some_and(|&last| last < self.max_width) {
            widths.push(self.max_width);
        }

        widths
    }
}

impl Default for WidthRange {
    fn default() -> Self {
        Self {
            min_width: DEFAULT_MIN_WIDTH,
            max_width: MAX_WIDTH,
            tolerance: DEFAULT_TOLERANCE,
        }
    }
}

/// Compute target widths, failing on an invalid range.
pub fn try_target_widths(
    min_width: i64,
    max_width: i64,
    tolerance: f64,
) -> Result<Vec<u32>, RangeError> {
    Ok(WidthRange::new(min_width, max_width, tolerance)?.widths())
}

/// Compute target widths, falling back to [`DEFAULT_WIDTHS`] on an invalid
/// range.
///
/// This is the only place where a range error is swallowed; it exists for
/// callers that relied on the historical behaviour. Use
/// [`try_target_widths`] everywhere else.
pub fn target_widths(min_width: i64, max_width: i64, tolerance: f64) -> Vec<u32> {
    match try_target_widths(min_width, max_width, tolerance) {
        Ok(widths) => widths,
        Err(e) => {
            warn!(error = %e, "Invalid width range, using default widths");
            DEFAULT_WIDTHS.to_vec()
        }
    }
}

/// Quality used for a device pixel ratio when variable quality is enabled.
///
/// Denser screens hide more compression, so quality drops as the ratio grows.
pub fn dpr_quality(ratio: u32) -> Option<u32> {
    match ratio {
        1 => Some(75),
        2 => Some(50),
        3 => Some(35),
        4 => Some(23),
        5 => Some(20),
        _ => None,
    }
}

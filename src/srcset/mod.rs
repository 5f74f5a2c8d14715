//! Responsive `srcset` generation.
//!
//! Two strategies, picked from the operation:
//!
//! - **Fixed dimensions** (`width`, `height`, `cover`): one entry per device
//!   pixel ratio, 1x to 5x, all with the same operation. With variable
//!   quality enabled each entry also gets a `quality` option that drops as
//!   the ratio grows.
//! - **Fluid** (`cdn`): one `width/<w>` entry per target width between
//!   `min_width` and `max_width`.
//!
//! ```text
//! https://img.imageboss.me/demo/width/100/image.jpg 100w,
//! https://img.imageboss.me/demo/width/116/image.jpg 116w,
//! ...
//! ```
//!
//! # Example
//!
//! ```
//! use imageboss::{Operation, SrcsetConfig, UrlBuilder};
//!
//! let builder = UrlBuilder::new("demo").unwrap();
//! let config = SrcsetConfig::default().with_min_width(100).with_max_width(380);
//!
//! let srcset = builder.create_srcset("image.png", &Operation::cdn(), &[], &config).unwrap();
//! assert_eq!(srcset.split(",\n").count(), 10);
//! ```

mod widths;

use std::num::NonZeroU32;

use tracing::debug;

use crate::builder::{quality, Operation, PathOption, UrlBuilder};
use crate::error::RangeError;

pub use widths::{
    dpr_quality, target_widths, try_target_widths, WidthRange, DEFAULT_MIN_WIDTH,
    DEFAULT_TOLERANCE, DEFAULT_WIDTHS, DPR_RATIOS, MAX_WIDTH, MIN_TOLERANCE,
};

/// Separator between srcset entries.
pub const ENTRY_SEPARATOR: &str = ",\n";

/// Split a srcset string back into its entries. An empty srcset has none.
pub fn srcset_entries(srcset: &str) -> Vec<&str> {
    if srcset.is_empty() {
        return Vec::new();
    }
    srcset.split(ENTRY_SEPARATOR).collect()
}

// =============================================================================
// Configuration
// =============================================================================

/// Settings for [`UrlBuilder::create_srcset`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SrcsetConfig {
    /// Smallest width of a fluid srcset (default: 100)
    pub min_width: i64,

    /// Largest width of a fluid srcset (default: 8192)
    pub max_width: i64,

    /// Relative step between fluid widths (default: 0.08)
    pub tolerance: f64,

    /// Add a per-ratio `quality` option to fixed-dimension srcsets (default: true)
    pub variable_quality: bool,
}

impl Default for SrcsetConfig {
    fn default() -> Self {
        Self {
            min_width: i64::from(DEFAULT_MIN_WIDTH),
            max_width: i64::from(MAX_WIDTH),
            tolerance: DEFAULT_TOLERANCE,
            variable_quality: true,
        }
    }
}

impl SrcsetConfig {
    /// Set the smallest fluid width.
    pub fn with_min_width(mut self, width: i64) -> Self {
        self.min_width = width;
        self
    }

    /// Set the largest fluid width.
    pub fn with_max_width(mut self, width: i64) -> Self {
        self.max_width = width;
        self
    }

    /// Set the tolerance between fluid widths.
    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// Enable or disable per-ratio quality.
    pub fn with_variable_quality(mut self, enabled: bool) -> Self {
        self.variable_quality = enabled;
        self
    }

    /// Validate the fluid width range.
    pub fn width_range(&self) -> Result<WidthRange, RangeError> {
        WidthRange::new(self.min_width, self.max_width, self.tolerance)
    }
}

// =============================================================================
// Srcset Composition
// =============================================================================

impl UrlBuilder {
    /// Build a srcset for an image.
    ///
    /// Operations with fixed dimensions produce a 1x to 5x srcset; the
    /// pass-through operation produces a fluid srcset from `config`'s width
    /// range. Only the fluid strategy reads the range, so only it can fail.
    pub fn create_srcset(
        &self,
        path: &str,
        operation: &Operation,
        options: &[PathOption],
        config: &SrcsetConfig,
    ) -> Result<String, RangeError> {
        if operation.has_fixed_dimensions() {
            debug!(operation = %operation, "Building DPR srcset");
            return Ok(self.create_srcset_dpr(path, operation, options, config.variable_quality));
        }

        let widths = config.width_range()?.widths();
        debug!(count = widths.len(), "Building fluid srcset");
        Ok(self.create_srcset_from_widths(path, &Operation::Passthrough, options, &widths))
    }

    /// Build a width-descriptor srcset from an explicit list of widths.
    ///
    /// Each width replaces the width of a `width` operation or the height of
    /// a `height` operation. A `cover` operation keeps its own dimensions and
    /// mode for every entry, and the pass-through operation is treated as
    /// `width`. Zero widths are skipped. An empty list gives an empty string.
    pub fn create_srcset_from_widths(
        &self,
        path: &str,
        operation: &Operation,
        options: &[PathOption],
        widths: &[u32],
    ) -> String {
        widths
            .iter()
            .filter_map(|&width| NonZeroU32::new(width))
            .map(|width| {
                let entry_op = match operation {
                    Operation::Height(_) => Operation::Height(width),
                    Operation::Cover { .. } => operation.clone(),
                    Operation::Width(_) | Operation::Passthrough => Operation::Width(width),
                };
                format!("{} {}w", self.create_url(path, &entry_op, options), width)
            })
            .collect::<Vec<_>>()
            .join(ENTRY_SEPARATOR)
    }

    /// Build a 1x to 5x srcset with the same operation for every ratio.
    fn create_srcset_dpr(
        &self,
        path: &str,
        operation: &Operation,
        options: &[PathOption],
        variable_quality: bool,
    ) -> String {
        DPR_RATIOS
            .iter()
            .map(|&ratio| {
                let mut entry_options = options.to_vec();
                if variable_quality {
                    if let Some(q) = dpr_quality(ratio) {
                        entry_options.push(quality(q));
                    }
                }
                format!(
                    "{} {}x",
                    self.create_url(path, operation, &entry_options),
                    ratio
                )
            })
            .collect::<Vec<_>>()
            .join(ENTRY_SEPARATOR)
    }
}

// =============================================================================
// Tests
// =============================================================================

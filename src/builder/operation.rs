//! Resize operations.
//!
//! An [`Operation`] is the directive that follows the source in every URL:
//!
//! ```text
//! https://img.imageboss.me/<source>/<operation>[/<dimensions>]/...
//! ```
//!
//! | Operation                    | Path segment   | Dimensions |
//! |------------------------------|----------------|------------|
//! | `Operation::cdn()`           | `cdn`          | (none)     |
//! | `Operation::width(700)`      | `width`        | `700`      |
//! | `Operation::height(500)`     | `height`       | `500`      |
//! | `Operation::cover(300, 200)` | `cover`        | `300x200`  |
//! | `cover_mode(.., "center")`   | `cover:center` | `300x200`  |

use std::fmt;
use std::num::NonZeroU32;

use crate::error::ConfigError;

/// A resize directive with its dimensions.
///
/// Dimensions are `NonZeroU32`, so an operation can never carry a zero
/// width or height. Use the constructors to build one from plain integers.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub enum Operation {
    /// Serve the image through the CDN without resizing
    #[default]
    Passthrough,

    /// Fixed width, proportional height
    Width(NonZeroU32),

    /// Fixed height, proportional width
    Height(NonZeroU32),

    /// Exact width and height, cropped according to `mode`
    Cover {
        width: NonZeroU32,
        height: NonZeroU32,
        /// Crop mode such as `center`, `smart`, `face` or `north`
        mode: Option<String>,
    },
}

impl Operation {
    /// Pass-through operation (no resize).
    pub fn cdn() -> Self {
        Operation::Passthrough
    }

    /// Resize to a fixed width.
    pub fn width(width: u32) -> Result<Self, ConfigError> {
        Ok(Operation::Width(positive(width, "width")?))
    }

    /// Resize to a fixed height.
    pub fn height(height: u32) -> Result<Self, ConfigError> {
        Ok(Operation::Height(positive(height, "height")?))
    }

    /// Crop to exact dimensions using the CDN's default (smart) crop.
    pub fn cover(width: u32, height: u32) -> Result<Self, ConfigError> {
        Ok(Operation::Cover {
            width: positive(width, "width")?,
            height: positive(height, "height")?,
            mode: None,
        })
    }

    /// Crop to exact dimensions with an explicit crop mode.
    ///
    /// An empty mode behaves like [`Operation::cover`].
    pub fn cover_mode(
        width: u32,
        height: u32,
        mode: impl Into<String>,
    ) -> Result<Self, ConfigError> {
        let mode = mode.into();
        Ok(Operation::Cover {
            width: positive(width, "width")?,
            height: positive(height, "height")?,
            mode: (!mode.is_empty()).then_some(mode),
        })
    }

    /// Build an operation from its name and loose dimensions, as they arrive
    /// from the command line or a query string.
    ///
    /// `kind` is one of `cdn`, `width`, `height` or `cover`. Dimensions the
    /// operation does not use are ignored.
    pub fn from_parts(
        kind: &str,
        width: Option<u32>,
        height: Option<u32>,
        mode: Option<&str>,
    ) -> Result<Self, ConfigError> {
        let require = |value: Option<u32>, dimension: &'static str| {
            value.ok_or(ConfigError::MissingDimension {
                operation: kind.to_string(),
                dimension,
            })
        };

        match kind.trim().to_ascii_lowercase().as_str() {
            "" | "cdn" => Ok(Operation::Passthrough),
            "width" => Operation::width(require(width, "width")?),
            "height" => Operation::height(require(height, "height")?),
            "cover" => Operation::cover_mode(
                require(width, "width")?,
                require(height, "height")?,
                mode.unwrap_or_default(),
            ),
            _ => Err(ConfigError::UnknownOperation(kind.to_string())),
        }
    }

    /// Path segment naming the operation, e.g. `cdn` or `cover:center`.
    pub fn path_segment(&self) -> String {
        match self {
            Operation::Passthrough => "cdn".to_string(),
            Operation::Width(_) => "width".to_string(),
            Operation::Height(_) => "height".to_string(),
            Operation::Cover { mode: Some(mode), .. } => format!("cover:{}", mode),
            Operation::Cover { mode: None, .. } => "cover".to_string(),
        }
    }

    /// Dimensions segment, empty for [`Operation::Passthrough`].
    pub fn dimensions(&self) -> String {
        match self {
            Operation::Passthrough => String::new(),
            Operation::Width(width) => width.to_string(),
            Operation::Height(height) => height.to_string(),
            Operation::Cover { width, height, .. } => format!("{}x{}", width, height),
        }
    }

    /// Whether the operation pins the output to concrete dimensions.
    ///
    /// Srcsets for such operations are built per device-pixel-ratio
    /// instead of per width.
    pub fn has_fixed_dimensions(&self) -> bool {
        !matches!(self, Operation::Passthrough)
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let dimensions = self.dimensions();
        if dimensions.is_empty() {
            write!(f, "{}", self.path_segment())
        } else {
            write!(f, "{}/{}", self.path_segment(), dimensions)
        }
    }
}

fn positive(value: u32, dimension: &'static str) -> Result<NonZeroU32, ConfigError> {
    NonZeroU32::new(value).ok_or(ConfigError::ZeroDimension { dimension })
}

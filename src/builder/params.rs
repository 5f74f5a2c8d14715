//! Path-segment options such as `blur:4` or `format:auto`.

use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

/// A key with zero or more values, encoded as one path segment.
///
/// Options are positional: a list of them keeps the order it was built in.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PathOption {
    key: String,
    values: Vec<String>,
}

impl PathOption {
    /// Create an option from a key and any number of values.
    pub fn new<I, V>(key: impl Into<String>, values: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<String>,
    {
        Self {
            key: key.into(),
            values: values.into_iter().map(Into::into).collect(),
        }
    }

    /// Create a single `key:value` option.
    pub fn pair(key: impl Into<String>, value: impl Into<String>) -> Self {
        let value: String = value.into();
        Self::new(key, [value])
    }

    /// Create a bare `key` option without values.
    pub fn flag(key: impl Into<String>) -> Self {
        Self::new(key, Vec::<String>::new())
    }

    /// The option key.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// The option values, in order.
    pub fn values(&self) -> &[String] {
        &self.values
    }

    /// Encode as `key`, `key:v1,v2`, or an empty string when the key is empty.
    pub fn encode(&self) -> String {
        if self.key.is_empty() {
            return String::new();
        }
        if self.values.is_empty() {
            return self.key.clone();
        }
        format!("{}:{}", self.key, self.values.join(","))
    }
}

impl fmt::Display for PathOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.encode())
    }
}

impl FromStr for PathOption {
    type Err = Infallible;

    /// Parse the encoded form back: `key`, `key:value` or `key:v1,v2`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Ok(match s.split_once(':') {
            Some((key, "")) => PathOption::flag(key),
            Some((key, values)) => PathOption::new(key, values.split(',')),
            None => PathOption::flag(s),
        })
    }
}

/// `format:auto`, letting the CDN pick the best format for the client.
pub fn format_auto() -> PathOption {
    PathOption::pair("format", "auto")
}

/// `blur:N`. The CDN accepts 0 to 40; 2 to 4 is usually enough.
pub fn blur(amount: u32) -> PathOption {
    PathOption::pair("blur", amount.to_string())
}

/// `download:1`, forcing a download with the original filename.
pub fn download() -> PathOption {
    PathOption::pair("download", "1")
}

/// `download:<filename>`, forcing a download under a custom name.
pub fn download_as(filename: impl Into<String>) -> PathOption {
    PathOption::pair("download", filename)
}

/// `quality:N`.
pub fn quality(quality: u32) -> PathOption {
    PathOption::pair("quality", quality.to_string())
}

use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use crate::foundation::core::{DEFAULT_PRECISION, ViewportSize, ViewportUnit, validate_precision};
use crate::foundation::error::{PxvwError, PxvwResult};

/// File written next to the current working directory when no output is set.
pub const DEFAULT_OUTPUT: &str = "viewportEnhancedStyle.css";

/// Settings for one conversion run.
///
/// Build in code with [`ConvertOptions::new`] and the `with_*` setters, or load
/// from JSON:
///
/// ```json
/// { "unit": "vw", "viewport": { "width": 1536, "height": 500 }, "precision": 4 }
/// ```
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConvertOptions {
    /// Target unit.
    pub unit: ViewportUnit,
    /// Reference viewport.
    pub viewport: ViewportSize,
    /// Decimal places of converted values.
    #[serde(default = "default_precision")]
    pub precision: u32,
    /// Where the working copy is written.
    #[serde(default = "default_output")]
    pub output: PathBuf,
    /// Fail on malformed px tokens instead of leaving them unchanged.
    #[serde(default)]
    pub strict: bool,
}

fn default_precision() -> u32 {
    DEFAULT_PRECISION
}

fn default_output() -> PathBuf {
    PathBuf::from(DEFAULT_OUTPUT)
}

impl ConvertOptions {
    /// Options with default precision, output path and lenient parsing.
    pub fn new(unit: ViewportUnit, viewport: ViewportSize) -> Self {
        Self {
            unit,
            viewport,
            precision: DEFAULT_PRECISION,
            output: default_output(),
            strict: false,
        }
    }

    /// Set the rounding precision.
    pub fn with_precision(mut self, precision: u32) -> PxvwResult<Self> {
        validate_precision(precision)?;
        self.precision = precision;
        Ok(self)
    }

    /// Set the output path.
    pub fn with_output(mut self, output: impl Into<PathBuf>) -> Self {
        self.output = output.into();
        self
    }

    /// Toggle strict number parsing.
    pub fn with_strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    /// Check fields that plain assignment or deserialization can get wrong.
    pub fn validate(&self) -> PxvwResult<()> {
        validate_precision(self.precision)?;
        if self.output.as_os_str().is_empty() {
            return Err(PxvwError::validation("output path must not be empty"));
        }
        Ok(())
    }

    /// Parse options from a JSON reader.
    pub fn from_reader<R: std::io::Read>(r: R) -> PxvwResult<Self> {
        let opts: Self = serde_json::from_reader(r)
            .map_err(|e| PxvwError::config(format!("parse options JSON: {e}")))?;
        opts.validate()?;
        Ok(opts)
    }

    /// Parse options from a JSON file on disk.
    pub fn from_path(path: impl AsRef<Path>) -> PxvwResult<Self> {
        let path = path.as_ref();
        let f = File::open(path).map_err(|e| {
            PxvwError::config(format!("open options JSON '{}': {e}", path.display()))
        })?;
        Self::from_reader(BufReader::new(f))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/convert/options.rs"]
mod tests;

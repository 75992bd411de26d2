use std::fmt;
use std::str::FromStr;

use crate::foundation::error::{PxvwError, PxvwResult};

/// Decimal places used when none are requested.
pub const DEFAULT_PRECISION: u32 = 4;

/// Largest accepted rounding precision; f64 carries no more significant digits.
pub const MAX_PRECISION: u32 = 16;

/// Viewport-relative unit a pixel length is rewritten into.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewportUnit {
    /// Percentage of the viewport width.
    Vw,
    /// Percentage of the viewport height.
    Vh,
}

impl ViewportUnit {
    /// CSS suffix appended to converted values.
    pub fn suffix(self) -> &'static str {
        match self {
            Self::Vw => "vw",
            Self::Vh => "vh",
        }
    }

    /// The viewport dimension this unit is relative to.
    pub fn component(self, viewport: ViewportSize) -> f64 {
        match self {
            Self::Vw => viewport.width,
            Self::Vh => viewport.height,
        }
    }
}

impl fmt::Display for ViewportUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.suffix())
    }
}

impl FromStr for ViewportUnit {
    type Err = PxvwError;

    fn from_str(s: &str) -> PxvwResult<Self> {
        match s {
            "vw" => Ok(Self::Vw),
            "vh" => Ok(Self::Vh),
            other => Err(PxvwError::validation(format!(
                "unit must be 'vw' or 'vh', got '{other}'"
            ))),
        }
    }
}

/// Reference viewport in CSS pixels.
///
/// A zero component marks an axis that was not supplied; tokens converted
/// against it are left untouched. Both components being zero is rejected.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(try_from = "ViewportSizeDef")]
pub struct ViewportSize {
    /// `window.innerWidth` of the reference browser.
    pub width: f64,
    /// `window.innerHeight` of the reference browser.
    pub height: f64,
}

#[derive(serde::Deserialize)]
#[serde(deny_unknown_fields)]
struct ViewportSizeDef {
    #[serde(default)]
    width: f64,
    #[serde(default)]
    height: f64,
}

impl TryFrom<ViewportSizeDef> for ViewportSize {
    type Error = PxvwError;

    fn try_from(def: ViewportSizeDef) -> PxvwResult<Self> {
        Self::new(def.width, def.height)
    }
}

impl ViewportSize {
    /// Validate and build a viewport.
    pub fn new(width: f64, height: f64) -> PxvwResult<Self> {
        fn check(name: &str, v: f64) -> PxvwResult<()> {
            if !v.is_finite() {
                return Err(PxvwError::validation(format!(
                    "viewport {name} must be finite"
                )));
            }
            if v < 0.0 {
                return Err(PxvwError::validation(format!(
                    "viewport {name} must be >= 0"
                )));
            }
            Ok(())
        }

        check("width", width)?;
        check("height", height)?;
        if width == 0.0 && height == 0.0 {
            return Err(PxvwError::validation(
                "viewport needs a non-zero width or height",
            ));
        }
        Ok(Self { width, height })
    }

    /// Shorthand for a viewport that only knows its width.
    pub fn width_only(width: f64) -> PxvwResult<Self> {
        Self::new(width, 0.0)
    }

    /// Shorthand for a viewport that only knows its height.
    pub fn height_only(height: f64) -> PxvwResult<Self> {
        Self::new(0.0, height)
    }
}

pub(crate) fn validate_precision(precision: u32) -> PxvwResult<()> {
    if precision > MAX_PRECISION {
        return Err(PxvwError::validation(format!(
            "precision must be <= {MAX_PRECISION}, got {precision}"
        )));
    }
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;

use std::borrow::Cow;

use crate::foundation::core::{ViewportSize, ViewportUnit};

/// Suffix that marks a pixel length.
pub const PX_SUFFIX: &str = "px";

/// Why a px-suffixed token was left as it was.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SkipReason {
    /// Nothing precedes the `px` suffix.
    EmptyLiteral,
    /// The viewport axis for the target unit is zero.
    ZeroViewport,
    /// The text before `px` is not a finite number.
    InvalidNumber,
    /// The literal is a number, but its ratio to the viewport axis does not
    /// fit in an `f64`.
    Overflow,
}

impl SkipReason {
    /// Short human-readable label.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::EmptyLiteral => "empty literal",
            Self::ZeroViewport => "zero viewport component",
            Self::InvalidNumber => "not a number",
            Self::Overflow => "out of range",
        }
    }
}

/// Result of rewriting a single whitespace-delimited token.
#[derive(Clone, Debug, PartialEq)]
pub enum TokenOutcome {
    /// Not a pixel length.
    Passthrough(String),
    /// Pixel length rewritten into the target unit.
    Converted(String),
    /// Pixel length that could not be rewritten; `text` is the token with
    /// semicolons normalized.
    Skipped {
        /// Text written back into the line.
        text: String,
        /// Why the token was not converted.
        reason: SkipReason,
    },
}

impl TokenOutcome {
    /// Text that goes back into the line.
    pub fn text(&self) -> &str {
        match self {
            Self::Passthrough(t) | Self::Converted(t) => t,
            Self::Skipped { text, .. } => text,
        }
    }

    /// Consume the outcome, keeping only its text.
    pub fn into_text(self) -> String {
        match self {
            Self::Passthrough(t) | Self::Converted(t) => t,
            Self::Skipped { text, .. } => text,
        }
    }
}

/// Rewrite one token.
///
/// A token ending in `;` loses every `;` it contains, whether or not it is a
/// pixel length; the line rebuilder appends exactly one terminator. What is
/// left is a pixel length when it ends in `px`. Tokens that merely contain
/// `px` somewhere else (`calc(1px+2px)`, `px-wide`) pass through.
pub fn rewrite_token(
    token: &str,
    unit: ViewportUnit,
    viewport: ViewportSize,
    precision: u32,
) -> TokenOutcome {
    let token = strip_semicolons(token);
    let Some(literal) = token.strip_suffix(PX_SUFFIX) else {
        return TokenOutcome::Passthrough(token.to_string());
    };

    let skipped = |reason| TokenOutcome::Skipped {
        text: token.to_string(),
        reason,
    };

    if literal.is_empty() {
        return skipped(SkipReason::EmptyLiteral);
    }

    let component = unit.component(viewport);
    if component == 0.0 {
        return skipped(SkipReason::ZeroViewport);
    }

    let Some(px) = parse_length(literal) else {
        return skipped(SkipReason::InvalidNumber);
    };

    let ratio = round_to(px / component * 100.0, precision);
    if !ratio.is_finite() {
        return skipped(SkipReason::Overflow);
    }

    TokenOutcome::Converted(format!("{}{}", format_ratio(ratio), unit.suffix()))
}

fn strip_semicolons(token: &str) -> Cow<'_, str> {
    if token.ends_with(';') {
        Cow::Owned(token.replace(';', ""))
    } else {
        Cow::Borrowed(token)
    }
}

fn parse_length(literal: &str) -> Option<f64> {
    literal.parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Round `value` to `precision` decimal places.
///
/// Rounds the exact binary value, i.e. yields the digits `format!("{:.N}")`
/// prints.
pub fn round_to(value: f64, precision: u32) -> f64 {
    let fixed = format!("{:.*}", precision as usize, value);
    fixed.parse().unwrap_or(value)
}

/// Shortest decimal form of `value`, always with a fractional part and never
/// in exponent notation (`10.0`, `37.5`, `0.0651`).
pub fn format_ratio(value: f64) -> String {
    let mut out = value.to_string();
    if value.is_finite() && !out.contains('.') {
        out.push_str(".0");
    }
    out
}

#[cfg(test)]
#[path = "../../tests/unit/convert/token.rs"]
mod tests;

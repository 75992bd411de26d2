//! pxvw rewrites pixel lengths in a stylesheet as viewport units.
//!
//! Write a layout in fixed `px`, measure `window.innerWidth`/`innerHeight` in the
//! browser it looks right in, and let pxvw rescale every `NNNpx` token into `vw`
//! or `vh` against that viewport.
//!
//! This is a line/token rewriter, not a CSS parser:
//!
//! - lines that do not contain `px` are copied byte-for-byte;
//! - every other line is split on whitespace, its `NNNpx` tokens are replaced by
//!   `round(NNN / viewport * 100, precision)` plus the unit, and the line is
//!   rebuilt as `\t<tokens joined by spaces>;\n`.
//!
//! The source file is never modified. [`convert_file`] copies it to
//! [`ConvertOptions::output`] (default [`DEFAULT_OUTPUT`] in the current
//! directory) and rewrites that copy. [`convert_str`] does the same work in
//! memory.
//!
//! ```no_run
//! use pxvw::{ViewportSize, ViewportUnit, convert};
//!
//! let viewport = ViewportSize::new(1536.0, 500.0)?;
//! let report = convert("style.css", ViewportUnit::Vw, viewport)?;
//! eprintln!("converted {} tokens", report.tokens_converted);
//! # Ok::<(), pxvw::PxvwError>(())
//! ```
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod convert;
mod foundation;

pub use convert::file::{check_file_path, convert, convert_file};
pub use convert::line::{ConversionReport, Rewriter, SkippedToken, convert_str};
pub use convert::options::{ConvertOptions, DEFAULT_OUTPUT};
pub use convert::token::{
    PX_SUFFIX, SkipReason, TokenOutcome, format_ratio, rewrite_token, round_to,
};
pub use foundation::core::{DEFAULT_PRECISION, MAX_PRECISION, ViewportSize, ViewportUnit};
pub use foundation::error::{PxvwError, PxvwResult};

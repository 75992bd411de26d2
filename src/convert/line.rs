use std::borrow::Cow;
use std::path::PathBuf;

use crate::convert::options::ConvertOptions;
use crate::convert::token::{PX_SUFFIX, SkipReason, TokenOutcome, rewrite_token};
use crate::foundation::core::{ViewportSize, ViewportUnit, validate_precision};
use crate::foundation::error::{PxvwError, PxvwResult};

/// A px token that was left in the output unchanged.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct SkippedToken {
    /// 1-based line number.
    pub line: usize,
    /// Token as written to the output.
    pub token: String,
    /// Why it was not converted.
    pub reason: SkipReason,
}

/// Summary of a conversion.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize)]
pub struct ConversionReport {
    /// Output file, when the conversion wrote one.
    pub output: Option<PathBuf>,
    /// Lines read.
    pub lines_total: usize,
    /// Lines that mentioned `px` and were rebuilt.
    pub lines_rewritten: usize,
    /// Tokens rewritten into the target unit.
    pub tokens_converted: usize,
    /// Tokens left untouched, in input order.
    pub skipped: Vec<SkippedToken>,
}

/// Line-by-line px rewriter.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rewriter {
    unit: ViewportUnit,
    viewport: ViewportSize,
    precision: u32,
    strict: bool,
}

impl Rewriter {
    /// Lenient rewriter with the given settings.
    pub fn new(unit: ViewportUnit, viewport: ViewportSize, precision: u32) -> PxvwResult<Self> {
        validate_precision(precision)?;
        Ok(Self {
            unit,
            viewport,
            precision,
            strict: false,
        })
    }

    /// Rewriter configured from `opts`.
    pub fn from_options(opts: &ConvertOptions) -> PxvwResult<Self> {
        opts.validate()?;
        Ok(Self {
            unit: opts.unit,
            viewport: opts.viewport,
            precision: opts.precision,
            strict: opts.strict,
        })
    }

    /// Fail on malformed px tokens instead of skipping them.
    pub fn strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    /// Rewrite one line (terminator included).
    ///
    /// Lines without `px` come back borrowed and byte-identical. Any other
    /// line is rebuilt as a tab, its tokens joined by single spaces, one `;`
    /// and `\n`, whatever it looked like before.
    pub fn rewrite_line<'a>(
        &self,
        line_no: usize,
        line: &'a str,
        report: &mut ConversionReport,
    ) -> PxvwResult<Cow<'a, str>> {
        if !line.contains(PX_SUFFIX) {
            return Ok(Cow::Borrowed(line));
        }

        let mut tokens = Vec::new();
        for token in line.split_whitespace() {
            let outcome = rewrite_token(token, self.unit, self.viewport, self.precision);
            match &outcome {
                TokenOutcome::Passthrough(_) => {}
                TokenOutcome::Converted(_) => report.tokens_converted += 1,
                TokenOutcome::Skipped { text, reason } => {
                    if self.strict && *reason == SkipReason::InvalidNumber {
                        return Err(PxvwError::NumericParse {
                            line: line_no,
                            token: text.clone(),
                        });
                    }
                    if *reason == SkipReason::InvalidNumber {
                        tracing::warn!(
                            line = line_no,
                            token = text.as_str(),
                            "px token is not a number, left as is"
                        );
                    }
                    report.skipped.push(SkippedToken {
                        line: line_no,
                        token: text.clone(),
                        reason: *reason,
                    });
                }
            }
            tokens.push(outcome.into_text());
        }

        report.lines_rewritten += 1;
        let rebuilt = format!("\t{};\n", tokens.join(" "));
        tracing::debug!(line = line_no, rebuilt = rebuilt.trim_end(), "rewrote line");
        Ok(Cow::Owned(rebuilt))
    }

    /// Convert a whole stylesheet held in memory.
    #[tracing::instrument(skip(self, text), fields(unit = %self.unit, bytes = text.len()))]
    pub fn convert_str(&self, text: &str) -> PxvwResult<(String, ConversionReport)> {
        let mut report = ConversionReport::default();
        let mut out = String::with_capacity(text.len());

        for (idx, line) in text.split_inclusive('\n').enumerate() {
            report.lines_total += 1;
            out.push_str(&self.rewrite_line(idx + 1, line, &mut report)?);
        }

        Ok((out, report))
    }
}

/// Convert a stylesheet held in memory; no files are touched.
pub fn convert_str(
    text: &str,
    unit: ViewportUnit,
    viewport: ViewportSize,
    precision: u32,
) -> PxvwResult<(String, ConversionReport)> {
    Rewriter::new(unit, viewport, precision)?.convert_str(text)
}

#[cfg(test)]
#[path = "../../tests/unit/convert/line.rs"]
mod tests;

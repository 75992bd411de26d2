use std::fs::{self, File, OpenOptions};
use std::io::{self, Read, Seek, SeekFrom, Write};
use std::path::Path;

use anyhow::Context as _;

use crate::convert::line::{ConversionReport, Rewriter};
use crate::convert::options::ConvertOptions;
use crate::foundation::core::{ViewportSize, ViewportUnit};
use crate::foundation::error::{PxvwError, PxvwResult};

/// Check that `path` names a regular file that can be opened for reading.
pub fn check_file_path(path: impl AsRef<Path>) -> PxvwResult<()> {
    let path = path.as_ref();
    let f = File::open(path).map_err(|e| PxvwError::invalid_path(path, e))?;
    let meta = f.metadata().map_err(|e| PxvwError::invalid_path(path, e))?;
    if !meta.is_file() {
        return Err(PxvwError::invalid_path(
            path,
            io::Error::new(io::ErrorKind::InvalidInput, "not a regular file"),
        ));
    }
    Ok(())
}

/// Convert `input` with default precision into the default output file.
pub fn convert(
    input: impl AsRef<Path>,
    unit: ViewportUnit,
    viewport: ViewportSize,
) -> PxvwResult<ConversionReport> {
    convert_file(input.as_ref(), &ConvertOptions::new(unit, viewport))
}

/// Copy `input` to `opts.output` and rewrite the copy in place.
///
/// The input is validated before anything is written; an invalid path leaves
/// the output untouched. An existing output file is overwritten. Errors after
/// the copy may leave a partially converted output behind.
#[tracing::instrument(skip(opts), fields(unit = %opts.unit, output = %opts.output.display()))]
pub fn convert_file(input: &Path, opts: &ConvertOptions) -> PxvwResult<ConversionReport> {
    let rewriter = Rewriter::from_options(opts)?;
    check_file_path(input)?;
    ensure_distinct(input, &opts.output)?;
    ensure_parent_dir(&opts.output)?;

    fs::copy(input, &opts.output)?;

    let mut working = OpenOptions::new()
        .read(true)
        .write(true)
        .open(&opts.output)?;
    let mut text = String::new();
    working.read_to_string(&mut text)?;

    let (converted, mut report) = rewriter.convert_str(&text)?;

    working.seek(SeekFrom::Start(0))?;
    working.set_len(0)?;
    working.write_all(converted.as_bytes())?;
    working.flush()?;

    report.output = Some(opts.output.clone());
    tracing::info!(
        lines = report.lines_total,
        rewritten = report.lines_rewritten,
        converted = report.tokens_converted,
        skipped = report.skipped.len(),
        "conversion finished"
    );
    Ok(report)
}

fn ensure_distinct(input: &Path, output: &Path) -> PxvwResult<()> {
    if !output.exists() {
        return Ok(());
    }
    let a = fs::canonicalize(input)
        .with_context(|| format!("resolve input path '{}'", input.display()))?;
    let b = fs::canonicalize(output)
        .with_context(|| format!("resolve output path '{}'", output.display()))?;
    if a == b {
        return Err(PxvwError::validation(format!(
            "output '{}' is the input file",
            output.display()
        )));
    }
    Ok(())
}

fn ensure_parent_dir(path: &Path) -> PxvwResult<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)?;
    }
    Ok(())
}

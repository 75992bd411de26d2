use std::io::Write as _;
use std::path::PathBuf;

use anyhow::Context as _;
use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use tracing::Level;

#[derive(Parser, Debug)]
#[command(name = "pxvw", version, about = "Rewrite px lengths in a stylesheet as vw/vh")]
struct Cli {
    /// Log more (-v debug, -vv trace).
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Convert a stylesheet into a new file.
    Convert(ConvertArgs),
    /// Convert a stylesheet and print the result to stdout.
    Print(PrintArgs),
}

#[derive(Parser, Debug)]
struct ViewportArgs {
    /// Target unit.
    #[arg(long, value_enum)]
    unit: Option<UnitChoice>,

    /// Reference viewport width in px (window.innerWidth).
    #[arg(long)]
    width: Option<f64>,

    /// Reference viewport height in px (window.innerHeight).
    #[arg(long)]
    height: Option<f64>,

    /// Decimal places of converted values.
    #[arg(long)]
    precision: Option<u32>,
}

#[derive(Parser, Debug)]
struct ConvertArgs {
    /// Input stylesheet.
    #[arg(long = "in")]
    in_path: PathBuf,

    #[command(flatten)]
    viewport: ViewportArgs,

    /// Output path [default: viewportEnhancedStyle.css].
    #[arg(long)]
    out: Option<PathBuf>,

    /// JSON options file; flags given on the command line take precedence.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Fail on px tokens that are not numbers.
    #[arg(long)]
    strict: bool,

    /// Print the conversion report as JSON on stdout.
    #[arg(long)]
    json: bool,
}

#[derive(Parser, Debug)]
struct PrintArgs {
    /// Input stylesheet.
    #[arg(long = "in")]
    in_path: PathBuf,

    #[command(flatten)]
    viewport: ViewportArgs,

    /// Fail on px tokens that are not numbers.
    #[arg(long)]
    strict: bool,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum UnitChoice {
    Vw,
    Vh,
}

impl From<UnitChoice> for pxvw::ViewportUnit {
    fn from(choice: UnitChoice) -> Self {
        match choice {
            UnitChoice::Vw => pxvw::ViewportUnit::Vw,
            UnitChoice::Vh => pxvw::ViewportUnit::Vh,
        }
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    match cli.cmd {
        Command::Convert(args) => cmd_convert(args),
        Command::Print(args) => cmd_print(args),
    }
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => Level::WARN,
        1 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
}

/// Merge flags over an optional options file.
fn resolve_options(
    args: &ViewportArgs,
    config: Option<&PathBuf>,
) -> anyhow::Result<pxvw::ConvertOptions> {
    let mut opts = match config {
        Some(path) => pxvw::ConvertOptions::from_path(path)
            .with_context(|| format!("load options '{}'", path.display()))?,
        None => {
            let unit = args
                .unit
                .context("--unit is required without --config")?;
            let viewport = pxvw::ViewportSize::new(
                args.width.unwrap_or(0.0),
                args.height.unwrap_or(0.0),
            )?;
            pxvw::ConvertOptions::new(unit.into(), viewport)
        }
    };

    if let Some(unit) = args.unit {
        opts.unit = unit.into();
    }
    if args.width.is_some() || args.height.is_some() {
        opts.viewport = pxvw::ViewportSize::new(
            args.width.unwrap_or(opts.viewport.width),
            args.height.unwrap_or(opts.viewport.height),
        )?;
    }
    if let Some(precision) = args.precision {
        opts = opts.with_precision(precision)?;
    }
    Ok(opts)
}

fn report_skipped(report: &pxvw::ConversionReport) {
    for s in &report.skipped {
        eprintln!(
            "skipped line {}: '{}' ({})",
            s.line,
            s.token,
            s.reason.as_str()
        );
    }
}

fn cmd_convert(args: ConvertArgs) -> anyhow::Result<()> {
    let mut opts = resolve_options(&args.viewport, args.config.as_ref())?;
    if let Some(out) = args.out {
        opts = opts.with_output(out);
    }
    if args.strict {
        opts = opts.with_strict(true);
    }

    let report = pxvw::convert_file(&args.in_path, &opts)
        .with_context(|| format!("convert '{}'", args.in_path.display()))?;

    report_skipped(&report);
    if args.json {
        let stdout = std::io::stdout();
        let mut lock = stdout.lock();
        serde_json::to_writer_pretty(&mut lock, &report).context("write report JSON")?;
        writeln!(lock)?;
    }

    eprintln!(
        "{} px -> {} in {}/{} lines",
        report.tokens_converted,
        opts.unit,
        report.lines_rewritten,
        report.lines_total
    );
    eprintln!("wrote {}", opts.output.display());
    Ok(())
}

fn cmd_print(args: PrintArgs) -> anyhow::Result<()> {
    let opts = resolve_options(&args.viewport, None)?.with_strict(args.strict);

    pxvw::check_file_path(&args.in_path)?;
    let text = std::fs::read_to_string(&args.in_path)
        .with_context(|| format!("read stylesheet '{}'", args.in_path.display()))?;

    let (converted, report) = pxvw::Rewriter::from_options(&opts)?.convert_str(&text)?;
    report_skipped(&report);

    let stdout = std::io::stdout();
    let mut lock = stdout.lock();
    lock.write_all(converted.as_bytes())
        .context("write converted stylesheet")?;
    Ok(())
}

mod logging;

use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand};
use hueport_formats::{ConvertConfig, Registry, TextFormat, convert, to_abstract};
use tracing::{debug, info};

use crate::logging::{LoggingConfig, init_logging};

/// Output syntax for reports and inspected schemes.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
enum CliOutputFormat {
    Json,
    Yaml,
}

impl From<CliOutputFormat> for TextFormat {
    fn from(fmt: CliOutputFormat) -> Self {
        match fmt {
            CliOutputFormat::Json => Self::Json,
            CliOutputFormat::Yaml => Self::Yaml,
        }
    }
}

#[derive(Debug, Parser)]
#[command(name = "hueport", version)]
#[command(about = "Convert color schemes between terminal and editor formats")]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Convert a scheme file from one format to another.
    Convert(ConvertArgs),
    /// Print the canonical form of a scheme file.
    Inspect(InspectArgs),
    /// List supported formats and their aliases.
    Formats,
    /// Check every format's field mapping against the canonical scheme.
    Validate(ValidateArgs),
}

#[derive(Debug, Args)]
struct ConvertArgs {
    /// Input format name or alias.
    #[arg(long)]
    from: String,
    /// Output format name or alias.
    #[arg(long)]
    to: String,
    /// Input file, or `-` for stdin.
    #[arg(long)]
    input: PathBuf,
    /// Output file (default: stdout).
    #[arg(long)]
    output: Option<PathBuf>,
    /// Conversion config YAML.
    #[arg(long)]
    config: Option<PathBuf>,
    /// Write a conversion report to this path.
    #[arg(long)]
    report: Option<PathBuf>,
    /// Report format.
    #[arg(long, default_value = "json")]
    report_format: CliOutputFormat,
}

#[derive(Debug, Args)]
struct InspectArgs {
    /// Input format name or alias.
    #[arg(long)]
    from: String,
    /// Input file, or `-` for stdin.
    #[arg(long)]
    input: PathBuf,
    /// Conversion config YAML.
    #[arg(long)]
    config: Option<PathBuf>,
    /// Output format.
    #[arg(long, default_value = "yaml")]
    format: CliOutputFormat,
}

#[derive(Debug, Args)]
struct ValidateArgs {
    /// Conversion config YAML (for its tag key).
    #[arg(long)]
    config: Option<PathBuf>,
}

fn main() {
    let cli = Cli::parse();

    if let Err(err) = init_logging(&LoggingConfig::from_verbosity(cli.verbose)) {
        eprintln!("warning: {err}");
    }

    let result = match cli.command {
        Command::Convert(args) => run_convert(args),
        Command::Inspect(args) => run_inspect(args),
        Command::Formats => run_formats(),
        Command::Validate(args) => run_validate(args),
    };

    if let Err(err) = result {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn run_convert(args: ConvertArgs) -> Result<(), String> {
    let config = load_config(args.config.as_deref())?;
    let registry = Registry::builtin();
    let mut reader = registry.create(&args.from).map_err(|e| e.to_string())?;
    let mut writer = registry.create(&args.to).map_err(|e| e.to_string())?;
    let input = read_input(&args.input)?;

    let conversion = convert(&input, reader.as_mut(), writer.as_mut(), &config)
        .map_err(|e| e.to_string())?;

    match &args.output {
        Some(path) => {
            fs::write(path, &conversion.output)
                .map_err(|e| format!("failed to write {}: {e}", path.display()))?;
            let report = &conversion.report;
            eprintln!(
                "Converted {} -> {}: {} dropped, {} unmapped, {} filled from fallbacks.",
                report.reader,
                report.writer,
                report.dropped_source.len(),
                report.unmapped_destination.len(),
                report.filled_count()
            );
        }
        None => print!("{}", conversion.output),
    }

    if let Some(path) = &args.report {
        let text = conversion
            .report
            .render(args.report_format.into())
            .map_err(|e| e.to_string())?;
        fs::write(path, text).map_err(|e| format!("failed to write {}: {e}", path.display()))?;
        info!(path = %path.display(), "wrote conversion report");
    }
    Ok(())
}

fn run_inspect(args: InspectArgs) -> Result<(), String> {
    let config = load_config(args.config.as_deref())?;
    let mut reader = Registry::builtin()
        .create(&args.from)
        .map_err(|e| e.to_string())?;
    let input = read_input(&args.input)?;

    let canonical = to_abstract(&input, reader.as_mut(), &config).map_err(|e| e.to_string())?;
    for path in &canonical.dropped_source {
        eprintln!("dropped: {path}");
    }
    let format: TextFormat = args.format.into();
    let text = format.encode(&canonical.scheme).map_err(|e| e.to_string())?;
    print!("{text}");
    Ok(())
}

fn run_formats() -> Result<(), String> {
    println!("{:<18} {:<6} ALIASES", "NAME", "SYNTAX");
    for info in Registry::builtin().formats() {
        println!(
            "{:<18} {:<6} {}",
            info.name,
            info.text_format.to_string(),
            info.aliases.join(", ")
        );
    }
    Ok(())
}

fn run_validate(args: ValidateArgs) -> Result<(), String> {
    let config = load_config(args.config.as_deref())?;
    let registry = Registry::builtin();
    let failures = registry.check(&config.tag_key);
    let total = registry.formats().len();

    for (format, errors) in &failures {
        for error in errors {
            eprintln!("{format}: {error}");
        }
    }
    if !failures.is_empty() {
        return Err(format!(
            "{} of {total} format(s) failed validation",
            failures.len()
        ));
    }
    println!("Validated {total} format(s) against the canonical scheme.");
    Ok(())
}

fn load_config(path: Option<&Path>) -> Result<ConvertConfig, String> {
    let Some(path) = path else {
        return Ok(ConvertConfig::default());
    };
    debug!(path = %path.display(), "loading config");
    let config = ConvertConfig::load(path)
        .map_err(|e| format!("failed to load config {}: {e}", path.display()))?;
    config.validate().map_err(|e| e.to_string())?;
    Ok(config)
}

fn read_input(path: &Path) -> Result<String, String> {
    if path.as_os_str() == "-" {
        let mut buffer = String::new();
        std::io::stdin()
            .read_to_string(&mut buffer)
            .map_err(|e| format!("failed to read stdin: {e}"))?;
        return Ok(buffer);
    }
    fs::read_to_string(path).map_err(|e| format!("failed to read {}: {e}", path.display()))
}

//! fpgen: parametric footprint generator for the gEDA PCB layout editor
//!
//! Generates footprint element files from a named preset or a JSON
//! parameter file, running the family's design rule check first.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing::{error, info, Level};
use tracing_subscriber::EnvFilter;

use fpgen::config;
use fpgen::element::{self, PackageDescriptor, PresetCatalog};

/// Parametric footprint generator for the gEDA PCB layout editor.
///
/// Builds a footprint element file from a builtin preset or a JSON
/// parameter file. The design rule check runs before generation; a
/// descriptor that violates its family's rules is never written out.
#[derive(Parser, Debug)]
#[command(name = "fpgen")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Name of a catalog preset, with or without the leading '?'
    #[arg(short, long, value_name = "NAME", conflicts_with = "params")]
    preset: Option<String>,

    /// Path to a JSON parameter file holding one package descriptor
    #[arg(long, value_name = "FILE")]
    params: Option<PathBuf>,

    /// Path of the footprint file to write
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Run the design rule check only, writing nothing
    #[arg(long)]
    check_only: bool,

    /// List the catalog preset names and exit
    #[arg(long)]
    list_presets: bool,

    /// Path to configuration file
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Increase logging verbosity (-v for info, -vv for debug, -vvv for trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Decrease logging verbosity (only show errors)
    #[arg(short, long)]
    quiet: bool,
}

/// Determines the log level from CLI arguments.
#[allow(clippy::match_same_arms)] // Explicit "warn" arm for clarity
fn get_log_level(verbose: u8, quiet: bool, config_level: &str) -> Level {
    if quiet {
        return Level::ERROR;
    }

    match verbose {
        0 => match config_level.to_lowercase().as_str() {
            "trace" => Level::TRACE,
            "debug" => Level::DEBUG,
            "info" => Level::INFO,
            "warn" => Level::WARN,
            "error" => Level::ERROR,
            _ => Level::WARN, // Default to warn for unknown levels
        },
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    }
}

/// Initialises the tracing subscriber for logging.
fn init_tracing(level: Level) {
    let filter = EnvFilter::from_default_env().add_directive(level.into());

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

/// Resolves the descriptor from the preset catalog or a parameter file.
fn resolve_descriptor(args: &Args, catalog: &PresetCatalog) -> Result<PackageDescriptor, String> {
    if let Some(ref key) = args.preset {
        return catalog
            .lookup(key)
            .map(Clone::clone)
            .map_err(|e| e.to_string());
    }
    if let Some(ref path) = args.params {
        let text = std::fs::read_to_string(path)
            .map_err(|e| format!("failed to read parameter file {}: {e}", path.display()))?;
        return serde_json::from_str(&text)
            .map_err(|e| format!("failed to parse parameter file {}: {e}", path.display()));
    }
    Err("no input given; use --preset NAME or --params FILE".to_string())
}

/// Entry point for the fpgen tool.
fn main() -> ExitCode {
    let args = Args::parse();

    let config_path = args.config.as_deref();
    let cfg = match config::load_or_default(config_path) {
        Ok(cfg) => cfg,
        Err(e) => {
            eprintln!("Configuration error: {e}");
            return ExitCode::FAILURE;
        }
    };

    let log_level = get_log_level(args.verbose, args.quiet, &cfg.logging.level);
    init_tracing(log_level);

    let mut catalog = PresetCatalog::with_builtins();
    if let Some(ref preset_file) = cfg.preset_file {
        if let Err(e) = catalog.extend_from_path(preset_file) {
            eprintln!("Preset file error: {e}");
            return ExitCode::FAILURE;
        }
    }

    if args.list_presets {
        for name in catalog.names() {
            println!("{name}");
        }
        return ExitCode::SUCCESS;
    }

    let mut descriptor = match resolve_descriptor(&args, &catalog) {
        Ok(descriptor) => descriptor,
        Err(message) => {
            eprintln!("Error: {message}");
            return ExitCode::FAILURE;
        }
    };
    cfg.defaults.apply(&mut descriptor);

    info!(
        family = %descriptor.family,
        name = %descriptor.name,
        "Checking design rules"
    );
    let drc = element::check_rules(&descriptor);
    for diagnostic in &drc.diagnostics {
        eprintln!("DRC: {}", diagnostic.message);
    }
    if !drc.passed {
        error!(
            violations = drc.diagnostics.len(),
            "Design rule check failed, nothing written"
        );
        return ExitCode::FAILURE;
    }
    if args.check_only {
        info!("Design rule check passed");
        return ExitCode::SUCCESS;
    }

    let Some(output) = args.output else {
        eprintln!("Error: no output path given; use --output FILE or --check-only");
        return ExitCode::FAILURE;
    };

    let footprint = element::build_primitives(&descriptor);
    match element::serialize_to_path(&footprint, &output) {
        Ok(()) => {
            info!(path = %output.display(), "Footprint written");
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!(error = %e, "Failed to write footprint");
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verify_cli() {
        use clap::CommandFactory;
        Args::command().debug_assert();
    }

    #[test]
    fn log_level_precedence() {
        assert_eq!(get_log_level(0, true, "trace"), Level::ERROR);
        assert_eq!(get_log_level(2, false, "warn"), Level::DEBUG);
        assert_eq!(get_log_level(0, false, "debug"), Level::DEBUG);
        assert_eq!(get_log_level(0, false, "bogus"), Level::WARN);
    }

    #[test]
    fn resolve_rejects_missing_input() {
        let args = Args::parse_from(["fpgen", "--check-only"]);
        let catalog = PresetCatalog::with_builtins();
        assert!(resolve_descriptor(&args, &catalog).is_err());
    }

    #[test]
    fn resolve_finds_preset() {
        let args = Args::parse_from(["fpgen", "--preset", "?DIP8"]);
        let catalog = PresetCatalog::with_builtins();
        let descriptor = resolve_descriptor(&args, &catalog).unwrap();
        assert_eq!(descriptor.name, "DIP8");
    }
}

use tracing::info;
use tracing_subscriber::EnvFilter;

use icon_resizer::{Error, ResizeParams, TargetSize, resize_icons_with_params};

use super::args::CliArgs;
use super::errors::AppError;

fn parse_size(size: &str) -> Result<TargetSize, AppError> {
    size.parse::<TargetSize>().map_err(|e| match e {
        Error::ZeroSize { .. } => AppError::ZeroSize {
            size: size.to_string(),
        },
        _ => AppError::InvalidSize {
            size: size.to_string(),
        },
    })
}

/// Start from the config file (or defaults) and apply explicit flags on top.
pub fn resolve_params(args: &CliArgs) -> Result<ResizeParams, AppError> {
    let mut params = match &args.config {
        Some(path) => ResizeParams::from_json_file(path).map_err(|source| AppError::Config {
            path: path.clone(),
            source,
        })?,
        None => ResizeParams::default(),
    };

    if let Some(size) = &args.size {
        params.size = parse_size(size)?;
    }
    if let Some(filter) = args.filter {
        params.filter = filter;
    }

    Ok(params)
}

fn init_logging(verbose: bool) {
    let level = if verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(level))
        .with_target(false)
        .init();
}

pub fn run(args: CliArgs) -> Result<(), Box<dyn std::error::Error>> {
    init_logging(args.verbose);

    let params = resolve_params(&args)?;

    info!(
        "Starting icon resizing from directory: {:?} ({} {})",
        args.input_dir, params.size, params.filter
    );
    info!("Output directory: {:?}", args.output_dir);

    let report = resize_icons_with_params(&args.input_dir, &args.output_dir, &params)?;

    info!(
        "Icon resizing complete! Processed: {}, Skipped: {}, Errors: {}",
        report.processed, report.skipped, report.errors
    );

    Ok(())
}

use tracing::info;
use tracing_subscriber::EnvFilter;

use assetfit::api::process_batch;
use assetfit::{BatchParams, CanvasSize};

use super::args::CliArgs;
use super::errors::AppError;

fn init_logging(args: &CliArgs) {
    if let Some(directives) = args.log_filter.as_deref() {
        tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::new(directives))
            .with_writer(std::io::stderr)
            .init();
    } else if args.log {
        tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .with_writer(std::io::stderr)
            .init();
    }
}

fn parse_size(size: &str) -> Result<CanvasSize, AppError> {
    size.parse::<CanvasSize>().map_err(|e| match e {
        assetfit::Error::InvalidArgument { .. } => AppError::InvalidSize {
            size: size.to_string(),
        },
        other => AppError::Library(other),
    })
}

/// Job file, else category preset, else explicit inputs; flags override fields.
pub fn resolve_params(args: &CliArgs) -> Result<BatchParams, AppError> {
    let mut params = if let Some(config) = args.config.as_deref() {
        info!("Loading job file: {:?}", config);
        BatchParams::from_json_file(config)?
    } else if let Some(category) = args.category {
        BatchParams::for_category(category)
    } else {
        if args.inputs.is_empty() {
            return Err(AppError::MissingArgument {
                arg: "--category, --config or --input".to_string(),
            });
        }
        let output_dir = args.output_dir.clone().ok_or(AppError::MissingArgument {
            arg: "--output-dir".to_string(),
        })?;
        BatchParams {
            inputs: Vec::new(),
            output_dir,
            size: CanvasSize::default(),
            filter: Default::default(),
        }
    };

    if !args.inputs.is_empty() {
        params.inputs = args.inputs.clone();
    }
    if let Some(output_dir) = &args.output_dir {
        params.output_dir = output_dir.clone();
    }
    if let Some(size) = args.size.as_deref() {
        params.size = parse_size(size)?;
    }
    if let Some(filter) = args.filter {
        params.filter = filter;
    }

    params.validate()?;
    Ok(params)
}

pub fn run(args: CliArgs) -> Result<(), Box<dyn std::error::Error>> {
    init_logging(&args);

    let params = resolve_params(&args)?;

    if args.dump_config {
        println!("{}", serde_json::to_string_pretty(&params).map_err(AppError::from)?);
        return Ok(());
    }

    let report = process_batch(&params).map_err(AppError::from)?;
    info!("Processed: {}", report.processed());

    println!(
        "Resizing complete. Images saved to: {}",
        report.output_dir.display()
    );
    Ok(())
}

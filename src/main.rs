use anyhow::Result;
use clap::Parser;
use invertir::cli::{Cli, OutputFormat};
use invertir::metrics::JsonReport;
use invertir::runner::{BenchConfig, BenchRunner};
use tracing_subscriber::EnvFilter;

/// Initialize tracing subscriber for debug output
fn init_tracing(debug: bool) {
    if debug {
        tracing_subscriber::fmt()
            .with_env_filter(
                EnvFilter::from_default_env().add_directive(tracing::Level::TRACE.into()),
            )
            .with_writer(std::io::stderr)
            .init();
    }
}

fn main() -> Result<()> {
    let args = Cli::parse();

    // Validate parameter ranges up front, before touching the filesystem
    if args.size_bytes == 0 {
        anyhow::bail!("Invalid value for --size-bytes: 0 (must be >= 1)");
    }
    if args.iterations == 0 {
        anyhow::bail!("Invalid value for --iterations: 0 (must be >= 1)");
    }

    // Initialize tracing if --debug flag is set
    init_tracing(args.debug);

    let config = BenchConfig::new()
        .with_data_size(args.size_bytes)
        .with_iterations(args.iterations)
        .with_workspace_dir(args.dir);
    let metrics = BenchRunner::new(config).run()?;

    match args.format {
        OutputFormat::Text => println!("\n{}", metrics.render_text()),
        OutputFormat::Json => println!(
            "{}",
            serde_json::to_string_pretty(&JsonReport::from(&metrics))?
        ),
    }

    Ok(())
}

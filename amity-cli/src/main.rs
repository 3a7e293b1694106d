use amity_cli::args::Cli;
use amity_cli::{AmityCliContext, handle_command, output_error_json};
use clap::Parser;
use tracing::Level;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli_args = Cli::parse();

    // Determine output format - priority: env var > cli arg > default
    let output_format = std::env::var("AMITY_OUTPUT").unwrap_or_else(|_| cli_args.output.clone());

    let is_quiet = cli_args.quiet
        || std::env::var("AMITY_QUIET")
            .map(|v| v == "true" || v == "1")
            .unwrap_or(false);

    // JSON output implies quiet so stdout stays machine readable
    let log_level = if is_quiet || output_format == "json" {
        Level::ERROR
    } else if cli_args.verbose {
        Level::DEBUG
    } else {
        Level::WARN
    };

    tracing_subscriber::fmt()
        .with_max_level(log_level)
        .with_writer(std::io::stderr)
        .init();

    let result = async {
        let ctx = AmityCliContext::new(cli_args.store, cli_args.min, cli_args.max).await?;
        handle_command(cli_args.command, &ctx, &output_format).await
    }
    .await;

    if let Err(e) = result {
        output_error_json(&e, &output_format);
        std::process::exit(1);
    }

    Ok(())
}

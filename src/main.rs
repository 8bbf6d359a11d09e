use clap::Parser;
use field_detection::cli::commands::{cmd_classify, cmd_fill};
use field_detection::cli::config::{Cli, Commands, load_config};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let config = load_config(cli.config.as_deref());

    // Resolve trace path: CLI > config
    let trace_path = cli.trace.as_deref().or(config.trace.path.as_deref());

    match cli.command {
        Commands::Classify {
            snapshot,
            format,
            output,
        } => {
            cmd_classify(
                &snapshot,
                &format,
                output.as_deref(),
                cli.verbose,
                &config,
                trace_path,
            )?;
        }
        Commands::Fill {
            snapshot,
            format,
            output,
        } => {
            let offered = cmd_fill(
                &snapshot,
                &format,
                output.as_deref(),
                cli.verbose,
                &config,
                trace_path,
            )?;
            if !offered {
                std::process::exit(1);
            }
        }
    }

    Ok(())
}

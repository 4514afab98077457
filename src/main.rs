use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;
use transcript_normalizer::cli::{
    handle_correct_command, handle_encode_command, handle_normalize_command,
    handle_replace_command, handle_validate_command, load_config, Cli, CliCommand,
};

fn main() -> Result<()> {
    let cli = Cli::parse();
    let log_level = if cli.verbose { "debug" } else { "info" };
    let env_filter = EnvFilter::try_new(log_level).unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    let config_path = cli.config.as_deref();
    match cli.command {
        CliCommand::Normalize(args) => handle_normalize_command(args, &load_config(config_path)?),
        CliCommand::Replace(args) => handle_replace_command(args, &load_config(config_path)?),
        CliCommand::Correct(args) => handle_correct_command(args, &load_config(config_path)?),
        CliCommand::Encode(args) => handle_encode_command(args, &load_config(config_path)?),
        CliCommand::Validate(args) => handle_validate_command(args),
        CliCommand::Version => {
            println!("transcript-normalizer {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
    }
}

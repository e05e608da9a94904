use clap::Parser;
use tracing_subscriber::EnvFilter;
use wfdoc_runner::{execute_fix, execute_validate, Cli, Commands};

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let result = match cli.command {
        Commands::Validate(command) => execute_validate(&command),
        Commands::Fix(command) => execute_fix(&command),
    };

    match result {
        Ok(output) => {
            println!("{}", output.rendered);
            std::process::exit(output.exit_code);
        }
        Err(error) => {
            eprintln!("{error}");
            std::process::exit(1);
        }
    }
}

#[cfg(test)]
#[path = "main_test.rs"]
mod tests;

use std::io;
use std::process::ExitCode;

use clap::Parser;
use tracing::debug;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use chatquery::{read_query, Config, Dispatcher, Error};

#[derive(Parser)]
#[command(name = "chatquery")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Log request details to stderr
    #[arg(short, long)]
    verbose: bool,

    /// Model to ask instead of the configured one
    #[arg(short, long)]
    model: Option<String>,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    // RUST_LOG wins over --verbose when set
    let level = if cli.verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .finish();
    if let Err(e) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("Error: failed to install logger: {e}");
        return ExitCode::FAILURE;
    }

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            if let Some(message) = e.remote_message() {
                debug!(status = ?e.status(), "remote said: {message}");
            }
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<(), Error> {
    let mut config = Config::from_env()?;
    if let Some(model) = cli.model {
        config = config.with_model(model)?;
    }
    debug!(?config, "configuration resolved");

    let query = read_query(io::stdin().lock(), io::stdout())?;

    let answer = Dispatcher::new(&config)
        .dispatch(&query, &config.credential)
        .await?;
    println!("{answer}");

    Ok(())
}

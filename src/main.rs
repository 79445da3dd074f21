use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::info;

use feline_showcase::config::Config;
use feline_showcase::driver::{self, Command, Outcome};
use feline_showcase::fact_source::HttpFactSource;
use feline_showcase::logging::init_tracing;
use feline_showcase::preference::FilePreferenceStore;
use feline_showcase::ui::{Session, SessionDeps};

#[derive(Debug, Parser)]
#[command(name = "feline-showcase", about = "Drive the showcase interaction core from stdin")]
struct Args {
    /// Config file (defaults to the platform config directory).
    #[arg(long)]
    config: Option<PathBuf>,

    /// Override the fact service endpoint.
    #[arg(long)]
    fact_url: Option<String>,

    /// Start with gallery auto-advance switched off.
    #[arg(long)]
    no_auto_advance: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };
    apply_overrides(&mut config, &args);

    if let Some(log_file) = init_tracing(&config.logging) {
        info!(log_file = %log_file.display(), fact_url = %config.fact.url, "showcase starting");
    }

    let deps = SessionDeps {
        fact_source: Arc::new(HttpFactSource::new(&config.fact).context("fact source")?),
        preferences: Arc::new(FilePreferenceStore::new(config.preferences_path())),
    };
    let mut session = Session::new(&config, deps)?;

    println!("{}", driver::HELP);
    println!("{}", driver::render_snapshot(&session));

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        tokio::select! {
            line = lines.next_line() => {
                let Some(line) = line? else { break };
                match line.parse::<Command>() {
                    Ok(command) => match driver::apply(&mut session, command) {
                        Outcome::Snapshot(snapshot) => println!("{}", snapshot),
                        Outcome::Message(message) => println!("{}", message),
                        Outcome::Quit => break,
                    },
                    Err(err) => println!("{}", err),
                }
            }
            Some(event) = session.next_event() => {
                if session.handle_event(event) {
                    println!("{}", driver::render_snapshot(&session));
                }
            }
            _ = tokio::signal::ctrl_c() => break,
        }
    }

    session.shutdown();
    Ok(())
}

fn apply_overrides(config: &mut Config, args: &Args) {
    if let Some(url) = &args.fact_url {
        config.fact.url = url.clone();
    }
    if args.no_auto_advance {
        config.gallery.auto_advance = false;
    }
}

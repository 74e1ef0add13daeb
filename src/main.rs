use clap::Parser;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, fmt};

use wordbook::cli::Args;
use wordbook::commands::Session;
use wordbook::config::ConfigFile;

fn init_tracing() {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn,wordbook=info".into()))
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing();

    let args = Args::parse();
    let config = match &args.config {
        Some(path) => ConfigFile::load_from(path)?,
        None => ConfigFile::load()?,
    };
    let db = config.open_database(args.db)?;
    let session = Session::with_policy(&db, config.import.on_duplicate);

    let output = args.command.run(&session, args.format)?;
    println!("{}", output);
    Ok(())
}

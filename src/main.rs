use clap::Parser;

use dirwatch::cli::{Cli, commands};
use dirwatch::logging;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let settings = commands::load_settings(&cli);

    if cli.show_config {
        return commands::run_show_config(&settings);
    }

    if cli.init_config {
        commands::run_init_config(&cli, &settings)?;
        return Ok(());
    }

    logging::init_with_config(&settings.logging);
    dirwatch::log_event!("dirwatch", "start", "v{}", env!("CARGO_PKG_VERSION"));

    commands::run_watch(&cli, &settings).await
}

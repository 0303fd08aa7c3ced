use anyhow::Result;
use clap::Parser;
use dotenvy::dotenv;
use tracing::debug;

use autocontrol::cli::{self, Cli};
use autocontrol::config::environment::EnvironmentConfig;

fn main() -> Result<()> {
    // Cargar variables de entorno
    dotenv().ok();

    let config = EnvironmentConfig::default();

    // Configurar logging: en desarrollo se muestra todo, en uso normal solo
    // advertencias
    tracing_subscriber::fmt()
        .with_max_level(if config.is_development() {
            tracing::Level::DEBUG
        } else {
            tracing::Level::WARN
        })
        .init();

    debug!("AutoControl - datos en {}", config.data_file.display());

    let cli = Cli::parse();
    cli::run(cli, &config)?;

    Ok(())
}

mod config;
mod data;
mod error;
mod generators;
mod model;
mod service;
mod startup;
mod util;

use dioxus_logger::tracing::{self, Level};

use crate::{
    config::Config,
    error::{error_chain, AppError},
    service::generator::{run_all, GeneratorContext},
};

#[tokio::main(flavor = "current_thread")]
async fn main() {
    dotenvy::dotenv().ok();

    if let Err(e) = run().await {
        // Errors raised before the configured logger exists still get printed.
        startup::init_logger(Level::ERROR).ok();
        tracing::error!("{}", error_chain(&e));
        std::process::exit(1);
    }
}

async fn run() -> Result<(), AppError> {
    let config = Config::from_env()?;
    startup::init_logger(config.log_level)?;

    let directory = startup::setup_directory(&config);
    let registry = generators::registry()?;

    tracing::info!(
        "Generating {} files for guilds {:?} into {}",
        registry.len(),
        config.guild_ids,
        config.output_dir.display()
    );

    let context = GeneratorContext {
        directory: &directory,
        guild_ids: &config.guild_ids,
        output_dir: &config.output_dir,
    };
    let report = run_all(&registry, &context).await?;

    let bytes: usize = report.files.iter().map(|file| file.bytes).sum();
    tracing::info!("Generated {} files ({} bytes)", report.files.len(), bytes);

    Ok(())
}

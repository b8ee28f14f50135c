use anyhow::Result;
use dash_group_input::config::Config;
use dash_group_input::session::serve;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let config = Config::from_args_and_env()?;

    env_logger::Builder::new()
        .parse_filters(&config.log_level)
        .init();

    if let Some(path) = &config.config_path {
        log::debug!("Loaded config from {}", path.display());
    }

    serve(config).await
}

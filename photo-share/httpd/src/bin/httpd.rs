use {
    clap::Parser,
    config_parser::parse_config,
    photo_share_httpd::{config::Config, context::Context, server::run_server},
    sentry::integrations::tracing::layer as sentry_layer,
    std::path::PathBuf,
    tracing::metadata::LevelFilter,
    tracing_subscriber::{fmt, prelude::*, registry},
};

#[derive(Parser)]
#[command(author, version, about, next_display_order = None)]
struct Cli {
    /// Path to the TOML config file, missing files fall back to defaults
    #[arg(long, default_value = "photo-share.toml")]
    config: PathBuf,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Parse CLI arguments.
    let cli = Cli::parse();

    // Load `.env` so its variables can override the config file.
    dotenvy::dotenv().ok();

    // Parse the config file.
    let cfg: Config = parse_config(&cli.config)?;

    let max_level = cfg.log_level.parse::<LevelFilter>()?;

    // Dropping the guard flushes pending events, keep it for the whole run.
    let _sentry_guard = if cfg.sentry.enabled {
        let guard = sentry::init((cfg.sentry.dsn.clone(), sentry::ClientOptions {
            environment: Some(cfg.sentry.environment.clone().into()),
            release: sentry::release_name!(),
            sample_rate: cfg.sentry.sample_rate,
            traces_sample_rate: cfg.sentry.traces_sample_rate,
            ..Default::default()
        }));

        registry()
            .with(fmt::layer().with_filter(max_level))
            .with(sentry_layer())
            .init();

        tracing::info!("Sentry initialized");

        Some(guard)
    } else {
        // Set up tracing.
        tracing_subscriber::fmt().with_max_level(max_level).init();

        None
    };

    let app_ctx = Context::from_config(&cfg).await?;

    if app_ctx.development {
        tracing::warn!("Development mutations are enabled, anyone can log in as any user");
    }

    run_server(&cfg.httpd, app_ctx).await?;

    Ok(())
}

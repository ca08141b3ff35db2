use std::fs::File;
use std::sync::Arc;

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use crate::{
    adapters::{http::app_state::AppState, persistence::PostgresPersistence},
    infra::config::AppConfig,
    use_cases::waitlist::{WaitlistRepo, WaitlistUseCases},
};

pub async fn init_app_state() -> anyhow::Result<AppState> {
    init_tracing();

    let config = AppConfig::from_env();

    let waitlist_repo: Option<Arc<dyn WaitlistRepo>> = match &config.database_url {
        Some(url) => {
            let persistence = PostgresPersistence::connect(url).await?;
            Some(Arc::new(persistence) as Arc<dyn WaitlistRepo>)
        }
        None => {
            tracing::warn!(
                "DATABASE_URL not set, waitlist signups will be logged but not stored"
            );
            None
        }
    };

    let waitlist_use_cases = WaitlistUseCases::new(waitlist_repo);

    Ok(AppState {
        config: Arc::new(config),
        waitlist_use_cases: Arc::new(waitlist_use_cases),
    })
}

pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "profitpulse_api=debug,tower_http=debug".into());

    // Console (pretty logs)
    let console_layer = fmt::layer()
        .with_target(false) // don't show target (module path)
        .with_level(true) // show log level
        .pretty(); // human-friendly, with colors

    // File (structured JSON logs)
    let file = File::create("app.log").expect("cannot create log file");
    let json_layer = fmt::layer()
        .json()
        .with_writer(file)
        .with_current_span(true)
        .with_span_list(true);

    tracing_subscriber::registry()
        .with(filter)
        .with(console_layer)
        .with(json_layer)
        .try_init()
        .ok();
}

use dioxus_logger::tracing::{self, Level};

use obakit::{
    config::Config, model::fetch::CycleOutcome, service::agency::AgencyService, startup,
};

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    dioxus_logger::init(Level::INFO).expect("Failed to initialize logger");

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Configuration error: {}", e);
            std::process::exit(1);
        }
    };

    let app = startup::build_app_context(&config).unwrap();

    tracing::info!(
        "Loading agencies for region {} from {}",
        config.region_id,
        config.api_url
    );

    let orchestrator = AgencyService::for_app(&app)
        .await
        .unwrap()
        .into_orchestrator(|| tracing::debug!("Agencies updated"));

    if orchestrator.load().await == CycleOutcome::Cancelled {
        tracing::warn!("Agencies load was cancelled");
        return;
    }

    if let Some(e) = orchestrator.current_error() {
        tracing::error!("Failed to load agencies: {}", e);
        std::process::exit(1);
    }

    if let Some(Ok(result)) = orchestrator.outcome() {
        if result.is_offline {
            tracing::warn!("OneBusAway API unreachable, showing cached agencies");
        }

        for agency in result.data.unwrap_or_default() {
            tracing::info!("{} ({})", agency.name, agency.id);
        }
    }
}

use std::process::ExitCode;
use std::sync::Arc;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use top3_client::{
    render, Config, HttpRecommendationProvider, Phase, RecommendationController, RenderOptions,
};

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    let config = Config::from_env()?;

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "top3_client=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let keyword = std::env::args().skip(1).collect::<Vec<_>>().join(" ");

    let provider = Arc::new(HttpRecommendationProvider::from_config(&config)?);
    let controller = RecommendationController::new(provider, config.request_timeout());

    tracing::info!(endpoint = %config.endpoint_url(), "Submitting keyword");
    controller.submit(&keyword).await;

    let state = controller.state();
    println!("{}", render(&state, &RenderOptions::from(&config)));

    Ok(if state.phase() == Phase::Error {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    })
}

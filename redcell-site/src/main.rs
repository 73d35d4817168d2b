use redcell_site::{LogFormat, SiteConfig, create_app};
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

const DEFAULT_FILTER: &str = "redcell_site=debug,wizard_flow=debug,tower_http=debug";

fn init_tracing(format: LogFormat) {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| DEFAULT_FILTER.into());
    let registry = tracing_subscriber::registry().with(env_filter);

    match format {
        LogFormat::Pretty => registry
            .with(fmt::layer().compact().with_target(false))
            .init(),
        // The current request span carries the correlation id
        LogFormat::Json => registry
            .with(
                fmt::layer()
                    .json()
                    .with_current_span(true)
                    .with_span_list(false)
                    .flatten_event(true),
            )
            .init(),
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = SiteConfig::from_env()?;
    init_tracing(config.log_format);

    if config.maps_api_key.is_none() {
        info!("GOOGLE_MAPS_API_KEY not set, contact page map is disabled");
    }

    let bind_address = config.bind_address();
    let site_url = config.site_url.clone();
    let app = create_app(config);

    let listener = TcpListener::bind(&bind_address).await?;
    let addr = listener.local_addr()?;

    info!("Red Cell Advisory site starting on {}", addr);
    info!("Canonical origin: {}", site_url);
    info!("Health check endpoint: http://{}/health", addr);
    info!("Intake endpoint: POST http://{}/api/intake/submit", addr);

    axum::serve(listener, app).await?;

    Ok(())
}

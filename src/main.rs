use monzo_sweeper::app_state::AppState;
use monzo_sweeper::handlers::create_router;
use monzo_sweeper::monzo::MonzoApi;
use monzo_sweeper::settings::Settings;
use tokio::signal;
use tracing::error;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    // initialize tracing, RUST_LOG overrides the default level
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // load settings, every required variable must be present
    let settings = match Settings::from_env() {
        Ok(settings) => settings,
        Err(e) => {
            error!("Error loading settings: {:#?}", e);
            std::process::exit(1);
        }
    };
    info!("Settings loaded: {:?}", settings);

    // init Monzo APIs caller
    let monzo_api = match MonzoApi::from_settings(&settings) {
        Ok(api) => api,
        Err(e) => {
            error!("Error creating MonzoApi: {:#?}", e);
            std::process::exit(1);
        }
    };

    let addr = format!("0.0.0.0:{}", settings.port);
    let app_state = AppState::new(settings, monzo_api);
    let sweep_tasks = app_state.sweep_tasks.clone();
    let app = create_router(app_state);

    let listener = match tokio::net::TcpListener::bind(&addr).await {
        Ok(listener) => listener,
        Err(e) => {
            error!("Error binding {}: {:#?}", addr, e);
            std::process::exit(1);
        }
    };
    info!("Listening on {}", addr);

    if let Err(e) = axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
    {
        error!("Server error: {:#?}", e);
    }

    // drain sweeps whose webhook was already answered
    sweep_tasks.close();
    if !sweep_tasks.is_empty() {
        info!("Waiting for {} in-flight sweeps to finish.", sweep_tasks.len());
    }
    sweep_tasks.wait().await;
    info!("Shut down.");
}

async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C, shutting down.");
        },
        _ = terminate => {
            info!("Received terminate signal, shutting down.");
        },
    }
}

use crate::cli::ServeArgs;
use crate::infra::{validation_policy, AppState, InMemoryRegistrationStore};
use crate::routes::with_registration_routes;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use event_housing::config::AppConfig;
use event_housing::error::AppError;
use event_housing::registration::{
    CsvRoster, RegistrationService, RegistrationStore, SqliteRegistrationStore,
};
use event_housing::telemetry;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tracing::info;

pub(crate) async fn run(mut args: ServeArgs) -> Result<(), AppError> {
    let mut config = AppConfig::load()?;

    if let Some(host) = args.host.take() {
        config.server.host = host;
    }
    if let Some(port) = args.port.take() {
        config.server.port = port;
    }
    if let Some(roster) = args.roster.take() {
        config.registration.roster_path = roster;
    }
    if let Some(database) = args.database.take() {
        config.registration.database_path = Some(database);
    }
    config.registration.strict_validation |= args.strict;

    telemetry::init(&config.telemetry)?;

    let roster = Arc::new(CsvRoster::new(config.registration.roster_path.clone()));
    match config.registration.database_path.clone() {
        Some(path) => {
            let store = Arc::new(SqliteRegistrationStore::open(&path)?);
            info!(database = %path.display(), "registrations persisted to sqlite");
            serve(config, roster, store).await
        }
        None => {
            info!("no database configured, registrations kept in memory");
            serve(config, roster, Arc::new(InMemoryRegistrationStore::default())).await
        }
    }
}

async fn serve<S>(config: AppConfig, roster: Arc<CsvRoster>, store: Arc<S>) -> Result<(), AppError>
where
    S: RegistrationStore + 'static,
{
    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let readiness_flag = Arc::new(AtomicBool::new(false));
    let app_state = AppState {
        readiness: readiness_flag.clone(),
        metrics: Arc::new(prometheus_handle),
    };

    let policy = validation_policy(config.registration.strict_validation);
    let service = Arc::new(RegistrationService::with_policy(roster, store, policy));

    let app = with_registration_routes(service)
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(
        ?config.environment,
        %addr,
        roster = %config.registration.roster_path.display(),
        strict = config.registration.strict_validation,
        "registration service ready"
    );

    axum::serve(listener, app).await?;
    Ok(())
}

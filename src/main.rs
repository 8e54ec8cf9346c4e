// src/main.rs

use dotenvy::dotenv;
use sqlx::postgres::PgPoolOptions;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use catalog_api::config::{AppConfig, CatalogStore};
use catalog_api::routes::{build_router, cors_layer};
use catalog_api::seed::demo_catalog;
use catalog_api::state::AppState;

#[tokio::main]
async fn main() {
    dotenv().ok();

    // Inicjalizacja systemu logowania (tracing)
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "catalog_api=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Inicjalizacja serwera...");

    let config = match AppConfig::from_env() {
        Ok(config) => config,
        Err(err) => {
            tracing::error!("Nieprawidłowa konfiguracja: {}", err);
            std::process::exit(1);
        }
    };

    let app_state = match config.store {
        CatalogStore::Postgres => {
            let database_url = config.database_url.as_deref().unwrap_or_default();
            let pool = match PgPoolOptions::new()
                .max_connections(config.database_max_connections)
                .connect(database_url)
                .await
            {
                Ok(pool) => {
                    tracing::info!("Pomyślnie połączono z bazą danych");
                    pool
                }
                Err(err) => {
                    tracing::error!("Nie można połączyć z bazą danych: {:?}", err);
                    std::process::exit(1);
                }
            };
            AppState::postgres(pool, config.api_url.clone())
        }
        CatalogStore::Memory => {
            tracing::warn!("Katalog w pamięci (CATALOG_STORE=memory), dane przykładowe");
            AppState::in_memory(demo_catalog(), config.api_url.clone())
        }
    };

    let app = build_router(Arc::new(app_state)).layer(cors_layer(&config.cors_allowed_origins));

    let addr: SocketAddr = match format!("{}:{}", config.host, config.port).parse() {
        Ok(addr) => addr,
        Err(e) => {
            tracing::error!("Nieprawidłowy adres {}:{}: {}", config.host, config.port, e);
            std::process::exit(1);
        }
    };
    tracing::info!("Serwer nasłuchuje na {}", addr);

    let listener = match TcpListener::bind(addr).await {
        Ok(listener) => listener,
        Err(e) => {
            tracing::error!("Nie można powiązać adresu {}: {}", addr, e);
            return;
        }
    };

    if let Err(e) = axum::serve(listener, app.into_make_service()).await {
        tracing::error!("Błąd serwera: {}", e);
    }
}

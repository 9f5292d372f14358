use product_catalog::prelude::*;
use std::time::Duration;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    tracing::info!("Starting product catalog...");

    let config = CatalogConfig::from_service(&ConfigService::new())?;

    #[cfg(feature = "sea-orm-db")]
    {
        if let Some(url) = config.database_url.as_deref() {
            use product_catalog::modules::product::SeaOrmProductRepository;

            let repository = Arc::new(SeaOrmProductRepository::connect(url).await?);
            return serve(config, repository, "SeaOrmProductRepository").await;
        }
    }

    #[cfg(not(feature = "sea-orm-db"))]
    {
        if config.database_url.is_some() {
            tracing::warn!("DATABASE_URL is set but the sea-orm-db feature is disabled; using the in-memory store");
        }
    }

    let repository =
        Arc::new(InMemoryProductRepository::new().with_seed_file(config.seed_file.clone()));
    serve(config, repository, "InMemoryProductRepository").await
}

async fn serve<R>(config: CatalogConfig, repository: Arc<R>, name: &str) -> anyhow::Result<()>
where
    R: ProductRepository + OnModuleInit + OnModuleDestroy + 'static,
{
    let container = build_container(config.clone(), Arc::clone(&repository))?;

    let app = Application::builder()
        .container(container)
        .register_lifecycle(repository, name)
        .init_timeout(Duration::from_secs(30))
        .build()
        .await?;

    let router = build_router(Arc::clone(app.container()));
    let listener = tokio::net::TcpListener::bind(config.bind_address()).await?;
    tracing::info!(address = %config.bind_address(), "Server listening");

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Initiating graceful shutdown...");
    app.shutdown().await?;
    tracing::info!("Server stopped");
    Ok(())
}

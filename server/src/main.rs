mod config;
mod db;
mod routes;
mod services;
mod state;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    let config = config::Config::from_env().expect("configuration");
    let port = config.port;

    let pool = db::init_pool(&config.database_url)
        .await
        .expect("database init failed");

    if routes::auth::env_bool("SEED_DEMO_USER").unwrap_or(false) {
        services::auth::seed_demo_user(&pool)
            .await
            .expect("demo user seed failed");
        tracing::info!("demo user seeded");
    }

    if routes::auth::env_bool("SEED_DEMO_DATA").unwrap_or(false) {
        services::seed::seed_demo_data(&pool)
            .await
            .expect("demo data seed failed");
    }

    let state = state::AppState::new(pool, config);
    let app = routes::app(state).expect("router assembly failed");

    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{port}"))
        .await
        .expect("failed to bind");

    tracing::info!(%port, "scheduler listening");
    axum::serve(listener, app).await.expect("server failed");
}

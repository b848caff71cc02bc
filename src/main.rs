use biblio_lending::{
    adapters::postgres::{PostgresBookStore, PostgresLoanStore, PostgresMemberStore},
    api::{handlers::AppState, router::create_router},
    application::loan::ServiceDependencies,
};
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "biblio_lending=debug,tower_http=debug,axum=trace".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Database connection URL
    let database_url =
        std::env::var("DATABASE_URL").unwrap_or_else(|_| "postgres://localhost/biblio".into());

    tracing::info!("Database URL: {}", database_url);

    // Initialize database connection pool
    // The pool is the single store handle: opened here at process start,
    // closed when the process shuts down.
    let pool = sqlx::postgres::PgPoolOptions::new()
        .max_connections(5)
        .connect(&database_url)
        .await
        .expect("Failed to connect to database");

    // Apply schema migrations
    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .expect("Failed to run migrations");

    // Initialize adapters
    let book_store = Arc::new(PostgresBookStore::new(pool.clone()));
    let member_store = Arc::new(PostgresMemberStore::new(pool.clone()));
    let loan_store = Arc::new(PostgresLoanStore::new(pool.clone()));

    // Create service dependencies
    let service_deps = ServiceDependencies::new(book_store, member_store, loan_store);

    // Create application state
    let app_state = Arc::new(AppState { service_deps });

    // Create router
    let app = create_router(app_state);

    // Server configuration
    let port = std::env::var("PORT").unwrap_or_else(|_| "3000".into());
    let addr = format!("0.0.0.0:{}", port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .expect("Failed to bind to address");

    tracing::info!("Server listening on {}", addr);

    // Start server
    axum::serve(listener, app)
        .await
        .expect("Failed to start server");
}

#[cfg(test)]
pub mod test_utils {
    use crate::router::create_router;
    use crate::schemas::AppState;
    use axum::Router;
    use migration::{Migrator, MigratorTrait};
    use moka::future::Cache;
    use sea_orm::{ActiveModelTrait, ConnectionTrait, Database, DatabaseConnection, Set};
    use tracing::Level;
    use tracing_subscriber::FmtSubscriber;

    /// Create an in-memory SQLite database for testing
    pub async fn setup_test_db() -> DatabaseConnection {
        let db = Database::connect("sqlite::memory:")
            .await
            .expect("Failed to connect to in-memory database");

        // SQLite does not enforce foreign keys unless told to.
        db.execute_unprepared("PRAGMA foreign_keys = ON;")
            .await
            .expect("Failed to enable foreign keys");

        // Run migrations
        Migrator::up(&db, None)
            .await
            .expect("Failed to run migrations");

        db
    }

    /// Create AppState for testing
    pub async fn setup_test_app_state() -> AppState {
        let db = setup_test_db().await;

        // Create reference teams and players for the tests to use
        let celtics = model::entities::team::ActiveModel {
            name: Set("Boston Celtics".to_string()),
            abbreviation: Set(Some("BOS".to_string())),
            ..Default::default()
        }
        .insert(&db)
        .await
        .expect("Failed to create test team 1");

        let lakers = model::entities::team::ActiveModel {
            name: Set("Los Angeles Lakers".to_string()),
            abbreviation: Set(Some("LAL".to_string())),
            ..Default::default()
        }
        .insert(&db)
        .await
        .expect("Failed to create test team 2");

        model::entities::player::ActiveModel {
            name: Set("Jayson Tatum".to_string()),
            team_id: Set(Some(celtics.id)),
            ..Default::default()
        }
        .insert(&db)
        .await
        .expect("Failed to create test player 1");

        model::entities::player::ActiveModel {
            name: Set("LeBron James".to_string()),
            team_id: Set(Some(lakers.id)),
            ..Default::default()
        }
        .insert(&db)
        .await
        .expect("Failed to create test player 2");

        let cache = Cache::new(100);

        AppState { db, cache }
    }

    /// Initialize tracing for tests with output to STDERR.
    ///
    /// The log level is determined by the RUST_LOG environment variable,
    /// defaulting to WARN if not set.
    fn init_test_tracing() -> tracing::subscriber::DefaultGuard {
        let log_level = std::env::var("RUST_LOG")
            .ok()
            .and_then(|level| match level.to_uppercase().as_str() {
                "ERROR" => Some(Level::ERROR),
                "WARN" => Some(Level::WARN),
                "INFO" => Some(Level::INFO),
                "DEBUG" => Some(Level::DEBUG),
                "TRACE" => Some(Level::TRACE),
                _ => None,
            })
            .unwrap_or(Level::WARN);

        let subscriber = FmtSubscriber::builder()
            .with_max_level(log_level)
            .with_writer(std::io::stderr)
            .finish();
        tracing::subscriber::set_default(subscriber)
    }

    /// Create axum app for testing
    pub async fn setup_test_app() -> Router {
        let _ = init_test_tracing();

        let state = setup_test_app_state().await;
        create_router(state)
    }
}

use std::env;
use std::time::Duration;

use diesel::pg::PgConnection;
use diesel::r2d2::{self, ConnectionManager, Pool};
use diesel_migrations::{embed_migrations, EmbeddedMigrations, MigrationHarness};

use crate::log_info;
use crate::shared::errors::AppError;
use crate::shared::utils::logger::LogContext;

pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations");

pub type DbPool = Pool<ConnectionManager<PgConnection>>;
pub type DbConnection = r2d2::PooledConnection<ConnectionManager<PgConnection>>;

/// Connection provider. Every repository call checks one connection out
/// of the pool for the duration of that single logical operation.
pub struct Database {
    pool: DbPool,
}

impl Database {
    /// Build the pool from the DATABASE_URL environment variable
    /// (a `.env` file is honored if present).
    pub fn new() -> Result<Self, AppError> {
        dotenvy::dotenv().ok();
        let database_url = env::var("DATABASE_URL")?;
        Self::with_url(&database_url)
    }

    /// Build the pool from an explicit connection string.
    pub fn with_url(database_url: &str) -> Result<Self, AppError> {
        let manager = ConnectionManager::<PgConnection>::new(database_url);

        let pool = r2d2::Pool::builder()
            // Sized for a desktop app with moderate concurrent usage
            .max_size(10)
            .min_idle(Some(2))
            .connection_timeout(Duration::from_secs(10))
            .idle_timeout(Some(Duration::from_secs(300)))
            .test_on_check_out(true)
            .build(manager)
            .map_err(|e| {
                AppError::DatabaseError(format!("Failed to create connection pool: {}", e))
            })?;

        log_info!(
            "Database connection pool initialized with max_size: {}",
            pool.max_size()
        );

        Ok(Self { pool })
    }

    pub fn get_connection(&self) -> Result<DbConnection, AppError> {
        match self.pool.get() {
            Ok(conn) => Ok(conn),
            Err(e) => {
                LogContext::error_with_context(
                    &e,
                    "Failed to acquire database connection from pool",
                );
                Err(AppError::from(e))
            }
        }
    }

    /// Apply any pending embedded migrations.
    pub fn run_migrations(&self) -> Result<(), AppError> {
        let mut conn = self.get_connection()?;
        conn.run_pending_migrations(MIGRATIONS)
            .map_err(|e| AppError::DatabaseError(format!("Migration failed: {}", e)))?;
        Ok(())
    }
}

use crate::db::models::{DbPortfolio, NewPortfolio};
use crate::db::schema::SQLITE_INIT;
use crate::error::HubError;
use sqlx::pool::PoolConnection;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::{Pool, Sqlite};
use std::str::FromStr;
use tracing::{debug, info};

pub type SqlitePool = Pool<Sqlite>;

const SELECT_COLUMNS: &str =
    "SELECT id, public_id, name, bio, github, telegram, avatar, skills FROM portfolios";

/// Public id of the demo record inserted by [`PortfolioStorage::seed_demo`].
pub const DEMO_PUBLIC_ID: &str = "123";

/// Portfolio table access.
///
/// Every operation checks out its own connection and hands it back when the
/// connection guard drops, so no handle outlives the call that needed it.
#[derive(Clone)]
pub struct PortfolioStorage {
    pool: SqlitePool,
}

impl PortfolioStorage {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Open (creating if missing) the database at `database_url`.
    pub async fn connect(database_url: &str) -> Result<Self, HubError> {
        let connect_opts = SqliteConnectOptions::from_str(database_url)?.create_if_missing(true);
        let pool = SqlitePoolOptions::new().connect_with(connect_opts).await?;
        Ok(Self::new(pool))
    }

    async fn acquire(&self) -> Result<PoolConnection<Sqlite>, HubError> {
        Ok(self.pool.acquire().await?)
    }

    /// Initialize the schema by executing the bundled DDL.
    pub async fn init_schema(&self) -> Result<(), HubError> {
        let mut conn = self.acquire().await?;
        for stmt in SQLITE_INIT.split(';') {
            let s = stmt.trim();
            if s.is_empty() {
                continue;
            }
            sqlx::query(s).execute(&mut *conn).await?;
        }
        Ok(())
    }

    /// Insert a new record. Returns the internal row id.
    pub async fn insert(&self, new: &NewPortfolio) -> Result<i64, HubError> {
        let mut conn = self.acquire().await?;
        let result = sqlx::query(
            r#"
            INSERT INTO portfolios (public_id, name, bio, github, telegram, avatar, skills)
            VALUES (?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(&new.public_id)
        .bind(&new.name)
        .bind(&new.bio)
        .bind(&new.github)
        .bind(&new.telegram)
        .bind(&new.avatar)
        .bind(&new.skills)
        .execute(&mut *conn)
        .await;

        match result {
            Ok(done) => {
                let id = done.last_insert_rowid();
                debug!(id, public_id = %new.public_id, "portfolio inserted");
                Ok(id)
            }
            Err(sqlx::Error::Database(db_err)) if db_err.is_unique_violation() => {
                Err(HubError::PublicIdCollision(new.public_id.clone()))
            }
            Err(e) => Err(e.into()),
        }
    }

    /// All records in insertion order.
    pub async fn list_all(&self) -> Result<Vec<DbPortfolio>, HubError> {
        let mut conn = self.acquire().await?;
        let rows = sqlx::query_as::<_, DbPortfolio>(&format!("{SELECT_COLUMNS} ORDER BY id"))
            .fetch_all(&mut *conn)
            .await?;
        Ok(rows)
    }

    pub async fn find_by_public_id(
        &self,
        public_id: &str,
    ) -> Result<Option<DbPortfolio>, HubError> {
        let mut conn = self.acquire().await?;
        let row = sqlx::query_as::<_, DbPortfolio>(&format!("{SELECT_COLUMNS} WHERE public_id = ?"))
            .bind(public_id)
            .fetch_optional(&mut *conn)
            .await?;
        Ok(row)
    }

    /// Insert the demo portfolio unless it already exists.
    pub async fn seed_demo(&self) -> Result<(), HubError> {
        let mut conn = self.acquire().await?;
        let done = sqlx::query(
            r#"
            INSERT OR IGNORE INTO portfolios (public_id, name, bio, skills, avatar)
            VALUES (?, ?, ?, ?, ?)
            "#,
        )
        .bind(DEMO_PUBLIC_ID)
        .bind("Данил Орлов")
        .bind("Frontend-разработчик")
        .bind("Python, HTML, Flask")
        .bind("uploads/placeholder.png")
        .execute(&mut *conn)
        .await?;
        if done.rows_affected() > 0 {
            info!(public_id = DEMO_PUBLIC_ID, "demo portfolio seeded");
        }
        Ok(())
    }
}

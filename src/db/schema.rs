//! SQL DDL for the portfolio storage.

/// SQLite schema with:
/// - `id` INTEGER PRIMARY KEY AUTOINCREMENT (internal row id)
/// - `public_id` UNIQUE (the externally addressable UUID)
/// - `skills` stored verbatim as a comma-separated list
pub const SQLITE_INIT: &str = r#"
CREATE TABLE IF NOT EXISTS portfolios (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    public_id TEXT UNIQUE NOT NULL,
    name TEXT NOT NULL,
    bio TEXT NOT NULL,
    github TEXT NULL,
    telegram TEXT NULL,
    avatar TEXT NULL,
    skills TEXT NOT NULL
);
"#;

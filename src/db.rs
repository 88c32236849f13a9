use anyhow::{Context, Result};
use sea_orm::{
    ConnectionTrait, Database, DatabaseConnection, DbBackend, Statement, TransactionTrait,
};
use std::path::{Path, PathBuf};
use tokio::fs;

pub type DbPool = sqlx::PgPool;
pub type OrmConn = DatabaseConnection;

pub const MIGRATIONS_DIR: &str = "migrations";

pub async fn create_orm_conn(database_url: &str) -> Result<DatabaseConnection> {
    let conn = Database::connect(database_url)
        .await
        .context("connecting to database")?;
    Ok(conn)
}

/// Splits a SQL script into single statements. Semicolons inside quoted
/// literals or `--` comments do not end a statement.
pub fn split_statements(sql: &str) -> Vec<String> {
    let mut statements = Vec::new();
    let mut current = String::new();
    let mut in_quote = false;
    let mut chars = sql.chars().peekable();

    while let Some(ch) = chars.next() {
        match ch {
            '\'' => {
                in_quote = !in_quote;
                current.push(ch);
            }
            '-' if !in_quote && chars.peek() == Some(&'-') => {
                for skipped in chars.by_ref() {
                    if skipped == '\n' {
                        current.push('\n');
                        break;
                    }
                }
            }
            ';' if !in_quote => {
                let stmt = current.trim();
                if !stmt.is_empty() {
                    statements.push(stmt.to_string());
                }
                current.clear();
            }
            _ => current.push(ch),
        }
    }

    let tail = current.trim();
    if !tail.is_empty() {
        statements.push(tail.to_string());
    }
    statements
}

async fn sql_files(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut entries = fs::read_dir(dir)
        .await
        .with_context(|| format!("reading {}", dir.display()))?;
    let mut files = Vec::new();
    while let Some(entry) = entries.next_entry().await? {
        let path = entry.path();
        if path.is_file() && path.extension().is_some_and(|ext| ext == "sql") {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}

/// Applies pending `migrations/*.sql` files in filename order, each in its
/// own transaction, and records them in `schema_migrations`. Returns the
/// names applied by this call.
pub async fn run_migrations(conn: &DatabaseConnection) -> Result<Vec<String>> {
    let backend = conn.get_database_backend();
    conn.execute(Statement::from_string(
        backend,
        "CREATE TABLE IF NOT EXISTS schema_migrations (\
            name TEXT PRIMARY KEY, \
            applied_at TIMESTAMPTZ NOT NULL DEFAULT now())",
    ))
    .await?;

    let mut applied = Vec::new();
    for file in sql_files(Path::new(MIGRATIONS_DIR)).await? {
        let name = file
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();

        let seen = conn
            .query_one(Statement::from_sql_and_values(
                backend,
                "SELECT 1 FROM schema_migrations WHERE name = $1",
                [name.clone().into()],
            ))
            .await?;
        if seen.is_some() {
            continue;
        }

        let sql = fs::read_to_string(&file).await?;
        let txn = conn.begin().await?;
        for stmt in split_statements(&sql) {
            txn.execute(Statement::from_string(backend, stmt))
                .await
                .with_context(|| format!("migration {name}"))?;
        }
        txn.execute(record_statement(backend, &name)).await?;
        txn.commit().await?;

        tracing::info!(migration = %name, "migration applied");
        applied.push(name);
    }

    Ok(applied)
}

fn record_statement(backend: DbBackend, name: &str) -> Statement {
    Statement::from_sql_and_values(
        backend,
        "INSERT INTO schema_migrations (name) VALUES ($1)",
        [name.into()],
    )
}

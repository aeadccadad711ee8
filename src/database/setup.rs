use anyhow::{Context, Result};
use rusqlite::Connection;

pub fn initialize_schema(conn: &Connection) -> Result<()> {
    let schema_sql = include_str!("schema.sql");
    execute_script(conn, schema_sql)?;

    log::info!("Database schema initialized");
    Ok(())
}

/// Drops every hypothetical player with its stats and recreates the tables.
/// Real player data is left untouched.
pub fn reset_hypotheticals(conn: &Connection) -> Result<()> {
    execute_script(
        conn,
        "DROP TABLE IF EXISTS HypotheticalStats; DROP TABLE IF EXISTS HypotheticalPlayers",
    )?;
    initialize_schema(conn)?;

    log::info!("Hypothetical player tables reset");
    Ok(())
}

fn execute_script(conn: &Connection, sql: &str) -> Result<()> {
    let statements = split_sql_statements(sql);

    for (idx, statement) in statements.iter().enumerate() {
        execute_sql(conn, statement)
            .with_context(|| format!("Failed to execute statement {}", idx + 1))?;
    }
    Ok(())
}

fn split_sql_statements(sql: &str) -> Vec<String> {
    sql.split(';')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}

fn execute_sql(conn: &Connection, sql: &str) -> Result<()> {
    conn.execute(sql, [])
        .context("Failed to execute SQL statement")
        .map(|_| ())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_sql_statements_drops_blanks() {
        let statements = split_sql_statements("CREATE TABLE a (x);\n\n ;CREATE TABLE b (y)\n");
        assert_eq!(statements, vec!["CREATE TABLE a (x)", "CREATE TABLE b (y)"]);
    }

    #[test]
    fn test_initialize_schema_is_idempotent() {
        let conn = Connection::open_in_memory().unwrap();
        initialize_schema(&conn).unwrap();
        initialize_schema(&conn).unwrap();

        let tables: i64 = conn
            .query_row(
                "SELECT COUNT(*) FROM sqlite_master WHERE type = 'table' AND name IN ('Players', 'Stats', 'HypotheticalPlayers', 'HypotheticalStats')",
                [],
                |row| row.get(0),
            )
            .unwrap();
        assert_eq!(tables, 4);
    }

    #[test]
    fn test_reset_hypotheticals_keeps_players() {
        let conn = Connection::open_in_memory().unwrap();
        initialize_schema(&conn).unwrap();
        conn.execute("INSERT INTO Players (player_id, name, team, position) VALUES (1, 'A', 'T', 'PG')", [])
            .unwrap();
        conn.execute("INSERT INTO HypotheticalPlayers (name, team, position) VALUES ('H', 'T', 'C')", [])
            .unwrap();

        reset_hypotheticals(&conn).unwrap();

        let players: i64 = conn.query_row("SELECT COUNT(*) FROM Players", [], |r| r.get(0)).unwrap();
        let hypotheticals: i64 = conn
            .query_row("SELECT COUNT(*) FROM HypotheticalPlayers", [], |r| r.get(0))
            .unwrap();
        assert_eq!(players, 1);
        assert_eq!(hypotheticals, 0);
    }
}

use anyhow::{Context, Result};
use rusqlite::{params, Connection, OptionalExtension};

use super::models::Player;

pub fn upsert_player(conn: &Connection, player: &Player) -> Result<Player> {
    let sql = "INSERT INTO Players (player_id, name, team, position) VALUES (?1, ?2, ?3, ?4) \
               ON CONFLICT(player_id) DO UPDATE SET name = excluded.name, team = excluded.team, position = excluded.position \
               RETURNING player_id, name, team, position";

    conn.query_row(
        sql,
        params![player.player_id, player.name, player.team, player.position],
        parse_player_row,
    )
    .with_context(|| format!("Failed to upsert player {}", player.player_id))
}

fn parse_player_row(row: &rusqlite::Row) -> rusqlite::Result<Player> {
    Ok(Player {
        player_id: row.get(0)?,
        name: row.get(1)?,
        team: row.get(2)?,
        position: row.get(3)?,
    })
}

pub fn find_by_id(conn: &Connection, player_id: i64) -> Result<Option<Player>> {
    let sql = "SELECT player_id, name, team, position FROM Players WHERE player_id = ?1";

    conn.query_row(sql, params![player_id], parse_player_row)
        .optional()
        .context("Failed to query player by id")
}

pub fn list_page(conn: &Connection, limit: usize, offset: usize) -> Result<Vec<Player>> {
    let sql = "SELECT player_id, name, team, position FROM Players ORDER BY player_id LIMIT ?1 OFFSET ?2";

    let mut stmt = conn.prepare(sql)?;
    let rows = stmt
        .query_map(params![to_sql_bound(limit), to_sql_bound(offset)], parse_player_row)?
        .collect::<rusqlite::Result<Vec<_>>>()
        .context("Failed to list players")?;

    Ok(rows)
}

// Clamped, never negative: SQLite treats a negative LIMIT as unbounded.
fn to_sql_bound(value: usize) -> i64 {
    i64::try_from(value).unwrap_or(i64::MAX)
}

pub fn count_all(conn: &Connection) -> Result<usize> {
    let count: i64 = conn
        .query_row("SELECT COUNT(*) FROM Players", [], |row| row.get(0))
        .context("Failed to count players")?;

    Ok(count as usize)
}

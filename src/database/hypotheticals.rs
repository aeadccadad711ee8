use anyhow::{Context, Result};
use rusqlite::{params, Connection, OptionalExtension};

use super::models::{HypotheticalPlayer, HypotheticalRecord, NewHypothetical};
use crate::tiers::StatLine;

pub fn insert_player(conn: &Connection, player: &NewHypothetical) -> Result<HypotheticalPlayer> {
    let sql = "INSERT INTO HypotheticalPlayers (name, team, position) VALUES (?1, ?2, ?3) RETURNING id, name, team, position";

    conn.query_row(
        sql,
        params![player.name, player.team, player.position],
        parse_player_row,
    )
    .context("Failed to insert hypothetical player")
}

pub fn insert_stats(conn: &Connection, player_id: i64, stats: &StatLine) -> Result<()> {
    let sql = "INSERT INTO HypotheticalStats (player_id, PPG, APG, RPG, STL, BLK) VALUES (?1, ?2, ?3, ?4, ?5, ?6)";

    conn.execute(
        sql,
        params![player_id, stats.ppg, stats.apg, stats.rpg, stats.stl, stats.blk],
    )
    .context("Failed to insert hypothetical stats")
    .map(|_| ())
}

fn parse_player_row(row: &rusqlite::Row) -> rusqlite::Result<HypotheticalPlayer> {
    Ok(HypotheticalPlayer {
        id: row.get(0)?,
        name: row.get(1)?,
        team: row.get(2)?,
        position: row.get(3)?,
    })
}

fn parse_record_row(row: &rusqlite::Row) -> rusqlite::Result<HypotheticalRecord> {
    Ok(HypotheticalRecord {
        player: parse_player_row(row)?,
        stats: StatLine::from_nullable(row.get(4)?, row.get(5)?, row.get(6)?, row.get(7)?, row.get(8)?),
    })
}

pub fn find_player(conn: &Connection, id: i64) -> Result<Option<HypotheticalPlayer>> {
    let sql = "SELECT id, name, team, position FROM HypotheticalPlayers WHERE id = ?1";

    conn.query_row(sql, params![id], parse_player_row)
        .optional()
        .context("Failed to query hypothetical player by id")
}

pub fn find_record(conn: &Connection, id: i64) -> Result<Option<HypotheticalRecord>> {
    let sql = "SELECT hp.id, hp.name, hp.team, hp.position, hs.PPG, hs.APG, hs.RPG, hs.STL, hs.BLK \
               FROM HypotheticalPlayers hp JOIN HypotheticalStats hs ON hp.id = hs.player_id \
               WHERE hp.id = ?1";

    conn.query_row(sql, params![id], parse_record_row)
        .optional()
        .context("Failed to query hypothetical record by id")
}

/// Players without a stats row are left out by the inner join.
pub fn list_records(conn: &Connection) -> Result<Vec<HypotheticalRecord>> {
    let sql = "SELECT hp.id, hp.name, hp.team, hp.position, hs.PPG, hs.APG, hs.RPG, hs.STL, hs.BLK \
               FROM HypotheticalPlayers hp JOIN HypotheticalStats hs ON hp.id = hs.player_id \
               ORDER BY hp.id";

    let mut stmt = conn.prepare(sql)?;
    let rows = stmt
        .query_map([], parse_record_row)?
        .collect::<rusqlite::Result<Vec<_>>>()
        .context("Failed to list hypothetical players")?;

    Ok(rows)
}

/// Returns the number of player rows changed (0 or 1).
pub fn update_player(conn: &Connection, id: i64, player: &NewHypothetical) -> Result<usize> {
    let sql = "UPDATE HypotheticalPlayers SET name = ?1, team = ?2, position = ?3 WHERE id = ?4";

    conn.execute(sql, params![player.name, player.team, player.position, id])
        .context("Failed to update hypothetical player")
}

/// Returns the number of stats rows changed. Missing rows are not created.
pub fn update_stats(conn: &Connection, player_id: i64, stats: &StatLine) -> Result<usize> {
    let sql = "UPDATE HypotheticalStats SET PPG = ?1, APG = ?2, RPG = ?3, STL = ?4, BLK = ?5 WHERE player_id = ?6";

    conn.execute(
        sql,
        params![stats.ppg, stats.apg, stats.rpg, stats.stl, stats.blk, player_id],
    )
    .context("Failed to update hypothetical stats")
}

/// The stats row is removed by `ON DELETE CASCADE`.
pub fn delete_player(conn: &Connection, id: i64) -> Result<usize> {
    conn.execute("DELETE FROM HypotheticalPlayers WHERE id = ?1", params![id])
        .context("Failed to delete hypothetical player")
}

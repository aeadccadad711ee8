use anyhow::{Context, Result};
use rusqlite::{params, Connection, OptionalExtension};

use super::models::{NewSeasonStats, SeasonStats};
use crate::tiers::StatLine;

const SEASON_COLUMNS: &str = "stats_id, player_id, season, PPG, APG, RPG, STL, BLK, plus_minus";

pub fn upsert_season(conn: &Connection, row: &NewSeasonStats) -> Result<SeasonStats> {
    let sql = format!(
        "INSERT INTO Stats (player_id, season, PPG, APG, RPG, STL, BLK, plus_minus) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8) \
         ON CONFLICT(player_id, season) DO UPDATE SET PPG = excluded.PPG, APG = excluded.APG, RPG = excluded.RPG, \
         STL = excluded.STL, BLK = excluded.BLK, plus_minus = excluded.plus_minus \
         RETURNING {SEASON_COLUMNS}"
    );

    conn.query_row(
        &sql,
        params![
            row.player_id,
            row.season,
            row.ppg,
            row.apg,
            row.rpg,
            row.stl,
            row.blk,
            row.plus_minus
        ],
        parse_season_row,
    )
    .with_context(|| format!("Failed to upsert season {} for player {}", row.season, row.player_id))
}

fn parse_season_row(row: &rusqlite::Row) -> rusqlite::Result<SeasonStats> {
    Ok(SeasonStats {
        stats_id: row.get(0)?,
        player_id: row.get(1)?,
        season: row.get(2)?,
        stats: StatLine::from_nullable(row.get(3)?, row.get(4)?, row.get(5)?, row.get(6)?, row.get(7)?),
        plus_minus: row.get(8)?,
    })
}

pub fn find_for_season(conn: &Connection, player_id: i64, season: &str) -> Result<Option<SeasonStats>> {
    let sql = format!("SELECT {SEASON_COLUMNS} FROM Stats WHERE player_id = ?1 AND season = ?2");

    conn.query_row(&sql, params![player_id, season], parse_season_row)
        .optional()
        .context("Failed to query season stats")
}

pub fn list_by_player(conn: &Connection, player_id: i64) -> Result<Vec<SeasonStats>> {
    let sql = format!("SELECT {SEASON_COLUMNS} FROM Stats WHERE player_id = ?1 ORDER BY season DESC");

    let mut stmt = conn.prepare(&sql)?;
    let rows = stmt
        .query_map(params![player_id], parse_season_row)?
        .collect::<rusqlite::Result<Vec<_>>>()
        .context("Failed to list season stats")?;

    Ok(rows)
}

/// Per-stat mean over every season row of the player. `None` when the player
/// has no rows; null columns are skipped by `AVG` and an all-null column reads as zero.
pub fn average_for_player(conn: &Connection, player_id: i64) -> Result<Option<StatLine>> {
    let sql = "SELECT COUNT(*), AVG(PPG), AVG(APG), AVG(RPG), AVG(STL), AVG(BLK) FROM Stats WHERE player_id = ?1";

    let (seasons, averages): (i64, StatLine) = conn
        .query_row(sql, params![player_id], |row| {
            Ok((
                row.get(0)?,
                StatLine::from_nullable(row.get(1)?, row.get(2)?, row.get(3)?, row.get(4)?, row.get(5)?),
            ))
        })
        .context("Failed to average season stats")?;

    Ok((seasons > 0).then_some(averages))
}

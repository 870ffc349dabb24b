//! Input ingestion: per-matchday stat CSVs and the team-sheet JSON file.

use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;
use serde::de::{self, Deserializer};
use serde::Deserialize;
use tracing::{debug, info};

use crate::cli::types::{Matchday, PlayerCode, Role};
use crate::error::{FantaError, Result};
use crate::league::{MatchdayStats, RecordStore, RoleCounts, StatRecord, Team};


/// One row of a matchday CSV, with the column names the spreadsheet
/// conversion step produces.
#[derive(Debug, Deserialize)]
struct CsvRow {
    #[serde(rename = "Team")]
    club: String,
    #[serde(rename = "Cod")]
    code: u32,
    #[serde(rename = "Role")]
    role: Role,
    #[serde(rename = "Name")]
    name: String,
    #[serde(rename = "Rating", deserialize_with = "de_rating", default)]
    rating: Option<f64>,
    #[serde(rename = "Gf", deserialize_with = "de_count", default)]
    goals_scored: u8,
    #[serde(rename = "Gs", deserialize_with = "de_count", default)]
    goals_conceded: u8,
    #[serde(rename = "Rp", deserialize_with = "de_count", default)]
    penalties_scored: u8,
    #[serde(rename = "Rs", deserialize_with = "de_count", default)]
    penalties_saved: u8,
    #[serde(rename = "Rf", deserialize_with = "de_count", default)]
    penalties_missed: u8,
    #[serde(rename = "Au", deserialize_with = "de_count", default)]
    own_goals: u8,
    #[serde(rename = "Amm", deserialize_with = "de_count", default)]
    yellow_cards: u8,
    #[serde(rename = "Esp", deserialize_with = "de_count", default)]
    red_cards: u8,
    #[serde(rename = "Ass", deserialize_with = "de_count", default)]
    assists: u8,
}

impl CsvRow {
    fn into_record(self) -> StatRecord {
        let rated = self.rating.is_some();
        StatRecord {
            code: PlayerCode::new(self.code),
            role: self.role,
            name: self.name,
            club: self.club,
            stats: MatchdayStats {
                rating: self.rating,
                goals_scored: self.goals_scored,
                goals_conceded: self.goals_conceded,
                penalties_scored: self.penalties_scored,
                penalties_saved: self.penalties_saved,
                penalties_missed: self.penalties_missed,
                own_goals: self.own_goals,
                assists: self.assists,
                yellow_card: self.yellow_cards > 0,
                red_card: self.red_cards > 0,
                // Derived here: a rated appearance without a goal conceded.
                clean_sheet: rated && self.goals_conceded == 0,
            },
        }
    }
}

/// Rating column: a number, an empty cell, or the historical `*` no-vote
/// marker; standardized exports write `0` for no vote instead.
fn de_rating<'de, D>(deserializer: D) -> std::result::Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    let Some(raw) = raw else { return Ok(None) };
    let trimmed = raw.trim();
    if trimmed.is_empty() || trimmed == "*" {
        return Ok(None);
    }
    let value: f64 = trimmed
        .parse()
        .map_err(|_| de::Error::custom(format!("invalid rating {trimmed:?}")))?;
    Ok(if value == 0.0 { None } else { Some(value) })
}

/// Count columns arrive as ``""``, ``"2"`` or ``"2.0"`` depending on the
/// exporter; all of them mean a small non-negative integer.
fn de_count<'de, D>(deserializer: D) -> std::result::Result<u8, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    let Some(raw) = raw else { return Ok(0) };
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(0);
    }
    let value: f64 = trimmed
        .parse()
        .map_err(|_| de::Error::custom(format!("invalid count {trimmed:?}")))?;
    if !(0.0..=255.0).contains(&value) {
        return Err(de::Error::custom(format!("count out of range: {trimmed}")));
    }
    Ok(value as u8)
}

/// Extract `N` from a `matchday<N>.csv` file name.
fn parse_matchday_number(path: &Path) -> Option<u8> {
    if path.extension()? != "csv" {
        return None;
    }
    path.file_stem()?
        .to_str()?
        .strip_prefix("matchday")?
        .parse()
        .ok()
}

/// The matchday CSVs under `data_dir`, ordered by matchday number.
fn matchday_files(data_dir: &Path) -> Result<Vec<(Matchday, PathBuf)>> {
    let entries = fs::read_dir(data_dir)
        .with_context(|| format!("reading data directory {}", data_dir.display()))?;

    let mut files = Vec::new();
    for entry in entries {
        let path = entry
            .with_context(|| format!("reading data directory {}", data_dir.display()))?
            .path();
        if let Some(number) = parse_matchday_number(&path) {
            files.push((Matchday::new(number), path));
        }
    }
    files.sort_by_key(|(matchday, _)| *matchday);
    Ok(files)
}

/// Parse one matchday CSV into stat records, in file order.
fn read_matchday_csv(path: &Path) -> Result<Vec<StatRecord>> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_path(path)
        .with_context(|| format!("opening {}", path.display()))?;

    let mut records = Vec::new();
    for row in reader.deserialize::<CsvRow>() {
        records.push(row?.into_record());
    }
    Ok(records)
}

/// Load every `matchday<N>.csv` under `data_dir` into a fresh record store.
///
/// A directory with no matchday files at all is an error; gaps in the
/// numbering are not (those matchdays simply have no data).
pub fn load_record_store(data_dir: &Path) -> Result<RecordStore> {
    let files = matchday_files(data_dir)?;
    if files.is_empty() {
        return Err(FantaError::Load(anyhow::anyhow!(
            "no matchday CSV files found in {}",
            data_dir.display()
        )));
    }

    let mut store = RecordStore::new();
    for (matchday, path) in files {
        let records = read_matchday_csv(&path)?;
        debug!(matchday = %matchday, rows = records.len(), file = %path.display(), "read matchday file");
        store.ingest_matchday(matchday, records)?;
    }
    info!(
        players = store.player_count(),
        matchdays = store.matchday_count(),
        "record store loaded"
    );
    Ok(store)
}

/// One team as declared in the teams JSON file.
#[derive(Debug, Deserialize)]
pub struct TeamSheet {
    pub name: String,
    #[serde(flatten)]
    pub players: SheetPlayers,
}

/// The two accepted roster notations.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum SheetPlayers {
    /// A flat list of role-tagged codes:
    /// `"players": [{"code": 2170, "role": "A"}, ...]`.
    Tagged { players: Vec<TaggedCode> },
    /// Codes grouped under one list per role.
    ByRole {
        goalkeepers: Vec<u32>,
        defenders: Vec<u32>,
        midfielders: Vec<u32>,
        forwards: Vec<u32>,
    },
}

#[derive(Debug, Deserialize)]
pub struct TaggedCode {
    pub code: u32,
    pub role: Role,
}

impl SheetPlayers {
    /// Flatten to (code, declared role) pairs in sheet order.
    fn entries(&self) -> Vec<(PlayerCode, Role)> {
        match self {
            SheetPlayers::Tagged { players } => players
                .iter()
                .map(|p| (PlayerCode::new(p.code), p.role))
                .collect(),
            SheetPlayers::ByRole {
                goalkeepers,
                defenders,
                midfielders,
                forwards,
            } => {
                let mut entries = Vec::new();
                for (codes, role) in [
                    (goalkeepers, Role::Goalkeeper),
                    (defenders, Role::Defender),
                    (midfielders, Role::Midfielder),
                    (forwards, Role::Forward),
                ] {
                    entries.extend(codes.iter().map(|&code| (PlayerCode::new(code), role)));
                }
                entries
            }
        }
    }
}

/// Read and parse the teams JSON file.
pub fn load_team_sheets(path: &Path) -> Result<Vec<TeamSheet>> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("reading teams file {}", path.display()))?;
    let sheets: Vec<TeamSheet> = serde_json::from_str(&raw)?;
    if sheets.is_empty() {
        return Err(FantaError::Load(anyhow::anyhow!(
            "teams file {} declares no teams",
            path.display()
        )));
    }
    Ok(sheets)
}

/// Materialize teams from their sheets against the record store.
///
/// Every fatal roster problem surfaces here, before any match is played:
/// codes listed twice, codes absent from the data, roles that disagree with
/// the data, and rosters that cannot field the formation.
pub fn build_teams(
    sheets: &[TeamSheet],
    store: &RecordStore,
    rules: &RoleCounts,
) -> Result<Vec<Team>> {
    let mut teams = Vec::with_capacity(sheets.len());
    for sheet in sheets {
        let mut seen = BTreeSet::new();
        let mut players = Vec::new();
        for (code, declared) in sheet.players.entries() {
            if !seen.insert(code) {
                return Err(FantaError::DuplicatePlayer {
                    code: code.as_u32(),
                    team: sheet.name.clone(),
                });
            }
            let player = store.get(code).ok_or_else(|| FantaError::UnknownPlayerCode {
                code: code.as_u32(),
                team: sheet.name.clone(),
            })?;
            if player.role != declared {
                return Err(FantaError::RoleConflict {
                    code: code.as_u32(),
                    first: player.role.to_string(),
                    second: declared.to_string(),
                });
            }
            players.push(player.clone());
        }

        let team = Team::new(sheet.name.clone(), players);
        team.validate_roster(rules, &RoleCounts::FORMATION_433)?;
        teams.push(team);
    }
    Ok(teams)
}

/// The full per-command setup: record store, team sheets, materialized teams.
pub fn load_league(
    teams_file: &Path,
    data_dir: &Path,
    rules: &RoleCounts,
) -> Result<(RecordStore, Vec<Team>)> {
    let store = load_record_store(data_dir)?;
    let sheets = load_team_sheets(teams_file)?;
    let teams = build_teams(&sheets, &store, rules)?;
    info!(teams = teams.len(), "league ready");
    Ok((store, teams))
}

//! League standings: accumulation and the deterministic final ranking.

use std::cmp::Ordering;

use serde::Serialize;

use crate::cli::types::Matchday;
use crate::league::Team;

use super::score::TeamScore;


const WIN_POINTS: u32 = 3;
const DRAW_POINTS: u32 = 1;

/// Outcome of one match from one side's point of view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Outcome {
    Win,
    Draw,
    Loss,
}

impl Outcome {
    fn from_goals(scored: u8, conceded: u8) -> Self {
        match scored.cmp(&conceded) {
            Ordering::Greater => Outcome::Win,
            Ordering::Equal => Outcome::Draw,
            Ordering::Less => Outcome::Loss,
        }
    }

    /// League points the outcome is worth.
    pub fn league_points(&self) -> u32 {
        match self {
            Outcome::Win => WIN_POINTS,
            Outcome::Draw => DRAW_POINTS,
            Outcome::Loss => 0,
        }
    }
}

/// One played match: team indices plus both computed scores.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MatchResult {
    pub matchday: Matchday,
    pub home: usize,
    pub away: usize,
    pub home_score: TeamScore,
    pub away_score: TeamScore,
}

impl MatchResult {
    pub fn home_outcome(&self) -> Outcome {
        Outcome::from_goals(self.home_score.goals, self.away_score.goals)
    }

    pub fn away_outcome(&self) -> Outcome {
        Outcome::from_goals(self.away_score.goals, self.home_score.goals)
    }
}

/// Running totals for one team.
#[derive(Debug, Clone)]
struct TeamRecord {
    played: u32,
    wins: u32,
    draws: u32,
    losses: u32,
    goals_for: u32,
    goals_against: u32,
    points: u32,
    score_total: f64,
    /// League points earned against each opponent, for head-to-head ties.
    versus: Vec<u32>,
}

impl TeamRecord {
    fn new(team_count: usize) -> Self {
        Self {
            played: 0,
            wins: 0,
            draws: 0,
            losses: 0,
            goals_for: 0,
            goals_against: 0,
            points: 0,
            score_total: 0.0,
            versus: vec![0; team_count],
        }
    }

    fn goal_diff(&self) -> i64 {
        i64::from(self.goals_for) - i64::from(self.goals_against)
    }
}

/// One row of the final league table.
#[derive(Debug, Clone, Serialize)]
pub struct StandingsRow {
    pub rank: u32,
    pub team: String,
    pub played: u32,
    pub wins: u32,
    pub draws: u32,
    pub losses: u32,
    pub goals_for: u32,
    pub goals_against: u32,
    pub goal_diff: i64,
    pub points: u32,
    /// Season sum of raw match scores, the first tie-break key.
    pub score_total: f64,
}

/// Standings accumulator: feed it every match result in matchday order, then
/// ask for the final table.
#[derive(Debug)]
pub struct Standings {
    records: Vec<TeamRecord>,
}

impl Standings {
    pub fn new(team_count: usize) -> Self {
        Self {
            records: (0..team_count).map(|_| TeamRecord::new(team_count)).collect(),
        }
    }

    /// Fold one match into both teams' records.
    pub fn record_match(&mut self, result: &MatchResult) {
        self.apply(
            result.home,
            result.away,
            &result.home_score,
            result.home_outcome(),
            result.away_score.goals,
        );
        self.apply(
            result.away,
            result.home,
            &result.away_score,
            result.away_outcome(),
            result.home_score.goals,
        );
    }

    fn apply(
        &mut self,
        team: usize,
        opponent: usize,
        score: &TeamScore,
        outcome: Outcome,
        conceded: u8,
    ) {
        let record = &mut self.records[team];
        record.played += 1;
        record.goals_for += u32::from(score.goals);
        record.goals_against += u32::from(conceded);
        record.score_total += score.total;
        record.points += outcome.league_points();
        record.versus[opponent] += outcome.league_points();
        match outcome {
            Outcome::Win => record.wins += 1,
            Outcome::Draw => record.draws += 1,
            Outcome::Loss => record.losses += 1,
        }
    }

    /// Rank all teams and stamp final positions.
    ///
    /// Sort keys, each descending: league points, season score total, goals
    /// scored, goal difference, then head-to-head league points inside the
    /// still-tied group, and finally registration order.
    pub fn final_table(&self, teams: &[Team]) -> Vec<StandingsRow> {
        let mut order: Vec<usize> = (0..self.records.len()).collect();
        order.sort_by(|&a, &b| self.compare_primary(a, b).then(a.cmp(&b)));

        // Head-to-head only applies inside a group left tied by the first
        // four keys, counting points from matches among that group.
        let mut start = 0;
        while start < order.len() {
            let mut end = start + 1;
            while end < order.len()
                && self.compare_primary(order[start], order[end]) == Ordering::Equal
            {
                end += 1;
            }
            if end - start > 1 {
                let group: Vec<usize> = order[start..end].to_vec();
                order[start..end].sort_by(|&a, &b| {
                    self.head_to_head_points(b, &group)
                        .cmp(&self.head_to_head_points(a, &group))
                        .then(a.cmp(&b))
                });
            }
            start = end;
        }

        order
            .iter()
            .enumerate()
            .map(|(position, &index)| {
                let record = &self.records[index];
                StandingsRow {
                    rank: position as u32 + 1,
                    team: teams[index].name().to_string(),
                    played: record.played,
                    wins: record.wins,
                    draws: record.draws,
                    losses: record.losses,
                    goals_for: record.goals_for,
                    goals_against: record.goals_against,
                    goal_diff: record.goal_diff(),
                    points: record.points,
                    score_total: record.score_total,
                }
            })
            .collect()
    }

    fn compare_primary(&self, a: usize, b: usize) -> Ordering {
        let ra = &self.records[a];
        let rb = &self.records[b];
        rb.points
            .cmp(&ra.points)
            .then(rb.score_total.total_cmp(&ra.score_total))
            .then(rb.goals_for.cmp(&ra.goals_for))
            .then(rb.goal_diff().cmp(&ra.goal_diff()))
    }

    fn head_to_head_points(&self, team: usize, group: &[usize]) -> u32 {
        group
            .iter()
            .filter(|&&other| other != team)
            .map(|&other| self.records[team].versus[other])
            .sum()
    }
}

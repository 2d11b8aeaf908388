//! Match draft being composed before submission
//!
//! A draft is owned by a single editing session. Fields are replaced one at a
//! time without validation so intermediate states may be invalid; whether the
//! draft can be submitted is a separate query.
//!
//! Concurrent edits are not merged. If two writers touch the same draft, the
//! last `set_field` for a field wins.

use crate::error::MatchError;
use crate::types::{CompetitionLevel, MatchType, PlayerId, SetScore};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Minimum number of sets a submittable match records
pub const MIN_SETS: usize = 2;

/// Which team a draft issue refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TeamSlot {
    Team1,
    Team2,
}

impl std::fmt::Display for TeamSlot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TeamSlot::Team1 => write!(f, "team 1"),
            TeamSlot::Team2 => write!(f, "team 2"),
        }
    }
}

/// Reason a draft cannot be submitted yet
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum DraftIssue {
    WrongTeamSize {
        team: TeamSlot,
        expected: usize,
        actual: usize,
    },
    NotEnoughSets {
        found: usize,
    },
}

impl std::fmt::Display for DraftIssue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DraftIssue::WrongTeamSize {
                team,
                expected,
                actual,
            } => write!(f, "{} needs {} player(s), has {}", team, expected, actual),
            DraftIssue::NotEnoughSets { found } => write!(
                f,
                "at least {} sets are required, {} recorded",
                MIN_SETS, found
            ),
        }
    }
}

/// One field of a [`MatchDraft`] together with its new value
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "field", content = "value", rename_all = "snake_case")]
pub enum DraftField {
    MatchType(MatchType),
    MatchLevel(CompetitionLevel),
    Date(NaiveDate),
    Team1(Vec<PlayerId>),
    Team2(Vec<PlayerId>),
    Sets(Vec<SetScore>),
    Notes(Option<String>),
    IdempotencyKey(Option<String>),
}

/// A match record under construction
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchDraft {
    pub match_type: MatchType,
    pub match_level: CompetitionLevel,
    pub date: NaiveDate,
    pub team1: Vec<PlayerId>,
    pub team2: Vec<PlayerId>,
    pub sets: Vec<SetScore>,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub idempotency_key: Option<String>,
}

impl MatchDraft {
    /// Fresh draft dated today
    pub fn new() -> Self {
        Self::new_on(crate::utils::today())
    }

    /// Fresh draft for a given date: doubles, friendly, empty teams, one 0-0 set
    pub fn new_on(date: NaiveDate) -> Self {
        Self {
            match_type: MatchType::Doubles,
            match_level: CompetitionLevel::Friendly,
            date,
            team1: Vec::new(),
            team2: Vec::new(),
            sets: vec![SetScore::default()],
            notes: None,
            idempotency_key: None,
        }
    }

    /// Replace exactly one field. Never fails.
    pub fn set_field(&mut self, field: DraftField) {
        match field {
            DraftField::MatchType(match_type) => self.match_type = match_type,
            DraftField::MatchLevel(level) => self.match_level = level,
            DraftField::Date(date) => self.date = date,
            DraftField::Team1(team) => self.team1 = team,
            DraftField::Team2(team) => self.team2 = team,
            DraftField::Sets(sets) => self.sets = sets,
            DraftField::Notes(notes) => self.notes = notes,
            DraftField::IdempotencyKey(key) => self.idempotency_key = key,
        }
    }

    /// Restore defaults. Used both after submission and on cancel.
    pub fn reset(&mut self) {
        self.reset_on(crate::utils::today());
    }

    pub fn reset_on(&mut self, date: NaiveDate) {
        *self = Self::new_on(date);
    }

    /// Both teams have the right size and at least two sets are recorded
    pub fn can_submit(&self) -> bool {
        let size = self.match_type.team_size();
        self.team1.len() == size && self.team2.len() == size && self.sets.len() >= MIN_SETS
    }

    /// Every reason the draft is not submittable, team checks first
    pub fn issues(&self) -> Vec<DraftIssue> {
        let expected = self.match_type.team_size();
        let mut issues = Vec::new();

        for (team, members) in [(TeamSlot::Team1, &self.team1), (TeamSlot::Team2, &self.team2)] {
            if members.len() != expected {
                issues.push(DraftIssue::WrongTeamSize {
                    team,
                    expected,
                    actual: members.len(),
                });
            }
        }

        if self.sets.len() < MIN_SETS {
            issues.push(DraftIssue::NotEnoughSets {
                found: self.sets.len(),
            });
        }

        issues
    }

    /// Error describing the first issue, if any
    pub fn validate(&self) -> Result<(), MatchError> {
        match self.issues().into_iter().next() {
            None => Ok(()),
            Some(issue) => Err(MatchError::IncompleteMatch {
                reason: issue.to_string(),
            }),
        }
    }

    /// Convenience for appending a set while editing
    pub fn push_set(&mut self, set: SetScore) {
        self.sets.push(set);
    }
}

impl Default for MatchDraft {
    fn default() -> Self {
        Self::new()
    }
}

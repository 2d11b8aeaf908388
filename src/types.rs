//! Common types used throughout the rating engine and match drafts

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for players
pub type PlayerId = String;

/// Unique identifier for submitted matches
pub type MatchId = Uuid;

/// Competition level a match was played at
///
/// Each level carries a fixed base volatility (K-factor) that scales how far
/// a single result can move a rating.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CompetitionLevel {
    #[default]
    Friendly,
    League,
    Tournament,
    Nationals,
}

impl CompetitionLevel {
    /// All levels, lowest stakes first
    pub const ALL: [CompetitionLevel; 4] = [
        CompetitionLevel::Friendly,
        CompetitionLevel::League,
        CompetitionLevel::Tournament,
        CompetitionLevel::Nationals,
    ];

    /// Base K-factor for this level
    pub fn k_factor(self) -> f64 {
        match self {
            CompetitionLevel::Friendly => 16.0,
            CompetitionLevel::League => 32.0,
            CompetitionLevel::Tournament => 50.0,
            CompetitionLevel::Nationals => 75.0,
        }
    }
}

impl std::fmt::Display for CompetitionLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CompetitionLevel::Friendly => write!(f, "friendly"),
            CompetitionLevel::League => write!(f, "league"),
            CompetitionLevel::Tournament => write!(f, "tournament"),
            CompetitionLevel::Nationals => write!(f, "nationals"),
        }
    }
}

impl std::str::FromStr for CompetitionLevel {
    type Err = crate::error::MatchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "friendly" => Ok(CompetitionLevel::Friendly),
            "league" => Ok(CompetitionLevel::League),
            "tournament" => Ok(CompetitionLevel::Tournament),
            "nationals" => Ok(CompetitionLevel::Nationals),
            other => Err(crate::error::MatchError::InvalidMatch {
                reason: format!("unknown competition level '{}'", other),
            }),
        }
    }
}

/// Singles or doubles
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchType {
    Singles,
    #[default]
    Doubles,
}

impl MatchType {
    /// Number of players each team must field
    pub fn team_size(self) -> usize {
        match self {
            MatchType::Singles => 1,
            MatchType::Doubles => 2,
        }
    }
}

impl std::fmt::Display for MatchType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MatchType::Singles => write!(f, "singles"),
            MatchType::Doubles => write!(f, "doubles"),
        }
    }
}

/// Points for one set, team A first
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SetScore {
    pub points_a: u32,
    pub points_b: u32,
    /// Shortened decisive set. Tracked for display only.
    #[serde(default)]
    pub super_tiebreak: bool,
}

impl SetScore {
    pub fn new(points_a: u32, points_b: u32) -> Self {
        Self {
            points_a,
            points_b,
            super_tiebreak: false,
        }
    }

    pub fn super_tiebreak(points_a: u32, points_b: u32) -> Self {
        Self {
            points_a,
            points_b,
            super_tiebreak: true,
        }
    }

    /// Absolute point differential of this set
    pub fn differential(&self) -> u32 {
        self.points_a.abs_diff(self.points_b)
    }
}

impl std::str::FromStr for SetScore {
    type Err = crate::error::MatchError;

    /// Parses `"6-4"`, with a trailing `"*"` marking a super-tiebreak (`"10-8*"`)
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || crate::error::MatchError::InvalidMatch {
            reason: format!("invalid set score '{}', expected e.g. 6-4 or 10-8*", s),
        };

        let trimmed = s.trim();
        let (body, super_tiebreak) = match trimmed.strip_suffix('*') {
            Some(body) => (body, true),
            None => (trimmed, false),
        };
        let (a, b) = body.split_once('-').ok_or_else(invalid)?;
        let points_a = a.trim().parse().map_err(|_| invalid())?;
        let points_b = b.trim().parse().map_err(|_| invalid())?;

        Ok(Self {
            points_a,
            points_b,
            super_tiebreak,
        })
    }
}

/// Result of a match from team A's point of view
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MatchOutcome {
    WinA,
    Draw,
    WinB,
}

impl MatchOutcome {
    /// Actual score for team A (1, 0.5 or 0)
    pub fn score(self) -> f64 {
        match self {
            MatchOutcome::WinA => 1.0,
            MatchOutcome::Draw => 0.5,
            MatchOutcome::WinB => 0.0,
        }
    }

    /// Same result seen from team B
    pub fn flipped(self) -> Self {
        match self {
            MatchOutcome::WinA => MatchOutcome::WinB,
            MatchOutcome::Draw => MatchOutcome::Draw,
            MatchOutcome::WinB => MatchOutcome::WinA,
        }
    }

    /// True when the side this outcome is expressed for won
    pub fn is_win(self) -> bool {
        self == MatchOutcome::WinA
    }

    /// Derive the outcome by counting sets won. Tied sets count for nobody.
    pub fn from_sets(sets: &[SetScore]) -> Self {
        let (won_a, won_b) = sets.iter().fold((0usize, 0usize), |(a, b), set| {
            match set.points_a.cmp(&set.points_b) {
                std::cmp::Ordering::Greater => (a + 1, b),
                std::cmp::Ordering::Less => (a, b + 1),
                std::cmp::Ordering::Equal => (a, b),
            }
        });

        match won_a.cmp(&won_b) {
            std::cmp::Ordering::Greater => MatchOutcome::WinA,
            std::cmp::Ordering::Less => MatchOutcome::WinB,
            std::cmp::Ordering::Equal => MatchOutcome::Draw,
        }
    }
}

impl std::str::FromStr for MatchOutcome {
    type Err = crate::error::MatchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "win" | "1" => Ok(MatchOutcome::WinA),
            "draw" | "0.5" => Ok(MatchOutcome::Draw),
            "loss" | "0" => Ok(MatchOutcome::WinB),
            other => Err(crate::error::MatchError::InvalidMatch {
                reason: format!("unknown outcome '{}', expected win, draw or loss", other),
            }),
        }
    }
}

/// Rating after a single pairwise update
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RatingUpdate {
    pub new_rating: f64,
    /// Integral change applied to the old rating
    pub delta: f64,
}

/// Rating change information for a player
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RatingChange {
    pub player_id: PlayerId,
    pub old_rating: f64,
    pub new_rating: f64,
    pub delta: f64,
    /// Rating the player was measured against (opposing team mean)
    pub opponent_rating: f64,
}

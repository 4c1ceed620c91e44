//! High score tracking
//!
//! Listens for game events and keeps the best score plus a top-10 table.
//! Storage is the host's job; this type only serializes to and from JSON.

use serde::{Deserialize, Serialize};

use crate::sim::{GameEvent, GameObserver};

/// Maximum number of high scores to keep
pub const MAX_HIGH_SCORES: usize = 10;

/// A single high score entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HighScoreEntry {
    pub score: u64,
    /// Which run of the session produced it (1-based)
    pub run: u32,
}

/// High score leaderboard
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HighScores {
    pub entries: Vec<HighScoreEntry>,
    /// Live score of the current run
    #[serde(skip)]
    current: u64,
    #[serde(skip)]
    runs: u32,
}

impl HighScores {
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if a score qualifies for the leaderboard
    pub fn qualifies(&self, score: u64) -> bool {
        if score == 0 {
            return false;
        }
        if self.entries.len() < MAX_HIGH_SCORES {
            return true;
        }
        self.entries.last().map(|e| score > e.score).unwrap_or(true)
    }

    /// Add a score if it qualifies; returns the rank achieved (1-indexed)
    pub fn add_score(&mut self, score: u64, run: u32) -> Option<usize> {
        if !self.qualifies(score) {
            return None;
        }

        let entry = HighScoreEntry { score, run };
        // Sorted descending; ties keep the earlier run first
        let pos = self.entries.iter().position(|e| score > e.score);
        let rank = match pos {
            Some(i) => {
                self.entries.insert(i, entry);
                i + 1
            }
            None => {
                self.entries.push(entry);
                self.entries.len()
            }
        };
        self.entries.truncate(MAX_HIGH_SCORES);

        Some(rank)
    }

    /// Best score so far, 0 when empty
    pub fn best(&self) -> u64 {
        self.entries.first().map(|e| e.score).unwrap_or(0)
    }

    /// Score of the run in progress
    pub fn current(&self) -> u64 {
        self.current
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    /// Parse a stored table; anything unreadable starts a fresh one
    pub fn from_json(json: &str) -> Self {
        match serde_json::from_str::<HighScores>(json) {
            Ok(scores) => {
                log::info!("Loaded {} high scores", scores.entries.len());
                scores
            }
            Err(err) => {
                log::warn!("Discarding unreadable high scores: {err}");
                Self::new()
            }
        }
    }
}

impl GameObserver for HighScores {
    fn on_event(&mut self, event: &GameEvent) {
        match *event {
            GameEvent::Started => {
                self.runs += 1;
                self.current = 0;
            }
            GameEvent::Scored { score } => self.current = score,
            GameEvent::GameOver { score } => {
                self.current = score;
                let previous_best = self.best();
                if let Some(rank) = self.add_score(score, self.runs) {
                    log::info!("Score {} ranked #{}", score, rank);
                }
                if score > previous_best {
                    log::info!("New high score: {}", score);
                }
            }
            GameEvent::Jumped => {}
        }
    }
}

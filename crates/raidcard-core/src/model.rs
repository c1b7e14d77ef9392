//! Data model for grouped raid matches.
//!
//! A `MatchBoard` is produced by the external matcher and handed to us as
//! JSON. Everything in it is read-only for the lifetime of a display.

use std::collections::HashSet;
use std::fmt;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};

/// Party role of a character.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Damage,
    Support,
}

impl Role {
    /// Marker used at the start of a share line.
    pub fn share_marker(self) -> &'static str {
        match self {
            Role::Damage => "⚔️",
            Role::Support => "🛡️",
        }
    }

    /// Short label for table and row rendering.
    pub fn label(self) -> &'static str {
        match self {
            Role::Damage => "딜러",
            Role::Support => "서포터",
        }
    }

    pub fn is_support(self) -> bool {
        matches!(self, Role::Support)
    }
}

/// Identity of a candidate within a slot.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CandidateId {
    pub name: String,
    pub server: String,
}

impl fmt::Display for CandidateId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}@{}", self.name, self.server)
    }
}

/// One character eligible to fill a slot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Candidate {
    pub name: String,
    pub server: String,
    pub role: Role,
    pub power: f64,
    pub class_name: String,
    /// Buff description, only surfaced for non-support roles.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub synergy: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ark_passive: Option<String>,
    /// Item level label, e.g. `"1,640.00"`.
    pub item_level: String,
}

impl Candidate {
    pub fn id(&self) -> CandidateId {
        CandidateId {
            name: self.name.clone(),
            server: self.server.clone(),
        }
    }

    /// True when `other` has the same name and server.
    pub fn same_identity(&self, other: &Candidate) -> bool {
        self.name == other.name && self.server == other.server
    }

    /// Synergy note to display, if the role carries one.
    pub fn visible_synergy(&self) -> Option<&str> {
        if self.role.is_support() {
            return None;
        }
        self.synergy.as_deref().filter(|s| !s.is_empty())
    }

    /// Integer part of the item level label.
    pub fn level_label(&self) -> &str {
        self.item_level
            .split('.')
            .next()
            .unwrap_or(&self.item_level)
    }
}

/// One searched player and their candidate pool.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Slot {
    /// The searched nickname.
    pub label: String,
    #[serde(default)]
    pub candidates: Vec<Candidate>,
}

impl Slot {
    pub fn len(&self) -> usize {
        self.candidates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }

    /// Position of the candidate with the given identity.
    pub fn position_of(&self, candidate: &Candidate) -> Option<usize> {
        self.candidates.iter().position(|c| c.same_identity(candidate))
    }

    /// Finds a candidate by name, optionally narrowed by server.
    pub fn find(&self, name: &str, server: Option<&str>) -> Option<usize> {
        self.candidates
            .iter()
            .position(|c| c.name == name && server.is_none_or(|s| c.server == s))
    }
}

/// A raid with one candidate pool per searched player.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GroupedMatch {
    pub raid_id: String,
    pub raid_name: String,
    pub difficulty: String,
    pub level: u32,
    pub slots: Vec<Slot>,
    /// Fallback average used when nothing is selected.
    pub average_power: f64,
    pub dealer_count: usize,
    pub support_count: usize,
}

impl GroupedMatch {
    pub fn slot_count(&self) -> usize {
        self.slots.len()
    }

    /// Checks that candidate identities are unique within each slot.
    pub fn validate(&self) -> Result<()> {
        for (idx, slot) in self.slots.iter().enumerate() {
            let mut seen = HashSet::new();
            for candidate in &slot.candidates {
                if !seen.insert((candidate.name.as_str(), candidate.server.as_str())) {
                    bail!(
                        "Raid '{}' slot {} ({}) lists {} more than once",
                        self.raid_id,
                        idx,
                        slot.label,
                        candidate.id()
                    );
                }
            }
        }
        Ok(())
    }
}

/// The document handed over by the matcher: every raid the searched players qualify for.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchBoard {
    pub matches: Vec<GroupedMatch>,
}

impl MatchBoard {
    /// Loads and validates a board from a JSON file.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read board from {}", path.display()))?;
        let board = Self::from_json(&contents)
            .with_context(|| format!("Failed to parse board from {}", path.display()))?;
        tracing::debug!(
            path = %path.display(),
            matches = board.matches.len(),
            "board loaded"
        );
        Ok(board)
    }

    pub fn from_json(json: &str) -> Result<Self> {
        let board: MatchBoard = serde_json::from_str(json)?;
        if board.matches.is_empty() {
            bail!("Board contains no matches");
        }
        for grouped in &board.matches {
            grouped.validate()?;
        }
        Ok(board)
    }

    /// Looks up a match by raid id.
    pub fn find(&self, raid_id: &str) -> Option<&GroupedMatch> {
        self.matches.iter().find(|m| m.raid_id == raid_id)
    }
}

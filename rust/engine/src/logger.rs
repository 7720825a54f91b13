use serde::{Deserialize, Serialize};

use crate::cards::Card;
use crate::hand::HandStrength;
use crate::player::PlayerAction;
use crate::rules::Blinds;

/// Represents a betting street in Texas Hold'em poker.
/// Defines the four stages of a poker hand.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum Street {
    /// Before flop (hole cards dealt)
    Preflop,
    /// After flop (3 community cards)
    Flop,
    /// After turn (4th community card)
    Turn,
    /// After river (5th community card)
    River,
}

impl Street {
    pub const ALL: [Street; 4] = [Street::Preflop, Street::Flop, Street::Turn, Street::River];

    /// Community cards dealt when this street opens.
    pub fn cards_dealt(self) -> usize {
        match self {
            Street::Preflop => 0,
            Street::Flop => 3,
            Street::Turn | Street::River => 1,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Street::Preflop => "preflop",
            Street::Flop => "flop",
            Street::Turn => "turn",
            Street::River => "river",
        }
    }
}

/// Records a single player action during a hand.
/// Associates the action with the player and the street when it occurred.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct ActionRecord {
    pub player_id: usize,
    /// The betting street when this action occurred
    pub street: Street,
    /// The action taken by the player
    pub action: PlayerAction,
    /// Chips moved from the player's stack into the pot by this action
    #[serde(default)]
    pub paid: u32,
}

/// Chips awarded to one player at the end of a hand.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
pub struct Payout {
    pub player_id: usize,
    pub amount: u32,
}

/// A hand shown down by a player still contesting the pot.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct ShownHand {
    pub player_id: usize,
    pub hole: [Card; 2],
    pub strength: HandStrength,
}

/// Information about the showdown phase when hands are revealed.
/// Records every shown hand and which players won.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct ShowdownInfo {
    pub hands: Vec<ShownHand>,
    /// Winners in payout order (clockwise from the dealer's left)
    pub winners: Vec<usize>,
    /// Optional notes about the showdown (e.g., "split pot")
    #[serde(default)]
    pub notes: Option<String>,
}

/// Complete record of a poker hand including all actions, board cards, and outcome.
/// Serialized to JSONL format for hand history storage and replay.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct HandRecord {
    /// Unique identifier for this hand (format: YYYYMMDD-NNNNNN)
    pub hand_id: String,
    /// RNG seed used for deck shuffling (enables deterministic replay)
    pub seed: Option<u64>,
    pub dealer: usize,
    pub blinds: Blinds,
    /// Chronological list of all player actions
    pub actions: Vec<ActionRecord>,
    /// Community cards on the board (up to 5 cards)
    pub board: Vec<Card>,
    pub pot: u32,
    pub payouts: Vec<Payout>,
    /// Hand result summary (winner, pot size, etc.)
    pub result: Option<String>,
    /// Timestamp when the hand was played (RFC3339 format)
    #[serde(default)]
    pub ts: Option<String>,
    /// Showdown information if hand went to showdown
    #[serde(default)]
    pub showdown: Option<ShowdownInfo>,
}

impl HandRecord {
    /// Total chips paid out; equals [`HandRecord::pot`] for every finished hand.
    pub fn paid_out(&self) -> u32 {
        self.payouts.iter().map(|p| p.amount).sum()
    }
}

pub fn format_hand_id(yyyymmdd: &str, seq: u32) -> String {
    format!("{}-{:06}", yyyymmdd, seq)
}

/// Today's date in the `YYYYMMDD` form used by hand ids.
pub fn today() -> String {
    Utc::now().format("%Y%m%d").to_string()
}

use chrono::{SecondsFormat, Utc};
use std::fs::{create_dir_all, File};
use std::io::{BufWriter, Write};
use std::path::Path;

pub struct HandLogger {
    writer: BufWriter<File>,
}

impl HandLogger {
    pub fn create<P: AsRef<Path>>(path: P) -> std::io::Result<Self> {
        if let Some(parent) = path.as_ref().parent() {
            if !parent.as_os_str().is_empty() {
                create_dir_all(parent)?;
            }
        }
        let f = File::create(path)?;
        Ok(Self {
            writer: BufWriter::new(f),
        })
    }

    pub fn write(&mut self, record: &HandRecord) -> std::io::Result<()> {
        // inject timestamp if missing
        let mut rec = record.clone();
        if rec.ts.is_none() {
            rec.ts = Some(Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true));
        }
        let line = serde_json::to_string(&rec).map_err(std::io::Error::other)?;
        self.writer.write_all(line.as_bytes())?;
        self.writer.write_all(b"\n")?;
        self.writer.flush()
    }
}

//! # holdem-engine: Texas Hold'em table core
//!
//! Runs no-limit-style Texas Hold'em hands for 2 to 12 seats with a single pot. Provides card
//! and deck types, seven-card hand evaluation, per-street betting and showdown, and JSONL hand
//! records with reproducible seeded shuffles.
//!
//! ## Core Modules
//!
//! - [`cards`] - Card representation (Suit, Rank, Card) and deck construction
//! - [`deck`] - Seeded deck shuffling with ChaCha20 RNG
//! - [`hand`] - Hand evaluation and strength comparison
//! - [`player`] - Seats, stacks and actions
//! - [`rules`] - Blinds, raise bounds and action validation
//! - [`betting`] - Per-street betting state machine
//! - [`pot`] - Pot accounting and split payouts
//! - [`game`] - Table configuration and seat order
//! - [`engine`] - Hand orchestration
//! - [`logger`] - HandRecord serialization
//! - [`errors`] - Error types for game operations
//!
//! ## Quick Start
//!
//! ```rust
//! use holdem_engine::cards::parse_cards;
//! use holdem_engine::hand::{evaluate_hand, Category};
//!
//! let cards = parse_cards("Ah Kh Qh Jh Th 2c 3d").unwrap();
//! let strength = evaluate_hand(&cards);
//! assert_eq!(strength.category, Category::StraightFlush);
//! ```
//!
//! ## Deterministic Gameplay
//!
//! ```rust
//! use holdem_engine::deck::Deck;
//!
//! let mut a = Deck::new_with_seed(42);
//! let mut b = Deck::new_with_seed(42);
//! a.shuffle();
//! b.shuffle();
//! assert_eq!(a.draw_n(5).unwrap(), b.draw_n(5).unwrap());
//! ```

pub mod betting;
pub mod cards;
pub mod deck;
pub mod engine;
pub mod errors;
pub mod game;
pub mod hand;
pub mod logger;
pub mod player;
pub mod pot;
pub mod rules;

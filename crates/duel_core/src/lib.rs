//! # duel_core - Striker's Duel Simulation Core
//!
//! Per-frame simulation for a one-versus-two football mini-game: a single
//! human-controlled attacker against an AI defender and an AI goalkeeper,
//! with one ball under continuous arcade physics.
//!
//! ## Features
//! - One ordered, synchronous step per rendered frame
//! - Explicit typed world state (no state hidden on render objects)
//! - Tick-counted countdowns instead of timers (pause/single-step safe)
//! - Injectable noise source (same seed = same match)
//!
//! ## Usage
//! ```rust
//! use duel_core::{EngineConfig, Intent, MatchEngine};
//!
//! let mut engine = MatchEngine::new(EngineConfig::deterministic());
//! let intent = Intent { move_z: -1, ..Intent::idle() };
//! let snapshot = engine.step(1.0 / 60.0, intent);
//! assert!(snapshot.player.z < 5.0);
//! ```

pub mod engine;
pub mod error;

pub use engine::config::{
    Difficulty, EngineConfig, FieldConfig, GameMode, MatchConfig, StaminaConfig,
};
pub use engine::events::MatchEvent;
pub use engine::intent::{InputLayout, Intent, IntentResolver, KeyState};
pub use engine::match_sim::MatchEngine;
pub use engine::noise::{NoiseSource, ScriptedNoise, SeededNoise, ZeroNoise};
pub use engine::snapshot::{BallView, CharacterView, Snapshot};
pub use engine::world::{Toucher, World};
pub use error::{ConfigError, Result};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

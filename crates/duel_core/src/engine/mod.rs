//! Simulation engine
//!
//! Components run in a fixed order once per frame (see [`match_sim`]):
//! stamina → player motion → power charge → ball physics → walls →
//! goal → collision → defender → goalkeeper.

pub mod ball_physics;
pub mod behaviors;
pub mod boundary;
pub mod collision;
pub mod config;
pub mod coordinates;
pub mod events;
pub mod goal;
pub mod intent;
pub mod match_clock;
pub mod match_sim;
pub mod noise;
pub mod physics_constants;
pub mod player_motion;
pub mod power_charge;
pub mod snapshot;
pub mod stamina;
pub mod world;

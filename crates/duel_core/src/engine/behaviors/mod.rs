//! AI steering behaviors
//!
//! Both opponents are pure functions of the current world: a plan (target
//! and speed) is recomputed from scratch every step, nothing is remembered
//! between frames except pose.

pub mod defender;
pub mod goalkeeper;

pub use defender::{defender_plan, steer_defender, DefenderMode, DefenderPlan};
pub use goalkeeper::{goalkeeper_plan, steer_goalkeeper, KeeperMode, KeeperPlan};

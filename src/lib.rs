//! Runtime core of a side-scrolling flapping game.
//!
//! The player's mode state machine, kinematics, auto-pilot and collision
//! checks live here together with the round orchestrator that scrolls
//! pipes and keeps score. Audio, sprites and the screen are injected
//! through the traits in [`capabilities`], so everything in this crate runs
//! headless.

pub mod autopilot;
pub mod capabilities;
pub mod collision;
pub mod compute;
pub mod config;
pub mod entities;
pub mod kinematics;
pub mod modes;
pub mod overlay;

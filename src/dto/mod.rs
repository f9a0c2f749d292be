/// Shared response shapes.
pub mod common;
/// Health endpoint payloads.
pub mod health;
/// Schedule endpoint payloads.
pub mod levels;
/// Roster endpoint payloads.
pub mod players;

pub mod bounty;
pub mod combatant;
pub mod common;
pub mod errors;
pub mod report;
pub mod section;
pub mod statistics;

pub use errors::Result;

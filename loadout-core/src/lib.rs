//! Budget-aware loadout randomiser.
//!
//! Everything here is pure: static catalog data plus functions that draw
//! from a caller-supplied [`RandomSource`]. Presentation lives elsewhere.

pub mod abilities;
pub mod catalog;
pub mod command;
mod error;
pub mod format;
pub mod generate;
pub mod random;
pub mod select;
pub mod tier;

pub use catalog::{ability_cost, find_agent, AbilitySlot, Agent, Item, Role, AGENTS};
pub use command::{process_command, Command, CommandError, Response};
pub use error::{LoadoutError, Result};
pub use generate::{
    all_affordable_agents, generate_budget_loadout, generate_loadout, Loadout, MAX_ATTEMPTS,
};
pub use random::{RandomSource, ScriptedSource};
pub use tier::BudgetTier;

/// Tier for a credit budget.
pub fn budget_tier(credits: u32) -> BudgetTier {
    BudgetTier::from_budget(credits)
}

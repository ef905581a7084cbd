use serde::Serialize;
use tracing::{debug, trace, warn};

use crate::abilities::{buy_abilities, random_abilities, AbilityPurchase};
use crate::catalog::{self, AbilitySlot, Agent, Item, Role, AGENTS, SHIELDS, SIDEARMS};
use crate::random::RandomSource;
use crate::select::{weighted_primary, weighted_shield, weighted_sidearm};
use crate::tier::BudgetTier;
use crate::{LoadoutError, Result};

/// Upper bound on whole-sequence retries in [`generate_budget_loadout`].
pub const MAX_ATTEMPTS: usize = 100;

#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct Loadout {
    pub agent: &'static str,
    pub agent_id: &'static str,
    pub role: Role,
    /// `None` when the loadout was rolled without a budget.
    pub tier: Option<BudgetTier>,
    pub primary: Item,
    pub sidearm: Item,
    pub shield: Item,
    pub abilities: Vec<AbilitySlot>,
    pub total_cost: u32,
}

impl Loadout {
    fn assemble(
        agent: &'static Agent,
        tier: Option<BudgetTier>,
        primary: Item,
        sidearm: Item,
        shield: Item,
        abilities: AbilityPurchase,
    ) -> Self {
        Self {
            agent: agent.name,
            agent_id: agent.id,
            role: agent.role,
            tier,
            primary,
            sidearm,
            shield,
            total_cost: primary.cost + sidearm.cost + shield.cost + abilities.cost,
            abilities: abilities.abilities,
        }
    }

    /// Sum of every chosen item and ability, recomputed from the catalog.
    pub fn itemised_cost(&self) -> u32 {
        let abilities: u32 = self
            .abilities
            .iter()
            .map(|&slot| catalog::ability_cost(self.agent_id, slot))
            .sum();
        self.primary.cost + self.sidearm.cost + self.shield.cost + abilities
    }
}

fn lookup(agent_id: &str) -> Result<&'static Agent> {
    catalog::find_agent(agent_id)
        .ok_or_else(|| LoadoutError::UnknownAgent(agent_id.trim().to_string()))
}

/// Spend `budget` greedily on primary, sidearm, shield and then abilities.
///
/// Each draw only sees what is left after the previous ones. An attempt
/// whose running balance would go negative is thrown away and the whole
/// sequence is rolled again, up to [`MAX_ATTEMPTS`] times.
pub fn generate_budget_loadout<R>(agent_id: &str, budget: u32, rng: &mut R) -> Result<Loadout>
where
    R: RandomSource + ?Sized,
{
    let agent = lookup(agent_id)?;
    let tier = BudgetTier::from_budget(budget);
    debug!(agent = agent.id, budget, %tier, "generating budget loadout");

    for attempt in 1..=MAX_ATTEMPTS {
        let Some(loadout) = try_budget_loadout(agent, budget, tier, rng) else {
            trace!(attempt, "attempt overspent, retrying");
            continue;
        };
        if loadout.total_cost <= budget {
            debug!(attempt, total = loadout.total_cost, "budget loadout accepted");
            return Ok(loadout);
        }
    }

    warn!(agent = agent.id, budget, "no loadout fit after {MAX_ATTEMPTS} attempts");
    Err(LoadoutError::BudgetExhausted {
        agent: agent.name.to_string(),
        budget,
        attempts: MAX_ATTEMPTS,
    })
}

fn try_budget_loadout<R>(
    agent: &'static Agent,
    budget: u32,
    tier: BudgetTier,
    rng: &mut R,
) -> Option<Loadout>
where
    R: RandomSource + ?Sized,
{
    let mut remaining = budget;

    let primary = weighted_primary(remaining, tier, rng);
    remaining = remaining.checked_sub(primary.cost)?;

    let sidearm = weighted_sidearm(remaining, tier, rng);
    remaining = remaining.checked_sub(sidearm.cost)?;

    let shield = weighted_shield(remaining, tier, rng);
    remaining = remaining.checked_sub(shield.cost)?;

    let abilities = buy_abilities(agent, remaining, tier, rng);
    remaining.checked_sub(abilities.cost)?;

    Some(Loadout::assemble(agent, Some(tier), primary, sidearm, shield, abilities))
}

fn random_loadout<R>(agent: &'static Agent, rng: &mut R) -> Loadout
where
    R: RandomSource + ?Sized,
{
    let primaries = catalog::unconstrained_primary_pool();
    let primary = primaries[rng.pick_index(primaries.len())];
    let sidearm = SIDEARMS[rng.pick_index(SIDEARMS.len())];
    let shield = SHIELDS[rng.pick_index(SHIELDS.len())];
    let abilities = random_abilities(agent, rng);
    Loadout::assemble(agent, None, primary, sidearm, shield, abilities)
}

/// Roll a loadout, optionally for a specific agent and optionally under a budget.
///
/// Without an agent one is picked uniformly from the roster. Without a
/// budget the draw is unweighted and a real primary is always chosen.
pub fn generate_loadout<R>(
    agent_id: Option<&str>,
    budget: Option<u32>,
    rng: &mut R,
) -> Result<Loadout>
where
    R: RandomSource + ?Sized,
{
    let agent = match agent_id {
        Some(id) => lookup(id)?,
        None => &AGENTS[rng.pick_index(AGENTS.len())],
    };

    match budget {
        Some(credits) => generate_budget_loadout(agent.id, credits, rng),
        None => {
            let loadout = random_loadout(agent, rng);
            debug!(agent = agent.id, total = loadout.total_cost, "generated free loadout");
            Ok(loadout)
        }
    }
}

/// One budget loadout per agent that can be equipped with `budget`,
/// most expensive first. Agents with equal totals keep roster order.
pub fn all_affordable_agents<R>(budget: u32, rng: &mut R) -> Vec<Loadout>
where
    R: RandomSource + ?Sized,
{
    let mut affordable: Vec<Loadout> = AGENTS
        .iter()
        .filter_map(|agent| match generate_budget_loadout(agent.id, budget, rng) {
            Ok(loadout) => Some(loadout),
            Err(err) => {
                warn!("skipping {}: {err}", agent.id);
                None
            }
        })
        .collect();

    affordable.sort_by(|a, b| b.total_cost.cmp(&a.total_cost));
    affordable
}

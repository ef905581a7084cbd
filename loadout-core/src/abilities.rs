use serde::Serialize;

use crate::catalog::{AbilitySlot, Agent};
use crate::random::RandomSource;
use crate::tier::BudgetTier;

/// Chance of buying each slot when no budget applies.
const UNCONSTRAINED_SKIP_CHANCE: f64 = 0.3;

#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize)]
pub struct AbilityPurchase {
    /// Sorted by letter, no duplicates.
    pub abilities: Vec<AbilitySlot>,
    pub cost: u32,
}

impl AbilityPurchase {
    fn push(&mut self, slot: AbilitySlot, cost: u32) {
        if !self.abilities.contains(&slot) {
            self.abilities.push(slot);
            self.cost += cost;
        }
    }

    fn finish(mut self) -> Self {
        self.abilities.sort();
        self
    }
}

/// Spend at most `remaining` credits on abilities.
///
/// Slots are considered in C, Q, E order. Each is rolled against the
/// tier's purchase chance and bought only if it still fits; a slot that
/// does not fit is skipped, not retried.
pub fn buy_abilities<R>(
    agent: &Agent,
    remaining: u32,
    tier: BudgetTier,
    rng: &mut R,
) -> AbilityPurchase
where
    R: RandomSource + ?Sized,
{
    let chance = tier.ability_purchase_chance();
    let mut purchase = AbilityPurchase::default();

    for slot in AbilitySlot::ALL {
        if rng.next_unit() < chance {
            let cost = agent.ability_cost(slot);
            if purchase.cost + cost <= remaining {
                purchase.push(slot, cost);
            }
        }
    }
    purchase.finish()
}

/// Budget-free ability roll: every slot is bought with 70% probability.
pub fn random_abilities<R>(agent: &Agent, rng: &mut R) -> AbilityPurchase
where
    R: RandomSource + ?Sized,
{
    let mut purchase = AbilityPurchase::default();
    for slot in AbilitySlot::ALL {
        if rng.next_unit() > UNCONSTRAINED_SKIP_CHANCE {
            purchase.push(slot, agent.ability_cost(slot));
        }
    }
    purchase.finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::find_agent;
    use crate::random::ScriptedSource;

    fn agent(id: &str) -> &'static Agent {
        find_agent(id).unwrap()
    }

    #[test]
    fn buys_everything_when_rolls_succeed() {
        let mut src = ScriptedSource::constant(0.0);
        let p = buy_abilities(agent("sage"), 9000, BudgetTier::Full, &mut src);
        assert_eq!(p.abilities, [AbilitySlot::C, AbilitySlot::E, AbilitySlot::Q]);
        assert_eq!(p.cost, 600);
    }

    #[test]
    fn earlier_slots_take_priority_when_tight() {
        // Sage: C 400, Q 200, E free. 500 credits covers C, not Q, and E is free.
        let mut src = ScriptedSource::constant(0.0);
        let p = buy_abilities(agent("sage"), 500, BudgetTier::Eco, &mut src);
        assert_eq!(p.abilities, [AbilitySlot::C, AbilitySlot::E]);
        assert_eq!(p.cost, 400);
    }

    #[test]
    fn zero_budget_only_gets_signature() {
        let mut src = ScriptedSource::constant(0.1);
        let p = buy_abilities(agent("jett"), 0, BudgetTier::Eco, &mut src);
        assert_eq!(p.abilities, [AbilitySlot::E]);
        assert_eq!(p.cost, 0);
    }

    #[test]
    fn failed_rolls_buy_nothing() {
        // 0.6 is not below the half-tier chance.
        let mut src = ScriptedSource::constant(0.6);
        let p = buy_abilities(agent("jett"), 3000, BudgetTier::Half, &mut src);
        assert!(p.abilities.is_empty());
        assert_eq!(p.cost, 0);
        assert_eq!(src.consumed(), 3);
    }

    #[test]
    fn unconstrained_roll_ignores_budget() {
        let mut src = ScriptedSource::new(vec![0.9, 0.2, 0.31]);
        let p = random_abilities(agent("skye"), &mut src);
        assert_eq!(p.abilities, [AbilitySlot::C, AbilitySlot::E]);
        // E is Skye's signature.
        assert_eq!(p.cost, 200);
    }
}

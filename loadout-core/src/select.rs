use tracing::trace;

use crate::catalog::{self, Item, CLASSIC, NO_PRIMARY, NO_SHIELD, SHIELDS, SIDEARMS};
use crate::random::RandomSource;
use crate::tier::BudgetTier;

/// Which slot of the loadout a draw is for; each has its own pool,
/// fallback and weight table.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum ItemKind {
    Primary,
    Sidearm,
    Shield,
}

impl ItemKind {
    pub fn pool(self) -> Vec<Item> {
        match self {
            ItemKind::Primary => catalog::weighted_primary_pool(),
            ItemKind::Sidearm => SIDEARMS.to_vec(),
            ItemKind::Shield => SHIELDS.to_vec(),
        }
    }

    /// Returned when nothing in the pool is affordable.
    pub fn fallback(self) -> Item {
        match self {
            ItemKind::Primary => NO_PRIMARY,
            ItemKind::Sidearm => CLASSIC,
            ItemKind::Shield => NO_SHIELD,
        }
    }

    pub fn weight(self, tier: BudgetTier, cost: u32) -> u32 {
        match self {
            ItemKind::Primary => primary_weight(tier, cost),
            ItemKind::Sidearm => sidearm_weight(tier, cost),
            ItemKind::Shield => shield_weight(tier, cost),
        }
    }
}

fn primary_weight(tier: BudgetTier, cost: u32) -> u32 {
    match tier {
        // Cheap pistols and "None" dominate.
        BudgetTier::Eco => match cost {
            0 => 30,
            1..=500 => 40,
            501..=1000 => 20,
            _ => 10,
        },
        BudgetTier::Half => match cost {
            0 => 10,
            1..=1000 => 20,
            1001..=2000 => 50,
            2001..=3000 => 30,
            _ => 10,
        },
        // Rifles and up.
        BudgetTier::Full => match cost {
            0 => 5,
            1..=1599 => 10,
            1600..=2499 => 20,
            _ => 70,
        },
    }
}

fn sidearm_weight(tier: BudgetTier, cost: u32) -> u32 {
    match tier {
        BudgetTier::Eco => match cost {
            0 => 50,
            1..=300 => 30,
            _ => 20,
        },
        BudgetTier::Half => match cost {
            0 => 30,
            1..=500 => 40,
            _ => 30,
        },
        BudgetTier::Full => match cost {
            0 => 10,
            500.. => 60,
            _ => 30,
        },
    }
}

fn shield_weight(tier: BudgetTier, cost: u32) -> u32 {
    match (tier, cost) {
        (BudgetTier::Eco, 0) => 60,
        (BudgetTier::Eco, 400) => 30,
        (BudgetTier::Eco, _) => 10,
        (BudgetTier::Half, 0) => 30,
        (BudgetTier::Half, 400) => 50,
        (BudgetTier::Half, _) => 20,
        (BudgetTier::Full, 0) => 5,
        (BudgetTier::Full, 400) => 15,
        (BudgetTier::Full, _) => 80,
    }
}

/// Linear roulette-wheel draw.
///
/// A value in `[0, total)` is drawn and each weight is subtracted in
/// order; the first candidate that brings the remainder to `<= 0` wins.
/// A draw landing exactly on a cumulative boundary therefore resolves to
/// the earlier candidate. If rounding lets the walk finish, the last
/// candidate is returned.
///
/// Returns `None` only for an empty slice.
pub fn roulette<'a, T, R>(items: &'a [T], weights: &[u32], rng: &mut R) -> Option<&'a T>
where
    R: RandomSource + ?Sized,
{
    debug_assert_eq!(items.len(), weights.len());
    let total: u64 = weights.iter().map(|&w| u64::from(w)).sum();
    let mut remainder = rng.next_unit() * total as f64;

    for (item, &w) in items.iter().zip(weights) {
        remainder -= f64::from(w);
        if remainder <= 0.0 {
            return Some(item);
        }
    }
    items.last()
}

/// Draw one item of `kind` costing at most `budget`, weighted by `tier`.
pub fn select<R>(kind: ItemKind, budget: u32, tier: BudgetTier, rng: &mut R) -> Item
where
    R: RandomSource + ?Sized,
{
    let affordable: Vec<Item> = kind
        .pool()
        .into_iter()
        .filter(|item| item.cost <= budget)
        .collect();

    let weights: Vec<u32> = affordable
        .iter()
        .map(|item| kind.weight(tier, item.cost))
        .collect();

    let picked = roulette(&affordable, &weights, rng)
        .copied()
        .unwrap_or_else(|| kind.fallback());
    trace!(
        ?kind,
        budget,
        %tier,
        candidates = affordable.len(),
        picked = picked.name,
        "weighted draw"
    );
    picked
}

pub fn weighted_primary<R>(budget: u32, tier: BudgetTier, rng: &mut R) -> Item
where
    R: RandomSource + ?Sized,
{
    select(ItemKind::Primary, budget, tier, rng)
}

pub fn weighted_sidearm<R>(budget: u32, tier: BudgetTier, rng: &mut R) -> Item
where
    R: RandomSource + ?Sized,
{
    select(ItemKind::Sidearm, budget, tier, rng)
}

pub fn weighted_shield<R>(budget: u32, tier: BudgetTier, rng: &mut R) -> Item
where
    R: RandomSource + ?Sized,
{
    select(ItemKind::Shield, budget, tier, rng)
}

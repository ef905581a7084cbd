use serde::Serialize;
use std::fmt;

#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize)]
pub enum Role {
    Controller,
    Duelist,
    Initiator,
    Sentinel,
}

impl Role {
    pub const ALL: [Role; 4] = [
        Role::Controller,
        Role::Duelist,
        Role::Initiator,
        Role::Sentinel,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Role::Controller => "Controller",
            Role::Duelist => "Duelist",
            Role::Initiator => "Initiator",
            Role::Sentinel => "Sentinel",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One of the three purchasable ability keys.
///
/// Variants are declared alphabetically so the derived `Ord` sorts
/// purchased abilities by their letter; purchase order is [`AbilitySlot::ALL`].
#[derive(Copy, Clone, Debug, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize)]
pub enum AbilitySlot {
    C,
    E,
    Q,
}

impl AbilitySlot {
    pub const ALL: [AbilitySlot; 3] = [AbilitySlot::C, AbilitySlot::Q, AbilitySlot::E];

    pub fn letter(self) -> char {
        match self {
            AbilitySlot::C => 'C',
            AbilitySlot::Q => 'Q',
            AbilitySlot::E => 'E',
        }
    }
}

impl fmt::Display for AbilitySlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, Serialize)]
pub struct Agent {
    pub id: &'static str,
    pub name: &'static str,
    pub role: Role,
    pub c: u32,
    pub q: u32,
    pub e: u32,
    pub signature: AbilitySlot,
    /// Purely cosmetic; never used in cost calculations.
    pub charges: Option<(AbilitySlot, u8)>,
}

impl Agent {
    pub fn listed_cost(&self, slot: AbilitySlot) -> u32 {
        match slot {
            AbilitySlot::C => self.c,
            AbilitySlot::Q => self.q,
            AbilitySlot::E => self.e,
        }
    }

    /// Price actually paid for `slot`. The signature ability is always free.
    pub fn ability_cost(&self, slot: AbilitySlot) -> u32 {
        if slot == self.signature {
            0
        } else {
            self.listed_cost(slot)
        }
    }
}

const fn agent(
    id: &'static str,
    name: &'static str,
    role: Role,
    c: u32,
    q: u32,
    e: u32,
    signature: AbilitySlot,
) -> Agent {
    Agent {
        id,
        name,
        role,
        c,
        q,
        e,
        signature,
        charges: None,
    }
}

use AbilitySlot::{E as SIG_E, Q as SIG_Q};

pub const AGENTS: &[Agent] = &[
    // Controllers
    Agent {
        charges: Some((AbilitySlot::C, 4)),
        ..agent("astra", "Astra", Role::Controller, 150, 0, 0, SIG_E)
    },
    agent("brimstone", "Brimstone", Role::Controller, 100, 250, 0, SIG_E),
    agent("omen", "Omen", Role::Controller, 150, 300, 0, SIG_E),
    agent("viper", "Viper", Role::Controller, 200, 200, 0, SIG_E),
    agent("harbor", "Harbor", Role::Controller, 150, 350, 0, SIG_E),
    agent("clove", "Clove", Role::Controller, 100, 250, 150, SIG_E),
    // Duelists
    agent("jett", "Jett", Role::Duelist, 200, 150, 0, SIG_E),
    agent("phoenix", "Phoenix", Role::Duelist, 200, 250, 0, SIG_E),
    agent("reyna", "Reyna", Role::Duelist, 250, 0, 0, SIG_Q),
    agent("raze", "Raze", Role::Duelist, 400, 200, 0, SIG_E),
    agent("yoru", "Yoru", Role::Duelist, 100, 250, 0, SIG_E),
    agent("neon", "Neon", Role::Duelist, 300, 200, 0, SIG_E),
    agent("iso", "Iso", Role::Duelist, 250, 300, 150, SIG_E),
    // Initiators
    agent("sova", "Sova", Role::Initiator, 400, 150, 0, SIG_E),
    agent("breach", "Breach", Role::Initiator, 250, 200, 0, SIG_E),
    agent("skye", "Skye", Role::Initiator, 200, 250, 250, SIG_E),
    agent("kayo", "Kayo", Role::Initiator, 200, 250, 0, SIG_E),
    agent("fade", "Fade", Role::Initiator, 250, 200, 0, SIG_E),
    agent("gekko", "Gekko", Role::Initiator, 250, 300, 0, SIG_E),
    agent("tejo", "Tejo", Role::Initiator, 400, 200, 150, SIG_E),
    // Sentinels
    agent("sage", "Sage", Role::Sentinel, 400, 200, 0, SIG_E),
    agent("cypher", "Cypher", Role::Sentinel, 200, 100, 0, SIG_E),
    agent("killjoy", "Killjoy", Role::Sentinel, 200, 200, 0, SIG_E),
    agent("chamber", "Chamber", Role::Sentinel, 150, 100, 0, SIG_Q),
    agent("deadlock", "Deadlock", Role::Sentinel, 200, 200, 300, SIG_E),
    agent("vyse", "Vyse", Role::Sentinel, 150, 200, 0, SIG_E),
    agent("veto", "Veto", Role::Sentinel, 200, 200, 0, SIG_E),
];

/// A purchasable weapon or shield.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize)]
pub struct Item {
    pub name: &'static str,
    pub cost: u32,
}

const fn item(name: &'static str, cost: u32) -> Item {
    Item { name, cost }
}

pub const SIDEARMS: &[Item] = &[
    item("Classic", 0),
    item("Shorty", 300),
    item("Frenzy", 450),
    item("Ghost", 500),
    item("Sheriff", 800),
];

pub const SMGS: &[Item] = &[item("Stinger", 1100), item("Spectre", 1600)];

pub const SHOTGUNS: &[Item] = &[item("Bucky", 850), item("Judge", 1850)];

pub const RIFLES: &[Item] = &[
    item("Bulldog", 2050),
    item("Guardian", 2250),
    item("Phantom", 2900),
    item("Vandal", 2900),
];

pub const SNIPERS: &[Item] = &[
    item("Marshal", 950),
    item("Outlaw", 2400),
    item("Operator", 4700),
];

pub const LMGS: &[Item] = &[item("Ares", 1600), item("Odin", 3200)];

pub const SHIELDS: &[Item] = &[
    item("No Shield", 0),
    item("Light Shield", 400),
    item("Heavy Shield", 1000),
];

pub const NO_PRIMARY: Item = item("None", 0);
pub const CLASSIC: Item = SIDEARMS[0];
pub const NO_SHIELD: Item = SHIELDS[0];

const PRIMARY_CATEGORIES: [&[Item]; 5] = [SMGS, SHOTGUNS, RIFLES, SNIPERS, LMGS];

/// Candidates for a budget-weighted primary draw, in the order the
/// roulette wheel walks them: "None", paid sidearms, then every primary
/// category.
pub fn weighted_primary_pool() -> Vec<Item> {
    let mut pool = vec![NO_PRIMARY];
    pool.extend(SIDEARMS.iter().copied().filter(|w| w.cost > 0));
    pool.extend(PRIMARY_CATEGORIES.iter().flat_map(|c| c.iter().copied()));
    pool
}

/// Primaries eligible when no budget applies. "None" and sidearms are excluded.
pub fn unconstrained_primary_pool() -> Vec<Item> {
    PRIMARY_CATEGORIES
        .iter()
        .flat_map(|c| c.iter().copied())
        .collect()
}

pub fn find_agent(id: &str) -> Option<&'static Agent> {
    let key = id.trim();
    AGENTS.iter().find(|a| a.id.eq_ignore_ascii_case(key))
}

pub fn agents_by_role(role: Role) -> impl Iterator<Item = &'static Agent> {
    AGENTS.iter().filter(move |a| a.role == role)
}

/// Credits needed for `slot` on the agent named `agent_id`; 0 when the
/// agent is unknown.
pub fn ability_cost(agent_id: &str, slot: AbilitySlot) -> u32 {
    find_agent(agent_id).map_or(0, |a| a.ability_cost(slot))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn signature_ability_is_free() {
        for a in AGENTS {
            assert_eq!(ability_cost(a.id, a.signature), 0, "{}", a.id);
        }
        assert_eq!(ability_cost("jett", AbilitySlot::C), 200);
        assert_eq!(ability_cost("reyna", AbilitySlot::C), 250);
        assert_eq!(ability_cost("reyna", AbilitySlot::Q), 0);
    }

    #[test]
    fn unknown_agent_costs_nothing() {
        for slot in AbilitySlot::ALL {
            assert_eq!(ability_cost("nonexistent", slot), 0);
        }
    }

    #[test]
    fn lookup_ignores_case_and_padding() {
        assert_eq!(find_agent("  JeTT ").map(|a| a.id), Some("jett"));
        assert!(find_agent("").is_none());
    }

    #[test]
    fn agent_ids_are_unique_and_names_match() {
        for (i, a) in AGENTS.iter().enumerate() {
            assert!(a.name.eq_ignore_ascii_case(a.id));
            assert!(AGENTS[i + 1..].iter().all(|b| b.id != a.id));
        }
        assert_eq!(AGENTS.len(), 27);
    }

    #[test]
    fn weighted_pool_order() {
        let names: Vec<_> = weighted_primary_pool().iter().map(|w| w.name).collect();
        assert_eq!(
            names,
            [
                "None", "Shorty", "Frenzy", "Ghost", "Sheriff", "Stinger", "Spectre", "Bucky",
                "Judge", "Bulldog", "Guardian", "Phantom", "Vandal", "Marshal", "Outlaw",
                "Operator", "Ares", "Odin",
            ]
        );
        assert!(unconstrained_primary_pool()
            .iter()
            .all(|w| w.cost > 0 && !SIDEARMS.contains(w)));
    }

    #[test]
    fn slots_sort_alphabetically() {
        let mut slots = AbilitySlot::ALL.to_vec();
        slots.sort();
        assert_eq!(slots, [AbilitySlot::C, AbilitySlot::E, AbilitySlot::Q]);
    }
}

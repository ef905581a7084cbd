//! Plain-text rendering for the command console.

use crate::catalog::{agents_by_role, AbilitySlot, Role, AGENTS};
use crate::generate::Loadout;

const BOX_WIDTH: usize = 64;
const TABLE_WIDTH: usize = 100;

/// `3000` -> `3,000`.
pub fn credits(amount: u32) -> String {
    let digits = amount.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

fn join_abilities(abilities: &[AbilitySlot], sep: &str) -> String {
    if abilities.is_empty() {
        return "None".to_string();
    }
    abilities
        .iter()
        .map(|a| a.letter().to_string())
        .collect::<Vec<_>>()
        .join(sep)
}

pub fn loadout_report(loadout: &Loadout) -> String {
    let rule = "═".repeat(BOX_WIDTH);
    let mut out = String::new();

    out.push_str(&format!("╔{rule}╗\n"));
    out.push_str(&format!(
        "  AGENT: {} ({})\n",
        loadout.agent.to_uppercase(),
        loadout.role
    ));
    out.push_str(&format!("╠{rule}╣\n"));
    for (label, item) in [
        ("PRIMARY:", &loadout.primary),
        ("SIDEARM:", &loadout.sidearm),
        ("SHIELD:", &loadout.shield),
    ] {
        out.push_str(&format!(
            "  {label:<10} {:<15} ${}\n",
            item.name,
            credits(item.cost)
        ));
    }
    out.push_str(&format!(
        "  ABILITIES: {}\n",
        join_abilities(&loadout.abilities, " + ")
    ));
    out.push_str(&format!("╠{rule}╣\n"));
    out.push_str(&format!("  TOTAL COST: ${}\n", credits(loadout.total_cost)));
    out.push_str(&format!("╚{rule}╝"));
    out
}

pub fn compact_row(loadout: &Loadout) -> String {
    format!(
        "{:<12} | {:<10} | {:<8} | {:<13} | {:<15} | ${}",
        loadout.agent.to_uppercase(),
        loadout.primary.name,
        loadout.sidearm.name,
        loadout.shield.name,
        join_abilities(&loadout.abilities, "+"),
        credits(loadout.total_cost)
    )
}

pub fn affordable_table(budget: u32, loadouts: &[Loadout]) -> String {
    if loadouts.is_empty() {
        return format!(
            "No agents can afford a full loadout with ${} budget.",
            credits(budget)
        );
    }

    let heavy = "═".repeat(TABLE_WIDTH);
    let light = "─".repeat(TABLE_WIDTH);
    let mut out = String::new();

    out.push_str(&format!("{heavy}\n"));
    out.push_str(&format!(
        "  AGENTS AFFORDABLE AT ${} ({} agents)\n",
        credits(budget),
        loadouts.len()
    ));
    out.push_str(&format!("{heavy}\n"));
    out.push_str(&format!(
        "  {:<12} | {:<10} | {:<8} | {:<13} | {:<15} | TOTAL\n",
        "AGENT", "PRIMARY", "SIDEARM", "SHIELD", "ABILITIES"
    ));
    out.push_str(&format!("{light}\n"));
    for loadout in loadouts {
        out.push_str(&format!("  {}\n", compact_row(loadout)));
    }
    out.push_str(&heavy);
    out
}

fn boxed_line(text: &str) -> String {
    format!("║  {text:<width$}║", width = BOX_WIDTH - 2)
}

pub fn help_text() -> String {
    let rule = "═".repeat(BOX_WIDTH);
    let body = [
        "",
        "loadout",
        "  Generate a completely random loadout",
        "",
        "agent:<name>",
        "  Generate random loadout for specific agent",
        "  Example: agent:jett, agent:sage, agent:omen",
        "",
        "<number>",
        "  Show all agents that can afford a loadout at that budget",
        "  Example: 800, 3000, 5500",
        "",
        "agents",
        "  List all available agents",
        "",
        "help",
        "  Show this help message",
        "",
        "clear",
        "  Clear the output screen",
        "",
    ];
    let budgets = [
        "COMMON BUDGETS:",
        "  800  - Pistol round",
        "  2500 - Eco/save round",
        "  3500 - Half buy",
        "  5500 - Full buy",
    ];

    let mut out = String::new();
    out.push_str(&format!("╔{rule}╗\n"));
    out.push_str(&format!(
        "{}\n",
        boxed_line(&format!("{:^60}", "AVAILABLE COMMANDS"))
    ));
    out.push_str(&format!("╠{rule}╣\n"));
    for line in body {
        out.push_str(&format!("{}\n", boxed_line(line)));
    }
    out.push_str(&format!("╠{rule}╣\n"));
    for line in budgets {
        out.push_str(&format!("{}\n", boxed_line(line)));
    }
    out.push_str(&format!("╚{rule}╝"));
    out
}

pub fn agent_roster() -> String {
    let rule = "═".repeat(BOX_WIDTH);
    let mut out = String::new();

    out.push_str(&format!("╔{rule}╗\n"));
    let title = format!("ALL AGENTS ({})", AGENTS.len());
    out.push_str(&format!("{}\n", boxed_line(&format!("{title:^60}"))));
    out.push_str(&format!("╠{rule}╣\n"));
    out.push('\n');

    for role in Role::ALL {
        let names: Vec<&str> = agents_by_role(role).map(|a| a.name).collect();
        out.push_str(&format!(
            "  {} ({}):\n",
            role.as_str().to_uppercase(),
            names.len()
        ));
        out.push_str(&format!("    {}\n", names.join(", ")));
        out.push('\n');
    }

    out.push_str(&format!("╚{rule}╝"));
    out
}

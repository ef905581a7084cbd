//! Console command interpreter.
//!
//! Input is only ever matched against a fixed keyword set and the static
//! agent table; nothing typed by the user is evaluated.

use thiserror::Error;
use tracing::debug;

use crate::catalog::find_agent;
use crate::format;
use crate::generate::{all_affordable_agents, generate_loadout};
use crate::random::RandomSource;
use crate::LoadoutError;

pub const MIN_BUDGET: i64 = 0;
pub const MAX_BUDGET: i64 = 9000;

#[derive(Debug, Clone, Eq, PartialEq)]
pub enum Command {
    Help,
    Clear,
    /// Random agent, no budget. Also reachable as `random`.
    Loadout,
    /// Catalog id of a known agent.
    Agent(String),
    Agents,
    Budget(u32),
}

#[derive(Debug, Error, Eq, PartialEq)]
pub enum CommandError {
    #[error("Empty command. Type 'help' for available commands.")]
    Empty,
    #[error("Please specify an agent name. Example: agent:jett")]
    MissingAgent,
    #[error("Unknown agent '{0}'. Type 'agents' to see all agents.")]
    UnknownAgent(String),
    #[error("Budget must be between 0 and 9000 credits.")]
    BudgetOutOfRange,
    #[error("Unknown command '{0}'. Type 'help' for available commands.")]
    Unknown(String),
    #[error("Could not generate loadout: {0}")]
    Generation(#[from] LoadoutError),
}

/// What the presentation layer should do with a command's result.
#[derive(Debug, Clone, Eq, PartialEq)]
pub enum Response {
    Text(String),
    Clear,
}

/// Optionally signed run of ASCII digits.
fn is_integer_token(token: &str) -> bool {
    let digits = token
        .strip_prefix('-')
        .or_else(|| token.strip_prefix('+'))
        .unwrap_or(token);
    !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit())
}

fn parse_budget(token: &str) -> Result<u32, CommandError> {
    // Anything too long for i64 is certainly out of range.
    let value: i64 = token.parse().map_err(|_| CommandError::BudgetOutOfRange)?;
    if !(MIN_BUDGET..=MAX_BUDGET).contains(&value) {
        return Err(CommandError::BudgetOutOfRange);
    }
    u32::try_from(value).map_err(|_| CommandError::BudgetOutOfRange)
}

impl Command {
    pub fn parse(input: &str) -> Result<Self, CommandError> {
        let command = input.trim().to_lowercase();
        if command.is_empty() {
            return Err(CommandError::Empty);
        }

        match command.as_str() {
            "help" => return Ok(Command::Help),
            "clear" => return Ok(Command::Clear),
            "loadout" | "random" => return Ok(Command::Loadout),
            "agents" => return Ok(Command::Agents),
            _ => {}
        }

        if let Some(rest) = command.strip_prefix("agent:") {
            let name = rest.trim();
            if name.is_empty() {
                return Err(CommandError::MissingAgent);
            }
            return find_agent(name)
                .map(|agent| Command::Agent(agent.id.to_string()))
                .ok_or_else(|| CommandError::UnknownAgent(name.to_string()));
        }

        if is_integer_token(&command) {
            return parse_budget(&command).map(Command::Budget);
        }

        Err(CommandError::Unknown(command))
    }

    pub fn execute<R>(&self, rng: &mut R) -> Result<Response, CommandError>
    where
        R: RandomSource + ?Sized,
    {
        let text = match self {
            Command::Help => format::help_text(),
            Command::Clear => return Ok(Response::Clear),
            Command::Loadout => format::loadout_report(&generate_loadout(None, None, rng)?),
            Command::Agent(id) => {
                format::loadout_report(&generate_loadout(Some(id.as_str()), None, rng)?)
            }
            Command::Agents => format::agent_roster(),
            Command::Budget(budget) => {
                let affordable = all_affordable_agents(*budget, rng);
                format::affordable_table(*budget, &affordable)
            }
        };
        Ok(Response::Text(text))
    }
}

/// Run one console line and render the outcome as text.
///
/// Returns an empty string for `clear` and an `ERROR: ...` line for
/// anything that could not be parsed or generated.
pub fn process_command<R>(input: &str, rng: &mut R) -> String
where
    R: RandomSource + ?Sized,
{
    let outcome = Command::parse(input).and_then(|command| {
        debug!(?command, "running console command");
        command.execute(rng)
    });

    match outcome {
        Ok(Response::Text(text)) => text,
        Ok(Response::Clear) => String::new(),
        Err(err) => format!("ERROR: {err}"),
    }
}

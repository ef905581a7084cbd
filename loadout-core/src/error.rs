use thiserror::Error;

#[derive(Debug, Clone, Error, Eq, PartialEq)]
pub enum LoadoutError {
    #[error("unknown agent '{0}'")]
    UnknownAgent(String),
    #[error("no valid loadout for {agent} within ${budget} after {attempts} attempts")]
    BudgetExhausted {
        agent: String,
        budget: u32,
        attempts: usize,
    },
}

pub type Result<T> = std::result::Result<T, LoadoutError>;

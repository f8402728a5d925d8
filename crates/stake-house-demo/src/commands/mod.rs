//! Demo Commands
//!
//! One handler per dashboard event, plus the line parser and dispatcher
//! used by the terminal front end. Handlers never fail: errors are logged
//! and turned into status lines and notifications on [`DemoState`].

pub mod export;
pub mod stake;
pub mod token;
pub mod wallet;

pub use export::{export_wallets, write_export};
pub use stake::{join_airdrop, make_deposit, pool_balance, registered_users};
pub use token::{balance, mint, resolve_target, transfer};
pub use wallet::{bootstrap, create_wallet, generate_wallet, reset_all, reset_wallet};

use crate::error::{DemoError, Result};
use crate::models::Role;
use crate::render;
use crate::state::DemoState;
use std::path::PathBuf;
use std::str::FromStr;

/// A parsed terminal command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Generate(Role),
    Reset(Role),
    ResetAll,
    /// Set the deposit amount field without submitting
    Amount(String),
    Deposit(Option<String>),
    Join(u8),
    Mint { to: String, amount: String },
    Transfer { from: String, to: String, amount: String },
    Balance(String),
    PoolBalance,
    Users,
    Export(Option<PathBuf>),
    Status,
    Help,
    Quit,
}

impl FromStr for Command {
    type Err = DemoError;

    fn from_str(line: &str) -> Result<Self> {
        let mut words = line.split_whitespace();
        let Some(name) = words.next() else {
            return Err(DemoError::UnknownCommand(String::new()));
        };
        let rest: Vec<&str> = words.collect();
        let usage = |text: &str| DemoError::UnknownCommand(format!("usage: {}", text));

        let command = match (name.to_ascii_lowercase().as_str(), rest.as_slice()) {
            ("generate" | "gen", [_, ..]) => Command::Generate(rest.join(" ").parse()?),
            ("generate" | "gen", []) => return Err(usage("generate <investor|user N>")),
            ("reset", [_, ..]) => Command::Reset(rest.join(" ").parse()?),
            ("reset", []) => return Err(usage("reset <investor|user N>")),
            ("reset-all", []) => Command::ResetAll,
            ("amount", [value]) => Command::Amount((*value).to_string()),
            ("amount", _) => return Err(usage("amount <value>")),
            ("deposit", []) => Command::Deposit(None),
            ("deposit", [value]) => Command::Deposit(Some((*value).to_string())),
            ("join", [_, ..]) => match rest.join(" ").parse()? {
                Role::User(n) => Command::Join(n),
                Role::Investor => return Err(usage("join <user N>")),
            },
            ("mint", [to, amount]) => Command::Mint {
                to: (*to).to_string(),
                amount: (*amount).to_string(),
            },
            ("mint", _) => return Err(usage("mint <to> <amount>")),
            ("transfer", [from, to, amount]) => Command::Transfer {
                from: (*from).to_string(),
                to: (*to).to_string(),
                amount: (*amount).to_string(),
            },
            ("transfer", _) => return Err(usage("transfer <from> <to> <amount>")),
            ("balance", [target]) => Command::Balance((*target).to_string()),
            ("balance", _) => return Err(usage("balance <investor|userN|address>")),
            ("pool-balance", []) => Command::PoolBalance,
            ("users", []) => Command::Users,
            ("export", []) => Command::Export(None),
            ("export", [dir]) => Command::Export(Some(PathBuf::from(*dir))),
            ("status", []) => Command::Status,
            ("help" | "?", []) => Command::Help,
            ("quit" | "exit", []) => Command::Quit,
            _ => return Err(DemoError::UnknownCommand(line.trim().to_string())),
        };
        Ok(command)
    }
}

/// What the front end should do after a command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Show(String),
    Quit,
}

/// Run one command against the state
pub async fn dispatch(state: &mut DemoState, command: Command) -> Flow {
    tracing::debug!("Dispatching {:?}", command);

    match command {
        Command::Generate(role) => {
            generate_wallet(state, role).await;
        }
        Command::Reset(role) => {
            reset_wallet(state, role);
        }
        Command::ResetAll => reset_all(state),
        Command::Amount(value) => {
            state.deposit_input = value;
            let enabled = if state.deposit_enabled() { "enabled" } else { "disabled" };
            return Flow::Show(format!("Deposit {}", enabled));
        }
        Command::Deposit(value) => {
            if let Some(value) = value {
                state.deposit_input = value;
            }
            make_deposit(state).await;
        }
        Command::Join(index) => {
            join_airdrop(state, index).await;
        }
        Command::Mint { to, amount } => {
            mint(state, &to, &amount).await;
        }
        Command::Transfer { from, to, amount } => {
            transfer(state, &from, &to, &amount).await;
        }
        Command::Balance(target) => {
            balance(state, &target).await;
        }
        Command::PoolBalance => {
            pool_balance(state).await;
        }
        Command::Users => {
            registered_users(state).await;
        }
        Command::Export(dir) => {
            export_wallets(state, dir.as_deref()).await;
        }
        Command::Status => return Flow::Show(render::dashboard(state)),
        Command::Help => return Flow::Show(render::HELP.to_string()),
        Command::Quit => return Flow::Quit,
    }
    Flow::Continue
}

//! Plain-text dashboard rendering

use crate::models::*;
use crate::state::DemoState;
use std::fmt;

pub const HELP: &str = "\
Commands:
  generate <investor|user N>      create and fund a wallet
  reset <investor|user N>         remove a wallet
  reset-all                       remove every wallet
  amount <value>                  set the deposit amount
  deposit [amount]                deposit from the investor into the pool
  join <N>                        register user N for the airdrop
  mint <to> <amount>              mint tokens (signed by the investor)
  transfer <from> <to> <amount>   transfer tokens (signed by <from>)
  balance <investor|userN|G...>   token balance
  pool-balance                    stake house pool balance
  users                           registered airdrop users
  export [dir]                    write wallets to JSON
  status                          show the dashboard
  help                            show this help
  quit                            exit";

fn status_line(status: &StatusMessage) -> String {
    let tag = match status.kind {
        StatusKind::Loading => "...",
        StatusKind::Success => "ok",
        StatusKind::Error => "error",
    };
    format!("[{}] {}", tag, status.text)
}

/// Latest notification as a single line
pub fn notification(notification: &Notification) -> String {
    match notification.kind {
        NotificationKind::Success => format!("* {}", notification.text),
        NotificationKind::Error => format!("! {}", notification.text),
    }
}

/// Full dashboard view
pub fn dashboard(state: &DemoState) -> String {
    Dashboard(state).to_string()
}

struct Dashboard<'a>(&'a DemoState);

impl fmt::Display for Dashboard<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.0;
        let wallets = &state.wallets;

        writeln!(f, "== Investor ==")?;
        match wallets.investor() {
            Some(wallet) => write_wallet(f, wallet)?,
            None => writeln!(f, "  (no wallet)")?,
        }
        let deposit = if state.deposit_enabled() { "enabled" } else { "disabled" };
        writeln!(f, "  Deposit amount: {:?} ({})", state.deposit_input, deposit)?;
        if let Some(status) = &state.deposit_status {
            writeln!(f, "  {}", status_line(status))?;
        }

        for n in 1..=MAX_USERS as u8 {
            writeln!(f, "== User {} ==", n)?;
            let Some(slot) = wallets.user(n) else {
                writeln!(f, "  (no wallet)")?;
                continue;
            };
            write_wallet(f, &slot.wallet)?;
            let join = if slot.registered {
                "registered"
            } else if wallets.join_enabled(n) {
                "join available"
            } else {
                "join disabled"
            };
            writeln!(f, "  Airdrop: {}", join)?;
            if let Some(status) = &slot.join_status {
                writeln!(f, "  {}", status_line(status))?;
            }
        }

        writeln!(f, "{}", wallets.counter_text())?;
        if let Some(current) = &state.notification {
            writeln!(f, "{}", notification(current))?;
        }
        Ok(())
    }
}

fn write_wallet(f: &mut fmt::Formatter<'_>, wallet: &Wallet) -> fmt::Result {
    writeln!(f, "  Public key: {}", wallet.public_key)?;
    writeln!(f, "  Secret key: {}", wallet.secret_key)?;
    writeln!(f, "  Created:    {}", wallet.created_at.format("%Y-%m-%d %H:%M:%S UTC"))
}

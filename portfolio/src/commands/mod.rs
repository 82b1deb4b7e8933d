use std::io::{BufRead, Write};

use anyhow::bail;
use clap::Args;
use portfolio_core_moderation_contracts::ModerationService;

pub mod image;
pub mod message;
pub mod store;
pub mod testimonial;

/// Arguments of commands that need the moderation view.
#[derive(Debug, Args)]
pub struct ModerationArgs {
    /// The moderation passphrase
    #[arg(long, env = "PORTFOLIO_ADMIN_PASSPHRASE", hide_env_values = true)]
    pub passphrase: String,
}

impl ModerationArgs {
    /// Switches to the moderation view or fails with the same message the
    /// site shows for a wrong passphrase.
    pub fn enter(&self, moderation: &impl ModerationService) -> anyhow::Result<()> {
        if !moderation.authenticate(&self.passphrase) {
            bail!("Incorrect password!");
        }
        Ok(())
    }
}

/// Asks a yes/no question on stderr and reads the answer from `input`.
pub fn confirm(question: &str, input: &mut impl BufRead) -> anyhow::Result<bool> {
    let mut stderr = std::io::stderr();
    write!(stderr, "{question} [y/N] ")?;
    stderr.flush()?;

    let mut answer = String::new();
    input.read_line(&mut answer)?;
    Ok(matches!(answer.trim(), "y" | "Y" | "yes" | "Yes"))
}

use std::io::{BufRead, Write};

use clap::Subcommand;
use portfolio_config::Config;
use portfolio_persistence_local::{CONTACT_MESSAGES_KEY, TESTIMONIALS_KEY};
use portfolio_store_contracts::StoreService;
use tracing::info;

use super::{confirm, ModerationArgs};
use crate::environment::Environment;

#[derive(Debug, Subcommand)]
pub enum StoreCommand {
    /// Show how much of the store capacity is in use
    #[command(aliases(["u"]))]
    Usage,
    /// Delete all stored messages and testimonials
    Clear {
        /// Do not ask for confirmation
        #[arg(short, long)]
        yes: bool,
        #[command(flatten)]
        moderation: ModerationArgs,
    },
}

impl StoreCommand {
    pub async fn invoke(self, config: Config) -> anyhow::Result<()> {
        let env = Environment::new(&config).await?;
        self.run(
            &env,
            &mut std::io::stdout().lock(),
            &mut std::io::stdin().lock(),
        )
        .await
    }

    pub async fn run(
        self,
        env: &Environment,
        out: &mut impl Write,
        input: &mut impl BufRead,
    ) -> anyhow::Result<()> {
        match self {
            StoreCommand::Usage => {
                let used = env.store.usage().await?;
                let capacity = env.store.capacity();
                writeln!(out, "{used} of {capacity} bytes used")?;
            }
            StoreCommand::Clear { yes, moderation } => {
                moderation.enter(&env.moderation)?;
                if !yes
                    && !confirm(
                        "Are you sure you want to delete all messages and testimonials?",
                        input,
                    )?
                {
                    writeln!(out, "Nothing deleted.")?;
                    return Ok(());
                }

                for key in [CONTACT_MESSAGES_KEY, TESTIMONIALS_KEY] {
                    env.store.remove(key).await?;
                }
                info!("Cleared store");
                writeln!(out, "Deleted all messages and testimonials.")?;
            }
        }
        Ok(())
    }
}

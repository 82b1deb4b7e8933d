use std::io::{BufRead, Write};

use anyhow::Context;
use clap::Subcommand;
use portfolio_config::Config;
use portfolio_core_contact_contracts::ContactFeatureService;
use portfolio_models::contact::{ContactMessage, ContactMessageDraft, ContactMessageId};
use tracing::info;

use super::{confirm, ModerationArgs};
use crate::environment::Environment;

#[derive(Debug, Subcommand)]
pub enum MessageCommand {
    /// Send a message through the contact form
    #[command(aliases(["s", "new"]))]
    Send {
        /// Your name
        #[arg(long)]
        name: String,
        /// Your email address
        #[arg(long)]
        email: String,
        /// The subject of the message
        #[arg(long, default_value = "")]
        subject: String,
        /// The message itself
        #[arg(long)]
        message: String,
    },
    /// List all messages, most recent first
    #[command(aliases(["ls", "l"]))]
    List {
        #[command(flatten)]
        moderation: ModerationArgs,
    },
    /// Mark a message as read
    #[command(aliases(["r"]))]
    Read {
        /// The id of the message
        id: String,
        #[command(flatten)]
        moderation: ModerationArgs,
    },
    /// Delete a message
    #[command(aliases(["rm", "d"]))]
    Delete {
        /// The id of the message
        id: String,
        /// Do not ask for confirmation
        #[arg(short, long)]
        yes: bool,
        #[command(flatten)]
        moderation: ModerationArgs,
    },
}

impl MessageCommand {
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
            MessageCommand::Send {
                name,
                email,
                subject,
                message,
            } => send(env, out, name, email, subject, message).await,
            MessageCommand::List { moderation } => {
                moderation.enter(&env.moderation)?;
                list(&env.contact, out).await
            }
            MessageCommand::Read { id, moderation } => {
                moderation.enter(&env.moderation)?;
                let message = env.contact.mark_message_read(&id.into()).await?;
                writeln!(out, "Marked message {} as read.", message.id)?;
                Ok(())
            }
            MessageCommand::Delete {
                id,
                yes,
                moderation,
            } => {
                moderation.enter(&env.moderation)?;
                if !yes && !confirm("Are you sure you want to delete this message?", input)? {
                    writeln!(out, "Nothing deleted.")?;
                    return Ok(());
                }
                delete(env, out, id.into()).await
            }
        }
    }
}

async fn send(
    env: &Environment,
    out: &mut impl Write,
    name: String,
    email: String,
    subject: String,
    message: String,
) -> anyhow::Result<()> {
    let draft = ContactMessageDraft {
        name: name.try_into().context("Please enter your name.")?,
        email: email
            .parse()
            .context("Please enter a valid email address.")?,
        subject: subject
            .try_into()
            .context("The subject is too long.")?,
        message: message.try_into().context("Please enter a message.")?,
    };

    let message = env.contact.add_message(draft).await?;
    info!(id = %message.id, "Message sent");
    writeln!(out, "Thank you for reaching out. I'll get back to you soon!")?;
    Ok(())
}

async fn list(contact: &impl ContactFeatureService, out: &mut impl Write) -> anyhow::Result<()> {
    let messages = contact.list_messages().await?;
    if messages.is_empty() {
        writeln!(out, "No messages yet.")?;
        return Ok(());
    }

    let unread = messages.iter().filter(|x| !x.read).count();
    writeln!(out, "{} messages, {unread} unread", messages.len())?;
    for message in messages.iter().rev() {
        write_message(out, message)?;
    }
    Ok(())
}

fn write_message(out: &mut impl Write, message: &ContactMessage) -> anyhow::Result<()> {
    writeln!(out)?;
    writeln!(
        out,
        "{} {}  {}",
        if message.read { " " } else { "*" },
        message.id,
        message.timestamp.format("%Y-%m-%d %H:%M")
    )?;
    writeln!(out, "  From: {} <{}>", message.name, message.email)?;
    if !message.subject.is_empty() {
        writeln!(out, "  Subject: {}", message.subject)?;
    }
    for line in message.message.lines() {
        writeln!(out, "  > {line}")?;
    }
    Ok(())
}

async fn delete(env: &Environment, out: &mut impl Write, id: ContactMessageId) -> anyhow::Result<()> {
    let message = env.contact.delete_message(&id).await?;
    writeln!(out, "Deleted message {} from {}.", message.id, message.name)?;
    Ok(())
}

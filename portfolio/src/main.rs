use anyhow::Context;
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::Shell;
use portfolio::commands::{
    image::ImageCommand, message::MessageCommand, store::StoreCommand,
    testimonial::TestimonialCommand,
};
use portfolio_utils::portfolio_version;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if let Command::Completion { shell } = cli.command {
        clap_complete::generate(
            shell,
            &mut Cli::command(),
            env!("CARGO_BIN_NAME"),
            &mut std::io::stdout(),
        );
        return Ok(());
    }

    init_tracing();

    let config = portfolio_config::load().context("Failed to load config")?;

    match cli.command {
        Command::Message { command } => command.invoke(config).await?,
        Command::Testimonial { command } => command.invoke(config).await?,
        Command::Image { command } => command.invoke(config).await?,
        Command::Store { command } => command.invoke(config).await?,
        Command::CheckConfig { verbose } => {
            verbose.then(|| println!("{config:#?}"));
        }
        Command::Completion { .. } => unreachable!(),
    }

    Ok(())
}

#[derive(Debug, Parser)]
#[command(version = portfolio_version())]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Send and moderate contact messages
    #[command(aliases(["msg", "m"]))]
    Message {
        #[command(subcommand)]
        command: MessageCommand,
    },
    /// Submit and list testimonials
    #[command(aliases(["t"]))]
    Testimonial {
        #[command(subcommand)]
        command: TestimonialCommand,
    },
    /// Process images the way screenshots are processed
    #[command(aliases(["img", "i"]))]
    Image {
        #[command(subcommand)]
        command: ImageCommand,
    },
    /// Inspect and reset the local store
    Store {
        #[command(subcommand)]
        command: StoreCommand,
    },
    /// Validate configuration
    CheckConfig {
        /// Print a debug representation of the config
        #[arg(short, long)]
        verbose: bool,
    },
    /// Generate shell completions
    Completion {
        /// The shell to generate completions for
        #[clap(value_enum)]
        shell: Shell,
    },
}

fn init_tracing() {
    let fmt_layer = tracing_subscriber::fmt::layer().with_writer(std::io::stderr);

    #[cfg(tracing_pretty)]
    let fmt_layer = fmt_layer.pretty();

    tracing_subscriber::registry()
        .with(fmt_layer.with_filter(EnvFilter::from_default_env()))
        .init();
}

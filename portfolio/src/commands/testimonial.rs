use std::{io::Write, path::PathBuf};

use anyhow::Context;
use clap::Subcommand;
use portfolio_config::Config;
use portfolio_core_testimonial_contracts::TestimonialFeatureService;
use portfolio_models::{
    image::ImageDataUrl,
    testimonial::{SocialSite, Testimonial, TestimonialDraft},
};

use crate::environment::Environment;

#[derive(Debug, Subcommand)]
pub enum TestimonialCommand {
    /// Submit a testimonial
    #[command(aliases(["a", "new"]))]
    Add {
        /// Your name
        #[arg(long)]
        client_name: String,
        /// Your handle on the social site
        #[arg(long)]
        social_handle: String,
        /// Where you can be found (LinkedIn, Twitter, WhatsApp or Behance)
        #[arg(long, default_value_t = SocialSite::LinkedIn)]
        social_site: SocialSite,
        /// What you want to say
        #[arg(long)]
        description: String,
        /// Screenshot of the finished work, scaled down before it is stored
        #[arg(long, conflicts_with = "image")]
        screenshot: Option<PathBuf>,
        /// An already normalized image as a data URL
        #[arg(long)]
        image: Option<ImageDataUrl>,
    },
    /// List all testimonials
    #[command(aliases(["ls", "l"]))]
    List {
        /// Print descriptions without cutting them off
        #[arg(long)]
        full: bool,
    },
}

impl TestimonialCommand {
    pub async fn invoke(self, config: Config) -> anyhow::Result<()> {
        let env = Environment::new(&config).await?;
        self.run(&env, &mut std::io::stdout().lock()).await
    }

    pub async fn run(self, env: &Environment, out: &mut impl Write) -> anyhow::Result<()> {
        match self {
            TestimonialCommand::Add {
                client_name,
                social_handle,
                social_site,
                description,
                screenshot,
                image,
            } => {
                let image = match screenshot {
                    Some(path) => upload(env, path).await?,
                    None => image,
                };
                let image = image.map(Into::into);
                let draft = TestimonialDraft {
                    client_name,
                    social_handle,
                    social_site,
                    description,
                    image,
                };
                env.testimonial.add_testimonial(draft).await?;
                writeln!(out, "Testimonial added successfully!")?;
                Ok(())
            }
            TestimonialCommand::List { full } => list(&env.testimonial, out, full).await,
        }
    }
}

async fn upload(env: &Environment, path: PathBuf) -> anyhow::Result<Option<ImageDataUrl>> {
    let data = tokio::fs::read(&path)
        .await
        .with_context(|| format!("Failed to read {}", path.display()))?;
    Ok(env.testimonial.upload_screenshot(Some(data)).await?)
}

async fn list(
    service: &impl TestimonialFeatureService,
    out: &mut impl Write,
    full: bool,
) -> anyhow::Result<()> {
    for testimonial in service.list_testimonials().await? {
        write_testimonial(out, &testimonial, full)?;
    }
    Ok(())
}

fn write_testimonial(
    out: &mut impl Write,
    testimonial: &Testimonial,
    full: bool,
) -> anyhow::Result<()> {
    let description = if full {
        testimonial.description.as_str().into()
    } else {
        testimonial.excerpt(Testimonial::EXCERPT_LEN)
    };
    writeln!(
        out,
        "{} ({} on {}), {}",
        testimonial.client_name,
        testimonial.social_handle,
        testimonial.social_site,
        testimonial.timestamp.format("%Y-%m-%d")
    )?;
    writeln!(out, "  {description}")?;
    Ok(())
}

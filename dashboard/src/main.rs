use anyhow::Context;
use clap::Parser;
use dashboard::api::API_BASE_ENV;
use dashboard::app::{self, Dashboard};

#[derive(Parser)]
#[command(author, version, about = "Operator dashboard for the Phoenix track simulator")]
struct Args {
    /// Backend base URL; falls back to RADAR_API_BASE, then localhost
    #[arg(long)]
    api_base: Option<String>,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    if let Some(base) = args.api_base {
        std::env::set_var(API_BASE_ENV, base);
    }

    iced::application(Dashboard::boot, Dashboard::update, Dashboard::view)
        .title(app::application_title)
        .subscription(app::application_subscription)
        .theme(app::application_theme)
        .run()
        .context("running dashboard")?;

    Ok(())
}

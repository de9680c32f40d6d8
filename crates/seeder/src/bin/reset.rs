use chrono::Utc;
use clap::Parser;
use env_logger::Env;
use rand::{SeedableRng, rngs::StdRng};
use seeder::{
    config::SeedConfig, confirm::confirm, report::banner, run::reset, transport::MockApiClient,
};
use std::io;

/// Wipes the student-management MockAPI project and fills it with fresh sample data
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Skip the confirmation prompt
    #[arg(short, long)]
    force: bool,
}

/// Orchestrates the reset: confirm, delete, create, report
#[tokio::main]
async fn main() -> io::Result<()> {
    dotenvy::dotenv().ok();
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    let config = SeedConfig::default();

    println!("{}", banner("MockAPI Data Reset Script - Student Management System"));

    let proceed = confirm(cli.force, &config, &mut io::stdin().lock(), &mut io::stdout())?;
    if !proceed {
        println!("\nOperation cancelled by user");
        return Ok(());
    }

    let client = MockApiClient::new(&config.base_url).map_err(io::Error::other)?;
    let mut rng = StdRng::from_os_rng();

    let summary = reset(&client, &config, &mut rng, Utc::now())
        .await
        .map_err(io::Error::other)?;

    println!("\n{summary}");
    Ok(())
}

//! Mafia Game Binary
//!
//! Seats ten language-model agents, plays one game to the end, and prints
//! the transcript and what it cost.

use clap::Parser;
use colored::Colorize;
use mafia::gameroom::*;
use mafia::records::*;
use mafia::roles::*;

#[derive(Parser)]
#[command(author, version, about = "Play one game of Mafia between language models", long_about = None)]
struct Args {
    #[arg(
        long = "llm",
        required = true,
        help = "Model for every seat, or repeat ten times for one model per seat"
    )]
    llms: Vec<String>,
    #[arg(long, help = "Seed the game's random source for a reproducible run")]
    seed: Option<u64>,
    #[arg(long, value_delimiter = ',', help = "Ten comma-separated roles, in seat order")]
    roles: Option<Vec<String>>,
    #[arg(long, help = "Write the game report as JSON to this path")]
    output: Option<std::path::PathBuf>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    mafia::log()?;
    let args = Args::parse();
    let mut lobby = Lobby::from_models(args.llms.as_slice())?;
    if let Some(roles) = args.roles {
        lobby = lobby.with_roles(
            roles
                .iter()
                .map(|r| Role::try_from(r.as_str()))
                .collect::<anyhow::Result<Vec<_>>>()?,
        );
    }
    if let Some(seed) = args.seed {
        lobby = lobby.with_seed(seed);
    }
    let mut game = lobby.open()?;
    let outcome = game.run().await;
    println!("{}", game.transcript());
    println!("{}", outcome.winner().bold());
    println!("{}", outcome.reason());
    summary(&game.ledger());
    if let Some(path) = args.output {
        game.report().save(path)?;
    }
    Ok(())
}

fn summary(ledger: &Ledger) {
    let details = ledger.details();
    let prices = ledger.prices();
    for (model, tokens) in details.iter() {
        println!("{}", format!("LLM: {}", model).cyan());
        println!("{}", "=".repeat(50));
        println!("Token Count:");
        println!("  Input Tokens: {}", tokens.input_tokens);
        println!("  Output Tokens: {}", tokens.output_tokens);
        println!("  Thinking Tokens: {}", tokens.thinking_tokens);
        println!("  Full Output Tokens: {}", tokens.full_output_tokens);
        match prices.models.get(model) {
            Some(cost) => {
                println!("Price:");
                println!("  Input Cost: ${:.6}", cost.input_cost);
                println!("  Output Cost: ${:.6}", cost.output_cost);
                println!("  Thinking Cost: ${:.6}", cost.thinking_cost);
                println!("  Full Output Cost: ${:.6}", cost.full_output_cost);
            }
            None => println!("{}", "Price: not listed".dimmed()),
        }
        println!("{}\n", "=".repeat(50));
    }
    let totals = prices.total_costs;
    println!("{}", "=".repeat(50));
    println!("{}", "Total Costs for the Run:".bold());
    println!("  Total Input Cost: ${:.6}", totals.total_input_cost);
    println!("  Total Output Cost: ${:.6}", totals.total_output_cost);
    println!("  Total Thinking Cost: ${:.6}", totals.total_thinking_cost);
    println!("  Total Full Output Cost: ${:.6}", totals.total_full_output_cost);
    println!("  Full Total Cost: ${:.6}", totals.full_total_cost);
    println!("{}", "=".repeat(50));
}

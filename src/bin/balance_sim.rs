//! Headless balance runner
//!
//! Plays a fixed strategy for a number of turns and reports how the hotel
//! fared. Useful for tuning the market tables.

use clap::Parser;
use serde::Serialize;

use hotel_tycoon::core::GameConfig;
use hotel_tycoon::game::{GameController, MemoryStore};
use hotel_tycoon::market::{MarketingLevel, Region, RenovationLevel, StaffingLevel};

/// Headless Hotel Tycoon runner
#[derive(Parser, Debug)]
#[command(name = "balance_sim")]
#[command(about = "Play a fixed hotel strategy and report the outcome")]
struct Args {
    /// Turns to play
    #[arg(long, default_value_t = 360)]
    turns: u32,

    /// Random seed for deterministic runs
    #[arg(long)]
    seed: Option<u64>,

    /// Market region: a, b or c
    #[arg(long, default_value = "a")]
    region: Region,

    /// Price multiplier (0.5-1.5)
    #[arg(long, default_value_t = 1.0)]
    price: f64,

    /// none, basic, standard or aggressive
    #[arg(long, default_value = "none")]
    marketing: MarketingLevel,

    /// minimal, balanced or premium
    #[arg(long, default_value = "balanced")]
    staffing: StaffingLevel,

    /// Buy the property before the first turn
    #[arg(long)]
    buy: bool,

    /// Renovate before the first turn: light, medium or heavy
    #[arg(long)]
    renovate: Option<RenovationLevel>,

    /// Upgrade whenever affordable and allowed
    #[arg(long)]
    upgrade: bool,

    /// Output format: json or text
    #[arg(long, default_value = "text")]
    format: String,
}

#[derive(Serialize)]
struct RunReport {
    seed: u64,
    turns: u32,
    final_turn: u32,
    final_month: u32,
    final_balance: f64,
    final_reputation: f64,
    final_segment: String,
    total_revenue: f64,
    total_expense: f64,
    average_occupancy: f64,
    renovation_turns: u32,
    upgrades: u32,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .init();

    let args = Args::parse();
    let seed = args.seed.unwrap_or_else(rand::random);

    let config = GameConfig {
        seed: Some(seed),
        ..GameConfig::default()
    };
    let mut game = GameController::new(config, MemoryStore::new());

    game.set_region(args.region);
    game.set_price_slider(args.price);
    game.set_marketing(args.marketing);
    game.set_staffing(args.staffing);
    if args.buy {
        if let Err(e) = game.buy_hotel() {
            eprintln!("Could not buy: {}", e);
        }
    }
    if let Some(level) = args.renovate {
        if let Err(e) = game.start_renovation(level) {
            eprintln!("Could not renovate: {}", e);
        }
    }

    let mut total_revenue = 0.0;
    let mut total_expense = 0.0;
    let mut occupancy_sum = 0.0;
    let mut open_turns = 0u32;
    let mut renovation_turns = 0u32;
    let mut upgrades = 0u32;

    for _ in 0..args.turns {
        if args.upgrade && game.upgrade_segment().is_ok() {
            upgrades += 1;
        }

        let result = match game.end_turn() {
            Ok(result) => result,
            Err(e) => {
                eprintln!("Stopped early: {}", e);
                break;
            }
        };

        if result.is_renovating {
            renovation_turns += 1;
        } else {
            open_turns += 1;
            occupancy_sum += result.occupancy_percent;
        }
        total_revenue += result.revenue;
        total_expense += result.expense;
    }

    let state = game.state();
    let report = RunReport {
        seed,
        turns: args.turns,
        final_turn: state.current_turn(),
        final_month: state.current_month(),
        final_balance: state.balance,
        final_reputation: state.reputation,
        final_segment: state.segment.to_string(),
        total_revenue,
        total_expense,
        average_occupancy: if open_turns > 0 {
            occupancy_sum / open_turns as f64
        } else {
            0.0
        },
        renovation_turns,
        upgrades,
    };

    if args.format == "json" {
        match serde_json::to_string_pretty(&report) {
            Ok(json) => println!("{}", json),
            Err(e) => eprintln!("Failed to encode report: {}", e),
        }
    } else {
        println!("=== Balance run (seed {}) ===", report.seed);
        println!("Turns played:      {}", report.turns);
        println!("Ended on:          turn {}, month {}", report.final_turn, report.final_month);
        println!("Property:          {}", report.final_segment);
        println!("Balance:           {:.0}", report.final_balance);
        println!("Reputation:        {:.1}", report.final_reputation);
        println!("Revenue / costs:   {:.0} / {:.0}", report.total_revenue, report.total_expense);
        println!("Avg occupancy:     {:.1}%", report.average_occupancy);
        println!("Renovation turns:  {}", report.renovation_turns);
        println!("Upgrades:          {}", report.upgrades);
    }
}

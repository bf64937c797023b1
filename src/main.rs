//! Hotel Tycoon - Entry Point
//!
//! Interactive console session: loads the saved game, accepts player
//! commands, and can hand turn advancement to the idle timer.

use std::io::{self, Write};
use std::path::PathBuf;

use clap::Parser;
use tokio::runtime::Runtime;

use hotel_tycoon::core::error::Result;
use hotel_tycoon::core::GameConfig;
use hotel_tycoon::game::{
    lock_controller, shared, GameController, GameView, IdleScheduler, JsonFileStore,
};
use hotel_tycoon::market::{MarketingLevel, Region, RenovationLevel, StaffingLevel};

/// Run a hotel, one night at a time
#[derive(Parser, Debug)]
#[command(name = "hotel-tycoon")]
struct Args {
    /// TOML config file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Directory for the saved game (overrides the config)
    #[arg(long)]
    save_dir: Option<PathBuf>,

    /// Random seed for a reproducible session
    #[arg(long)]
    seed: Option<u64>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("hotel_tycoon=info")),
        )
        .init();

    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => GameConfig::load(path)?,
        None => GameConfig::default(),
    };
    if let Some(dir) = args.save_dir {
        config.save_dir = dir;
    }
    if args.seed.is_some() {
        config.seed = args.seed;
    }

    tracing::info!("Hotel Tycoon starting...");

    // The idle timer runs on this runtime while the prompt blocks on stdin
    let rt = Runtime::new()?;

    let store = JsonFileStore::new(config.save_dir.clone());
    let controller = shared(GameController::load(config, store));
    let mut scheduler = IdleScheduler::new(controller.clone(), rt.handle().clone());

    print_help();

    loop {
        display_status(&lock_controller(&controller).view());

        print!("> ");
        io::stdout().flush()?;

        let mut input = String::new();
        if io::stdin().read_line(&mut input)? == 0 {
            break;
        }
        let input = input.trim();
        if input.is_empty() {
            continue;
        }

        let (command, arg) = match input.split_once(' ') {
            Some((c, a)) => (c, a.trim()),
            None => (input, ""),
        };

        match command {
            "quit" | "q" => break,
            "help" | "h" => print_help(),
            "turn" | "t" => match lock_controller(&controller).end_turn() {
                Ok(result) => println!(
                    "Booked {} rooms at {:.2}: revenue {:.0}, costs {:.0}",
                    result.occupied_rooms, result.real_price, result.revenue, result.expense
                ),
                Err(e) => println!("{}", e),
            },
            "run" => match arg.parse::<u32>() {
                Ok(n) => {
                    let mut ctrl = lock_controller(&controller);
                    let mut played = 0;
                    for _ in 0..n {
                        if let Err(e) = ctrl.end_turn() {
                            println!("{}", e);
                            break;
                        }
                        played += 1;
                    }
                    println!("Played {} turns. Now on turn {}.", played, ctrl.state().current_turn());
                }
                Err(_) => println!("Usage: run <number>"),
            },
            "status" | "s" => display_detailed_status(&lock_controller(&controller)),
            "history" => display_history(&lock_controller(&controller)),
            "price" => match arg.parse::<f64>() {
                Ok(value) => {
                    let applied = lock_controller(&controller).set_price_slider(value);
                    println!("Price multiplier set to {:.2}", applied);
                }
                Err(_) => println!("Usage: price <0.5-1.5>"),
            },
            "region" => match arg.parse::<Region>() {
                Ok(region) => {
                    lock_controller(&controller).set_region(region);
                    println!("Moved to the {}", region);
                }
                Err(e) => println!("{}", e),
            },
            "marketing" => match arg.parse::<MarketingLevel>() {
                Ok(level) => lock_controller(&controller).set_marketing(level),
                Err(e) => println!("{}", e),
            },
            "staffing" => match arg.parse::<StaffingLevel>() {
                Ok(level) => lock_controller(&controller).set_staffing(level),
                Err(e) => println!("{}", e),
            },
            "buy" => match lock_controller(&controller).buy_hotel() {
                Ok(()) => println!("The hotel is yours."),
                Err(e) => println!("{}", e),
            },
            "upgrade" => match lock_controller(&controller).upgrade_segment() {
                Ok(segment) => println!("Welcome to your new {}.", segment),
                Err(e) => println!("{}", e),
            },
            "renovate" => match arg.parse::<RenovationLevel>() {
                Ok(level) => match lock_controller(&controller).start_renovation(level) {
                    Ok(()) => println!(
                        "{} renovation under way for {} turns.",
                        level,
                        level.turns_to_complete()
                    ),
                    Err(e) => println!("{}", e),
                },
                Err(e) => println!("{}", e),
            },
            "idle" => match arg {
                "on" => {
                    if !scheduler.set_idle_mode(true) {
                        println!("Idle mode is already on.");
                    }
                }
                "off" => {
                    if !scheduler.set_idle_mode(false) {
                        println!("Idle mode is already off.");
                    }
                }
                _ => println!("Usage: idle on|off"),
            },
            "reset" => {
                scheduler.set_idle_mode(false);
                lock_controller(&controller).reset_game();
                println!("Started a new game.");
            }
            _ => println!("Unknown command. Type 'help' for the list."),
        }
    }

    scheduler.set_idle_mode(false);
    let ctrl = lock_controller(&controller);
    println!(
        "\nGoodbye! Closed the books on turn {} with {:.0} in the bank.",
        ctrl.state().current_turn(),
        ctrl.state().balance
    );
    Ok(())
}

fn print_help() {
    println!("\n=== HOTEL TYCOON ===");
    println!();
    println!("Commands:");
    println!("  turn / t              - End the current turn");
    println!("  run <n>               - Play n turns");
    println!("  price <x>             - Set price multiplier (0.5-1.5)");
    println!("  region <a|b|c>        - Choose market region");
    println!("  marketing <level>     - none, basic, standard, aggressive");
    println!("  staffing <level>      - minimal, balanced, premium");
    println!("  buy                   - Buy the property");
    println!("  upgrade               - Move to the next property tier");
    println!("  renovate <level>      - light, medium, heavy");
    println!("  idle on|off           - Let turns pass on their own");
    println!("  status / s            - Show detailed status");
    println!("  history               - Show recent turns");
    println!("  reset                 - Start over (erases the save)");
    println!("  quit / q              - Exit");
    println!();
}

/// Display a brief status line
fn display_status(view: &GameView) {
    let state = &view.state;
    println!();
    println!(
        "--- Turn {} | Month {} | Balance {:.0} | Reputation {:.1}{} ---",
        state.current_turn(),
        state.current_month(),
        state.balance,
        state.reputation,
        if view.idle_mode { " | IDLE" } else { "" }
    );
    if let Some(result) = &view.last_result {
        if result.is_renovating {
            println!("  Closed for renovation");
        } else {
            println!(
                "  Last night: {}/{} rooms ({:.0}%), profit {:.0}",
                result.occupied_rooms,
                state.room_count(),
                result.occupancy_percent,
                result.profit()
            );
        }
    }
}

/// Display everything the player can act on
fn display_detailed_status(ctrl: &GameController) {
    let state = ctrl.state();
    println!();
    println!("=== {} in the {} ===", state.segment, state.region);
    println!(
        "  Rooms: {}  Ownership: {:?}  Phase: {:?}",
        state.room_count(),
        state.ownership,
        ctrl.phase()
    );
    println!(
        "  Price x{:.2}  Marketing: {}  Staffing: {}",
        state.price_slider, state.marketing, state.staffing
    );
    if state.is_renovating() {
        println!(
            "  Renovation ({}): {} turns left",
            state.renovation_level, state.renovation_turns_remaining
        );
    } else {
        println!("  Renovation level: {}", state.renovation_level);
    }
    for event in &state.active_events {
        println!("  Event: {} ({} turns left)", event.event_id, event.turns_remaining);
    }

    println!();
    if !state.ownership.is_owned() {
        println!("  Buy price: {:.0}", state.purchase_price());
    }
    match ctrl.upgrade_cost() {
        Some(cost) => println!("  Upgrade cost: {:.0}", cost),
        None => println!("  Top of the ladder"),
    }
    for level in [RenovationLevel::Light, RenovationLevel::Medium, RenovationLevel::Heavy] {
        println!(
            "  {} renovation: {:.0} ({} turns)",
            level,
            state.renovation_cost(level),
            level.turns_to_complete()
        );
    }

    if let Some(result) = ctrl.last_result() {
        if !result.guest_decisions.is_empty() {
            println!();
            println!("  Front desk last night:");
            for decision in &result.guest_decisions {
                match decision.reason {
                    None => println!("    {:?} guest checked in", decision.guest_type),
                    Some(reason) => {
                        println!("    {:?} guest left ({:?})", decision.guest_type, reason)
                    }
                }
            }
        }
    }
    println!();
}

fn display_history(ctrl: &GameController) {
    let history = ctrl.history();
    if history.is_empty() {
        println!("No turns played this session.");
        return;
    }
    println!();
    for entry in history.recent(10) {
        println!(
            "  Turn {:>4} (m{:>2}) occ {:>5.1}%  rev {:>9.0}  cost {:>9.0}  bal {:>12.0}  rep {:>5.1}{}",
            entry.turn,
            entry.month,
            entry.occupancy_percent,
            entry.revenue,
            entry.expense,
            entry.balance_after,
            entry.reputation_after,
            if entry.renovating { "  [renovating]" } else { "" }
        );
    }
    println!("  Profit over {} turns: {:.0}", history.len(), history.total_profit());
    println!();
}

#[cfg(not(feature = "std"))]
fn main() {}

#[cfg(feature = "std")]
use battleship_hunt::{
    init_logging, render_boards, run_game, write_fleet_csv, BotPlayer, CliPlayer, DataPaths,
    Game, GameStatus, InputClosed, MoveLog, Player, DEFAULT_DATA_DIR,
};

#[cfg(feature = "std")]
use clap::Parser;
#[cfg(feature = "std")]
use log::LevelFilter;
#[cfg(feature = "std")]
use rand::rngs::SmallRng;
#[cfg(feature = "std")]
use rand::SeedableRng;
#[cfg(feature = "std")]
use std::path::PathBuf;

/// Battleship against a scripted opponent.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
#[cfg(feature = "std")]
struct Cli {
    #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
    seed: Option<u64>,
    #[arg(long, default_value = DEFAULT_DATA_DIR, help = "Directory for fleet tables and the move log")]
    data_dir: PathBuf,
    #[arg(long, help = "Log level (error, warn, info, debug, trace); overrides BATTLESHIP_LOG")]
    log_level: Option<LevelFilter>,
}

#[cfg(feature = "std")]
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.log_level);

    let game = tokio::task::spawn_blocking(move || play(cli));
    tokio::select! {
        joined = game => match joined? {
            Ok(()) => {}
            Err(e) if e.downcast_ref::<InputClosed>().is_some() => {
                println!("\nInput closed. Exiting.");
            }
            Err(e) => return Err(e),
        },
        _ = tokio::signal::ctrl_c() => {
            println!("\nInterrupted. Exiting.");
            // the blocking stdin read cannot be cancelled, so leave directly
            std::process::exit(0);
        }
    }
    Ok(())
}

#[cfg(feature = "std")]
fn play(cli: Cli) -> anyhow::Result<()> {
    let mut rng = if let Some(s) = cli.seed {
        println!("Using fixed seed: {} (game will be reproducible)", s);
        SmallRng::seed_from_u64(s)
    } else {
        let mut seed_rng = rand::rng();
        SmallRng::from_rng(&mut seed_rng)
    };
    let paths = DataPaths::in_dir(&cli.data_dir);

    println!("Welcome to Battleship!");
    let mut human = CliPlayer::stdio();
    let mut bot = BotPlayer::new();

    let player_fleet = human.place_fleet(&mut rng)?;
    write_fleet_csv(&paths.player_fleet, &player_fleet)?;
    let bot_fleet = bot.place_fleet(&mut rng)?;
    write_fleet_csv(&paths.bot_fleet, &bot_fleet)?;

    let mut game = Game::new(player_fleet, bot_fleet);
    let mut log = MoveLog::create(&paths.move_log)?;
    let status = run_game(&mut game, &mut human, &mut bot, &mut rng, &mut log)?;

    println!("{}", render_boards(&game));
    match status {
        GameStatus::Won => println!("\nYou win! All bot ships are destroyed."),
        GameStatus::Lost => println!("\nGame over. Bot destroyed your fleet."),
        GameStatus::InProgress => {}
    }
    println!("Move log written to {}", log.path().display());
    Ok(())
}

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::Level;

use lilypad::{
    engine::MoveEngine,
    report::LogReporter,
    rng::RngManager,
    scenario::ScenarioLoader,
    session::{Outcome, Session},
};

#[derive(Debug, Parser)]
#[command(author, version, about = "Replay a lily pond scenario")]
struct Cli {
    /// Path to the scenario YAML file
    #[arg(long, default_value = "scenarios/starter_pond.yaml")]
    scenario: PathBuf,

    /// Override the scenario seed
    #[arg(long)]
    seed: Option<u64>,

    /// Log level (trace, debug, info, warn, error); defaults to the scenario's
    #[arg(long)]
    log_level: Option<String>,

    /// Print the final board as JSON instead of a text grid
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let loader = ScenarioLoader::new(".");
    let scenario = loader.load(&cli.scenario)?;

    let level_name = cli.log_level.as_deref().unwrap_or(&scenario.logging.level);
    let level: Level = level_name
        .parse()
        .with_context(|| format!("Unknown log level '{level_name}'"))?;
    tracing_subscriber::fmt().with_max_level(level).init();

    let seed = cli.seed.unwrap_or(scenario.seed);
    let mut rng = RngManager::new(seed);
    let board = scenario.build_board(&mut rng.stream("setup"))?;
    let engine = MoveEngine::new(board, rng.stream("inheritance"));
    let mut session = Session::new(engine, LogReporter);

    let mut applied = 0;
    for mv in &scenario.moves {
        match session.play(mv) {
            Ok(Outcome::Jumped(jump)) => {
                applied += 1;
                println!("jump {} -> {}", jump.from, jump.to);
            }
            Ok(Outcome::Born(birth)) => {
                applied += 1;
                println!("birth at {} ({} frog)", birth.cell, birth.child.gender());
            }
            Err(err) if err.is_user_facing() => println!("rejected: {err}"),
            Err(err) => {
                return Err(anyhow::Error::new(err)
                    .context("scenario move references a cell outside the pond"))
            }
        }
    }

    let board = session.board();
    if cli.json {
        println!("{}", serde_json::to_string_pretty(&board.snapshot())?);
    } else {
        print!("{board}");
    }
    println!(
        "Scenario '{}' applied {} of {} moves. Frogs on the pond: {}",
        scenario.name,
        applied,
        scenario.moves.len(),
        board.frog_count()
    );
    Ok(())
}

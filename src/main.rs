#[cfg(not(feature = "std"))]
fn main() {}

#[cfg(feature = "std")]
use std::path::{Path, PathBuf};
#[cfg(feature = "std")]
use std::process::ExitCode;

#[cfg(feature = "std")]
use anyhow::{anyhow, Context};
#[cfg(feature = "std")]
use clap::{Parser, Subcommand};
#[cfg(feature = "std")]
use log::LevelFilter;
#[cfg(feature = "std")]
use gridlock::{
    init_logging, load_puzzle, parse_command, render, run, Board, CliPlayer, GameResult,
    GameSession, RenderOptions, ScriptedPlayer,
};

#[derive(Parser)]
#[command(author, version, about = "Slide the vehicles until A reaches the exit", long_about = None)]
#[cfg(feature = "std")]
struct Cli {
    /// Log level (error, warn, info, debug, trace); defaults to $GRIDLOCK_LOG or warn.
    #[arg(long, global = true)]
    log_level: Option<LevelFilter>,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
#[cfg(feature = "std")]
enum Commands {
    /// Play a puzzle interactively in the terminal.
    Play {
        puzzle: PathBuf,
        #[arg(long, help = "Override the move budget from the puzzle file")]
        budget: Option<usize>,
        #[arg(long, help = "Disable ANSI colors")]
        plain: bool,
    },
    /// Print the starting grid of a puzzle and exit.
    Show {
        puzzle: PathBuf,
        #[arg(long, help = "Disable ANSI colors")]
        plain: bool,
    },
    /// Run a list of commands against a puzzle (e.g. `b down a right`).
    Replay {
        puzzle: PathBuf,
        #[arg(required = true)]
        commands: Vec<String>,
        #[arg(long, help = "Override the move budget from the puzzle file")]
        budget: Option<usize>,
        #[arg(long, help = "Disable ANSI colors")]
        plain: bool,
    },
}

#[cfg(feature = "std")]
fn open_board(path: &Path, budget: Option<usize>) -> anyhow::Result<Board> {
    let mut puzzle =
        load_puzzle(path).with_context(|| format!("failed to load puzzle {}", path.display()))?;
    if let Some(b) = budget {
        puzzle.move_budget = b;
    }
    puzzle
        .build()
        .with_context(|| format!("puzzle {} is not playable", path.display()))
}

#[cfg(feature = "std")]
fn announce(result: GameResult, session: &GameSession) {
    let board = session.board();
    match result {
        GameResult::Won => println!(
            "Congratulations, vehicle A reached the exit in {} moves!",
            board.moves_used()
        ),
        GameResult::LostBudget => println!(
            "You lost: all {} moves are used up.",
            board.move_budget()
        ),
        GameResult::Aborted => println!("You abandoned the game."),
    }
}

#[cfg(feature = "std")]
fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();
    init_logging(cli.log_level);

    match cli.command {
        Commands::Play {
            puzzle,
            budget,
            plain,
        } => {
            let opts = RenderOptions { color: !plain };
            let mut session = GameSession::new(open_board(&puzzle, budget)?);
            println!("\nWELCOME TO GRIDLOCK!\n");
            println!("Move vehicle A to the exit on the right edge.");
            println!(
                "You have at most {} moves to get there.",
                session.board().move_budget()
            );
            let mut player = CliPlayer::stdio(opts);
            player.show(&session)?;
            let result = run(&mut session, &mut player);
            announce(result, &session);
            Ok(ExitCode::from(result.exit_code() as u8))
        }
        Commands::Show { puzzle, plain } => {
            let board = open_board(&puzzle, None)?;
            print!("{}", render(&board.state(), &RenderOptions { color: !plain }));
            Ok(ExitCode::SUCCESS)
        }
        Commands::Replay {
            puzzle,
            commands,
            budget,
            plain,
        } => {
            let script = commands
                .iter()
                .map(|c| parse_command(c).map_err(|e| anyhow!(e.to_string())))
                .collect::<anyhow::Result<Vec<_>>>()?;
            let mut session = GameSession::new(open_board(&puzzle, budget)?);
            let mut player = ScriptedPlayer::new(script);
            let result = run(&mut session, &mut player);
            for report in player.reports() {
                if let Err(e) = report {
                    println!("✗ {}", e);
                }
            }
            print!(
                "{}",
                render(&session.snapshot(), &RenderOptions { color: !plain })
            );
            announce(result, &session);
            Ok(ExitCode::from(result.exit_code() as u8))
        }
    }
}

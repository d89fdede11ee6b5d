use std::time::Duration;

use clap::{Args, Parser, Subcommand};
use dots_and_boxes::{
    init_logging, init_logging_with, print_board, print_scoreboard, AiPlayer, CliPlayer,
    Difficulty, Match, MatchRunner, MatchSetup, PlayerController, PlayerKind, TerminalView,
    DEFAULT_AI_DELAY_MS, DEFAULT_COLS, DEFAULT_ROWS,
};
use rand::rngs::SmallRng;
use rand::SeedableRng;

#[derive(Parser)]
#[command(author, version, about = "Dots and Boxes in the terminal", long_about = None)]
struct Cli {
    /// Log level (error, warn, info, debug, trace). Overrides DOTS_LOG.
    #[arg(long, global = true)]
    log_level: Option<String>,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Args, Clone, Debug)]
struct MatchArgs {
    #[arg(long, default_value_t = DEFAULT_ROWS, help = "Dots per column")]
    rows: usize,
    #[arg(long, default_value_t = DEFAULT_COLS, help = "Dots per row")]
    cols: usize,
    #[arg(long, value_enum, default_value_t = Difficulty::Easy)]
    difficulty: Difficulty,
    #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
    seed: Option<u64>,
    #[arg(long, default_value_t = DEFAULT_AI_DELAY_MS, help = "Pause before each computer move")]
    ai_delay_ms: u64,
}

#[derive(Subcommand)]
enum Commands {
    /// Play on this terminal, optionally against computers.
    Play {
        #[command(flatten)]
        settings: MatchArgs,
        #[arg(long, default_value_t = 2)]
        humans: usize,
        #[arg(long, default_value_t = 0)]
        computers: usize,
        /// Human names in seat order (repeatable).
        #[arg(long = "name")]
        names: Vec<String>,
        /// Human initials in seat order (repeatable).
        #[arg(long = "initial")]
        initials: Vec<String>,
    },
    /// Watch computers play each other.
    Watch {
        #[command(flatten)]
        settings: MatchArgs,
        #[arg(long, default_value_t = 2)]
        computers: usize,
    },
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    match cli.log_level.as_deref() {
        Some(lvl) => init_logging_with(
            lvl.parse()
                .map_err(|_| anyhow::anyhow!("invalid log level '{}'", lvl))?,
        ),
        None => init_logging(),
    }

    match cli.command {
        Commands::Play { settings, humans, computers, names, initials } => {
            let mut setup = MatchSetup::new().grid(settings.rows, settings.cols);
            for i in 0..humans {
                setup = setup.human(
                    names.get(i).cloned().unwrap_or_default(),
                    initials.get(i).cloned().unwrap_or_default(),
                );
            }
            let config = setup.computers(computers, settings.difficulty).build()?;
            play(Match::new(config)?, &settings).await
        }
        Commands::Watch { settings, computers } => {
            let config = MatchSetup::new()
                .grid(settings.rows, settings.cols)
                .computers(computers, settings.difficulty)
                .build()?;
            play(Match::new(config)?, &settings).await
        }
    }
}

fn controllers_for(game: &Match) -> Vec<Box<dyn PlayerController>> {
    game.players()
        .iter()
        .map(|p| -> Box<dyn PlayerController> {
            match p.kind() {
                PlayerKind::Human => Box::new(CliPlayer::new()),
                PlayerKind::Computer(d) => Box::new(AiPlayer::new(d)),
            }
        })
        .collect()
}

async fn play(game: Match, settings: &MatchArgs) -> anyhow::Result<()> {
    let mut rng = match settings.seed {
        Some(s) => {
            println!("Using fixed seed: {} (game will be reproducible)", s);
            SmallRng::seed_from_u64(s)
        }
        None => {
            let mut seed_rng = rand::rng();
            SmallRng::from_rng(&mut seed_rng)
        }
    };

    println!(
        "Dots and Boxes: {}x{} dots, {} boxes. Enter lines as `h <row> <col>` or `v <row> <col>`.",
        game.grid().rows(),
        game.grid().cols(),
        game.total_boxes()
    );
    print_board(&game);
    print_scoreboard(&game);

    let controllers = controllers_for(&game);
    let mut runner = MatchRunner::new(game, controllers)?
        .with_ai_delay(Duration::from_millis(settings.ai_delay_ms));
    runner.subscribe(Box::new(TerminalView::new()));
    runner.run(&mut rng).await
}

use dots_and_boxes::{AiPlayer, Difficulty, Match, MatchRunner, MatchSetup, PlayerController};
use rand::{rngs::SmallRng, SeedableRng};
use serde_json::json;

fn parse_difficulty(s: &str) -> anyhow::Result<Difficulty> {
    match s.to_ascii_lowercase().as_str() {
        "easy" => Ok(Difficulty::Easy),
        "medium" => Ok(Difficulty::Medium),
        "hard" => Ok(Difficulty::Hard),
        other => Err(anyhow::anyhow!("unknown difficulty '{}'", other)),
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let args: Vec<String> = std::env::args().collect();
    if args.len() < 2 {
        eprintln!("Usage: {} <seed> [rows] [cols] [difficulty...]", args[0]);
        std::process::exit(1);
    }
    let seed: u64 = args[1].parse()?;
    let rows: usize = args.get(2).map(|s| s.parse()).transpose()?.unwrap_or(5);
    let cols: usize = args.get(3).map(|s| s.parse()).transpose()?.unwrap_or(5);
    let mut difficulties = args
        .iter()
        .skip(4)
        .map(|s| parse_difficulty(s))
        .collect::<anyhow::Result<Vec<_>>>()?;
    if difficulties.is_empty() {
        difficulties = vec![Difficulty::Medium, Difficulty::Hard];
    }

    // MatchSetup shares one difficulty across computers, so seat each one
    // individually and override the kind afterwards.
    let mut config = MatchSetup::new()
        .grid(rows, cols)
        .computers(difficulties.len(), Difficulty::Easy)
        .build()?;
    for (spec, d) in config.players.iter_mut().zip(&difficulties) {
        spec.kind = dots_and_boxes::PlayerKind::Computer(*d);
    }

    let game = Match::new(config)?;
    let controllers: Vec<Box<dyn PlayerController>> = difficulties
        .iter()
        .map(|d| Box::new(AiPlayer::new(*d)) as Box<dyn PlayerController>)
        .collect();
    let mut rng = SmallRng::seed_from_u64(seed);
    let mut runner = MatchRunner::new(game, controllers)?;
    runner.run(&mut rng).await?;

    let game = runner.game();
    let players: Vec<_> = game
        .players()
        .iter()
        .map(|p| {
            json!({
                "name": p.name(),
                "initial": p.initial(),
                "difficulty": p.difficulty(),
                "score": p.score(),
            })
        })
        .collect();
    let winners: Vec<&str> = game
        .winners()
        .unwrap_or_default()
        .iter()
        .filter_map(|&id| game.player(id).map(|p| p.name()))
        .collect();

    let result = json!({
        "rows": rows,
        "cols": cols,
        "players": players,
        "winners": winners,
        "moves": runner.move_count(),
    });

    println!("{}", serde_json::to_string(&result)?);
    Ok(())
}

use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use regicide::selfplay::{play_game, write_jsonl, GameResult, SelfPlayParams};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "regicide-selfplay", about = "Play engine-vs-engine games and write them as JSON lines")]
struct Args {
    #[arg(long, default_value_t = 10)]
    games: usize,
    #[arg(long, default_value_t = 200)]
    max_plies: usize,
    #[arg(long, default_value_t = 2)]
    depth: u32,
    #[arg(long, default_value_t = 1)]
    threads: usize,
    #[arg(long, default_value_t = 42)]
    seed: u64,
    /// Uniformly random plies at the start of each game
    #[arg(long, default_value_t = 4)]
    random_plies: usize,
    #[arg(long, default_value = "out/selfplay.jsonl")]
    out: PathBuf,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let a = Args::parse();
    let params = SelfPlayParams {
        games: a.games,
        max_plies: a.max_plies,
        depth: a.depth,
        threads: a.threads,
        seed: a.seed,
        random_plies: a.random_plies,
    };
    eprintln!("Generating {} games (depth={}, threads={}, random_plies={})", a.games, a.depth, a.threads, a.random_plies);
    let bar = ProgressBar::new(a.games as u64);
    bar.set_style(ProgressStyle::with_template("{bar:40} {pos}/{len} games {msg}")?);
    let mut games = Vec::with_capacity(a.games);
    for gi in 0..params.games {
        let g = play_game(&params, gi);
        bar.set_message(format!("last: {:?} in {} plies", g.result, g.plies));
        games.push(g);
        bar.inc(1);
    }
    bar.finish();

    let white = games.iter().filter(|g| g.result == GameResult::White).count();
    let black = games.iter().filter(|g| g.result == GameResult::Black).count();
    eprintln!("white {} black {} unfinished {}", white, black, games.len() - white - black);

    if let Some(dir) = a.out.parent() { std::fs::create_dir_all(dir)?; }
    write_jsonl(&games, &a.out)?;
    eprintln!("Wrote {}", a.out.display());
    Ok(())
}

use anyhow::Context;
use regicide::board::{Board, Color};
use regicide::perft::{divide, perft, perft_parallel};

#[derive(clap::Parser, Debug)]
#[command(name = "perft", about = "Pseudo-legal perft driver")]
struct Args {
    /// Search depth
    #[arg(value_name = "DEPTH")]
    depth: u32,
    /// Piece placement (FEN first field) or "startpos"
    #[arg(value_name = "PLACEMENT", default_value = "startpos")]
    placement: String,
    /// Side to move: 'w' or 'b'
    #[arg(long, default_value = "w")]
    side: String,
    /// Number of threads for root-split
    #[arg(long, default_value_t = 1)]
    threads: usize,
    /// Print per-root-move counts
    #[arg(long, default_value_t = false)]
    divide: bool,
    /// Report elapsed time and NPS
    #[arg(long, default_value_t = false)]
    nps: bool,
}

fn main() -> anyhow::Result<()> {
    use clap::Parser;
    use std::time::Instant;

    env_logger::init();
    let args = Args::parse();
    let side = match args.side.as_str() {
        "w" | "white" => Color::White,
        "b" | "black" => Color::Black,
        other => anyhow::bail!("invalid side '{other}': use 'w' or 'b'"),
    };
    let mut base = if args.placement == "startpos" {
        Board::startpos()
    } else {
        Board::from_placement(&args.placement).context("parsing placement")?
    };

    if args.divide {
        let split = divide(&mut base, side, args.depth);
        for (mv, n) in &split.counts { println!("{mv}: {n}"); }
        println!("total: {}", split.total);
        return Ok(());
    }

    let pool = rayon::ThreadPoolBuilder::new().num_threads(args.threads.max(1)).build()?;
    let (nodes, dt) = pool.install(|| {
        let t0 = Instant::now();
        let nodes = if args.threads <= 1 {
            perft(&mut base, side, args.depth)
        } else {
            perft_parallel(&base, side, args.depth)
        };
        (nodes, t0.elapsed().as_secs_f64())
    });

    if args.nps { println!("nodes: {nodes} elapsed: {:.3}s nps: {:.1}", dt, nodes as f64 / dt.max(f64::EPSILON)); }
    else { println!("nodes: {nodes}"); }
    Ok(())
}

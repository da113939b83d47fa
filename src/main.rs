use anyhow::Result;
use clap::Parser;
use regicide::board::{Color, Move, PieceKind, Position};
use regicide::game::Game;
use regicide::search::alphabeta::{SearchParams, DEFAULT_MAX_DEPTH};
use std::io::{self, Write};
use std::time::Instant;

#[derive(Parser, Debug)]
#[command(author, version, about = "Play capture-the-king chess against the engine", long_about = None)]
struct Args {
    /// Your color: 'w' for white, 'b' for black
    #[arg(long, default_value = "w")]
    color: String,

    /// Search depth in plies
    #[arg(long, default_value_t = DEFAULT_MAX_DEPTH)]
    depth: u32,

    /// Threads for root-parallel search
    #[arg(long, default_value_t = 1)]
    threads: usize,

    /// Print search statistics
    #[arg(long)]
    verbose: bool,
}

fn parse_color(color_str: &str) -> Result<Color> {
    match color_str.to_lowercase().as_str() {
        "w" | "white" => Ok(Color::White),
        "b" | "black" => Ok(Color::Black),
        _ => anyhow::bail!("Invalid color: use 'w' or 'b'"),
    }
}

enum Input {
    Move(Move, Option<PieceKind>),
    Show(Position),
    Quit,
}

fn parse_input(line: &str) -> Option<Input> {
    let line = line.trim();
    if line == "quit" { return Some(Input::Quit); }
    if line.len() == 2 { return line.parse().ok().map(Input::Show); }
    if line.len() != 4 && line.len() != 5 { return None; }
    let mv: Move = line.get(0..4)?.parse().ok()?;
    let promotion = match line.chars().nth(4) {
        Some(c) => Some(PieceKind::from_letter(c)?),
        None => None,
    };
    Some(Input::Move(mv, promotion))
}

fn user_turn(game: &mut Game) -> Result<bool> {
    loop {
        print!("Your move (e.g. e2e4, a square to list its moves, 'quit'): ");
        io::stdout().flush()?;
        let mut input = String::new();
        if io::stdin().read_line(&mut input)? == 0 { return Ok(false); }
        match parse_input(&input) {
            Some(Input::Quit) => return Ok(false),
            Some(Input::Show(pos)) => match game.user_destinations(pos) {
                Ok(dests) if dests.is_empty() => println!("{pos} has no moves"),
                Ok(dests) => {
                    let list: Vec<String> = dests.iter().map(|d| d.to_string()).collect();
                    println!("{pos}: {}", list.join(" "));
                }
                Err(e) => println!("{e}"),
            },
            Some(Input::Move(mv, promotion)) => match game.play_user_move(mv, promotion) {
                Ok(Some(captured)) => { println!("You capture {captured}"); return Ok(true); }
                Ok(None) => return Ok(true),
                Err(e) => println!("{e}"),
            },
            None => println!("Invalid input! Use coordinates like 'e2e4' or 'e7e8n'"),
        }
    }
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();
    let user = parse_color(&args.color)?;
    let params = SearchParams { max_depth: args.depth, threads: args.threads.max(1), ..SearchParams::default() };
    let mut game = Game::new(user, params);

    while !game.is_over() {
        println!("\n{}", game.board());
        if game.engine_to_move() {
            if args.verbose { println!("Thinking..."); }
            let start = Instant::now();
            match game.play_engine_move() {
                Ok((mv, result)) => {
                    println!("Computer plays: {mv}");
                    if args.verbose {
                        println!("utility: {} nodes: {} elapsed: {:.2}s", result.utility, result.nodes, start.elapsed().as_secs_f32());
                    }
                }
                Err(e) => { println!("{e}"); break; }
            }
        } else if !user_turn(&mut game)? {
            println!("Thanks for playing!");
            return Ok(());
        }
    }

    println!("\n{}", game.board());
    match game.winner() {
        Some(w) if w == user => println!("You captured the king. You win!"),
        Some(_) => println!("The computer captured your king."),
        None => println!("Game stopped."),
    }
    Ok(())
}

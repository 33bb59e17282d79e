use anyhow::{bail, Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use tilegen::board::STARTING_FEN;
use tilegen::{generate_moves, BoardBuilder, Move, MoveRecord, Square};

/// Lists the geometric moves available in a position.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Position to generate moves for
    #[arg(short, long, default_value = STARTING_FEN)]
    fen: String,

    /// Only list moves of the piece on this square (e.g. "g1")
    #[arg(short, long)]
    square: Option<String>,

    /// Print moves as JSON instead of text
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let board = BoardBuilder::try_from_fen(&args.fen).context("failed to parse --fen")?;

    let moves: Vec<Move> = match &args.square {
        Some(notation) => {
            let square = Square::from_algebraic_notation(notation).context("failed to parse --square")?;
            match board.tile(square.as_index()).piece() {
                Some(piece) => generate_moves(piece, &board),
                None => bail!("no piece on {square}"),
            }
        }
        None => board.all_moves(board.to_move()),
    };

    if args.json {
        let records: Vec<MoveRecord> = moves.iter().map(Move::to_record).collect();
        println!("{}", serde_json::to_string_pretty(&records)?);
    } else {
        println!("{board}");
        for mv in &moves {
            println!("{mv}");
        }
        println!("{} moves", moves.len());
    }

    Ok(())
}

//! Command-line arguments
//!
//! Flags win over environment variables, which win over the built-in
//! defaults. `.env` files are loaded into the environment by `main` before
//! parsing, so they sit just below real environment variables.

use chess_api::{ClientConfig, MoveConstraint, DEFAULT_ENDPOINT};
use clap::Parser;

/// Ask chess-api.com for the best move in a position
#[derive(Parser, Debug, Clone, PartialEq, Eq)]
#[command(name = "chess-api", version, about)]
pub struct Cli {
    /// Position in FEN (quote it: FEN contains spaces)
    pub fen: String,

    /// Only consider these moves, in coordinate notation (-m e2e4 -m d2d4 or -m e2e4,d2d4)
    #[arg(short, long = "moves", value_delimiter = ',')]
    pub moves: Vec<String>,

    /// Search depth in plies; the service default applies when omitted
    #[arg(short, long)]
    pub depth: Option<u32>,

    /// Analysis endpoint
    #[arg(long, env = "CHESS_API_URL", default_value = DEFAULT_ENDPOINT)]
    pub url: String,

    /// Request timeout in seconds
    #[arg(long, env = "CHESS_API_TIMEOUT_SECS")]
    pub timeout: Option<u64>,
}

impl Cli {
    pub fn client_config(&self) -> ClientConfig {
        ClientConfig {
            endpoint: self.url.clone(),
            timeout_secs: self.timeout,
        }
    }

    pub fn constraint(&self) -> MoveConstraint {
        let constraint = MoveConstraint::new().allowed_moves(self.moves.iter().cloned());
        match self.depth {
            Some(depth) => constraint.depth(depth),
            None => constraint,
        }
    }
}

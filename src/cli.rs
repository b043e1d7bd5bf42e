use clap::{Parser, ValueEnum};

/// Who picks the moves for one side of the board
#[derive(Copy, Clone, Eq, PartialEq, Debug, ValueEnum)]
pub enum Controller {
    Human,
    Ai,
}

/// Play Connect 4 against a minimax agent, or watch two agents play
#[derive(Debug, Parser)]
#[command(version, about)]
pub struct Cli {
    /// Number of plies the agent searches past each candidate move
    #[arg(short, long, default_value_t = 3, value_parser = clap::value_parser!(u8).range(1..=8))]
    pub depth: u8,

    /// Controller of player 1, asked interactively when omitted
    #[arg(long, value_enum)]
    pub player_one: Option<Controller>,

    /// Controller of player 2, asked interactively when omitted
    #[arg(long, value_enum)]
    pub player_two: Option<Controller>,

    /// Search the candidate moves on all cores
    #[arg(long)]
    pub parallel: bool,

    /// Print the board as plain text instead of drawing it in colour
    #[arg(long)]
    pub plain: bool,

    /// Let player 2 move first
    #[arg(long)]
    pub second: bool,
}

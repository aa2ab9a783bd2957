//! Interactive game session: human against engine, or engine self-play.

use std::io::{self, BufRead};

use tracing::{debug, info, warn};

use tacto_core::{Board, Cell, Mark, Outcome};
use tacto_engine::Searcher;

use crate::command::{Command, parse_command};
use crate::error::CliError;

/// An interactive session over stdin/stdout.
///
/// Holds the game state and one engine instance; commands are processed
/// synchronously, one line at a time.
pub struct Session {
    board: Board,
    to_move: Mark,
    moves: Vec<Cell>,
    searcher: Searcher,
}

impl Session {
    /// Create a session with an empty board, cross to move.
    pub fn new() -> Self {
        Self {
            board: Board::empty(),
            to_move: Mark::Cross,
            moves: Vec::new(),
            searcher: Searcher::new(),
        }
    }

    /// Run the read-eval-print loop until `quit` or input closes.
    pub fn run(&mut self) -> Result<(), CliError> {
        println!("tacto -- 4x4 tic-tac-toe, three in a row wins. Type `help` for commands.");
        let stdin = io::stdin();
        for line in stdin.lock().lines() {
            let line = line?;
            let trimmed = line.trim();
            if trimmed.is_empty() {
                continue;
            }
            debug!(cmd = %trimmed, "received command");
            match parse_command(trimmed) {
                Ok(Command::New) => self.handle_new(),
                Ok(Command::Move(cell)) => self.handle_move(cell),
                Ok(Command::Go) => self.handle_go(),
                Ok(Command::Auto) => self.handle_auto(),
                Ok(Command::Show) => self.show(),
                Ok(Command::Help) => print_help(),
                Ok(Command::Quit) => break,
                Ok(Command::Unknown(cmd)) => println!("unknown command: {cmd}"),
                Err(e) => println!("error: {e}"),
            }
        }
        Ok(())
    }

    fn handle_new(&mut self) {
        self.board = Board::empty();
        self.to_move = Mark::Cross;
        self.moves.clear();
        info!("new game");
        self.show();
    }

    fn handle_move(&mut self, cell: Cell) {
        if self.report_finished() {
            return;
        }
        if !self.board.is_empty_cell(cell) {
            println!("cell {cell} is occupied");
            return;
        }
        println!("{} plays {cell}", self.to_move);
        self.play(cell);
        if self.board.outcome() == Outcome::InProgress {
            self.engine_reply();
        }
        self.show();
    }

    fn handle_go(&mut self) {
        if self.report_finished() {
            return;
        }
        self.engine_reply();
        self.show();
    }

    fn handle_auto(&mut self) {
        if self.report_finished() {
            return;
        }
        while self.board.outcome() == Outcome::InProgress {
            self.engine_reply();
        }
        self.show();
    }

    /// Let the engine pick and play a move for the side to move.
    fn engine_reply(&mut self) {
        let Some(cell) = self.searcher.choose_move(&self.board, self.to_move) else {
            warn!("engine asked to move on a finished board");
            return;
        };
        info!(%cell, mark = %self.to_move, "engine move");
        println!("{} plays {cell}", self.to_move);
        self.play(cell);
    }

    fn play(&mut self, cell: Cell) {
        self.board.place(cell, self.to_move);
        self.moves.push(cell);
        self.to_move = !self.to_move;
    }

    fn show(&self) {
        println!("{}", self.board.pretty());
        println!();
        match self.board.outcome() {
            Outcome::InProgress => println!("{} to move", self.to_move),
            Outcome::Won(mark) => println!("{mark} wins"),
            Outcome::Draw => println!("draw"),
        }
        if !self.moves.is_empty() {
            let trail: Vec<String> = self.moves.iter().map(Cell::to_string).collect();
            println!("moves: {}", trail.join(" -> "));
        }
    }

    /// Report a finished game. Returns `true` if no more moves are legal.
    fn report_finished(&self) -> bool {
        match self.board.outcome() {
            Outcome::InProgress => false,
            Outcome::Won(mark) => {
                println!("game over: {mark} wins -- type `new` for another game");
                true
            }
            Outcome::Draw => {
                println!("game over: draw -- type `new` for another game");
                true
            }
        }
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

fn print_help() {
    println!("commands:");
    println!("  new         start a new game (cross moves first)");
    println!("  move <cell> play a move, e.g. `move b2`; the engine replies");
    println!("  go          let the engine move for the side to move");
    println!("  auto        play the game out engine against engine");
    println!("  show        render the board, side to move, and move log");
    println!("  help        this text");
    println!("  quit        end the session");
}

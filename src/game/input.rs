//! Player input: position parsing and the blocking console prompt.

use std::io::{self, Write};

use log::warn;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum InputError {
    #[error("Invalid input! Please enter a number or coordinates in the format (x,y).")]
    InvalidSyntax,
    #[error("Invalid position {position}! Please enter a number between 0 and {max}.")]
    OutOfRange { position: usize, max: usize },
}

/// Parse a raw input line into a flat grid position.
///
/// Two syntaxes are accepted after trimming surrounding whitespace: a bare
/// non-negative integer, taken as the position itself, or a coordinate
/// pair of the exact form `(x,y)` (digits only, no inner whitespace),
/// flattened as `x * grid_size + y`. Range checking is left to the caller.
pub fn parse_position(raw: &str, grid_size: usize) -> Result<usize, InputError> {
    let input = raw.trim();

    if !input.is_empty() && input.bytes().all(|b| b.is_ascii_digit()) {
        return input.parse().map_err(|_| InputError::InvalidSyntax);
    }

    if let Some(body) = input.strip_prefix('(').and_then(|s| s.strip_suffix(')')) {
        if let Some((x, y)) = body.split_once(',') {
            let all_digits = |s: &str| !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit());
            if all_digits(x) && all_digits(y) {
                let x: usize = x.parse().map_err(|_| InputError::InvalidSyntax)?;
                let y: usize = y.parse().map_err(|_| InputError::InvalidSyntax)?;
                return x
                    .checked_mul(grid_size)
                    .and_then(|flat| flat.checked_add(y))
                    .ok_or(InputError::InvalidSyntax);
            }
        }
    }

    Err(InputError::InvalidSyntax)
}

/// Where validated whack positions come from each turn.
///
/// Returning `None` means the player cancelled (end of input or an
/// explicit quit) and the game loop should wind down.
pub trait PositionSource {
    fn next_position(&mut self, grid_size: usize) -> Option<usize>;
}

/// Blocking stdin prompt. Re-prompts until the line parses and lands on
/// the grid.
pub struct ConsolePositionSource;

impl PositionSource for ConsolePositionSource {
    fn next_position(&mut self, grid_size: usize) -> Option<usize> {
        let stdin = io::stdin();

        loop {
            print!("Enter position to whack (0-indexed or (x,y)): ");
            let _ = io::stdout().flush();

            let mut line = String::new();
            match stdin.read_line(&mut line) {
                Ok(0) => return None, // end of input
                Ok(_) => {}
                Err(err) => {
                    warn!("[Input] Failed to read stdin: {err}");
                    return None;
                }
            }

            let raw = line.trim();
            if raw.eq_ignore_ascii_case("q") || raw.eq_ignore_ascii_case("quit") {
                return None;
            }

            match parse_position(raw, grid_size) {
                Ok(position) if position < grid_size => return Some(position),
                Ok(position) => println!(
                    "{}",
                    InputError::OutOfRange {
                        position,
                        max: grid_size - 1,
                    }
                ),
                Err(err) => println!("{err}"),
            }
        }
    }
}

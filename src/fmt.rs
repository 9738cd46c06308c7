use std::fmt;

use crate::{Board, Direction, Puzzle, SlideError, Vec2};

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Right => "right".fmt(f),
            Direction::Left => "left".fmt(f),
            Direction::Down => "down".fmt(f),
            Direction::Up => "up".fmt(f),
        }
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let width = (self.grid.len() - 1).to_string().len();
        for (Vec2(_, c), v) in self.cells() {
            if c != 0 {
                " ".fmt(f)?;
            }
            if v == 0 {
                write!(f, "{:>width$}", ".")?;
            } else {
                write!(f, "{v:>width$}")?;
            }
            if c + 1 == self.dim {
                "\n".fmt(f)?;
            }
        }
        Ok(())
    }
}

impl fmt::Display for Puzzle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.board.fmt(f)
    }
}

impl fmt::Display for SlideError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SlideError::OutOfBounds => "slide leaves the grid".fmt(f),
        }
    }
}

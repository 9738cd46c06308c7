use std::str::FromStr;

use anyhow::{ensure, Context, Result};
use fxhash::FxHashSet;

use crate::{Board, Goal, Puzzle, Vec2};

impl FromStr for Puzzle {
    type Err = anyhow::Error;

    /// Whitespace-separated integers: the tile count `N`, the goal blank
    /// index (`-1` for the last cell), then the `N + 1` start values in
    /// row-major order.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut tokens = s.split_whitespace();
        let mut next_int = |what: &str| -> Result<i64> {
            let tok = tokens.next().with_context(|| format!("Missing {what}"))?;
            tok.parse::<i64>()
                .with_context(|| format!("Invalid {what}: {tok:?}"))
        };

        let n = next_int("tile count")?;
        ensure!((0..u16::MAX as i64).contains(&n), "Tile count {n} out of range");
        let size = n as usize + 1;
        let dim = size.isqrt();
        ensure!(dim * dim == size, "Board of {size} cells is not square");

        let goal_blank = next_int("goal blank index")?;
        ensure!(
            goal_blank == -1 || (0..=n).contains(&goal_blank),
            "Goal blank index {goal_blank} out of range"
        );

        let mut grid = Vec::with_capacity(size);
        let mut seen = FxHashSet::default();
        let mut blank = None;
        for idx in 0..size {
            let v = next_int("cell value")?;
            ensure!((0..=n).contains(&v), "Cell value {v} out of range");
            ensure!(seen.insert(v), "Duplicate cell value {v}");
            if v == 0 {
                blank = Some(idx);
            }
            grid.push(v as u16);
        }
        ensure!(tokens.next().is_none(), "Trailing input after the board");

        let blank = blank.context("Missing blank cell")?;
        let goal = Goal::new(n as u16, (goal_blank >= 0).then_some(goal_blank as usize));
        let board = Board {
            dim: dim as u8,
            grid: grid.into(),
            blank: Vec2::from_index(blank, dim as u8),
        };
        Ok(Puzzle { goal, board })
    }
}

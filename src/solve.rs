use crate::{Board, Direction, Goal, Puzzle};

/// Backstop bound on the deepening threshold. A solve whose next threshold
/// would pass it gives up instead of deepening forever.
pub const THRESHOLD_CAP: u32 = 100_000;

/// Sum of per-tile Manhattan distances to the goal cell; admissible and
/// consistent, so it never overestimates the remaining move count.
pub fn manhattan(board: &Board, goal: &Goal) -> u32 {
    board
        .cells()
        .filter(|&(_, v)| v != 0)
        .map(|(pos, v)| pos.taxicab(goal.position(v)))
        .sum()
}

/// Finds a shortest move sequence solving `puzzle`, or `None` when the puzzle
/// is unreachable from its goal or the threshold cap is passed. `on_step` is
/// invoked once per visited node.
pub fn ida_star(puzzle: Puzzle, on_step: impl FnMut()) -> Option<Vec<Direction>> {
    ida_star_capped(puzzle, THRESHOLD_CAP, on_step)
}

pub fn ida_star_capped(
    mut puzzle: Puzzle,
    cap: u32,
    mut on_step: impl FnMut(),
) -> Option<Vec<Direction>> {
    // Wrong-parity permutations would otherwise deepen all the way to the cap.
    if !puzzle.is_solvable() {
        return None;
    }

    let mut threshold = manhattan(&puzzle.board, &puzzle.goal);
    loop {
        let mut min_next = u32::MAX;
        let mut path = Vec::new();
        if explore(
            &mut puzzle.board,
            &puzzle.goal,
            0,
            threshold,
            &mut min_next,
            &mut path,
            None,
            &mut on_step,
        ) {
            return Some(path);
        }
        if min_next == u32::MAX {
            // Nothing was pruned: the whole reachable subtree is exhausted.
            return None;
        }
        threshold = min_next;
        if threshold > cap {
            return None;
        }
    }
}

/// Depth-first search bounded by `threshold` on `f = g + h`. Overflowing
/// nodes fold their `f` into `min_next`, the smallest admissible threshold
/// for the next deepening round. On success the applied moves are left in
/// `path` and the whole call chain unwinds without touching the board again.
#[allow(clippy::too_many_arguments)]
fn explore(
    board: &mut Board,
    goal: &Goal,
    g: u32,
    threshold: u32,
    min_next: &mut u32,
    path: &mut Vec<Direction>,
    last: Option<Direction>,
    on_step: &mut impl FnMut(),
) -> bool {
    on_step();

    let f = g + manhattan(board, goal);
    if f > threshold {
        *min_next = (*min_next).min(f);
        return false;
    }
    if board.is_solved_on(goal) {
        return true;
    }

    for (dir, to) in board.slides() {
        // Undoing the previous slide cannot shorten the path.
        if last == Some(dir.reversed()) {
            continue;
        }
        let from = board.blank;
        board.swap_blank(to);
        path.push(dir);
        if explore(board, goal, g + 1, threshold, min_next, path, Some(dir), on_step) {
            return true;
        }
        path.pop();
        board.swap_blank(from);
    }
    false
}

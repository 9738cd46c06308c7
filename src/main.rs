use std::io::Read;
use std::time::Instant;

use anyhow::{Context, Result};
use console::{style, Key, Term};
use indicatif::{ProgressBar, ProgressStyle};
use npuzzle_solver::{solve, Direction, Puzzle};

enum Action {
    Exit,
    Slide(Direction),
    Undo,
    Reset,
}

impl TryFrom<Key> for Action {
    type Error = ();

    fn try_from(key: Key) -> Result<Self, Self::Error> {
        Ok(match key {
            Key::ArrowLeft | Key::Char('a') => Self::Slide(Direction::Left),
            Key::ArrowRight | Key::Char('d') => Self::Slide(Direction::Right),
            Key::ArrowUp | Key::Char('w') => Self::Slide(Direction::Up),
            Key::ArrowDown | Key::Char('s') => Self::Slide(Direction::Down),
            Key::Escape | Key::Char('q') => Self::Exit,
            Key::Char('z') => Self::Undo,
            Key::Char('r') => Self::Reset,
            _ => return Err(()),
        })
    }
}

fn main() -> Result<()> {
    let mut play = false;
    let mut path = None;
    for arg in std::env::args().skip(1) {
        if arg == "--play" {
            play = true;
        } else {
            path = Some(arg);
        }
    }

    let input = match &path {
        Some(path) => {
            std::fs::read_to_string(path).with_context(|| format!("Failed to read {path}"))?
        }
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read stdin")?;
            buf
        }
    };
    let puzzle = input.parse::<Puzzle>().context("Failed to parse the puzzle")?;

    if play {
        play_loop(puzzle)
    } else {
        solve_once(puzzle)
    }
}

fn solve_once(puzzle: Puzzle) -> Result<()> {
    let bar = ProgressBar::new_spinner()
        .with_style(ProgressStyle::with_template("{spinner} {human_pos} nodes explored")?);
    let started = Instant::now();
    let solution = solve::ida_star(puzzle, || bar.inc(1));
    bar.finish_and_clear();
    let elapsed = started.elapsed();

    match solution {
        Some(steps) => {
            println!("{}", steps.len());
            for step in &steps {
                println!("{step}");
            }
        }
        None => println!("-1"),
    }
    eprintln!(
        "{}",
        style(format!(
            "Execution time: {:.3} seconds",
            elapsed.as_secs_f64()
        ))
        .dim()
    );
    Ok(())
}

fn play_loop(init: Puzzle) -> Result<()> {
    let mut board = init.board.clone();
    let mut history = Vec::new();

    let term = Term::stderr();
    loop {
        eprintln!("{board}");
        if board.is_solved_on(&init.goal) {
            eprintln!("Solved in {} moves", history.len());
            break;
        }

        let action = loop {
            if let Ok(action) = Action::try_from(term.read_key()?) {
                break action;
            }
        };

        match action {
            Action::Exit => break,
            Action::Slide(dir) => {
                if board.slide(dir).is_ok() {
                    history.push(dir);
                }
            }
            Action::Undo => {
                if let Some(dir) = history.pop() {
                    board.slide(dir.reversed())?;
                }
            }
            Action::Reset => {
                board = init.board.clone();
                history.clear();
            }
        }
    }

    Ok(())
}

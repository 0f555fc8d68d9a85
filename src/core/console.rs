/// Interactive console session: reads viewer commands line by line and
/// turns them into engine calls.

use rand::Rng;
use std::io::{BufRead, Write};
use thiserror::Error;

use crate::core::navigation::{NavigationEngine, NavigationError, Renderer};
use crate::core::walk::random_walk_with;
use crate::schema::scene::SceneId;

#[derive(Debug, Error)]
pub enum SessionError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("navigation error: {0}")]
    Navigation(#[from] NavigationError),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
    #[error("choices are numbered from 1")]
    ZeroChoice,
    #[error("unknown command '{0}' (type 'help' for commands)")]
    Unknown(String),
}

/// A single viewer command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Select a choice by its zero-based position.
    Choose(usize),
    Restart,
    Look,
    Help,
    Quit,
}

impl Command {
    /// Parse a trimmed, non-empty input line.
    ///
    /// Choices are typed one-based, as displayed.
    pub fn parse(input: &str) -> Result<Command, CommandError> {
        let word = input.trim().to_lowercase();
        if let Ok(n) = word.parse::<usize>() {
            return match n {
                0 => Err(CommandError::ZeroChoice),
                n => Ok(Command::Choose(n - 1)),
            };
        }
        match word.as_str() {
            "r" | "restart" => Ok(Command::Restart),
            "l" | "look" => Ok(Command::Look),
            "h" | "help" | "?" => Ok(Command::Help),
            "q" | "quit" | "exit" => Ok(Command::Quit),
            _ => Err(CommandError::Unknown(input.trim().to_string())),
        }
    }
}

/// What a finished session looked like.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionSummary {
    pub final_scene: SceneId,
    pub transitions: u64,
}

/// Launch the story and process commands from `input` until the viewer
/// quits or input runs out.
///
/// Prompts, help text, and input mistakes go to `out`; scenes go through
/// the engine's renderer.
pub fn run_session<R, I, W>(
    engine: &mut NavigationEngine<R>,
    mut input: I,
    mut out: W,
) -> Result<SessionSummary, SessionError>
where
    R: Renderer,
    I: BufRead,
    W: Write,
{
    engine.on_launch()?;

    let mut buf = Vec::new();
    loop {
        write!(out, "\n> ")?;
        out.flush()?;

        buf.clear();
        if input.read_until(b'\n', &mut buf)? == 0 {
            writeln!(out)?;
            break;
        }
        // Stray bytes from the terminal become U+FFFD and fail to parse
        let line = String::from_utf8_lossy(&buf);
        if line.trim().is_empty() {
            continue;
        }

        let command = match Command::parse(&line) {
            Ok(command) => command,
            Err(e) => {
                writeln!(out, "{}", e)?;
                continue;
            }
        };

        match command {
            Command::Choose(index) => match engine.choose(index) {
                Ok(_) => {}
                Err(NavigationError::NoSuchChoice { available, .. }) => {
                    writeln!(out, "Pick a number between 1 and {}.", available.max(1))?;
                }
                Err(e) => return Err(e.into()),
            },
            Command::Restart => {
                engine.restart()?;
            }
            Command::Look => engine.redraw()?,
            Command::Help => print_help(&mut out)?,
            Command::Quit => {
                writeln!(out, "Goodbye.")?;
                break;
            }
        }
    }

    Ok(SessionSummary {
        final_scene: engine.current_id().clone(),
        transitions: engine.transitions(),
    })
}

/// Launch the story and take `steps` random choices, echoing each pick
/// to `out` before the engine moves.
pub fn run_autoplay<R, G, W>(
    engine: &mut NavigationEngine<R>,
    steps: usize,
    rng: &mut G,
    mut out: W,
) -> Result<SessionSummary, SessionError>
where
    R: Renderer,
    G: Rng + ?Sized,
    W: Write,
{
    engine.on_launch()?;
    random_walk_with(engine, steps, rng, |step| {
        writeln!(out, "\n> {}", step.text.as_deref().unwrap_or("restart"))?;
        out.flush()?;
        Ok(())
    })?;

    Ok(SessionSummary {
        final_scene: engine.current_id().clone(),
        transitions: engine.transitions(),
    })
}

fn print_help<W: Write>(out: &mut W) -> std::io::Result<()> {
    writeln!(out, "Commands:")?;
    writeln!(out, "  <n>          pick choice number n")?;
    writeln!(out, "  r, restart   go back to the beginning")?;
    writeln!(out, "  l, look      show the current scene again")?;
    writeln!(out, "  h, help      show this list")?;
    writeln!(out, "  q, quit      leave the story")
}

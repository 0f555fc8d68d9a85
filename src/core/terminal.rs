/// Plain-text renderer for terminals and other line-oriented sinks.

use std::io::Write;

use crate::core::navigation::{RenderError, Renderer};
use crate::schema::scene::Scene;

pub const DEFAULT_WIDTH: usize = 72;
pub const MIN_WIDTH: usize = 20;

/// Renders scenes as a ruled banner, a word-wrapped body, and a
/// numbered choice list.
pub struct TerminalRenderer<W: Write> {
    out: W,
    width: usize,
    show_ids: bool,
}

impl<W: Write> TerminalRenderer<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            width: DEFAULT_WIDTH,
            show_ids: false,
        }
    }

    /// Set the wrap width. Values below `MIN_WIDTH` are clamped.
    pub fn width(mut self, width: usize) -> Self {
        self.width = width.max(MIN_WIDTH);
        self
    }

    /// Print scene IDs next to labels and choice targets.
    pub fn show_ids(mut self, show: bool) -> Self {
        self.show_ids = show;
        self
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Renderer for TerminalRenderer<W> {
    fn render(&mut self, scene: &Scene) -> Result<(), RenderError> {
        let rule = "=".repeat(self.width);

        writeln!(self.out)?;
        writeln!(self.out, "{}", rule)?;
        if self.show_ids {
            writeln!(self.out, "  {}  [{}]", scene.label, scene.id)?;
        } else {
            writeln!(self.out, "  {}", scene.label)?;
        }
        writeln!(self.out, "{}", rule)?;
        writeln!(self.out)?;

        for line in scene.body.split('\n') {
            if line.trim().is_empty() {
                writeln!(self.out)?;
                continue;
            }
            for wrapped in wrap(line, self.width) {
                writeln!(self.out, "{}", wrapped)?;
            }
        }
        writeln!(self.out)?;

        if scene.choices.is_empty() {
            writeln!(self.out, "  (There is nowhere left to go. Type 'r' to restart.)")?;
        }
        for (i, choice) in scene.choices.iter().enumerate() {
            if self.show_ids {
                writeln!(self.out, "  {}) {}  -> {}", i + 1, choice.text, choice.target)?;
            } else {
                writeln!(self.out, "  {}) {}", i + 1, choice.text)?;
            }
        }

        self.out.flush()?;
        Ok(())
    }
}

/// Greedy word wrap. Words longer than `width` get a line of their own.
pub fn wrap(text: &str, width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut line = String::new();
    let mut line_len = 0;

    for word in text.split_whitespace() {
        let word_len = word.chars().count();
        if line_len > 0 && line_len + 1 + word_len > width {
            lines.push(std::mem::take(&mut line));
            line_len = 0;
        }
        if line_len > 0 {
            line.push(' ');
            line_len += 1;
        }
        line.push_str(word);
        line_len += word_len;
    }

    if !line.is_empty() {
        lines.push(line);
    }
    lines
}

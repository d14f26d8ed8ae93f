use crate::{TermInt, Coords};
use std::{io::{Stdout, Write, stdout}, time::Duration};

use anyhow::{Context, Result};
use crossterm::{cursor, execute, queue, style, terminal};
use crossterm::style::Color;
use crossterm::terminal::{ClearType, EnterAlternateScreen, LeaveAlternateScreen};
use crossterm::event::{Event, KeyEvent, read, poll};
use log::{debug, error};

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Glyph {
    pub ch: char,
    pub color: Color,
}

impl Glyph {
    pub const BLANK: Glyph = Glyph { ch: ' ', color: Color::Reset };

    pub fn new(ch: char, color: Color) -> Self {
        Glyph { ch, color }
    }
}

/// Off-screen character buffer. Writes outside of it are dropped.
#[derive(Clone, Debug, PartialEq)]
pub struct Canvas {
    width: TermInt,
    height: TermInt,
    glyphs: Vec<Glyph>,
}

impl Canvas {
    pub fn new(width: TermInt, height: TermInt) -> Self {
        Canvas { width, height, glyphs: vec![Glyph::BLANK; width as usize * height as usize] }
    }

    pub fn size(&self) -> Coords {
        (self.width, self.height)
    }

    pub fn clear(&mut self) {
        self.glyphs.fill(Glyph::BLANK);
    }

    #[cfg(test)]
    pub fn get(&self, pos: Coords) -> Option<Glyph> {
        self.index(pos).map(|i| self.glyphs[i])
    }

    pub fn print_at(&mut self, pos: Coords, ch: char, color: Color) {
        if let Some(i) = self.index(pos) {
            self.glyphs[i] = Glyph::new(ch, color);
        }
    }

    pub fn print_str(&mut self, pos: Coords, s: &str, color: Color) {
        for (x_diff, ch) in s.chars().enumerate() {
            self.print_at((pos.0.saturating_add(x_diff as TermInt), pos.1), ch, color);
        }
    }

    pub fn show_message(&mut self, lines: &[&str], color: Color) {
        let msg_height = (lines.len() + 2) as TermInt;
        let msg_width = (lines.iter().map(|x| x.chars().count()).max().unwrap_or(0) + 2) as TermInt;
        let center = (self.width / 2, self.height / 2);
        let top_left = (center.0.saturating_sub(msg_width / 2), center.1.saturating_sub(msg_height / 2));

        // Print the top and bottom empty lines
        for y in [top_left.1, top_left.1 + msg_height - 1] {
            for x_diff in 0..msg_width {
                self.print_at((top_left.0 + x_diff, y), ' ', color);
            }
        }

        // Print the message lines
        for (i, line) in lines.iter().enumerate() {
            let padded_line = format!("{line: ^width$}", line = line, width = msg_width as usize);
            let y = top_left.1 + i as TermInt + 1;
            self.print_str((top_left.0, y), &padded_line, color);
        }
    }

    #[cfg(test)]
    pub fn row_text(&self, y: TermInt) -> String {
        (0..self.width).filter_map(|x| self.get((x, y))).map(|g| g.ch).collect()
    }

    /// Glyphs that differ from `previous`. Every glyph counts as changed when
    /// the sizes don't match.
    pub fn changes_since<'a>(&'a self, previous: &'a Canvas) -> impl Iterator<Item = (Coords, Glyph)> + 'a {
        let resized = self.size() != previous.size();
        let width = self.width.max(1) as usize;

        self.glyphs.iter().enumerate()
            .filter(move |&(i, glyph)| resized || previous.glyphs[i] != *glyph)
            .map(move |(i, glyph)| (((i % width) as TermInt, (i / width) as TermInt), *glyph))
    }

    ///////////////////////////////////////////////////////////////////////////

    fn index(&self, pos: Coords) -> Option<usize> {
        if pos.0 < self.width && pos.1 < self.height {
            Some(self.width as usize * pos.1 as usize + pos.0 as usize)
        } else {
            None
        }
    }
}

/// Owns the terminal while the game runs. Dropping it hands the terminal back.
pub struct TermManager {
    stdout: Stdout,
    back: Canvas,
    front: Option<Canvas>,
    active: bool,
}

impl TermManager {
    pub fn new() -> Result<Self> {
        let (width, height) = terminal::size().context("Error reading terminal size")?;
        Ok(TermManager { stdout: stdout(), back: Canvas::new(width, height), front: None, active: false })
    }

    pub fn setup(&mut self) -> Result<()> {
        self.active = true;
        execute!(self.stdout, EnterAlternateScreen).context("Error entering alt screen")?;
        terminal::enable_raw_mode().context("Error setting raw mode")?;
        execute!(self.stdout, cursor::Hide, cursor::DisableBlinking).context("Error hiding cursor")?;
        Ok(())
    }

    pub fn restore(&mut self) -> Result<()> {
        if !self.active {
            return Ok(());
        }
        self.active = false;

        terminal::disable_raw_mode().context("Error unsetting raw mode")?;
        execute!(self.stdout, style::ResetColor, cursor::Show, cursor::EnableBlinking, LeaveAlternateScreen)
            .context("Error leaving alt screen")?;
        Ok(())
    }

    pub fn get_terminal_size(&self) -> Coords {
        self.back.size()
    }

    pub fn canvas_mut(&mut self) -> &mut Canvas {
        &mut self.back
    }

    pub fn read_key_events_queue(&mut self) -> Result<Vec<KeyEvent>> {
        let mut events = vec![];

        while poll(Duration::ZERO)? {
            match read()? {
                Event::Key(ev) => events.push(ev),
                Event::Resize(width, height) => self.resize(width, height),
                _ => {}
            }
        }

        Ok(events)
    }

    pub fn present(&mut self) -> Result<()> {
        let blank;
        let previous = match &self.front {
            Some(front) => front,
            None => {
                queue!(self.stdout, terminal::Clear(ClearType::All))?;
                blank = Canvas::new(self.back.width, self.back.height);
                &blank
            }
        };

        let mut color = None;
        for (pos, glyph) in self.back.changes_since(previous) {
            if color != Some(glyph.color) {
                queue!(self.stdout, style::SetForegroundColor(glyph.color))?;
                color = Some(glyph.color);
            }
            queue!(self.stdout, cursor::MoveTo(pos.0, pos.1), style::Print(glyph.ch))?;
        }

        self.stdout.flush().context("Error flushing")?;
        self.front = Some(self.back.clone());
        Ok(())
    }

    ///////////////////////////////////////////////////////////////////////////

    fn resize(&mut self, width: TermInt, height: TermInt) {
        debug!("Terminal resized to {}x{}", width, height);
        self.back = Canvas::new(width, height);
        // Forces a full repaint
        self.front = None;
    }
}

impl Drop for TermManager {
    fn drop(&mut self) {
        if let Err(err) = self.restore() {
            error!("Failed to restore terminal: {:#}", err);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn print_outside_is_ignored() {
        let mut canvas = Canvas::new(4, 2);
        canvas.print_at((4, 0), '#', Color::Red);
        canvas.print_at((0, 2), '#', Color::Red);
        canvas.print_str((2, 1), "abc", Color::Red);

        assert_eq!(canvas.row_text(0), "    ");
        assert_eq!(canvas.row_text(1), "  ab");
        assert_eq!(canvas.get((3, 1)), Some(Glyph::new('b', Color::Red)));
        assert_eq!(canvas.get((4, 1)), None);
    }

    #[test]
    fn message_is_centered_in_a_box() {
        let mut canvas = Canvas::new(11, 5);
        canvas.show_message(&["Hi"], Color::White);

        assert_eq!(canvas.row_text(0), "           ");
        assert_eq!(canvas.row_text(2), "    Hi     ");
        assert_eq!(canvas.get((3, 1)), Some(Glyph::new(' ', Color::White)));
        assert_eq!(canvas.get((2, 1)), Some(Glyph::BLANK));
    }

    #[test]
    fn changes_only_lists_modified_glyphs() {
        let previous = Canvas::new(3, 2);
        let mut next = previous.clone();
        next.print_at((1, 1), 'x', Color::Green);

        let changes: Vec<_> = next.changes_since(&previous).collect();
        assert_eq!(changes, vec![((1, 1), Glyph::new('x', Color::Green))]);
        assert_eq!(next.changes_since(&next).count(), 0);
    }

    #[test]
    fn resized_canvas_repaints_everything() {
        let previous = Canvas::new(2, 2);
        let next = Canvas::new(3, 2);
        assert_eq!(next.changes_since(&previous).count(), 6);
    }

    #[test]
    fn clear_resets_every_glyph() {
        let mut canvas = Canvas::new(2, 1);
        canvas.print_str((0, 0), "ab", Color::Red);
        canvas.clear();
        assert_eq!(canvas, Canvas::new(2, 1));
    }
}

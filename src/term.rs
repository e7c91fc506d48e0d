use crate::game::RenderSink;
use crate::grid::Grid;
use crate::sim::{Cause, Scene, Status};
use crate::{Coords, TermInt};
use std::io::{self, stdout, Stdout, Write};

use anyhow::{ensure, Context, Result};
use crossterm::terminal::{ClearType, EnterAlternateScreen, LeaveAlternateScreen};
use crossterm::{cursor, execute, queue, style, terminal};

const SNAKE_BODY_CHAR: char = '█';
const ITEM_CHAR: char = 'O';
const DEAD_SNAKE_CHAR: char = 'X';

/// Owns the terminal for the lifetime of the game. Raw mode and the
/// alternate screen are entered by `setup` and left again on drop.
pub struct TermManager {
    width: TermInt,
    height: TermInt,
    stdout: Stdout,
    screen: Vec<char>,
    current_msg: Option<Message>,
    field: Coords,
    active: bool,
}

struct Message {
    top_left: (TermInt, TermInt),
    width: TermInt,
    height: TermInt,
}

impl TermManager {
    pub fn setup(grid: &Grid) -> Result<Self> {
        let (width, height) = terminal::size().context("Error reading terminal size")?;
        ensure!(
            i32::from(width) > grid.width() && i32::from(height) > grid.height(),
            "terminal is {}x{}, the {}x{} grid needs at least {}x{}",
            width,
            height,
            grid.width(),
            grid.height(),
            grid.width() + 1,
            grid.height() + 1
        );

        let mut term = TermManager {
            width,
            height,
            stdout: stdout(),
            screen: vec![' '; width as usize * height as usize],
            current_msg: None,
            field: (grid.width() + 1, grid.height() + 1),
            active: false,
        };

        execute!(term.stdout, EnterAlternateScreen).context("Error entering alt screen")?;
        term.active = true;
        terminal::enable_raw_mode().context("Error setting raw mode")?;
        execute!(term.stdout, cursor::Hide, cursor::DisableBlinking, terminal::Clear(ClearType::All))
            .context("Error preparing screen")?;

        Ok(term)
    }

    pub fn show_message(&mut self, lines: &[&str]) -> io::Result<()> {
        if self.has_message() {
            self.hide_message()?;
        }

        let msg_height = (lines.len() + 2) as TermInt;
        let msg_width = (lines.iter().map(|x| x.chars().count()).max().unwrap_or(0) + 2) as TermInt;
        let center = (self.field.0.min(self.width as i32) / 2, self.field.1.min(self.height as i32) / 2);
        let top_left = (
            (center.0 as TermInt).saturating_sub(msg_width / 2),
            (center.1 as TermInt).saturating_sub(msg_height / 2),
        );

        // Top and bottom padding rows
        for y in [top_left.1, top_left.1 + msg_height - 1] {
            for x_diff in 0..msg_width {
                self.print_at_no_save((top_left.0 + x_diff, y), ' ')?;
            }
        }

        for (i, line) in lines.iter().enumerate() {
            let padded_line = format!("{line: ^width$}", line = line, width = msg_width as usize);
            let y = top_left.1 + i as TermInt + 1;
            for (x_diff, ch) in padded_line.chars().enumerate() {
                self.print_at_no_save((top_left.0 + x_diff as TermInt, y), ch)?;
            }
        }

        self.current_msg = Some(Message { width: msg_width, height: msg_height, top_left });
        self.flush()
    }

    pub fn hide_message(&mut self) -> io::Result<()> {
        let msg = match self.current_msg.take() {
            Some(msg) => msg,
            None => return Ok(()),
        };

        // Put back whatever the box covered
        for y_diff in 0..msg.height {
            for x_diff in 0..msg.width {
                let (x, y) = (msg.top_left.0 + x_diff, msg.top_left.1 + y_diff);
                if let Some(idx) = self.index((x as i32, y as i32)) {
                    let ch = self.screen[idx];
                    self.print_at_no_save((x, y), ch)?;
                }
            }
        }

        self.flush()
    }

    pub fn has_message(&self) -> bool {
        self.current_msg.is_some()
    }

    ///////////////////////////////////////////////////////////////////////////

    fn index(&self, pos: Coords) -> Option<usize> {
        let in_bounds = pos.0 >= 0
            && pos.1 >= 0
            && pos.0 < i32::from(self.width)
            && pos.1 < i32::from(self.height);
        in_bounds.then(|| self.width as usize * pos.1 as usize + pos.0 as usize)
    }

    /// Lays out a full frame for `scene` in a fresh buffer
    fn compose(&self, scene: &Scene<'_>) -> Vec<char> {
        let mut frame = vec![' '; self.screen.len()];
        let mut put = |pos: Coords, ch: char| {
            if let Some(idx) = self.index(pos) {
                frame[idx] = ch;
            }
        };

        let (w, h) = (scene.grid.width(), scene.grid.height());
        for x in 0..=w {
            let ch = if x == 0 || x == w { '+' } else { '-' };
            put((x, 0), ch);
            put((x, h), ch);
        }
        for y in 1..h {
            put((0, y), '|');
            put((w, y), '|');
        }

        for item in scene.items {
            put(*item, ITEM_CHAR);
        }

        let dead = matches!(scene.status, Status::Terminated(_));
        let body_char = if dead { DEAD_SNAKE_CHAR } else { SNAKE_BODY_CHAR };
        for seg in scene.body.iter().rev() {
            put(*seg, body_char);
        }
        put(scene.head, scene.heading.head_char());

        frame
    }

    fn print_at_no_save(&mut self, pos: (TermInt, TermInt), ch: char) -> io::Result<()> {
        // For message boxes, the screen buffer keeps what is underneath
        if pos.0 >= self.width || pos.1 >= self.height {
            return Ok(());
        }
        queue!(self.stdout, cursor::MoveTo(pos.0, pos.1), style::Print(ch))
    }

    fn flush(&mut self) -> io::Result<()> {
        self.stdout.flush()
    }

    fn restore(&mut self) -> io::Result<()> {
        terminal::disable_raw_mode()?;
        execute!(self.stdout, cursor::Show, cursor::EnableBlinking, LeaveAlternateScreen)
    }
}

impl RenderSink for TermManager {
    fn render(&mut self, scene: &Scene<'_>) -> io::Result<()> {
        let frame = self.compose(scene);
        let width = self.width as usize;

        for (idx, (new, old)) in frame.iter().zip(self.screen.iter()).enumerate() {
            if new != old {
                let (x, y) = ((idx % width) as TermInt, (idx / width) as TermInt);
                queue!(self.stdout, cursor::MoveTo(x, y), style::Print(*new))?;
            }
        }
        self.screen = frame;

        if let Status::Terminated(result) = scene.status {
            let cause = match result.cause {
                Cause::SelfCollision => "You ran into yourself",
                Cause::OutOfBounds => "You hit the wall",
            };
            self.show_message(&[
                "Game over!",
                cause,
                &*format!("Result: {}", result.length),
                "",
                "Press any key to exit",
            ])?;
        }

        self.flush()
    }
}

impl Drop for TermManager {
    fn drop(&mut self) {
        if !self.active {
            return;
        }
        self.active = false;
        if let Err(e) = self.restore() {
            log::warn!("could not restore terminal: {}", e);
        }
    }
}

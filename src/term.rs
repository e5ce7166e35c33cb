use std::io::{Stdout, Write, stdout};
use std::time::Duration;

use crossterm::{cursor, execute, queue, style, terminal};
use crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers, poll, read};
use crossterm::style::Color;
use crossterm::terminal::{ClearType, EnterAlternateScreen, LeaveAlternateScreen};
use log::{debug, warn};

use crate::draw::{Canvas, Drawable};
use crate::error::{GameError, GameResult};
use crate::food::Food;
use crate::game::{InputEvent, InputSource, Renderer};
use crate::grid::Grid;
use crate::snake::{Direction::*, Snake};
use crate::{Position, Rgb};

/// Terminal columns per grid cell, so cells come out roughly square
const CELL_COLUMNS: u16 = 2;
const FILLED_CELL: &str = "[]";
const EMPTY_CELL: &str = "  ";

/// Owns the terminal for the duration of the game: reads keys from it and
/// draws the grid onto it.
pub struct TermManager {
    grid: Grid,
    stdout: Stdout,
    border: Rgb,
    background: Rgb,
    origin: (u16, u16),
    // What's currently on screen vs. the frame being composed, one entry per cell
    shown: Vec<Option<Rgb>>,
    frame: Vec<Option<Rgb>>,
}

impl TermManager {
    pub fn new(grid: Grid, border: Rgb, background: Rgb) -> GameResult<Self> {
        let (width, height) = terminal::size()?;
        let needed = (grid.width() as u16 * CELL_COLUMNS, grid.height() as u16);
        if width < needed.0 || height < needed.1 {
            return Err(GameError::TerminalTooSmall { needed, actual: (width, height) });
        }

        let origin = ((width - needed.0) / 2, (height - needed.1) / 2);
        let cells = grid.cell_count();

        Ok(TermManager {
            grid,
            stdout: stdout(),
            border,
            background,
            origin,
            shown: vec![None; cells],
            frame: vec![None; cells],
        })
    }

    pub fn setup(&mut self) -> GameResult<()> {
        execute!(self.stdout, EnterAlternateScreen)?;
        terminal::enable_raw_mode()?;
        execute!(self.stdout, cursor::Hide, cursor::DisableBlinking)?;
        self.clear()
    }

    pub fn restore(&mut self) -> GameResult<()> {
        terminal::disable_raw_mode()?;
        execute!(self.stdout, style::ResetColor, cursor::Show, cursor::EnableBlinking)?;
        execute!(self.stdout, LeaveAlternateScreen)?;
        Ok(())
    }

    fn clear(&mut self) -> GameResult<()> {
        execute!(self.stdout, terminal::Clear(ClearType::All))?;

        for idx in 0..self.shown.len() {
            self.print_cell(idx, None)?;
        }
        self.shown.iter_mut().for_each(|c| *c = None);

        self.flush()
    }

    fn flush(&mut self) -> GameResult<()> {
        queue!(self.stdout, style::ResetColor)?;
        self.stdout.flush()?;
        Ok(())
    }

    fn index_of(&self, pos: Position) -> Option<usize> {
        if !self.grid.contains(pos) {
            return None;
        }
        let (col, row) = self.grid.to_cell(pos);
        Some((row * self.grid.width() + col) as usize)
    }

    fn print_cell(&mut self, idx: usize, fill: Option<Rgb>) -> GameResult<()> {
        let width = self.grid.width() as usize;
        let x = self.origin.0 + (idx % width) as u16 * CELL_COLUMNS;
        let y = self.origin.1 + (idx / width) as u16;

        let (fg, bg, text) = cell_style(fill, self.border, self.background);

        queue!(self.stdout, cursor::MoveTo(x, y), style::SetBackgroundColor(bg))?;
        if let Some(fg) = fg {
            queue!(self.stdout, style::SetForegroundColor(fg))?;
        }
        queue!(self.stdout, style::Print(text))?;

        Ok(())
    }

    fn set_cell(&mut self, pos: Position, fill: Option<Rgb>) {
        match self.index_of(pos) {
            Some(idx) => self.frame[idx] = fill,
            None => warn!("Ignoring draw outside the grid at {:?}", pos),
        }
    }
}

impl Canvas for TermManager {
    fn fill_cell(&mut self, pos: Position, fill: Rgb) -> GameResult<()> {
        self.set_cell(pos, Some(fill));
        Ok(())
    }

    fn clear_cell(&mut self, pos: Position) -> GameResult<()> {
        self.set_cell(pos, None);
        Ok(())
    }
}

impl Renderer for TermManager {
    fn render(&mut self, snake: &Snake, food: &Food) -> GameResult<()> {
        self.frame.iter_mut().for_each(|c| *c = None);

        snake.draw(&mut *self)?;
        food.draw(&mut *self)?;

        // Only touch the cells that changed since the last frame
        for idx in 0..self.frame.len() {
            let fill = self.frame[idx];
            if self.shown[idx] != fill {
                self.print_cell(idx, fill)?;
                self.shown[idx] = fill;
            }
        }

        self.flush()
    }
}

/// Non-blocking reader for the crossterm event queue.
pub struct Keyboard;

impl InputSource for Keyboard {
    fn poll_events(&mut self) -> GameResult<Vec<InputEvent>> {
        let mut events = vec![];

        while poll(Duration::from_millis(0))? {
            match read()? {
                Event::Key(ev) => events.push(key_to_input(&ev)),
                Event::Resize(w, h) => debug!("Terminal resized to {}x{}", w, h),
                _ => {}
            }
        }

        Ok(events)
    }
}

fn to_color((r, g, b): Rgb) -> Color {
    Color::Rgb { r, g, b }
}

/// Foreground (filled cells only), background and text for one cell
fn cell_style(fill: Option<Rgb>, border: Rgb, background: Rgb) -> (Option<Color>, Color, &'static str) {
    match fill {
        Some(color) => (Some(to_color(border)), to_color(color), FILLED_CELL),
        None => (None, to_color(background), EMPTY_CELL),
    }
}

pub fn key_to_input(ev: &KeyEvent) -> InputEvent {
    match ev {
        KeyEvent { code: KeyCode::Char('c'), modifiers: KeyModifiers::CONTROL } => InputEvent::Quit,
        KeyEvent { code, modifiers: _ } => match code {
            KeyCode::Esc | KeyCode::Char('q') => InputEvent::Quit,
            KeyCode::Char('w') | KeyCode::Up => InputEvent::Turn(Up),
            KeyCode::Char('a') | KeyCode::Left => InputEvent::Turn(Left),
            KeyCode::Char('s') | KeyCode::Down => InputEvent::Turn(Down),
            KeyCode::Char('d') | KeyCode::Right => InputEvent::Turn(Right),
            _ => InputEvent::Other,
        }
    }
}

// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Interactive single-select and text-input prompts.
//!
//! [`Prompter`] is the seam used by the management flow. [`TerminalPrompter`]
//! draws the prompts inline (or on the alternate screen) with crossterm; key
//! handling lives in [`SelectState`] and [`InputState`] so it can be driven
//! without a terminal.

use std::io::{self, Write};
use std::ops::Range;

use crossterm::cursor::{Hide, MoveToColumn, MoveUp, Show};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::style::{Attribute, Print, SetAttribute};
use crossterm::terminal::{
    self, Clear, ClearType, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::{execute, queue};

/// Prompts the management flow needs. `None` means the user backed out.
pub trait Prompter {
    /// Pick one of `options`, returning its index.
    fn select(&mut self, title: &str, options: &[String]) -> io::Result<Option<usize>>;

    /// Read a line of text. `placeholder` is shown while the input is empty.
    fn input(&mut self, title: &str, placeholder: &str) -> io::Result<Option<String>>;
}

/// Result of feeding one key to a prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step<T> {
    Continue,
    Done(T),
    Cancel,
}

fn is_interrupt(key: &KeyEvent) -> bool {
    key.code == KeyCode::Esc
        || (key.modifiers.contains(KeyModifiers::CONTROL)
            && matches!(key.code, KeyCode::Char('c') | KeyCode::Char('d')))
}

/// Cursor over a list of options.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectState {
    cursor: usize,
    len: usize,
}

impl SelectState {
    pub fn new(len: usize) -> Self {
        Self { cursor: 0, len }
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn handle(&mut self, key: KeyEvent) -> Step<usize> {
        if is_interrupt(&key) {
            return Step::Cancel;
        }
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => {
                self.cursor = self.cursor.saturating_sub(1);
            }
            KeyCode::Down | KeyCode::Char('j') => {
                if self.cursor + 1 < self.len {
                    self.cursor += 1;
                }
            }
            KeyCode::Home | KeyCode::Char('g') => self.cursor = 0,
            KeyCode::End | KeyCode::Char('G') => self.cursor = self.len.saturating_sub(1),
            KeyCode::Char('q') => return Step::Cancel,
            KeyCode::Enter if self.len > 0 => return Step::Done(self.cursor),
            _ => {}
        }
        Step::Continue
    }
}

/// Line being edited in a text prompt.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InputState {
    value: String,
}

impl InputState {
    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn handle(&mut self, key: KeyEvent) -> Step<String> {
        if is_interrupt(&key) {
            return Step::Cancel;
        }
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        match key.code {
            KeyCode::Enter => return Step::Done(self.value.clone()),
            KeyCode::Backspace => {
                self.value.pop();
            }
            KeyCode::Char('u') if ctrl => self.value.clear(),
            KeyCode::Char(c) if !ctrl => self.value.push(c),
            _ => {}
        }
        Step::Continue
    }
}

/// Drawable terminal area as `(columns, rows)`, the order `terminal::size`
/// reports it in.
pub type Area = (u16, u16);

const FALLBACK_AREA: Area = (80, 24);

/// First `cols` characters of `text`, so a line never wraps.
fn clip(text: &str, cols: u16) -> String {
    text.chars().take(usize::from(cols)).collect()
}

/// Last `cols` characters of `text`, keeping the cursor end in view.
fn clip_tail(text: &str, cols: u16) -> &str {
    let len = text.chars().count();
    let skip = len.saturating_sub(usize::from(cols));
    text.char_indices().nth(skip).map_or("", |(i, _)| &text[i..])
}

/// Options shown for a list of `len` with the cursor at `cursor`, when `rows`
/// screen lines are available for the title, the options and the hint.
pub fn visible_range(len: usize, cursor: usize, rows: u16) -> Range<usize> {
    let room = usize::from(rows.saturating_sub(2)).max(1);
    let count = len.min(room);
    let start = cursor.saturating_sub(count.saturating_sub(1)).min(len - count);
    start..start + count
}

/// Draw a select prompt inside `area`. Returns the number of lines written.
pub fn render_select<W: Write>(
    out: &mut W,
    title: &str,
    options: &[String],
    state: &SelectState,
    area: Area,
) -> io::Result<u16> {
    let (cols, rows) = area;
    let item_cols = cols.saturating_sub(2);
    let shown = visible_range(options.len(), state.cursor(), rows);

    queue!(out, Print(clip(title, cols)), Print("\r\n"))?;
    for i in shown.clone() {
        let option = clip(&options[i], item_cols);
        if i == state.cursor() {
            queue!(
                out,
                SetAttribute(Attribute::Bold),
                Print("> "),
                Print(option),
                SetAttribute(Attribute::Reset),
                Print("\r\n")
            )?;
        } else {
            queue!(out, Print("  "), Print(option), Print("\r\n"))?;
        }
    }
    queue!(
        out,
        Print(clip("(↑/↓ to move, enter to select, esc to quit)", cols))
    )?;
    Ok(u16::try_from(shown.len())
        .unwrap_or(u16::MAX)
        .saturating_add(2))
}

/// Draw a text prompt inside `area`. Returns the number of lines written.
pub fn render_input<W: Write>(
    out: &mut W,
    title: &str,
    placeholder: &str,
    state: &InputState,
    area: Area,
) -> io::Result<u16> {
    let (cols, _) = area;
    let field_cols = cols.saturating_sub(2);
    queue!(out, Print(clip(title, cols)), Print("\r\n"), Print("> "))?;
    if state.value().is_empty() {
        queue!(
            out,
            SetAttribute(Attribute::Dim),
            Print(clip(placeholder, field_cols)),
            SetAttribute(Attribute::Reset)
        )?;
    } else {
        queue!(out, Print(clip_tail(state.value(), field_cols)))?;
    }
    Ok(2)
}

/// A prompt the terminal loop can draw and feed keys to.
trait Prompt {
    type Output;

    fn render(&self, out: &mut io::Stdout, area: Area) -> io::Result<u16>;

    fn handle(&mut self, key: KeyEvent) -> Step<Self::Output>;
}

struct SelectPrompt<'a> {
    title: &'a str,
    options: &'a [String],
    state: SelectState,
}

impl Prompt for SelectPrompt<'_> {
    type Output = usize;

    fn render(&self, out: &mut io::Stdout, area: Area) -> io::Result<u16> {
        render_select(out, self.title, self.options, &self.state, area)
    }

    fn handle(&mut self, key: KeyEvent) -> Step<usize> {
        self.state.handle(key)
    }
}

struct InputPrompt<'a> {
    title: &'a str,
    placeholder: &'a str,
    state: InputState,
}

impl Prompt for InputPrompt<'_> {
    type Output = String;

    fn render(&self, out: &mut io::Stdout, area: Area) -> io::Result<u16> {
        render_input(out, self.title, self.placeholder, &self.state, area)
    }

    fn handle(&mut self, key: KeyEvent) -> Step<String> {
        self.state.handle(key)
    }
}

/// Prompts drawn on the controlling terminal.
pub struct TerminalPrompter {
    alt_screen: bool,
}

impl TerminalPrompter {
    pub fn new(alt_screen: bool) -> Self {
        Self { alt_screen }
    }

    fn run<P: Prompt>(&mut self, prompt: &mut P) -> io::Result<Option<P::Output>> {
        let mut out = io::stdout();
        let _screen = Screen::enter(&mut out, self.alt_screen)?;
        let mut drawn = 0u16;
        loop {
            erase(&mut out, drawn)?;
            let area = terminal::size().unwrap_or(FALLBACK_AREA);
            drawn = prompt.render(&mut out, area)?;
            out.flush()?;

            let key = match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => key,
                _ => continue,
            };
            let result = match prompt.handle(key) {
                Step::Continue => continue,
                Step::Done(value) => Some(value),
                Step::Cancel => None,
            };
            erase(&mut out, drawn)?;
            out.flush()?;
            return Ok(result);
        }
    }
}

impl Prompter for TerminalPrompter {
    fn select(&mut self, title: &str, options: &[String]) -> io::Result<Option<usize>> {
        self.run(&mut SelectPrompt {
            title,
            options,
            state: SelectState::new(options.len()),
        })
    }

    fn input(&mut self, title: &str, placeholder: &str) -> io::Result<Option<String>> {
        self.run(&mut InputPrompt {
            title,
            placeholder,
            state: InputState::default(),
        })
    }
}

/// Clear the lines of the previous frame and return to its first column.
fn erase<W: Write>(out: &mut W, drawn: u16) -> io::Result<()> {
    if drawn > 1 {
        queue!(out, MoveUp(drawn - 1))?;
    }
    queue!(out, MoveToColumn(0), Clear(ClearType::FromCursorDown))
}

/// Raw mode, hidden cursor and optionally the alternate screen, undone on drop.
struct Screen {
    alt_screen: bool,
}

impl Screen {
    fn enter<W: Write>(out: &mut W, alt_screen: bool) -> io::Result<Self> {
        terminal::enable_raw_mode()?;
        let screen = Self { alt_screen };
        if alt_screen {
            execute!(out, EnterAlternateScreen)?;
        }
        execute!(out, Hide)?;
        Ok(screen)
    }
}

impl Drop for Screen {
    fn drop(&mut self) {
        let mut out = io::stdout();
        let _ = execute!(out, Show);
        if self.alt_screen {
            let _ = execute!(out, LeaveAlternateScreen);
        }
        let _ = terminal::disable_raw_mode();
    }
}

#[cfg(test)]
#[path = "menu_tests.rs"]
mod tests;

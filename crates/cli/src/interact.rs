// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Notelink Contributors

//! Interactive collaborators: the reference prompt, the suggestion pickers,
//! and advisory notices.
//!
//! Command handlers never talk to the terminal directly; they go through
//! [`Interact`] so the interactive paths stay drivable by scripted fakes in
//! tests. The terminal implementation uses an inline crossterm picker with
//! type-to-filter over both rendered fields, matching case-insensitively.

use std::io::{self, IsTerminal, Write};

use crossterm::{
    cursor, event,
    style::{Print, Stylize},
    terminal, ExecutableCommand, QueueableCommand,
};

use crate::error::{Error, Result};
use notelink_core::{Project, TrackerInstance};

/// The interactive collaborators a command handler may suspend into.
pub trait Interact {
    /// Asks the user for an issue reference. `None` means nothing was
    /// entered, which callers treat as "no action".
    fn prompt_reference(&mut self, description: &str) -> Result<Option<String>>;

    /// Presents the instances for manual choice. `None` means dismissed.
    fn choose_instance<'a>(
        &mut self,
        candidates: &'a [TrackerInstance],
        placeholder: &str,
    ) -> Result<Option<&'a TrackerInstance>>;

    /// Presents the projects for manual choice. `None` means dismissed.
    fn choose_project<'a>(
        &mut self,
        candidates: &'a [Project],
        placeholder: &str,
    ) -> Result<Option<&'a Project>>;

    /// Fire-and-forget advisory display.
    fn notify(&mut self, message: &str);
}

/// Terminal implementation of [`Interact`].
///
/// Every entry point that needs a human requires a TTY and fails with
/// [`Error::NonInteractive`] otherwise, so piped invocations get a hint
/// instead of a hang.
pub struct TerminalInteract;

impl Interact for TerminalInteract {
    fn prompt_reference(&mut self, description: &str) -> Result<Option<String>> {
        if !io::stdin().is_terminal() {
            return Err(Error::NonInteractive);
        }

        let mut stderr = io::stderr();
        writeln!(stderr, "{}", description)?;
        write!(stderr, "> ")?;
        stderr.flush()?;

        let mut line = String::new();
        io::stdin().read_line(&mut line)?;
        let entered = line.trim_end_matches(['\r', '\n']).to_string();
        if entered.is_empty() {
            Ok(None)
        } else {
            Ok(Some(entered))
        }
    }

    fn choose_instance<'a>(
        &mut self,
        candidates: &'a [TrackerInstance],
        placeholder: &str,
    ) -> Result<Option<&'a TrackerInstance>> {
        let rows = instance_rows(candidates);
        Ok(pick_index(&rows, placeholder)?.map(|index| &candidates[index]))
    }

    fn choose_project<'a>(
        &mut self,
        candidates: &'a [Project],
        placeholder: &str,
    ) -> Result<Option<&'a Project>> {
        let rows = project_rows(candidates);
        Ok(pick_index(&rows, placeholder)?.map(|index| &candidates[index]))
    }

    fn notify(&mut self, message: &str) {
        eprintln!("{}", message);
    }
}

/// Rows rendered for instance suggestions. Untitled instances are shown as
/// `Instance N`, numbered over the untitled ones only.
fn instance_rows(candidates: &[TrackerInstance]) -> Vec<[String; 2]> {
    let mut untitled = 0;
    candidates
        .iter()
        .map(|instance| {
            let title = if instance.title.is_empty() {
                let generated = format!("Instance {}", untitled);
                untitled += 1;
                generated
            } else {
                instance.title.clone()
            };
            [title, instance.url.clone()]
        })
        .collect()
}

/// Rows rendered for project suggestions.
fn project_rows(candidates: &[Project]) -> Vec<[String; 2]> {
    candidates
        .iter()
        .map(|project| [project.name.clone(), project.abbreviation.clone()])
        .collect()
}

/// Indexes of the rows matching the query, in list order. The query matches
/// either rendered field, case-insensitively.
fn filter_rows(rows: &[[String; 2]], query: &str) -> Vec<usize> {
    if query.is_empty() {
        return (0..rows.len()).collect();
    }
    let needle = query.to_lowercase();
    rows.iter()
        .enumerate()
        .filter(|(_, row)| {
            row[0].to_lowercase().contains(&needle) || row[1].to_lowercase().contains(&needle)
        })
        .map(|(index, _)| index)
        .collect()
}

/// Run the interactive inline picker over the given rows.
///
/// Uses crossterm raw mode: arrows navigate, Enter selects, Esc or ctrl-c
/// dismisses, any other character narrows the filter query.
fn pick_index(rows: &[[String; 2]], placeholder: &str) -> Result<Option<usize>> {
    if rows.is_empty() {
        return Ok(None);
    }
    if !io::stdin().is_terminal() || !io::stdout().is_terminal() {
        return Err(Error::NonInteractive);
    }

    let mut stdout = io::stdout();
    let mut query = String::new();
    let mut selected: usize = 0;
    let mut visible = filter_rows(rows, &query);

    terminal::enable_raw_mode().map_err(Error::Io)?;
    let _ = stdout.execute(cursor::Hide);

    let mut drawn = match draw_picker(&mut stdout, rows, placeholder, &query, selected, &visible) {
        Ok(lines) => lines,
        Err(e) => {
            restore_terminal(&mut stdout);
            return Err(Error::Io(e));
        }
    };

    let result = loop {
        let evt = match event::read() {
            Ok(evt) => evt,
            Err(e) => {
                restore_terminal(&mut stdout);
                return Err(Error::Io(e));
            }
        };

        if let event::Event::Key(key) = evt {
            match key.code {
                event::KeyCode::Up => {
                    if !visible.is_empty() {
                        selected = (selected + visible.len() - 1) % visible.len();
                    }
                }
                event::KeyCode::Down => {
                    if !visible.is_empty() {
                        selected = (selected + 1) % visible.len();
                    }
                }
                event::KeyCode::Enter => {
                    if let Some(&index) = visible.get(selected) {
                        break Some(index);
                    }
                }
                event::KeyCode::Esc => break None,
                event::KeyCode::Char('c')
                    if key.modifiers.contains(event::KeyModifiers::CONTROL) =>
                {
                    break None;
                }
                event::KeyCode::Backspace => {
                    query.pop();
                    visible = filter_rows(rows, &query);
                    selected = 0;
                }
                event::KeyCode::Char(c) => {
                    query.push(c);
                    visible = filter_rows(rows, &query);
                    selected = 0;
                }
                _ => continue,
            }

            // Redraw: move cursor to the top of our output, clear, redraw
            let _ = stdout.execute(cursor::MoveUp(drawn));
            let _ = stdout.execute(terminal::Clear(terminal::ClearType::FromCursorDown));
            drawn = match draw_picker(&mut stdout, rows, placeholder, &query, selected, &visible) {
                Ok(lines) => lines,
                Err(_) => drawn,
            };
        }
    };

    // Clean up: clear the picker UI and hand the terminal back
    let _ = stdout.execute(cursor::MoveUp(drawn));
    let _ = stdout.execute(terminal::Clear(terminal::ClearType::FromCursorDown));
    restore_terminal(&mut stdout);

    Ok(result)
}

/// Draws the picker and returns the number of terminal lines used.
fn draw_picker(
    stdout: &mut io::Stdout,
    rows: &[[String; 2]],
    placeholder: &str,
    query: &str,
    selected: usize,
    visible: &[usize],
) -> io::Result<u16> {
    let header = if query.is_empty() {
        placeholder.to_string()
    } else {
        format!("{} [{}]", placeholder, query)
    };
    stdout.queue(Print(header.bold()))?;
    stdout.queue(Print("\r\n"))?;
    let mut lines: u16 = 1;

    if visible.is_empty() {
        stdout.queue(Print("  (no matches)".dark_grey()))?;
        stdout.queue(Print("\r\n"))?;
        lines += 1;
    }
    for (position, &index) in visible.iter().enumerate() {
        let row = &rows[index];
        if position == selected {
            stdout.queue(Print(format!("❯ {}", row[0]).bold()))?;
        } else {
            stdout.queue(Print(format!("  {}", row[0])))?;
        }
        if !row[1].is_empty() {
            stdout.queue(Print(format!("  {}", row[1]).dark_grey()))?;
        }
        stdout.queue(Print("\r\n"))?;
        lines += 1;
    }

    stdout.queue(Print("\r\n"))?;
    stdout.queue(Print(
        "↑/↓: Navigate  Enter: Select  Esc: Cancel  Type to filter".dark_grey(),
    ))?;
    stdout.queue(Print("\r\n"))?;
    lines += 2;

    stdout.flush()?;
    Ok(lines)
}

fn restore_terminal(stdout: &mut io::Stdout) {
    let _ = stdout.execute(cursor::Show);
    let _ = terminal::disable_raw_mode();
}

#[cfg(test)]
#[path = "interact_tests.rs"]
mod tests;

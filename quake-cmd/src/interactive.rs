//! Prompt-driven paging through a result set.

use dialoguer::Input;
use quake_core::pagination::PageItem;
use quake_core::session::ResultsSession;
use std::io::Write;

use crate::view::render_page;

/// One navigation request typed at the prompt.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum NavCommand {
    Next,
    Previous,
    Page(usize),
    PageSize(usize),
    Quit,
}

/// Parse a prompt line. Page numbers are only accepted when the current
/// strip offers them; `size N` changes the page size.
pub fn parse_nav(input: &str, strip: &[PageItem]) -> Option<NavCommand> {
    match input.trim().to_lowercase().as_str() {
        "n" | "next" => Some(NavCommand::Next),
        "p" | "prev" | "previous" => Some(NavCommand::Previous),
        "q" | "quit" | "b" | "back" => Some(NavCommand::Quit),
        other if other.starts_with("size ") => other["size ".len()..]
            .trim()
            .parse::<usize>()
            .ok()
            .filter(|size| *size > 0)
            .map(NavCommand::PageSize),
        other => other
            .parse::<usize>()
            .ok()
            .filter(|page| strip.contains(&PageItem::Page(*page)))
            .map(NavCommand::Page),
    }
}

/// Where navigation commands come from. `None` ends the session.
pub trait NavInput {
    fn read_command(&mut self, strip: &[PageItem]) -> anyhow::Result<Option<String>>;
}

/// Terminal prompt. Lines `parse_nav` would reject are refused at the prompt.
pub struct TerminalInput;

impl NavInput for TerminalInput {
    fn read_command(&mut self, strip: &[PageItem]) -> anyhow::Result<Option<String>> {
        let line: String = Input::new()
            .with_prompt("n, p, page number, size N, q")
            .validate_with(|input: &String| -> Result<(), String> {
                parse_nav(input, strip)
                    .map(|_| ())
                    .ok_or_else(|| format!("Unknown command {:?}", input.trim()))
            })
            .interact_text()?;
        Ok(Some(line))
    }
}

/// Render, read a command, apply it, repeat until `q` or end of input.
pub fn run_interactive<I: NavInput, W: Write>(
    session: &mut ResultsSession,
    delta: usize,
    input: &mut I,
    mut output: W,
) -> anyhow::Result<()> {
    write!(output, "{}", render_page(session, delta))?;
    output.flush()?;

    while let Some(line) = input.read_command(&session.strip(delta))? {
        match parse_nav(&line, &session.strip(delta)) {
            Some(NavCommand::Quit) => break,
            Some(NavCommand::Next) => session.next(),
            Some(NavCommand::Previous) => session.previous(),
            Some(NavCommand::Page(page)) => session.go_to_page(page),
            Some(NavCommand::PageSize(size)) => {
                if let Err(e) = session.set_page_size(size) {
                    writeln!(output, "{e}")?;
                }
            }
            None => {
                writeln!(
                    output,
                    "Unknown command {:?}: use n, p, a page number from the strip, size N, or q",
                    line.trim()
                )?;
                continue;
            }
        }
        write!(output, "{}", render_page(session, delta))?;
        output.flush()?;
    }
    Ok(())
}

//! Terminal output for the markdown the planner produces.
//!
//! Rich mode styles text through termimad but keeps header and inline-code
//! markers intact: plan ids ("# 3.") and slot tokens ("`0-morning-1`") in
//! those lines are meant to be copied back into commands. Plain mode
//! (`--no-color`) emits the markdown verbatim, which is also what the CLI
//! tests match against.

use std::fmt::Write as _;

use anyhow::Result;
use termimad::{crossterm::style::Color, MadSkin};

const HEADER_BLUE: &str = "\x1b[34m";
const RESET: &str = "\x1b[0m";

/// Terminal renderer that can switch between rich and plain text output
pub struct TerminalRenderer {
    rich_enabled: bool,
    skin: MadSkin,
}

impl TerminalRenderer {
    pub fn new(rich_enabled: bool) -> Self {
        Self {
            rich_enabled,
            skin: travel_skin(),
        }
    }

    /// Prints markdown to stdout, styled according to the active mode.
    pub fn render(&self, markdown: &str) -> Result<()> {
        print!("{}", self.styled(markdown));
        Ok(())
    }

    fn styled(&self, markdown: &str) -> String {
        if !self.rich_enabled {
            return markdown.to_string();
        }

        let mut out = String::with_capacity(markdown.len());
        for line in markdown.lines() {
            if line.starts_with('#') {
                // Headers are colored whole so the hash marks and the plan
                // id after them survive into the output.
                let _ = writeln!(out, "{HEADER_BLUE}{line}{RESET}");
            } else {
                let _ = writeln!(out, "{}", self.skin.inline(line));
            }
        }
        out
    }
}

fn travel_skin() -> MadSkin {
    let mut skin = MadSkin::default();

    skin.set_headers_fg(Color::Blue);
    skin.bold.set_fg(Color::Yellow);
    skin.italic.set_fg(Color::Magenta);
    skin.code_block.set_bg(Color::AnsiValue(238));
    skin.inline_code.set_bg(Color::AnsiValue(238));

    skin
}

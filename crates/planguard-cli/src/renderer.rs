//! Terminal rendering for validation reports.
//!
//! Reports arrive as the markdown produced by `planguard_core`'s `Display`
//! impls. In rich mode each line is styled through a termimad skin, with the
//! finding status and recommendation priority markers colored by severity.
//! Plain mode passes the markdown through untouched.

use std::io::{self, Write};

use anyhow::{Context, Result};
use termimad::{crossterm::style::Color, CompoundStyle, MadSkin};

/// Severity of a line marker, used to pick its color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Severity {
    Ok,
    Attention,
    Critical,
}

/// Leading markers written by the report's finding and recommendation lines.
const MARKERS: [(&str, Severity); 5] = [
    ("✓ Passed", Severity::Ok),
    ("⚠ Warning", Severity::Attention),
    ("✗ Failed", Severity::Critical),
    ("[medium]", Severity::Attention),
    ("[high]", Severity::Critical),
];

/// Terminal renderer that can switch between rich and plain text output
pub struct TerminalRenderer {
    rich_enabled: bool,
    skin: MadSkin,
    ok: CompoundStyle,
    attention: CompoundStyle,
    critical: CompoundStyle,
}

impl TerminalRenderer {
    /// Create a new terminal renderer
    pub fn new(rich_enabled: bool) -> Self {
        let mut skin = MadSkin::default();
        skin.set_headers_fg(Color::Blue);
        skin.bold.set_fg(Color::Yellow);

        Self {
            rich_enabled,
            skin,
            ok: CompoundStyle::with_fg(Color::Green),
            attention: CompoundStyle::with_fg(Color::Yellow),
            critical: CompoundStyle::with_fg(Color::Red),
        }
    }

    /// Render a report to stdout
    pub fn render(&self, markdown: &str) -> Result<()> {
        let mut stdout = io::stdout().lock();
        write!(stdout, "{}", self.format(markdown)).context("Failed to write report")?;
        stdout.flush().context("Failed to write report")
    }

    /// Produce the text `render` writes.
    fn format(&self, markdown: &str) -> String {
        if !self.rich_enabled {
            return markdown.to_string();
        }

        let mut out = String::with_capacity(markdown.len() * 2);
        for line in markdown.lines() {
            out.push_str(&self.format_line(line));
            out.push('\n');
        }
        out
    }

    fn format_line(&self, line: &str) -> String {
        if line.starts_with('#') {
            return self.skin.headers[0]
                .compound_style
                .apply_to(line)
                .to_string();
        }

        let Some(item) = line.strip_prefix("- ") else {
            return self.skin.inline(line).to_string();
        };
        for (marker, severity) in MARKERS {
            if let Some(rest) = item.strip_prefix(marker) {
                return format!(
                    "- {}{}",
                    self.style(severity).apply_to(marker),
                    self.skin.inline(rest)
                );
            }
        }
        self.skin.inline(line).to_string()
    }

    fn style(&self, severity: Severity) -> &CompoundStyle {
        match severity {
            Severity::Ok => &self.ok,
            Severity::Attention => &self.attention,
            Severity::Critical => &self.critical,
        }
    }
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new(true)
    }
}

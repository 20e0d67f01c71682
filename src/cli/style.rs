//! Terminal styling helpers
//!
//! Everything here emits ANSI codes unconditionally; `anstream` strips them
//! when the output is not a terminal.

use gitlab_mr::review::Action;
use indicatif::ProgressStyle;
use owo_colors::{OwoColorize, Style, Styled};
use supports_hyperlinks::Stream;
use terminal_link::Link;

/// Check mark used in success messages
pub const CHECK: &str = "✓";

/// Separator between columns of the actions listing
pub const SEPARATOR: &str = " | ";

/// Semantic styles shared by all commands
pub trait Stylize: OwoColorize + Sized {
    /// De-emphasized hint text
    fn muted(&self) -> Styled<&Self> {
        self.style(Style::new().dimmed())
    }

    /// Headings and labels
    fn emphasis(&self) -> Styled<&Self> {
        self.style(Style::new().bold())
    }

    /// Values worth spotting (project names, counts)
    fn accent(&self) -> Styled<&Self> {
        self.style(Style::new().blue())
    }

    /// Completed operations
    fn success(&self) -> Styled<&Self> {
        self.style(Style::new().green())
    }

    /// Warnings
    fn warn(&self) -> Styled<&Self> {
        self.style(Style::new().yellow())
    }
}

impl<T: std::fmt::Display> Stylize for T {}

/// Styled check mark
pub fn check() -> String {
    CHECK.success().to_string()
}

/// Styled column separator
pub fn separator() -> String {
    SEPARATOR.bright_white().bold().to_string()
}

/// Spinner used while fetching from GitLab
pub fn spinner_style() -> ProgressStyle {
    ProgressStyle::with_template("{spinner:.cyan} {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_spinner())
        .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏ ")
}

/// Style for an action label: notable actions blink red, waits are green
pub fn action_style(action: Action) -> Style {
    if action.is_notable() {
        Style::new().blink().bright_red()
    } else if action.is_wait() {
        Style::new().green()
    } else {
        Style::new().cyan()
    }
}

/// Styled action label
pub fn styled_action(action: Action) -> String {
    action.label().style(action_style(action)).to_string()
}

/// Style for an MR title: drafts dim cyan, own MRs dim green
pub fn title_style(work_in_progress: bool, is_mine: bool) -> Style {
    let style = Style::new().bold();
    if work_in_progress {
        style.cyan().dimmed()
    } else if is_mine {
        style.green().dimmed()
    } else {
        style.bright_green()
    }
}

/// Render a URL as a terminal hyperlink when stdout supports it
pub fn hyperlink(url: &str) -> String {
    if supports_hyperlinks::on(Stream::Stdout) {
        Link::new(url, url).to_string()
    } else {
        url.to_string()
    }
}

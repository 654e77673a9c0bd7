//! Terminal rendering of markdown output with termimad.
//!
//! `--no-color` (or a non-rich renderer) prints the markdown unchanged.

use anyhow::Result;
use termimad::{crossterm::style::Color, MadSkin};

/// Status icons colored in rich mode.
const ICON_COLORS: [(char, Color); 3] = [
    ('✓', Color::Green),
    ('•', Color::Yellow),
    ('✕', Color::Red),
];

/// Terminal renderer that can switch between rich and plain text output
pub struct TerminalRenderer {
    rich_enabled: bool,
    skin: MadSkin,
}

impl TerminalRenderer {
    pub fn new(rich_enabled: bool) -> Self {
        let mut skin = MadSkin::default();

        skin.set_headers_fg(Color::Blue);
        skin.bold.set_fg(Color::Yellow);
        skin.italic.set_fg(Color::Magenta);
        skin.inline_code.set_bg(Color::AnsiValue(238));

        Self { rich_enabled, skin }
    }

    /// Render markdown text to the terminal.
    pub fn render(&self, markdown: &str) -> Result<()> {
        if !self.rich_enabled {
            print!("{markdown}");
            return Ok(());
        }

        for line in markdown.lines() {
            if line.starts_with('#') {
                // Keep the hash marks so heading levels stay visible.
                println!("{}", self.header_line(line));
            } else {
                self.skin.print_inline(line);
                println!();
            }
        }
        Ok(())
    }

    fn header_line(&self, line: &str) -> String {
        let colored = format!("\x1b[34m{line}\x1b[0m");
        match ICON_COLORS.iter().find(|(icon, _)| line.contains(*icon)) {
            Some((icon, color)) => {
                let code = match color {
                    Color::Green => 32,
                    Color::Yellow => 33,
                    _ => 31,
                };
                colored.replacen(*icon, &format!("\x1b[{code}m{icon}\x1b[34m"), 1)
            }
            None => colored,
        }
    }
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_renderer() {
        let renderer = TerminalRenderer::new(false);
        assert!(!renderer.rich_enabled);
        assert!(renderer.render("# Plans\n").is_ok());
    }

    #[test]
    fn test_default_is_rich() {
        let renderer = TerminalRenderer::default();
        assert!(renderer.rich_enabled);
    }

    #[test]
    fn test_header_icon_is_colored() {
        let renderer = TerminalRenderer::new(true);
        let line = renderer.header_line("### 4. Bàn giao nhân sự (✕ Từ chối)");
        assert!(line.starts_with("\x1b[34m###"));
        assert!(line.contains("\x1b[31m✕\x1b[34m"));
    }
}

use crate::ui::theme::{ACCENT, GLOBAL_BORDER, HEADER_SEPARATOR, HEADER_TEXT};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

const TITLE: &str = "Coloring Page Creator";
const SUBTITLE: &str = "Turn your ideas into beautiful, black-and-white coloring pages.";

pub struct Header;

impl Header {
    pub fn new() -> Self {
        Self
    }

    pub fn widget(&self) -> Paragraph<'static> {
        let line = Line::from(vec![
            Span::raw("  "),
            Span::styled(TITLE, Style::default().fg(ACCENT).add_modifier(Modifier::BOLD)),
            Span::styled("  │  ", Style::default().fg(HEADER_SEPARATOR)),
            Span::styled(SUBTITLE, Style::default().fg(HEADER_TEXT)),
        ]);

        Paragraph::new(line).block(
            Block::default()
                .borders(Borders::TOP | Borders::BOTTOM)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        )
    }
}

use crate::ui::theme::{GLOBAL_BORDER, HEADER_TEXT, STATUS_OK};
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

const VERSION: &str = env!("CARGO_PKG_VERSION");

pub struct Footer<'a> {
    hints: &'a str,
    note: Option<&'a str>,
}

impl<'a> Footer<'a> {
    pub fn new(hints: &'a str, note: Option<&'a str>) -> Self {
        Self { hints, note }
    }

    pub fn widget(&self, area: Rect) -> Paragraph<'static> {
        let hints = format!(" {}", self.hints);
        let note = self.note.map(|note| format!(" │ {}", note)).unwrap_or_default();
        let version = format!("v{} ", VERSION);

        // Char count, not byte count
        let used = hints.chars().count() + note.chars().count() + version.chars().count();
        let content_width = area.width.saturating_sub(2) as usize;
        let padding = content_width.saturating_sub(used);

        let text_style = Style::default().fg(HEADER_TEXT).add_modifier(Modifier::DIM);

        let line = Line::from(vec![
            Span::styled(hints, text_style),
            Span::styled(note, Style::default().fg(STATUS_OK)),
            Span::styled(" ".repeat(padding), text_style),
            Span::styled(version, text_style),
        ]);

        Paragraph::new(line).alignment(Alignment::Left).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        )
    }
}

//! Rendering for the share dialog overlay.

use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::ui::layout::centered_rect_by_size;
use crate::ui::theme::{spinner_frame, ACTIVE_HIGHLIGHT, HEADER_TEXT, POPUP_BORDER, STATUS_OK};

use super::state::ShareDialogState;

const MIN_DIALOG_WIDTH: u16 = 40;

/// Render the share dialog on top of `area`.
pub fn render_share_dialog(frame: &mut Frame, area: Rect, state: &ShareDialogState) {
    let lines = match state {
        ShareDialogState::Hidden => return,
        ShareDialogState::Choosing {
            request,
            choices,
            selected,
        } => {
            let mut lines = vec![
                Line::from(Span::styled(
                    format!(" {}", request.title),
                    Style::default().fg(HEADER_TEXT).add_modifier(Modifier::BOLD),
                )),
                Line::from(Span::styled(
                    format!(" {}", request.text),
                    Style::default().fg(HEADER_TEXT).add_modifier(Modifier::DIM),
                )),
                Line::from(""),
            ];
            for (idx, choice) in choices.iter().enumerate() {
                let style = if idx == *selected {
                    Style::default()
                        .fg(HEADER_TEXT)
                        .bg(ACTIVE_HIGHLIGHT)
                        .add_modifier(Modifier::BOLD)
                } else {
                    Style::default().fg(HEADER_TEXT)
                };
                lines.push(Line::from(Span::styled(
                    format!(" {:>2}. {} ", idx + 1, choice.label),
                    style,
                )));
            }
            lines.push(Line::from(""));
            lines.push(Line::from(Span::styled(
                " Up/Down: Move  Enter: Share  Esc: Cancel",
                Style::default().fg(HEADER_TEXT).add_modifier(Modifier::DIM),
            )));
            lines
        }
        ShareDialogState::Sending {
            label,
            animation_tick,
        } => vec![
            Line::from(""),
            Line::from(vec![
                Span::styled(
                    format!("  {} ", spinner_frame(*animation_tick)),
                    Style::default().fg(STATUS_OK),
                ),
                Span::styled(format!("{label}..."), Style::default().fg(HEADER_TEXT)),
            ]),
        ],
    };

    let content_width = lines.iter().map(Line::width).max().unwrap_or(0) as u16;
    let width = content_width.saturating_add(4).max(MIN_DIALOG_WIDTH);
    let height = (lines.len() as u16).saturating_add(2);
    let dialog = centered_rect_by_size(area, width, height);

    frame.render_widget(Clear, dialog);
    let block = Block::default()
        .title(" Share ")
        .title_alignment(Alignment::Center)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(POPUP_BORDER));
    frame.render_widget(Paragraph::new(lines).block(block), dialog);
}

use crate::ui::app::App;
use crate::ui::footer::Footer;
use crate::ui::generation::GenerationState;
use crate::ui::header::Header;
use crate::ui::layout::{body_regions, layout_regions};
use crate::ui::share_dialog::render_share_dialog;
use crate::ui::theme::{
    spinner_frame, ACCENT, GLOBAL_BORDER, HEADER_TEXT, STATUS_ERROR, STATUS_OK,
};
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};
use ratatui::Frame;

const PLACEHOLDER: &str = "e.g., a castle in the clouds";

pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let area = frame.area();
    let (header, body, footer) = layout_regions(area);

    frame.render_widget(Header::new().widget(), header);
    frame.render_widget(Clear, body);

    let regions = body_regions(body);
    draw_prompt(frame, app, regions.prompt);
    draw_status(frame, app, regions.status);
    draw_image_region(frame, app, regions.image);

    let hints = footer_hints(app);
    frame.render_widget(
        Footer::new(hints, app.status_note()).widget(footer),
        footer,
    );

    render_share_dialog(frame, body, app.share_dialog());
}

fn draw_prompt(frame: &mut Frame<'_>, app: &App, area: Rect) {
    let loading = app.generation().is_loading();
    let border = if loading { GLOBAL_BORDER } else { ACCENT };
    let block = Block::default()
        .title(" Describe your page ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border));
    let inner = block.inner(area);

    let prompt = app.prompt();
    let line = if prompt.is_empty() {
        Line::from(Span::styled(
            PLACEHOLDER,
            Style::default().fg(HEADER_TEXT).add_modifier(Modifier::DIM),
        ))
    } else {
        let style = if loading {
            Style::default().fg(HEADER_TEXT).add_modifier(Modifier::DIM)
        } else {
            Style::default().fg(HEADER_TEXT)
        };
        Line::from(Span::styled(prompt.text().to_string(), style))
    };

    // Keep the cursor visible on long prompts.
    let width = inner.width as usize;
    let scroll = prompt.cursor().saturating_sub(width.saturating_sub(1));
    frame.render_widget(
        Paragraph::new(line).block(block).scroll((0, scroll as u16)),
        area,
    );

    if !loading && !app.share_dialog().is_visible() && inner.width > 0 && inner.height > 0 {
        let x = inner.x + (prompt.cursor() - scroll) as u16;
        frame.set_cursor_position((x.min(inner.right().saturating_sub(1)), inner.y));
    }
}

fn draw_status(frame: &mut Frame<'_>, app: &App, area: Rect) {
    let line = match app.generation() {
        GenerationState::Loading { animation_tick, .. } => Line::from(vec![
            Span::styled(
                format!(" {} ", spinner_frame(*animation_tick)),
                Style::default().fg(STATUS_OK),
            ),
            Span::styled("Generating...", Style::default().fg(HEADER_TEXT)),
        ]),
        _ => {
            let style = if app.can_submit() {
                Style::default().fg(ACCENT).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(HEADER_TEXT).add_modifier(Modifier::DIM)
            };
            Line::from(Span::styled(" ✦ Enter: Generate", style))
        }
    };
    frame.render_widget(Paragraph::new(line), area);
}

fn draw_image_region(frame: &mut Frame<'_>, app: &App, area: Rect) {
    let mut area = area;

    if let Some(message) = app.generation().error_message() {
        let banner = vec![
            Line::from(Span::styled(
                "Oops, something went wrong!",
                Style::default().fg(STATUS_ERROR).add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(message.to_string(), Style::default().fg(STATUS_ERROR))),
        ];
        let height = 4.min(area.height);
        let banner_area = Rect { height, ..area };
        frame.render_widget(
            Paragraph::new(banner).wrap(Wrap { trim: true }).block(
                Block::default()
                    .borders(Borders::LEFT)
                    .border_style(Style::default().fg(STATUS_ERROR)),
            ),
            banner_area,
        );
        area = Rect {
            y: area.y + height,
            height: area.height - height,
            ..area
        };
    }

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(GLOBAL_BORDER));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    if app.generation().image().is_none() {
        let lines = vec![
            Line::from(Span::styled(
                "Your image will appear here",
                Style::default().fg(HEADER_TEXT).add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                "Describe what you want to color!",
                Style::default().fg(HEADER_TEXT).add_modifier(Modifier::DIM),
            )),
        ];
        let top = inner.height.saturating_sub(2) / 2;
        let placeholder = Rect {
            y: inner.y + top,
            height: inner.height - top,
            ..inner
        };
        frame.render_widget(
            Paragraph::new(lines).alignment(Alignment::Center),
            placeholder,
        );
        return;
    }

    // Last line is the share hint.
    let hint_height = 1.min(inner.height);
    let picture = Rect {
        height: inner.height - hint_height,
        ..inner
    };
    let hint = Rect {
        y: inner.y + picture.height,
        height: hint_height,
        ..inner
    };

    match app.preview() {
        Some(preview) => frame.render_widget(preview, picture),
        None => {
            let source_len = app.image_source().map(|src| src.len()).unwrap_or(0);
            frame.render_widget(
                Paragraph::new(vec![
                    Line::from("Preview unavailable in this terminal."),
                    Line::from(format!("Image received ({} bytes of data URL).", source_len)),
                ])
                .alignment(Alignment::Center)
                .style(Style::default().fg(HEADER_TEXT).add_modifier(Modifier::DIM)),
                picture,
            );
        }
    }

    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(
            "⇪ Ctrl+S: Share",
            Style::default().fg(STATUS_OK).add_modifier(Modifier::BOLD),
        )))
        .alignment(Alignment::Center),
        hint,
    );
}

fn footer_hints(app: &App) -> &'static str {
    if app.share_dialog().is_visible() {
        "Up/Down: Move │ Enter: Share │ Esc: Cancel"
    } else if app.can_share() {
        "Enter: Generate │ Ctrl+S: Share │ Ctrl+U: Clear │ Ctrl+Q: Quit"
    } else {
        "Enter: Generate │ Ctrl+U: Clear │ Ctrl+Q: Quit"
    }
}

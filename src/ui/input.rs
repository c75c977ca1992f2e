use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::ui::app::App;

pub fn handle_key(app: &mut App, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    if is_ctrl_char(key, 'q') || is_ctrl_char(key, 'c') {
        app.request_quit();
        return;
    }

    if app.share_dialog().is_visible() {
        match key.code {
            KeyCode::Esc => app.cancel_share(),
            KeyCode::Up => app.move_share_selection(true),
            KeyCode::Down | KeyCode::Tab => app.move_share_selection(false),
            KeyCode::Enter => app.confirm_share(),
            _ => {}
        }
        return;
    }

    if is_ctrl_char(key, 's') {
        app.share();
        return;
    }
    if is_ctrl_char(key, 'u') {
        app.edit_prompt(|prompt| prompt.clear());
        return;
    }

    match key.code {
        KeyCode::Enter => {
            // Mirrors a disabled button: nothing happens while loading or empty.
            if app.can_submit() {
                app.submit();
            }
        }
        KeyCode::Char(ch) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.edit_prompt(|prompt| prompt.insert_char(ch));
        }
        KeyCode::Backspace => app.edit_prompt(|prompt| prompt.backspace()),
        KeyCode::Delete => app.edit_prompt(|prompt| prompt.delete()),
        KeyCode::Left => app.edit_prompt(|prompt| prompt.move_left()),
        KeyCode::Right => app.edit_prompt(|prompt| prompt.move_right()),
        KeyCode::Home => app.edit_prompt(|prompt| prompt.home()),
        KeyCode::End => app.edit_prompt(|prompt| prompt.end()),
        _ => {}
    }
}

fn is_ctrl_char(key: KeyEvent, needle: char) -> bool {
    matches!(key.code, KeyCode::Char(ch) if ch.eq_ignore_ascii_case(&needle))
        && key.modifiers.contains(KeyModifiers::CONTROL)
}

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::app::{App, AppMode};
use crate::browser::menu::Direction;
use crate::browser::Press;

/// Handle a key event.
pub fn handle_key_event(app: &mut App, key: KeyEvent) {
    if key.kind == KeyEventKind::Release {
        return;
    }
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        app.quit();
        return;
    }
    match app.mode {
        AppMode::Normal => handle_normal_mode(app, key),
        AppMode::Rename => handle_rename_mode(app, key),
    }
}

fn handle_normal_mode(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('q') => app.quit(),
        KeyCode::Up | KeyCode::Char('k') => app.move_cursor(Direction::Up),
        KeyCode::Down | KeyCode::Char('j') => app.move_cursor(Direction::Down),
        KeyCode::Left | KeyCode::Char('h') => app.previous_tab(),
        KeyCode::Right | KeyCode::Char('l') => app.next_tab(),
        KeyCode::Enter => app.confirm(Press::Short),
        KeyCode::Char(' ') | KeyCode::Char('m') => app.confirm(Press::Long),
        KeyCode::Esc | KeyCode::Backspace => app.back(),
        _ => {}
    }
}

fn handle_rename_mode(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Enter => app.submit_rename(),
        KeyCode::Esc => app.cancel_rename(),
        KeyCode::Backspace => app.dialog_delete_char(),
        KeyCode::Left => app.dialog_move_cursor_left(),
        KeyCode::Right => app.dialog_move_cursor_right(),
        KeyCode::Home => app.dialog_cursor_home(),
        KeyCode::End => app.dialog_cursor_end(),
        KeyCode::Char(c) => app.dialog_input_char(c),
        _ => {}
    }
}

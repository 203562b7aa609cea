use ratatui::{
    layout::{Constraint, Layout},
    style::{Color, Style},
    widgets::{Block, Borders},
    Frame,
};

use crate::app::App;
use crate::browser::viewport::VISIBLE_ROWS;
use crate::components::dialog::DialogWidget;
use crate::components::file_list::FileListWidget;
use crate::components::file_menu::FileMenuWidget;
use crate::components::status_bar::StatusBarWidget;
use crate::components::tab_bar::TabBarWidget;

/// Render the application UI.
pub fn render(app: &App, frame: &mut Frame) {
    let [tabs_area, list_area, _, status_area] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(VISIBLE_ROWS as u16 + 2),
        Constraint::Min(0),
        Constraint::Length(1),
    ])
    .areas(frame.area());

    let browser = &app.browser;
    frame.render_widget(TabBarWidget::new(browser.tab()), tabs_area);

    let block = Block::default()
        .title(format!(" {} ", browser.tab().label()))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));
    frame.render_widget(FileListWidget::new(browser.listing()).block(block), list_area);
    frame.render_widget(FileMenuWidget::new(browser.menu()), list_area);

    frame.render_widget(status_bar(app), status_area);
    frame.render_widget(DialogWidget::new(&app.mode, &app.dialog_state), frame.area());
}

fn status_bar(app: &App) -> StatusBarWidget<'_> {
    let widget = StatusBarWidget::new(app.browser.path());
    match &app.status_message {
        Some((msg, _)) => widget.status_message(msg, msg.starts_with('⚠')),
        None => widget,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::tests::setup_app;
    use crate::app::AppMode;
    use crate::browser::Press;
    use crate::components::buffer_to_string;
    use ratatui::{backend::TestBackend, Terminal};

    fn draw(app: &App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(80, 12)).unwrap();
        terminal.draw(|frame| render(app, frame)).unwrap();
        buffer_to_string(terminal.backend().buffer())
    }

    #[test]
    fn renders_tabs_listing_and_path() {
        let (_dir, app) = setup_app();
        let content = draw(&app);
        assert!(content.contains("Favorites"));
        assert!(content.contains("card.nfc"));
        assert!(content.contains("hotel"));
        assert!(content.contains("/any/nfc"));
    }

    #[test]
    fn open_menu_is_drawn() {
        let (_dir, mut app) = setup_app();
        app.confirm(Press::Long);
        // a long press on a file is ignored, so make sure a folder is selected
        while !app.browser.menu().is_open() {
            app.browser.select_next();
            app.confirm(Press::Long);
        }
        assert!(draw(&app).contains("Run in app"));
    }

    #[test]
    fn rename_dialog_is_drawn() {
        let (_dir, mut app) = setup_app();
        app.mode = AppMode::Rename;
        assert!(draw(&app).contains("Rename"));
    }
}

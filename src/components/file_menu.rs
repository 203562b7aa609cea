use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Widget},
};

use crate::browser::menu::{MenuItem, MenuState, MENU_ITEM_COUNT};

use super::dialog::centered_rect;

/// Popup listing the file menu items, drawn over the list while open.
pub struct FileMenuWidget {
    state: MenuState,
}

impl FileMenuWidget {
    pub fn new(state: MenuState) -> Self {
        Self { state }
    }
}

impl Widget for FileMenuWidget {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let MenuState::Open { index, favorite } = self.state else {
            return;
        };

        let width = 18.min(area.width);
        let height = (MENU_ITEM_COUNT as u16 + 2).min(area.height);
        let rect = centered_rect(width, height, area);

        Clear.render(rect, buf);
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan));
        let inner = block.inner(rect);
        block.render(rect, buf);

        for (i, item) in MenuItem::ALL.iter().enumerate() {
            let y = inner.y + i as u16;
            if y >= inner.y + inner.height {
                break;
            }
            let (marker, style) = if i == index {
                (
                    "> ",
                    Style::default()
                        .fg(Color::Black)
                        .bg(Color::Cyan)
                        .add_modifier(Modifier::BOLD),
                )
            } else {
                ("  ", Style::default().fg(Color::White))
            };
            let text = format!("{}{}", marker, item.label(favorite));
            let line = Line::from(Span::styled(text, style));
            buf.set_line(inner.x, y, &line, inner.width);
        }
    }
}

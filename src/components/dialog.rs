use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Padding, Widget},
};

use crate::app::{AppMode, DialogState};

/// Dialog widget that renders a centered modal overlay.
pub struct DialogWidget<'a> {
    mode: &'a AppMode,
    dialog_state: &'a DialogState,
}

impl<'a> DialogWidget<'a> {
    pub fn new(mode: &'a AppMode, dialog_state: &'a DialogState) -> Self {
        Self { mode, dialog_state }
    }
}

/// Calculate a centered rectangle within the given area.
pub fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let x = area.x + area.width.saturating_sub(width) / 2;
    let y = area.y + area.height.saturating_sub(height) / 2;
    let w = width.min(area.width);
    let h = height.min(area.height);
    Rect::new(x, y, w, h)
}

impl<'a> Widget for DialogWidget<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        match self.mode {
            AppMode::Rename => render_input_dialog("Rename", self.dialog_state, area, buf),
            AppMode::Normal => {}
        }
    }
}

fn render_input_dialog(title: &str, state: &DialogState, area: Rect, buf: &mut Buffer) {
    let dialog_width = 50.min(area.width.saturating_sub(4));
    let dialog_height = 5;
    let rect = centered_rect(dialog_width, dialog_height, area);

    Clear.render(rect, buf);

    let block = Block::default()
        .title(format!(" {} ", title))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan))
        .padding(Padding::horizontal(1));

    let inner = block.inner(rect);
    block.render(rect, buf);

    if inner.height == 0 || inner.width == 0 {
        return;
    }

    let input = &state.input;
    let cursor_pos = state.cursor_position.min(input.len());
    let max_width = inner.width as usize;

    let before = &input[..cursor_pos];
    let rest = &input[cursor_pos..];
    let (cursor_char, after) = match rest.chars().next() {
        Some(c) => rest.split_at(c.len_utf8()),
        None => (" ", ""),
    };

    // keep the cursor on screen by dropping characters from the left
    let budget = max_width.saturating_sub(2);
    let before_chars = before.chars().count();
    let before_display = if before_chars > budget {
        let skip = before_chars - budget;
        let start = before
            .char_indices()
            .nth(skip)
            .map(|(i, _)| i)
            .unwrap_or(before.len());
        &before[start..]
    } else {
        before
    };

    let input_style = Style::default().fg(Color::White);
    let cursor_style = Style::default()
        .bg(Color::White)
        .fg(Color::Black)
        .add_modifier(Modifier::BOLD);

    let line = Line::from(vec![
        Span::styled(before_display, input_style),
        Span::styled(cursor_char, cursor_style),
        Span::styled(after, input_style),
    ]);
    buf.set_line(inner.x, inner.y + inner.height / 2, &line, inner.width);

    let hint = Line::from(Span::styled(
        "Enter:save  Esc:cancel",
        Style::default()
            .fg(Color::DarkGray)
            .add_modifier(Modifier::DIM),
    ));
    buf.set_line(inner.x, inner.y + inner.height - 1, &hint, inner.width);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::buffer_to_string;

    #[test]
    fn rename_dialog_renders() {
        let mode = AppMode::Rename;
        let state = DialogState {
            input: "card".to_string(),
            cursor_position: 4,
        };
        let area = Rect::new(0, 0, 80, 24);
        let mut buf = Buffer::empty(area);
        DialogWidget::new(&mode, &state).render(area, &mut buf);

        let content = buffer_to_string(&buf);
        assert!(content.contains("Rename"));
        assert!(content.contains("card"));
    }

    #[test]
    fn cursor_inside_multibyte_input() {
        let mode = AppMode::Rename;
        let state = DialogState {
            input: "clé".to_string(),
            cursor_position: 2,
        };
        let area = Rect::new(0, 0, 80, 24);
        let mut buf = Buffer::empty(area);
        DialogWidget::new(&mode, &state).render(area, &mut buf);
        assert!(buffer_to_string(&buf).contains("clé"));
    }

    #[test]
    fn long_input_keeps_cursor_visible() {
        let mode = AppMode::Rename;
        let input = "x".repeat(100) + "tail";
        let state = DialogState {
            cursor_position: input.len(),
            input,
        };
        let area = Rect::new(0, 0, 80, 24);
        let mut buf = Buffer::empty(area);
        DialogWidget::new(&mode, &state).render(area, &mut buf);
        assert!(buffer_to_string(&buf).contains("tail"));
    }

    #[test]
    fn normal_mode_is_noop() {
        let mode = AppMode::Normal;
        let state = DialogState::default();
        let area = Rect::new(0, 0, 80, 24);
        let mut buf = Buffer::empty(area);
        DialogWidget::new(&mode, &state).render(area, &mut buf);
        assert!(buffer_to_string(&buf).trim().is_empty());
    }

    #[test]
    fn centered_rect_clamps_to_area() {
        let area = Rect::new(0, 0, 10, 4);
        assert_eq!(centered_rect(20, 6, area), Rect::new(0, 0, 10, 4));
        assert_eq!(centered_rect(4, 2, area), Rect::new(3, 1, 4, 2));
    }
}

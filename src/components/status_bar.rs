use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Widget,
};

const KEY_HINTS: &str = " ↵:open  ␣:menu  esc:back  q:quit ";

/// Status bar widget showing the current path and key hints, or a status
/// message while one is pending.
pub struct StatusBarWidget<'a> {
    path_str: &'a str,
    status_message: Option<&'a str>,
    is_error: bool,
}

impl<'a> StatusBarWidget<'a> {
    pub fn new(path_str: &'a str) -> Self {
        Self {
            path_str,
            status_message: None,
            is_error: false,
        }
    }

    pub fn status_message(mut self, msg: &'a str, is_error: bool) -> Self {
        self.status_message = Some(msg);
        self.is_error = is_error;
        self
    }
}

/// Keep the last `budget` characters of `path`, marking the cut with "...".
fn truncate_left(path: &str, budget: usize) -> String {
    let len = path.chars().count();
    if len <= budget {
        return path.to_string();
    }
    if budget <= 3 {
        return path.chars().take(budget).collect();
    }
    let tail: String = path.chars().skip(len - (budget - 3)).collect();
    format!("...{}", tail)
}

impl<'a> Widget for StatusBarWidget<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height == 0 || area.width == 0 {
            return;
        }

        let width = area.width as usize;

        if let Some(msg) = self.status_message {
            let style = if self.is_error {
                Style::default().bg(Color::Red).fg(Color::White)
            } else {
                Style::default().fg(Color::Green)
            };
            let display: String = msg.chars().take(width).collect();
            let line = Line::from(Span::styled(format!("{:<width$}", display), style));
            buf.set_line(area.x, area.y, &line, area.width);
            return;
        }

        let hints_len = KEY_HINTS.chars().count();
        let path_budget = width.saturating_sub(hints_len).saturating_sub(1);
        let path_display = truncate_left(self.path_str, path_budget);
        let gap = width
            .saturating_sub(path_display.chars().count())
            .saturating_sub(hints_len);

        let line = Line::from(vec![
            Span::styled(path_display, Style::default().fg(Color::White)),
            Span::raw(" ".repeat(gap)),
            Span::styled(
                KEY_HINTS,
                Style::default()
                    .fg(Color::DarkGray)
                    .add_modifier(Modifier::DIM),
            ),
        ]);
        buf.set_line(area.x, area.y, &line, area.width);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::buffer_to_string;

    fn render(widget: StatusBarWidget, width: u16) -> Buffer {
        let area = Rect::new(0, 0, width, 1);
        let mut buf = Buffer::empty(area);
        widget.render(area, &mut buf);
        buf
    }

    #[test]
    fn path_and_hints() {
        let buf = render(StatusBarWidget::new("/any/nfc/hotel"), 80);
        let content = buffer_to_string(&buf);
        assert!(content.contains("/any/nfc/hotel"));
        assert!(content.contains("q:quit"));
    }

    #[test]
    fn status_message_replaces_path() {
        let buf = render(StatusBarWidget::new("/any/nfc").status_message("Pinned", false), 80);
        let content = buffer_to_string(&buf);
        assert!(content.contains("Pinned"));
        assert!(!content.contains("/any/nfc"));
        assert_eq!(buf[(0, 0)].fg, Color::Green);
    }

    #[test]
    fn error_message_style() {
        let buf = render(
            StatusBarWidget::new("/any").status_message("⚠ disk full", true),
            40,
        );
        assert_eq!(buf[(0, 0)].bg, Color::Red);
    }

    #[test]
    fn long_path_truncated_from_left() {
        assert_eq!(truncate_left("/any/subghz/saved", 10), "...z/saved");
        assert_eq!(truncate_left("/any", 10), "/any");
        assert_eq!(truncate_left("/any/nfc", 2), "/a");
    }

    #[test]
    fn zero_area_does_not_panic() {
        let area = Rect::new(0, 0, 0, 0);
        let mut buf = Buffer::empty(area);
        StatusBarWidget::new("/any").render(area, &mut buf);
    }
}

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Tabs, Widget},
};

use crate::browser::tabs::Tab;

/// One-line header naming every tab, the active one highlighted.
pub struct TabBarWidget {
    active: Tab,
}

impl TabBarWidget {
    pub fn new(active: Tab) -> Self {
        Self { active }
    }
}

impl Widget for TabBarWidget {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let titles: Vec<Line> = Tab::ALL.iter().map(|tab| Line::from(tab.label())).collect();
        Tabs::new(titles)
            .select(self.active.index())
            .style(Style::default().fg(Color::DarkGray))
            .highlight_style(
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
            )
            .divider("|")
            .render(area, buf);
    }
}

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Widget},
};

use crate::browser::kind::FileKind;
use crate::browser::lister::Listing;
use crate::browser::viewport::VISIBLE_ROWS;

/// The visible window of a directory listing, starting at its scroll offset.
pub struct FileListWidget<'a> {
    listing: &'a Listing,
    block: Option<Block<'a>>,
}

impl<'a> FileListWidget<'a> {
    pub fn new(listing: &'a Listing) -> Self {
        Self {
            listing,
            block: None,
        }
    }

    pub fn block(mut self, block: Block<'a>) -> Self {
        self.block = Some(block);
        self
    }

    fn indicator(kind: FileKind) -> &'static str {
        match kind {
            FileKind::Folder => "[D] ",
            FileKind::Known(_) => "[*] ",
            FileKind::Unknown => "[ ] ",
        }
    }
}

impl<'a> Widget for FileListWidget<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let inner_area = match self.block {
            Some(block) => {
                let inner = block.inner(area);
                block.render(area, buf);
                inner
            }
            None => area,
        };

        if inner_area.height == 0 || inner_area.width == 0 {
            return;
        }

        if self.listing.is_empty() {
            let line = Line::from(Span::styled(
                "Empty",
                Style::default()
                    .fg(Color::DarkGray)
                    .add_modifier(Modifier::ITALIC),
            ));
            buf.set_line(inner_area.x, inner_area.y, &line, inner_area.width);
            return;
        }

        let rows = VISIBLE_ROWS.min(inner_area.height as usize);
        let selected = self.listing.selected_index;
        let visible = self
            .listing
            .entries()
            .iter()
            .enumerate()
            .skip(self.listing.scroll_offset)
            .take(rows);

        for (row, (idx, entry)) in visible.enumerate() {
            let style = if idx == selected {
                Style::default()
                    .bg(Color::DarkGray)
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD)
            } else {
                match entry.kind {
                    FileKind::Folder => Style::default()
                        .fg(Color::Blue)
                        .add_modifier(Modifier::BOLD),
                    FileKind::Known(_) => Style::default().fg(Color::White),
                    FileKind::Unknown => Style::default().fg(Color::Gray),
                }
            };
            let text = format!("{}{}", Self::indicator(entry.kind), entry.name);
            let line = Line::from(Span::styled(text, style));
            buf.set_line(
                inner_area.x,
                inner_area.y + row as u16,
                &line,
                inner_area.width,
            );
        }
    }
}

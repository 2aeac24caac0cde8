use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};

use super::{Component, ComponentContext};
use crate::ui::{UiFrame, safe_set_string};

/// Single-line window header with a centred title.
#[derive(Debug, Clone)]
pub struct TitleBar {
    title: String,
}

impl TitleBar {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
    }

    fn style(ctx: &ComponentContext) -> Style {
        if ctx.dragging() {
            Style::default()
                .bg(Color::Cyan)
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD)
        } else if ctx.focused() {
            Style::default()
                .bg(Color::Blue)
                .fg(Color::White)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().bg(Color::DarkGray).fg(Color::White)
        }
    }
}

impl Component for TitleBar {
    fn render(&mut self, frame: &mut UiFrame<'_>, area: Rect, ctx: &ComponentContext) {
        if area.width == 0 || area.height == 0 {
            return;
        }
        let style = Self::style(ctx);
        let buffer = frame.buffer_mut();
        let bounds = area.intersection(buffer.area);
        if bounds.width == 0 || bounds.height == 0 {
            return;
        }
        for y in bounds.y..bounds.y.saturating_add(bounds.height) {
            for x in bounds.x..bounds.x.saturating_add(bounds.width) {
                if let Some(cell) = buffer.cell_mut((x, y)) {
                    cell.set_symbol(" ");
                    cell.set_style(style);
                }
            }
        }

        let title_len = self.title.chars().count() as u16;
        let start_x = if title_len < bounds.width {
            bounds.x + (bounds.width - title_len) / 2
        } else {
            bounds.x
        };
        let title_y = bounds.y + bounds.height.saturating_sub(1) / 2;
        safe_set_string(buffer, bounds, start_x, title_y, &self.title, style);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::buffer::Buffer;

    fn row_text(buf: &Buffer, y: u16, width: u16) -> String {
        (0..width)
            .filter_map(|x| buf.cell((x, y)).map(|c| c.symbol().to_string()))
            .collect()
    }

    #[test]
    fn title_is_centred() {
        let area = Rect {
            x: 0,
            y: 0,
            width: 10,
            height: 1,
        };
        let mut buf = Buffer::empty(area);
        {
            let mut frame = UiFrame::from_parts(area, &mut buf);
            TitleBar::new("ab").render(&mut frame, area, &ComponentContext::default());
        }
        assert_eq!(row_text(&buf, 0, 10), "    ab    ");
    }

    #[test]
    fn long_title_is_truncated() {
        let area = Rect {
            x: 0,
            y: 0,
            width: 4,
            height: 1,
        };
        let mut buf = Buffer::empty(area);
        {
            let mut frame = UiFrame::from_parts(area, &mut buf);
            TitleBar::new("abcdefgh").render(&mut frame, area, &ComponentContext::new(true));
        }
        assert_eq!(row_text(&buf, 0, 4), "abcd");
    }
}

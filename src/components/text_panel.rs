use crossterm::event::{Event, MouseEventKind};
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Text};
use ratatui::widgets::{Block, Clear, Paragraph, Wrap};

use super::{Component, ComponentContext};
use crate::ui::UiFrame;

/// Bordered block of wrapped text that scrolls with the mouse wheel.
#[derive(Debug, Clone)]
pub struct TextPanel {
    text: Text<'static>,
    scroll: u16,
}

impl TextPanel {
    pub fn new<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let lines: Vec<Line<'static>> = lines.into_iter().map(|l| Line::from(l.into())).collect();
        Self {
            text: Text::from(lines),
            scroll: 0,
        }
    }

    pub fn scroll(&self) -> u16 {
        self.scroll
    }

    fn max_scroll(&self) -> u16 {
        self.text.lines.len().saturating_sub(1) as u16
    }
}

impl Component for TextPanel {
    fn render(&mut self, frame: &mut UiFrame<'_>, area: Rect, ctx: &ComponentContext) {
        if area.width == 0 || area.height == 0 {
            return;
        }
        let border = if ctx.modal() {
            Style::default().fg(Color::Yellow)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        frame.render_widget(Clear, area);
        let paragraph = Paragraph::new(self.text.clone())
            .block(Block::bordered().border_style(border))
            .wrap(Wrap { trim: false })
            .scroll((self.scroll, 0));
        frame.render_widget(paragraph, area);
    }

    fn handle_event(&mut self, event: &Event, _ctx: &ComponentContext) -> bool {
        let Event::Mouse(mouse) = event else {
            return false;
        };
        match mouse.kind {
            MouseEventKind::ScrollDown => {
                self.scroll = self.scroll.saturating_add(1).min(self.max_scroll());
                true
            }
            MouseEventKind::ScrollUp => {
                self.scroll = self.scroll.saturating_sub(1);
                true
            }
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyModifiers, MouseEvent};

    fn scroll(kind: MouseEventKind) -> Event {
        Event::Mouse(MouseEvent {
            kind,
            column: 0,
            row: 0,
            modifiers: KeyModifiers::NONE,
        })
    }

    #[test]
    fn wheel_scroll_is_bounded() {
        let mut panel = TextPanel::new(["a", "b", "c"]);
        let ctx = ComponentContext::default();
        assert!(panel.handle_event(&scroll(MouseEventKind::ScrollUp), &ctx));
        assert_eq!(panel.scroll(), 0);
        for _ in 0..5 {
            panel.handle_event(&scroll(MouseEventKind::ScrollDown), &ctx);
        }
        assert_eq!(panel.scroll(), 2);
    }

    #[test]
    fn renders_text_inside_border() {
        let area = Rect {
            x: 0,
            y: 0,
            width: 8,
            height: 3,
        };
        let mut buf = ratatui::buffer::Buffer::empty(area);
        {
            let mut frame = UiFrame::from_parts(area, &mut buf);
            TextPanel::new(["hi"]).render(&mut frame, area, &ComponentContext::default());
        }
        assert_eq!(buf.cell((1, 1)).map(|c| c.symbol()), Some("h"));
        assert_eq!(buf.cell((0, 0)).map(|c| c.symbol()), Some("┌"));
    }
}

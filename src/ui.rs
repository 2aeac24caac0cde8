//! UiFrame: a thin wrapper around `ratatui::Frame` that clamps drawing to the
//! visible area, plus the deferred render queue windows use to draw on top of
//! everything else once all windows have rendered.
//!
//! Floating windows routinely hang partially off screen. Writing out-of-bounds
//! into the underlying `Buffer` can panic, so every draw call is clipped to the
//! frame area here instead of at each call site.
use ratatui::Frame;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::widgets::Widget;

/// Wrapper around `ratatui::Frame` that clamps drawing to the visible area.
pub struct UiFrame<'a> {
    area: Rect,
    buffer: &'a mut Buffer,
}

impl<'a> UiFrame<'a> {
    pub fn new(frame: &'a mut Frame<'_>) -> Self {
        let area = frame.area();
        let buffer = frame.buffer_mut();
        Self { area, buffer }
    }

    /// Construct a `UiFrame` directly from an area and buffer.
    ///
    /// Used for offscreen rendering, most notably in tests.
    pub fn from_parts(area: Rect, buffer: &'a mut Buffer) -> Self {
        Self { area, buffer }
    }

    pub fn area(&self) -> Rect {
        self.area
    }

    pub fn buffer_mut(&mut self) -> &mut Buffer {
        self.buffer
    }

    fn clip_rect(&self, rect: Rect) -> Option<Rect> {
        let clipped = rect.intersection(self.area);
        if clipped.width == 0 || clipped.height == 0 {
            None
        } else {
            Some(clipped)
        }
    }

    pub fn render_widget<W>(&mut self, widget: W, area: Rect)
    where
        W: Widget,
    {
        if let Some(clipped) = self.clip_rect(area) {
            widget.render(clipped, self.buffer);
        }
    }
}

type DeferredRender = Box<dyn FnOnce(&mut UiFrame<'_>)>;

/// Draw calls queued during a frame and flushed after every window rendered.
#[derive(Default)]
pub struct DeferredRenders {
    queue: Vec<DeferredRender>,
}

impl DeferredRenders {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push<F>(&mut self, render: F)
    where
        F: FnOnce(&mut UiFrame<'_>) + 'static,
    {
        self.queue.push(Box::new(render));
    }

    pub fn len(&self) -> usize {
        self.queue.len()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    /// Run queued renders in push order and empty the queue.
    pub fn flush(&mut self, frame: &mut UiFrame<'_>) {
        for render in self.queue.drain(..) {
            render(frame);
        }
    }
}

impl std::fmt::Debug for DeferredRenders {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DeferredRenders")
            .field("queued", &self.queue.len())
            .finish()
    }
}

pub(crate) fn safe_set_string(
    buffer: &mut Buffer,
    bounds: Rect,
    x: u16,
    y: u16,
    text: &str,
    style: Style,
) {
    if bounds.width == 0 || bounds.height == 0 {
        return;
    }
    let max_x = bounds.x.saturating_add(bounds.width);
    let max_y = bounds.y.saturating_add(bounds.height);
    if x < bounds.x || x >= max_x || y < bounds.y || y >= max_y {
        return;
    }
    let available = max_x.saturating_sub(x);
    if available == 0 {
        return;
    }
    let text = truncate_to_width(text, available as usize);
    buffer.set_string(x, y, text, style);
}

pub(crate) fn truncate_to_width(value: &str, width: usize) -> String {
    if value.chars().count() <= width {
        return value.to_string();
    }
    value.chars().take(width).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::buffer::Buffer;
    use ratatui::layout::Rect;
    use ratatui::style::Style;

    #[test]
    fn truncate_to_width_short_and_long() {
        assert_eq!(truncate_to_width("abc", 5), "abc");
        assert_eq!(truncate_to_width("abcdef", 3), "abc");
    }

    #[test]
    fn safe_set_string_writes_within_bounds() {
        let bounds = Rect {
            x: 0,
            y: 0,
            width: 10,
            height: 2,
        };
        let mut buf = Buffer::empty(bounds);
        safe_set_string(&mut buf, bounds, 1, 0, "hello", Style::default());
        let cell = buf.cell_mut((1, 0)).expect("cell present");
        assert!(cell.symbol().starts_with('h'));

        // outside bounds should be ignored (no panic)
        safe_set_string(&mut buf, bounds, 100, 0, "x", Style::default());
    }

    #[test]
    fn render_widget_clips_to_frame_area() {
        let area = Rect {
            x: 0,
            y: 0,
            width: 5,
            height: 3,
        };
        let mut buf = Buffer::empty(area);
        let mut ui = UiFrame::from_parts(area, &mut buf);

        struct FillWidget;
        impl Widget for FillWidget {
            fn render(self, area: Rect, buf: &mut Buffer) {
                for y in area.y..area.y.saturating_add(area.height) {
                    for x in area.x..area.x.saturating_add(area.width) {
                        if let Some(cell) = buf.cell_mut((x, y)) {
                            cell.set_symbol("A");
                        }
                    }
                }
            }
        }

        // Request an area that partially lies outside the right edge.
        ui.render_widget(
            FillWidget,
            Rect {
                x: 3,
                y: 1,
                width: 5,
                height: 2,
            },
        );

        let inside = buf.cell_mut((3, 1)).expect("cell present");
        assert!(inside.symbol().starts_with('A'));
        let outside = buf.cell_mut((2, 1)).expect("cell present");
        assert!(!outside.symbol().starts_with('A'));
    }

    #[test]
    fn deferred_renders_flush_in_order_and_empty() {
        let area = Rect {
            x: 0,
            y: 0,
            width: 3,
            height: 1,
        };
        let mut buf = Buffer::empty(area);
        let mut deferred = DeferredRenders::new();
        deferred.push(|frame| {
            if let Some(cell) = frame.buffer_mut().cell_mut((0, 0)) {
                cell.set_symbol("a");
            }
        });
        deferred.push(|frame| {
            if let Some(cell) = frame.buffer_mut().cell_mut((0, 0)) {
                cell.set_symbol("b");
            }
        });
        assert_eq!(deferred.len(), 2);
        {
            let mut ui = UiFrame::from_parts(area, &mut buf);
            deferred.flush(&mut ui);
        }
        assert!(deferred.is_empty());
        assert_eq!(buf.cell((0, 0)).map(|c| c.symbol()), Some("b"));
    }
}

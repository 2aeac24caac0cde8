//! Row-stack container used to compose window chrome and contents.
//!
//! A `Container` owns a rectangle and a single column of rows. Rows either
//! have a fixed height or stretch to share whatever height remains. Layout is
//! deferred: moving the container or requesting a relayout only marks it
//! dirty, and the next render (or row query) performs one layout pass.

use std::cell::Cell;
use std::rc::Rc;

use crossterm::event::Event;
use ratatui::widgets::Clear;

use crate::components::{Component, ComponentContext};
use crate::geometry::{Point, Rectangle};
use crate::ui::UiFrame;

/// Per-row layout data. Rows without a fixed height stretch.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RowData {
    pub fixed_height: Option<u16>,
}

impl RowData {
    pub const fn fixed(height: u16) -> Self {
        Self {
            fixed_height: Some(height),
        }
    }

    pub const fn stretch() -> Self {
        Self { fixed_height: None }
    }
}

struct Row {
    component: Box<dyn Component>,
    data: RowData,
    rect: Rectangle,
}

pub struct Container {
    rect: Rc<Cell<Rectangle>>,
    rows: Vec<Row>,
    relayout_pending: bool,
    layout_passes: usize,
}

impl Default for Container {
    fn default() -> Self {
        Self::new()
    }
}

impl Container {
    pub fn new() -> Self {
        Self {
            rect: Rc::new(Cell::new(Rectangle::default())),
            rows: Vec::new(),
            relayout_pending: true,
            layout_passes: 0,
        }
    }

    pub fn add_row(&mut self, component: Box<dyn Component>, data: RowData) {
        self.rows.push(Row {
            component,
            data,
            rect: Rectangle::default(),
        });
        self.relayout_pending = true;
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn rect(&self) -> Rectangle {
        self.rect.get()
    }

    /// Shared handle to the live rectangle, for consumers that must observe
    /// the current geometry without holding the container.
    pub fn rect_handle(&self) -> Rc<Cell<Rectangle>> {
        Rc::clone(&self.rect)
    }

    pub fn set_location(&mut self, rect: Rectangle) {
        self.rect.set(rect);
        self.request_relayout();
    }

    pub fn request_relayout(&mut self) {
        self.relayout_pending = true;
    }

    pub fn relayout_pending(&self) -> bool {
        self.relayout_pending
    }

    /// Number of layout passes performed so far.
    pub fn layout_passes(&self) -> usize {
        self.layout_passes
    }

    pub fn row_rect(&mut self, index: usize) -> Option<Rectangle> {
        self.layout_if_needed();
        self.rows.get(index).map(|row| row.rect)
    }

    pub fn row_rects(&mut self) -> Vec<Rectangle> {
        self.layout_if_needed();
        self.rows.iter().map(|row| row.rect).collect()
    }

    fn layout_if_needed(&mut self) {
        if !self.relayout_pending {
            return;
        }
        let data: Vec<RowData> = self.rows.iter().map(|row| row.data).collect();
        let rects = stack_rows(self.rect.get(), &data);
        for (row, rect) in self.rows.iter_mut().zip(rects) {
            row.rect = rect;
        }
        self.relayout_pending = false;
        self.layout_passes += 1;
    }

    pub fn render(&mut self, frame: &mut UiFrame<'_>, ctx: &ComponentContext) {
        self.layout_if_needed();
        let bounds = frame.area();
        let Some(visible) = self.rect.get().visible(bounds) else {
            return;
        };
        frame.render_widget(Clear, visible);
        for row in &mut self.rows {
            if let Some(area) = row.rect.visible(bounds) {
                row.component.render(frame, area, ctx);
            }
        }
    }

    /// Mouse events go to the row under the pointer; other events are offered
    /// to each row in order until one consumes them.
    pub fn handle_event(&mut self, event: &Event, ctx: &ComponentContext) -> bool {
        self.layout_if_needed();
        if let Event::Mouse(mouse) = event {
            let point = Point::from_cell(mouse.column, mouse.row);
            return self
                .rows
                .iter_mut()
                .find(|row| row.rect.contains(point))
                .is_some_and(|row| row.component.handle_event(event, ctx));
        }
        self.rows
            .iter_mut()
            .any(|row| row.component.handle_event(event, ctx))
    }
}

/// Split `rect` into one full-width rectangle per row, top to bottom.
///
/// Fixed rows take their height (or whatever is left); stretch rows share the
/// remainder evenly, with any leftover cells going to the last stretch row.
pub fn stack_rows(rect: Rectangle, rows: &[RowData]) -> Vec<Rectangle> {
    let total = rect.height().max(0);
    let fixed: i32 = rows
        .iter()
        .filter_map(|row| row.fixed_height)
        .map(i32::from)
        .sum();
    let stretch_count = rows.iter().filter(|row| row.fixed_height.is_none()).count() as i32;
    let stretch_total = (total - fixed).max(0);
    let (share, leftover) = if stretch_count > 0 {
        (stretch_total / stretch_count, stretch_total % stretch_count)
    } else {
        (0, 0)
    };

    let mut y = rect.min().y;
    let bottom = rect.max().y;
    let mut stretch_seen = 0;
    rows.iter()
        .map(|row| {
            let wanted = match row.fixed_height {
                Some(height) => i32::from(height),
                None => {
                    stretch_seen += 1;
                    if stretch_seen == stretch_count {
                        share + leftover
                    } else {
                        share
                    }
                }
            };
            let height = wanted.min(bottom - y).max(0);
            let row_rect = Rectangle::new(rect.min().x, y, rect.max().x, y + height);
            y += height;
            row_rect
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::UiFrame;
    use ratatui::buffer::Buffer;
    use ratatui::layout::Rect;
    use std::cell::RefCell;

    struct Recorder {
        areas: Rc<RefCell<Vec<Rect>>>,
    }

    impl Component for Recorder {
        fn render(&mut self, _frame: &mut UiFrame<'_>, area: Rect, _ctx: &ComponentContext) {
            self.areas.borrow_mut().push(area);
        }
    }

    #[test]
    fn stack_rows_fixed_then_stretch() {
        let rects = stack_rows(
            Rectangle::new(2, 3, 12, 23),
            &[RowData::fixed(4), RowData::stretch()],
        );
        assert_eq!(rects[0], Rectangle::new(2, 3, 12, 7));
        assert_eq!(rects[1], Rectangle::new(2, 7, 12, 23));
    }

    #[test]
    fn stack_rows_single_stretch_fills_rect() {
        let rect = Rectangle::new(0, 0, 5, 9);
        assert_eq!(stack_rows(rect, &[RowData::stretch()]), vec![rect]);
    }

    #[test]
    fn stack_rows_fixed_row_is_cut_by_small_rect() {
        let rects = stack_rows(
            Rectangle::new(0, 0, 5, 2),
            &[RowData::fixed(4), RowData::stretch()],
        );
        assert_eq!(rects[0].height(), 2);
        assert_eq!(rects[1].height(), 0);
    }

    #[test]
    fn stack_rows_leftover_goes_to_last_stretch() {
        let rects = stack_rows(
            Rectangle::new(0, 0, 1, 7),
            &[RowData::stretch(), RowData::stretch()],
        );
        assert_eq!(rects[0].height(), 3);
        assert_eq!(rects[1].height(), 4);
    }

    #[test]
    fn relayout_requests_coalesce_into_one_pass() {
        let areas = Rc::new(RefCell::new(Vec::new()));
        let mut container = Container::new();
        container.add_row(
            Box::new(Recorder {
                areas: Rc::clone(&areas),
            }),
            RowData::stretch(),
        );
        container.set_location(Rectangle::new(0, 0, 4, 4));
        container.request_relayout();
        container.request_relayout();

        let area = Rect {
            x: 0,
            y: 0,
            width: 10,
            height: 10,
        };
        let mut buf = Buffer::empty(area);
        let mut frame = UiFrame::from_parts(area, &mut buf);
        container.render(&mut frame, &ComponentContext::default());
        assert_eq!(container.layout_passes(), 1);
        assert!(!container.relayout_pending());

        container.render(&mut frame, &ComponentContext::default());
        assert_eq!(container.layout_passes(), 1);
        assert_eq!(areas.borrow().len(), 2);
        assert_eq!(
            areas.borrow()[0],
            Rect {
                x: 0,
                y: 0,
                width: 4,
                height: 4
            }
        );
    }

    #[test]
    fn offscreen_rows_are_skipped() {
        let areas = Rc::new(RefCell::new(Vec::new()));
        let mut container = Container::new();
        container.add_row(
            Box::new(Recorder {
                areas: Rc::clone(&areas),
            }),
            RowData::fixed(2),
        );
        container.set_location(Rectangle::new(-10, -10, -2, -2));
        let area = Rect {
            x: 0,
            y: 0,
            width: 10,
            height: 10,
        };
        let mut buf = Buffer::empty(area);
        let mut frame = UiFrame::from_parts(area, &mut buf);
        container.render(&mut frame, &ComponentContext::default());
        assert!(areas.borrow().is_empty());
    }
}

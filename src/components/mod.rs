use crossterm::event::Event;
use ratatui::layout::Rect;

use crate::ui::UiFrame;

pub mod text_panel;
pub mod title_bar;

pub use text_panel::TextPanel;
pub use title_bar::TitleBar;

pub use crate::component_context::ComponentContext;

/// A unit of window content laid out by a [`Container`](crate::layout::Container).
///
/// `area` is already clipped to the visible frame.
pub trait Component {
    fn render(&mut self, frame: &mut UiFrame<'_>, area: Rect, ctx: &ComponentContext);

    fn handle_event(&mut self, _event: &Event, _ctx: &ComponentContext) -> bool {
        false
    }
}

impl<T: Component + ?Sized> Component for Box<T> {
    fn render(&mut self, frame: &mut UiFrame<'_>, area: Rect, ctx: &ComponentContext) {
        (**self).render(frame, area, ctx)
    }

    fn handle_event(&mut self, event: &Event, ctx: &ComponentContext) -> bool {
        (**self).handle_event(event, ctx)
    }
}

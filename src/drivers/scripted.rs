use std::collections::VecDeque;
use std::io;
use std::time::Duration;

use crossterm::event::Event;

use super::InputDriver;

/// Replays a fixed list of events, then reports no further input.
///
/// Drives the event loop offscreen, for tests and headless runs.
#[derive(Debug, Default)]
pub struct ScriptedInputDriver {
    events: VecDeque<Event>,
}

impl ScriptedInputDriver {
    pub fn new<I>(events: I) -> Self
    where
        I: IntoIterator<Item = Event>,
    {
        Self {
            events: events.into_iter().collect(),
        }
    }

    pub fn push(&mut self, event: Event) {
        self.events.push_back(event);
    }

    pub fn remaining(&self) -> usize {
        self.events.len()
    }
}

impl InputDriver for ScriptedInputDriver {
    fn poll(&mut self, _timeout: Duration) -> io::Result<bool> {
        Ok(!self.events.is_empty())
    }

    fn read(&mut self) -> io::Result<Event> {
        self.events
            .pop_front()
            .ok_or_else(|| io::Error::new(io::ErrorKind::UnexpectedEof, "script exhausted"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    #[test]
    fn replays_in_order_then_runs_dry() {
        let mut d = ScriptedInputDriver::new([
            Event::Key(KeyEvent::new(KeyCode::Char('a'), KeyModifiers::NONE)),
            Event::FocusGained,
        ]);
        assert!(d.poll(Duration::from_millis(0)).unwrap());
        assert!(matches!(d.read().unwrap(), Event::Key(k) if k.code == KeyCode::Char('a')));
        assert!(matches!(d.read().unwrap(), Event::FocusGained));
        assert!(!d.poll(Duration::from_millis(0)).unwrap());
        assert_eq!(d.read().unwrap_err().kind(), io::ErrorKind::UnexpectedEof);
    }

    #[test]
    fn blanket_impl_for_mut_ref_works() {
        let mut d = ScriptedInputDriver::default();
        d.push(Event::FocusLost);
        let mut by_ref = &mut d;
        assert!(InputDriver::poll(&mut by_ref, Duration::from_millis(0)).unwrap());
        assert!(matches!(InputDriver::read(&mut by_ref).unwrap(), Event::FocusLost));
        assert_eq!(d.remaining(), 0);
    }
}

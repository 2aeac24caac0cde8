use std::io;
use std::time::Duration;

use crossterm::event::Event;

use crate::drivers::InputDriver;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlFlow {
    Continue,
    Quit,
}

/// Frame-driven loop: polls the input driver and hands each event, plus one
/// `None` tick per frame, to a handler.
///
/// Windows sample the pointer once per frame, so the handler is expected to
/// render on the `None` tick and only route input on `Some(event)`.
pub struct EventLoop<D> {
    driver: D,
    poll_interval: Duration,
}

impl<D: InputDriver> EventLoop<D> {
    pub fn new(driver: D, poll_interval: Duration) -> Self {
        Self {
            driver,
            poll_interval,
        }
    }

    /// Frame interval for `fps` frames per second.
    pub fn interval_for_fps(fps: u32) -> Duration {
        Duration::from_secs(1) / fps.max(1)
    }

    pub fn poll(&mut self) -> io::Result<Option<Event>> {
        if self.driver.poll(self.poll_interval)? {
            Ok(Some(self.driver.read()?))
        } else {
            Ok(None)
        }
    }

    pub fn driver(&mut self) -> &mut D {
        &mut self.driver
    }

    /// Runs until the handler returns [`ControlFlow::Quit`].
    ///
    /// The handler is called with `None` once per iteration (the frame tick)
    /// and with `Some(event)` for every pending input event.
    pub fn run<F>(&mut self, mut handler: F) -> io::Result<()>
    where
        F: FnMut(&mut D, Option<Event>) -> io::Result<ControlFlow>,
    {
        loop {
            if let ControlFlow::Quit = handler(&mut self.driver, None)? {
                break;
            }

            if self.driver.poll(self.poll_interval)? {
                // Drain bursts (drags, wheel) so the frame tick does not lag
                // behind the input stream.
                loop {
                    let event = self.driver.read()?;
                    if let ControlFlow::Quit = handler(&mut self.driver, Some(event))? {
                        return Ok(());
                    }
                    if !self.driver.poll(Duration::from_millis(0))? {
                        break;
                    }
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::drivers::scripted::ScriptedInputDriver;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    fn key(c: char) -> Event {
        Event::Key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE))
    }

    #[test]
    fn drains_pending_events_between_ticks() {
        let driver = ScriptedInputDriver::new([key('a'), key('b'), key('q')]);
        let mut event_loop = EventLoop::new(driver, Duration::from_millis(0));
        let mut seen = Vec::new();
        let mut ticks = 0;
        event_loop
            .run(|_, event| {
                match event {
                    None => ticks += 1,
                    Some(Event::Key(k)) if k.code == KeyCode::Char('q') => {
                        return Ok(ControlFlow::Quit);
                    }
                    Some(event) => seen.push(event),
                }
                Ok(ControlFlow::Continue)
            })
            .unwrap();
        assert_eq!(ticks, 1);
        assert_eq!(seen, vec![key('a'), key('b')]);
    }

    #[test]
    fn interval_for_fps_never_divides_by_zero() {
        assert_eq!(
            EventLoop::<ScriptedInputDriver>::interval_for_fps(0),
            Duration::from_secs(1)
        );
        assert_eq!(
            EventLoop::<ScriptedInputDriver>::interval_for_fps(50),
            Duration::from_millis(20)
        );
    }
}

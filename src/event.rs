use crossterm::event::{Event as CrosstermEvent, EventStream, KeyEvent, KeyEventKind};
use futures::StreamExt;
use std::time::Duration;
use tokio::time::{Interval, interval};

#[derive(Debug)]
pub enum Event {
    Key(KeyEvent),
    Resize(u16, u16),
    Tick,
}

/// Multiplexes terminal input with a fixed-rate tick used to animate the
/// busy indicator. Key repeats and releases are filtered out.
pub struct EventHandler {
    stream: EventStream,
    tick: Interval,
}

impl EventHandler {
    pub fn new(tick_rate: Duration) -> Self {
        Self {
            stream: EventStream::new(),
            tick: interval(tick_rate),
        }
    }

    pub async fn next(&mut self) -> Option<Event> {
        loop {
            tokio::select! {
                _ = self.tick.tick() => return Some(Event::Tick),
                maybe = self.stream.next() => match maybe {
                    Some(Ok(CrosstermEvent::Key(key))) if key.kind == KeyEventKind::Press => {
                        return Some(Event::Key(key));
                    }
                    Some(Ok(CrosstermEvent::Resize(width, height))) => {
                        return Some(Event::Resize(width, height));
                    }
                    Some(Ok(_)) => continue,
                    Some(Err(_)) | None => return None,
                },
            }
        }
    }
}

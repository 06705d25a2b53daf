//! Delayed-event dispatcher
//!
//! Events posted during a frame are queued, not delivered immediately; the
//! frame driver drains the queue once per iteration, before the scheduler
//! runs. Callbacks are keyed by event value, so a `Quit` handler only sees
//! `Quit`.

use std::collections::{HashMap, VecDeque};

use crate::event::TitleEvent;

/// A callback invoked for each dispatched event it was installed against.
pub type EventCallback = Box<dyn FnMut(&TitleEvent)>;

/// FIFO queue of delayed events plus the installed callbacks.
pub struct EventDispatcher {
    pending: VecDeque<TitleEvent>,
    callbacks: HashMap<TitleEvent, Vec<EventCallback>>,
}

impl Default for EventDispatcher {
    fn default() -> Self {
        Self::new()
    }
}

impl EventDispatcher {
    pub fn new() -> Self {
        Self {
            pending: VecDeque::new(),
            callbacks: HashMap::new(),
        }
    }

    /// Install a callback for one event value. Multiple callbacks may be
    /// installed for the same event; they run in installation order.
    pub fn install(&mut self, event: TitleEvent, callback: EventCallback) {
        self.callbacks.entry(event).or_default().push(callback);
    }

    /// Queue an event for the next dispatch pass.
    pub fn post(&mut self, event: TitleEvent) {
        self.pending.push_back(event);
    }

    /// Drain the queue in FIFO order, invoking every callback installed
    /// for each event. Returns the number of callback invocations.
    pub fn dispatch(&mut self) -> usize {
        let mut delivered = 0;
        while let Some(event) = self.pending.pop_front() {
            match self.callbacks.get_mut(&event) {
                Some(callbacks) => {
                    for callback in callbacks.iter_mut() {
                        callback(&event);
                        delivered += 1;
                    }
                }
                None => log::debug!("no callback installed for {event:?}"),
            }
        }
        delivered
    }

    pub fn pending_count(&self) -> usize {
        self.pending.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::ExitFlag;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn test_dispatch_is_fifo() {
        let order = Rc::new(RefCell::new(Vec::new()));
        let mut dispatcher = EventDispatcher::new();
        for code in [7, 8] {
            let order = order.clone();
            dispatcher.install(
                TitleEvent::Custom(code),
                Box::new(move |event| order.borrow_mut().push(*event)),
            );
        }

        dispatcher.post(TitleEvent::Custom(8));
        dispatcher.post(TitleEvent::Custom(7));
        assert_eq!(dispatcher.dispatch(), 2);

        assert_eq!(
            *order.borrow(),
            [TitleEvent::Custom(8), TitleEvent::Custom(7)]
        );
    }

    #[test]
    fn test_dispatch_drains_queue() {
        let mut dispatcher = EventDispatcher::new();
        dispatcher.post(TitleEvent::Quit);
        assert_eq!(dispatcher.pending_count(), 1);

        dispatcher.dispatch();
        assert_eq!(dispatcher.pending_count(), 0);
        assert_eq!(dispatcher.dispatch(), 0);
    }

    #[test]
    fn test_unhandled_event_is_dropped() {
        let mut dispatcher = EventDispatcher::new();
        dispatcher.post(TitleEvent::Custom(42));
        assert_eq!(dispatcher.dispatch(), 0);
        assert_eq!(dispatcher.pending_count(), 0);
    }

    #[test]
    fn test_quit_callback_flips_exit_flag() {
        let exit = ExitFlag::new();
        let mut dispatcher = EventDispatcher::new();
        let on_quit = exit.clone();
        dispatcher.install(TitleEvent::Quit, Box::new(move |_| on_quit.request_exit()));

        dispatcher.post(TitleEvent::Quit);
        assert!(!exit.should_exit());
        dispatcher.dispatch();
        assert!(exit.should_exit());
    }
}

//! Change notification.
//!
//! Every committed mutation of the board, a space or a player emits a
//! [`BoardEvent`]. Listeners subscribe on the board and are called
//! synchronously, in subscription order, after the mutation has been
//! applied. There is no batching and no deferred delivery.
//!
//! ```
//! use std::cell::RefCell;
//! use std::rc::Rc;
//! use roborally::board::{Board, Phase};
//! use roborally::core::BoardEvent;
//!
//! let mut board = Board::new(8, 8, "basic");
//! let seen = Rc::new(RefCell::new(Vec::new()));
//! let sink = Rc::clone(&seen);
//! board.subscribe(move |event| sink.borrow_mut().push(event.clone()));
//!
//! board.set_phase(Phase::Programming);
//! assert_eq!(seen.borrow().as_slice(), &[BoardEvent::PhaseChanged(Phase::Programming)]);
//! ```

use serde::{Deserialize, Serialize};

use super::heading::Heading;
use super::player::PlayerId;
use super::position::Position;
use crate::board::Phase;
use crate::cards::FieldRef;

/// Something observable changed.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum BoardEvent {
    /// A player was registered.
    PlayerAdded(PlayerId),
    /// The current player changed.
    CurrentPlayerChanged(PlayerId),
    PhaseChanged(Phase),
    StepChanged(usize),
    StepModeChanged(bool),
    MovesChanged(u32),
    GameIdAssigned(u32),
    /// The occupant of a space changed.
    SpaceChanged(Position),
    HeadingChanged { player: PlayerId, heading: Heading },
    CheckpointReached { player: PlayerId, number: u32 },
    /// A card field's card or visibility changed.
    FieldChanged(FieldRef),
}

/// Handle returned by `subscribe`, used to unsubscribe.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SubscriptionId(pub u32);

impl std::fmt::Display for SubscriptionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Subscription({})", self.0)
    }
}

type Listener = Box<dyn FnMut(&BoardEvent)>;

/// Ordered set of listeners.
#[derive(Default)]
pub struct Observers {
    listeners: Vec<(SubscriptionId, Listener)>,
    next_id: u32,
}

impl Observers {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a listener. It is called after every subsequent event.
    pub fn subscribe(&mut self, listener: impl FnMut(&BoardEvent) + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// Remove a listener. Returns false if `id` was not subscribed.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(sub, _)| *sub != id);
        self.listeners.len() != before
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.listeners.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.listeners.is_empty()
    }

    /// Deliver `event` to every listener in subscription order.
    pub fn emit(&mut self, event: &BoardEvent) {
        for (_, listener) in &mut self.listeners {
            listener(event);
        }
    }
}

impl std::fmt::Debug for Observers {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Observers")
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn test_emit_in_subscription_order() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut observers = Observers::new();

        let first = Rc::clone(&log);
        observers.subscribe(move |_| first.borrow_mut().push("first"));
        let second = Rc::clone(&log);
        observers.subscribe(move |_| second.borrow_mut().push("second"));

        observers.emit(&BoardEvent::StepChanged(1));

        assert_eq!(*log.borrow(), vec!["first", "second"]);
    }

    #[test]
    fn test_unsubscribe() {
        let count = Rc::new(RefCell::new(0));
        let mut observers = Observers::new();

        let counter = Rc::clone(&count);
        let id = observers.subscribe(move |_| *counter.borrow_mut() += 1);

        observers.emit(&BoardEvent::MovesChanged(1));
        assert!(observers.unsubscribe(id));
        assert!(!observers.unsubscribe(id));
        observers.emit(&BoardEvent::MovesChanged(2));

        assert_eq!(*count.borrow(), 1);
        assert!(observers.is_empty());
    }
}

/// Notifications published by a `PlaybackController`.
///
/// Payloads are owned copies so subscribers never borrow controller state.
#[derive(Debug, Clone, PartialEq)]
pub enum PlayerEvent {
    /// A new track was loaded at `index`.
    TrackChanged { index: usize },
    /// The play/pause flag changed (or was re-asserted by a transport call).
    PlaybackChanged { playing: bool },
    ProgressChanged {
        current_time: f64,
        duration: Option<f64>,
    },
    /// The track at `index` played to its end; auto-advance follows.
    PlaybackEnded { index: usize },
}

pub type EventCallback = Box<dyn FnMut(&PlayerEvent) + Send + 'static>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

/// Subscriber list; callbacks run synchronously, in subscription order.
#[derive(Default)]
pub(super) struct EventBus {
    next_id: u64,
    subscribers: Vec<(SubscriptionId, EventCallback)>,
}

impl EventBus {
    pub(super) fn subscribe(&mut self, callback: EventCallback) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.subscribers.push((id, callback));
        id
    }

    pub(super) fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.subscribers.len();
        self.subscribers.retain(|(sid, _)| *sid != id);
        self.subscribers.len() != before
    }

    pub(super) fn emit(&mut self, event: &PlayerEvent) {
        for (_, callback) in self.subscribers.iter_mut() {
            callback(event);
        }
    }
}

use super::*;

/// What a subscribe call delivered to the new subscriber
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Replay {
    /// The stored value was delivered during registration
    Sent,
    /// A value was stored but deliberately withheld; the subscriber starts
    /// caught up and only hears about later stores
    Suppressed,
    /// The cell had no value yet, so there was nothing to deliver or withhold
    NothingStored,
}

/// A single observable value. Stores bump a revision counter and notify every
/// subscriber that has not yet acknowledged the new revision, synchronously
/// and in registration order. Subscribing replays the stored value (if any)
/// to the new subscriber; see `QuietCell` for the variant that doesn't.
pub struct StateCell<T> {
    value: Option<T>,
    revision: u64,
    subscribers: SubscriberList<T>,
}

impl<T> StateCell<T> {
    pub fn new() -> Self {
        Self {
            value: None,
            revision: REV_NEVER,
            subscribers: SubscriberList::new(),
        }
    }

    pub fn with_value(value: T) -> Self {
        Self {
            value: Some(value),
            revision: REV_NEVER + 1,
            subscribers: SubscriberList::new(),
        }
    }

    pub fn get(&self) -> Option<&T> {
        self.value.as_ref()
    }

    /// Monotonic, bumped once per store. REV_NEVER until the first store.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Stores a value and notifies subscribers that are behind, even when the
    /// new value compares equal to the old one.
    pub fn set(&mut self, value: T) {
        self.value = Some(value);
        self.revision += 1;
        if let Some(value) = &self.value {
            self.subscribers.dispatch(value, self.revision);
        }
    }

    /// Registers a subscriber under the given scope and immediately replays
    /// the stored value to it, if there is one.
    pub fn subscribe(
        &self,
        subscriber: &Arc<dyn Subscriber<T>>,
        scope: &Scope,
    ) -> CellResult<Replay> {
        self.subscribers.add(subscriber, scope)?;
        Ok(self.replay_to(subscriber))
    }

    pub fn unsubscribe(&self, subscriber: &Weak<dyn Subscriber<T>>) -> CellResult<()> {
        self.subscribers.remove(subscriber)?;
        Ok(())
    }

    /// Treats the subscriber as if it had already been delivered the current
    /// revision, without invoking it
    pub fn mark_caught_up(&self, subscriber: &Weak<dyn Subscriber<T>>) -> CellResult<()> {
        self.subscribers.mark_caught_up(subscriber, self.revision)
    }

    /// Registration without the replay, for the quiet subscribe path
    pub(super) fn register(
        &self,
        subscriber: &Arc<dyn Subscriber<T>>,
        scope: &Scope,
    ) -> CellResult<()> {
        self.subscribers.add(subscriber, scope)?;
        Ok(())
    }

    pub(super) fn replay_to(&self, subscriber: &Arc<dyn Subscriber<T>>) -> Replay {
        let value = match &self.value {
            Some(value) => value,
            None => return Replay::NothingStored,
        };
        // Acknowledge before invoking, same order as a normal dispatch
        self.subscribers
            .mark_caught_up(&Arc::downgrade(subscriber), self.revision)
            .or_log_error("failed to acknowledge replay");
        subscriber.notify(value);
        Replay::Sent
    }

    #[cfg(test)]
    pub fn break_catch_up(&self) {
        self.subscribers.break_catch_up();
    }
}

impl<T> Default for StateCell<T> {
    fn default() -> Self {
        Self::new()
    }
}

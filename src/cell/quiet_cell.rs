use super::*;

/// A `StateCell` whose subscribe does not replay the stored value. The new
/// subscription record starts out acknowledged at the cell's current revision,
/// as if the value had already been delivered, so the subscriber only hears
/// about stores made after it attached. Everything else derefs to the base
/// cell.
///
/// If the record can't be marked caught up the failure is logged and the
/// subscriber degrades to baseline behavior, receiving the replay; the
/// returned `Replay` says which happened. The subscribe call itself only
/// errors if registration fails.
pub struct QuietCell<T>(StateCell<T>);

impl<T> QuietCell<T> {
    pub fn new() -> Self {
        Self(StateCell::new())
    }

    pub fn with_value(value: T) -> Self {
        Self(StateCell::with_value(value))
    }

    pub fn subscribe(
        &self,
        subscriber: &Arc<dyn Subscriber<T>>,
        scope: &Scope,
    ) -> CellResult<Replay> {
        self.0.register(subscriber, scope)?;
        let caught_up = self.0.mark_caught_up(&Arc::downgrade(subscriber));
        caught_up.or_log_warn("could not suppress replay, delivering stored value");
        match caught_up {
            Ok(()) => Ok(if self.0.get().is_some() {
                Replay::Suppressed
            } else {
                Replay::NothingStored
            }),
            Err(_) => Ok(self.0.replay_to(subscriber)),
        }
    }
}

impl<T> Default for QuietCell<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Deref for QuietCell<T> {
    type Target = StateCell<T>;

    fn deref(&self) -> &StateCell<T> {
        &self.0
    }
}

impl<T> DerefMut for QuietCell<T> {
    fn deref_mut(&mut self) -> &mut StateCell<T> {
        &mut self.0
    }
}

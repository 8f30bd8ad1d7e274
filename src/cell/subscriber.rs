use super::*;

/// An observer of a cell's value. Notified once per store it has not yet
/// acknowledged, on the thread that performed the store.
pub trait Subscriber<T> {
    fn notify(&self, value: &T);
}

use super::*;

/// Owner-held handle that bounds how long subscriptions live. Subscriptions
/// registered with one of its scopes are revoked automatically once the
/// lifecycle ends, whether by an explicit `end()` or by being dropped.
pub struct Lifecycle(Arc<()>);

impl Lifecycle {
    pub fn new() -> Self {
        Self(Arc::new(()))
    }

    /// A token to register subscriptions under. Cheap to clone.
    pub fn scope(&self) -> Scope {
        Scope(Arc::downgrade(&self.0))
    }

    /// Ends the lifecycle, revoking every subscription bound to its scopes.
    /// Dropping the handle does the same, this just reads better at call sites.
    pub fn end(self) {}
}

impl Default for Lifecycle {
    fn default() -> Self {
        Self::new()
    }
}

/// Held inside subscription records; sees the owning `Lifecycle` end without
/// keeping it alive.
#[derive(Clone)]
pub struct Scope(Weak<()>);

impl Scope {
    pub fn is_ended(&self) -> bool {
        self.0.strong_count() == 0
    }
}

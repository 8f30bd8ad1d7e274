use super::*;
use std::sync::Mutex;

/// Lets tests opt into log output. Safe to call any number of times.
pub fn init_test_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

struct MockObserverInner<T> {
    values: Mutex<Vec<T>>,
    f: Box<dyn Fn(&T)>,
}

/// Records every notification it receives, and optionally runs a closure on
/// each one
pub struct MockObserver<T>(Arc<MockObserverInner<T>>);

impl<T: Clone + 'static> MockObserver<T> {
    pub fn new() -> Self {
        Self::new_with_fn(|_| ())
    }

    pub fn new_terrified() -> Self {
        Self::new_with_fn(|_| panic!("mock observer should not have been notified"))
    }

    pub fn new_with_fn<F>(f: F) -> Self
    where
        F: Fn(&T) + 'static,
    {
        Self(Arc::new(MockObserverInner {
            values: Mutex::new(Vec::new()),
            f: Box::new(f),
        }))
    }

    pub fn get(&self) -> Arc<dyn Subscriber<T>> {
        self.0.clone()
    }

    pub fn weak(&self) -> Weak<dyn Subscriber<T>> {
        Arc::downgrade(&self.get())
    }

    pub fn notify_count(&self) -> usize {
        self.0.values.lock().expect("failed to lock values").len()
    }

    pub fn values(&self) -> Vec<T> {
        self.0.values.lock().expect("failed to lock values").clone()
    }
}

impl<T: Clone> Subscriber<T> for MockObserverInner<T> {
    fn notify(&self, value: &T) {
        self.values
            .lock()
            .expect("failed to lock values")
            .push(value.clone());
        (self.f)(value);
    }
}

use std::sync::{Arc, Weak};

pub trait ThinPtr {
    fn thin_ptr(&self) -> *const ();
}

/// Arc::ptr_eq() is unreliable for trait objects (see
/// https://github.com/rust-lang/rust/issues/46139), so subscriber identity is
/// compared through this instead
impl<T: ?Sized> ThinPtr for Arc<T> {
    fn thin_ptr(&self) -> *const () {
        Arc::as_ptr(self) as *const ()
    }
}

impl<T: ?Sized> ThinPtr for Weak<T> {
    fn thin_ptr(&self) -> *const () {
        match self.upgrade() {
            Some(arc) => arc.thin_ptr(),
            None => std::ptr::null(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn returns_same_for_arc_and_its_weak() {
        let arc = Arc::new(7);
        let weak = Arc::downgrade(&arc);
        assert_eq!(arc.thin_ptr(), weak.thin_ptr());
    }

    #[test]
    fn returns_same_for_clones() {
        let a = Arc::new(7);
        let b = a.clone();
        assert_eq!(a.thin_ptr(), b.thin_ptr());
    }

    #[test]
    fn returns_different_for_different_objects() {
        let a = Arc::new(7);
        let b = Arc::new(7);
        assert_ne!(a.thin_ptr(), b.thin_ptr());
    }

    #[test]
    fn returns_null_for_dead_weak() {
        let weak;
        {
            let arc = Arc::new(7);
            weak = Arc::downgrade(&arc);
        }
        assert_eq!(weak.thin_ptr(), std::ptr::null());
    }
}

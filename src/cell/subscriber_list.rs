use super::*;

/// Revision sentinel meaning a record has never had a value delivered to it
pub const REV_NEVER: u64 = 0;

/// Returned by SubscriberList::add(), used instead of a raw bool for code readability
pub struct SubscribeReport {
    pub was_empty: bool,
}

/// Returned by SubscriberList::remove(), used instead of a raw bool for code readability
pub struct UnsubscribeReport {
    pub is_now_empty: bool,
}

struct Record<T> {
    /// Identity key obtained with thin_ptr(), stored as usize since Weaks
    /// can't be hashed or compared
    ptr: usize,
    subscriber: Weak<dyn Subscriber<T>>,
    scope: Scope,
    /// Last revision this subscriber acknowledged, REV_NEVER if none
    last_seen: u64,
}

/// The subscription registry owned by a cell. Most cells have 0 or 1
/// subscribers and dispatch iterates the whole thing, so a Vec rather than a
/// map. Interior lock so registration only needs a shared borrow of the cell.
pub struct SubscriberList<T> {
    records: RwLock<Vec<Record<T>>>,
    #[cfg(test)]
    break_catch_up: std::sync::atomic::AtomicBool,
}

impl<T> SubscriberList<T> {
    pub fn new() -> Self {
        Self {
            records: RwLock::new(Vec::new()),
            #[cfg(test)]
            break_catch_up: Default::default(),
        }
    }

    pub fn add(
        &self,
        subscriber: &Arc<dyn Subscriber<T>>,
        scope: &Scope,
    ) -> CellResult<SubscribeReport> {
        let mut records = self.records.write().expect("failed to lock records");
        let ptr = subscriber.thin_ptr() as usize;
        if records.iter().any(|record| record.ptr == ptr) {
            return Err(CellError::AlreadySubscribed);
        }
        let was_empty = records.is_empty();
        records.push(Record {
            ptr,
            subscriber: Arc::downgrade(subscriber),
            scope: scope.clone(),
            last_seen: REV_NEVER,
        });
        Ok(SubscribeReport { was_empty })
    }

    pub fn remove(&self, subscriber: &Weak<dyn Subscriber<T>>) -> CellResult<UnsubscribeReport> {
        let mut records = self.records.write().expect("failed to lock records");
        let ptr = subscriber.thin_ptr() as usize;
        match records.iter().position(|record| record.ptr == ptr) {
            None => Err(CellError::NotSubscribed),
            Some(i) => {
                records.swap_remove(i);
                let is_now_empty = records.is_empty();
                Ok(UnsubscribeReport { is_now_empty })
            }
        }
    }

    /// Makes mark_caught_up() fail from here on, simulating bookkeeping the
    /// cell can no longer locate
    #[cfg(test)]
    pub fn break_catch_up(&self) {
        self.break_catch_up
            .store(true, std::sync::atomic::Ordering::Relaxed);
    }

    /// Overwrites a record's last acknowledged revision, making dispatch treat
    /// that revision as already delivered
    pub fn mark_caught_up(
        &self,
        subscriber: &Weak<dyn Subscriber<T>>,
        revision: u64,
    ) -> CellResult<()> {
        #[cfg(test)]
        {
            if self
                .break_catch_up
                .load(std::sync::atomic::Ordering::Relaxed)
            {
                return Err(CellError::InternalError(
                    "record lookup disabled by test".into(),
                ));
            }
        }
        let mut records = self.records.write().expect("failed to lock records");
        let ptr = subscriber.thin_ptr() as usize;
        match records.iter_mut().find(|record| record.ptr == ptr) {
            Some(record) => {
                record.last_seen = revision;
                Ok(())
            }
            None => Err(CellError::InternalError(
                "no subscription record for subscriber".into(),
            )),
        }
    }

    /// Delivers the value to every live record that is behind the given
    /// revision. A record is marked caught up before its subscriber runs, so
    /// no subscriber sees the same revision twice. Records whose scope has
    /// ended are pruned here and never notified again.
    pub fn dispatch(&self, value: &T, revision: u64) {
        let due: Vec<Weak<dyn Subscriber<T>>> = {
            let mut records = self.records.write().expect("failed to lock records");
            records.retain(|record| {
                if record.scope.is_ended() {
                    return false;
                }
                if record.subscriber.strong_count() == 0 {
                    error!("subscriber was dropped without being unsubscribed");
                    return false;
                }
                true
            });
            records
                .iter_mut()
                .filter(|record| record.last_seen < revision)
                .map(|record| {
                    record.last_seen = revision;
                    record.subscriber.clone()
                })
                .collect()
        };
        for subscriber in due {
            match subscriber.upgrade() {
                Some(subscriber) => subscriber.notify(value),
                None => error!("failed to lock Weak; subscriber dropped during dispatch"),
            }
        }
    }
}

impl<T> Default for SubscriberList<T> {
    fn default() -> Self {
        Self::new()
    }
}

//! A single-value observable container with revision-tracked subscriptions.
//!
//! [`StateCell`] holds an optional current value and a revision counter that
//! increments on every store. Subscribers are notified of each store exactly
//! once, in storage order, and each subscription record remembers the last
//! revision it acknowledged. Subscribing normally replays the value already
//! stored; [`QuietCell`] is the variant whose subscribe marks the new record
//! as already caught up instead, so a re-attached observer (say, after a UI
//! screen is rebuilt) only hears about changes made after it attached.
//!
//! Registrations are bound to a [`Lifecycle`] scope and are revoked
//! automatically when the scope ends.

#[macro_use]
extern crate log;

mod cell;
mod helpers;

pub use cell::{
    CellError, CellResult, Lifecycle, QuietCell, Replay, Scope, StateCell, Subscriber, REV_NEVER,
};
pub use helpers::{OrLog, ThinPtr};

use helpers::*;
use std::error::Error;
use std::ops::{Deref, DerefMut};
use std::sync::{Arc, RwLock, Weak};

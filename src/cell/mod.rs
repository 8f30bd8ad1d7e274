//! The observable cell: a value, its revision counter, and the subscription
//! records that decide who still needs to hear about it

use super::*;

mod error;
mod lifecycle;
mod quiet_cell;
mod state_cell;
mod subscriber;
mod subscriber_list;

pub use error::{CellError, CellResult};
pub use lifecycle::{Lifecycle, Scope};
pub use quiet_cell::QuietCell;
pub use state_cell::{Replay, StateCell};
pub use subscriber::Subscriber;
pub use subscriber_list::REV_NEVER;

use subscriber_list::SubscriberList;

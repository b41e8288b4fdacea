//! Exponential backoff with jitter.
//!
//! The crate only computes delays: the caller runs the operation, asks
//! [`Backoff::next`] for the next delay and sleeps (or gives up on [`STOP`]).
//!
//! ```
//! use rebound_core::prelude::*;
//!
//! let mut backoff = Exponential::with_max_retry(3);
//! backoff.reset();
//! let mut attempts = 0;
//! while let Some(_delay) = backoff.next() {
//!     // retry the operation, then sleep for `_delay`
//!     attempts += 1;
//! }
//! assert_eq!(attempts, 3);
//! ```
pub mod backoff;
pub mod clock;
pub mod exponential;
pub mod jitter;
pub mod map;

pub use backoff::{Backoff, Delays, STOP};
pub use clock::{Clock, ManualClock, SystemClock};
pub use exponential::{Exponential, StopReason};

pub mod prelude {
    pub use crate::backoff::{Backoff, STOP};
    pub use crate::clock::{Clock, SystemClock};
    pub use crate::exponential::{Exponential, StopReason};
}

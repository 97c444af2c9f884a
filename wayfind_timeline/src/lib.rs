// Copyright 2026 the Wayfind Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Wayfind Timeline: a deterministic virtual-clock delay queue.
//!
//! UI navigation needs short settle delays between chained mutations (letting a
//! transition animation finish before the next step fires). Real timers make
//! that behavior nondeterministic and slow to test. This crate models the delay
//! as data: items are scheduled against a virtual clock, and the owner decides
//! when time passes.
//!
//! - [`Delay`]: a millisecond delay value with saturating arithmetic.
//! - [`Timeline`]: the queue. [`Timeline::schedule`] enqueues an item relative
//!   to now, [`Timeline::advance`] moves the clock, [`Timeline::pop_ready`]
//!   drains items whose deadline has passed, in deadline order with stable FIFO
//!   ties.
//!
//! Tests advance the clock directly. A production driver sleeps for
//! [`Timeline::next_due`] on its real timer, then feeds the elapsed time back
//! through [`Timeline::advance`].
//!
//! It is generic over the scheduled item and carries no dependency on the rest
//! of the wayfind stack; the coordinator crate schedules its deferred
//! navigation steps here.
//!
//! # Example
//!
//! ```rust
//! use wayfind_timeline::{Delay, Timeline};
//!
//! let mut timeline: Timeline<&str> = Timeline::new();
//! timeline.schedule(Delay::from_millis(625), "dispatch overlay");
//! timeline.schedule(Delay::from_millis(625), "signal completion");
//!
//! // Nothing fires until the clock moves.
//! assert!(timeline.pop_ready().is_none());
//!
//! timeline.advance(Delay::from_millis(625));
//! assert_eq!(timeline.pop_ready(), Some("dispatch overlay"));
//! assert_eq!(timeline.pop_ready(), Some("signal completion"));
//! assert!(timeline.is_empty());
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

pub mod delay;
pub mod timeline;

pub use delay::Delay;
pub use timeline::Timeline;

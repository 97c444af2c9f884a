// Copyright 2026 the Wayfind Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Wayfind Coordinator: a navigation-state coordinator tree for stack-based UI flows.
//!
//! ## Overview
//!
//! This crate decides, for a sequence of requested destinations, whether each
//! becomes a forward stack push, a partial-screen sheet, or a full-screen
//! modal, and manages a tree of cooperating coordinators so overlays can own
//! independent sub-stacks. It renders nothing: a view layer observes
//! coordinator state ([`CoordinatorTree::stack`], [`CoordinatorTree::sheet`],
//! [`CoordinatorTree::modal`]) and reacts.
//!
//! ## Flow partitioning
//!
//! [`CoordinatorTree::navigate_flow`] consumes a flow front to back: every
//! leading push is appended synchronously and in order, the first non-push
//! request becomes the overlay, and everything after it rides along as the
//! overlay's undelivered remainder. Only one overlay fires per call. When the
//! view layer instantiates the overlay's content it calls
//! [`CoordinatorTree::next_coordinator`] with the remainder, which re-enters
//! partitioning one level down — a multi-hop deep link threads through a
//! growing tree.
//!
//! ## Backward navigation
//!
//! Dismiss, pop, and unwind operations ([`CoordinatorTree::dismiss_last`],
//! [`CoordinatorTree::pop_to`], [`CoordinatorTree::unwind_to`],
//! [`CoordinatorTree::unwind_to_root`]) locate their targets by walking parent
//! edges toward the root. Failed operations leave all state unchanged and
//! report through the completion callback; nothing raises past its boundary.
//!
//! ## Time
//!
//! Chained mutations are separated by a transition-settle delay
//! ([`CoordinatorTree::DEFAULT_TRANSITION`]) held on a virtual-clock
//! [`wayfind_timeline::Timeline`]. Tests call [`CoordinatorTree::settle`];
//! a production driver sleeps for [`CoordinatorTree::next_wakeup`] and feeds
//! elapsed time into [`CoordinatorTree::advance`]. The
//! [`FlowSpeed`](types::FlowSpeed) switch controls whether the overlay
//! dispatch itself is synchronous or deferred.
//!
//! # Example
//!
//! A five-step deep link spanning three coordinators:
//!
//! ```rust
//! use wayfind_coordinator::tree::CoordinatorTree;
//! use wayfind_flow::{Flow, Request, Screen};
//!
//! #[derive(Clone, Debug, PartialEq)]
//! enum Page {
//!     Catalog,
//!     Cart,
//!     Checkout,
//!     Payment,
//!     Receipt,
//! }
//!
//! impl Screen for Page {
//!     type Id = &'static str;
//!     fn id(&self) -> &'static str {
//!         match self {
//!             Page::Catalog => "catalog",
//!             Page::Cart => "cart",
//!             Page::Checkout => "checkout",
//!             Page::Payment => "payment",
//!             Page::Receipt => "receipt",
//!         }
//!     }
//! }
//!
//! let mut tree: CoordinatorTree<Page> = CoordinatorTree::new();
//! let root = tree.insert_root();
//!
//! let flow: Flow<Page> = vec![
//!     Request::push(Page::Catalog),
//!     Request::sheet(Page::Cart),
//!     Request::modal(Page::Checkout),
//!     Request::push(Page::Payment),
//!     Request::push(Page::Receipt),
//! ]
//! .into();
//!
//! tree.navigate_flow(root, flow, None);
//!
//! // The push run landed; the sheet carries the remainder.
//! assert_eq!(tree.stack(root).len(), 1);
//! let sheet = tree.sheet(root).expect("sheet is presenting");
//! assert_eq!(sheet.request().screen, Page::Cart);
//! let remainder = sheet.remaining().cloned().expect("three steps remain");
//!
//! // The sheet's content hosts the next hop.
//! let child = tree.next_coordinator(root, Some(remainder));
//! tree.settle();
//! assert!(tree.stack(child).is_empty());
//! let modal = tree.modal(child).expect("modal is presenting");
//! assert_eq!(modal.request().screen, Page::Checkout);
//!
//! // And the modal's content hosts the final pushes.
//! let remainder = modal.remaining().cloned().expect("two steps remain");
//! let grandchild = tree.next_coordinator(child, Some(remainder));
//! tree.settle();
//! assert_eq!(tree.stack(grandchild).len(), 2);
//! assert_eq!(tree.parent_of(grandchild), Some(child));
//! assert_eq!(tree.child_of(grandchild), None);
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

pub mod tree;
pub mod types;

pub use tree::CoordinatorTree;
pub use types::{Completion, CoordinatorId, FlowSpeed, NavError, NavResult, Presentation, PresentationId};

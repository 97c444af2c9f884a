// Copyright 2026 the Wayfind Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Wayfind Flow: the navigation data model.
//!
//! Wayfind Flow is the leaf building block of the wayfind stack: screens,
//! navigation methods, requests, and ordered flows.
//!
//! - [`Screen`] is the application-supplied identity of "a screen", with a
//!   lookup id distinct from full equality.
//! - [`Method`] is the tagged union deciding how a screen is reached: a forward
//!   [`Method::Push`], a partial-screen [`Method::Sheet`] with a presentation
//!   payload, or a full-screen [`Method::Modal`]. Equality is by tag only; the
//!   payload is consulted at dispatch time, never at comparison time.
//! - [`Request`] pairs one screen with one method.
//! - [`Flow`] is an ordered multi-step navigation (often a parsed deep link)
//!   with the derived views the coordinator's partitioning algorithm needs:
//!   [`Flow::is_all_push`], [`Flow::first_non_push`], and the
//!   [`Flow::tags`] summary.
//!
//! The coordinator crate consumes these types; this crate carries no tree or
//! scheduling state of its own.
//!
//! # Example
//!
//! ```rust
//! use wayfind_flow::{Flow, Method, MethodTags, Request, Screen};
//!
//! #[derive(Clone, Debug, PartialEq)]
//! enum Page {
//!     ProductList,
//!     ProductDetail(u32),
//!     Cart,
//! }
//!
//! impl Screen for Page {
//!     type Id = u32;
//!     fn id(&self) -> u32 {
//!         match self {
//!             Page::ProductList => 0,
//!             Page::ProductDetail(n) => *n,
//!             Page::Cart => 1,
//!         }
//!     }
//! }
//!
//! // A deep link: two pushes, then a sheet.
//! let flow: Flow<Page> = vec![
//!     Request::push(Page::ProductList),
//!     Request::push(Page::ProductDetail(7)),
//!     Request::sheet(Page::Cart),
//! ]
//! .into();
//!
//! assert!(!flow.is_all_push());
//! assert_eq!(flow.first_non_push(), Some(2));
//! assert_eq!(flow.tags(), MethodTags::PUSH | MethodTags::SHEET);
//!
//! // Method equality ignores the sheet payload.
//! assert_eq!(Method::sheet(), Method::sheet());
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

pub mod flow;
pub mod method;
pub mod request;
pub mod screen;

pub use flow::Flow;
pub use method::{Detents, Method, MethodTag, MethodTags, OnDismiss, SheetOptions};
pub use request::Request;
pub use screen::Screen;

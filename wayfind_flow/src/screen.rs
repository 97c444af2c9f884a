// Copyright 2026 the Wayfind Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The application-supplied screen identity.

/// A screen the application can navigate to.
///
/// Implemented by the embedding application. The coordinator only stores and
/// compares screens; it never constructs them.
///
/// Two notions of identity are kept distinct:
///
/// - full equality (`PartialEq`), used when comparing whole requests; and
/// - the lookup id ([`Screen::id`]), used by the `*_id` operations, so that two
///   structurally different screens (say, the same detail page for different
///   records) can still share an unwind target.
pub trait Screen: Clone + PartialEq {
    /// Stable lookup identity, distinct from full equality.
    type Id: Clone + PartialEq;

    /// Returns the lookup id of this screen.
    fn id(&self) -> Self::Id;
}

// Copyright 2026 the Wayfind Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Public types for the coordinator tree: identifiers, errors, completions,
//! presentations, and the flow-speed switch.

use alloc::boxed::Box;

use wayfind_flow::{Flow, Request, Screen};

/// Identifier for a coordinator in the tree.
///
/// This is a small, copyable handle that stays stable across updates but becomes
/// invalid when the underlying slot is reused.
/// It consists of a slot index and a generation counter.
///
/// ## Semantics
///
/// - On insert, a fresh slot is allocated with generation `1`.
/// - On remove, the slot is freed; any existing `CoordinatorId` that pointed to
///   that slot is now stale.
/// - On reuse of a freed slot, its generation is incremented, producing a new,
///   distinct `CoordinatorId`.
///
/// ### Liveness
///
/// Use [`CoordinatorTree::is_alive`](crate::tree::CoordinatorTree::is_alive) to
/// check whether a `CoordinatorId` still refers to a live coordinator.
/// Stale ids never alias a different live coordinator because the generation
/// must match.
///
/// Parent and child edges store these ids rather than owning references; a
/// stale edge reads as "no parent/child" everywhere, which is how the tree
/// tolerates a coordinator torn down while others still point at it.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct CoordinatorId(pub(crate) u32, pub(crate) u32);

impl CoordinatorId {
    pub(crate) const fn new(idx: u32, generation: u32) -> Self {
        Self(idx, generation)
    }

    pub(crate) const fn idx(self) -> usize {
        self.0 as usize
    }
}

/// Why a navigation operation failed.
///
/// The taxonomy is closed and every failure is locally recoverable: state is
/// left untouched and the caller simply never sees the transition.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum NavError {
    /// Flow navigation was called with zero requests.
    EmptyFlow,
    /// A pop was attempted with an empty stack.
    NotNavigating,
    /// A dismiss was attempted with no active overlay anywhere up the tree.
    NotPresenting,
    /// A pop or unwind target is not present anywhere searched.
    ScreenNotFound,
}

impl core::fmt::Display for NavError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let msg = match self {
            Self::EmptyFlow => "navigation flow is empty",
            Self::NotNavigating => "no pushed screens to pop",
            Self::NotPresenting => "no overlay is being presented",
            Self::ScreenNotFound => "requested screen was not found",
        };
        f.write_str(msg)
    }
}

impl core::error::Error for NavError {}

/// Outcome delivered through a completion callback.
pub type NavResult = Result<(), NavError>;

/// Fire-once completion callback for a navigation operation.
///
/// Failures are delivered synchronously from the call; successes arrive after
/// the transition-settle delay, once the driver advances the tree's timeline.
pub type Completion = Box<dyn FnOnce(NavResult)>;

/// Whether the overlay-dispatch step of a flow runs synchronously or after the
/// transition-settle delay.
///
/// Pushes preceding the overlay are always applied synchronously; this switch
/// only affects the overlay dispatch itself.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
pub enum FlowSpeed {
    /// Dispatch the overlay synchronously within the flow call.
    #[default]
    Quick,
    /// Defer the overlay dispatch by one transition delay.
    Slow,
}

/// Unique identity of one presentation, distinct across the life of a tree.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct PresentationId(pub(crate) u64);

/// An active overlay: the request being shown plus the undelivered remainder of
/// the flow that spawned it.
///
/// Created when a non-push request is dispatched, destroyed when dismissed. The
/// remainder, if any, becomes the child coordinator's own flow once the view
/// layer instantiates the overlay's content.
#[derive(Clone, Debug)]
pub struct Presentation<S: Screen> {
    pub(crate) id: PresentationId,
    pub(crate) request: Request<S>,
    pub(crate) remaining: Option<Flow<S>>,
}

impl<S: Screen> Presentation<S> {
    /// Unique identity of this presentation.
    pub fn id(&self) -> PresentationId {
        self.id
    }

    /// The request being presented.
    pub fn request(&self) -> &Request<S> {
        &self.request
    }

    /// The undelivered remainder of the originating flow.
    pub fn remaining(&self) -> Option<&Flow<S>> {
        self.remaining.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_messages_are_stable() {
        use alloc::string::ToString;
        assert_eq!(NavError::EmptyFlow.to_string(), "navigation flow is empty");
        assert_eq!(
            NavError::ScreenNotFound.to_string(),
            "requested screen was not found"
        );
    }

    #[test]
    fn flow_speed_defaults_to_quick() {
        assert_eq!(FlowSpeed::default(), FlowSpeed::Quick);
    }
}

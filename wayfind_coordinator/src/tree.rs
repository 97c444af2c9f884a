// Copyright 2026 the Wayfind Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The coordinator tree: structure, forward navigation, backward navigation.

use alloc::vec::Vec;

use wayfind_flow::{Flow, Method, MethodTag, Request, Screen};
use wayfind_timeline::{Delay, Timeline};

use crate::types::{
    Completion, CoordinatorId, FlowSpeed, NavError, NavResult, Presentation, PresentationId,
};

/// One coordinator's mutable state plus its tree edges.
#[derive(Clone, Debug)]
pub(crate) struct Coordinator<S: Screen> {
    generation: u32,
    parent: Option<CoordinatorId>,
    child: Option<CoordinatorId>,
    stack: Vec<Request<S>>,
    sheet: Option<Presentation<S>>,
    modal: Option<Presentation<S>>,
}

impl<S: Screen> Coordinator<S> {
    fn new(generation: u32, parent: Option<CoordinatorId>) -> Self {
        Self {
            generation,
            parent,
            child: None,
            stack: Vec::new(),
            sheet: None,
            modal: None,
        }
    }

    fn is_presenting(&self) -> bool {
        self.sheet.is_some() || self.modal.is_some()
    }
}

/// How a pop or unwind target is looked up in a stack or overlay.
pub(crate) enum Locator<S: Screen> {
    /// Full screen equality.
    Screen(S),
    /// Lookup-id equality.
    Id(S::Id),
}

impl<S: Screen> Locator<S> {
    fn matches(&self, request: &Request<S>) -> bool {
        match self {
            Self::Screen(screen) => request.screen == *screen,
            Self::Id(id) => request.screen.id() == *id,
        }
    }
}

/// A deferred navigation step waiting on the transition-settle delay.
pub(crate) enum Step<S: Screen> {
    /// Run a flow on a (usually freshly created) coordinator.
    Navigate {
        at: CoordinatorId,
        flow: Flow<S>,
        completion: Option<Completion>,
    },
    /// Dispatch the overlay request of a partitioned flow.
    Dispatch {
        at: CoordinatorId,
        request: Request<S>,
        remaining: Option<Flow<S>>,
        completion: Option<Completion>,
    },
    /// Pop the stack back to a target (unwind chaining).
    PopTo {
        at: CoordinatorId,
        target: Locator<S>,
        completion: Option<Completion>,
    },
    /// Clear the stack (unwind chaining).
    PopAll {
        at: CoordinatorId,
        completion: Option<Completion>,
    },
    /// Deliver a delayed completion result.
    Finish {
        completion: Completion,
        result: NavResult,
    },
}

fn complete_now(completion: Option<Completion>, result: NavResult) {
    if let Some(completion) = completion {
        completion(result);
    }
}

/// Arena of cooperating coordinators forming the navigation tree.
///
/// Each coordinator owns a push stack and two overlay slots (sheet and modal).
/// Overlays can spawn child coordinators to host the remainder of a flow, so a
/// multi-hop deep link threads through a growing tree. Parent/child edges are
/// plain [`CoordinatorId`]s: a stale edge reads as "no parent/child", never as
/// a dangling reference.
///
/// All mutation goes through `&mut self`; one tree expects one sequencing
/// context (a UI event loop or an external mutex).
///
/// Deferred work (overlay dispatch in slow mode, child-flow continuations,
/// delayed success completions) sits on an internal [`Timeline`]. Drivers move
/// time with [`CoordinatorTree::advance`] or run everything to quiescence with
/// [`CoordinatorTree::settle`].
pub struct CoordinatorTree<S: Screen> {
    slots: Vec<Option<Coordinator<S>>>,
    generations: Vec<u32>, // last generation per slot (persists across frees)
    free_list: Vec<usize>,
    speed: FlowSpeed,
    transition: Delay,
    timeline: Timeline<Step<S>>,
    next_presentation: u64,
}

impl<S: Screen> core::fmt::Debug for CoordinatorTree<S> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let total = self.slots.len();
        let alive = self.slots.iter().filter(|c| c.is_some()).count();
        f.debug_struct("CoordinatorTree")
            .field("coordinators_total", &total)
            .field("coordinators_alive", &alive)
            .field("free_list", &self.free_list.len())
            .field("speed", &self.speed)
            .field("pending_steps", &self.timeline.len())
            .finish_non_exhaustive()
    }
}

impl<S: Screen> Default for CoordinatorTree<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: Screen> CoordinatorTree<S> {
    /// Settle delay applied between chained navigation mutations, sized to let
    /// a transition animation finish.
    pub const DEFAULT_TRANSITION: Delay = Delay::from_millis(625);

    /// Create an empty tree in [`FlowSpeed::Quick`] mode.
    pub fn new() -> Self {
        Self::with_speed(FlowSpeed::Quick)
    }

    /// Create an empty tree with an explicit flow speed.
    pub fn with_speed(speed: FlowSpeed) -> Self {
        Self {
            slots: Vec::new(),
            generations: Vec::new(),
            free_list: Vec::new(),
            speed,
            transition: Self::DEFAULT_TRANSITION,
            timeline: Timeline::new(),
            next_presentation: 0,
        }
    }

    /// The current flow speed.
    pub fn speed(&self) -> FlowSpeed {
        self.speed
    }

    /// Switch the flow speed for subsequent flow navigations.
    pub fn set_speed(&mut self, speed: FlowSpeed) {
        self.speed = speed;
    }

    /// The transition-settle delay applied to deferred steps.
    pub fn transition_delay(&self) -> Delay {
        self.transition
    }

    /// Override the transition-settle delay.
    pub fn set_transition_delay(&mut self, delay: Delay) {
        self.transition = delay;
    }

    // --- structure ---

    /// Insert a root coordinator (no parent).
    pub fn insert_root(&mut self) -> CoordinatorId {
        self.allocate(None)
    }

    /// Create the child coordinator that will own an overlay's content.
    ///
    /// The child's parent is `parent`, and `parent`'s child edge is replaced
    /// (the previous child, if any, is left to be torn down by whoever owned
    /// its overlay). If `flow` is given, the child navigates it after one
    /// transition delay, re-entering flow partitioning one level down.
    pub fn next_coordinator(
        &mut self,
        parent: CoordinatorId,
        flow: Option<Flow<S>>,
    ) -> CoordinatorId {
        self.next_coordinator_with(parent, flow, None)
    }

    /// [`CoordinatorTree::next_coordinator`] with a completion for the deferred flow.
    pub fn next_coordinator_with(
        &mut self,
        parent: CoordinatorId,
        flow: Option<Flow<S>>,
        completion: Option<Completion>,
    ) -> CoordinatorId {
        let child = self.allocate(Some(parent));
        if let Some(p) = self.coordinator_mut(parent) {
            p.child = Some(child);
        }
        if let Some(flow) = flow {
            let after = self.transition;
            self.timeline.schedule(
                after,
                Step::Navigate {
                    at: child,
                    flow,
                    completion,
                },
            );
        }
        child
    }

    /// Remove a coordinator and its descendants from the tree.
    ///
    /// The arena counterpart of the overlay content being released: ids
    /// pointing at removed coordinators become stale and read as absent.
    pub fn remove(&mut self, id: CoordinatorId) {
        if !self.is_alive(id) {
            return;
        }
        if let Some(parent) = self.coordinator(id).and_then(|c| c.parent)
            && let Some(p) = self.coordinator_mut(parent)
            && p.child == Some(id)
        {
            p.child = None;
        }
        let child = self.coordinator(id).and_then(|c| c.child);
        if let Some(child) = child {
            self.remove(child);
        }
        self.slots[id.idx()] = None;
        self.free_list.push(id.idx());
    }

    /// Returns true if `id` refers to a live coordinator.
    pub fn is_alive(&self, id: CoordinatorId) -> bool {
        self.coordinator(id).is_some()
    }

    /// The live parent of `id`, if any.
    ///
    /// A stale parent edge reads as no parent.
    pub fn parent_of(&self, id: CoordinatorId) -> Option<CoordinatorId> {
        let parent = self.coordinator(id)?.parent?;
        self.is_alive(parent).then_some(parent)
    }

    /// The live child of `id`, if any.
    pub fn child_of(&self, id: CoordinatorId) -> Option<CoordinatorId> {
        let child = self.coordinator(id)?.child?;
        self.is_alive(child).then_some(child)
    }

    /// The root above `id`: the coordinator with no live parent.
    pub fn root_of(&self, id: CoordinatorId) -> Option<CoordinatorId> {
        if !self.is_alive(id) {
            return None;
        }
        let mut cur = id;
        while let Some(parent) = self.parent_of(cur) {
            cur = parent;
        }
        Some(cur)
    }

    // --- observable state ---

    /// The push stack of `id`, in push order. Empty for stale ids.
    pub fn stack(&self, id: CoordinatorId) -> &[Request<S>] {
        self.coordinator(id)
            .map(|c| c.stack.as_slice())
            .unwrap_or(&[])
    }

    /// The active sheet presentation of `id`.
    pub fn sheet(&self, id: CoordinatorId) -> Option<&Presentation<S>> {
        self.coordinator(id)?.sheet.as_ref()
    }

    /// The active modal presentation of `id`.
    pub fn modal(&self, id: CoordinatorId) -> Option<&Presentation<S>> {
        self.coordinator(id)?.modal.as_ref()
    }

    // --- status ---

    /// True if `id` has pushed at least one screen.
    pub fn has_navigation(&self, id: CoordinatorId) -> bool {
        self.coordinator(id).is_some_and(|c| !c.stack.is_empty())
    }

    /// True if `id`'s stack contains `screen`.
    pub fn has_screen(&self, id: CoordinatorId, screen: &S) -> bool {
        self.coordinator(id)
            .is_some_and(|c| c.stack.iter().any(|r| r.screen == *screen))
    }

    /// True if `id`'s stack contains a screen with the lookup id `screen_id`.
    pub fn has_screen_id(&self, id: CoordinatorId, screen_id: &S::Id) -> bool {
        self.coordinator(id)
            .is_some_and(|c| c.stack.iter().any(|r| r.screen.id() == *screen_id))
    }

    /// True if either overlay slot of `id` is active.
    pub fn is_presenting(&self, id: CoordinatorId) -> bool {
        self.coordinator(id).is_some_and(Coordinator::is_presenting)
    }

    /// True if `id` is presenting `screen` in either overlay slot.
    pub fn is_presenting_screen(&self, id: CoordinatorId, screen: &S) -> bool {
        self.presents(id, &Locator::Screen(screen.clone()))
    }

    /// True if `id` is presenting a screen with the lookup id `screen_id`.
    pub fn is_presenting_id(&self, id: CoordinatorId, screen_id: &S::Id) -> bool {
        self.presents(id, &Locator::Id(screen_id.clone()))
    }

    // --- navigate forward ---

    /// Push a single screen. Stale ids are ignored.
    pub fn navigate_to(&mut self, at: CoordinatorId, screen: S) {
        self.navigate(at, Request::push(screen), None);
    }

    /// Perform a single navigation request.
    ///
    /// A push lands on the stack; a sheet or modal occupies the matching
    /// overlay slot. The success completion fires one transition delay later.
    /// Stale ids drop the completion, as a torn-down coordinator cannot call
    /// back.
    pub fn navigate(&mut self, at: CoordinatorId, request: Request<S>, completion: Option<Completion>) {
        if !self.is_alive(at) {
            return;
        }
        self.dispatch(at, request, None, completion);
    }

    /// Perform a flow navigation: a series of requests in sequence.
    ///
    /// All leading pushes are appended synchronously, in order. The first
    /// non-push request becomes the overlay, carrying everything after it as
    /// the undelivered remainder; the overlay dispatch is synchronous in
    /// [`FlowSpeed::Quick`] mode and deferred by one transition delay in
    /// [`FlowSpeed::Slow`]. Only one overlay fires per call — the remainder is
    /// owned by the child coordinator created later via
    /// [`CoordinatorTree::next_coordinator`].
    pub fn navigate_flow(&mut self, at: CoordinatorId, flow: Flow<S>, completion: Option<Completion>) {
        if !self.is_alive(at) {
            return;
        }
        if flow.is_empty() {
            complete_now(completion, Err(NavError::EmptyFlow));
            return;
        }
        if flow.is_all_push() {
            if let Some(c) = self.coordinator_mut(at) {
                c.stack.extend(flow);
            }
            complete_now(completion, Ok(()));
            return;
        }
        // Non-empty and not all-push, so a first non-push index exists.
        let Some(overlay_index) = flow.first_non_push() else {
            return;
        };
        let mut requests = flow.into_requests();
        let tail = requests.split_off(overlay_index + 1);
        let Some(overlay) = requests.pop() else {
            return;
        };
        if let Some(c) = self.coordinator_mut(at) {
            c.stack.extend(requests);
        }
        let remaining = (!tail.is_empty()).then(|| Flow::from(tail));
        match self.speed {
            FlowSpeed::Quick => self.dispatch(at, overlay, remaining, completion),
            FlowSpeed::Slow => {
                let after = self.transition;
                self.timeline.schedule(
                    after,
                    Step::Dispatch {
                        at,
                        request: overlay,
                        remaining,
                        completion,
                    },
                );
            }
        }
    }

    /// Apply one request to a coordinator's state and schedule its completion.
    fn dispatch(
        &mut self,
        at: CoordinatorId,
        request: Request<S>,
        remaining: Option<Flow<S>>,
        completion: Option<Completion>,
    ) {
        if !self.is_alive(at) {
            return;
        }
        match request.method.tag() {
            MethodTag::Push => {
                if let Some(c) = self.coordinator_mut(at) {
                    c.stack.push(request);
                }
            }
            MethodTag::Sheet => {
                let presentation = self.presentation(request, remaining);
                if let Some(c) = self.coordinator_mut(at) {
                    c.sheet = Some(presentation);
                }
            }
            MethodTag::Modal => {
                let presentation = self.presentation(request, remaining);
                if let Some(c) = self.coordinator_mut(at) {
                    c.modal = Some(presentation);
                }
            }
        }
        self.complete_later(completion, Ok(()));
    }

    // --- navigate backward ---

    /// Dismiss the active overlay of `at`.
    ///
    /// Fails with [`NavError::NotPresenting`] when neither slot is active.
    /// Both slots are cleared unconditionally; the slots are independent and no
    /// narrower behavior is inferred when both are somehow set.
    pub fn dismiss(&mut self, at: CoordinatorId, completion: Option<Completion>) {
        if !self.is_presenting(at) {
            complete_now(completion, Err(NavError::NotPresenting));
            return;
        }
        self.clear_overlays(at);
        self.complete_later(completion, Ok(()));
    }

    /// Dismiss the nearest active overlay at or above `at`.
    ///
    /// Walks the parent chain toward the root until a presenting coordinator
    /// is found; fails with [`NavError::NotPresenting`] when none is.
    pub fn dismiss_last(&mut self, at: CoordinatorId, completion: Option<Completion>) {
        let mut cur = at;
        loop {
            if self.is_presenting(cur) {
                self.clear_overlays(cur);
                self.complete_later(completion, Ok(()));
                return;
            }
            match self.parent_of(cur) {
                Some(parent) => cur = parent,
                None => {
                    complete_now(completion, Err(NavError::NotPresenting));
                    return;
                }
            }
        }
    }

    /// Remove the most recent push of `at`.
    pub fn pop_last(&mut self, at: CoordinatorId, completion: Option<Completion>) {
        let popped = self
            .coordinator_mut(at)
            .is_some_and(|c| c.stack.pop().is_some());
        if popped {
            self.complete_later(completion, Ok(()));
        } else {
            complete_now(completion, Err(NavError::NotNavigating));
        }
    }

    /// Remove every push of `at`, returning to its first screen.
    pub fn pop_all(&mut self, at: CoordinatorId, completion: Option<Completion>) {
        let cleared = match self.coordinator_mut(at) {
            Some(c) if !c.stack.is_empty() => {
                c.stack.clear();
                true
            }
            _ => false,
        };
        if cleared {
            self.complete_later(completion, Ok(()));
        } else {
            complete_now(completion, Err(NavError::NotNavigating));
        }
    }

    /// Pop `at`'s stack until `screen` is on top.
    ///
    /// The most recently pushed match wins; everything after it is removed.
    /// Fails with [`NavError::ScreenNotFound`] if absent, leaving the stack
    /// untouched.
    pub fn pop_to(&mut self, at: CoordinatorId, screen: S, completion: Option<Completion>) {
        self.pop_to_locator(at, Locator::Screen(screen), completion);
    }

    /// Pop `at`'s stack until a screen with the lookup id `screen_id` is on top.
    pub fn pop_to_id(&mut self, at: CoordinatorId, screen_id: S::Id, completion: Option<Completion>) {
        self.pop_to_locator(at, Locator::Id(screen_id), completion);
    }

    /// Collapse everything back to the very first screen of the whole tree.
    ///
    /// Walks to the root; if the root is presenting, its overlay is cleared
    /// first and the stack clear runs one transition delay later.
    pub fn unwind_to_root(&mut self, at: CoordinatorId, completion: Option<Completion>) {
        let Some(root) = self.root_of(at) else {
            return;
        };
        if self.is_presenting(root) {
            self.clear_overlays(root);
            let after = self.transition;
            self.timeline.schedule(after, Step::PopAll { at: root, completion });
        } else {
            self.pop_all(root, completion);
        }
    }

    /// Unwind backward until `screen` is displayed, searching from `at` toward
    /// the root.
    ///
    /// Per coordinator, three-way: the target in the own stack means dismiss
    /// then pop to it; the target being what the parent presents means this
    /// coordinator collapses entirely; otherwise the decision recurses on the
    /// parent. Fails with [`NavError::ScreenNotFound`] at the root.
    pub fn unwind_to(&mut self, at: CoordinatorId, screen: S, completion: Option<Completion>) {
        self.unwind_to_locator(at, Locator::Screen(screen), completion);
    }

    /// [`CoordinatorTree::unwind_to`] by lookup id.
    pub fn unwind_to_id(&mut self, at: CoordinatorId, screen_id: S::Id, completion: Option<Completion>) {
        self.unwind_to_locator(at, Locator::Id(screen_id), completion);
    }

    fn pop_to_locator(&mut self, at: CoordinatorId, target: Locator<S>, completion: Option<Completion>) {
        let found = match self.coordinator_mut(at) {
            Some(c) => match c.stack.iter().rposition(|r| target.matches(r)) {
                Some(i) => {
                    c.stack.truncate(i + 1);
                    true
                }
                None => false,
            },
            None => false,
        };
        if found {
            self.complete_later(completion, Ok(()));
        } else {
            complete_now(completion, Err(NavError::ScreenNotFound));
        }
    }

    fn unwind_to_locator(&mut self, at: CoordinatorId, target: Locator<S>, completion: Option<Completion>) {
        let mut cur = at;
        loop {
            if self.stack_contains(cur, &target) {
                // Collapse the overlay first; the pop chains one transition later.
                self.clear_overlays(cur);
                let after = self.transition;
                self.timeline.schedule(after, Step::PopTo { at: cur, target, completion });
                return;
            }
            match self.parent_of(cur) {
                Some(parent) => {
                    if self.presents(parent, &target) {
                        // The target is one level up: this coordinator collapses.
                        self.clear_overlays(cur);
                        let after = self.transition;
                        self.timeline.schedule(after, Step::PopAll { at: cur, completion });
                        return;
                    }
                    cur = parent;
                }
                None => {
                    complete_now(completion, Err(NavError::ScreenNotFound));
                    return;
                }
            }
        }
    }

    // --- deferred step driving ---

    /// Move the virtual clock forward and run every step that becomes due.
    pub fn advance(&mut self, by: Delay) {
        self.timeline.advance(by);
        while let Some(step) = self.timeline.pop_ready() {
            self.perform(step);
        }
    }

    /// Run all pending steps, and the steps they schedule, to quiescence.
    ///
    /// Test and demo drivers use this in place of real timers.
    pub fn settle(&mut self) {
        while let Some(wait) = self.timeline.next_due() {
            self.timeline.advance(wait);
            while let Some(step) = self.timeline.pop_ready() {
                self.perform(step);
            }
        }
    }

    /// Delay until the next deferred step, for real-timer drivers.
    pub fn next_wakeup(&self) -> Option<Delay> {
        self.timeline.next_due()
    }

    /// True when no deferred steps are pending.
    pub fn is_settled(&self) -> bool {
        self.timeline.is_empty()
    }

    fn perform(&mut self, step: Step<S>) {
        match step {
            Step::Navigate { at, flow, completion } => self.navigate_flow(at, flow, completion),
            Step::Dispatch {
                at,
                request,
                remaining,
                completion,
            } => self.dispatch(at, request, remaining, completion),
            Step::PopTo { at, target, completion } => self.pop_to_locator(at, target, completion),
            Step::PopAll { at, completion } => self.pop_all(at, completion),
            Step::Finish { completion, result } => completion(result),
        }
    }

    // --- internals ---

    fn allocate(&mut self, parent: Option<CoordinatorId>) -> CoordinatorId {
        let (idx, generation) = if let Some(idx) = self.free_list.pop() {
            let generation = self.generations[idx].saturating_add(1);
            self.generations[idx] = generation;
            self.slots[idx] = Some(Coordinator::new(generation, parent));
            #[allow(
                clippy::cast_possible_truncation,
                reason = "CoordinatorId uses 32-bit indices by design."
            )]
            (idx as u32, generation)
        } else {
            let generation = 1_u32;
            self.slots.push(Some(Coordinator::new(generation, parent)));
            self.generations.push(generation);
            #[allow(
                clippy::cast_possible_truncation,
                reason = "CoordinatorId uses 32-bit indices by design."
            )]
            ((self.slots.len() - 1) as u32, generation)
        };
        CoordinatorId::new(idx, generation)
    }

    fn coordinator(&self, id: CoordinatorId) -> Option<&Coordinator<S>> {
        let c = self.slots.get(id.idx())?.as_ref()?;
        (c.generation == id.1).then_some(c)
    }

    fn coordinator_mut(&mut self, id: CoordinatorId) -> Option<&mut Coordinator<S>> {
        let c = self.slots.get_mut(id.idx())?.as_mut()?;
        (c.generation == id.1).then_some(c)
    }

    fn presentation(&mut self, request: Request<S>, remaining: Option<Flow<S>>) -> Presentation<S> {
        let id = PresentationId(self.next_presentation);
        self.next_presentation += 1;
        Presentation {
            id,
            request,
            remaining,
        }
    }

    /// Clear both overlay slots, firing the sheet's on-dismiss callback and
    /// tearing down the child subtree the overlay content owned.
    fn clear_overlays(&mut self, at: CoordinatorId) {
        let (sheet, child) = match self.coordinator_mut(at) {
            Some(c) if c.is_presenting() => {
                c.modal = None;
                (c.sheet.take(), c.child.take())
            }
            _ => return,
        };
        if let Some(child) = child {
            self.remove(child);
        }
        if let Some(presentation) = sheet
            && let Method::Sheet(options) = &presentation.request.method
            && let Some(on_dismiss) = &options.on_dismiss
        {
            on_dismiss();
        }
    }

    fn stack_contains(&self, id: CoordinatorId, target: &Locator<S>) -> bool {
        self.coordinator(id)
            .is_some_and(|c| c.stack.iter().any(|r| target.matches(r)))
    }

    fn presents(&self, id: CoordinatorId, target: &Locator<S>) -> bool {
        self.coordinator(id).is_some_and(|c| {
            c.sheet
                .as_ref()
                .is_some_and(|p| target.matches(&p.request))
                || c.modal
                    .as_ref()
                    .is_some_and(|p| target.matches(&p.request))
        })
    }

    fn complete_later(&mut self, completion: Option<Completion>, result: NavResult) {
        if let Some(completion) = completion {
            let after = self.transition;
            self.timeline.schedule(after, Step::Finish { completion, result });
        }
    }
}

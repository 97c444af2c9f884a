// Copyright 2026 the Wayfind Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! An ordered sequence of navigation requests, typically built from a deep link.

use alloc::vec::Vec;

use crate::method::{Method, MethodTags};
use crate::request::Request;
use crate::screen::Screen;

/// An ordered multi-step navigation, e.g. the result of parsing a deep link.
///
/// The coordinator consumes a flow front to back: a run of pushes, then at most
/// one overlay carrying the undelivered remainder.
#[derive(Clone, Debug, PartialEq)]
pub struct Flow<S: Screen> {
    requests: Vec<Request<S>>,
}

impl<S: Screen> Flow<S> {
    /// Empty flow.
    pub fn new() -> Self {
        Self {
            requests: Vec::new(),
        }
    }

    /// Number of requests.
    pub fn len(&self) -> usize {
        self.requests.len()
    }

    /// True if the flow holds no requests.
    pub fn is_empty(&self) -> bool {
        self.requests.is_empty()
    }

    /// Append a request.
    pub fn push(&mut self, request: Request<S>) {
        self.requests.push(request);
    }

    /// The requests, in order.
    pub fn requests(&self) -> &[Request<S>] {
        &self.requests
    }

    /// Consume the flow, yielding its requests.
    pub fn into_requests(self) -> Vec<Request<S>> {
        self.requests
    }

    /// Iterate the requests.
    pub fn iter(&self) -> core::slice::Iter<'_, Request<S>> {
        self.requests.iter()
    }

    /// The screens, in request order.
    pub fn screens(&self) -> Vec<S> {
        self.requests.iter().map(|r| r.screen.clone()).collect()
    }

    /// The methods, in request order.
    pub fn methods(&self) -> impl Iterator<Item = &Method> {
        self.requests.iter().map(|r| &r.method)
    }

    /// The set of method tags occurring anywhere in the flow.
    pub fn tags(&self) -> MethodTags {
        self.requests
            .iter()
            .fold(MethodTags::empty(), |acc, r| acc | r.tag().as_flag())
    }

    /// True if every request is a push. An empty flow is not all-push.
    pub fn is_all_push(&self) -> bool {
        self.tags() == MethodTags::PUSH
    }

    /// Index of the first request whose method is not a push.
    pub fn first_non_push(&self) -> Option<usize> {
        self.requests.iter().position(|r| !r.method.is_push())
    }
}

impl<S: Screen> core::ops::Index<usize> for Flow<S> {
    type Output = Request<S>;

    fn index(&self, index: usize) -> &Request<S> {
        &self.requests[index]
    }
}

impl<S: Screen> Default for Flow<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: Screen> From<Vec<Request<S>>> for Flow<S> {
    fn from(requests: Vec<Request<S>>) -> Self {
        Self { requests }
    }
}

impl<S: Screen> FromIterator<Request<S>> for Flow<S> {
    fn from_iter<I: IntoIterator<Item = Request<S>>>(iter: I) -> Self {
        Self {
            requests: iter.into_iter().collect(),
        }
    }
}

impl<S: Screen> IntoIterator for Flow<S> {
    type Item = Request<S>;
    type IntoIter = alloc::vec::IntoIter<Request<S>>;

    fn into_iter(self) -> Self::IntoIter {
        self.requests.into_iter()
    }
}

impl<'a, S: Screen> IntoIterator for &'a Flow<S> {
    type Item = &'a Request<S>;
    type IntoIter = core::slice::Iter<'a, Request<S>>;

    fn into_iter(self) -> Self::IntoIter {
        self.requests.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    #[derive(Clone, Debug, PartialEq, Eq, Hash)]
    enum Page {
        Catalog,
        Cart,
        Checkout,
    }

    impl Screen for Page {
        type Id = u8;
        fn id(&self) -> u8 {
            match self {
                Self::Catalog => 0,
                Self::Cart => 1,
                Self::Checkout => 2,
            }
        }
    }

    #[test]
    fn derived_views() {
        let flow: Flow<Page> = vec![
            Request::push(Page::Catalog),
            Request::sheet(Page::Cart),
            Request::modal(Page::Checkout),
        ]
        .into();
        assert_eq!(flow.len(), 3);
        assert_eq!(
            flow.screens(),
            vec![Page::Catalog, Page::Cart, Page::Checkout]
        );
        assert_eq!(
            flow.tags(),
            MethodTags::PUSH | MethodTags::SHEET | MethodTags::MODAL
        );
        assert_eq!(flow.first_non_push(), Some(1));
        assert!(!flow.is_all_push());
    }

    #[test]
    fn all_push_detection() {
        let flow: Flow<Page> = vec![Request::push(Page::Catalog), Request::push(Page::Cart)].into();
        assert!(flow.is_all_push());
        assert_eq!(flow.first_non_push(), None);
    }

    #[test]
    fn empty_flow_is_not_all_push() {
        let flow: Flow<Page> = Flow::new();
        assert!(flow.is_empty());
        assert!(!flow.is_all_push());
        assert_eq!(flow.tags(), MethodTags::empty());
    }

    #[test]
    fn overlay_first_means_index_zero() {
        let flow: Flow<Page> = vec![Request::modal(Page::Cart), Request::push(Page::Checkout)].into();
        assert_eq!(flow.first_non_push(), Some(0));
    }
}

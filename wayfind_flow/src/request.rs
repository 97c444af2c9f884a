// Copyright 2026 the Wayfind Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A single navigation request: one screen plus the method used to reach it.

use core::hash::{Hash, Hasher};

use crate::method::{Method, MethodTag, SheetOptions};
use crate::screen::Screen;

/// One requested navigation.
///
/// Equality and hashing combine the screen with the method *tag*; the sheet
/// payload never participates (see [`Method`]).
#[derive(Clone, Debug, PartialEq)]
pub struct Request<S: Screen> {
    /// The screen to navigate to.
    pub screen: S,
    /// How the screen should be reached.
    pub method: Method,
}

impl<S: Screen> Request<S> {
    /// Create a request with an explicit method.
    pub fn new(screen: S, method: Method) -> Self {
        Self { screen, method }
    }

    /// Forward-push request.
    pub fn push(screen: S) -> Self {
        Self::new(screen, Method::Push)
    }

    /// Sheet request with default options.
    pub fn sheet(screen: S) -> Self {
        Self::new(screen, Method::sheet())
    }

    /// Sheet request with explicit options.
    pub fn sheet_with(screen: S, options: SheetOptions) -> Self {
        Self::new(screen, Method::Sheet(options))
    }

    /// Full-screen modal request.
    pub fn modal(screen: S) -> Self {
        Self::new(screen, Method::Modal)
    }

    /// The method tag of this request.
    pub fn tag(&self) -> MethodTag {
        self.method.tag()
    }
}

impl<S: Screen + Hash> Hash for Request<S> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.screen.hash(state);
        self.method.hash(state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::method::{Detents, SheetOptions};

    #[derive(Clone, Debug, PartialEq, Eq, Hash)]
    enum Page {
        Home,
        Detail(u32),
    }

    impl Screen for Page {
        type Id = u32;
        fn id(&self) -> u32 {
            match self {
                Self::Home => 0,
                Self::Detail(n) => *n,
            }
        }
    }

    #[test]
    fn equality_is_screen_plus_tag() {
        let a = Request::sheet(Page::Home);
        let b = Request::sheet_with(
            Page::Home,
            SheetOptions {
                detents: Detents::MEDIUM,
                shows_drag_handle: true,
                on_dismiss: None,
            },
        );
        assert_eq!(a, b, "payload must not affect equality");
        assert_ne!(a, Request::modal(Page::Home));
        assert_ne!(a, Request::sheet(Page::Detail(1)));
    }

    #[test]
    fn constructors_set_tags() {
        assert_eq!(Request::push(Page::Home).tag(), MethodTag::Push);
        assert_eq!(Request::sheet(Page::Home).tag(), MethodTag::Sheet);
        assert_eq!(Request::modal(Page::Home).tag(), MethodTag::Modal);
    }
}

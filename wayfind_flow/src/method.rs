// Copyright 2026 the Wayfind Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Navigation methods: the tagged union deciding how a screen is reached.
//!
//! ## Equality
//!
//! [`Method`] equality and hashing operate on the tag only: two [`Method::Sheet`]s
//! with different [`SheetOptions`] compare equal.
//! Flow analysis (push-run detection, tag summaries) asks "is this the same kind
//! of navigation?", never "is this the same presentation payload?".
//! The payload is consulted only at dispatch time.

use alloc::rc::Rc;
use core::hash::{Hash, Hasher};

/// Shared handle to a sheet's dismissal callback.
///
/// Reference-counted so [`SheetOptions`] stays cloneable; the coordinator calls
/// it when the sheet presentation is cleared.
pub type OnDismiss = Rc<dyn Fn()>;

bitflags::bitflags! {
    /// Display sizes a sheet may rest at.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct Detents: u8 {
        /// Roughly half the screen.
        const MEDIUM = 0b0000_0001;
        /// Nearly the full screen.
        const LARGE  = 0b0000_0010;
    }
}

impl Default for Detents {
    fn default() -> Self {
        Self::LARGE
    }
}

/// Presentation payload for [`Method::Sheet`].
///
/// Never consulted when comparing methods or requests.
#[derive(Clone, Default)]
pub struct SheetOptions {
    /// Display sizes the sheet may rest at.
    pub detents: Detents,
    /// Whether the sheet shows a drag handle hinting swipe-to-dismiss.
    pub shows_drag_handle: bool,
    /// Invoked when the sheet presentation is cleared.
    pub on_dismiss: Option<OnDismiss>,
}

impl core::fmt::Debug for SheetOptions {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("SheetOptions")
            .field("detents", &self.detents)
            .field("shows_drag_handle", &self.shows_drag_handle)
            .field("on_dismiss", &self.on_dismiss.as_ref().map(|_| ".."))
            .finish()
    }
}

/// How a screen is reached.
#[derive(Clone, Debug)]
pub enum Method {
    /// Forward navigation onto the current stack.
    Push,
    /// Partial-screen overlay that can rest at one of several detents.
    Sheet(SheetOptions),
    /// Full-screen overlay.
    Modal,
}

impl Method {
    /// Convenience constructor for a sheet with default options.
    pub fn sheet() -> Self {
        Self::Sheet(SheetOptions::default())
    }

    /// The payload-free discriminant of this method.
    pub fn tag(&self) -> MethodTag {
        match self {
            Self::Push => MethodTag::Push,
            Self::Sheet(_) => MethodTag::Sheet,
            Self::Modal => MethodTag::Modal,
        }
    }

    /// True for [`Method::Push`].
    pub fn is_push(&self) -> bool {
        matches!(self, Self::Push)
    }
}

impl Default for Method {
    fn default() -> Self {
        Self::Push
    }
}

// Tag-only comparison: sheets with different payloads are the same kind of
// navigation.
impl PartialEq for Method {
    fn eq(&self, other: &Self) -> bool {
        self.tag() == other.tag()
    }
}

impl Eq for Method {}

impl Hash for Method {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.tag().hash(state);
    }
}

/// Payload-free discriminant of a [`Method`].
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum MethodTag {
    /// Forward navigation.
    Push,
    /// Partial-screen overlay.
    Sheet,
    /// Full-screen overlay.
    Modal,
}

impl MethodTag {
    /// This tag as a single-bit [`MethodTags`] set.
    pub fn as_flag(self) -> MethodTags {
        match self {
            Self::Push => MethodTags::PUSH,
            Self::Sheet => MethodTags::SHEET,
            Self::Modal => MethodTags::MODAL,
        }
    }
}

bitflags::bitflags! {
    /// Set of method tags occurring in a flow.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct MethodTags: u8 {
        /// At least one push request.
        const PUSH  = 0b0000_0001;
        /// At least one sheet request.
        const SHEET = 0b0000_0010;
        /// At least one modal request.
        const MODAL = 0b0000_0100;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::rc::Rc;
    use core::cell::Cell;

    #[test]
    fn equality_ignores_sheet_payload() {
        let plain = Method::sheet();
        let fancy = Method::Sheet(SheetOptions {
            detents: Detents::MEDIUM | Detents::LARGE,
            shows_drag_handle: true,
            on_dismiss: None,
        });
        assert_eq!(plain, fancy);
        assert_ne!(plain, Method::Modal);
        assert_ne!(Method::Push, Method::Modal);
    }

    #[test]
    fn tags_round_trip_to_flags() {
        assert_eq!(Method::Push.tag().as_flag(), MethodTags::PUSH);
        assert_eq!(Method::sheet().tag().as_flag(), MethodTags::SHEET);
        assert_eq!(Method::Modal.tag().as_flag(), MethodTags::MODAL);
    }

    #[test]
    fn default_sheet_options() {
        let opts = SheetOptions::default();
        assert_eq!(opts.detents, Detents::LARGE);
        assert!(!opts.shows_drag_handle);
        assert!(opts.on_dismiss.is_none());
    }

    #[test]
    fn on_dismiss_is_cloneable_and_callable() {
        let fired = Rc::new(Cell::new(0_u32));
        let observed = Rc::clone(&fired);
        let opts = SheetOptions {
            on_dismiss: Some(Rc::new(move || observed.set(observed.get() + 1))),
            ..SheetOptions::default()
        };
        let copy = opts.clone();
        if let Some(cb) = &copy.on_dismiss {
            cb();
        }
        assert_eq!(fired.get(), 1);
    }
}

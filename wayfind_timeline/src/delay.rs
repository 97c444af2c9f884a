// Copyright 2026 the Wayfind Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Millisecond delay values.

/// A delay in whole milliseconds.
///
/// `no_std` stand-in for `core::time::Duration` at the precision this crate
/// needs. Arithmetic saturates; there is no overflow panic path.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct Delay(u64);

impl Delay {
    /// No delay.
    pub const ZERO: Self = Self(0);

    /// Create a delay from milliseconds.
    pub const fn from_millis(ms: u64) -> Self {
        Self(ms)
    }

    /// This delay in milliseconds.
    pub const fn as_millis(self) -> u64 {
        self.0
    }

    /// True for [`Delay::ZERO`].
    pub const fn is_zero(self) -> bool {
        self.0 == 0
    }

    /// Saturating addition.
    pub const fn saturating_add(self, other: Self) -> Self {
        Self(self.0.saturating_add(other.0))
    }

    /// Saturating subtraction.
    pub const fn saturating_sub(self, other: Self) -> Self {
        Self(self.0.saturating_sub(other.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn saturating_arithmetic() {
        let a = Delay::from_millis(u64::MAX);
        assert_eq!(a.saturating_add(Delay::from_millis(1)), a);
        assert_eq!(
            Delay::ZERO.saturating_sub(Delay::from_millis(5)),
            Delay::ZERO
        );
        assert_eq!(
            Delay::from_millis(10).saturating_sub(Delay::from_millis(4)),
            Delay::from_millis(6)
        );
    }

    #[test]
    fn ordering() {
        assert!(Delay::from_millis(1) > Delay::ZERO);
        assert!(Delay::from_millis(100) < Delay::from_millis(625));
    }
}

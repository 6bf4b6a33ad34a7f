//! [`ExchangeMask`]: which members of a data object take part in a
//! ghost/global exchange.

use std::fmt;
use std::ops::{BitAnd, BitOr, BitOrAssign};

/// Bitmask selecting the members exchanged by
/// [`global_to_ghost`](crate::GlobalEvaluationData::global_to_ghost) and
/// [`ghost_to_global`](crate::GlobalEvaluationData::ghost_to_global).
///
/// Objects that hold a single member are free to ignore the mask.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct ExchangeMask(u8);

impl ExchangeMask {
    /// Nothing is exchanged.
    pub const NONE: Self = Self(0);
    /// The solution vector.
    pub const X: Self = Self(1);
    /// The time derivative of the solution.
    pub const DXDT: Self = Self(1 << 1);
    /// The residual vector.
    pub const F: Self = Self(1 << 2);
    /// The Jacobian matrix.
    pub const MAT: Self = Self(1 << 3);
    /// Every member.
    pub const ALL: Self = Self(0b1111);

    const NAMES: [(Self, &'static str); 4] = [
        (Self::X, "X"),
        (Self::DXDT, "DxDt"),
        (Self::F, "F"),
        (Self::MAT, "Mat"),
    ];

    /// Build a mask from raw bits, discarding unknown bits.
    pub fn from_bits_truncate(bits: u8) -> Self {
        Self(bits & Self::ALL.0)
    }

    /// Raw bit representation.
    pub fn bits(self) -> u8 {
        self.0
    }

    /// True if every bit in `other` is also set in `self`.
    pub fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }

    /// True if no member is selected.
    pub fn is_empty(self) -> bool {
        self.0 == 0
    }
}

impl BitOr for ExchangeMask {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

impl BitOrAssign for ExchangeMask {
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}

impl BitAnd for ExchangeMask {
    type Output = Self;

    fn bitand(self, rhs: Self) -> Self {
        Self(self.0 & rhs.0)
    }
}

impl fmt::Display for ExchangeMask {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return write!(f, "none");
        }
        let mut first = true;
        for (flag, name) in Self::NAMES {
            if self.contains(flag) {
                if !first {
                    write!(f, "|")?;
                }
                write!(f, "{name}")?;
                first = false;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn all_contains_every_member() {
        for (flag, _) in ExchangeMask::NAMES {
            assert!(ExchangeMask::ALL.contains(flag));
        }
        assert_eq!(
            ExchangeMask::X | ExchangeMask::DXDT | ExchangeMask::F | ExchangeMask::MAT,
            ExchangeMask::ALL
        );
    }

    #[test]
    fn none_is_empty_and_default() {
        assert!(ExchangeMask::NONE.is_empty());
        assert_eq!(ExchangeMask::default(), ExchangeMask::NONE);
        assert!(ExchangeMask::X.contains(ExchangeMask::NONE));
    }

    #[test]
    fn display_lists_members_in_order() {
        assert_eq!((ExchangeMask::F | ExchangeMask::X).to_string(), "X|F");
        assert_eq!(ExchangeMask::ALL.to_string(), "X|DxDt|F|Mat");
        assert_eq!(ExchangeMask::NONE.to_string(), "none");
    }

    #[test]
    fn unknown_bits_are_truncated() {
        assert_eq!(ExchangeMask::from_bits_truncate(0xFF), ExchangeMask::ALL);
        assert_eq!(ExchangeMask::from_bits_truncate(0x10), ExchangeMask::NONE);
    }

    #[test]
    fn or_assign_accumulates() {
        let mut m = ExchangeMask::NONE;
        m |= ExchangeMask::MAT;
        m |= ExchangeMask::F;
        assert!(m.contains(ExchangeMask::F | ExchangeMask::MAT));
        assert!(!m.contains(ExchangeMask::X));
    }

    proptest! {
        #[test]
        fn union_contains_both_operands(a in 0u8..16, b in 0u8..16) {
            let a = ExchangeMask::from_bits_truncate(a);
            let b = ExchangeMask::from_bits_truncate(b);
            prop_assert!((a | b).contains(a));
            prop_assert!((a | b).contains(b));
            prop_assert_eq!((a & b) | a, a);
        }
    }
}

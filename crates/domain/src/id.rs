//! Typed identifier newtypes backed by storage-assigned integers.

use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

macro_rules! define_id {
    ($(#[doc = $doc:expr])* $name:ident) => {
        $(#[doc = $doc])*
        #[derive(
            Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
        )]
        #[serde(transparent)]
        pub struct $name(i64);

        impl $name {
            /// Wrap a raw row identity.
            #[must_use]
            pub fn new(value: i64) -> Self {
                Self(value)
            }

            /// Access the raw row identity.
            #[must_use]
            pub fn get(self) -> i64 {
                self.0
            }

            /// Whether this value can name a stored row at all.
            #[must_use]
            pub fn is_positive(self) -> bool {
                self.0 > 0
            }
        }

        impl From<i64> for $name {
            fn from(value: i64) -> Self {
                Self(value)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                self.0.fmt(f)
            }
        }

        impl FromStr for $name {
            type Err = ParseIntError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                s.parse().map(Self)
            }
        }
    };
}

define_id!(
    /// Identity of a [`Field`](crate::field::Field).
    FieldId
);

define_id!(
    /// Identity of a [`Sowing`](crate::sowing::Sowing).
    SowingId
);

define_id!(
    /// Identity of a [`Harvest`](crate::harvest::Harvest).
    HarvestId
);

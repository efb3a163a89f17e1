//! Strongly typed, zero-cost identifier wrappers.
//!
//! Ids are the data store's primary keys.  Officers and receivers share the
//! `NodeId` space: the surrounding data model keeps their keys disjoint, and
//! the graph builder warns when that assumption is broken.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Generate a typed ID wrapper around a primitive integer.
macro_rules! typed_id {
    ($(#[$attr:meta])* $vis:vis struct $name:ident($inner:ty);) => {
        $(#[$attr])*
        #[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug, Serialize, Deserialize)]
        #[serde(transparent)]
        $vis struct $name(pub $inner);

        impl $name {
            /// Sentinel meaning "no valid ID".
            pub const INVALID: $name = $name(<$inner>::MAX);

            #[inline(always)]
            pub fn get(self) -> $inner {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}({})", stringify!($name), self.0)
            }
        }

        impl From<$inner> for $name {
            #[inline(always)]
            fn from(n: $inner) -> $name {
                $name(n)
            }
        }
    };
}

typed_id! {
    /// Primary key of an officer or receiver, used as a graph vertex id.
    pub struct NodeId(u32);
}

typed_id! {
    /// Primary key of a distribution (a pending delivery to a receiver).
    pub struct DistributionId(u32);
}

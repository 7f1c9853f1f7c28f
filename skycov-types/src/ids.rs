//! Strongly-typed identifiers for rows owned by the plan/request store.

use core::fmt;
use serde::{Deserialize, Serialize};

macro_rules! id_type {
    ($(#[$meta:meta])* $name:ident, $label:literal) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(pub i64);

        impl $name {
            /// Returns the raw numeric identifier.
            #[must_use]
            pub const fn get(self) -> i64 {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{} {}", $label, self.0)
            }
        }

        impl From<i64> for $name {
            fn from(v: i64) -> Self {
                Self(v)
            }
        }
    };
}

id_type!(
    /// Identifier of an observation plan (a decided list of pointings).
    PlanId,
    "plan"
);
id_type!(
    /// Identifier of the observation-plan request a plan answers.
    RequestId,
    "request"
);
id_type!(
    /// Identifier of a telescope instrument.
    InstrumentId,
    "instrument"
);
id_type!(
    /// Identifier of a localization (probability sky-map).
    LocalizationId,
    "localization"
);
id_type!(
    /// Identifier of an instrument field (a fixed pointing footprint).
    FieldId,
    "field"
);

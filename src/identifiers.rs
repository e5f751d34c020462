//! Identifier types for states and actions.
//!
//! Both are opaque strings supplied by the environment. They must be stable:
//! two descriptions of the same state (or action) must produce identical
//! identifiers, since they are the only keys of the value table.

use std::{borrow::Borrow, fmt};

use serde::{Deserialize, Serialize};

macro_rules! table_key {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            pub fn new(value: impl Into<String>) -> Self {
                Self(value.into())
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        // Lets tests and callers compare against literals.
        impl PartialEq<&str> for $name {
            fn eq(&self, other: &&str) -> bool {
                self.0 == *other
            }
        }

        impl Borrow<str> for $name {
            fn borrow(&self) -> &str {
                &self.0
            }
        }
    };
}

table_key! {
    /// Stable identifier of an environment state.
    ///
    /// ```
    /// use bayesq::identifiers::StateId;
    ///
    /// let state = StateId::new("corridor:3/8");
    /// assert_eq!(state.as_str(), "corridor:3/8");
    /// ```
    StateId
}

table_key! {
    /// Stable identifier of an action.
    ActionId
}

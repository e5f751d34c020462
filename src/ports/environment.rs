//! Environment port - capabilities the agent needs from states and actions
//!
//! The agent is polymorphic over any state/action representation. It only
//! ever extracts identifiers, enumerates possible actions, checks
//! compatibility and asks a state to apply an action. States and actions are
//! borrowed per call and never retained.

use crate::identifiers::{ActionId, StateId};

/// An action that can be applied to a [`State`].
pub trait Action {
    /// Stable identifier; equal actions must produce equal ids.
    fn id(&self) -> ActionId;
}

/// A state of the environment.
///
/// # Examples
///
/// ```
/// use bayesq::identifiers::{ActionId, StateId};
/// use bayesq::ports::{Action, State};
///
/// #[derive(Clone)]
/// struct Flip;
///
/// impl Action for Flip {
///     fn id(&self) -> ActionId {
///         ActionId::new("flip")
///     }
/// }
///
/// struct Coin(bool);
///
/// impl State for Coin {
///     type Action = Flip;
///     type Error = std::convert::Infallible;
///
///     fn id(&self) -> StateId {
///         StateId::new(if self.0 { "heads" } else { "tails" })
///     }
///
///     fn possible_actions(&self) -> Vec<Flip> {
///         vec![Flip]
///     }
///
///     fn action_is_compatible(&self, _action: &Flip) -> bool {
///         true
///     }
///
///     fn apply(&self, _action: &Flip) -> Result<Self, Self::Error> {
///         Ok(Coin(!self.0))
///     }
/// }
/// ```
pub trait State: Sized {
    type Action: Action + Clone;

    /// Domain-specific failure of [`State::apply`].
    type Error: std::error::Error + Send + Sync + 'static;

    /// Stable identifier; equal states must produce equal ids.
    fn id(&self) -> StateId;

    /// Actions applicable to this state, in a stable order.
    fn possible_actions(&self) -> Vec<Self::Action>;

    /// Whether `action` may be applied to this state.
    fn action_is_compatible(&self, action: &Self::Action) -> bool;

    /// Apply `action`, producing the resulting state.
    fn apply(&self, action: &Self::Action) -> Result<Self, Self::Error>;
}

//! Shared fixtures for the bayesq integration tests.

#![allow(dead_code)]

use bayesq::{
    identifiers::{ActionId, StateId},
    ports::{Action, State},
};

/// Action named by a static label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Label(pub &'static str);

impl Action for Label {
    fn id(&self) -> ActionId {
        ActionId::new(self.0)
    }
}

#[derive(Debug, thiserror::Error)]
#[error("action '{0}' cannot be applied")]
pub struct Rejected(pub &'static str);

/// A state with a fixed id and action list.
///
/// Applying any listed action moves to `next`, except actions named
/// `"broken"` which fail with [`Rejected`].
#[derive(Debug, Clone)]
pub struct Fixture {
    pub id: &'static str,
    pub actions: Vec<&'static str>,
    pub next: &'static str,
}

impl Fixture {
    pub fn new(id: &'static str, actions: &[&'static str]) -> Self {
        Self {
            id,
            actions: actions.to_vec(),
            next: "next",
        }
    }

    pub fn leading_to(mut self, next: &'static str) -> Self {
        self.next = next;
        self
    }
}

impl State for Fixture {
    type Action = Label;
    type Error = Rejected;

    fn id(&self) -> StateId {
        StateId::new(self.id)
    }

    fn possible_actions(&self) -> Vec<Label> {
        self.actions.iter().copied().map(Label).collect()
    }

    fn action_is_compatible(&self, action: &Label) -> bool {
        self.actions.contains(&action.0)
    }

    fn apply(&self, action: &Label) -> Result<Self, Rejected> {
        if action.0 == "broken" {
            return Err(Rejected(action.0));
        }
        Ok(Fixture {
            id: self.next,
            actions: self.actions.clone(),
            next: self.next,
        })
    }
}

pub fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-12,
        "expected {expected}, got {actual}"
    );
}

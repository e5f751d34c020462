//! End-to-end behaviour of learning, weighting and recommendation.

mod common;

use bayesq::{
    ActionId, BayesianAgent, Error, StateId, TransitionError,
    adapters::JsonRepository,
    app::{AgentConfig, App},
    ports::{Action, State},
};
use common::{Fixture, Label, Rejected, assert_close};

#[test]
fn test_two_updates_produce_golden_weights() {
    let mut agent = BayesianAgent::new(1.0, 0.0, 10);
    let a = Fixture::new("A", &["X", "Y", "Z"]);
    let b = Fixture::new("B", &["X", "Y", "Z"]);

    agent.learn(Some(&a), Some(&Label("X")), &b, 1.0);
    agent.learn(Some(&a), Some(&Label("Y")), &b, 1.0);

    let state = StateId::new("A");
    let x = agent.stats(&state, &ActionId::new("X")).unwrap();
    let y = agent.stats(&state, &ActionId::new("Y")).unwrap();
    let z = agent.stats(&state, &ActionId::new("Z")).unwrap();

    assert_eq!((x.calls, x.q_raw), (1, 1.0));
    assert_eq!((y.calls, y.q_raw), (1, 1.0));
    assert_eq!((z.calls, z.q_raw), (0, 0.0));
    assert_close(x.q_weighted, 0.6969696969696969);
    assert_close(y.q_weighted, 0.6969696969696969);
    assert_close(z.q_weighted, 0.6666666666666666);

    // The resulting state was only looked at, never recorded.
    assert!(!agent.q_table().contains_state(&StateId::new("B")));
}

#[test]
fn test_first_update_primes_siblings() {
    let mut agent = BayesianAgent::new(1.0, 0.0, 10);
    let a = Fixture::new("A", &["X", "Y", "Z"]);
    let b = Fixture::new("B", &["X"]);

    agent.learn(Some(&a), Some(&Label("X")), &b, 1.0);

    let state = StateId::new("A");
    assert_eq!(agent.q_table().actions(&state).unwrap().len(), 3);
    let y = agent.stats(&state, &ActionId::new("Y")).unwrap();
    assert!(y.is_unobserved());
    // Only X was recorded before the pass, so the mean is its raw value.
    assert_close(y.q_weighted, 1.0);
    assert_close(agent.q_value(&state, &ActionId::new("X")), 1.0);
}

#[test]
fn test_bootstrap_learn_leaves_table_untouched() {
    let mut agent = BayesianAgent::new(0.5, 0.9, 3);
    let start = Fixture::new("start", &["go"]);

    agent.learn::<Fixture>(None, None, &start, 5.0);
    agent.learn(None, Some(&Label("go")), &start, 5.0);

    assert!(agent.q_table().is_empty());
}

#[test]
fn test_recommend_on_empty_state_names_it() {
    let mut agent = BayesianAgent::new(0.5, 0.9, 3);
    let terminal = Fixture::new("testStateID", &[]);

    match agent.recommend_action(&terminal) {
        Err(Error::NoActions { state }) => assert_eq!(state, "testStateID"),
        other => panic!("expected NoActions, got {other:?}"),
    }
}

#[test]
fn test_recommend_prefers_rewarded_action() {
    let mut agent = BayesianAgent::new(0.5, 0.0, 1).with_seed(3);
    let a = Fixture::new("A", &["X", "Y"]);
    let b = Fixture::new("B", &[]);

    agent.learn(Some(&a), Some(&Label("Y")), &b, 1.0);
    agent.learn(Some(&a), Some(&Label("X")), &b, -1.0);

    for _ in 0..10 {
        assert_eq!(agent.recommend_action(&a).unwrap(), Label("Y"));
    }
}

#[test]
fn test_tie_breaker_sees_ties_in_offered_order() {
    let seen = std::sync::Arc::new(std::sync::Mutex::new(Vec::new()));
    let record = std::sync::Arc::clone(&seen);
    let mut agent = BayesianAgent::new(0.5, 0.9, 1).with_tie_breaker(move |n: usize| {
        record.lock().unwrap().push(n);
        2
    });
    let state = Fixture::new("S", &["a", "b", "c"]);

    // All primed to zero: three-way tie, index 2 is the third offered action.
    assert_eq!(agent.recommend_action(&state).unwrap(), Label("c"));
    assert_eq!(*seen.lock().unwrap(), vec![3]);
}

#[test]
fn test_tie_breaker_not_consulted_for_single_best() {
    let mut agent = BayesianAgent::new(1.0, 0.0, 0)
        .with_tie_breaker(|_: usize| -> usize { panic!("no tie expected") });
    let a = Fixture::new("A", &["X", "Y"]);
    agent.learn(Some(&a), Some(&Label("X")), &Fixture::new("B", &[]), 1.0);

    assert_eq!(agent.recommend_action(&a).unwrap(), Label("X"));
}

#[test]
fn test_out_of_range_tie_index_is_clamped() {
    let mut agent = BayesianAgent::new(0.5, 0.9, 1).with_tie_breaker(|_: usize| 99);
    let state = Fixture::new("S", &["a", "b"]);
    assert_eq!(agent.recommend_action(&state).unwrap(), Label("b"));
}

#[test]
fn test_seeded_agents_agree() {
    let state = Fixture::new("S", &["a", "b", "c", "d"]);
    let mut first = BayesianAgent::new(0.5, 0.9, 1).with_seed(42);
    let mut second = BayesianAgent::new(0.5, 0.9, 1).with_seed(42);

    for _ in 0..20 {
        assert_eq!(
            first.recommend_action(&state).unwrap(),
            second.recommend_action(&state).unwrap()
        );
    }
}

#[test]
fn test_weighting_pass_is_idempotent() {
    let mut agent = BayesianAgent::new(0.7, 0.9, 4);
    let a = Fixture::new("A", &["X", "Y", "Z"]);
    let b = Fixture::new("B", &["X"]);
    agent.learn(Some(&a), Some(&Label("X")), &b, 0.3);
    agent.learn(Some(&a), Some(&Label("Z")), &b, -0.8);

    agent.apply_action_weights(&a);
    let once = agent.snapshot();
    agent.apply_action_weights(&a);
    assert_eq!(once, agent.snapshot());
}

#[test]
fn test_transition_accepts_compatible_action() {
    let agent = BayesianAgent::new(0.5, 0.9, 1);
    let state = Fixture::new("A", &["go"]).leading_to("B");

    let next = agent.transition(&state, &Label("go")).unwrap();
    assert_eq!(next.id(), "B");
}

#[test]
fn test_transition_rejects_incompatible_action() {
    let agent = BayesianAgent::new(0.5, 0.9, 1);
    let state = Fixture::new("A", &["go"]);

    let err = agent.transition(&state, &Label("stay")).unwrap_err();
    assert!(matches!(
        err,
        TransitionError::IncompatibleAction { ref state, ref action }
            if state == &"A" && action == &"stay"
    ));
    assert_eq!(
        err.to_string(),
        "action 'stay' is not compatible with state 'A'"
    );
}

#[test]
fn test_transition_passes_apply_error_through() {
    let agent = BayesianAgent::new(0.5, 0.9, 1);
    let state = Fixture::new("A", &["broken"]);

    match agent.transition(&state, &Label("broken")) {
        Err(TransitionError::Apply(Rejected(name))) => assert_eq!(name, "broken"),
        other => panic!("expected apply error, got {other:?}"),
    }
}

#[test]
fn test_snapshot_restore_round_trip() {
    let mut agent = BayesianAgent::new(0.5, 0.9, 2);
    let a = Fixture::new("A", &["X", "Y"]);
    agent.learn(Some(&a), Some(&Label("X")), &Fixture::new("B", &["X"]), 1.0);
    let saved = agent.snapshot();

    let mut fresh = BayesianAgent::new(0.5, 0.9, 2);
    fresh.restore(saved.clone());
    assert_eq!(fresh.q_table(), &saved);

    // Later learning must not leak into the snapshot.
    agent.learn(Some(&a), Some(&Label("Y")), &Fixture::new("B", &["X"]), 1.0);
    assert_ne!(agent.snapshot(), saved);
    assert_eq!(fresh.q_table(), &saved);
}

#[test]
fn test_json_model_round_trip() {
    let mut agent = BayesianAgent::new(0.5, 0.9, 2);
    let a = Fixture::new("A", &["X", "Y"]);
    agent.learn(Some(&a), Some(&Label("X")), &Fixture::new("B", &["X"]), 1.0);

    let json = agent.to_json().unwrap();
    assert!(json.contains("\"qWeighted\""));

    let mut restored = BayesianAgent::new(0.1, 0.1, 1);
    restored.load_json(&json).unwrap();
    assert_eq!(restored.q_table(), agent.q_table());
    assert_eq!(Label("X").id(), "X");
}

#[test]
fn test_nan_reward_survives_json_round_trip() {
    let mut agent = BayesianAgent::new(0.5, 0.9, 2);
    let a = Fixture::new("A", &["X", "Y"]);
    let b = Fixture::new("B", &["X"]);
    agent.learn(Some(&a), Some(&Label("X")), &b, f64::NAN);

    let state = StateId::new("A");
    let x = ActionId::new("X");
    assert!(agent.stats(&state, &x).unwrap().q_raw.is_nan());

    let json = agent.to_json().unwrap();
    let mut restored = BayesianAgent::new(0.5, 0.9, 2);
    restored.load_json(&json).unwrap();

    let loaded = restored.stats(&state, &x).unwrap();
    assert_eq!(loaded.calls, 1);
    assert_eq!(loaded.q_raw, 0.0);
    assert_eq!(loaded.q_weighted, agent.q_value(&state, &x));

    // Both agents rank the actions identically afterwards.
    agent.apply_action_weights(&a);
    restored.apply_action_weights(&a);
    for action in ["X", "Y"] {
        let id = ActionId::new(action);
        assert_eq!(agent.q_value(&state, &id), restored.q_value(&state, &id));
    }
}

#[test]
fn test_nan_reward_survives_json_model_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nan.json");
    let app = App::for_testing()
        .with_repository(JsonRepository::new())
        .build();

    let mut agent = app.create_agent(AgentConfig::default()).unwrap();
    let a = Fixture::new("A", &["X", "Y"]);
    agent.learn(Some(&a), Some(&Label("X")), &Fixture::new("B", &[]), f64::NAN);
    app.save_agent(&agent, &path).unwrap();

    let loaded = app.load_agent(&path).unwrap();
    let stats = loaded
        .stats(&StateId::new("A"), &ActionId::new("X"))
        .unwrap();
    assert_eq!(stats.calls, 1);
    assert_eq!(stats.q_raw, 0.0);
}

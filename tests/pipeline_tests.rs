//! Training pipeline tests on the corridor environment.

use bayesq::{
    Action, BayesianAgent, State,
    environments::{Corridor, GoalReward, Step},
    pipeline::{SharedMetrics, Trainer, TrainingConfig},
};

fn train(length: usize, priming: u32, seed: u64) -> (BayesianAgent, SharedMetrics) {
    let metrics = SharedMetrics::new();
    let mut agent = BayesianAgent::new(0.5, 0.9, priming).with_seed(seed);
    let mut trainer = Trainer::new(
        TrainingConfig {
            episodes: 200,
            max_steps: 100,
        },
        GoalReward::default(),
    )
    .with_observer(metrics.clone());

    let result = trainer.train(&mut agent, &Corridor::new(length)).unwrap();
    assert_eq!(result.episodes, 200);
    (agent, metrics)
}

#[test]
fn test_agent_learns_to_walk_right() {
    for seed in [1, 7, 42] {
        let (mut agent, metrics) = train(5, 1, seed);

        for position in 0..4 {
            let state = Corridor::at(5, position).unwrap();
            assert_eq!(
                agent.recommend_action(&state).unwrap(),
                Step::Right,
                "seed {seed}, position {position}"
            );
        }

        let lengths = metrics.with(|m| m.episode_lengths());
        assert_eq!(lengths.len(), 200);
        assert_eq!(*lengths.last().unwrap(), 4);
    }
}

#[test]
fn test_strong_prior_still_converges() {
    let (mut agent, _) = train(8, 10, 3);
    let mut state = Corridor::new(8);
    let mut steps = 0;
    while !state.is_goal() {
        let action = agent.recommend_action(&state).unwrap();
        state = agent.transition(&state, &action).unwrap();
        steps += 1;
        assert!(steps <= 7, "greedy walk took a detour");
    }
}

#[test]
fn test_every_episode_reaches_goal_with_generous_budget() {
    let (_, metrics) = train(4, 2, 11);
    metrics.with(|m| {
        assert!(m.episodes().iter().all(|e| e.reached_terminal));
        assert!(m.steps().iter().all(|s| s.state.as_str().starts_with("corridor:")));
    });
}

#[test]
fn test_step_budget_cuts_episode_short() {
    let mut agent = BayesianAgent::new(0.5, 0.9, 1).with_seed(5);
    let mut trainer = Trainer::new(
        TrainingConfig {
            episodes: 1,
            max_steps: 2,
        },
        GoalReward::default(),
    );

    let summary = trainer
        .run_episode(&mut agent, 0, Corridor::new(10))
        .unwrap();
    assert_eq!(summary.steps, 2);
    assert!(!summary.reached_terminal);
}

#[test]
fn test_closure_rewarder() {
    let mut agent = BayesianAgent::new(1.0, 0.0, 0).with_seed(9);
    let mut trainer = Trainer::new(
        TrainingConfig {
            episodes: 1,
            max_steps: 10,
        },
        |_: &Corridor, _: &Step, next: &Corridor| next.position() as f64,
    );

    let summary = trainer.run_episode(&mut agent, 0, Corridor::new(2)).unwrap();
    assert_eq!(summary.steps, 1);
    assert!(summary.reached_terminal);
    assert_eq!(summary.total_reward, 1.0);

    let start = Corridor::new(2).id();
    assert_eq!(agent.q_value(&start, &Step::Right.id()), 1.0);
}

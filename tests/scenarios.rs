//! End-to-end scenarios: fixed seeds, edge cases, and the statistical shape of the model.

use rand::rngs::StdRng;
use rand::SeedableRng;
use secretary::{
    mean_search_length, probability_of_best, probability_of_top_percentile, run_trial, simulate,
    simulate_seeded, sweep_windows, trial_pair, AcceptancePolicy, ChoiceSource, Error,
    Population, SimConfig, SweepConfig,
};

#[test]
fn fixed_seed_single_trial_is_reproducible() {
    let policy = AcceptancePolicy::classical();
    let a = simulate(10, 3, 1, &policy, &mut StdRng::seed_from_u64(2024)).unwrap();
    let b = simulate(10, 3, 1, &policy, &mut StdRng::seed_from_u64(2024)).unwrap();
    assert_eq!(a.ranks.len(), 1);
    assert_eq!(a, b);
    assert!(a.stops[0] > 3 && a.stops[0] <= 10);
}

#[test]
fn window_equal_to_population_is_invalid() {
    let mut rng = StdRng::seed_from_u64(0);
    let err = simulate(5, 5, 10, &AcceptancePolicy::classical(), &mut rng).unwrap_err();
    assert_eq!(
        err,
        Error::InvalidWindow {
            window: 5,
            population: 5
        }
    );
    assert_eq!(
        err.to_string(),
        "search window 5 must be less than the population size 5"
    );
}

#[test]
fn empty_window_never_accepting_is_exhausted_not_a_hang() {
    let mut rng = StdRng::seed_from_u64(0);
    let err = trial_pair(&[0.4, 0.2, 0.9], 0, 0.0, 0.0, &mut rng).unwrap_err();
    assert_eq!(err, Error::Exhausted { examined: 3 });
}

#[test]
fn declined_global_best_is_not_revisited() {
    // The lone leap candidate is the global best and declines; the belated
    // walk starts from the second best.
    let pop = Population::from_values(vec![0.3, 0.7, 0.1, 0.95]).unwrap();
    let policy = AcceptancePolicy::new(0.0, 1.0).unwrap();
    let r = run_trial(&pop, 3, &policy, &mut StdRng::seed_from_u64(1)).unwrap();
    assert_eq!(r.source, ChoiceSource::Belated);
    assert_eq!(r.rank, 2);
    assert_eq!(r.declined, 1);
    assert_eq!(r.stopping_index, 4);
}

#[test]
fn skipped_lone_candidate_sends_belated_walk_to_the_best() {
    let pop = Population::from_values(vec![0.3, 0.95, 0.1, 0.5]).unwrap();
    let policy = AcceptancePolicy::new(0.0, 1.0).unwrap();
    let r = run_trial(&pop, 3, &policy, &mut StdRng::seed_from_u64(1)).unwrap();
    assert_eq!(r.source, ChoiceSource::Belated);
    assert_eq!(r.rank, 1);
    assert_eq!(r.declined, 0);
}

#[test]
fn top_percentile_boundary_is_exclusive() {
    assert_eq!(probability_of_top_percentile(1.0, 100, &[1]), 0.0);
    assert_eq!(probability_of_top_percentile(2.0, 100, &[1]), 1.0);
    assert_eq!(probability_of_top_percentile(100.0, 50, &[50]), 0.0);
}

#[test]
fn classical_policy_success_rate_is_near_one_over_e() {
    let cfg = SimConfig::default()
        .with_population(100)
        .with_window(37)
        .with_trials(4_000)
        .with_seed(11);
    let sim = simulate_seeded(&cfg).unwrap();
    let p = probability_of_best(&sim.ranks);
    assert!((p - 0.37).abs() < 0.05, "p_best = {p}");
}

#[test]
fn rejection_lowers_success_and_lengthens_search() {
    let base = SimConfig::default()
        .with_population(60)
        .with_window(22)
        .with_trials(3_000)
        .with_seed(5);
    let classical = simulate_seeded(&base).unwrap();
    let fickle = simulate_seeded(&base.with_policy(AcceptancePolicy::new(0.5, 0.0).unwrap()))
        .unwrap();
    assert!(probability_of_best(&fickle.ranks) < probability_of_best(&classical.ranks));
    assert!(mean_search_length(&fickle.stops) > mean_search_length(&classical.stops));
}

#[test]
fn belated_acceptance_rescues_exhausted_searches() {
    let base = SimConfig::default()
        .with_population(40)
        .with_window(30)
        .with_trials(2_000)
        .with_seed(8);
    let without = simulate_seeded(&base).unwrap();
    let with = simulate_seeded(&base.with_policy(AcceptancePolicy::new(1.0, 0.5).unwrap()))
        .unwrap();
    let worst = |ranks: &[usize]| ranks.iter().filter(|&&r| r == 40).count();
    assert!(worst(&with.ranks) < worst(&without.ranks));
}

#[test]
fn sweep_peaks_near_n_over_e() {
    let n = 50;
    let cfg = SweepConfig::new(n).with_trials(3_000).with_seed(3);
    let sweep = sweep_windows(&cfg).unwrap();
    assert_eq!(sweep.points.len(), n - 1);
    let best = sweep.best_window().unwrap();
    let target = n as f64 / std::f64::consts::E;
    assert!(
        (best.window as f64 - target).abs() <= 10.0,
        "best window {} far from {target:.1}",
        best.window
    );
    // Tiny windows do clearly worse than the peak.
    let tiny = sweep.get(1).unwrap();
    assert!(tiny.summary.p_best + 0.15 < best.summary.p_best);
}

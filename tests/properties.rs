//! Property tests shared by the hill climbing and tabu search engines.

use proptest::prelude::*;
use u_localsearch::hill::{HillConfig, HillRunner};
use u_localsearch::tabu::{TabuConfig, TabuRunner};
use u_localsearch::{climb, tabu, AxisSteps, Benchmark, Objective, Point, SearchError};

fn coord() -> impl Strategy<Value = f64> {
    -500.0f64..500.0
}

fn benchmark() -> impl Strategy<Value = Benchmark> {
    prop::sample::select(Benchmark::ALL.to_vec())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(48))]

    #[test]
    fn hill_never_worse_than_start(x in coord(), y in coord(), bench in benchmark(), k in 0usize..200) {
        let start = Point::from([x, y]);
        let best = climb(&bench, start.clone(), &AxisSteps::default(), k).unwrap();
        prop_assert!(bench.value(&best) <= bench.value(&start));
    }

    #[test]
    fn tabu_never_worse_than_start(x in coord(), y in coord(), bench in benchmark(), k in 0usize..200) {
        let start = Point::from([x, y]);
        let best = tabu(&bench, start.clone(), &AxisSteps::default(), k).unwrap();
        prop_assert!(bench.value(&best) <= bench.value(&start));
    }

    #[test]
    fn zero_iterations_is_identity(x in coord(), y in coord(), bench in benchmark()) {
        let start = Point::from([x, y]);
        prop_assert_eq!(climb(&bench, start.clone(), &AxisSteps::default(), 0).unwrap(), start.clone());
        prop_assert_eq!(tabu(&bench, start.clone(), &AxisSteps::default(), 0).unwrap(), start);
    }

    #[test]
    fn engines_are_deterministic(x in coord(), y in coord(), bench in benchmark(), k in 1usize..150) {
        let start = Point::from([x, y]);
        let steps = AxisSteps::new(0.25);

        let h1 = HillRunner::run(&bench, &steps, start.clone(), &HillConfig::default().with_max_iterations(k)).unwrap();
        let h2 = HillRunner::run(&bench, &steps, start.clone(), &HillConfig::default().with_max_iterations(k)).unwrap();
        prop_assert_eq!(h1.best, h2.best);

        let t1 = TabuRunner::run(&bench, &steps, start.clone(), &TabuConfig::default().with_max_iterations(k)).unwrap();
        let t2 = TabuRunner::run(&bench, &steps, start, &TabuConfig::default().with_max_iterations(k)).unwrap();
        prop_assert_eq!(t1.best, t2.best);
        prop_assert_eq!(t1.history, t2.history);
    }

    #[test]
    fn tabu_history_grows_at_most_once_per_iteration(x in coord(), y in coord(), k in 0usize..300) {
        let result = TabuRunner::run(
            &Benchmark::Eggholder,
            &AxisSteps::new(1.0),
            Point::from([x, y]),
            &TabuConfig::default().with_max_iterations(k),
        )
        .unwrap();
        prop_assert!(result.history.len() <= k + 1);
        prop_assert_eq!(result.history.len() + result.stalled_iterations, k + 1);
    }

    #[test]
    fn tabu_history_has_no_duplicates(x in -5i32..5, y in -5i32..5, k in 0usize..120) {
        let result = TabuRunner::run(
            &Benchmark::Sphere,
            &AxisSteps::new(1.0),
            Point::from([x as f64, y as f64]),
            &TabuConfig::default().with_max_iterations(k),
        )
        .unwrap();
        for (i, a) in result.history.iter().enumerate() {
            for b in &result.history[i + 1..] {
                prop_assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn empty_neighborhood_fails_hill_climbing(x in coord(), y in coord(), k in 1usize..50) {
        let nothing = |_: &Point| Vec::<Point>::new();
        let err = climb(&Benchmark::Sphere, Point::from([x, y]), &nothing, k).unwrap_err();
        prop_assert_eq!(err, SearchError::EmptyNeighborhood { iteration: 0 });
    }
}

#[test]
fn sphere_from_ten_ten() {
    let best = climb(&Benchmark::Sphere, Point::from([10.0, 10.0]), &AxisSteps::new(1.0), 50).unwrap();
    assert!(best.distance(&Point::from([0.0, 0.0])) <= 1.0);
    assert!(Benchmark::Sphere.value(&best) <= 200.0);
}

#[test]
fn both_engines_find_shifted_bowl() {
    let f = |p: &Point| (p[0] - 3.0).powi(2) + (p[1] + 2.0).powi(2);
    let target = Point::from([3.0, -2.0]);
    let steps = AxisSteps::new(0.5);

    let hill = climb(&f, Point::from([0.0, 0.0]), &steps, 100).unwrap();
    let walked = tabu(&f, Point::from([0.0, 0.0]), &steps, 100).unwrap();

    assert!(hill.distance(&target) <= 0.5, "hill ended at {hill}");
    assert!(walked.distance(&target) <= 0.5, "tabu ended at {walked}");
}

#[test]
fn tabu_beats_hill_on_deceptive_ridge() {
    // Along y = 0: a shallow basin at x = 2 and a deeper one at x = 6.
    let f = |p: &Point| {
        let near = (p[0] - 2.0).powi(2);
        let far = (p[0] - 6.0).powi(2) - 3.0;
        near.min(far) + p[1] * p[1]
    };
    let start = Point::from([0.0, 0.0]);
    let steps = AxisSteps::new(1.0);

    let hill = climb(&f, start.clone(), &steps, 50).unwrap();
    let walked = tabu(&f, start, &steps, 50).unwrap();

    assert_eq!(hill, Point::from([2.0, 0.0]));
    assert!(f(&walked) < f(&hill), "tabu stopped at {walked}");
}

use cycle_finder::detect::budget::ScanBudget;
use cycle_finder::detect::strategy::{HashedScan, LinearScan, MatchStrategy};
use cycle_finder::process::ProcessSpec;
use cycle_finder::{CycleDetector, CycleError, DetectLimits};

/// Guard-like state: a position plus a heading, compared on both.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
struct Walker {
    pos: (i32, i32),
    heading: u8,
}

fn square_walk() -> impl Iterator<Item = Walker> {
    std::iter::successors(
        Some(Walker {
            pos: (0, 0),
            heading: 0,
        }),
        |w| {
            let (dx, dy) = [(1, 0), (0, 1), (-1, 0), (0, -1)][w.heading as usize];
            let pos = (w.pos.0 + dx, w.pos.1 + dy);
            // Turn right at every corner of the 3x3 square.
            let heading = if pos.0.abs() % 3 == 0 && pos.1.abs() % 3 == 0 {
                (w.heading + 1) % 4
            } else {
                w.heading
            };
            Some(Walker { pos, heading })
        },
    )
}

/// Counts how many times the inner strategy is consulted.
struct Counting<S> {
    inner: S,
    calls: usize,
}

impl<T, S: MatchStrategy<T>> MatchStrategy<T> for Counting<S> {
    fn match_or_record(
        &mut self,
        seen: &[T],
        state: &T,
        budget: &ScanBudget,
    ) -> Result<Option<usize>, CycleError> {
        self.calls += 1;
        self.inner.match_or_record(seen, state, budget)
    }
}

#[test]
fn walker_returns_to_its_start_after_the_perimeter() {
    let a = CycleDetector::new(HashedScan::new(), DetectLimits::default())
        .run(square_walk())
        .unwrap();
    assert_eq!(a.cycle_start_index(), 0);
    assert_eq!(a.cycle_length(), 12);
    assert_eq!(a.value_at(12 * 1_000_000 + 3).pos, (3, 0));
}

#[test]
fn projection_predicate_ignores_heading() {
    // Compared on position only, the first revisited square closes the loop.
    let a = CycleDetector::new(
        LinearScan::new(|prior: &Walker, current: &Walker| prior.pos == current.pos),
        DetectLimits::default(),
    )
    .run(square_walk())
    .unwrap();
    assert_eq!(a.cycle_length(), 12);
}

#[test]
fn custom_strategy_is_driven_once_per_state() {
    let mut strategy = Counting {
        inner: HashedScan::new(),
        calls: 0,
    };
    let budget = ScanBudget::new(DetectLimits::default());
    let mut seen: Vec<i32> = Vec::new();
    for v in [3, 1, 4, 1] {
        if strategy.match_or_record(&seen, &v, &budget).unwrap().is_none() {
            seen.push(v);
        }
    }
    assert_eq!(strategy.calls, 4);

    let a = CycleDetector::new(
        Counting {
            inner: HashedScan::new(),
            calls: 0,
        },
        DetectLimits::default(),
    )
    .run(vec![3, 1, 4, 1])
    .unwrap();
    assert_eq!((a.cycle_start_index(), a.cycle_length()), (1, 2));
}

#[test]
fn affine_process_with_cap_below_period_fails() {
    // x -> x + 1 (mod 50) visits all 50 residues before repeating.
    let spec = ProcessSpec::Affine {
        seed: 0,
        multiplier: 1,
        increment: 1,
        modulus: 50,
    };
    let err = CycleDetector::new(HashedScan::new(), DetectLimits::with_max_iterations(49))
        .run(spec.states().unwrap())
        .unwrap_err();
    assert_eq!(
        err,
        CycleError::NoCycleFound {
            max_iterations: 49,
            consumed: 49
        }
    );

    let a = CycleDetector::new(HashedScan::new(), DetectLimits::with_max_iterations(51))
        .run(spec.states().unwrap())
        .unwrap();
    assert_eq!(a.cycle_length(), 50);
}

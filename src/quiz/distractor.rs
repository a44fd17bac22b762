use rand::seq::{IndexedRandom, SliceRandom};
use rand::Rng;
use tracing::debug;

use crate::error::QuizError;
use crate::models::{Answer, Scenario};

/// Options shown for every question.
pub const OPTION_COUNT: usize = 4;

/// Wrong answers mixed in with the correct one.
pub const DISTRACTOR_COUNT: usize = OPTION_COUNT - 1;

/// Build the shuffled options for `target`: its correct answer plus the
/// answers of `DISTRACTOR_COUNT` other scenarios sampled without replacement.
///
/// Scenarios sharing `target`'s id are never used as distractors.
pub fn generate_options<R: Rng + ?Sized>(
    target: &Scenario,
    scenarios: &[Scenario],
    rng: &mut R,
) -> Result<Vec<Answer>, QuizError> {
    let others: Vec<&Scenario> = scenarios
        .iter()
        .filter(|scenario| scenario.id != target.id)
        .collect();

    if others.len() < DISTRACTOR_COUNT {
        return Err(QuizError::InsufficientData {
            needed: DISTRACTOR_COUNT,
            available: others.len(),
        });
    }

    let mut options = Vec::with_capacity(OPTION_COUNT);
    options.push(target.correct_answer.clone());
    options.extend(
        others
            .choose_multiple(rng, DISTRACTOR_COUNT)
            .map(|scenario| scenario.correct_answer.clone()),
    );
    options.shuffle(rng);

    debug!(scenario = target.id, "generated options");
    Ok(options)
}

#[cfg(test)]
mod tests {
    use std::collections::{HashMap, HashSet};

    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;
    use crate::data::Dataset;
    use crate::models::is_correct;

    fn dataset() -> Dataset {
        Dataset::builtin().unwrap()
    }

    fn owner_of<'a>(answer: &Answer, scenarios: &'a [Scenario]) -> &'a Scenario {
        scenarios
            .iter()
            .find(|s| &s.correct_answer == answer)
            .expect("every option comes from some scenario")
    }

    #[test]
    fn options_hold_correct_answer_and_three_distinct_distractors() {
        let dataset = dataset();
        let scenarios = dataset.scenarios();
        let target = dataset.get(3).unwrap();
        let mut rng = StdRng::seed_from_u64(3);

        for _ in 0..200 {
            let options = generate_options(target, scenarios, &mut rng).unwrap();
            assert_eq!(options.len(), OPTION_COUNT);

            let correct = options
                .iter()
                .filter(|o| is_correct(o, &target.correct_answer))
                .count();
            assert_eq!(correct, 1);

            let distractor_ids: HashSet<_> = options
                .iter()
                .filter(|o| !is_correct(o, &target.correct_answer))
                .map(|o| owner_of(o, scenarios).id)
                .collect();
            assert_eq!(distractor_ids.len(), DISTRACTOR_COUNT);
            assert!(!distractor_ids.contains(&3));
        }
    }

    #[test]
    fn too_few_scenarios_is_insufficient_data() {
        let dataset = dataset();
        let few = &dataset.scenarios()[..3];
        let mut rng = StdRng::seed_from_u64(0);

        let err = generate_options(&few[0], few, &mut rng).unwrap_err();
        assert_eq!(
            err,
            QuizError::InsufficientData {
                needed: 3,
                available: 2
            }
        );
    }

    #[test]
    fn correct_answer_position_is_unbiased() {
        let dataset = dataset();
        let target = dataset.get(1).unwrap();
        let mut rng = StdRng::seed_from_u64(42);
        let mut positions = [0usize; OPTION_COUNT];

        for _ in 0..4000 {
            let options = generate_options(target, dataset.scenarios(), &mut rng).unwrap();
            let index = options
                .iter()
                .position(|o| is_correct(o, &target.correct_answer))
                .unwrap();
            positions[index] += 1;
        }

        for count in positions {
            assert!((850..=1150).contains(&count), "skewed positions: {positions:?}");
        }
    }

    #[test]
    fn every_other_scenario_is_sampled_evenly() {
        let dataset = dataset();
        let scenarios = dataset.scenarios();
        let target = dataset.get(5).unwrap();
        let mut rng = StdRng::seed_from_u64(7);
        let mut picks: HashMap<u32, usize> = HashMap::new();

        let rounds = 4500;
        for _ in 0..rounds {
            for option in generate_options(target, scenarios, &mut rng).unwrap() {
                if !is_correct(&option, &target.correct_answer) {
                    *picks.entry(owner_of(&option, scenarios).id).or_default() += 1;
                }
            }
        }

        // 3 of the 9 others are drawn each round.
        let expected = rounds / 3;
        assert_eq!(picks.len(), scenarios.len() - 1);
        for (id, count) in picks {
            assert!(
                count.abs_diff(expected) < expected / 6,
                "scenario {id} drawn {count} times, expected about {expected}"
            );
        }
    }
}

//! Small deterministic processes that feed the detector.
//!
//! These are reference producers for the `cycle_eval` tool and for tests. Each yields its seed
//! first and then every successor, forever (except [`ProcessSpec::Listed`], which is finite).

use serde::{Deserialize, Serialize};

use crate::error::CycleError;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ProcessSpec {
    /// An explicit, finite list of states.
    Listed { values: Vec<i64> },
    /// `x -> (multiplier * x + increment) mod modulus`, result in `[0, modulus)`.
    Affine {
        seed: i64,
        multiplier: i64,
        increment: i64,
        modulus: i64,
    },
    /// `x -> sum of the squares of the decimal digits of x`.
    DigitSquareSum { seed: i64 },
}

impl ProcessSpec {
    pub fn states(&self) -> Result<Box<dyn Iterator<Item = i64>>, CycleError> {
        match *self {
            ProcessSpec::Listed { ref values } => Ok(Box::new(values.clone().into_iter())),
            ProcessSpec::Affine {
                seed,
                multiplier,
                increment,
                modulus,
            } => {
                if modulus <= 0 {
                    return Err(CycleError::invalid(
                        "modulus",
                        format!("must be positive, got {modulus}"),
                    ));
                }
                Ok(Box::new(std::iter::successors(Some(seed), move |&x| {
                    Some(affine_step(x, multiplier, increment, modulus))
                })))
            }
            ProcessSpec::DigitSquareSum { seed } => {
                if seed < 0 {
                    return Err(CycleError::invalid(
                        "seed",
                        format!("must be non-negative, got {seed}"),
                    ));
                }
                Ok(Box::new(std::iter::successors(Some(seed), |&x| {
                    Some(digit_square_sum(x))
                })))
            }
        }
    }
}

#[inline]
fn affine_step(x: i64, multiplier: i64, increment: i64, modulus: i64) -> i64 {
    let next = (multiplier as i128 * x as i128 + increment as i128).rem_euclid(modulus as i128);
    next as i64
}

fn digit_square_sum(mut x: i64) -> i64 {
    let mut sum = 0;
    while x > 0 {
        let d = x % 10;
        sum += d * d;
        x /= 10;
    }
    sum
}

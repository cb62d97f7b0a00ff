//! Reusable functionality for shuffles, scrambles, and other random initalization logic.

use crate::orientations::{CornerOrientation, EdgeOrientation};
use derive_more::Display;
use rand::Rng;

#[derive(Copy, Clone, Ord, PartialEq, Eq, PartialOrd, Debug, Display)]
pub enum TwoParity {
    Even,
    Odd,
}

mod permutations;

/// Shuffles the given array arbitrarily, and returns the parity of the resulting permutation
pub fn shuffle_any<R: Rng, T: Copy>(rng: &mut R, arr: &[T]) -> (Vec<T>, TwoParity) {
    let permutation = permutations::any_permutation(rng, arr.len());

    let parity = permutation.parity();

    let shuffled: Vec<T> = (0..arr.len()).map(|i| arr[permutation.apply(i)]).collect();

    (shuffled, parity)
}

#[allow(unused)]
pub fn shuffle_with_parity<R: Rng, T: Copy>(rng: &mut R, arr: &[T], desired: TwoParity) -> Vec<T> {
    let permutation = permutations::with_parity(rng, arr.len(), desired);

    let shuffled: Vec<T> = (0..arr.len()).map(|i| arr[permutation.apply(i)]).collect();

    shuffled
}

pub fn flips_with_parity<R: Rng>(
    rng: &mut R,
    len: usize,
    desired: TwoParity,
) -> Vec<EdgeOrientation> {
    if len == 0 && desired == TwoParity::Odd {
        panic!("Can't flip nothing and make it odd")
    }

    let mut out: Vec<EdgeOrientation> =
        (0..len - 1).map(|_| EdgeOrientation::random(rng)).collect();

    let current_parity = out
        .iter()
        .filter(|e| **e == EdgeOrientation::Flipped)
        .count()
        % 2;
    let current_parity = match current_parity {
        0 => TwoParity::Even,
        1 => TwoParity::Odd,
        other => unreachable!("We modded out by 2, should get 0 or 1; got {other}"),
    };

    if current_parity == desired {
        out.push(EdgeOrientation::Normal);
    } else {
        out.push(EdgeOrientation::Flipped);
    }

    assert_eq!(out.len(), len);

    out
}

/// Corner-twist analogue of `flips_with_parity`: `len - 1` twists are chosen
/// freely and the last is forced so the twist classes sum to 0 mod 3 (the
/// invariant every physically realizable corner-twisting puzzle satisfies).
pub fn twists_summing_to_zero<R: Rng>(rng: &mut R, len: usize) -> Vec<CornerOrientation> {
    if len == 0 {
        return Vec::new();
    }

    let mut out: Vec<CornerOrientation> =
        (0..len - 1).map(|_| CornerOrientation::random(rng)).collect();

    let partial_sum: u32 = out.iter().map(|o| o.as_twist() as u32).sum();
    let last = (3 - (partial_sum % 3)) % 3;
    out.push(match last {
        0 => CornerOrientation::Normal,
        1 => CornerOrientation::CW,
        _ => CornerOrientation::CCW,
    });

    assert_eq!(out.len(), len);

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn flips_with_parity_respects_requested_parity() {
        let mut rng = StdRng::seed_from_u64(1);
        for desired in [TwoParity::Even, TwoParity::Odd] {
            let flips = flips_with_parity(&mut rng, 12, desired);
            let count = flips.iter().filter(|e| **e == EdgeOrientation::Flipped).count();
            let actual = if count % 2 == 0 { TwoParity::Even } else { TwoParity::Odd };
            assert_eq!(actual, desired);
        }
    }

    #[test]
    fn twists_summing_to_zero_respects_the_invariant() {
        let mut rng = StdRng::seed_from_u64(2);
        for _ in 0..20 {
            let twists = twists_summing_to_zero(&mut rng, 8);
            let sum: u32 = twists.iter().map(|o| o.as_twist() as u32).sum();
            assert_eq!(sum % 3, 0);
        }
    }
}

use rand::Rng;

/// A 3-variant orientation enum which matches corners on many common types of twist puzzles.
#[derive(Copy, Clone, Hash, Eq, PartialEq, Debug, Ord, PartialOrd)]
pub enum CornerOrientation {
    Normal,
    CW,
    CCW,
}

impl CornerOrientation {
    #[inline(always)]
    pub fn cw(self) -> Self {
        match self {
            CornerOrientation::Normal => CornerOrientation::CW,
            CornerOrientation::CW => CornerOrientation::CCW,
            CornerOrientation::CCW => CornerOrientation::Normal,
        }
    }

    #[inline(always)]
    pub fn ccw(self) -> Self {
        match self {
            CornerOrientation::Normal => CornerOrientation::CCW,
            CornerOrientation::CCW => CornerOrientation::CW,
            CornerOrientation::CW => CornerOrientation::Normal,
        }
    }

    /// This variant's twist class mod 3 (`Normal` = 0, `CW` = 1, `CCW` = 2).
    #[inline(always)]
    pub fn as_twist(self) -> u8 {
        match self {
            CornerOrientation::Normal => 0,
            CornerOrientation::CW => 1,
            CornerOrientation::CCW => 2,
        }
    }

    /// A uniformly random orientation, all three variants equally likely.
    pub fn random<R: Rng>(rng: &mut R) -> Self {
        match rng.gen_range(0..3) {
            0 => CornerOrientation::Normal,
            1 => CornerOrientation::CW,
            _ => CornerOrientation::CCW,
        }
    }
}

/// A two-variant orientation enum which behaves like edges in many common types of twist puzzles.
#[derive(Copy, Clone, Hash, Eq, PartialEq, Debug)]
pub enum EdgeOrientation {
    Normal,
    Flipped,
}

impl EdgeOrientation {
    #[inline(always)]
    pub fn flipped(&self) -> Self {
        match self {
            EdgeOrientation::Normal => EdgeOrientation::Flipped,
            EdgeOrientation::Flipped => EdgeOrientation::Normal,
        }
    }

    /// A uniformly random orientation, both variants equally likely.
    pub fn random<R: Rng>(rng: &mut R) -> Self {
        if rng.gen_bool(0.5) {
            EdgeOrientation::Flipped
        } else {
            EdgeOrientation::Normal
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn corner_orientation_cw_ccw_are_inverse() {
        for o in [
            CornerOrientation::Normal,
            CornerOrientation::CW,
            CornerOrientation::CCW,
        ] {
            assert_eq!(o.cw().ccw(), o);
        }
    }

    #[test]
    fn random_orientations_are_deterministic_given_a_seed() {
        let mut rng = StdRng::seed_from_u64(7);
        let a = EdgeOrientation::random(&mut rng);
        let mut rng2 = StdRng::seed_from_u64(7);
        let b = EdgeOrientation::random(&mut rng2);
        assert_eq!(a, b);
    }
}

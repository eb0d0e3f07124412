use crate::digits::weighted_sum;

/// Number of digits in a fully padded account number (2 + 4 + 8 + 4)
pub const ACCOUNT_DIGITS: usize = 18;

/// Account bases from this value up are checked with [`Algorithm::B`] instead of
/// [`Algorithm::A`] for banks without their own algorithm.
const LARGE_ACCOUNT_BASE: u32 = 990_000;

/// A weighting aligned with the 18 digit account number, and the modulus the weighted
/// sum must be divisible by.
pub struct ChecksumScheme {
    pub(crate) weights: [u32; ACCOUNT_DIGITS],
    pub(crate) modulus: u32,
}

impl ChecksumScheme {
    pub fn is_valid(&self, digits: &[u32; ACCOUNT_DIGITS]) -> bool {
        weighted_sum(digits, &self.weights) % self.modulus == 0
    }
}

/// Check digit algorithms, named with the letters used by the IRD specification
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Algorithm {
    A,
    B,
    D,
    E,
    F,
    G,
    X,
}

#[rustfmt::skip]
const ALGORITHM_A: ChecksumScheme = ChecksumScheme {
    weights: [0, 0, 6, 3, 7, 9, 0, 0, 10, 5, 8, 4, 2, 1, 0, 0, 0, 0],
    modulus: 11,
};
#[rustfmt::skip]
const ALGORITHM_B: ChecksumScheme = ChecksumScheme {
    weights: [0, 0, 0, 0, 0, 0, 0, 0, 10, 5, 8, 4, 2, 1, 0, 0, 0, 0],
    modulus: 11,
};
#[rustfmt::skip]
const ALGORITHM_D: ChecksumScheme = ChecksumScheme {
    weights: [0, 0, 0, 0, 0, 0, 0, 7, 6, 5, 4, 3, 2, 1, 0, 0, 0, 0],
    modulus: 11,
};
#[rustfmt::skip]
const ALGORITHM_E: ChecksumScheme = ChecksumScheme {
    weights: [0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 5, 4, 3, 2, 0, 0, 0, 1],
    modulus: 11,
};
#[rustfmt::skip]
const ALGORITHM_F: ChecksumScheme = ChecksumScheme {
    weights: [0, 0, 0, 0, 0, 0, 0, 1, 7, 3, 1, 7, 3, 1, 0, 0, 0, 0],
    modulus: 10,
};
#[rustfmt::skip]
const ALGORITHM_G: ChecksumScheme = ChecksumScheme {
    weights: [0, 0, 0, 0, 0, 0, 0, 1, 3, 7, 1, 3, 7, 1, 0, 3, 7, 1],
    modulus: 10,
};
// Every sum is divisible by 1, so bank 31 accounts always pass.
const ALGORITHM_X: ChecksumScheme = ChecksumScheme {
    weights: [0; ACCOUNT_DIGITS],
    modulus: 1,
};

/// Banks with a dedicated algorithm. Every other bank uses A or B.
const BANK_ALGORITHMS: &[(u32, Algorithm)] = &[
    (8, Algorithm::D),
    (9, Algorithm::E),
    (25, Algorithm::F),
    (33, Algorithm::F),
    (26, Algorithm::G),
    (28, Algorithm::G),
    (29, Algorithm::G),
    (31, Algorithm::X),
];

impl Algorithm {
    pub fn for_account(bank: u32, account_base: u32) -> Self {
        BANK_ALGORITHMS
            .iter()
            .find(|(code, _)| *code == bank)
            .map(|(_, algorithm)| *algorithm)
            .unwrap_or(if account_base < LARGE_ACCOUNT_BASE {
                Algorithm::A
            } else {
                Algorithm::B
            })
    }

    pub fn scheme(self) -> &'static ChecksumScheme {
        match self {
            Algorithm::A => &ALGORITHM_A,
            Algorithm::B => &ALGORITHM_B,
            Algorithm::D => &ALGORITHM_D,
            Algorithm::E => &ALGORITHM_E,
            Algorithm::F => &ALGORITHM_F,
            Algorithm::G => &ALGORITHM_G,
            Algorithm::X => &ALGORITHM_X,
        }
    }
}

use ahash::AHashMap;
use lazy_static::lazy_static;
use std::ops::RangeInclusive;

/// The inclusive branch number ranges allocated to a bank
pub struct BranchRangeSet {
    pub bank: u32,
    pub ranges: &'static [RangeInclusive<u32>],
}

/// Bank and branch allocations from the IRD RWT/NRWT certificate filing specification.
/// Kept exactly as published.
#[rustfmt::skip]
const BRANCH_RANGE_SETS: &[BranchRangeSet] = &[
    BranchRangeSet { bank: 1, ranges: &[1..=999, 1100..=1199, 1800..=1899] },
    BranchRangeSet { bank: 2, ranges: &[1..=999, 1200..=1299] },
    BranchRangeSet { bank: 3, ranges: &[1..=999, 1300..=1399, 1500..=1599, 1700..=1799, 1900..=1999, 7350..=7399] },
    BranchRangeSet { bank: 4, ranges: &[2020..=2024] },
    BranchRangeSet { bank: 6, ranges: &[1..=999, 1400..=1499] },
    BranchRangeSet { bank: 8, ranges: &[6500..=6599] },
    BranchRangeSet { bank: 9, ranges: &[0..=0] },
    BranchRangeSet { bank: 10, ranges: &[5165..=5169] },
    BranchRangeSet { bank: 11, ranges: &[5000..=6499, 6600..=8999] },
    BranchRangeSet { bank: 12, ranges: &[3000..=3299, 3400..=3499, 3600..=3699] },
    BranchRangeSet { bank: 13, ranges: &[4900..=4999] },
    BranchRangeSet { bank: 14, ranges: &[4700..=4799] },
    BranchRangeSet { bank: 15, ranges: &[3900..=3999] },
    BranchRangeSet { bank: 16, ranges: &[4400..=4499] },
    BranchRangeSet { bank: 17, ranges: &[3300..=3399] },
    BranchRangeSet { bank: 18, ranges: &[3500..=3599] },
    BranchRangeSet { bank: 19, ranges: &[4600..=4649] },
    BranchRangeSet { bank: 20, ranges: &[4100..=4199] },
    BranchRangeSet { bank: 21, ranges: &[4800..=4899] },
    BranchRangeSet { bank: 22, ranges: &[4000..=4049] },
    BranchRangeSet { bank: 23, ranges: &[3700..=3799] },
    BranchRangeSet { bank: 24, ranges: &[4300..=4349] },
    BranchRangeSet { bank: 25, ranges: &[2500..=2599] },
    BranchRangeSet { bank: 26, ranges: &[2600..=2699] },
    BranchRangeSet { bank: 27, ranges: &[3800..=3849] },
    BranchRangeSet { bank: 28, ranges: &[2100..=2149] },
    BranchRangeSet { bank: 29, ranges: &[2150..=2299] },
    BranchRangeSet { bank: 30, ranges: &[2900..=2949] },
    BranchRangeSet { bank: 31, ranges: &[2800..=2849] },
    BranchRangeSet { bank: 33, ranges: &[6700..=6799] },
    BranchRangeSet { bank: 35, ranges: &[2400..=2499] },
    BranchRangeSet { bank: 38, ranges: &[9000..=9499] },
];

lazy_static! {
    static ref BRANCH_RANGES_BY_BANK: AHashMap<u32, &'static [RangeInclusive<u32>]> =
        BRANCH_RANGE_SETS
            .iter()
            .map(|set| (set.bank, set.ranges))
            .collect();
}

/// All known bank codes, in ascending order
pub fn known_banks() -> impl Iterator<Item = u32> {
    BRANCH_RANGE_SETS.iter().map(|set| set.bank)
}

/// The branch ranges of `bank`, or `None` if the bank code is unknown
pub fn branch_ranges(bank: u32) -> Option<&'static [RangeInclusive<u32>]> {
    BRANCH_RANGES_BY_BANK.get(&bank).copied()
}

pub fn is_known_bank(bank: u32) -> bool {
    BRANCH_RANGES_BY_BANK.contains_key(&bank)
}

/// Whether `bank` is known and `branch` falls in one of its ranges
pub fn is_valid_branch(bank: u32, branch: u32) -> bool {
    branch_ranges(bank)
        .map(|ranges| ranges.iter().any(|range| range.contains(&branch)))
        .unwrap_or(false)
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_known_banks() {
        for bank in [1, 2, 3, 4, 6, 8, 9, 10, 11, 25, 26, 31, 33, 35, 38] {
            assert!(is_known_bank(bank), "bank {bank} should be known");
        }
        for bank in [0, 5, 7, 32, 34, 36, 37, 39, 99, 100] {
            assert!(!is_known_bank(bank), "bank {bank} should be unknown");
            assert_eq!(branch_ranges(bank), None);
        }
    }

    #[test]
    fn test_table_is_sorted_and_unique() {
        let banks: Vec<u32> = known_banks().collect();
        assert_eq!(banks.len(), 32);
        assert!(banks.windows(2).all(|pair| pair[0] < pair[1]));
    }

    #[test]
    fn test_branch_bounds_are_inclusive() {
        let test_cases = vec![
            (1, 1, true),
            (1, 999, true),
            (1, 0, false),
            (1, 1000, false),
            (1, 1100, true),
            (1, 1899, true),
            (1, 9999, false),
            (3, 7399, true),
            (3, 7400, false),
            (9, 0, true),
            (9, 1, false),
            (11, 6499, true),
            (11, 6500, false),
            (11, 6600, true),
            (38, 9499, true),
            // unknown bank
            (99, 0, false),
        ];
        for (bank, branch, expected) in test_cases {
            assert_eq!(
                is_valid_branch(bank, branch),
                expected,
                "bank {bank} branch {branch}"
            );
        }
    }
}

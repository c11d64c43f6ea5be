//! Canonical denomination tables and per-query active ranges.

use crate::errors::{DenomError, ErrorInfo};

/// Maximum number of entries a table may hold, mandated by the one-byte
/// index width of the path encoding.
pub const MAX_DENOMINATIONS: usize = 256;

/// The canonical production table: powers of two and three interleaved with
/// round decimal unit sizes, ascending from 1 to ~2.5e12.
const STANDARD: &[i64] = &[
    1,
    2,
    3,
    4,
    5,
    6,
    8,
    9,
    10,
    16,
    18,
    20,
    27,
    32,
    50,
    54,
    64,
    81,
    100,
    128,
    162,
    200,
    243,
    256,
    486,
    500,
    512,
    729,
    1000,
    1024,
    1458,
    2000,
    2048,
    2187,
    4096,
    4374,
    5000,
    6561,
    8192,
    10000,
    13122,
    16384,
    19683,
    20000,
    32768,
    39366,
    50000,
    59049,
    65536,
    100000,
    118098,
    131072,
    177147,
    200000,
    262144,
    354294,
    500000,
    524288,
    531441,
    1000000,
    1048576,
    1062882,
    1594323,
    2000000,
    2097152,
    3188646,
    4194304,
    4782969,
    5000000,
    8388608,
    9565938,
    10000000,
    14348907,
    16777216,
    20000000,
    28697814,
    33554432,
    43046721,
    50000000,
    67108864,
    86093442,
    100000000,
    129140163,
    134217728,
    200000000,
    258280326,
    268435456,
    387420489,
    500000000,
    536870912,
    774840978,
    1000000000,
    1073741824,
    1162261467,
    2000000000,
    2147483648,
    2324522934,
    3486784401,
    4294967296,
    5000000000,
    6973568802,
    8589934592,
    10000000000,
    10460353203,
    17179869184,
    20000000000,
    20920706406,
    31381059609,
    34359738368,
    50000000000,
    62762119218,
    68719476736,
    94143178827,
    100000000000,
    137438953472,
    188286357654,
    200000000000,
    274877906944,
    282429536481,
    500000000000,
    549755813888,
    564859072962,
    847288609443,
    1000000000000,
    1099511627776,
    1694577218886,
    2000000000000,
    2199023255552,
    2541865828329,
];

/// Immutable table of allowed denomination values.
///
/// Built from a strictly ascending sequence of unique positive values, as the
/// canonical tables are written, and stored in descending order so the active
/// range for a query is a contiguous zero-copy subslice.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DenominationTable {
    descending: Vec<i64>,
}

impl DenominationTable {
    /// Validates and adopts an ascending table of unique positive values.
    pub fn new(ascending: Vec<i64>) -> Result<Self, DenomError> {
        if ascending.is_empty() {
            return Err(DenomError::Table(ErrorInfo::new(
                "table-empty",
                "denomination table must contain at least one value",
            )));
        }
        if ascending.len() > MAX_DENOMINATIONS {
            return Err(DenomError::Table(
                ErrorInfo::new("table-capacity", "denomination table too large")
                    .with_context("length", ascending.len().to_string())
                    .with_context("cap", MAX_DENOMINATIONS.to_string())
                    .with_hint("the path encoding allots one byte per index"),
            ));
        }
        for (position, window) in ascending.windows(2).enumerate() {
            if window[0] >= window[1] {
                return Err(DenomError::Table(
                    ErrorInfo::new("table-order", "table must be strictly ascending and unique")
                        .with_context("position", position.to_string())
                        .with_context("value", window[1].to_string()),
                ));
            }
        }
        if ascending[0] <= 0 {
            return Err(DenomError::Table(
                ErrorInfo::new("table-sign", "denominations must be positive")
                    .with_context("value", ascending[0].to_string()),
            ));
        }
        let mut descending = ascending;
        descending.reverse();
        Ok(Self { descending })
    }

    /// Returns the canonical production table.
    pub fn standard() -> Self {
        Self {
            descending: {
                let mut values = STANDARD.to_vec();
                values.reverse();
                values
            },
        }
    }

    /// Number of values in the table.
    pub fn len(&self) -> usize {
        self.descending.len()
    }

    /// Whether the table is empty. Never true for a validated table.
    pub fn is_empty(&self) -> bool {
        self.descending.is_empty()
    }

    /// All values in descending order.
    pub fn values(&self) -> &[i64] {
        &self.descending
    }

    /// Returns the active range for a query: every value `v` with
    /// `dust_floor < v <= ceiling`, descending, as a view into the table.
    pub fn active(&self, dust_floor: i64, ceiling: i64) -> &[i64] {
        let start = self.descending.partition_point(|&v| v > ceiling);
        let end = self.descending.partition_point(|&v| v > dust_floor);
        if start >= end {
            &[]
        } else {
            &self.descending[start..end]
        }
    }
}

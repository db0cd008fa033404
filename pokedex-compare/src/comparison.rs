use std::cmp::Ordering;

use itertools::Itertools;
use pokedex_data::{
    CANONICAL_STAT_ORDER,
    Pokemon,
    Stat,
    StatTable,
};
use serde::{
    Deserialize,
    Serialize,
};

/// One side of a comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Contender {
    First,
    Second,
}

impl Contender {
    fn index(self) -> usize {
        match self {
            Self::First => 0,
            Self::Second => 1,
        }
    }

    /// The opposing side.
    pub fn other(self) -> Self {
        match self {
            Self::First => Self::Second,
            Self::Second => Self::First,
        }
    }
}

fn leader<T: Ord>(values: [T; 2]) -> Option<Contender> {
    match values[0].cmp(&values[1]) {
        Ordering::Greater => Some(Contender::First),
        Ordering::Less => Some(Contender::Second),
        Ordering::Equal => None,
    }
}

/// Comparison of a single base stat.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatComparison {
    pub stat: Stat,
    /// Values for the first and second contender; missing stats are 0.
    pub values: [u32; 2],
    pub best_value: u32,
    pub is_tie: bool,
}

impl StatComparison {
    fn new(stat: Stat, first: &StatTable, second: &StatTable) -> Self {
        let values = [first.get(stat), second.get(stat)];
        Self {
            stat,
            values,
            best_value: values[0].max(values[1]),
            is_tie: values[0] == values[1],
        }
    }

    pub fn value(&self, contender: Contender) -> u32 {
        self.values[contender.index()]
    }

    /// Checks if the contender strictly leads on this stat.
    pub fn is_best(&self, contender: Contender) -> bool {
        !self.is_tie && self.value(contender) == self.best_value
    }

    /// The contender with the higher value, unless tied.
    pub fn leader(&self) -> Option<Contender> {
        leader(self.values)
    }
}

/// Side-by-side comparison of two species.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comparison {
    /// One entry per stat, in canonical order.
    pub stats: Vec<StatComparison>,
    /// Stat totals for the first and second contender.
    pub totals: [u64; 2],
    /// The contender with the higher stat total; none on an exact tie.
    pub total_winner: Option<Contender>,
}

impl Comparison {
    pub fn total(&self, contender: Contender) -> u64 {
        self.totals[contender.index()]
    }

    pub fn is_total_tie(&self) -> bool {
        self.total_winner.is_none()
    }

    /// The comparison row for the given stat.
    pub fn stat(&self, stat: Stat) -> Option<&StatComparison> {
        self.stats.iter().find(|row| row.stat == stat)
    }

    /// Total of the contender that lost on totals.
    pub fn runner_up_total(&self) -> Option<u64> {
        self.total_winner.map(|winner| self.total(winner.other()))
    }
}

/// Compares the base stats of two species.
///
/// Stats are looked up by name, so the order of each species' stat list does not matter.
pub fn compare(first: &Pokemon, second: &Pokemon) -> Comparison {
    let tables = [first.stat_table(), second.stat_table()];
    let stats = CANONICAL_STAT_ORDER
        .iter()
        .map(|stat| StatComparison::new(*stat, &tables[0], &tables[1]))
        .collect_vec();
    let totals = [tables[0].sum(), tables[1].sum()];
    Comparison {
        stats,
        totals,
        total_winner: leader(totals),
    }
}

#[cfg(test)]
mod stat_comparison_test {
    use pokedex_data::{
        Stat,
        StatTable,
    };

    use crate::{
        Contender,
        StatComparison,
    };

    #[test]
    fn marks_strictly_higher_value_as_best() {
        let first = StatTable::from_iter([(Stat::Speed, 45)]);
        let second = StatTable::from_iter([(Stat::Speed, 100)]);
        let row = StatComparison::new(Stat::Speed, &first, &second);
        assert_eq!(row.values, [45, 100]);
        assert_eq!(row.best_value, 100);
        assert!(!row.is_tie);
        assert!(row.is_best(Contender::Second));
        assert!(!row.is_best(Contender::First));
        assert_eq!(row.leader(), Some(Contender::Second));
    }

    #[test]
    fn tied_values_have_no_best() {
        let table = StatTable::from_iter([(Stat::Hp, 50)]);
        let row = StatComparison::new(Stat::Hp, &table, &table);
        assert!(row.is_tie);
        assert!(!row.is_best(Contender::First));
        assert!(!row.is_best(Contender::Second));
        assert_eq!(row.leader(), None);
    }

    #[test]
    fn missing_stats_compare_as_zero() {
        let row = StatComparison::new(
            Stat::Defense,
            &StatTable::default(),
            &StatTable::from_iter([(Stat::Defense, 1)]),
        );
        assert_eq!(row.values, [0, 1]);
        assert_eq!(row.leader(), Some(Contender::Second));
    }
}

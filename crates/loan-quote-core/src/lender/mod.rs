pub mod import;

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::types::{Amount, Rate};

// ---------------------------------------------------------------------------
// Lender
// ---------------------------------------------------------------------------

/// A single lender offering up to `available` at an annual `rate`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Lender {
    pub name: String,
    pub rate: Rate,
    pub available: Amount,
}

impl Lender {
    pub fn new(name: impl Into<String>, rate: Rate, available: Amount) -> Self {
        Self {
            name: name.into(),
            rate,
            available,
        }
    }

    /// How much of `balance` this lender can cover.
    pub fn borrow(&self, balance: Amount) -> Amount {
        balance.min(self.available)
    }
}

/// Preference order: cheapest rate first, then the lender able to supply
/// more, so fewer lenders are needed to fill a request.
pub fn compare_lenders(a: &Lender, b: &Lender) -> Ordering {
    a.rate
        .cmp(&b.rate)
        .then_with(|| b.available.cmp(&a.available))
}

// ---------------------------------------------------------------------------
// Lender pool
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LenderPool {
    lenders: Vec<Lender>,
}

/// One row of a ranked pool listing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RankedLender {
    pub rank: usize,
    pub name: String,
    pub rate: Rate,
    pub available: Amount,
}

impl LenderPool {
    pub fn new(lenders: Vec<Lender>) -> Self {
        Self { lenders }
    }

    pub fn len(&self) -> usize {
        self.lenders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lenders.is_empty()
    }

    /// Lenders in load order.
    pub fn iter(&self) -> impl Iterator<Item = &Lender> {
        self.lenders.iter()
    }

    /// Aggregate capacity of every lender in the pool.
    pub fn total_available(&self) -> Amount {
        self.lenders
            .iter()
            .fold(0, |acc: Amount, l| acc.saturating_add(l.available))
    }

    /// Lenders in preference order. The sort is stable, so lenders equal on
    /// both rate and availability keep their load order.
    pub fn ranked(&self) -> Vec<&Lender> {
        let mut ranked: Vec<&Lender> = self.lenders.iter().collect();
        ranked.sort_by(|a, b| compare_lenders(a, b));
        ranked
    }

    pub fn ranked_summary(&self) -> Vec<RankedLender> {
        self.ranked()
            .into_iter()
            .enumerate()
            .map(|(i, l)| RankedLender {
                rank: i + 1,
                name: l.name.clone(),
                rate: l.rate,
                available: l.available,
            })
            .collect()
    }
}

impl From<Vec<Lender>> for LenderPool {
    fn from(lenders: Vec<Lender>) -> Self {
        Self::new(lenders)
    }
}

impl FromIterator<Lender> for LenderPool {
    fn from_iter<I: IntoIterator<Item = Lender>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    fn names(ranked: &[&Lender]) -> Vec<String> {
        ranked.iter().map(|l| l.name.clone()).collect()
    }

    #[test]
    fn test_borrow_full_amount_when_enough_funds() {
        let lender = Lender::new("Bob", dec!(0.07), 600);
        assert_eq!(lender.borrow(500), 500);
    }

    #[test]
    fn test_borrow_capped_at_available() {
        let lender = Lender::new("Bob", dec!(0.07), 300);
        assert_eq!(lender.borrow(500), 300);
        // Lender untouched
        assert_eq!(lender.available, 300);
    }

    #[test]
    fn test_rank_by_rate() {
        let pool = LenderPool::new(vec![
            Lender::new("mid", dec!(0.05), 100),
            Lender::new("high", dec!(0.08), 100),
            Lender::new("low", dec!(0.03), 100),
        ]);
        assert_eq!(names(&pool.ranked()), vec!["low", "mid", "high"]);
    }

    #[test]
    fn test_rank_tie_broken_by_available_descending() {
        let pool = LenderPool::new(vec![
            Lender::new("small", dec!(0.05), 100),
            Lender::new("big", dec!(0.05), 200),
            Lender::new("cheap", dec!(0.03), 100),
        ]);
        assert_eq!(names(&pool.ranked()), vec!["cheap", "big", "small"]);
    }

    #[test]
    fn test_rank_full_tie_keeps_load_order() {
        let pool = LenderPool::new(vec![
            Lender::new("first", dec!(0.05), 100),
            Lender::new("second", dec!(0.05), 100),
            Lender::new("third", dec!(0.05), 100),
        ]);
        assert_eq!(names(&pool.ranked()), vec!["first", "second", "third"]);
    }

    #[test]
    fn test_rank_is_idempotent() {
        let pool = LenderPool::new(vec![
            Lender::new("a", dec!(0.069), 480),
            Lender::new("b", dec!(0.071), 520),
            Lender::new("c", dec!(0.069), 640),
            Lender::new("d", dec!(0.104), 170),
        ]);
        let once: LenderPool = pool.ranked().into_iter().cloned().collect();
        let twice: LenderPool = once.ranked().into_iter().cloned().collect();
        assert_eq!(once, twice);
        // Source pool is not reordered
        assert_eq!(pool.iter().next().map(|l| l.name.as_str()), Some("a"));
    }

    #[test]
    fn test_compare_lenders_equal() {
        let a = Lender::new("a", dec!(0.05), 100);
        let b = Lender::new("b", dec!(0.050), 100);
        assert_eq!(compare_lenders(&a, &b), Ordering::Equal);
    }

    #[test]
    fn test_total_available() {
        let pool = LenderPool::new(vec![
            Lender::new("a", dec!(0.01), 1000),
            Lender::new("b", dec!(0.01), 200),
        ]);
        assert_eq!(pool.total_available(), 1200);
        assert_eq!(LenderPool::default().total_available(), 0);
    }

    #[test]
    fn test_ranked_summary_positions() {
        let pool = LenderPool::new(vec![
            Lender::new("pricey", dec!(0.09), 100),
            Lender::new("cheap", dec!(0.02), 50),
        ]);
        let summary = pool.ranked_summary();
        assert_eq!(summary[0].rank, 1);
        assert_eq!(summary[0].name, "cheap");
        assert_eq!(summary[1].rank, 2);
        assert_eq!(summary[1].name, "pricey");
    }
}

//! Product category breakdown for the top/bottom bar charts.

use crate::models::OrderItem;
use crate::ranking::{count_by_key, KeyCount};

/// Per-category item counts, ranked descending.
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryBreakdown {
    ranked: Vec<KeyCount>,
}

impl CategoryBreakdown {
    pub fn from_items(items: &[OrderItem]) -> Self {
        CategoryBreakdown {
            ranked: count_by_key(items.iter().map(|i| i.category.as_str())),
        }
    }

    /// Full ranking, count descending.
    pub fn ranked(&self) -> &[KeyCount] {
        &self.ranked
    }

    /// Highest-selling `n` categories. Shorter when fewer exist.
    pub fn top(&self, n: usize) -> &[KeyCount] {
        &self.ranked[..n.min(self.ranked.len())]
    }

    /// Lowest-selling `n` categories, still in descending order (the tail of
    /// the ranking, not a re-sort). Overlaps `top` when few categories exist.
    pub fn bottom(&self, n: usize) -> &[KeyCount] {
        &self.ranked[self.ranked.len().saturating_sub(n)..]
    }
}

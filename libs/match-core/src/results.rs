//! Matched pairs in the order they were matched.

use crate::types::MatchedPair;

#[derive(Debug, Clone, Default)]
pub struct ResultsTable {
    rows: Vec<MatchedPair>,
}

impl ResultsTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, row: MatchedPair) {
        self.rows.push(row);
    }

    pub fn rows(&self) -> &[MatchedPair] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn clear(&mut self) {
        self.rows.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn row(q: &str, a: &str) -> MatchedPair {
        MatchedPair {
            question: q.to_string(),
            answer: a.to_string(),
        }
    }

    #[test]
    fn rows_keep_match_order() {
        let mut table = ResultsTable::new();
        table.record(row("Q2", "A2"));
        table.record(row("Q1", "A1"));
        assert_eq!(table.rows(), &[row("Q2", "A2"), row("Q1", "A1")]);
        table.clear();
        assert!(table.is_empty());
    }
}

//! Per-side event history

use serde::Serialize;

use super::Slot;

/// Event log for both sides, oldest entry first.
///
/// The host owns the buffers and resends both in full on every change, so
/// this is replaced wholesale rather than appended to.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct History {
    sides: [Vec<String>; 2],
}

impl History {
    /// Build from the two per-side sequences.
    pub fn new(sides: [Vec<String>; 2]) -> Self {
        Self { sides }
    }

    /// Replace both sides.
    pub fn replace(&mut self, sides: [Vec<String>; 2]) {
        self.sides = sides;
    }

    /// Entries for one side, oldest first.
    pub fn side(&self, slot: Slot) -> &[String] {
        &self.sides[slot.index()]
    }

    /// Number of table rows needed to show both sides.
    pub fn row_count(&self) -> usize {
        self.sides[0].len().max(self.sides[1].len())
    }

    pub fn is_empty(&self) -> bool {
        self.row_count() == 0
    }

    /// Rows most-recent-first, pairing the n-th newest entry of each side.
    ///
    /// The shorter side yields `None` once exhausted.
    pub fn rows(&self) -> impl Iterator<Item = [Option<&str>; 2]> + '_ {
        let mut a = self.sides[0].iter().rev();
        let mut b = self.sides[1].iter().rev();
        (0..self.row_count()).map(move |_| {
            [
                a.next().map(String::as_str),
                b.next().map(String::as_str),
            ]
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_rows_most_recent_first() {
        let history = History::new([strings(&["a1", "a2", "a3"]), strings(&["b1", "b2"])]);
        let rows: Vec<_> = history.rows().collect();

        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0], [Some("a3"), Some("b2")]);
        assert_eq!(rows[1], [Some("a2"), Some("b1")]);
        assert_eq!(rows[2], [Some("a1"), None]);
    }

    #[test]
    fn test_empty_history() {
        let history = History::default();
        assert!(history.is_empty());
        assert_eq!(history.rows().count(), 0);
    }

    #[test]
    fn test_replace() {
        let mut history = History::new([strings(&["a"]), vec![]]);
        history.replace([vec![], strings(&["b1", "b2"])]);
        assert!(history.side(Slot::Zero).is_empty());
        assert_eq!(history.side(Slot::One).len(), 2);
        assert_eq!(history.rows().next(), Some([None, Some("b2")]));
    }
}

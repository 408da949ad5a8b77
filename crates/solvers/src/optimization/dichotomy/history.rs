#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The interval at the start of one dichotomy iteration.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Record {
    /// Lower bound before narrowing.
    pub lower: f64,

    /// Upper bound before narrowing.
    pub upper: f64,

    /// Midpoint of `[lower, upper]`.
    pub midpoint: f64,
}

impl Record {
    /// Returns the width of the recorded interval.
    #[must_use]
    pub fn width(&self) -> f64 {
        self.upper - self.lower
    }
}

/// Per-iteration history of a dichotomy search.
///
/// Holds one [`Record`] and one width per iteration, in order. Both sequences
/// always have the same length.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct History {
    records: Vec<Record>,
    widths: Vec<f64>,
}

impl History {
    /// Appends the interval `[lower, upper]` before it is narrowed.
    pub(super) fn push(&mut self, lower: f64, upper: f64) {
        self.records.push(Record {
            lower,
            upper,
            midpoint: (lower + upper) / 2.0,
        });
        self.widths.push(upper - lower);
    }

    /// Returns the number of recorded iterations.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns true if no iteration was recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Returns the recorded intervals.
    #[must_use]
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    /// Returns the recorded interval widths.
    #[must_use]
    pub fn widths(&self) -> &[f64] {
        &self.widths
    }

    /// Splits the history into its records and widths.
    #[must_use]
    pub fn into_parts(self) -> (Vec<Record>, Vec<f64>) {
        (self.records, self.widths)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn push_records_interval_and_width() {
        let mut history = History::default();
        history.push(0.0, 4.0);
        history.push(0.0, 2.5);

        assert_eq!(history.len(), 2);
        assert_relative_eq!(history.records()[0].midpoint, 2.0);
        assert_relative_eq!(history.records()[1].width(), 2.5);
        assert_eq!(history.widths(), &[4.0, 2.5]);
    }

    #[test]
    fn into_parts_keeps_lengths_equal() {
        let mut history = History::default();
        assert!(history.is_empty());

        history.push(-1.0, 1.0);
        let (records, widths) = history.into_parts();

        assert_eq!(records.len(), widths.len());
        assert_relative_eq!(records[0].midpoint, 0.0);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn history_survives_json() {
        let mut history = History::default();
        history.push(-4.0, 0.0);
        history.push(-4.0, -1.5);

        let json = serde_json::to_string(&history).expect("serializes");
        let restored: History = serde_json::from_str(&json).expect("deserializes");

        assert_eq!(restored, history);
        assert!(json.contains("\"midpoint\":-2.0"), "unexpected layout: {json}");
    }
}

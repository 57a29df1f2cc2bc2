//! Aggregate figures over the students table

use serde::{Deserialize, Serialize};

/// GET /stats payload
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Stats {
    pub total_students: i64,
    pub avg_marks: f64,
    pub highest_marks: i64,
}

impl Stats {
    /// Build from raw aggregate values.
    ///
    /// `AVG` and `MAX` are NULL over an empty table; both report as 0.
    pub fn from_aggregates(total: i64, avg: Option<f64>, max: Option<i64>) -> Self {
        Self {
            total_students: total,
            avg_marks: avg.map(round_one_decimal).unwrap_or(0.0),
            highest_marks: max.unwrap_or(0),
        }
    }
}

/// Half-way values go to the even neighbour (79.25 -> 79.2).
fn round_one_decimal(value: f64) -> f64 {
    (value * 10.0).round_ties_even() / 10.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_table_reports_zeroes() {
        let stats = Stats::from_aggregates(0, None, None);
        assert_eq!(stats.total_students, 0);
        assert_eq!(stats.avg_marks, 0.0);
        assert_eq!(stats.highest_marks, 0);
    }

    #[test]
    fn sample_data_average_rounds_to_one_decimal() {
        // 92, 75, 88, 64
        let stats = Stats::from_aggregates(4, Some(79.75), Some(92));
        assert_eq!(stats.avg_marks, 79.8);
        assert_eq!(stats.highest_marks, 92);
    }

    #[test]
    fn average_ties_round_to_even() {
        // 80, 80, 80, 77
        let stats = Stats::from_aggregates(4, Some(79.25), Some(80));
        assert_eq!(stats.avg_marks, 79.2);
        assert_eq!(Stats::from_aggregates(4, Some(80.75), Some(90)).avg_marks, 80.8);
    }

    #[test]
    fn serializes_with_api_field_names() {
        let value = serde_json::to_value(Stats::from_aggregates(2, Some(50.0), Some(60))).unwrap();
        assert_eq!(value["total_students"], 2);
        assert_eq!(value["avg_marks"], 50.0);
        assert_eq!(value["highest_marks"], 60);
    }
}

//! Series Merger
//!
//! Aligns historical and predicted monthly totals onto one label axis so a
//! line chart can draw two distinct segments on a shared timeline. Each side
//! is padded with `None` where the other side has values.

use serde::{Deserialize, Serialize};

use crate::models::TimePoint;

/// One position on the merged timeline
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MergedPoint {
    pub label: String,
    pub historical: Option<f64>,
    pub predicted: Option<f64>,
}

/// Historical and predicted series on a shared, ordered label axis
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MergedSeries {
    pub points: Vec<MergedPoint>,
}

impl MergedSeries {
    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Axis labels in timeline order
    pub fn labels(&self) -> Vec<String> {
        self.points.iter().map(|p| p.label.clone()).collect()
    }

    /// Historical dataset, `None` over the prediction range
    pub fn historical_values(&self) -> Vec<Option<f64>> {
        self.points.iter().map(|p| p.historical).collect()
    }

    /// Prediction dataset, `None` over the historical range
    pub fn predicted_values(&self) -> Vec<Option<f64>> {
        self.points.iter().map(|p| p.predicted).collect()
    }
}

/// Concatenate historical then predicted points without reordering
///
/// Historical `YYYY-MM` periods are relabeled for display; prediction labels
/// are used as-is.
pub fn merge(historical: &[TimePoint], predicted: &[TimePoint]) -> MergedSeries {
    let mut points = Vec::with_capacity(historical.len() + predicted.len());

    points.extend(historical.iter().map(|p| MergedPoint {
        label: p.display_label(),
        historical: Some(p.amount),
        predicted: None,
    }));

    points.extend(predicted.iter().map(|p| MergedPoint {
        label: p.period.clone(),
        historical: None,
        predicted: Some(p.amount),
    }));

    MergedSeries { points }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn series(items: &[(&str, f64)]) -> Vec<TimePoint> {
        items.iter().map(|(p, a)| TimePoint::new(*p, *a)).collect()
    }

    #[test]
    fn test_merge_pads_each_side() {
        let historical = series(&[("2024-01", 100.0), ("2024-02", 0.0), ("2024-03", 150.0)]);
        let predicted = series(&[("Apr 2024", 160.0), ("May 2024", 170.0)]);

        let merged = merge(&historical, &predicted);

        assert_eq!(merged.len(), 5);
        assert_eq!(
            merged.labels(),
            vec!["Jan 2024", "Feb 2024", "Mar 2024", "Apr 2024", "May 2024"]
        );
        assert_eq!(
            merged.historical_values(),
            vec![Some(100.0), Some(0.0), Some(150.0), None, None]
        );
        assert_eq!(
            merged.predicted_values(),
            vec![None, None, None, Some(160.0), Some(170.0)]
        );
    }

    #[test]
    fn test_merge_presence_is_complementary() {
        for h in 0..5 {
            for p in 0..4 {
                let historical: Vec<TimePoint> = (0..h)
                    .map(|i| TimePoint::new(format!("2024-{:02}", i + 1), 10.0 * i as f64))
                    .collect();
                let predicted: Vec<TimePoint> = (0..p)
                    .map(|i| TimePoint::new(format!("P{}", i), 5.0))
                    .collect();

                let merged = merge(&historical, &predicted);
                assert_eq!(merged.len(), h + p);
                for (i, point) in merged.points.iter().enumerate() {
                    assert_eq!(point.historical.is_some(), i < h);
                    assert_eq!(point.predicted.is_some(), i >= h);
                }
            }
        }
    }

    #[test]
    fn test_merge_empty_inputs() {
        assert!(merge(&[], &[]).is_empty());

        let only_predictions = merge(&[], &series(&[("Jun 2024", 80.0)]));
        assert_eq!(only_predictions.labels(), vec!["Jun 2024"]);
        assert_eq!(only_predictions.historical_values(), vec![None]);
    }
}

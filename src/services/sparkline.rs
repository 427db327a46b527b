use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;

use crate::constants::GRAPH_SCALE;

/// Rescales a price series into the device graph range `[0, GRAPH_SCALE]`:
/// the minimum maps to 0, the maximum to the full scale, everything else
/// linearly in between.
///
/// A flat series has no slope to draw, so every point maps to mid-scale and
/// the device shows a level line at half height instead of dividing by zero.
pub fn normalize(series: &[Decimal]) -> Vec<f64> {
    let (Some(mn), Some(mx)) = (series.iter().min(), series.iter().max()) else {
        return Vec::new();
    };

    let scale = Decimal::from(GRAPH_SCALE);
    let range = mx - mn;

    if range.is_zero() {
        let mid = (scale / Decimal::TWO).to_f64().unwrap_or(0.0);
        return vec![mid; series.len()];
    }

    series
        .iter()
        .map(|value| ((value - mn) * scale / range).to_f64().unwrap_or(0.0))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-9;

    fn series_of(values: &[i64]) -> Vec<Decimal> {
        values.iter().map(|v| Decimal::from(*v)).collect()
    }

    #[test]
    fn min_maps_to_zero_and_max_to_full_scale() {
        let series = series_of(&[2900, 2950, 3000, 3100]);
        let normalized = normalize(&series);

        assert!((normalized[0] - 0.0).abs() < EPSILON);
        assert!((normalized[3] - 16.0).abs() < EPSILON);
    }

    #[test]
    fn strictly_increasing_series_keeps_strict_order() {
        let series: Vec<Decimal> = (0..14).map(|i| Decimal::from(2900 + i * 15)).collect();
        let normalized = normalize(&series);

        assert!((normalized[0] - 0.0).abs() < EPSILON);
        assert!((normalized[13] - 16.0).abs() < EPSILON);
        for window in normalized.windows(2) {
            assert!(window[0] < window[1]);
        }
    }

    #[test]
    fn order_preserved_for_unsorted_input() {
        let series = series_of(&[50, 10, 70, 30]);
        let normalized = normalize(&series);

        // series[1] < series[3] < series[0] < series[2]
        assert!(normalized[1] < normalized[3]);
        assert!(normalized[3] < normalized[0]);
        assert!(normalized[0] < normalized[2]);
    }

    #[test]
    fn flat_series_maps_to_mid_scale() {
        // Memastikan deret datar tidak membagi dengan nol
        let series = vec![Decimal::from(50); 14];
        let normalized = normalize(&series);

        assert_eq!(normalized.len(), 14);
        for value in normalized {
            assert!((value - 8.0).abs() < EPSILON);
        }
    }

    #[test]
    fn fractional_prices_scale_exactly() {
        let series: Vec<Decimal> = ["0.0731", "0.0775", "0.0819"]
            .iter()
            .map(|s| s.parse().expect("decimal literal"))
            .collect();
        let normalized = normalize(&series);

        assert!((normalized[0] - 0.0).abs() < EPSILON);
        assert!((normalized[1] - 8.0).abs() < EPSILON);
        assert!((normalized[2] - 16.0).abs() < EPSILON);
    }

    #[test]
    fn empty_series_stays_empty() {
        assert!(normalize(&[]).is_empty());
    }
}

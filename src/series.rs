//! Chart Series
//!
//! The parallel-array time series served by the chart-data endpoint, plus the
//! stride decimation that bounds how many points reach the canvas.

use serde::Deserialize;

/// Maximum number of points handed to the chart surface.
pub const MAX_CHART_POINTS: usize = 100;

/// Parallel arrays of timestamps and per-metric values, oldest first.
///
/// Rebuilt wholesale on every chart fetch; there is no incremental merge.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ChartSeries {
    #[serde(default)]
    pub labels: Vec<String>,
    #[serde(default)]
    pub pressure: Vec<f64>,
    #[serde(default)]
    pub moisture: Vec<f64>,
    #[serde(default)]
    pub acoustic: Vec<f64>,
}

impl ChartSeries {
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Truncate all four arrays to the shortest one, so downstream code can
    /// rely on equal lengths even when the payload was malformed.
    pub fn normalize(&mut self) {
        let len = self
            .labels
            .len()
            .min(self.pressure.len())
            .min(self.moisture.len())
            .min(self.acoustic.len());
        self.labels.truncate(len);
        self.pressure.truncate(len);
        self.moisture.truncate(len);
        self.acoustic.truncate(len);
    }

    /// Downsample to at most `cap` points by keeping every `step`-th sample,
    /// where `step = ceil(len / cap)`.
    ///
    /// Indices 0, step, 2*step, ... are kept with one stride across all four
    /// arrays, preserving temporal order. This is plain decimation with no
    /// averaging: a short spike between kept samples disappears from the plot.
    pub fn decimate(mut self, cap: usize) -> ChartSeries {
        self.normalize();
        let len = self.len();
        if cap == 0 || len <= cap {
            return self;
        }

        let step = len.div_ceil(cap);
        ChartSeries {
            labels: keep_stride(self.labels, step),
            pressure: keep_stride(self.pressure, step),
            moisture: keep_stride(self.moisture, step),
            acoustic: keep_stride(self.acoustic, step),
        }
    }
}

fn keep_stride<T>(values: Vec<T>, step: usize) -> Vec<T> {
    values
        .into_iter()
        .enumerate()
        .filter_map(|(i, v)| (i % step == 0).then_some(v))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn series_of(len: usize) -> ChartSeries {
        ChartSeries {
            labels: (0..len).map(|i| format!("t{i}")).collect(),
            pressure: (0..len).map(|i| i as f64).collect(),
            moisture: (0..len).map(|i| i as f64 + 0.25).collect(),
            acoustic: (0..len).map(|i| i as f64 + 0.5).collect(),
        }
    }

    #[test]
    fn test_short_series_passes_through_untouched() {
        let original = series_of(50);
        let decimated = original.clone().decimate(MAX_CHART_POINTS);
        assert_eq!(decimated, original);
    }

    #[test]
    fn test_series_at_the_cap_is_not_decimated() {
        let decimated = series_of(100).decimate(MAX_CHART_POINTS);
        assert_eq!(decimated.len(), 100);
    }

    #[test]
    fn test_oversized_series_keeps_a_constant_stride() {
        let decimated = series_of(250).decimate(MAX_CHART_POINTS);

        // step = ceil(250 / 100) = 3, kept indices 0, 3, 6, ..., 249
        assert_eq!(decimated.len(), 84);
        assert_eq!(decimated.labels[0], "t0");
        assert_eq!(decimated.labels[1], "t3");
        assert_eq!(decimated.labels[83], "t249");
        assert_eq!(decimated.pressure[1], 3.0);
    }

    #[test]
    fn test_one_past_the_cap_halves_the_series() {
        let decimated = series_of(101).decimate(MAX_CHART_POINTS);
        assert_eq!(decimated.len(), 51);
        assert_eq!(decimated.labels[1], "t2");
    }

    #[test]
    fn test_output_length_matches_ceil_of_len_over_step() {
        for len in [101usize, 150, 199, 200, 201, 999, 1000] {
            let step = len.div_ceil(MAX_CHART_POINTS);
            let expected = len.div_ceil(step);
            let decimated = series_of(len).decimate(MAX_CHART_POINTS);
            assert_eq!(decimated.len(), expected, "len {len}");
            assert!(decimated.len() <= MAX_CHART_POINTS, "len {len}");
        }
    }

    #[test]
    fn test_all_four_arrays_stay_parallel() {
        let decimated = series_of(777).decimate(MAX_CHART_POINTS);
        assert_eq!(decimated.labels.len(), decimated.pressure.len());
        assert_eq!(decimated.labels.len(), decimated.moisture.len());
        assert_eq!(decimated.labels.len(), decimated.acoustic.len());
    }

    #[test]
    fn test_ragged_payload_is_truncated_to_the_shortest_array() {
        let mut series = series_of(10);
        series.acoustic.truncate(7);
        series.normalize();
        assert_eq!(series.len(), 7);
        assert_eq!(series.pressure.len(), 7);
    }
}

use std::path::Path;

/// Wall-clock statistics for one benchmark scene.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct TimingSeries {
    pub mean_ms: f64,
    pub median_ms: f64,
    pub p95_ms: f64,
    pub min_ms: f64,
    pub max_ms: f64,
}

impl TimingSeries {
    /// Sorts `samples` in place and derives the summary statistics.
    pub fn from_samples(samples: &mut [f64]) -> Self {
        assert!(!samples.is_empty());
        samples.sort_by(|a, b| a.partial_cmp(b).unwrap());
        let mean = samples.iter().sum::<f64>() / samples.len() as f64;
        Self {
            mean_ms: mean,
            median_ms: percentile(samples, 50.0),
            p95_ms: percentile(samples, 95.0),
            min_ms: samples[0],
            max_ms: samples[samples.len() - 1],
        }
    }
}

/// Nearest-rank percentile over sorted samples.
fn percentile(sorted: &[f64], p: f64) -> f64 {
    let rank = ((p / 100.0) * sorted.len() as f64).ceil() as usize;
    sorted[rank.clamp(1, sorted.len()) - 1]
}

/// Result of one benchmark scene.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct BenchmarkResult {
    pub scene_name: String,
    pub voxel_count: usize,
    pub run_count: u32,
    pub timings: TimingSeries,
}

/// Write all results as pretty JSON.
pub fn write_report(results: &[BenchmarkResult], path: &Path) -> Result<(), String> {
    let json = serde_json::to_string_pretty(results).map_err(|e| e.to_string())?;
    std::fs::write(path, json).map_err(|e| format!("write {path:?}: {e}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_timing_series_statistics() {
        let mut samples = vec![5.0, 1.0, 3.0, 2.0, 4.0];
        let series = TimingSeries::from_samples(&mut samples);
        assert_eq!(series.min_ms, 1.0);
        assert_eq!(series.max_ms, 5.0);
        assert_eq!(series.median_ms, 3.0);
        assert!((series.mean_ms - 3.0).abs() < 1e-9);
    }

    #[test]
    fn test_percentile_single_sample() {
        let mut samples = vec![7.0];
        let series = TimingSeries::from_samples(&mut samples);
        assert_eq!(series.p95_ms, 7.0);
        assert_eq!(series.median_ms, 7.0);
    }
}

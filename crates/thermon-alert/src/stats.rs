use thermon_common::types::Stats;

/// Minimum window length before a trend is reported.
pub const MIN_TREND_POINTS: usize = 4;

/// Computes window statistics over `values`, oldest first.
///
/// The trend splits the window at `len / 2`: on an odd length the newer
/// half holds the extra reading.
pub fn compute(values: &[f64]) -> Stats {
    if values.is_empty() {
        return Stats::default();
    }

    let count = values.len();
    let mean = average(values);

    let stdev = if count >= 2 {
        let sum_sq: f64 = values.iter().map(|v| (v - mean).powi(2)).sum();
        (sum_sq / (count - 1) as f64).sqrt()
    } else {
        0.0
    };

    let min = values.iter().copied().fold(f64::INFINITY, f64::min);
    let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);

    let trend = if count >= MIN_TREND_POINTS {
        let (older, newer) = values.split_at(count / 2);
        average(newer) - average(older)
    } else {
        0.0
    };

    Stats {
        count,
        mean,
        stdev,
        min,
        max,
        trend,
    }
}

fn average(values: &[f64]) -> f64 {
    values.iter().sum::<f64>() / values.len() as f64
}

/// Observables averaged over the measurement sweeps of one run, or
/// aggregated over independent runs.
#[derive(Debug)]
pub struct SweepResult {
    /// ⟨E⟩ — mean energy per bond, in [0, 1].
    pub energy: f64,
    /// ⟨E²⟩.
    pub energy2: f64,
    /// ⟨M⟩ — mean per-state occupation fractions, length q.
    pub magnetization: Vec<f64>,
    /// Number of measurements entering the averages.
    pub n_measurements: usize,
}

impl SweepResult {
    /// Average results across independent runs.
    pub fn aggregate(results: &[Self]) -> Self {
        let n = results.len() as f64;
        let q = results[0].magnetization.len();

        let mut agg = SweepResult {
            energy: 0.0,
            energy2: 0.0,
            magnetization: vec![0.0; q],
            n_measurements: 0,
        };

        for r in results {
            agg.energy += r.energy;
            agg.energy2 += r.energy2;
            for (a, &v) in agg.magnetization.iter_mut().zip(r.magnetization.iter()) {
                *a += v;
            }
            agg.n_measurements += r.n_measurements;
        }

        agg.energy /= n;
        agg.energy2 /= n;
        for v in agg.magnetization.iter_mut() {
            *v /= n;
        }

        agg
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_aggregate_averages_runs() {
        let a = SweepResult {
            energy: 0.2,
            energy2: 0.05,
            magnetization: vec![0.6, 0.4],
            n_measurements: 10,
        };
        let b = SweepResult {
            energy: 0.4,
            energy2: 0.15,
            magnetization: vec![0.2, 0.8],
            n_measurements: 10,
        };

        let agg = SweepResult::aggregate(&[a, b]);
        assert!((agg.energy - 0.3).abs() < 1e-12);
        assert!((agg.energy2 - 0.1).abs() < 1e-12);
        assert!((agg.magnetization[0] - 0.4).abs() < 1e-12);
        assert!((agg.magnetization[1] - 0.6).abs() < 1e-12);
        assert_eq!(agg.n_measurements, 20);
    }
}

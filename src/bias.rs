//! Ramping bias profile construction and normalization.
use itertools::Itertools;
use log::debug;
use nalgebra::Vector3;

use crate::{attitude::AttitudeSample, error::Error};

/// Per-sample instantaneous bias over an attitude sequence, in arcsec/s.
/// Ramps linearly from zero and is normalized so that its trapezoidal
/// time-integral on the reference axis matches the requested
/// time-integrated bias exactly.
#[derive(Debug, Clone)]
pub struct BiasProfile {
    /// Seconds from sequence start, one entry per sample
    times_s: Vec<f64>,
    /// Instantaneous (roll, pitch, yaw) bias at each sample, in arcsec/s
    values: Vec<Vector3<f64>>,
    /// Reference axis: bias component with largest magnitude
    reference: usize,
    /// Normalization factor applied to all three axes
    factor: f64,
}

impl BiasProfile {
    /// Build the normalized ramp for `bias` (time-integrated target, in
    /// arcseconds) over the sampling instants of `samples`.
    pub fn ramp(bias: Vector3<f64>, samples: &[AttitudeSample]) -> Result<Self, Error> {
        if bias == Vector3::zeros() {
            return Err(Error::UndefinedNormalization);
        }

        let n = samples.len();
        if n < 2 {
            return Err(Error::NotEnoughSamples);
        }

        let mut reference = 0;
        for axis in 1..3 {
            if bias[axis].abs() > bias[reference].abs() {
                reference = axis;
            }
        }

        let t0 = samples[0].epoch;
        let times_s: Vec<f64> = samples
            .iter()
            .map(|sample| (sample.epoch - t0).to_seconds())
            .collect();

        // unscaled ramp, parametrized by sample index
        let mut values: Vec<Vector3<f64>> = (0..n)
            .map(|k| bias * (k as f64 / (n - 1) as f64))
            .collect();

        // time-integral achieved by the naive ramp on the reference axis
        let achieved: f64 = times_s
            .iter()
            .zip(values.iter())
            .tuple_windows()
            .map(|((ta, va), (tb, vb))| 0.5 * (va[reference] + vb[reference]) * (tb - ta))
            .sum();

        let factor = bias[reference] / achieved;
        for value in values.iter_mut() {
            *value *= factor;
        }

        debug!(
            "bias ramp: reference axis {}, normalization {:.6e}",
            reference, factor
        );

        Ok(Self {
            times_s,
            values,
            reference,
            factor,
        })
    }

    /// Number of samples
    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Reference axis index (0 roll, 1 pitch, 2 yaw)
    pub fn reference_axis(&self) -> usize {
        self.reference
    }

    /// Normalization factor that was applied
    pub fn factor(&self) -> f64 {
        self.factor
    }

    /// Instantaneous bias at sample `k`, in arcsec/s
    pub fn value(&self, k: usize) -> Vector3<f64> {
        self.values[k]
    }

    /// End-of-maneuver instantaneous bias, in arcsec/s
    pub fn end_value(&self) -> Vector3<f64> {
        *self.values.last().unwrap_or(&Vector3::zeros())
    }

    /// Consecutive-sample midpoint over step `k` (to `k`+1), in arcsec/s
    pub(crate) fn midpoint(&self, k: usize) -> Vector3<f64> {
        0.5 * (self.values[k] + self.values[k + 1])
    }

    /// Seconds elapsed over step `k`
    pub(crate) fn dt(&self, k: usize) -> f64 {
        self.times_s[k + 1] - self.times_s[k]
    }

    /// Trapezoidal time-integral of one axis, in arcseconds
    pub fn integral(&self, axis: usize) -> f64 {
        self.times_s
            .iter()
            .zip(self.values.iter())
            .tuple_windows()
            .map(|((ta, va), (tb, vb))| 0.5 * (va[axis] + vb[axis]) * (tb - ta))
            .sum()
    }
}

#[cfg(test)]
mod test {
    use super::BiasProfile;
    use crate::prelude::{Attitude, AttitudeSample, Duration, Epoch, Vector3};
    use rstest::rstest;

    fn sequence(n: usize, step_s: f64) -> Vec<AttitudeSample> {
        let t0 = Epoch::from_gregorian_tai_at_midnight(2020, 1, 1);
        (0..n)
            .map(|k| {
                AttitudeSample::new(
                    t0 + Duration::from_seconds(k as f64 * step_s),
                    Attitude::default(),
                )
            })
            .collect()
    }

    #[rstest]
    #[case(50, 4.1)]
    #[case(513, 1.0)]
    #[case(1024, 0.25)]
    fn normalization_invariant(#[case] n: usize, #[case] step_s: f64) {
        let bias = Vector3::new(-115.0, 123.0, 91.0);
        let profile = BiasProfile::ramp(bias, &sequence(n, step_s)).unwrap();

        assert_eq!(profile.reference_axis(), 1);
        assert_eq!(profile.len(), n);

        // reference axis integral matches the request exactly,
        // regardless of sampling
        assert!((profile.integral(1) - 123.0).abs() < 1.0E-9);

        // other axes are coupled: same factor, not independently normalized
        let end = profile.end_value();
        assert!((end.x / end.y - (-115.0 / 123.0)).abs() < 1.0E-12);
        assert!((end.z / end.y - (91.0 / 123.0)).abs() < 1.0E-12);
    }

    #[test]
    fn ramps_from_zero() {
        let bias = Vector3::new(100.0, 0.0, 0.0);
        let profile = BiasProfile::ramp(bias, &sequence(100, 1.0)).unwrap();

        assert_eq!(profile.reference_axis(), 0);
        assert_eq!(profile.value(0), Vector3::zeros());

        // linear in sample index
        let half = profile.value(49);
        let mid = 49.0 / 99.0;
        assert!((half.x - profile.end_value().x * mid / 1.0).abs() < 1.0E-9);
    }

    #[test]
    fn null_bias_rejected() {
        let err = BiasProfile::ramp(Vector3::zeros(), &sequence(10, 1.0));
        assert!(err.is_err());
    }

    #[test]
    fn single_sample_rejected() {
        let bias = Vector3::new(1.0, 0.0, 0.0);
        assert!(BiasProfile::ramp(bias, &sequence(1, 1.0)).is_err());
    }
}

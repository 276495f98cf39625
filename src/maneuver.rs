//! Eigenaxis slew kinematics.
use log::debug;
use nalgebra::{Unit, UnitQuaternion, Vector3};

use crate::{
    attitude::{Attitude, AttitudeSample},
    constants::{
        MAX_SLEW_RATE_RAD_S, MIN_SLEW_ANGLE_RAD, POST_SLEW_DWELL_S, PRE_SLEW_DWELL_S,
        SLEW_ACCEL_RAD_S2,
    },
    error::Error,
    prelude::{Duration, Epoch},
};

/// Trapezoidal rate profile: accelerate at [SLEW_ACCEL_RAD_S2] up to
/// [MAX_SLEW_RATE_RAD_S], coast, decelerate. Short slews never reach the
/// coast rate and the profile degenerates to a triangle.
#[derive(Debug, Clone, Copy)]
struct SlewProfile {
    /// Total slew angle, in radians
    angle: f64,
    /// Ramp up (and down) duration, in seconds
    t_ramp: f64,
    /// Coast duration, in seconds
    t_coast: f64,
}

impl SlewProfile {
    fn new(angle: f64) -> Self {
        let ramp_angle = MAX_SLEW_RATE_RAD_S.powi(2) / (2.0 * SLEW_ACCEL_RAD_S2);
        if 2.0 * ramp_angle >= angle {
            Self {
                angle,
                t_ramp: (angle / SLEW_ACCEL_RAD_S2).sqrt(),
                t_coast: 0.0,
            }
        } else {
            Self {
                angle,
                t_ramp: MAX_SLEW_RATE_RAD_S / SLEW_ACCEL_RAD_S2,
                t_coast: (angle - 2.0 * ramp_angle) / MAX_SLEW_RATE_RAD_S,
            }
        }
    }

    /// Slewing time, dwells excluded, in seconds
    fn slew_seconds(&self) -> f64 {
        2.0 * self.t_ramp + self.t_coast
    }

    /// Sequence duration, dwells included, in seconds
    fn total_seconds(&self) -> f64 {
        PRE_SLEW_DWELL_S + self.slew_seconds() + POST_SLEW_DWELL_S
    }

    /// Angle traversed `t` seconds after the sequence start, in radians
    fn angle_at(&self, t: f64) -> f64 {
        let t = (t - PRE_SLEW_DWELL_S).clamp(0.0, self.slew_seconds());
        if t < self.t_ramp {
            0.5 * SLEW_ACCEL_RAD_S2 * t.powi(2)
        } else if t < self.t_ramp + self.t_coast {
            let ramp_angle = 0.5 * SLEW_ACCEL_RAD_S2 * self.t_ramp.powi(2);
            let peak_rate = SLEW_ACCEL_RAD_S2 * self.t_ramp;
            ramp_angle + peak_rate * (t - self.t_ramp)
        } else {
            self.angle - 0.5 * SLEW_ACCEL_RAD_S2 * (self.slew_seconds() - t).powi(2)
        }
    }
}

/// Commanded rotation from one [Attitude] to another.
#[derive(Debug, Clone)]
pub struct Maneuver {
    /// Initial [Attitude]
    pub initial: Attitude,
    /// Target [Attitude]
    pub target: Attitude,
    /// Slew eigenaxis, in the initial body frame
    axis: Unit<Vector3<f64>>,
    /// Rate profile
    profile: SlewProfile,
}

impl Maneuver {
    /// Resolve the eigenaxis rotation between both endpoints.
    /// Identical endpoints cannot be slewed and are rejected.
    pub fn new(initial: Attitude, target: Attitude) -> Result<Self, Error> {
        let delta = initial.quaternion().inverse() * target.quaternion();

        let mut q = *delta.quaternion();
        if q.w < 0.0 {
            q = -q;
        }

        let sin_half = (q.i.powi(2) + q.j.powi(2) + q.k.powi(2)).sqrt();
        let angle = 2.0 * sin_half.atan2(q.w);
        if angle < MIN_SLEW_ANGLE_RAD {
            return Err(Error::DegenerateManeuver);
        }

        let axis = Unit::new_unchecked(Vector3::new(q.i, q.j, q.k) / sin_half);
        let profile = SlewProfile::new(angle);

        debug!(
            "slew {:.3}° in {:.1} s",
            angle.to_degrees(),
            profile.slew_seconds()
        );

        Ok(Self {
            initial,
            target,
            axis,
            profile,
        })
    }

    /// Total slew angle, in degrees
    pub fn angle(&self) -> f64 {
        self.profile.angle.to_degrees()
    }

    /// Sequence duration, settling dwells included
    pub fn duration(&self) -> Duration {
        Duration::from_seconds(self.profile.total_seconds())
    }

    /// Timestamped intermediate attitudes, sampled every `step` from `t0`.
    /// The sequence always terminates on the target attitude, with a
    /// final partial step when the duration is not a multiple of `step`.
    pub fn attitudes(&self, t0: Epoch, step: Duration) -> Result<Vec<AttitudeSample>, Error> {
        if step <= Duration::ZERO {
            return Err(Error::InvalidStepSize);
        }

        let step_s = step.to_seconds();
        let total = self.profile.total_seconds();
        let n_full = (total / step_s).floor() as usize;

        let q0 = self.initial.quaternion();

        let mut samples = Vec::with_capacity(n_full + 2);
        for k in 0..=n_full {
            let t = k as f64 * step_s;
            samples.push(self.sample_at(&q0, t0, t));
        }

        if total - n_full as f64 * step_s > 1.0E-9 {
            samples.push(self.sample_at(&q0, t0, total));
        }

        Ok(samples)
    }

    fn sample_at(&self, q0: &UnitQuaternion<f64>, t0: Epoch, t: f64) -> AttitudeSample {
        let theta = self.profile.angle_at(t);
        let q = q0 * UnitQuaternion::from_axis_angle(&self.axis, theta);
        AttitudeSample::new(t0 + Duration::from_seconds(t), Attitude::from_quaternion(&q))
    }
}

#[cfg(test)]
mod test {
    use super::Maneuver;
    use crate::prelude::{Attitude, Duration, Epoch};

    fn t0() -> Epoch {
        Epoch::from_gregorian_tai_at_midnight(2020, 1, 1)
    }

    #[test]
    fn pure_roll_slew() {
        let manvr = Maneuver::new(Attitude::new(0.0, 0.0, 0.0), Attitude::new(0.0, 0.0, 90.0))
            .unwrap();

        assert!((manvr.angle() - 90.0).abs() < 1.0E-9);
        assert!((manvr.duration().to_seconds() - 1521.59).abs() < 0.01);

        let samples = manvr
            .attitudes(t0(), Duration::from_seconds(1.0))
            .unwrap();

        assert_eq!(samples.len(), 1523);

        let first = samples.first().unwrap();
        let last = samples.last().unwrap();
        assert!((first.attitude.roll - 0.0).abs() < 1.0E-9);
        assert!((last.attitude.roll - 90.0).abs() < 1.0E-6);
        assert_eq!(first.epoch, t0());
        assert!(((last.epoch - first.epoch).to_seconds() - 1521.59).abs() < 0.01);

        // monotonic timestamps
        for pair in samples.windows(2) {
            assert!(pair[1].epoch > pair[0].epoch);
        }
    }

    #[test]
    fn dwells_bracket_the_slew() {
        let manvr = Maneuver::new(Attitude::new(0.0, 0.0, 0.0), Attitude::new(180.0, 0.0, 0.0))
            .unwrap();

        let samples = manvr
            .attitudes(t0(), Duration::from_seconds(10.0))
            .unwrap();

        // attitude holds still during both dwells
        assert_eq!(samples[0].attitude, samples[13].attitude);
        let last = samples.last().unwrap();
        assert_eq!(last.attitude, samples[samples.len() - 16].attitude);
    }

    #[test]
    fn degenerate_endpoints() {
        let att = Attitude::new(10.0, 20.0, 30.0);
        assert!(Maneuver::new(att, att).is_err());
    }

    #[test]
    fn invalid_step() {
        let manvr = Maneuver::new(Attitude::new(0.0, 0.0, 0.0), Attitude::new(0.0, 0.0, 90.0))
            .unwrap();
        assert!(manvr.attitudes(t0(), Duration::ZERO).is_err());
    }
}

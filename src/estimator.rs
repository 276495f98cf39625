//! Bias-ramp attitude error estimator.
use log::{debug, error, info};
use nalgebra::{UnitQuaternion, Vector3};

use crate::{
    attitude::{Attitude, AttitudeError, AttitudeSample},
    bias::BiasProfile,
    cfg::Config,
    error::Error,
    injection,
    maneuver::Maneuver,
    prelude::{Duration, Epoch},
};

/// Maneuver kinematics capability. The estimator only requires attitude
/// sequence generation; injection, quaternion conversion and differencing
/// carry default implementations shared by all models.
pub trait ManeuverKinematics {
    /// Timestamped intermediate attitudes of the maneuver,
    /// sampled every `step` from `t0`.
    fn attitudes(
        &self,
        initial: Attitude,
        target: Attitude,
        t0: Epoch,
        step: Duration,
    ) -> Result<Vec<AttitudeSample>, Error>;

    /// Perturb `samples` with a baseline offset (arcseconds) and a
    /// per-sample bias profile.
    fn inject(
        &self,
        samples: &[AttitudeSample],
        offset: Vector3<f64>,
        profile: &BiasProfile,
    ) -> Result<Vec<AttitudeSample>, Error> {
        injection::inject(samples, offset, profile)
    }

    /// Orientation quaternions of a sequence, one per sample.
    fn quaternions(&self, samples: &[AttitudeSample]) -> Vec<UnitQuaternion<f64>> {
        samples
            .iter()
            .map(|sample| sample.attitude.quaternion())
            .collect()
    }

    /// Angular difference between two orientations.
    fn delta(
        &self,
        reference: &UnitQuaternion<f64>,
        perturbed: &UnitQuaternion<f64>,
    ) -> AttitudeError {
        AttitudeError::between(reference, perturbed)
    }
}

/// Built-in kinematics: eigenaxis slew on a trapezoidal rate profile,
/// bracketed by settling dwells (see constants).
#[derive(Debug, Default, Clone, Copy)]
pub struct EigenaxisSlew {}

impl ManeuverKinematics for EigenaxisSlew {
    fn attitudes(
        &self,
        initial: Attitude,
        target: Attitude,
        t0: Epoch,
        step: Duration,
    ) -> Result<Vec<AttitudeSample>, Error> {
        Maneuver::new(initial, target)?.attitudes(t0, step)
    }
}

/// [Estimator] resolves the end-of-maneuver attitude error caused by a
/// linearly ramping bias accumulating during a maneuver.
pub struct Estimator {
    /// Estimator parametrization
    pub cfg: Config,
    /// [ManeuverKinematics] implementation
    kinematics: Box<dyn ManeuverKinematics>,
}

impl Estimator {
    /// Builds a new [Estimator] on the built-in [EigenaxisSlew] kinematics.
    pub fn new(cfg: Config) -> Self {
        Self {
            cfg,
            kinematics: Box::new(EigenaxisSlew::default()),
        }
    }

    /// Substitute the maneuver kinematics (flight dynamics library,
    /// test double..).
    pub fn with_kinematics(mut self, kinematics: Box<dyn ManeuverKinematics>) -> Self {
        self.kinematics = kinematics;
        self
    }

    /// Estimate the (roll, pitch, yaw) attitude error, in arcseconds, at
    /// the end of the `initial` to `target` maneuver, for a `bias` vector
    /// expressing the total time-integrated bias error (arcseconds).
    /// The axis with largest magnitude anchors the profile normalization;
    /// the other two axes are scaled by the same factor.
    pub fn estimate(
        &self,
        initial: Attitude,
        target: Attitude,
        bias: Vector3<f64>,
    ) -> Result<AttitudeError, Error> {
        if self.cfg.step_size <= Duration::ZERO {
            error!("rejected step size: {}", self.cfg.step_size);
            return Err(Error::InvalidStepSize);
        }

        if bias == Vector3::zeros() {
            error!("null bias vector: normalization undefined");
            return Err(Error::UndefinedNormalization);
        }

        let samples =
            self.kinematics
                .attitudes(initial, target, self.cfg.start, self.cfg.step_size)?;

        debug!(
            "{} attitude samples at dt={}",
            samples.len(),
            self.cfg.step_size
        );

        let profile = BiasProfile::ramp(bias, &samples)?;
        let perturbed = self.kinematics.inject(&samples, Vector3::zeros(), &profile)?;

        let reference = self.kinematics.quaternions(&samples);
        let errored = self.kinematics.quaternions(&perturbed);

        let (q_ref, q_err) = match (reference.last(), errored.last()) {
            (Some(q_ref), Some(q_err)) => (q_ref, q_err),
            _ => return Err(Error::NotEnoughSamples),
        };

        let attitude_error = self.kinematics.delta(q_ref, q_err);

        if self.cfg.verbose {
            let end = profile.end_value();
            info!(
                "bias profile end values: [{:.4}, {:.4}, {:.4}] arcsec/s",
                end.x, end.y, end.z
            );
        }

        info!("{}", attitude_error);

        Ok(attitude_error)
    }
}

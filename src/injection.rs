//! Bias injection into an attitude sequence.
use nalgebra::{UnitQuaternion, Vector3};

use crate::{
    attitude::{Attitude, AttitudeSample},
    bias::BiasProfile,
    constants::ARCSEC_TO_RAD,
    error::Error,
};

/// Body frame rotation generated by a (roll, pitch, yaw) arcsecond triple.
/// The pitch axis opposes body Y: positive pitch raises the boresight.
fn body_rotation(rpy_arcsec: Vector3<f64>) -> UnitQuaternion<f64> {
    let scaled = Vector3::new(rpy_arcsec.x, -rpy_arcsec.y, rpy_arcsec.z) * ARCSEC_TO_RAD;
    UnitQuaternion::from_scaled_axis(scaled)
}

/// Perturb `samples` with a constant baseline `offset` (arcseconds) and a
/// per-sample bias `profile` (arcsec/s), integrated step by step in the
/// rotating body frame. Returns a sequence of identical length and
/// timestamps.
pub(crate) fn inject(
    samples: &[AttitudeSample],
    offset: Vector3<f64>,
    profile: &BiasProfile,
) -> Result<Vec<AttitudeSample>, Error> {
    if samples.len() < 2 {
        return Err(Error::NotEnoughSamples);
    }

    if profile.len() != samples.len() {
        return Err(Error::ProfileDimension);
    }

    let quaternions: Vec<UnitQuaternion<f64>> = samples
        .iter()
        .map(|sample| sample.attitude.quaternion())
        .collect();

    let mut perturbed = Vec::with_capacity(samples.len());

    let mut q = quaternions[0] * body_rotation(offset);
    perturbed.push(AttitudeSample::new(
        samples[0].epoch,
        Attitude::from_quaternion(&q),
    ));

    for k in 0..samples.len() - 1 {
        // commanded increment, then the bias accumulated over the step
        let slew = quaternions[k].inverse() * quaternions[k + 1];
        let accumulated = profile.midpoint(k) * profile.dt(k);

        q = q * slew * body_rotation(accumulated);
        perturbed.push(AttitudeSample::new(
            samples[k + 1].epoch,
            Attitude::from_quaternion(&q),
        ));
    }

    Ok(perturbed)
}

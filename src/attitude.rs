//! Attitude representation and quaternion conversions.
use nalgebra::{UnitQuaternion, Vector3};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::constants::RAD_TO_ARCSEC;
use crate::prelude::Epoch;

/// Spacecraft orientation, expressed as equatorial angles in degrees.
/// The body X axis (boresight) points at (ra, dec), roll is the
/// right-handed rotation about it.
#[derive(Debug, Default, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Attitude {
    /// Right ascension, in degrees
    pub ra: f64,
    /// Declination, in degrees
    pub dec: f64,
    /// Roll, in degrees
    pub roll: f64,
}

impl From<(f64, f64, f64)> for Attitude {
    fn from(v: (f64, f64, f64)) -> Self {
        Self {
            ra: v.0,
            dec: v.1,
            roll: v.2,
        }
    }
}

impl Attitude {
    pub fn new(ra: f64, dec: f64, roll: f64) -> Self {
        Self { ra, dec, roll }
    }

    /// Body to inertial rotation for this [Attitude].
    pub fn quaternion(&self) -> UnitQuaternion<f64> {
        let (ra, dec, roll) = (
            self.ra.to_radians(),
            self.dec.to_radians(),
            self.roll.to_radians(),
        );
        UnitQuaternion::from_axis_angle(&Vector3::z_axis(), ra)
            * UnitQuaternion::from_axis_angle(&Vector3::y_axis(), -dec)
            * UnitQuaternion::from_axis_angle(&Vector3::x_axis(), roll)
    }

    /// Recover equatorial angles from a body to inertial rotation.
    pub fn from_quaternion(q: &UnitQuaternion<f64>) -> Self {
        let x = q * Vector3::x();
        let ra = x.y.atan2(x.x);
        let dec = x.z.clamp(-1.0, 1.0).asin();

        // roll: body Y against the zero-roll frame
        let y = q * Vector3::y();
        let (sin_ra, cos_ra) = ra.sin_cos();
        let (sin_dec, cos_dec) = dec.sin_cos();
        let y0 = Vector3::new(-sin_ra, cos_ra, 0.0);
        let z0 = Vector3::new(-cos_ra * sin_dec, -sin_ra * sin_dec, cos_dec);
        let roll = y.dot(&z0).atan2(y.dot(&y0));

        Self {
            ra: ra.to_degrees().rem_euclid(360.0),
            dec: dec.to_degrees(),
            roll: roll.to_degrees().rem_euclid(360.0),
        }
    }
}

/// One timestamped sample of an attitude sequence.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct AttitudeSample {
    /// Sampling [Epoch]
    pub epoch: Epoch,
    /// [Attitude] at that instant
    pub attitude: Attitude,
}

impl AttitudeSample {
    pub fn new(epoch: Epoch, attitude: Attitude) -> Self {
        Self { epoch, attitude }
    }
}

/// End-of-maneuver attitude discrepancy, in arcseconds.
#[derive(Debug, Default, Copy, Clone, PartialEq)]
pub struct AttitudeError {
    /// Roll error, in arcseconds
    pub roll: f64,
    /// Pitch error, in arcseconds
    pub pitch: f64,
    /// Yaw error, in arcseconds
    pub yaw: f64,
}

impl AttitudeError {
    /// Small-angle decomposition of the rotation from `reference`
    /// to `perturbed`, in the reference body frame.
    pub fn between(reference: &UnitQuaternion<f64>, perturbed: &UnitQuaternion<f64>) -> Self {
        let delta = reference.inverse() * perturbed;
        let mut q = *delta.quaternion();
        if q.w < 0.0 {
            q = -q;
        }
        Self {
            roll: 2.0 * q.i * RAD_TO_ARCSEC,
            pitch: 2.0 * q.j * RAD_TO_ARCSEC,
            yaw: 2.0 * q.k * RAD_TO_ARCSEC,
        }
    }
}

impl std::fmt::Display for AttitudeError {
    fn fmt(&self, fmt: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            fmt,
            "roll_err={:.2}\"  pitch_err={:.2}\"  yaw_err={:.2}\"",
            self.roll, self.pitch, self.yaw
        )
    }
}

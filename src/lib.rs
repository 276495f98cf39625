#![doc = include_str!("../README.md")]
#![cfg_attr(docrs, feature(doc_cfg))]

// private modules
mod attitude;
mod bias;
mod cfg;
mod constants;
mod error;
mod estimator;
mod injection;
mod maneuver;

#[cfg(test)]
mod tests;

// prelude
pub mod prelude {
    pub use crate::attitude::{Attitude, AttitudeError, AttitudeSample};
    pub use crate::bias::BiasProfile;
    pub use crate::cfg::Config;
    pub use crate::estimator::{EigenaxisSlew, Estimator, ManeuverKinematics};
    pub use crate::maneuver::Maneuver;
    // re-export
    pub use hifitime::{Duration, Epoch};
    pub use nalgebra::{UnitQuaternion, Vector3};
}

// pub export
pub use error::Error;

use crate::prelude::*;
use crate::tests::init_logger;
use crate::Error;

/// Test double: holds the initial attitude, no slewing at all.
struct Hold {
    samples: usize,
}

impl ManeuverKinematics for Hold {
    fn attitudes(
        &self,
        initial: Attitude,
        _target: Attitude,
        t0: Epoch,
        step: Duration,
    ) -> Result<Vec<AttitudeSample>, Error> {
        Ok((0..self.samples)
            .map(|k| AttitudeSample::new(t0 + step * k as f64, initial))
            .collect())
    }
}

#[test]
fn substituted_kinematics_isolate_the_estimator() {
    init_logger();

    // without any body rotation the injected roll bias is recovered
    // exactly, whatever the attitude held
    let estimator = Estimator::new(Config::default())
        .with_kinematics(Box::new(Hold { samples: 100 }));

    let err = estimator
        .estimate(
            Attitude::new(123.0, -45.0, 67.0),
            Attitude::new(0.0, 0.0, 0.0),
            Vector3::new(100.0, 0.0, 0.0),
        )
        .unwrap();

    assert!((err.roll - 100.0).abs() < 1.0E-3);
    assert!(err.pitch.abs() < 1.0E-3);
    assert!(err.yaw.abs() < 1.0E-3);
}

#[test]
fn short_sequences_are_rejected() {
    init_logger();

    let estimator = Estimator::new(Config::default())
        .with_kinematics(Box::new(Hold { samples: 1 }));

    let err = estimator.estimate(
        Attitude::new(0.0, 0.0, 0.0),
        Attitude::new(0.0, 0.0, 90.0),
        Vector3::new(100.0, 0.0, 0.0),
    );
    assert_eq!(err, Err(Error::NotEnoughSamples));
}

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// Step size must be strictly positive. Rejected before any
    /// attitude generation takes place.
    #[error("invalid step size (must be > 0)")]
    InvalidStepSize,

    /// The bias profile is anchored on its dominant axis: a null bias
    /// vector leaves the normalization factor undefined.
    #[error("normalization undefined (null bias vector)")]
    UndefinedNormalization,

    /// Identical (or nearly identical) maneuver endpoints: the slew
    /// eigenaxis cannot be resolved.
    #[error("degenerate maneuver (identical endpoints)")]
    DegenerateManeuver,

    /// Bias profile dimensions do not match the attitude sequence
    /// they are being injected into.
    #[error("bias profile length does not match attitude sequence")]
    ProfileDimension,

    /// Injection requires at least two attitude samples.
    #[error("not enough attitude samples")]
    NotEnoughSamples,
}

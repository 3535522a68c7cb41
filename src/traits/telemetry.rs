//! Input side: per-frame speed telemetry from the moving actor.

/// Velocity telemetry of the tracked actor, in meters per second.
///
/// Implemented by the host for whatever entity the speedometer follows.
pub trait ActorTelemetry {
    /// Speed along the facing direction.
    fn forward_speed(&self) -> f32;

    /// Magnitude of the full velocity vector.
    fn total_speed(&self) -> f32;

    /// The actor's own max movement speed.
    ///
    /// Must be positive; a user speed cap replaces it when configured.
    fn max_move_speed(&self) -> f32;
}

/// Which telemetry speed drives the readout.
///
/// # Default
///
/// Defaults to [`Total`](Self::Total).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum SpeedSource {
    /// Forward (lateral) speed only.
    Forward,
    /// Total speed of movement.
    #[default]
    Total,
}

impl SpeedSource {
    /// Picks the source from the `use_total_speed` setting.
    #[inline]
    pub const fn from_use_total(use_total_speed: bool) -> Self {
        if use_total_speed {
            SpeedSource::Total
        } else {
            SpeedSource::Forward
        }
    }

    /// Reads this source's speed from the actor.
    ///
    /// ```
    /// use speedo_hud::hal::MockActor;
    /// use speedo_hud::traits::SpeedSource;
    ///
    /// let actor = MockActor::new(20.0).with_speeds(8.0, 12.0);
    /// assert_eq!(SpeedSource::Forward.sample(&actor), 8.0);
    /// assert_eq!(SpeedSource::Total.sample(&actor), 12.0);
    /// ```
    #[inline]
    pub fn sample<A: ActorTelemetry + ?Sized>(&self, actor: &A) -> f32 {
        match self {
            SpeedSource::Forward => actor.forward_speed(),
            SpeedSource::Total => actor.total_speed(),
        }
    }
}

use crate::api::config::StarfieldConfig;

/// How the host should defer the next tick.
/// Picked once when the scheduler is built, never re-probed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cadence {
    /// Wait `delay_ms`, then request an animation frame for the tick.
    AnimationFrame { delay_ms: u32 },
    /// Plain delayed callback; used when no animation-frame primitive exists.
    Timeout { delay_ms: u32 },
}

impl Cadence {
    /// Prefer animation frames when the host has them.
    pub fn select(has_frame_primitive: bool, config: &StarfieldConfig) -> Self {
        if has_frame_primitive {
            Self::AnimationFrame {
                delay_ms: config.frame_delay_ms,
            }
        } else {
            Self::Timeout {
                delay_ms: config.fallback_delay_ms,
            }
        }
    }

    /// The timer delay before the tick (or its frame request) fires.
    pub fn delay_ms(self) -> u32 {
        match self {
            Self::AnimationFrame { delay_ms } | Self::Timeout { delay_ms } => delay_ms,
        }
    }

    pub fn uses_animation_frame(self) -> bool {
        matches!(self, Self::AnimationFrame { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prefers_animation_frame() {
        let cadence = Cadence::select(true, &StarfieldConfig::default());
        assert_eq!(cadence, Cadence::AnimationFrame { delay_ms: 25 });
        assert!(cadence.uses_animation_frame());
    }

    #[test]
    fn falls_back_to_timeout() {
        let cadence = Cadence::select(false, &StarfieldConfig::default());
        assert_eq!(cadence, Cadence::Timeout { delay_ms: 50 });
        assert!(!cadence.uses_animation_frame());
    }

    #[test]
    fn delays_come_from_config() {
        let config = StarfieldConfig {
            frame_delay_ms: 10,
            fallback_delay_ms: 40,
            ..StarfieldConfig::default()
        };
        assert_eq!(Cadence::select(true, &config).delay_ms(), 10);
        assert_eq!(Cadence::select(false, &config).delay_ms(), 40);
    }
}

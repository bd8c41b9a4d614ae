//! Time-based display effects
//!
//! Effects hold only their start time; what they look like at a given instant is
//! computed from elapsed time, so rendering stays a pure function of `now`.

use std::time::{Duration, Instant};

pub const FLASH_SUCCESS_DURATION: Duration = Duration::from_millis(200);
pub const FLASH_ERROR_DURATION: Duration = Duration::from_millis(500);
pub const REJECT_FLASH_DURATION: Duration = Duration::from_millis(200);
pub const SHAKE_DURATION: Duration = Duration::from_millis(300);

/// Number of right-then-left swings in a shake
const SHAKE_SWINGS: u32 = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EffectKind {
    FlashSuccess,
    FlashError,
    Shake,
}

#[derive(Debug, Clone, Copy)]
pub struct Effect {
    pub kind: EffectKind,
    started: Instant,
    duration: Duration,
}

impl Effect {
    pub fn new(kind: EffectKind, started: Instant, duration: Duration) -> Self {
        Effect {
            kind,
            started,
            duration,
        }
    }

    pub fn is_active(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.started) < self.duration
    }

    /// Horizontal display offset: -1, 0 or 1 columns
    pub fn offset(&self, now: Instant) -> i16 {
        match self.kind {
            EffectKind::Shake => {
                shake_offset(now.saturating_duration_since(self.started), self.duration)
            }
            _ => 0,
        }
    }
}

/// Shake position after `elapsed`: alternating +1/-1 for `SHAKE_SWINGS` swings,
/// then back at 0
pub fn shake_offset(elapsed: Duration, duration: Duration) -> i16 {
    if elapsed >= duration {
        return 0;
    }

    let step = (duration / (SHAKE_SWINGS * 2)).max(Duration::from_millis(1));
    let index = elapsed.as_millis() / step.as_millis();
    if index >= u128::from(SHAKE_SWINGS * 2) {
        0
    } else if index % 2 == 0 {
        1
    } else {
        -1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shake_alternates_then_settles() {
        let duration = Duration::from_millis(400);
        assert_eq!(shake_offset(Duration::from_millis(0), duration), 1);
        assert_eq!(shake_offset(Duration::from_millis(60), duration), -1);
        assert_eq!(shake_offset(Duration::from_millis(110), duration), 1);
        assert_eq!(shake_offset(Duration::from_millis(400), duration), 0);
        assert_eq!(shake_offset(Duration::from_secs(3), duration), 0);
    }

    #[test]
    fn test_effect_expires() {
        let start = Instant::now();
        let flash = Effect::new(EffectKind::FlashError, start, FLASH_ERROR_DURATION);
        assert!(flash.is_active(start));
        assert!(flash.is_active(start + Duration::from_millis(499)));
        assert!(!flash.is_active(start + FLASH_ERROR_DURATION));
        assert_eq!(flash.offset(start), 0);
    }
}

//! Alternating frame offset
//!
//! Some panels ghost when the same pixels stay dark for long. When enabled,
//! every other rendered frame is drawn shifted by a small offset.

use crate::config::OffsetConfig;

/// Alternates between `(0, 0)` and the configured shift
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct OffsetToggle {
    config: OffsetConfig,
    shifted: bool,
}

impl OffsetToggle {
    /// Create a toggle starting on the unshifted phase
    pub const fn new(config: OffsetConfig) -> Self {
        Self {
            config,
            shifted: false,
        }
    }

    /// Offset to draw the next frame at
    pub const fn current(&self) -> (i32, i32) {
        if self.config.enabled && self.shifted {
            (self.config.dx as i32, self.config.dy as i32)
        } else {
            (0, 0)
        }
    }

    /// Flip to the other phase after a frame reached the panel
    pub fn advance(&mut self) {
        if self.config.enabled {
            self.shifted = !self.shifted;
        }
    }

    /// Return to the unshifted phase
    pub fn reset(&mut self) {
        self.shifted = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_disabled_never_shifts() {
        let mut toggle = OffsetToggle::new(OffsetConfig::default());
        for _ in 0..4 {
            assert_eq!(toggle.current(), (0, 0));
            toggle.advance();
        }
    }

    #[test]
    fn test_enabled_alternates() {
        let mut toggle = OffsetToggle::new(OffsetConfig {
            enabled: true,
            dx: 1,
            dy: -1,
        });
        assert_eq!(toggle.current(), (0, 0));
        toggle.advance();
        assert_eq!(toggle.current(), (1, -1));
        toggle.advance();
        assert_eq!(toggle.current(), (0, 0));

        toggle.advance();
        toggle.reset();
        assert_eq!(toggle.current(), (0, 0));
    }
}

//! Redraw policy
//!
//! Decides, per poll, whether a new reading is worth a full frame. The
//! frame itself is always redrawn and transmitted whole; the policy only
//! gates whether that happens at all.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::traits::Reading;

/// Predicate over the last rendered reading and the new one
pub trait RedrawPolicy {
    /// Return `true` to render and transmit `current`
    ///
    /// `previous` is the last reading that reached the panel, or `None`
    /// before the first frame.
    fn should_redraw(&mut self, previous: Option<&Reading>, current: &Reading) -> bool;
}

/// Built-in policies, selectable from configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum RedrawMode {
    /// Redraw on every poll
    Always,
    /// Redraw only when a displayed value changes
    ///
    /// The panel shows whole degrees and whole percent, so sub-unit jitter
    /// does not trigger a refresh.
    #[default]
    OnChange,
}

impl RedrawPolicy for RedrawMode {
    fn should_redraw(&mut self, previous: Option<&Reading>, current: &Reading) -> bool {
        match (*self, previous) {
            (RedrawMode::Always, _) | (_, None) => true,
            (RedrawMode::OnChange, Some(prev)) => {
                prev.temperature_c() != current.temperature_c()
                    || prev.humidity_pct() != current.humidity_pct()
            }
        }
    }
}

impl<F> RedrawPolicy for F
where
    F: FnMut(Option<&Reading>, &Reading) -> bool,
{
    fn should_redraw(&mut self, previous: Option<&Reading>, current: &Reading) -> bool {
        self(previous, current)
    }
}

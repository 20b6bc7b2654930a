//! Volume control
//!
//! Level is a linear gain in `[0.0, 1.0]`, the range a media element takes
//! directly. Mute is tracked separately so unmuting restores the level.

/// Volume level with mute
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Volume {
    /// Volume level (0.0-1.0)
    level: f32,

    /// Mute state (preserves volume level)
    muted: bool,
}

impl Volume {
    /// Create new volume (clamped to 0.0-1.0; non-finite input becomes 0)
    pub fn new(level: f32) -> Self {
        let level = if level.is_finite() {
            level.clamp(0.0, 1.0)
        } else {
            0.0
        };
        Self {
            level,
            muted: false,
        }
    }

    /// Set volume level, clamped to 0.0-1.0
    ///
    /// Non-finite values (NaN, ±inf) are ignored.
    pub fn set_level(&mut self, level: f32) {
        if level.is_finite() {
            self.level = level.clamp(0.0, 1.0);
        }
    }

    /// Current volume level (0.0-1.0)
    pub fn level(&self) -> f32 {
        self.level
    }

    pub fn mute(&mut self) {
        self.muted = true;
    }

    pub fn unmute(&mut self) {
        self.muted = false;
    }

    pub fn toggle_mute(&mut self) {
        self.muted = !self.muted;
    }

    pub fn is_muted(&self) -> bool {
        self.muted
    }

    /// Level to hand to the playback surface (0.0 when muted)
    pub fn effective(&self) -> f32 {
        if self.muted {
            0.0
        } else {
            self.level
        }
    }

    /// Level as a whole percentage, for display
    pub fn percent(&self) -> u8 {
        (self.level * 100.0).round() as u8
    }
}

impl Default for Volume {
    fn default() -> Self {
        Self::new(0.7)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_volume() {
        let vol = Volume::new(0.8);
        assert_eq!(vol.level(), 0.8);
        assert!(!vol.is_muted());
    }

    #[test]
    fn set_volume_level_clamps() {
        let mut vol = Volume::new(0.5);

        vol.set_level(0.75);
        assert_eq!(vol.level(), 0.75);

        vol.set_level(1.5);
        assert_eq!(vol.level(), 1.0);

        vol.set_level(-0.2);
        assert_eq!(vol.level(), 0.0);
    }

    #[test]
    fn non_finite_level_ignored() {
        let mut vol = Volume::new(0.4);
        vol.set_level(f32::NAN);
        assert_eq!(vol.level(), 0.4);
        vol.set_level(f32::INFINITY);
        assert_eq!(vol.level(), 0.4);

        assert_eq!(Volume::new(f32::NAN).level(), 0.0);
    }

    #[test]
    fn mute_preserves_level() {
        let mut vol = Volume::new(0.8);

        vol.mute();
        assert!(vol.is_muted());
        assert_eq!(vol.level(), 0.8);
        assert_eq!(vol.effective(), 0.0);

        vol.unmute();
        assert_eq!(vol.effective(), 0.8);
    }

    #[test]
    fn toggle_mute() {
        let mut vol = Volume::default();
        vol.toggle_mute();
        assert!(vol.is_muted());
        vol.toggle_mute();
        assert!(!vol.is_muted());
    }

    #[test]
    fn percent_rounds() {
        assert_eq!(Volume::new(0.7).percent(), 70);
        assert_eq!(Volume::new(0.333).percent(), 33);
        assert_eq!(Volume::new(1.0).percent(), 100);
    }
}

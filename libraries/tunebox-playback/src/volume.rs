//! Volume control for the media widget
//!
//! The widget takes a linear 0-100 level and applies its own curve, so this
//! only tracks the level and mute state the engine re-applies to every new
//! widget instance.

/// Volume level (0-100) with mute that preserves the level
#[derive(Debug, Clone)]
pub struct Volume {
    level: u8,
    muted: bool,
}

impl Volume {
    /// Create new volume controller, clamping to 100
    pub fn new(level: u8) -> Self {
        Self {
            level: level.min(100),
            muted: false,
        }
    }

    /// Set volume level (0-100)
    pub fn set_level(&mut self, level: u8) {
        self.level = level.min(100);
    }

    /// Get current volume level (0-100)
    pub fn level(&self) -> u8 {
        self.level
    }

    /// Toggle mute state
    pub fn toggle_mute(&mut self) {
        self.muted = !self.muted;
    }

    /// Check if muted
    pub fn is_muted(&self) -> bool {
        self.muted
    }

    /// Level to send to the widget (0 while muted)
    pub fn effective(&self) -> u8 {
        if self.muted {
            0
        } else {
            self.level
        }
    }
}

impl Default for Volume {
    fn default() -> Self {
        Self::new(50)
    }
}

//! Platforms the body stands on

use serde::{Deserialize, Serialize};

use super::rect::Rect;

/// A static ledge; temporary ones decay after the body first touches them
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Platform {
    /// Stable id, increasing in generation order
    pub id: u32,
    pub rect: Rect,
    /// Disappears `lifetime` after activation
    pub temporary: bool,
    /// Body has touched it at least once
    pub activated: bool,
    /// Decay timer (seconds); only advances once activated
    pub timer: f32,
}

impl Platform {
    /// A permanent platform
    pub fn solid(id: u32, rect: Rect) -> Self {
        Self {
            id,
            rect,
            temporary: false,
            activated: false,
            timer: 0.0,
        }
    }

    /// A temporary platform whose decay timer starts at `timer_start`
    pub fn temporary(id: u32, rect: Rect, timer_start: f32) -> Self {
        Self {
            id,
            rect,
            temporary: true,
            activated: false,
            timer: timer_start,
        }
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.rect.right()
    }

    /// Temporary, touched, and out of time
    pub fn is_expired(&self, lifetime: f32) -> bool {
        self.temporary && self.activated && self.timer >= lifetime
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expiry_requires_activation() {
        let mut p = Platform::temporary(1, Rect::new(0.0, 0.0, 100.0, 20.0), 6.0);
        assert!(!p.is_expired(5.0));
        p.activated = true;
        assert!(p.is_expired(5.0));
    }

    #[test]
    fn test_solid_never_expires() {
        let mut p = Platform::solid(1, Rect::new(0.0, 0.0, 100.0, 20.0));
        p.activated = true;
        p.timer = 100.0;
        assert!(!p.is_expired(5.0));
    }
}

//! Endless platform strip
//!
//! The world keeps platforms in generation order, which is also x order. It
//! extends the strip ahead of a frontier, decays temporary platforms the body
//! has touched, and drops everything that has fallen far behind the camera.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use super::platform::Platform;
use super::rect::Rect;
use crate::error::ConfigError;
use crate::tuning::Tuning;

/// Temporary platforms touched or removed during one `World::update`
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LifecycleReport {
    /// Ids activated this tick
    pub activated: Vec<u32>,
    /// Ids removed this tick after running out of time
    pub expired: Vec<u32>,
}

/// Ordered platform strip plus the random source that extends it
#[derive(Debug, Clone)]
pub struct World<R: Rng = Pcg32> {
    tuning: Tuning,
    platforms: Vec<Platform>,
    /// Rightmost edge generated so far
    max_x: f32,
    next_id: u32,
    rng: R,
}

impl World<Pcg32> {
    /// World whose generator is seeded from `seed`
    pub fn with_seed(tuning: &Tuning, seed: u64) -> Result<Self, ConfigError> {
        Self::new(tuning, Pcg32::seed_from_u64(seed))
    }
}

impl<R: Rng> World<R> {
    /// Fresh world holding only the ground platform under the spawn area
    pub fn new(tuning: &Tuning, rng: R) -> Result<Self, ConfigError> {
        tuning.validate()?;
        Ok(Self::from_valid(tuning, rng))
    }

    /// Build from a tuning that has already passed `Tuning::validate`
    pub(crate) fn from_valid(tuning: &Tuning, rng: R) -> Self {
        let ground = Platform::solid(
            0,
            Rect::new(
                tuning.ground_x,
                tuning.ground_y,
                tuning.ground_width,
                tuning.ground_height,
            ),
        );
        let max_x = ground.right();

        Self {
            tuning: tuning.clone(),
            platforms: vec![ground],
            max_x,
            next_id: 1,
            rng,
        }
    }

    pub fn platforms(&self) -> &[Platform] {
        &self.platforms
    }

    /// Rightmost x up to which platforms have been generated
    pub fn frontier(&self) -> f32 {
        self.max_x
    }

    pub fn len(&self) -> usize {
        self.platforms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.platforms.is_empty()
    }

    /// Platforms whose x extent intersects `[min_x, max_x]`, in order
    pub fn platforms_between(&self, min_x: f32, max_x: f32) -> impl Iterator<Item = &Platform> {
        self.platforms
            .iter()
            .filter(move |p| p.rect.overlaps_x(min_x, max_x))
    }

    /// Height of the most recent platform, or the fallback when the strip is empty
    fn last_y(&self) -> f32 {
        self.platforms
            .last()
            .map(|p| p.rect.top())
            .unwrap_or(self.tuning.fallback_last_y)
    }

    /// Append platforms until the frontier reaches `limit_x`
    ///
    /// Returns how many platforms were added.
    pub fn generate_until(&mut self, limit_x: f32) -> usize {
        if !limit_x.is_finite() {
            log::warn!("Ignoring non-finite generation limit {limit_x}");
            return 0;
        }

        let t = &self.tuning;
        let mut added = 0;
        while self.max_x < limit_x {
            let width = self
                .rng
                .random_range(t.platform_width_range.min..=t.platform_width_range.max);
            let gap = self
                .rng
                .random_range(t.platform_gap_range.min..=t.platform_gap_range.max);
            let step = self
                .rng
                .random_range(-t.platform_max_step..=t.platform_max_step);
            let y = t.platform_y_range.clamp(self.last_y() + step);
            let temporary = self.rng.random_bool(t.temp_platform_chance);

            let rect = Rect::new(self.max_x + gap, y, width, t.platform_height);
            // gap + width can vanish below f32 precision far from the origin
            if rect.right() <= self.max_x {
                log::warn!(
                    "Frontier stuck at x={}: width {width} + gap {gap} rounds away",
                    self.max_x
                );
                break;
            }

            let id = self.next_id;
            self.next_id += 1;
            let platform = if temporary {
                Platform::temporary(id, rect, t.temp_platform_timer_start)
            } else {
                Platform::solid(id, rect)
            };
            log::trace!(
                "Platform {} at ({:.0}, {:.0}) w={:.0}{}",
                id,
                rect.left(),
                rect.top(),
                width,
                if temporary { " [temporary]" } else { "" }
            );

            self.max_x = platform.right();
            self.platforms.push(platform);
            added += 1;
        }

        if added > 0 {
            log::debug!(
                "Generated {} platforms, frontier now {:.0} ({} live)",
                added,
                self.max_x,
                self.platforms.len()
            );
        }
        added
    }

    /// Activate temporary platforms touched by `body`, age them, drop expired ones
    ///
    /// `body` is the body's contact box for this tick; the world never holds on to it.
    pub fn update(&mut self, dt: f32, body: &Rect) -> LifecycleReport {
        let mut report = LifecycleReport::default();

        for platform in self.platforms.iter_mut().filter(|p| p.temporary) {
            if !platform.activated && body.overlaps(&platform.rect) {
                platform.activated = true;
                report.activated.push(platform.id);
                log::trace!("Temporary platform {} activated", platform.id);
            }
            if platform.activated {
                platform.timer += dt;
            }
        }

        let lifetime = self.tuning.temp_platform_lifetime;
        self.platforms.retain(|p| {
            let expired = p.is_expired(lifetime);
            if expired {
                report.expired.push(p.id);
                log::trace!("Temporary platform {} expired", p.id);
            }
            !expired
        });

        report
    }

    /// Drop platforms whose right edge is behind `camera_x - cleanup_behind_distance`
    ///
    /// Returns how many platforms were removed.
    pub fn cleanup(&mut self, camera_x: f32) -> usize {
        let horizon = camera_x - self.tuning.cleanup_behind_distance;
        let before = self.platforms.len();
        self.platforms.retain(|p| p.right() > horizon);
        let removed = before - self.platforms.len();
        if removed > 0 {
            log::debug!("Cleaned up {removed} platforms behind x={horizon:.0}");
        }
        removed
    }
}

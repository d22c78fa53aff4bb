use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::core::config::Arena;

/// Axis-aligned target rectangle; `(x, y)` is its top-left corner.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Target {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Target {
    /// A target of the arena's size standing on the ground at `x`.
    pub fn on_ground(arena: &Arena, x: f64) -> Self {
        Self {
            x,
            y: arena.ground_level - arena.target_height,
            width: arena.target_width,
            height: arena.target_height,
        }
    }

    pub fn random<R: Rng + ?Sized>(arena: &Arena, rng: &mut R) -> Self {
        let mut target = Self::on_ground(arena, arena.target_band.0);
        target.relocate(arena, rng);
        target
    }

    /// Moves the target to a uniformly random `x` in the arena's band, flush
    /// with the ground.
    pub fn relocate<R: Rng + ?Sized>(&mut self, arena: &Arena, rng: &mut R) {
        let (min_x, max_x) = arena.target_band;
        self.x = if max_x > min_x {
            rng.gen_range(min_x..max_x)
        } else {
            min_x
        };
        self.y = arena.ground_level - self.height;
    }

    /// Strict containment: a point on any edge is outside.
    pub fn contains(&self, x: f64, y: f64) -> bool {
        x > self.x && x < self.x + self.width && y > self.y && y < self.y + self.height
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::*;

    #[test]
    fn edges_do_not_count_as_hits() {
        let target = Target {
            x: 300.0,
            y: 360.0,
            width: 40.0,
            height: 40.0,
        };
        assert!(!target.contains(300.0, 380.0));
        assert!(target.contains(301.0, 380.0));
        assert!(!target.contains(340.0, 380.0));
        assert!(!target.contains(320.0, 360.0));
        assert!(!target.contains(320.0, 400.0));
    }

    #[test]
    fn relocation_stays_in_band_and_on_ground() {
        let arena = Arena::default();
        let mut rng = StdRng::seed_from_u64(7);
        let mut target = Target::random(&arena, &mut rng);
        for _ in 0..500 {
            target.relocate(&arena, &mut rng);
            assert!((200.0..750.0).contains(&target.x), "x={}", target.x);
            assert_eq!(target.y + target.height, arena.ground_level);
        }
    }
}

use glam::Vec2;

use crate::api::host::RandomSource;
use crate::components::depth::Depth;
use crate::systems::rng::offset;

/// A single star: normalized position plus the display node it owns.
///
/// `pos` is the offset from the viewport center as a fraction of the
/// half-extent on each axis, so both components stay within [-1, 1].
#[derive(Debug, Clone)]
pub struct Star<N> {
    pub pos: Vec2,
    pub node: N,
}

impl<N> Star<N> {
    pub fn new(pos: Vec2, node: N) -> Self {
        Self { pos, node }
    }

    /// Spawn at a fresh random offset.
    pub fn spawn(node: N, random: &mut impl RandomSource) -> Self {
        Self::new(random_pos(random), node)
    }

    /// Scale the position radially by `speed`. Leaving the unit square
    /// respawns both coordinates. Returns true on respawn.
    pub fn advance(&mut self, speed: f32, random: &mut impl RandomSource) -> bool {
        self.pos *= speed;
        if self.in_bounds() {
            return false;
        }
        self.pos = random_pos(random);
        true
    }

    /// Map the normalized position to absolute screen pixels.
    pub fn screen_position(&self, center: Vec2) -> Vec2 {
        center * (Vec2::ONE + self.pos)
    }

    pub fn in_bounds(&self) -> bool {
        (-1.0..=1.0).contains(&self.pos.x) && (-1.0..=1.0).contains(&self.pos.y)
    }
}

fn random_pos(random: &mut impl RandomSource) -> Vec2 {
    let x = offset(random);
    let y = offset(random);
    Vec2::new(x, y)
}

/// One depth tier of stars sharing a speed multiplier.
#[derive(Debug, Clone)]
pub struct Layer<N> {
    pub depth: Depth,
    pub speed: f32,
    pub stars: Vec<Star<N>>,
}

impl<N> Layer<N> {
    pub fn new(depth: Depth, speed: f32) -> Self {
        Self {
            depth,
            speed,
            stars: Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.stars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stars.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Star<N>> {
        self.stars.iter()
    }
}

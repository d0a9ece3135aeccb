//! Synchronous fakes for the host capabilities.

use std::collections::VecDeque;

use glam::Vec2;

use crate::api::host::{RandomSource, Scheduler, Surface, Viewport};
use crate::systems::rng::Rng;

/// Plays back scripted draws, then continues with a seeded `Rng`.
pub struct ScriptedRandom {
    draws: VecDeque<f32>,
    fallback: Rng,
}

impl ScriptedRandom {
    pub fn new(draws: &[f32]) -> Self {
        Self {
            draws: draws.iter().copied().collect(),
            fallback: Rng::new(42),
        }
    }

    pub fn push(&mut self, draws: &[f32]) {
        self.draws.extend(draws.iter().copied());
    }

    pub fn is_exhausted(&self) -> bool {
        self.draws.is_empty()
    }
}

impl RandomSource for ScriptedRandom {
    fn next_unit(&mut self) -> f32 {
        match self.draws.pop_front() {
            Some(draw) => draw,
            None => self.fallback.next_unit(),
        }
    }
}

/// Records every host interaction. Nodes are numbered in spawn order.
pub struct FakeHost {
    pub size: Vec2,
    pub random: ScriptedRandom,
    pub scheduled: usize,
    pub attached: usize,
    pub spawned: usize,
    pub refuse_spawns: bool,
    pub placements: Vec<(usize, Vec2)>,
}

impl FakeHost {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            size: Vec2::new(width, height),
            random: ScriptedRandom::new(&[]),
            scheduled: 0,
            attached: 0,
            spawned: 0,
            refuse_spawns: false,
            placements: Vec::new(),
        }
    }

    pub fn placed_nodes(&self) -> Vec<usize> {
        self.placements.iter().map(|(node, _)| *node).collect()
    }

    pub fn placement_of(&self, node: usize) -> Option<Vec2> {
        self.placements
            .iter()
            .rev()
            .find(|(n, _)| *n == node)
            .map(|(_, at)| *at)
    }
}

impl Viewport for FakeHost {
    fn size(&self) -> Vec2 {
        self.size
    }
}

impl Scheduler for FakeHost {
    fn schedule(&mut self) {
        self.scheduled += 1;
    }
}

impl Surface for FakeHost {
    type Node = usize;

    fn spawn_node(&mut self) -> Option<usize> {
        if self.refuse_spawns {
            return None;
        }
        let id = self.spawned;
        self.spawned += 1;
        Some(id)
    }

    fn attach(&mut self) {
        self.attached += 1;
    }

    fn place(&mut self, node: &usize, at: Vec2) {
        self.placements.push((*node, at));
    }
}

impl RandomSource for FakeHost {
    fn next_unit(&mut self) -> f32 {
        self.random.next_unit()
    }
}

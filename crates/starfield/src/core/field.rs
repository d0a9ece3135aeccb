use glam::Vec2;

use crate::api::config::StarfieldConfig;
use crate::api::host::Host;
use crate::components::depth::Depth;
use crate::components::star::{Layer, Star};
use crate::core::viewport::ViewportTracker;

/// The animation singleton: three depth layers of stars driven by a
/// self-rescheduling tick.
///
/// The caller owns the instance (the web bridge keeps it in a
/// `thread_local!`), so a second `init` is caught by the `initialized`
/// flag rather than by probing the display tree.
pub struct Starfield<H: Host> {
    host: H,
    tracker: ViewportTracker,
    layers: [Layer<H::Node>; Depth::COUNT],
    initialized: bool,
    ticks: u64,
}

impl<H: Host> Starfield<H> {
    pub fn new(host: H, config: &StarfieldConfig) -> Self {
        let layers = Depth::ALL.map(|depth| Layer::new(depth, config.speed(depth)));
        Self {
            host,
            tracker: ViewportTracker::new(),
            layers,
            initialized: false,
            ticks: 0,
        }
    }

    /// Populate the layers, attach the container and start the loop.
    /// Does nothing if already initialized.
    pub fn init(&mut self, count: u32) {
        if self.initialized {
            log::debug!("starfield: already initialized, ignoring init({})", count);
            return;
        }

        for depth in Depth::ALL {
            let wanted = depth.share(count);
            let layer = &mut self.layers[depth.index()];
            layer.stars.reserve(wanted);
            for _ in 0..wanted {
                match self.host.spawn_node() {
                    Some(node) => layer.stars.push(Star::spawn(node, &mut self.host)),
                    None => log::warn!("starfield: display refused a {:?} star node", depth),
                }
            }
        }

        self.host.attach();
        self.initialized = true;
        log::info!(
            "starfield: initialized {} far / {} mid / {} near",
            self.layer(Depth::Far).len(),
            self.layer(Depth::Mid).len(),
            self.layer(Depth::Near).len(),
        );

        self.host.schedule();
    }

    /// One animation step: refresh the center, advance every layer
    /// back-to-front, then request the next tick.
    pub fn tick(&mut self) {
        if !self.initialized {
            return;
        }

        let center = self.tracker.scale(&self.host);
        for layer in self.layers.iter_mut() {
            let speed = layer.speed;
            for star in layer.stars.iter_mut() {
                step(star, speed, center, &mut self.host);
            }
        }
        self.ticks += 1;

        self.host.schedule();
    }

    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    pub fn layer(&self, depth: Depth) -> &Layer<H::Node> {
        &self.layers[depth.index()]
    }

    pub fn layer_mut(&mut self, depth: Depth) -> &mut Layer<H::Node> {
        &mut self.layers[depth.index()]
    }

    /// Iterate layers in update order.
    pub fn layers(&self) -> impl Iterator<Item = &Layer<H::Node>> {
        self.layers.iter()
    }

    pub fn star_count(&self) -> usize {
        self.layers.iter().map(Layer::len).sum()
    }

    /// Center used by the most recent tick.
    pub fn center(&self) -> Vec2 {
        self.tracker.center()
    }

    /// Number of ticks run since init.
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }
}

/// Advance one star by one tick and move its node on screen.
pub fn step<H: Host>(star: &mut Star<H::Node>, speed: f32, center: Vec2, host: &mut H) {
    star.advance(speed, &mut *host);
    host.place(&star.node, star.screen_position(center));
}

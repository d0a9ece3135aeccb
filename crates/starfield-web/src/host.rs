//! Browser implementations of the starfield host capabilities.
//!
//! Feature detection happens once, at construction: the viewport picks its
//! dimension source and the scheduler picks its timing primitive.

use glam::Vec2;
use js_sys::{Function, Reflect};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{CssStyleDeclaration, Document, Element, HtmlElement, Window};

use starfield::{Cadence, RandomSource, Scheduler, StarfieldConfig, Surface, Viewport};

/// Animation-frame primitives, most standard first.
const FRAME_PRIMITIVES: [&str; 4] = [
    "requestAnimationFrame",
    "msRequestAnimationFrame",
    "mozRequestAnimationFrame",
    "webkitRequestAnimationFrame",
];

/// Largest f32 below 1.0. `Math.random()` can round up to 1.0 when narrowed.
const MAX_UNIT: f32 = 1.0 - f32::EPSILON / 2.0;

// ── Viewport ─────────────────────────────────────────────────────────

/// Where viewport dimensions are read from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewportSource {
    /// `window.innerWidth` / `window.innerHeight`.
    Window,
    /// `document.documentElement.clientWidth` / `clientHeight`.
    DocumentElement,
}

pub struct BrowserViewport {
    window: Window,
    source: ViewportSource,
}

impl BrowserViewport {
    pub fn new(window: Window) -> Self {
        let source = if dimension(window.inner_width()) > 0.0 {
            ViewportSource::Window
        } else {
            log::debug!("starfield: innerWidth unavailable, measuring documentElement");
            ViewportSource::DocumentElement
        };
        Self { window, source }
    }

    pub fn source(&self) -> ViewportSource {
        self.source
    }
}

impl Viewport for BrowserViewport {
    fn size(&self) -> Vec2 {
        match self.source {
            ViewportSource::Window => Vec2::new(
                dimension(self.window.inner_width()),
                dimension(self.window.inner_height()),
            ),
            ViewportSource::DocumentElement => self
                .window
                .document()
                .and_then(|doc| doc.document_element())
                .map(|root| Vec2::new(root.client_width() as f32, root.client_height() as f32))
                .unwrap_or(Vec2::ZERO),
        }
    }
}

fn dimension(value: Result<JsValue, JsValue>) -> f32 {
    value.ok().and_then(|v| v.as_f64()).unwrap_or(0.0) as f32
}

// ── Scheduler ────────────────────────────────────────────────────────

/// Defers ticks through `setTimeout`, then an animation frame when one exists.
pub struct BrowserScheduler {
    window: Window,
    frame: Option<Function>,
    cadence: Cadence,
    on_tick: fn(),
}

impl BrowserScheduler {
    /// `on_tick` is the entry point each scheduled firing calls.
    pub fn new(window: Window, config: &StarfieldConfig, on_tick: fn()) -> Self {
        let frame = find_frame_primitive(&window);
        let cadence = Cadence::select(frame.is_some(), config);
        if frame.is_none() {
            log::debug!("starfield: no animation-frame primitive, falling back to setTimeout");
        }
        Self {
            window,
            frame,
            cadence,
            on_tick,
        }
    }

    pub fn cadence(&self) -> Cadence {
        self.cadence
    }

    fn try_schedule(&self) -> Result<i32, JsValue> {
        let on_tick = self.on_tick;
        let callback = match (self.cadence, &self.frame) {
            (Cadence::AnimationFrame { .. }, Some(frame)) => {
                let window = self.window.clone();
                let frame = frame.clone();
                Closure::once_into_js(move || {
                    let tick = Closure::once_into_js(move |_timestamp: f64| on_tick());
                    if let Err(err) = frame.call1(&window, &tick) {
                        log::warn!("starfield: animation frame request failed: {:?}", err);
                    }
                })
            }
            _ => Closure::once_into_js(move || on_tick()),
        };
        self.window.set_timeout_with_callback_and_timeout_and_arguments_0(
            callback.unchecked_ref(),
            self.cadence.delay_ms() as i32,
        )
    }
}

impl Scheduler for BrowserScheduler {
    fn schedule(&mut self) {
        if let Err(err) = self.try_schedule() {
            log::warn!("starfield: failed to schedule tick: {:?}", err);
        }
    }
}

fn find_frame_primitive(window: &Window) -> Option<Function> {
    FRAME_PRIMITIVES.iter().find_map(|name| {
        Reflect::get(window, &JsValue::from_str(name))
            .ok()
            .and_then(|value| value.dyn_into::<Function>().ok())
    })
}

// ── Surface ──────────────────────────────────────────────────────────

/// The `#stars` container and its `span.star` children.
pub struct BrowserSurface {
    document: Document,
    container: Element,
    star_class: String,
}

impl BrowserSurface {
    /// Create the (detached) container. It joins the page on `attach`.
    pub fn new(document: Document, config: &StarfieldConfig) -> Result<Self, JsValue> {
        let container = document.create_element("div")?;
        container.set_id(&config.container_id);
        Ok(Self {
            document,
            container,
            star_class: config.star_class.clone(),
        })
    }

    /// Whether some earlier script already put a container with this id on the page.
    pub fn container_exists(document: &Document, id: &str) -> bool {
        document.get_element_by_id(id).is_some()
    }

    fn try_spawn(&self) -> Result<HtmlElement, JsValue> {
        let node = self.document.create_element("span")?.dyn_into::<HtmlElement>()?;
        node.set_class_name(&self.star_class);
        self.container.append_child(&node)?;
        Ok(node)
    }
}

impl Surface for BrowserSurface {
    type Node = HtmlElement;

    fn spawn_node(&mut self) -> Option<HtmlElement> {
        match self.try_spawn() {
            Ok(node) => Some(node),
            Err(err) => {
                log::warn!("starfield: failed to create star node: {:?}", err);
                None
            }
        }
    }

    fn attach(&mut self) {
        let Some(body) = self.document.body() else {
            log::warn!("starfield: document has no body, stars stay detached");
            return;
        };
        if let Err(err) = body.insert_before(&self.container, body.first_child().as_ref()) {
            log::warn!("starfield: failed to attach container: {:?}", err);
        }
    }

    fn place(&mut self, node: &HtmlElement, at: Vec2) {
        let style = node.style();
        set_px(&style, "left", at.x);
        set_px(&style, "top", at.y);
    }
}

fn set_px(style: &CssStyleDeclaration, property: &str, value: f32) {
    if let Err(err) = style.set_property(property, &format!("{}px", value)) {
        log::debug!("starfield: could not set {}: {:?}", property, err);
    }
}

// ── Random ───────────────────────────────────────────────────────────

/// `Math.random()` narrowed to f32.
#[derive(Debug, Clone, Copy, Default)]
pub struct MathRandom;

impl RandomSource for MathRandom {
    fn next_unit(&mut self) -> f32 {
        (js_sys::Math::random() as f32).min(MAX_UNIT)
    }
}

// ── Host ─────────────────────────────────────────────────────────────

/// All browser capabilities bundled for `Starfield<BrowserHost>`.
pub struct BrowserHost {
    viewport: BrowserViewport,
    scheduler: BrowserScheduler,
    surface: BrowserSurface,
    random: MathRandom,
}

impl BrowserHost {
    pub fn new(window: Window, config: &StarfieldConfig, on_tick: fn()) -> Result<Self, JsValue> {
        let document = window
            .document()
            .ok_or_else(|| JsValue::from_str("window has no document"))?;
        Ok(Self {
            viewport: BrowserViewport::new(window.clone()),
            scheduler: BrowserScheduler::new(window, config, on_tick),
            surface: BrowserSurface::new(document, config)?,
            random: MathRandom,
        })
    }

    pub fn viewport_source(&self) -> ViewportSource {
        self.viewport.source()
    }

    pub fn cadence(&self) -> Cadence {
        self.scheduler.cadence()
    }
}

impl Viewport for BrowserHost {
    fn size(&self) -> Vec2 {
        self.viewport.size()
    }
}

impl Scheduler for BrowserHost {
    fn schedule(&mut self) {
        self.scheduler.schedule();
    }
}

impl Surface for BrowserHost {
    type Node = HtmlElement;

    fn spawn_node(&mut self) -> Option<HtmlElement> {
        self.surface.spawn_node()
    }

    fn attach(&mut self) {
        self.surface.attach();
    }

    fn place(&mut self, node: &HtmlElement, at: Vec2) {
        self.surface.place(node, at);
    }
}

impl RandomSource for BrowserHost {
    fn next_unit(&mut self) -> f32 {
        self.random.next_unit()
    }
}

//! DOM side of the page decorations: lone images, the scroll-following
//! tag cloud, and tag sizing by weight. The layout math lives in
//! `starfield::systems::decor`.

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement, Window};

use starfield::{parse_weight, shuffle, sidebar_margin, tag_font_percent, Sidebar};

use crate::host::MathRandom;

const TAGS_ID: &str = "tags";
const POSTS_ID: &str = "posts";

/// Apply every decoration. Missing page anchors skip that decoration.
#[wasm_bindgen]
pub fn decorate_page() {
    crate::setup_logging();
    let Some(window) = web_sys::window() else {
        return;
    };
    let Some(document) = window.document() else {
        return;
    };

    if let Err(err) = center_lone_images(&document) {
        log::warn!("decor: image centering failed: {:?}", err);
    }
    if let Err(err) = follow_scroll(&window, &document) {
        log::warn!("decor: sidebar follow failed: {:?}", err);
    }
    if let Err(err) = scale_tag_cloud(&document) {
        log::warn!("decor: tag cloud failed: {:?}", err);
    }
}

/// An image alone in its paragraph is narrowed and centered.
fn center_lone_images(document: &Document) -> Result<(), JsValue> {
    let images = document.query_selector_all("p > img:only-child")?;
    for i in 0..images.length() {
        let Some(img) = images.get(i).and_then(|n| n.dyn_into::<HtmlElement>().ok()) else {
            continue;
        };
        img.style().set_property("max-width", "90%")?;
        if let Some(parent) = img.parent_element().and_then(|p| p.dyn_into::<HtmlElement>().ok()) {
            parent.style().set_property("text-align", "center")?;
        }
    }
    Ok(())
}

fn follow_scroll(window: &Window, document: &Document) -> Result<(), JsValue> {
    let (Some(tags), Some(posts)) = (html_by_id(document, TAGS_ID), html_by_id(document, POSTS_ID)) else {
        log::debug!("decor: no #{} / #{}, sidebar stays static", TAGS_ID, POSTS_ID);
        return Ok(());
    };

    let scroller = window.clone();
    let on_scroll = Closure::<dyn FnMut()>::new(move || {
        let margin = sidebar_margin(measure(&scroller, &tags, &posts));
        if let Err(err) = tags.style().set_property("margin-top", &format!("{}px", margin)) {
            log::debug!("decor: could not move sidebar: {:?}", err);
        }
    });
    window.add_event_listener_with_callback("scroll", on_scroll.as_ref().unchecked_ref())?;
    // lives as long as the page
    on_scroll.forget();
    Ok(())
}

fn measure(window: &Window, tags: &HtmlElement, posts: &HtmlElement) -> Sidebar {
    let scroll_top = window.scroll_y().unwrap_or(0.0) as f32;
    let window_height = window
        .inner_height()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0) as f32;
    Sidebar {
        scroll_top,
        posts_top: posts.get_bounding_client_rect().top() as f32 + scroll_top,
        window_height,
        sidebar_height: tags.offset_height() as f32,
        posts_height: posts.offset_height() as f32,
    }
}

/// Shuffle the `.tag` children of `#tags` and size each by its weight.
/// Tags are reordered even when weights are missing; only sizing is skipped.
fn scale_tag_cloud(document: &Document) -> Result<(), JsValue> {
    let Some(cloud) = document.get_element_by_id(TAGS_ID) else {
        return Ok(());
    };
    let total = weight(&cloud);
    if total.is_none() {
        log::warn!("decor: #{} has no usable data-weight, tags keep their size", TAGS_ID);
    }

    let found = cloud.query_selector_all(".tag")?;
    let tags: Vec<HtmlElement> = (0..found.length())
        .filter_map(|i| found.get(i))
        .filter_map(|n| n.dyn_into::<HtmlElement>().ok())
        .collect();

    for tag in shuffle(tags, &mut MathRandom) {
        match (weight(&tag), total) {
            (Some(part), Some(total)) => tag
                .style()
                .set_property("font-size", &format!("{}%", tag_font_percent(part, total)))?,
            (None, _) => log::warn!("decor: tag without usable data-weight"),
            (Some(_), None) => {}
        }
        cloud.append_child(&tag)?;
    }
    Ok(())
}

fn html_by_id(document: &Document, id: &str) -> Option<HtmlElement> {
    document.get_element_by_id(id)?.dyn_into::<HtmlElement>().ok()
}

fn weight(element: &Element) -> Option<u32> {
    parse_weight(&element.get_attribute("data-weight")?)
}

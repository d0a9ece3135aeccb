//! Layout math for the page decorations that ship alongside the starfield:
//! the scroll-following tag cloud and its weight-scaled, shuffled tags.
//!
//! Everything here is pure; `starfield-web` reads the DOM and applies results.

use crate::api::host::RandomSource;

/// Base font size of a tag, in percent.
pub const TAG_BASE_PERCENT: f32 = 100.0;
/// Extra size the heaviest tag gets on top of the base, in percent.
pub const TAG_RANGE_PERCENT: f32 = 150.0;

/// Measurements needed to place the sticky sidebar, all in pixels.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Sidebar {
    /// Current vertical scroll offset of the window.
    pub scroll_top: f32,
    /// Document-relative top of the posts column.
    pub posts_top: f32,
    /// Inner height of the window.
    pub window_height: f32,
    /// Outer height of the sidebar itself.
    pub sidebar_height: f32,
    /// Outer height of the posts column.
    pub posts_height: f32,
}

/// Top margin that keeps the sidebar a quarter of the free space below the
/// top of the window, without leaving the posts column.
pub fn sidebar_margin(s: Sidebar) -> f32 {
    let follow = s.scroll_top - s.posts_top + (s.window_height - s.sidebar_height) / 4.0;
    let limit = s.posts_height - s.sidebar_height;
    follow.min(limit).max(0.0)
}

/// Font size for a tag of weight `part` in a cloud of total weight `total`.
/// Log-scaled so a few heavy tags do not drown the rest.
pub fn tag_font_percent(part: u32, total: u32) -> f32 {
    if total <= 1 || part == 0 {
        return TAG_BASE_PERCENT;
    }
    let ratio = ((part as f32).ln() / (total as f32).ln()).clamp(0.0, 1.0);
    TAG_BASE_PERCENT + TAG_RANGE_PERCENT * ratio
}

/// Read a weight attribute by its leading decimal digits, so `"12 posts"`
/// is 12. Leading whitespace and a `+` sign are accepted; anything without
/// digits, negative, or too large for u32 is None.
pub fn parse_weight(raw: &str) -> Option<u32> {
    let trimmed = raw.trim_start();
    let unsigned = trimmed.strip_prefix('+').unwrap_or(trimmed);
    let digits = unsigned
        .find(|c: char| !c.is_ascii_digit())
        .map_or(unsigned, |end| &unsigned[..end]);
    digits.parse().ok()
}

/// Shuffle by repeatedly removing a uniformly chosen remaining element.
pub fn shuffle<T>(mut items: Vec<T>, random: &mut impl RandomSource) -> Vec<T> {
    let mut shuffled = Vec::with_capacity(items.len());
    while !items.is_empty() {
        let pick = ((random.next_unit() * items.len() as f32) as usize).min(items.len() - 1);
        shuffled.push(items.remove(pick));
    }
    shuffled
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::ScriptedRandom;
    use crate::Rng;

    fn sidebar() -> Sidebar {
        Sidebar {
            scroll_top: 0.0,
            posts_top: 200.0,
            window_height: 1000.0,
            sidebar_height: 600.0,
            posts_height: 5000.0,
        }
    }

    #[test]
    fn sidebar_stays_put_above_posts() {
        assert_eq!(sidebar_margin(sidebar()), 0.0);
    }

    #[test]
    fn sidebar_follows_scroll() {
        let s = Sidebar { scroll_top: 1000.0, ..sidebar() };
        // 1000 - 200 + (1000 - 600) / 4
        assert_eq!(sidebar_margin(s), 900.0);
    }

    #[test]
    fn sidebar_stops_at_end_of_posts() {
        let s = Sidebar { scroll_top: 100_000.0, ..sidebar() };
        assert_eq!(sidebar_margin(s), 4400.0);
    }

    #[test]
    fn sidebar_taller_than_posts_never_goes_negative() {
        let s = Sidebar { scroll_top: 3000.0, posts_height: 300.0, ..sidebar() };
        assert_eq!(sidebar_margin(s), 0.0);
    }

    #[test]
    fn tag_sizes_are_log_scaled() {
        assert_eq!(tag_font_percent(1, 100), 100.0);
        assert!((tag_font_percent(10, 100) - 175.0).abs() < 1e-3);
        assert!((tag_font_percent(100, 100) - 250.0).abs() < 1e-3);
    }

    #[test]
    fn degenerate_weights_fall_back_to_base() {
        assert_eq!(tag_font_percent(0, 100), 100.0);
        assert_eq!(tag_font_percent(1, 1), 100.0);
        assert_eq!(tag_font_percent(5, 0), 100.0);
    }

    #[test]
    fn overweight_tag_is_capped() {
        assert_eq!(tag_font_percent(1000, 10), 250.0);
    }

    #[test]
    fn weight_reads_leading_digits() {
        assert_eq!(parse_weight("12"), Some(12));
        assert_eq!(parse_weight("12 posts"), Some(12));
        assert_eq!(parse_weight("  7px"), Some(7));
        assert_eq!(parse_weight("+3"), Some(3));
    }

    #[test]
    fn weight_without_digits_is_none() {
        assert_eq!(parse_weight(""), None);
        assert_eq!(parse_weight("posts"), None);
        assert_eq!(parse_weight("-4"), None);
        assert_eq!(parse_weight("99999999999"), None);
    }

    #[test]
    fn shuffle_follows_draws() {
        // picks index 2 of [a b c], then 0 of [a b], then the last one
        let mut random = ScriptedRandom::new(&[0.9, 0.1, 0.5]);
        let out = shuffle(vec!['a', 'b', 'c'], &mut random);
        assert_eq!(out, vec!['c', 'a', 'b']);
    }

    #[test]
    fn shuffle_keeps_every_item() {
        let mut rng = Rng::new(11);
        let mut out = shuffle((0..50).collect::<Vec<u32>>(), &mut rng);
        out.sort_unstable();
        assert_eq!(out, (0..50).collect::<Vec<u32>>());
    }

    #[test]
    fn shuffle_empty() {
        let mut rng = Rng::new(1);
        assert!(shuffle(Vec::<u8>::new(), &mut rng).is_empty());
    }
}

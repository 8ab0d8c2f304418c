//! Scroll position bookkeeping for the navbar: which section is active,
//! how far the page has scrolled, and where the indicator should sit.

/// Below this the page is considered to be at the hero.
pub const HOME_THRESHOLD_PX: f64 = 100.0;
/// Added to the scroll offset so a section counts as active a little before
/// its top reaches the viewport edge (the fixed navbar covers it).
pub const PROBE_OFFSET_PX: f64 = 150.0;
pub const SCROLLED_THRESHOLD_PX: f64 = 50.0;
pub const THROTTLE_MS: f64 = 100.0;
/// px/ms above which samples inside the throttle window are dropped.
pub const DROP_VELOCITY: f64 = 50.0;
/// px/ms below which the active section is recomputed.
pub const TRACK_VELOCITY: f64 = 30.0;
pub const REVEAL_RATIO: f64 = 0.75;

#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash)]
pub enum Section {
    Home,
    Services,
    Portfolio,
    Testimonials,
    Tribute,
    About,
    Legacy,
    Founder,
    Contact,
}

impl Section {
    /// Page order.
    pub const ALL: [Section; 9] = [
        Section::Home,
        Section::Services,
        Section::Portfolio,
        Section::Testimonials,
        Section::Tribute,
        Section::About,
        Section::Legacy,
        Section::Founder,
        Section::Contact,
    ];

    pub fn id(self) -> &'static str {
        match self {
            Section::Home => "home",
            Section::Services => "services",
            Section::Portfolio => "portfolio",
            Section::Testimonials => "testimonials",
            Section::Tribute => "tribute",
            Section::About => "about",
            Section::Legacy => "legacy",
            Section::Founder => "founder",
            Section::Contact => "contact",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Section::Home => "Home",
            Section::Services => "Services",
            Section::Portfolio => "Portfolio",
            Section::Testimonials => "Testimonials",
            Section::Tribute => "Offers",
            Section::About => "About",
            Section::Legacy => "Legacy",
            Section::Founder => "Founders",
            Section::Contact => "Contact",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            Section::Home => "🏠",
            Section::Services => "💼",
            Section::Portfolio => "🖼️",
            Section::Testimonials => "💬",
            Section::Tribute | Section::Legacy => "✨",
            Section::About => "ℹ️",
            Section::Founder => "👑",
            Section::Contact => "📞",
        }
    }
}

/// Vertical extent of a rendered section, in document coordinates.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct SectionBounds {
    pub section: Section,
    pub top: f64,
    pub height: f64,
}

/// Maps a scroll offset to the active section. `bounds` holds the sections
/// that are currently in the DOM, in page order; missing ones are skipped.
pub fn active_section(scroll_y: f64, bounds: &[SectionBounds]) -> Section {
    if scroll_y < HOME_THRESHOLD_PX {
        return Section::Home;
    }
    let probe = scroll_y + PROBE_OFFSET_PX;
    let mut current = Section::Home;
    for b in bounds.iter().filter(|b| b.section != Section::Home) {
        if probe >= b.top && probe < b.top + b.height {
            return b.section;
        }
        if probe >= b.top {
            current = b.section;
        }
    }
    current
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ScrollSample {
    /// Too fast, too soon after the last accepted sample.
    Dropped,
    /// Update the compact-navbar flag only.
    Accepted,
    /// Update the navbar flag and recompute the active section.
    Track,
}

/// Rate limiter for scroll events. Fast flings are skipped so the active
/// section does not flicker through every section on the way.
#[derive(Clone, Copy, Default, Debug)]
pub struct ScrollThrottle {
    last_y: f64,
    last_at: f64,
}

impl ScrollThrottle {
    pub fn sample(&mut self, scroll_y: f64, now_ms: f64) -> ScrollSample {
        let elapsed = now_ms - self.last_at;
        let divisor = if elapsed > 0.0 { elapsed } else { 1.0 };
        let velocity = (scroll_y - self.last_y).abs() / divisor;

        if velocity > DROP_VELOCITY && elapsed < THROTTLE_MS {
            self.last_y = scroll_y;
            return ScrollSample::Dropped;
        }

        self.last_y = scroll_y;
        self.last_at = now_ms;
        if velocity < TRACK_VELOCITY {
            ScrollSample::Track
        } else {
            ScrollSample::Accepted
        }
    }
}

pub fn is_scrolled(scroll_y: f64) -> bool {
    scroll_y > SCROLLED_THRESHOLD_PX
}

/// Percentage of the scrollable range already scrolled, in `[0, 100]`.
pub fn progress(scroll_top: f64, document_height: f64, viewport_height: f64) -> f64 {
    let range = document_height - viewport_height;
    if range <= 0.0 {
        return 0.0;
    }
    (scroll_top / range * 100.0).clamp(0.0, 100.0)
}

/// A section reveals once its top passes three quarters of the viewport.
pub fn is_revealed(rect_top: f64, viewport_height: f64) -> bool {
    rect_top < viewport_height * REVEAL_RATIO
}

/// Space left above a section after jumping to it, so the fixed navbar does
/// not cover the heading.
pub fn nav_offset(viewport_width: f64) -> f64 {
    if viewport_width < crate::config::MOBILE_BREAKPOINT_PX {
        80.0
    } else {
        120.0
    }
}

/// Offset for in-page jumps from content (service cards, footer links),
/// independent of the viewport width.
pub const SECTION_JUMP_OFFSET_PX: f64 = 120.0;

/// Document offset to scroll to so an element whose viewport top is
/// `rect_top` lands `offset` px below the top edge.
pub fn scroll_target(rect_top: f64, page_y: f64, offset: f64) -> f64 {
    (rect_top + page_y - offset).max(0.0)
}

#[derive(Clone, Copy, PartialEq, Debug, Default)]
pub struct Indicator {
    pub left: f64,
    pub width: f64,
}

impl Indicator {
    pub const HIDDEN: Indicator = Indicator { left: 0.0, width: 0.0 };

    /// Centre of the active item, relative to its menu container.
    pub fn under(item_left: f64, item_width: f64, container_left: f64) -> Self {
        Indicator {
            left: item_left - container_left + item_width / 2.0,
            width: item_width,
        }
    }

    pub fn is_visible(&self) -> bool {
        self.width > 0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn layout() -> Vec<SectionBounds> {
        // Each section 1000px tall, one after another, with a 700px hero.
        let mut top = 700.0;
        Section::ALL
            .iter()
            .map(|&section| {
                if section == Section::Home {
                    return SectionBounds { section, top: 0.0, height: 700.0 };
                }
                let b = SectionBounds { section, top, height: 1000.0 };
                top += 1000.0;
                b
            })
            .collect()
    }

    #[test]
    fn near_the_top_is_home() {
        assert_eq!(active_section(0.0, &layout()), Section::Home);
        assert_eq!(active_section(99.9, &layout()), Section::Home);
    }

    #[test]
    fn probe_offset_selects_section_early() {
        let bounds = layout();
        // services starts at 700: probe = 550 + 150 = 700
        assert_eq!(active_section(550.0, &bounds), Section::Services);
        assert_eq!(active_section(549.0, &bounds), Section::Home);
        assert_eq!(active_section(1550.0, &bounds), Section::Portfolio);
    }

    #[test]
    fn gaps_fall_back_to_last_section_started() {
        let bounds = vec![
            SectionBounds { section: Section::Services, top: 500.0, height: 200.0 },
            SectionBounds { section: Section::Portfolio, top: 2000.0, height: 500.0 },
        ];
        assert_eq!(active_section(1000.0, &bounds), Section::Services);
        assert_eq!(active_section(5000.0, &bounds), Section::Portfolio);
    }

    #[test]
    fn missing_sections_are_skipped() {
        assert_eq!(active_section(4000.0, &[]), Section::Home);
    }

    #[test]
    fn active_section_is_always_a_known_section() {
        let bounds = layout();
        let mut y = 0.0;
        while y < 12_000.0 {
            assert!(Section::ALL.contains(&active_section(y, &bounds)));
            y += 37.5;
        }
    }

    #[test]
    fn throttle_drops_flings_inside_window() {
        let mut throttle = ScrollThrottle::default();
        assert_eq!(throttle.sample(10.0, 1000.0), ScrollSample::Track);
        // 4000px in 20ms = 200px/ms
        assert_eq!(throttle.sample(4010.0, 1020.0), ScrollSample::Dropped);
        // Window has passed since the last accepted sample; velocity is low.
        assert_eq!(throttle.sample(4020.0, 1200.0), ScrollSample::Track);
    }

    #[test]
    fn throttle_accepts_medium_speed_without_tracking() {
        let mut throttle = ScrollThrottle::default();
        throttle.sample(0.0, 1000.0);
        // 40px/ms: accepted but too fast to track
        assert_eq!(throttle.sample(4000.0, 1100.0), ScrollSample::Accepted);
    }

    #[test]
    fn progress_is_clamped() {
        assert_eq!(progress(0.0, 3000.0, 1000.0), 0.0);
        assert_eq!(progress(1000.0, 3000.0, 1000.0), 50.0);
        assert_eq!(progress(5000.0, 3000.0, 1000.0), 100.0);
        assert_eq!(progress(-20.0, 3000.0, 1000.0), 0.0);
        assert_eq!(progress(10.0, 800.0, 1000.0), 0.0);
    }

    #[test]
    fn reveal_at_three_quarters() {
        assert!(is_revealed(599.0, 800.0));
        assert!(!is_revealed(600.0, 800.0));
    }

    #[test]
    fn scroll_target_never_negative() {
        assert_eq!(scroll_target(300.0, 1000.0, 120.0), 1180.0);
        assert_eq!(scroll_target(50.0, 0.0, 120.0), 0.0);
        assert_eq!(nav_offset(500.0), 80.0);
        assert_eq!(nav_offset(1024.0), 120.0);
    }

    #[test]
    fn content_jumps_keep_desktop_offset_on_mobile() {
        assert_eq!(SECTION_JUMP_OFFSET_PX, 120.0);
        assert_eq!(nav_offset(390.0), 80.0);
        for width in [390.0, 1024.0] {
            let target = scroll_target(600.0, 2000.0, SECTION_JUMP_OFFSET_PX);
            assert_eq!(target, 2480.0, "width {}", width);
            assert!(SECTION_JUMP_OFFSET_PX >= nav_offset(width));
        }
    }

    #[test]
    fn indicator_centres_under_item() {
        let ind = Indicator::under(340.0, 80.0, 300.0);
        assert_eq!(ind, Indicator { left: 80.0, width: 80.0 });
        assert!(ind.is_visible());
        assert!(!Indicator::HIDDEN.is_visible());
    }

    #[test]
    fn compact_navbar_after_fifty() {
        assert!(!is_scrolled(50.0));
        assert!(is_scrolled(51.0));
    }
}

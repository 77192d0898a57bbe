//! Widgets shared by every page: clock, dismissible alerts, nav menus, the
//! hero carousel and the product slider.

use crate::shared::date_utils::{format_clock_date, format_clock_time};
use crate::shared::dom::{DomNode, DomRoot, Selector};
use chrono::NaiveDateTime;
use std::cell::Cell;

const SHOW: &str = "show";
const ACTIVE: &str = "active";
const SLIDE_GAP: i32 = 16;
const SLIDES_SHOWN: usize = 3;
const NAV_PAIRS: [(&str, &str); 2] = [("navToggle", "navMenu"), ("nav-toggle", "nav-links")];

pub struct Clock<N> {
    date: Option<N>,
    time: Option<N>,
}

impl<N: DomNode> Clock<N> {
    pub fn resolve<R: DomRoot<Node = N>>(root: &R) -> Option<Self> {
        let clock = Self {
            date: root.by_id("current-date"),
            time: root.by_id("current-time"),
        };
        (clock.date.is_some() || clock.time.is_some()).then_some(clock)
    }

    pub fn refresh(&self, now: NaiveDateTime) {
        if let Some(date) = &self.date {
            date.set_text(&format_clock_date(now));
        }
        if let Some(time) = &self.time {
            time.set_text(&format_clock_time(now));
        }
    }
}

pub struct NavMenu<N> {
    pub toggle: N,
    pub menu: N,
}

impl<N: DomNode> NavMenu<N> {
    pub fn resolve_all<R: DomRoot<Node = N>>(root: &R) -> Vec<Self> {
        NAV_PAIRS
            .iter()
            .filter_map(|(toggle, menu)| {
                Some(Self {
                    toggle: root.by_id(toggle)?,
                    menu: root.by_id(menu)?,
                })
            })
            .collect()
    }

    pub fn toggle(&self) {
        self.menu.toggle_class(SHOW, !self.menu.has_class(SHOW));
    }

    /// Close the menu when `target` is outside both the menu and its toggle.
    pub fn close_if_outside(&self, target: &N) {
        if !self.menu.contains(target) && !self.toggle.contains(target) {
            self.menu.remove_class(SHOW);
        }
    }
}

pub struct Carousel<N> {
    slides: Vec<N>,
    current: Cell<usize>,
}

impl<N: DomNode> Carousel<N> {
    pub fn resolve<R: DomRoot<Node = N>>(root: &R) -> Option<Self> {
        let slides: Vec<N> = root
            .select_all(&Selector::class("hero-slider"))
            .iter()
            .flat_map(|slider| slider.select_all(&Selector::class("slide")))
            .collect();
        if slides.is_empty() {
            return None;
        }
        let current = slides.iter().position(|s| s.has_class(ACTIVE)).unwrap_or(0);
        slides[current].add_class(ACTIVE);
        Some(Self {
            slides,
            current: Cell::new(current),
        })
    }

    pub fn current(&self) -> usize {
        self.current.get()
    }

    pub fn advance(&self) {
        let current = self.current.get();
        let next = (current + 1) % self.slides.len();
        self.slides[current].remove_class(ACTIVE);
        self.slides[next].add_class(ACTIVE);
        self.current.set(next);
    }
}

/// `.demo-track` strip scrolled one slide at a time, three slides in view.
pub struct ProductSlider<N> {
    track: N,
    len: usize,
    slide_width: i32,
    index: Cell<usize>,
}

impl<N: DomNode> ProductSlider<N> {
    pub fn resolve<R: DomRoot<Node = N>>(root: &R) -> Option<Self> {
        let track = root.select(&Selector::class("demo-track"))?;
        let slides = track.children();
        let first = slides.first()?;
        Some(Self {
            slide_width: first.offset_width() + SLIDE_GAP,
            len: slides.len(),
            track,
            index: Cell::new(0),
        })
    }

    pub fn index(&self) -> usize {
        self.index.get()
    }

    pub fn advance(&self) {
        let mut index = self.index.get() + 1;
        if index + SLIDES_SHOWN > self.len {
            index = 0;
        }
        self.index.set(index);
        let offset = index as i32 * self.slide_width;
        self.track.set_style("transform", &format!("translateX(-{}px)", offset));
    }
}

/// Remove the list item holding the dismissed alert.
pub fn dismiss_alert<N: DomNode>(button: &N) -> bool {
    match button.closest(&Selector::tag("li")) {
        Some(item) => {
            item.remove();
            true
        }
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::dom::memory::MemoryDom;
    use chrono::NaiveDate;

    #[test]
    fn test_clock_refresh() {
        let dom = MemoryDom::new();
        let date = dom.root().add("span").with_id("current-date");
        let time = dom.root().add("span").with_id("current-time");
        let now = NaiveDate::from_ymd_opt(2026, 10, 19)
            .unwrap()
            .and_hms_opt(15, 4, 0)
            .unwrap();

        Clock::resolve(&dom).unwrap().refresh(now);
        assert_eq!(date.text(), "Oct 19, 2026");
        assert_eq!(time.text(), "03:04 PM");
    }

    #[test]
    fn test_nav_toggle_and_outside_click() {
        let dom = MemoryDom::new();
        let root = dom.root();
        let toggle = root.add("button").with_id("navToggle");
        let menu = root.add("ul").with_id("navMenu");
        let link = menu.add("li").add("a");
        let outside = root.add("main");

        let navs = NavMenu::resolve_all(&dom);
        assert_eq!(navs.len(), 1);
        let nav = &navs[0];

        nav.toggle();
        assert!(menu.has_class(SHOW));
        nav.close_if_outside(&link);
        nav.close_if_outside(&toggle);
        assert!(menu.has_class(SHOW));
        nav.close_if_outside(&outside);
        assert!(!menu.has_class(SHOW));
    }

    #[test]
    fn test_carousel_wraps() {
        let dom = MemoryDom::new();
        let slider = dom.root().add("div").with_class("hero-slider");
        let slides: Vec<_> = (0..3).map(|_| slider.add("div").with_class("slide")).collect();

        let carousel = Carousel::resolve(&dom).unwrap();
        assert!(slides[0].has_class(ACTIVE));
        carousel.advance();
        carousel.advance();
        assert!(slides[2].has_class(ACTIVE));
        assert!(!slides[1].has_class(ACTIVE));
        carousel.advance();
        assert_eq!(carousel.current(), 0);
        assert!(slides[0].has_class(ACTIVE));
        assert!(!slides[2].has_class(ACTIVE));
    }

    #[test]
    fn test_product_slider_steps_and_wraps() {
        let dom = MemoryDom::new();
        let track = dom.root().add("div").with_class("demo-track");
        for _ in 0..5 {
            track.add("div").with_class("demo-card").with_width(184);
        }

        let slider = ProductSlider::resolve(&dom).unwrap();
        slider.advance();
        assert_eq!(track.style("transform"), "translateX(-200px)");
        slider.advance();
        assert_eq!(slider.index(), 2);
        assert_eq!(track.style("transform"), "translateX(-400px)");
        slider.advance();
        assert_eq!(slider.index(), 0);
        assert_eq!(track.style("transform"), "translateX(-0px)");
    }

    #[test]
    fn test_product_slider_short_or_missing_track() {
        let dom = MemoryDom::new();
        assert!(ProductSlider::resolve(&dom).is_none());

        let track = dom.root().add("div").with_class("demo-track");
        assert!(ProductSlider::resolve(&dom).is_none());
        track.add("div");
        track.add("div");
        let slider = ProductSlider::resolve(&dom).unwrap();
        slider.advance();
        assert_eq!(slider.index(), 0);
    }

    #[test]
    fn test_dismiss_alert_removes_item() {
        let dom = MemoryDom::new();
        let item = dom.root().add("ul").add("li").with_class("alert");
        let button = item.add("button").with_class("alert-dismiss");
        let buttons = || dom.select_all(&Selector::class("alert-dismiss"));

        assert_eq!(buttons().len(), 1);
        assert!(dismiss_alert(&button));
        assert!(!item.is_attached());
        assert!(buttons().is_empty());
    }
}

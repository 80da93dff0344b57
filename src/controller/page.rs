// SPDX-License-Identifier: PMPL-1.0-or-later

//! Navigation menu and FAQ accordion
//!
//! Both are plain boolean state mirrored into a CSS class and, for the menu,
//! the toggle button's `aria-expanded` attribute.

use crate::present::RenderOp;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Clone, PartialEq)]
pub enum PageEvent {
    MenuToggle,
    NavClick { href: String },
    FaqToggle { index: usize },
    Scroll { y: f64 },
}

/// Geometry needed to scroll to an anchored section below the sticky header.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PageLayout {
    pub header_height: f64,
    pub scroll_y: f64,
    /// Section id to its top edge relative to the viewport.
    pub sections: BTreeMap<String, f64>,
}

impl PageLayout {
    /// Document position that puts the section right under the header.
    pub fn scroll_target(&self, section_id: &str) -> Option<f64> {
        self.sections
            .get(section_id)
            .map(|top| scroll_offset(*top, self.scroll_y, self.header_height))
    }
}

pub fn scroll_offset(target_top: f64, scroll_y: f64, header_height: f64) -> f64 {
    target_top + scroll_y - header_height
}

/// Fragment of an href (`"#faq"` or `"/page#faq"` gives `"faq"`).
pub fn link_hash(href: &str) -> Option<&str> {
    href.split_once('#')
        .map(|(_, hash)| hash)
        .filter(|hash| !hash.is_empty())
}

fn aria_expanded(open: bool) -> String {
    open.to_string()
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NavMenu {
    open: bool,
    active_link: Option<String>,
}

impl NavMenu {
    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn active_link(&self) -> Option<&str> {
        self.active_link.as_deref()
    }

    pub fn toggle(&mut self) -> RenderOp {
        self.open = !self.open;
        RenderOp::SetMenuOpen {
            open: self.open,
            aria_expanded: aria_expanded(self.open),
        }
    }

    pub fn close(&mut self) -> Option<RenderOp> {
        if !self.open {
            return None;
        }
        self.open = false;
        Some(RenderOp::SetMenuOpen {
            open: false,
            aria_expanded: aria_expanded(false),
        })
    }

    /// A nav link was clicked: scroll when the anchor exists, mark the link
    /// as the only active one, close the menu.
    pub fn click_link(&mut self, href: &str, layout: &PageLayout) -> Vec<RenderOp> {
        let mut ops = Vec::new();
        if let Some(top) = link_hash(href).and_then(|hash| layout.scroll_target(hash)) {
            ops.push(RenderOp::ScrollTo { top });
        }
        if self.active_link.as_deref() != Some(href) {
            self.active_link = Some(href.to_string());
            ops.push(RenderOp::SetActiveLink {
                href: href.to_string(),
            });
        }
        ops.extend(self.close());
        ops
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FaqAccordion {
    open: Vec<bool>,
}

impl FaqAccordion {
    pub fn new(items: usize) -> Self {
        Self {
            open: vec![false; items],
        }
    }

    pub fn is_open(&self, index: usize) -> bool {
        self.open.get(index).copied().unwrap_or(false)
    }

    /// Items toggle independently; an unknown index is ignored.
    pub fn toggle(&mut self, index: usize) -> Option<RenderOp> {
        let item = self.open.get_mut(index)?;
        *item = !*item;
        Some(RenderOp::SetFaqOpen {
            index,
            open: *item,
        })
    }
}

#[derive(Debug, Clone, Default)]
pub struct PageController {
    pub menu: NavMenu,
    pub faq: FaqAccordion,
    pub layout: PageLayout,
}

impl PageController {
    pub fn new(layout: PageLayout, faq_items: usize) -> Self {
        Self {
            menu: NavMenu::default(),
            faq: FaqAccordion::new(faq_items),
            layout,
        }
    }

    pub fn handle(&mut self, event: &PageEvent) -> Vec<RenderOp> {
        match event {
            PageEvent::MenuToggle => vec![self.menu.toggle()],
            PageEvent::NavClick { href } => self.menu.click_link(href, &self.layout),
            PageEvent::FaqToggle { index } => self.faq.toggle(*index).into_iter().collect(),
            PageEvent::Scroll { y } => {
                self.layout.scroll_y = *y;
                Vec::new()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn layout() -> PageLayout {
        PageLayout {
            header_height: 80.0,
            scroll_y: 100.0,
            sections: BTreeMap::from([("faq".to_string(), 600.0)]),
        }
    }

    #[test]
    fn toggle_reflects_aria() {
        let mut menu = NavMenu::default();
        assert_eq!(
            menu.toggle(),
            RenderOp::SetMenuOpen {
                open: true,
                aria_expanded: "true".to_string()
            }
        );
        assert!(menu.is_open());
        assert_eq!(
            menu.toggle(),
            RenderOp::SetMenuOpen {
                open: false,
                aria_expanded: "false".to_string()
            }
        );
    }

    #[test]
    fn nav_click_scrolls_below_header() {
        let mut page = PageController::new(layout(), 0);
        page.handle(&PageEvent::MenuToggle);
        let ops = page.handle(&PageEvent::NavClick {
            href: "#faq".to_string(),
        });
        assert_eq!(ops[0], RenderOp::ScrollTo { top: 620.0 });
        assert!(ops.contains(&RenderOp::SetActiveLink {
            href: "#faq".to_string()
        }));
        assert!(!page.menu.is_open());
        assert_eq!(page.menu.active_link(), Some("#faq"));
    }

    #[test]
    fn nav_click_unknown_anchor_skips_scroll() {
        let mut menu = NavMenu::default();
        let ops = menu.click_link("#missing", &layout());
        assert_eq!(
            ops,
            vec![RenderOp::SetActiveLink {
                href: "#missing".to_string()
            }]
        );
        let ops = menu.click_link("/about", &layout());
        assert!(ops
            .iter()
            .all(|op| !matches!(op, RenderOp::ScrollTo { .. })));
    }

    #[test]
    fn link_hash_extraction() {
        assert_eq!(link_hash("#faq"), Some("faq"));
        assert_eq!(link_hash("/index.html#contact"), Some("contact"));
        assert_eq!(link_hash("#"), None);
        assert_eq!(link_hash("/about"), None);
    }

    #[test]
    fn scroll_event_updates_offset() {
        let mut page = PageController::new(layout(), 0);
        page.handle(&PageEvent::Scroll { y: 0.0 });
        assert_eq!(page.layout.scroll_target("faq"), Some(520.0));
    }

    #[test]
    fn faq_items_independent() {
        let mut faq = FaqAccordion::new(3);
        faq.toggle(0);
        faq.toggle(2);
        assert!(faq.is_open(0));
        assert!(!faq.is_open(1));
        assert!(faq.is_open(2));
        assert_eq!(
            faq.toggle(0),
            Some(RenderOp::SetFaqOpen {
                index: 0,
                open: false
            })
        );
        assert_eq!(faq.toggle(7), None);
    }
}

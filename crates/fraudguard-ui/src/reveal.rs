//! Scroll-triggered reveal of marked elements.

use crate::config::DashboardConfig;
use crate::page::{Page, PageElement};
use tracing::trace;

/// Decide whether an element whose top edge sits at `top` should be visible.
///
/// The element is revealed once its top crosses `margin` pixels above the
/// viewport bottom; the comparison is strict.
#[must_use]
pub fn should_reveal(top: f64, viewport_height: f64, margin: f64) -> bool {
    top < viewport_height - margin
}

/// Outcome of one reveal pass.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RevealReport {
    /// Elements carrying the visible class after the pass.
    pub shown: usize,
    /// Elements without the visible class after the pass.
    pub hidden: usize,
}

impl RevealReport {
    /// Number of marked elements evaluated.
    #[must_use]
    pub const fn total(&self) -> usize {
        self.shown + self.hidden
    }
}

/// Toggles the visible class on reveal-marked elements based on viewport position.
#[derive(Clone, Debug, PartialEq)]
pub struct ScrollRevealer {
    selector: String,
    visible_class: String,
    margin: f64,
}

impl ScrollRevealer {
    /// Build a revealer from the page configuration.
    #[must_use]
    pub fn new(config: &DashboardConfig) -> Self {
        Self {
            selector: config.reveal_selector.clone(),
            visible_class: config.visible_class.clone(),
            margin: config.reveal_margin,
        }
    }

    /// Re-evaluate every marked element. Runs on load and on every scroll.
    pub fn reveal<P: Page>(&self, page: &P) -> RevealReport {
        let viewport_height = page.viewport_height();
        let mut report = RevealReport::default();
        for element in page.query_all(&self.selector) {
            let visible = should_reveal(element.top_offset(), viewport_height, self.margin);
            element.set_class(&self.visible_class, visible);
            if visible {
                report.shown += 1;
            } else {
                report.hidden += 1;
            }
        }
        trace!(
            shown = report.shown,
            hidden = report.hidden,
            viewport_height,
            "reveal pass"
        );
        report
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn threshold_is_strict() {
        assert!(should_reveal(599.0, 700.0, 100.0));
        assert!(!should_reveal(600.0, 700.0, 100.0));
        assert!(!should_reveal(900.0, 700.0, 100.0));
    }

    #[test]
    fn elements_above_the_viewport_stay_revealed() {
        assert!(should_reveal(-250.0, 700.0, 100.0));
    }

    #[test]
    fn report_total_sums_both_sides() {
        let report = RevealReport {
            shown: 2,
            hidden: 3,
        };
        assert_eq!(report.total(), 5);
    }

    proptest! {
        #[test]
        fn reveal_matches_threshold(top in -2_000.0f64..4_000.0, height in 0.0f64..3_000.0) {
            prop_assert_eq!(should_reveal(top, height, 100.0), top < height - 100.0);
        }
    }
}

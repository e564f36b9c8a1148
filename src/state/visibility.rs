use std::collections::HashSet;
use std::rc::Rc;

use yew::Reducible;

/// Names one revealable element within a page.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct RevealId(pub &'static str);

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RevealConfig {
    /// Fraction of the element that must be on screen.
    pub threshold: f64,
    /// Bottom root margin in pixels; negative shrinks the viewport.
    pub bottom_margin_px: i32,
}

impl Default for RevealConfig {
    fn default() -> Self {
        Self {
            threshold: 0.1,
            bottom_margin_px: -50,
        }
    }
}

impl RevealConfig {
    pub fn root_margin(&self) -> String {
        format!("0px 0px {}px 0px", self.bottom_margin_px)
    }

    pub fn qualifies(&self, is_intersecting: bool, ratio: f64) -> bool {
        // Browsers report ratios a hair under the threshold they fired for.
        const RATIO_SLACK: f64 = 1e-3;
        is_intersecting && ratio + RATIO_SLACK >= self.threshold
    }
}

/// Reveal state of a page's elements.
///
/// An id is hidden only while it is armed, meaning an observer is actually
/// watching it. Ids that were never armed render as plain content. The
/// visible set only ever grows.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct VisibilitySet {
    armed: HashSet<RevealId>,
    visible: HashSet<RevealId>,
}

impl VisibilitySet {
    pub fn is_visible(&self, id: RevealId) -> bool {
        self.visible.contains(&id)
    }

    pub fn is_pending(&self, id: RevealId) -> bool {
        self.armed.contains(&id) && !self.is_visible(id)
    }

    /// Returns true if `id` was not visible before.
    pub fn mark_visible(&mut self, id: RevealId) -> bool {
        self.visible.insert(id)
    }

    /// Returns true if `id` went from plain to hidden-until-revealed.
    pub fn arm(&mut self, id: RevealId) -> bool {
        !self.is_visible(id) && self.armed.insert(id)
    }

    /// Class for use in `classes!`: `"visible"` once revealed,
    /// `"reveal--pending"` while watched, nothing otherwise.
    pub fn class(&self, id: RevealId) -> Option<&'static str> {
        if self.is_visible(id) {
            Some("visible")
        } else if self.is_pending(id) {
            Some("reveal--pending")
        } else {
            None
        }
    }
}

pub enum VisibilityAction {
    /// Ids an observer has started watching.
    Arm(Vec<RevealId>),
    Reveal(RevealId),
}

impl Reducible for VisibilitySet {
    type Action = VisibilityAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        let changed = match action {
            VisibilityAction::Arm(ids) => ids
                .into_iter()
                .fold(false, |changed, id| next.arm(id) || changed),
            VisibilityAction::Reveal(id) => next.mark_visible(id),
        };
        if changed {
            Rc::new(next)
        } else {
            self
        }
    }
}

/// Per-element one-shot subscription bookkeeping: each watched id delivers
/// at most one notification, after which it is no longer pending.
#[derive(Debug, Default)]
pub struct OneShotWatch {
    pending: HashSet<RevealId>,
}

impl OneShotWatch {
    pub fn new(ids: impl IntoIterator<Item = RevealId>) -> Self {
        Self {
            pending: ids.into_iter().collect(),
        }
    }

    /// True exactly once per watched id; the caller should then stop observing it.
    pub fn fire(&mut self, id: RevealId) -> bool {
        self.pending.remove(&id)
    }

    pub fn is_done(&self) -> bool {
        self.pending.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const WHY: RevealId = RevealId("why");
    const SERVICES: RevealId = RevealId("services");

    #[test]
    fn default_config() {
        let config = RevealConfig::default();
        assert_eq!(config.threshold, 0.1);
        assert_eq!(config.root_margin(), "0px 0px -50px 0px");
    }

    #[test]
    fn qualifying_entries() {
        let config = RevealConfig::default();
        assert!(config.qualifies(true, 0.1));
        assert!(config.qualifies(true, 0.0999));
        assert!(config.qualifies(true, 1.0));
        assert!(!config.qualifies(true, 0.05));
        assert!(!config.qualifies(false, 0.5));
    }

    #[test]
    fn set_is_monotonic() {
        let mut set = VisibilitySet::default();
        assert!(!set.is_visible(WHY));
        assert!(set.mark_visible(WHY));
        assert!(!set.mark_visible(WHY));
        assert!(set.is_visible(WHY));
        assert_eq!(set.class(WHY), Some("visible"));
        assert_eq!(set.class(SERVICES), None);
    }

    #[test]
    fn reducer_never_unmarks() {
        let set = Rc::new(VisibilitySet::default());
        let set = set.reduce(VisibilityAction::Reveal(WHY));
        let set = set.reduce(VisibilityAction::Reveal(SERVICES));
        let set = set.reduce(VisibilityAction::Reveal(WHY));
        assert!(set.is_visible(WHY));
        assert!(set.is_visible(SERVICES));
    }

    #[test]
    fn reducer_keeps_same_rc_when_nothing_new() {
        let set = Rc::new(VisibilitySet::default()).reduce(VisibilityAction::Reveal(WHY));
        let again = Rc::clone(&set).reduce(VisibilityAction::Reveal(WHY));
        assert!(Rc::ptr_eq(&set, &again));
    }

    #[test]
    fn unwatched_ids_are_never_hidden() {
        // SERVICES had no mounted node when the observer started, so it was never armed
        let set = Rc::new(VisibilitySet::default()).reduce(VisibilityAction::Arm(vec![WHY]));
        assert_eq!(set.class(WHY), Some("reveal--pending"));
        assert_eq!(set.class(SERVICES), None);
        assert!(!set.is_pending(SERVICES));

        let set = set.reduce(VisibilityAction::Reveal(WHY));
        assert_eq!(set.class(WHY), Some("visible"));
        assert_eq!(set.class(SERVICES), None);
    }

    #[test]
    fn nothing_is_hidden_without_an_observer() {
        let set = VisibilitySet::default();
        assert_eq!(set.class(WHY), None);
        assert_eq!(set.class(SERVICES), None);
    }

    #[test]
    fn arming_after_reveal_does_not_hide_again() {
        let set = Rc::new(VisibilitySet::default()).reduce(VisibilityAction::Reveal(WHY));
        let again = Rc::clone(&set).reduce(VisibilityAction::Arm(vec![WHY]));
        assert!(Rc::ptr_eq(&set, &again));
        assert_eq!(again.class(WHY), Some("visible"));
    }

    #[test]
    fn one_shot_fires_once_per_id() {
        let mut watch = OneShotWatch::new([WHY, SERVICES]);
        assert!(watch.fire(WHY));
        assert!(!watch.fire(WHY));
        assert!(!watch.is_done());
        assert!(watch.fire(SERVICES));
        assert!(watch.is_done());
    }

    #[test]
    fn one_shot_ignores_unknown_ids() {
        let mut watch = OneShotWatch::new([WHY]);
        assert!(!watch.fire(SERVICES));
    }
}

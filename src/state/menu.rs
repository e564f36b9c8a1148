//! Mobile navigation menu state machine.
//!
//! The menu owns page scrolling while it is open. That ownership is a
//! [`ScrollGuard`]: acquired when the menu enters `Open`, dropped on every
//! way out of it, and released unconditionally when the controller is
//! disposed.

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum MenuState {
    #[default]
    Closed,
    Open,
}

impl MenuState {
    pub fn is_open(self) -> bool {
        self == MenuState::Open
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MenuAction {
    /// Hamburger button.
    Toggle,
    /// Pointer-down outside the menu and its button, or a tap on the overlay.
    Dismiss,
    /// Any navigation link inside the header.
    LinkActivated,
}

impl MenuState {
    pub fn next(self, action: MenuAction) -> MenuState {
        match (self, action) {
            (MenuState::Closed, MenuAction::Toggle) => MenuState::Open,
            (MenuState::Open, _) => MenuState::Closed,
            (MenuState::Closed, _) => MenuState::Closed,
        }
    }
}

/// Something that can stop the page from scrolling.
pub trait ScrollLock {
    fn set_locked(&self, locked: bool);
}

/// Holds the scroll lock for as long as it lives.
pub struct ScrollGuard<L: ScrollLock> {
    lock: L,
}

impl<L: ScrollLock> ScrollGuard<L> {
    pub fn acquire(lock: L) -> Self {
        lock.set_locked(true);
        Self { lock }
    }
}

impl<L: ScrollLock> Drop for ScrollGuard<L> {
    fn drop(&mut self) {
        self.lock.set_locked(false);
    }
}

pub struct MenuController<L: ScrollLock + Clone> {
    state: MenuState,
    lock: L,
    guard: Option<ScrollGuard<L>>,
}

impl<L: ScrollLock + Clone> MenuController<L> {
    pub fn new(lock: L) -> Self {
        Self {
            state: MenuState::Closed,
            lock,
            guard: None,
        }
    }

    pub fn state(&self) -> MenuState {
        self.state
    }

    /// Applies `action`; returns true when the state changed.
    pub fn dispatch(&mut self, action: MenuAction) -> bool {
        let next = self.state.next(action);
        if next == self.state {
            return false;
        }
        log::debug!("menu {:?} -> {:?} ({:?})", self.state, next, action);
        self.state = next;
        self.guard = match next {
            MenuState::Open => Some(ScrollGuard::acquire(self.lock.clone())),
            MenuState::Closed => None,
        };
        true
    }

    /// Closes the menu and re-enables scrolling whatever the current state.
    pub fn dispose(&mut self) {
        self.state = MenuState::Closed;
        self.guard = None;
        self.lock.set_locked(false);
    }
}

impl<L: ScrollLock + Clone> Drop for MenuController<L> {
    fn drop(&mut self) {
        self.dispose();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    /// Records every call so tests can check both the final value and the history.
    #[derive(Clone, Default)]
    struct FakeLock {
        calls: Rc<RefCell<Vec<bool>>>,
    }

    impl FakeLock {
        fn locked(&self) -> bool {
            self.calls.borrow().last().copied().unwrap_or(false)
        }
    }

    impl ScrollLock for FakeLock {
        fn set_locked(&self, locked: bool) {
            self.calls.borrow_mut().push(locked);
        }
    }

    #[test]
    fn starts_closed() {
        let controller = MenuController::new(FakeLock::default());
        assert_eq!(controller.state(), MenuState::Closed);
    }

    #[test]
    fn double_toggle_round_trip() {
        let lock = FakeLock::default();
        let mut controller = MenuController::new(lock.clone());
        assert!(controller.dispatch(MenuAction::Toggle));
        assert_eq!(controller.state(), MenuState::Open);
        assert!(lock.locked());
        assert!(controller.dispatch(MenuAction::Toggle));
        assert_eq!(controller.state(), MenuState::Closed);
        assert!(!lock.locked());
    }

    #[test]
    fn every_close_trigger_releases_scroll() {
        for action in [MenuAction::Toggle, MenuAction::Dismiss, MenuAction::LinkActivated] {
            let lock = FakeLock::default();
            let mut controller = MenuController::new(lock.clone());
            controller.dispatch(MenuAction::Toggle);
            assert!(lock.locked(), "open should lock before {:?}", action);
            controller.dispatch(action);
            assert_eq!(controller.state(), MenuState::Closed);
            assert!(!lock.locked(), "{:?} should unlock", action);
        }
    }

    #[test]
    fn close_actions_are_noops_when_closed() {
        let lock = FakeLock::default();
        let mut controller = MenuController::new(lock.clone());
        assert!(!controller.dispatch(MenuAction::Dismiss));
        assert!(!controller.dispatch(MenuAction::LinkActivated));
        assert_eq!(controller.state(), MenuState::Closed);
        assert!(lock.calls.borrow().is_empty());
    }

    #[test]
    fn lock_acquired_once_per_open() {
        let lock = FakeLock::default();
        let mut controller = MenuController::new(lock.clone());
        controller.dispatch(MenuAction::Toggle);
        controller.dispatch(MenuAction::Dismiss);
        controller.dispatch(MenuAction::Toggle);
        controller.dispatch(MenuAction::LinkActivated);
        assert_eq!(*lock.calls.borrow(), vec![true, false, true, false]);
    }

    #[test]
    fn dispose_while_open_releases() {
        let lock = FakeLock::default();
        let mut controller = MenuController::new(lock.clone());
        controller.dispatch(MenuAction::Toggle);
        controller.dispose();
        assert_eq!(controller.state(), MenuState::Closed);
        assert!(!lock.locked());
    }

    #[test]
    fn drop_releases_even_when_closed() {
        let lock = FakeLock::default();
        {
            let _controller = MenuController::new(lock.clone());
        }
        assert_eq!(*lock.calls.borrow(), vec![false]);
    }

    #[test]
    fn drop_while_open_releases() {
        let lock = FakeLock::default();
        {
            let mut controller = MenuController::new(lock.clone());
            controller.dispatch(MenuAction::Toggle);
        }
        assert!(!lock.locked());
    }

    #[test]
    fn guard_releases_on_drop() {
        let lock = FakeLock::default();
        let guard = ScrollGuard::acquire(lock.clone());
        assert!(lock.locked());
        drop(guard);
        assert!(!lock.locked());
    }
}

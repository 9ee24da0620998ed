use crate::state::RosterState;
use std::cell::RefCell;
use std::rc::Rc;

/// Shared handle to the single `RosterState` of a session.
///
/// Borrows must not be held across an `.await`; every access goes through a
/// closure so the controller can interleave state updates with network calls.
pub trait RosterStore {
    fn read<R>(&self, f: impl FnOnce(&RosterState) -> R) -> R;
    fn update<R>(&self, f: impl FnOnce(&mut RosterState) -> R) -> R;
}

impl RosterStore for Rc<RefCell<RosterState>> {
    fn read<R>(&self, f: impl FnOnce(&RosterState) -> R) -> R {
        f(&self.borrow())
    }

    fn update<R>(&self, f: impl FnOnce(&mut RosterState) -> R) -> R {
        f(&mut self.borrow_mut())
    }
}

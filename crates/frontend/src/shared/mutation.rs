//! Per-page mutation serialization.
//!
//! The interaction surface never blocks, so nothing stops a user from
//! clicking a second mutation while one is in flight. Each page owns one
//! lock; a mutation that arrives while it is held is rejected with
//! [`ApiError::Busy`] instead of raced.

use contracts::error::ApiError;
use leptos::prelude::*;

#[derive(Clone, Copy)]
pub struct MutationLock {
    busy: RwSignal<bool>,
}

impl MutationLock {
    pub fn new() -> Self {
        Self { busy: RwSignal::new(false) }
    }

    /// Claim the page's mutation slot. The caller must `release` once the
    /// request has completed, on success and on failure alike.
    pub fn try_acquire(self) -> Result<(), ApiError> {
        if self.busy.get_untracked() {
            return Err(ApiError::Busy);
        }
        self.busy.set(true);
        Ok(())
    }

    pub fn release(self) {
        self.busy.set(false);
    }

    /// Reactive read, used to disable action buttons while held.
    pub fn is_busy(self) -> bool {
        self.busy.get()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn a_second_mutation_is_rejected_while_one_is_in_flight() {
        let owner = Owner::new();
        owner.set();

        let lock = MutationLock::new();
        assert!(lock.try_acquire().is_ok());
        assert_eq!(lock.try_acquire().unwrap_err(), ApiError::Busy);

        lock.release();
        assert!(lock.try_acquire().is_ok());
    }
}

//! Change notification for the form repository
//!
//! Views register a callback and re-render when it fires. Callbacks run
//! synchronously inside the mutating call, after memory has changed and
//! before the durable write is attempted, so a view sees the new state even
//! when persistence later fails.

use intake_core::FormId;
use std::fmt;

/// What changed in the repository
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChangeEvent {
    /// Fields were merged into the current draft
    DraftUpdated {
        /// Draft id
        id: FormId,
    },
    /// The current draft was swapped for another record (new, loaded, or
    /// recreated after its record was deleted)
    DraftReplaced {
        /// Id of the new draft
        id: FormId,
    },
    /// The draft was upserted into the saved forms
    FormSaved {
        /// Saved id
        id: FormId,
    },
    /// A saved form was removed
    FormDeleted {
        /// Removed id
        id: FormId,
    },
    /// Every saved form was removed
    AllDeleted {
        /// How many forms were removed
        removed: usize,
    },
}

/// Handle returned by `subscribe`, used to unsubscribe
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Callback = Box<dyn FnMut(&ChangeEvent) + Send>;

/// Registered callbacks, called in subscription order
#[derive(Default)]
pub(crate) struct Observers {
    next_id: u64,
    callbacks: Vec<(SubscriptionId, Callback)>,
}

impl Observers {
    pub(crate) fn subscribe(&mut self, callback: Callback) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.callbacks.push((id, callback));
        id
    }

    pub(crate) fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.callbacks.len();
        self.callbacks.retain(|(sid, _)| *sid != id);
        self.callbacks.len() != before
    }

    pub(crate) fn notify(&mut self, event: &ChangeEvent) {
        for (_, callback) in &mut self.callbacks {
            callback(event);
        }
    }

    #[cfg(test)]
    pub(crate) fn len(&self) -> usize {
        self.callbacks.len()
    }
}

impl fmt::Debug for Observers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Observers")
            .field("subscribers", &self.callbacks.len())
            .finish()
    }
}

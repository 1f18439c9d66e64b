//! Page view-models.
//!
//! # Design
//! A view never performs I/O. Operations that need the server return a
//! `Pending` (a ticket plus the request to execute); the host runs the
//! request and hands the outcome back through `on_response` with the same
//! ticket. Each view tracks the tickets it is waiting on, so completions for
//! unknown tickets, or any completion after `unmount`, are dropped instead of
//! touching stale state.

pub mod form;
pub mod list;

use std::collections::HashMap;

use crate::error::ApiError;
use crate::http::{HttpRequest, HttpResponse};

pub use form::{FieldView, FormMode, FormPage, FormView};
pub use list::{EmployeeRow, ListPage, ListView};

/// Correlates a pending request with its completion. Unique per view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Ticket(u64);

/// A request a view is waiting on.
#[derive(Debug, Clone)]
pub struct Pending {
    pub ticket: Ticket,
    pub request: HttpRequest,
}

/// What came back for a pending request: a response, or a transport failure.
pub type Outcome = Result<HttpResponse, ApiError>;

/// Tickets a view has issued and not yet seen completed, with what each one
/// was for.
#[derive(Debug)]
pub(crate) struct InFlight<Op> {
    next: u64,
    ops: HashMap<Ticket, Op>,
    mounted: bool,
}

impl<Op> InFlight<Op> {
    pub(crate) fn new() -> Self {
        Self {
            next: 0,
            ops: HashMap::new(),
            mounted: true,
        }
    }

    pub(crate) fn issue(&mut self, op: Op, request: HttpRequest) -> Pending {
        self.next += 1;
        let ticket = Ticket(self.next);
        self.ops.insert(ticket, op);
        Pending { ticket, request }
    }

    /// Claim the operation behind `ticket`. `None` when the ticket is
    /// unknown, already completed, or the view has been unmounted.
    pub(crate) fn complete(&mut self, ticket: Ticket) -> Option<Op> {
        if !self.mounted {
            log::debug!("ignoring completion of {ticket:?} after unmount");
            return None;
        }
        let op = self.ops.remove(&ticket);
        if op.is_none() {
            log::debug!("ignoring completion of unknown {ticket:?}");
        }
        op
    }

    pub(crate) fn unmount(&mut self) {
        self.mounted = false;
        self.ops.clear();
    }

    #[cfg(test)]
    pub(crate) fn is_mounted(&self) -> bool {
        self.mounted
    }

    #[cfg(test)]
    pub(crate) fn len(&self) -> usize {
        self.ops.len()
    }
}

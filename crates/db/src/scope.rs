//! Per-account row scoping.
//!
//! Every category and note query goes through an [`OwnerScope`]. Scoped
//! queries always bind the owning account id as `$1` and filter with
//! [`OWNED`], so a row that belongs to another account is reported exactly
//! like a row that does not exist.

use jotter_core::types::DbId;

/// SQL predicate restricting rows to the scoped account (bound as `$1`).
///
/// Prefix with a table alias in joined queries, e.g. `format!("n.{OWNED}")`.
pub(crate) const OWNED: &str = "account_id = $1";

/// The account on whose behalf a store operation runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OwnerScope {
    account_id: DbId,
}

impl OwnerScope {
    pub fn new(account_id: DbId) -> Self {
        Self { account_id }
    }

    pub fn account_id(&self) -> DbId {
        self.account_id
    }
}

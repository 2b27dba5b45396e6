//! Lock state store and the transfer guard it backs.
//!
//! Every credential is born locked: the controller sets the lock record at
//! mint time and no externally reachable operation ever clears it. The
//! [`LockGuard`] is the hook installed into the ownership ledger; it runs
//! before any transfer mutation and vetoes the transfer of any locked
//! credential, uniformly across direct, safe-with-payload, batch, and
//! approval-based paths.
//!
//! The store is shared between the controller (which writes lock records)
//! and the ledger's hook (which reads them) behind `Arc<RwLock<_>>`.

mod store;


pub use store::{LockGuard, LockStore, SharedLockStore};

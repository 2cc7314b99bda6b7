//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by domain (`session`, `submissions`) so the session gate
//! and the list views can depend on small focused models.

pub mod session;
pub mod submissions;

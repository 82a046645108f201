//! Application services composed from ports.

mod post_store;
mod session;

pub use post_store::PostStore;
pub use session::SessionIssuer;

//! ID type wrappers for type safety.

mod id_macro;

pub mod client_org_id;
pub mod project_id;
pub mod user_id;

pub use client_org_id::ClientOrgId;
pub use project_id::ProjectId;
pub use user_id::UserId;

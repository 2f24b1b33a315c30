//! Catalog domain models as served by the portal backend.
//!
//! Choice fields travel as their display strings ("Web App", "Non-profit"),
//! which is also what the browsing pages put in the query string.

mod client_org;
mod project;
mod user;

pub use client_org::{ClientOrg, ClientOrgShort, ClientOrgType};
pub use project::{Project, ProjectShort, ProjectType, Tag, Term};
pub use user::UserShort;

/// Enumeration with one canonical, ordered table of members.
/// 具有唯一、有序成员表的枚举
///
/// The same table validates incoming query values and feeds the filter menus,
/// so a value is legal exactly when it is listed in [`WireEnum::ALL`].
pub trait WireEnum: Copy + Eq + 'static {
    /// Every member, in menu order.
    const ALL: &'static [Self];

    /// Wire / display string of this member.
    fn as_str(&self) -> &'static str;

    /// Look a member up by exact string equality.
    fn from_wire(value: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|member| member.as_str() == value)
    }
}

/// An entity listed by one of the browsing pages.
pub trait CatalogEntity {
    fn id(&self) -> &str;

    fn name(&self) -> &str;

    /// Route of the entity's detail page.
    fn detail_path(&self) -> String;
}

//! Plain-text rendering of a browsing page.

use std::fmt::Display;
use std::io::{self, Write};

use portal_core::models::{ClientOrg, Project};
use portal_core::ports::Location;
use portal_core::{CatalogEntity, WireEnum};
use portal_infra::ViewSnapshot;

/// One listing row of an entity.
pub trait ListingLine: CatalogEntity {
    fn listing_line(&self) -> String;
}

impl ListingLine for Project {
    fn listing_line(&self) -> String {
        format!(
            "{}  [{} {} | {} | {}]  {}",
            self.name,
            self.term,
            self.year,
            self.project_type,
            self.client_org
                .as_ref()
                .map_or("no client", |org| org.org_type.as_str()),
            self.detail_path()
        )
    }
}

impl ListingLine for ClientOrg {
    fn listing_line(&self) -> String {
        format!("{}  [{}]  {}", self.name, self.org_type, self.detail_path())
    }
}

/// Write the summary, the rows and the final page URL.
pub fn write_page<E: ListingLine, F>(
    out: &mut impl Write,
    snapshot: Option<&ViewSnapshot<E, F>>,
    location: &Location,
) -> io::Result<()> {
    if let Some(snapshot) = snapshot {
        writeln!(out, "{}", snapshot.summary)?;
        for entity in snapshot.entities.iter().flatten() {
            writeln!(out, "  {}", entity.listing_line())?;
        }
    }
    writeln!(out, "url: {}", location)
}

/// One "label: a, b, c" line of a filter menu.
pub fn write_menu<T: Display>(
    out: &mut impl Write,
    label: &str,
    options: impl IntoIterator<Item = T>,
) -> io::Result<()> {
    write!(out, "{}: Any", label)?;
    for option in options {
        write!(out, ", {}", option)?;
    }
    writeln!(out)
}

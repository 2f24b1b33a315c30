//! Command-line surface: one subcommand per browsing page.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use portal_core::filter::Choice;
use portal_core::models::{ClientOrgType, ProjectType, Term, WireEnum};
use portal_core::url_sync::parse_leading_int;

use crate::bootstrap::DEFAULT_CONFIG_FILE;

#[derive(Debug, Parser)]
#[command(name = "projects-portal")]
#[command(about = "Browse the projects portal catalog", long_about = None)]
pub struct Cli {
    /// Configuration file
    #[arg(short, long, global = true, default_value = DEFAULT_CONFIG_FILE)]
    pub config: PathBuf,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Browse student projects
    Projects(ProjectArgs),
    /// Browse client organizations
    Clients(ClientArgs),
}

#[derive(Debug, Args)]
pub struct ProjectArgs {
    /// Page URL to start from, e.g. "/projects?term=Fall&year=2021"
    #[arg(long)]
    pub url: Option<String>,

    /// Free-text search
    #[arg(short, long)]
    pub search: Option<String>,

    /// Client organization type, or "Any"
    #[arg(long, value_parser = parse_choice::<ClientOrgType>)]
    pub client_type: Option<Choice<ClientOrgType>>,

    /// Project type, or "Any"
    #[arg(long = "type", value_parser = parse_choice::<ProjectType>)]
    pub project_type: Option<Choice<ProjectType>>,

    /// Academic term, or "Any"
    #[arg(long, value_parser = parse_choice::<Term>)]
    pub term: Option<Choice<Term>>,

    /// Year, or "Any"
    #[arg(long, value_parser = parse_year)]
    pub year: Option<Choice<i32>>,

    /// Reverse the sort order
    #[arg(short, long)]
    pub reverse: bool,

    /// Also print the filter menu options
    #[arg(long)]
    pub menus: bool,
}

#[derive(Debug, Args)]
pub struct ClientArgs {
    /// Page URL to start from, e.g. "/clients?type=Startup"
    #[arg(long)]
    pub url: Option<String>,

    /// Free-text search
    #[arg(short, long)]
    pub search: Option<String>,

    /// Client organization type, or "Any"
    #[arg(long = "type", value_parser = parse_choice::<ClientOrgType>)]
    pub client_type: Option<Choice<ClientOrgType>>,

    /// Reverse the sort order
    #[arg(short, long)]
    pub reverse: bool,

    /// Also print the filter menu options
    #[arg(long)]
    pub menus: bool,
}

const ANY: &str = "Any";

/// Parse a menu value: a member's display string or "Any" (any case).
fn parse_choice<T: WireEnum>(value: &str) -> Result<Choice<T>, String> {
    if value.eq_ignore_ascii_case(ANY) {
        return Ok(Choice::Any);
    }
    T::from_wire(value).map(Choice::Only).ok_or_else(|| {
        let members: Vec<&str> = T::ALL.iter().map(|member| member.as_str()).collect();
        format!("expected one of: {}, {}", ANY, members.join(", "))
    })
}

fn parse_year(value: &str) -> Result<Choice<i32>, String> {
    if value.eq_ignore_ascii_case(ANY) {
        return Ok(Choice::Any);
    }
    parse_leading_int(value)
        .map(Choice::Only)
        .ok_or_else(|| format!("expected a year or {ANY}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_projects_subcommand_with_filters() {
        let cli = Cli::try_parse_from([
            "projects-portal",
            "projects",
            "--type",
            "Web App",
            "--client-type",
            "Non-profit",
            "--term",
            "any",
            "--year",
            "2021",
            "-r",
        ])
        .unwrap();

        let Command::Projects(args) = cli.command else {
            panic!("expected projects subcommand");
        };
        assert_eq!(args.project_type, Some(Choice::Only(ProjectType::Web)));
        assert_eq!(args.client_type, Some(Choice::Only(ClientOrgType::Nonprofit)));
        assert_eq!(args.term, Some(Choice::Any));
        assert_eq!(args.year, Some(Choice::Only(2021)));
        assert!(args.reverse);
        assert_eq!(cli.config, PathBuf::from(DEFAULT_CONFIG_FILE));
    }

    #[test]
    fn test_unknown_member_is_rejected() {
        let result = Cli::try_parse_from(["projects-portal", "clients", "--type", "Corporate"]);

        assert!(result.is_err());
    }

    #[test]
    fn test_parse_choice_lists_members_on_error() {
        let err = parse_choice::<Term>("Autumn").unwrap_err();

        assert_eq!(err, "expected one of: Any, Fall, Winter, Spring, Summer");
    }
}

//! `cms` command line: admin content management and a text view of the
//! public site, on top of the `service` controllers.

pub mod commands;
pub mod confirm;

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

pub use commands::run;

#[derive(Debug, Parser)]
#[command(name = "cms", version)]
#[command(about = "Manage site content through the content API")]
pub struct Cli {
    /// API base URL, overriding config and SITE_API_URL
    #[arg(long, global = true)]
    pub api_url: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Check that the API answers
    Health,
    /// Log in and store the session token
    Login {
        #[arg(short, long, default_value = "admin")]
        username: String,
        /// Read from stdin when omitted
        #[arg(short, long)]
        password: Option<String>,
    },
    /// Forget the stored session token
    Logout,
    /// Show whether a session token is stored
    Status,
    Leaders(EntityArgs),
    Services(EntityArgs),
    Resources(EntityArgs),
    Partners(EntityArgs),
    /// Show or replace the About section
    About {
        #[command(subcommand)]
        action: AboutAction,
    },
    /// List submitted contact tickets
    Tickets,
    /// Send a contact request as a visitor
    Contact(ContactArgs),
    /// Print the public site content, with fallbacks
    Site {
        #[arg(long, value_enum, default_value_t = Section::All)]
        section: Section,
    },
}

#[derive(Debug, Args)]
pub struct EntityArgs {
    #[command(subcommand)]
    pub action: EntityAction,
}

#[derive(Debug, Subcommand)]
pub enum EntityAction {
    List,
    /// Create from a JSON payload
    Create {
        #[arg(long)]
        data: String,
        /// Upload this file into the photo/logo/url field first
        #[arg(long)]
        file: Option<PathBuf>,
    },
    /// Replace an entity; without --data the current values are kept
    Update {
        id: i64,
        #[arg(long)]
        data: Option<String>,
        #[arg(long)]
        file: Option<PathBuf>,
    },
    Delete {
        id: i64,
        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },
}

#[derive(Debug, Subcommand)]
pub enum AboutAction {
    Show,
    Set {
        #[arg(long)]
        content: Option<String>,
        #[arg(long)]
        file: Option<PathBuf>,
    },
}

#[derive(Debug, Args)]
pub struct ContactArgs {
    #[arg(long)]
    pub name: String,
    #[arg(long)]
    pub email: String,
    #[arg(long, default_value = service::contact::DEFAULT_SUBJECT)]
    pub subject: String,
    #[arg(long)]
    pub message: String,
    #[arg(long, default_value = "")]
    pub company: String,
    #[arg(long, default_value = "")]
    pub budget: String,
    #[arg(long, default_value = "")]
    pub timeline: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Section {
    All,
    About,
    Leaders,
    Services,
    Resources,
    Partners,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_entity_commands() {
        let cli = Cli::parse_from(["cms", "leaders", "delete", "4", "--yes"]);
        match cli.command {
            Command::Leaders(EntityArgs { action: EntityAction::Delete { id, yes } }) => {
                assert_eq!(id, 4);
                assert!(yes);
            }
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn contact_subject_has_a_default() {
        let cli = Cli::parse_from(["cms", "contact", "--name", "A", "--email", "a@b.c", "--message", "hi"]);
        match cli.command {
            Command::Contact(args) => assert_eq!(args.subject, "Project inquiry"),
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn global_api_url_after_subcommand() {
        let cli = Cli::parse_from(["cms", "site", "--section", "services", "--api-url", "http://x/api"]);
        assert_eq!(cli.api_url.as_deref(), Some("http://x/api"));
        assert!(matches!(cli.command, Command::Site { section: Section::Services }));
    }

    #[test]
    fn command_definition_is_consistent() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}

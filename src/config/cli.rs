//! CLI argument parsing using clap.
//!
//! Defines the command-line interface with all options and subcommands.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

/// Sailthru API client
///
/// Signs and sends one Sailthru API call per invocation, or checks
/// postbacks and signatures offline.
#[derive(Debug, Parser)]
#[command(name = "sailthru")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,

    /// Path to configuration file
    #[arg(long, short, global = true)]
    pub config: Option<PathBuf>,

    /// API key (overrides api.key)
    #[arg(long = "api-key", global = true)]
    pub api_key: Option<String>,

    /// Shared secret (overrides api.secret)
    #[arg(long, global = true)]
    pub secret: Option<String>,

    /// API base URI (overrides api.uri)
    #[arg(long = "api-uri", global = true)]
    pub api_uri: Option<String>,

    /// Enable verbose logging
    #[arg(long, short, global = true)]
    pub verbose: bool,
}

/// Subcommands for sailthru
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Generate a default configuration file
    Init {
        /// Output path for the configuration file
        #[arg(long, short, default_value = "sailthru.toml")]
        output: PathBuf,
    },

    /// Print the request signature of a JSON parameter object
    Sign {
        /// Parameters as a JSON object
        params: String,
    },

    /// Check a form-encoded postback body
    Verify {
        /// Raw postback body, e.g. 'action=optout&email=...&sig=...'
        body: String,

        /// Which check to run
        #[arg(long, value_enum, default_value = "signature")]
        kind: PostbackKindArg,
    },

    /// Send a template to one or more addresses
    Send {
        /// Template name
        #[arg(long)]
        template: String,

        /// Recipient address (can be specified multiple times)
        #[arg(long = "email", required = true)]
        emails: Vec<String>,

        /// Replacement vars as a JSON object
        #[arg(long)]
        vars: Option<String>,

        /// Send options as a JSON object
        #[arg(long)]
        options: Option<String>,

        /// Schedule the send instead of delivering now
        #[arg(long = "schedule-time")]
        schedule_time: Option<String>,
    },

    /// Get the status of a send
    GetSend {
        /// Send id
        send_id: String,
    },

    /// Cancel a scheduled send
    CancelSend {
        /// Send id
        send_id: String,
    },

    /// Get vars and lists of an address
    GetEmail {
        /// Email address
        email: String,
    },

    /// Set vars, lists and templates of an address
    SetEmail {
        /// Email address
        email: String,

        /// Replacement vars as a JSON object
        #[arg(long)]
        vars: Option<String>,

        /// List subscriptions as a JSON object, e.g. '{"news":1}'
        #[arg(long)]
        lists: Option<String>,

        /// Template opt-outs as a JSON object
        #[arg(long)]
        templates: Option<String>,
    },

    /// Get a scheduled blast
    GetBlast {
        /// Blast id
        blast_id: String,
    },

    /// Schedule a mass-mail blast
    ScheduleBlast(ScheduleBlastArgs),

    /// Import the address book of a webmail account
    ImportContacts {
        /// Account address
        email: String,

        /// Account password
        #[arg(long)]
        password: String,

        /// Include contact names
        #[arg(long)]
        names: bool,
    },

    /// Get a template
    GetTemplate {
        /// Template name
        name: String,
    },

    /// Save a template
    SaveTemplate {
        /// Template name
        name: String,

        /// Template fields as a JSON object
        #[arg(long)]
        fields: String,
    },

    /// Print the Horizon `Set-Cookie` header for an address
    Horizon {
        /// Email address
        email: String,

        /// Cookie domain
        #[arg(long)]
        domain: Option<String>,

        /// Request host to derive the domain from (last two labels)
        #[arg(long, required_unless_present = "domain", conflicts_with = "domain")]
        host: Option<String>,

        /// Cookie lifetime in seconds; 0 for a session cookie (default: one year)
        #[arg(long)]
        duration: Option<u64>,

        /// Restrict the cookie to HTTPS
        #[arg(long)]
        secure: bool,
    },

    /// Print the sender details of a site
    SenderDetails {
        /// Site name (default site if omitted)
        site: Option<String>,
    },
}

/// Arguments of `schedule-blast`.
#[derive(Debug, Args)]
pub struct ScheduleBlastArgs {
    /// Blast name
    #[arg(long)]
    pub name: String,

    /// Mailing list
    #[arg(long)]
    pub list: String,

    /// When to send
    #[arg(long = "schedule-time")]
    pub schedule_time: String,

    /// Sender name
    #[arg(long = "from-name")]
    pub from_name: String,

    /// Sender address
    #[arg(long = "from-email")]
    pub from_email: String,

    /// Subject line
    #[arg(long)]
    pub subject: String,

    /// HTML body
    #[arg(long = "content-html")]
    pub content_html: String,

    /// Plain-text body
    #[arg(long = "content-text")]
    pub content_text: String,

    /// Extra blast fields as a JSON object
    #[arg(long)]
    pub options: Option<String>,
}

/// Postback check selected by `verify --kind`
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum PostbackKindArg {
    /// Signature only
    #[value(name = "signature")]
    Signature,
    /// Signed optout postback
    #[value(name = "optout")]
    Optout,
    /// Signed verify postback, confirmed with the API
    #[value(name = "verify")]
    Verify,
}

impl Cli {
    /// Parses CLI arguments from the command line.
    #[must_use]
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Parses CLI arguments from an iterator (useful for testing).
    pub fn parse_from_iter<I, T>(iter: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        Self::parse_from(iter)
    }

    /// Returns true if this is the init command.
    #[must_use]
    pub const fn is_init(&self) -> bool {
        matches!(self.command, Command::Init { .. })
    }
}

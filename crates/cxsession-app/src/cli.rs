use std::path::PathBuf;
use std::str::FromStr;

use clap::{Parser, Subcommand};
use cxsession_api::EntityOverrideMode;

/// cxsession: manage Dialogflow CX session entity types.
#[derive(Parser, Debug)]
#[command(name = "cxsession", version, about)]
pub struct Args {
    /// Config file path override.
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Log level override (debug, info, warn, error).
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Build a session entity type and print it; optionally create it.
    Build {
        /// projects/<P>/locations/<L>/agents/<A>/sessions/<S>
        #[arg(long)]
        session: String,

        /// Agent entity type: projects/<P>/locations/<L>/agents/<A>/entityTypes/<T>
        #[arg(long)]
        entity_type: String,

        /// `value=synonym,synonym`; repeat for each entity, order is kept.
        #[arg(long = "entity", required = true)]
        entities: Vec<EntityArg>,

        /// Override or Supplement.
        #[arg(long, default_value = "Override")]
        mode: EntityOverrideMode,

        #[command(flatten)]
        environment: EnvironmentArg,

        /// Send the built session entity type to the API.
        #[arg(long)]
        create: bool,
    },

    /// List every session entity type active in a session.
    List {
        #[arg(long)]
        session: String,

        #[command(flatten)]
        environment: EnvironmentArg,
    },

    /// Fetch one session entity type.
    Get {
        /// .../sessions/<S>/entityTypes/<T>
        #[arg(long)]
        name: String,

        #[command(flatten)]
        environment: EnvironmentArg,
    },

    /// Create a session entity type from a JSON file (`-` for stdin).
    Create {
        #[arg(long)]
        session: String,

        #[arg(long)]
        file: PathBuf,
    },

    /// Delete one session entity type.
    Delete {
        #[arg(long)]
        name: String,

        #[command(flatten)]
        environment: EnvironmentArg,
    },

    /// Print a fresh session path under an agent.
    NewSession {
        /// projects/<P>/locations/<L>/agents/<A>; falls back to the config default.
        #[arg(long)]
        agent: Option<String>,

        #[command(flatten)]
        environment: EnvironmentArg,
    },

    /// Print the loaded config as JSON; the access token is never shown.
    ConfigShow,
}

#[derive(clap::Args, Debug, Clone, Default)]
pub struct EnvironmentArg {
    /// projects/<P>/locations/<L>/agents/<A>/environments/<E>.
    /// Falls back to the config default; unset means draft.
    #[arg(long)]
    pub environment: Option<String>,

    /// Ignore the configured default environment and use draft.
    #[arg(long, conflicts_with = "environment")]
    pub draft: bool,
}

/// One `value=synonym,synonym` entity argument.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntityArg {
    pub value: String,
    pub synonyms: Vec<String>,
}

impl FromStr for EntityArg {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (value, synonyms) = s
            .split_once('=')
            .ok_or_else(|| format!("expected value=synonym,synonym, got {s:?}"))?;
        let value = value.trim();
        if value.is_empty() {
            return Err(format!("entity value is empty in {s:?}"));
        }
        Ok(Self {
            value: value.to_string(),
            synonyms: synonyms
                .split(',')
                .map(str::trim)
                .filter(|syn| !syn.is_empty())
                .map(String::from)
                .collect(),
        })
    }
}

pub fn parse() -> Args {
    Args::parse()
}

//! Subcommand dispatch.

use std::io::Read;
use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

use cxsession_api::resource::normalize_session_id;
use cxsession_api::{EntityOverrideMode, RestClient, RestConfig, SessionEntityType, SessionEntityTypes};
use cxsession_common::{CxError, Result};
use cxsession_config::CxConfig;
use serde::Serialize;
use tracing::{debug, info};

use crate::cli::{Command, EntityArg, EnvironmentArg};

pub async fn run(command: Command, config: &CxConfig) -> Result<()> {
    match command {
        Command::Build {
            session,
            entity_type,
            entities,
            mode,
            environment,
            create,
        } => {
            let environment = resolve_environment(&environment, config);
            let built = build(&session, &entity_type, entities, environment.as_deref(), mode)?;

            if create {
                let parent = normalize_session_id(&session, environment.as_deref())?;
                let created = connect(config)?
                    .create_session_entity_type(&parent, built)
                    .await?;
                info!(name = %created.name, "created session entity type");
                print_json(&created)
            } else {
                print_json(&built)
            }
        }

        Command::List {
            session,
            environment,
        } => {
            let environment = resolve_environment(&environment, config);
            let all = connect(config)?
                .list_session_entity_types(&session, environment.as_deref())
                .await?;
            print_json(&all)
        }

        Command::Get { name, environment } => {
            let environment = resolve_environment(&environment, config);
            let found = connect(config)?
                .get_session_entity_type(&name, environment.as_deref())
                .await?;
            print_json(&found)
        }

        Command::Create { session, file } => {
            let payload = read_payload(&file)?;
            let created = connect(config)?
                .create_session_entity_type(&session, payload)
                .await?;
            info!(name = %created.name, "created session entity type");
            print_json(&created)
        }

        Command::Delete { name, environment } => {
            let environment = resolve_environment(&environment, config);
            connect(config)?
                .delete_session_entity_type(&name, environment.as_deref())
                .await?;
            info!(%name, "deleted session entity type");
            Ok(())
        }

        Command::NewSession { agent, environment } => {
            let environment = resolve_environment(&environment, config);
            println!("{}", new_session(agent.as_deref(), environment.as_deref(), config)?);
            Ok(())
        }

        Command::ConfigShow => {
            println!("{}", cxsession_config::config_to_json(config));
            Ok(())
        }
    }
}

/// `--draft` wins, then `--environment`, then the configured default.
pub(crate) fn resolve_environment(arg: &EnvironmentArg, config: &CxConfig) -> Option<String> {
    if arg.draft {
        return None;
    }
    arg.environment
        .clone()
        .or_else(|| config.defaults.environment_id.clone())
}

pub(crate) fn build(
    session: &str,
    entity_type: &str,
    entities: Vec<EntityArg>,
    environment: Option<&str>,
    mode: EntityOverrideMode,
) -> Result<SessionEntityType> {
    let entities = entities.into_iter().map(|e| (e.value, e.synonyms));
    Ok(SessionEntityTypes::build_session_entity_type(
        session,
        entity_type,
        entities,
        environment,
        mode,
    )?)
}

pub(crate) fn new_session(
    agent: Option<&str>,
    environment: Option<&str>,
    config: &CxConfig,
) -> Result<String> {
    let agent = agent
        .or(config.defaults.agent_id.as_deref())
        .ok_or_else(|| CxError::Other("no agent given and defaults.agent_id is unset".into()))?;
    Ok(SessionEntityTypes::new_session_id(agent, environment)?)
}

/// Wire the REST client up from config. Credentials are resolved here, once.
fn connect(config: &CxConfig) -> Result<SessionEntityTypes> {
    let token = config.credentials.resolve_token()?;

    let mut rest = RestConfig::new(token)
        .with_timeout(Duration::from_secs(config.endpoint.timeout_secs.into()))
        .with_connect_timeout(Duration::from_secs(
            config.endpoint.connect_timeout_secs.into(),
        ));
    if let Some(ref endpoint) = config.endpoint.api_endpoint {
        rest = rest.with_api_endpoint(endpoint.clone());
    }
    debug!(config = ?rest, "connecting");

    Ok(SessionEntityTypes::new(Arc::new(RestClient::new(rest)?))
        .with_page_size(config.defaults.page_size))
}

/// Read a session entity type JSON payload from a file, or stdin for `-`.
fn read_payload(path: &Path) -> Result<SessionEntityType> {
    let content = if path == Path::new("-") {
        let mut buf = String::new();
        std::io::stdin().read_to_string(&mut buf)?;
        buf
    } else {
        std::fs::read_to_string(path)?
    };
    Ok(serde_json::from_str(&content)?)
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

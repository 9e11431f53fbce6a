//! Typed resource paths and the `key/value/key/value...` parser behind them.

use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use cxsession_common::SessionKey;
use regex::Regex;

use crate::ApiError;

/// A non-empty path segment with no whitespace or control characters.
static SEGMENT_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[^\s\p{Cc}]+$").unwrap());

type Pairs<'a> = Vec<(&'a str, &'a str)>;

fn malformed(kind: &'static str, value: &str) -> ApiError {
    ApiError::MalformedIdentifier {
        kind,
        value: value.to_string(),
    }
}

/// Split a path into `(collection, segment)` pairs.
///
/// Fails on an odd segment count, empty segments, or segment values that
/// contain whitespace or control characters. Collection names are checked by the
/// caller against its own schema.
fn split_pairs<'a>(kind: &'static str, value: &'a str) -> Result<Pairs<'a>, ApiError> {
    let parts: Vec<&str> = value.split('/').collect();
    if parts.len() % 2 != 0 {
        return Err(malformed(kind, value));
    }

    parts
        .chunks_exact(2)
        .map(|pair| {
            let (key, segment) = (pair[0], pair[1]);
            if key.is_empty() || !SEGMENT_RE.is_match(segment) {
                Err(malformed(kind, value))
            } else {
                Ok((key, segment))
            }
        })
        .collect()
}

/// `projects/<P>/locations/<L>/agents/<A>`
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AgentPath {
    pub project: String,
    pub location: String,
    pub agent: String,
}

impl AgentPath {
    pub const KIND: &'static str = "agent";

    pub fn new(
        project: impl Into<String>,
        location: impl Into<String>,
        agent: impl Into<String>,
    ) -> Self {
        Self {
            project: project.into(),
            location: location.into(),
            agent: agent.into(),
        }
    }

    /// A draft-environment session under this agent.
    pub fn session(&self, session: impl Into<String>) -> SessionPath {
        SessionPath {
            agent: self.clone(),
            environment: None,
            session: session.into(),
        }
    }

    /// A draft-environment session with a freshly minted key.
    pub fn new_session(&self) -> SessionPath {
        self.session(SessionKey::new().as_str())
    }

    pub fn environment(&self, environment: impl Into<String>) -> EnvironmentPath {
        EnvironmentPath {
            agent: self.clone(),
            environment: environment.into(),
        }
    }

    fn from_segments(project: &str, location: &str, agent: &str) -> Self {
        Self::new(project, location, agent)
    }
}

impl FromStr for AgentPath {
    type Err = ApiError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match split_pairs(Self::KIND, s)?.as_slice() {
            [("projects", p), ("locations", l), ("agents", a)] => {
                Ok(Self::from_segments(p, l, a))
            }
            _ => Err(malformed(Self::KIND, s)),
        }
    }
}

impl fmt::Display for AgentPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "projects/{}/locations/{}/agents/{}",
            self.project, self.location, self.agent
        )
    }
}

/// `projects/<P>/locations/<L>/agents/<A>/environments/<E>`
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EnvironmentPath {
    pub agent: AgentPath,
    pub environment: String,
}

impl EnvironmentPath {
    pub const KIND: &'static str = "environment";
}

impl FromStr for EnvironmentPath {
    type Err = ApiError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match split_pairs(Self::KIND, s)?.as_slice() {
            [("projects", p), ("locations", l), ("agents", a), ("environments", e)] => Ok(Self {
                agent: AgentPath::from_segments(p, l, a),
                environment: e.to_string(),
            }),
            _ => Err(malformed(Self::KIND, s)),
        }
    }
}

impl fmt::Display for EnvironmentPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/environments/{}", self.agent, self.environment)
    }
}

/// An agent-level custom entity type:
/// `projects/<P>/locations/<L>/agents/<A>/entityTypes/<T>`
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EntityTypePath {
    pub agent: AgentPath,
    pub entity: String,
}

impl EntityTypePath {
    pub const KIND: &'static str = "entity";
}

impl FromStr for EntityTypePath {
    type Err = ApiError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match split_pairs(Self::KIND, s)?.as_slice() {
            [("projects", p), ("locations", l), ("agents", a), ("entityTypes", t)] => Ok(Self {
                agent: AgentPath::from_segments(p, l, a),
                entity: t.to_string(),
            }),
            _ => Err(malformed(Self::KIND, s)),
        }
    }
}

impl fmt::Display for EntityTypePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/entityTypes/{}", self.agent, self.entity)
    }
}

/// A session, optionally bound to an environment.
///
/// `projects/<P>/locations/<L>/agents/<A>[/environments/<E>]/sessions/<S>`
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SessionPath {
    pub agent: AgentPath,
    /// `None` is the implicit draft environment.
    pub environment: Option<String>,
    pub session: String,
}

impl SessionPath {
    pub const KIND: &'static str = "session";

    /// The session entity type `entity` within this session.
    pub fn entity_type(&self, entity: impl Into<String>) -> SessionEntityTypePath {
        SessionEntityTypePath {
            session: self.clone(),
            entity: entity.into(),
        }
    }
}

/// Shared by both session-shaped schemas, with or without an environment.
fn session_from_pairs(pairs: &[(&str, &str)]) -> Option<SessionPath> {
    match pairs {
        [("projects", p), ("locations", l), ("agents", a), ("sessions", id)] => Some(SessionPath {
            agent: AgentPath::from_segments(p, l, a),
            environment: None,
            session: id.to_string(),
        }),
        [("projects", p), ("locations", l), ("agents", a), ("environments", e), ("sessions", id)] => {
            Some(SessionPath {
                agent: AgentPath::from_segments(p, l, a),
                environment: Some(e.to_string()),
                session: id.to_string(),
            })
        }
        _ => None,
    }
}

impl FromStr for SessionPath {
    type Err = ApiError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        session_from_pairs(&split_pairs(Self::KIND, s)?).ok_or_else(|| malformed(Self::KIND, s))
    }
}

impl fmt::Display for SessionPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.agent)?;
        if let Some(ref env) = self.environment {
            write!(f, "/environments/{env}")?;
        }
        write!(f, "/sessions/{}", self.session)
    }
}

/// A session-scoped entity type:
/// `projects/<P>/locations/<L>/agents/<A>[/environments/<E>]/sessions/<S>/entityTypes/<T>`
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SessionEntityTypePath {
    pub session: SessionPath,
    pub entity: String,
}

impl SessionEntityTypePath {
    pub const KIND: &'static str = "session_entity_type";
}

impl FromStr for SessionEntityTypePath {
    type Err = ApiError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let pairs = split_pairs(Self::KIND, s)?;
        match pairs.split_last() {
            Some((("entityTypes", entity), rest)) => {
                let session = session_from_pairs(rest).ok_or_else(|| malformed(Self::KIND, s))?;
                Ok(Self {
                    session,
                    entity: entity.to_string(),
                })
            }
            _ => Err(malformed(Self::KIND, s)),
        }
    }
}

impl fmt::Display for SessionEntityTypePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/entityTypes/{}", self.session, self.entity)
    }
}

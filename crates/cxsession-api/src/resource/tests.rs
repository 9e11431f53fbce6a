//! Tests for resource path parsing, merging and endpoint derivation.

use super::*;
use crate::ApiError;

const SESSION: &str = "projects/p1/locations/us-central1/agents/a1/sessions/s1";
const ENV: &str = "projects/p2/locations/europe-west1/agents/a2/environments/prod";
const SET: &str = "projects/p1/locations/us-central1/agents/a1/sessions/s1/entityTypes/food";

fn is_malformed(err: &ApiError, expected_kind: &str) -> bool {
    matches!(err, ApiError::MalformedIdentifier { kind, .. } if *kind == expected_kind)
}

#[test]
fn parses_draft_session() {
    let session: SessionPath = SESSION.parse().unwrap();
    assert_eq!(session.agent.project, "p1");
    assert_eq!(session.agent.location, "us-central1");
    assert_eq!(session.agent.agent, "a1");
    assert_eq!(session.environment, None);
    assert_eq!(session.session, "s1");
    assert_eq!(session.to_string(), SESSION);
}

#[test]
fn parses_environment_scoped_session() {
    let id = "projects/p/locations/global/agents/a/environments/e/sessions/s";
    let session: SessionPath = id.parse().unwrap();
    assert_eq!(session.environment.as_deref(), Some("e"));
    assert_eq!(session.to_string(), id);
}

#[test]
fn parses_session_entity_type() {
    let set: SessionEntityTypePath = SET.parse().unwrap();
    assert_eq!(set.session.session, "s1");
    assert_eq!(set.entity, "food");
    assert_eq!(set.to_string(), SET);
}

#[test]
fn parses_agent_entity_type_and_environment() {
    let entity: EntityTypePath = "projects/p/locations/global/agents/a/entityTypes/veg"
        .parse()
        .unwrap();
    assert_eq!(entity.entity, "veg");

    let env: EnvironmentPath = ENV.parse().unwrap();
    assert_eq!(env.environment, "prod");
    assert_eq!(env.agent.project, "p2");
    assert_eq!(env.to_string(), ENV);
}

#[test]
fn rejects_wrong_segment_count() {
    let err = "projects/p1/locations/us-central1/agents/a1/sessions"
        .parse::<SessionPath>()
        .unwrap_err();
    assert!(is_malformed(&err, "session"));

    let err = "projects/p1/locations/us-central1/agents/a1"
        .parse::<SessionPath>()
        .unwrap_err();
    assert!(is_malformed(&err, "session"));
}

#[test]
fn rejects_wrong_collection_names() {
    let err = "projects/p/regions/global/agents/a/sessions/s"
        .parse::<SessionPath>()
        .unwrap_err();
    assert!(is_malformed(&err, "session"));

    let err = "projects/p/locations/global/agents/a/entityTypes/e"
        .parse::<SessionPath>()
        .unwrap_err();
    assert!(is_malformed(&err, "session"));
}

#[test]
fn rejects_empty_and_invalid_segments() {
    for bad in [
        "",
        "projects//locations/global/agents/a/sessions/s",
        "projects/p/locations/global/agents/a/sessions/",
        "projects/p/locations/global/agents/a/sessions/s/",
        "/projects/p/locations/global/agents/a/sessions/s",
        "projects/p q/locations/global/agents/a/sessions/s",
    ] {
        let err = bad.parse::<SessionPath>().unwrap_err();
        assert!(is_malformed(&err, "session"), "accepted {bad:?}");
    }
}

#[test]
fn accepts_any_printable_segment() {
    for session in ["user@example", "sesión", "a:b", "s+1"] {
        let id = format!("projects/p/locations/global/agents/a/sessions/{session}");
        let parsed: SessionPath = id.parse().unwrap();
        assert_eq!(parsed.session, session);
        assert_eq!(normalize_session_id(&id, None).unwrap(), id);
    }

    let set = "projects/p/locations/global/agents/a/sessions/user@example/entityTypes/größe";
    assert_eq!(normalize_session_entity_type_id(set, None).unwrap(), set);
}

#[test]
fn rejects_control_characters() {
    let err = "projects/p/locations/global/agents/a/sessions/s\t1"
        .parse::<SessionPath>()
        .unwrap_err();
    assert!(is_malformed(&err, "session"));
}

#[test]
fn malformed_error_carries_input() {
    let err = "nope".parse::<EnvironmentPath>().unwrap_err();
    assert_eq!(
        err,
        ApiError::MalformedIdentifier {
            kind: "environment",
            value: "nope".into()
        }
    );
}

#[test]
fn session_entity_type_requires_trailing_entity() {
    let err = SESSION.parse::<SessionEntityTypePath>().unwrap_err();
    assert!(is_malformed(&err, "session_entity_type"));

    let err = format!("{SESSION}/intents/i")
        .parse::<SessionEntityTypePath>()
        .unwrap_err();
    assert!(is_malformed(&err, "session_entity_type"));
}

#[test]
fn session_merge_takes_only_environment_segment_from_env() {
    let sessions = [
        SESSION,
        "projects/x/locations/global/agents/y/sessions/z-1",
        "projects/x/locations/global/agents/y/environments/old/sessions/z",
    ];
    let envs = [
        ENV,
        "projects/q/locations/global/agents/r/environments/staging",
    ];

    for s in sessions {
        for e in envs {
            let session: SessionPath = s.parse().unwrap();
            let env: EnvironmentPath = e.parse().unwrap();

            let merged = merge_session_id_and_env_id(&session, &env).to_string();
            let reparsed: SessionPath = merged.parse().unwrap();

            assert_eq!(reparsed.agent, session.agent);
            assert_eq!(reparsed.environment.as_deref(), Some(env.environment.as_str()));
            assert_eq!(reparsed.session, session.session);
        }
    }
}

#[test]
fn session_entity_type_merge_takes_agent_from_env() {
    let set: SessionEntityTypePath = SET.parse().unwrap();
    let env: EnvironmentPath = ENV.parse().unwrap();

    let merged = merge_session_entity_id_and_env_id(&set, &env);
    assert_eq!(
        merged.to_string(),
        "projects/p2/locations/europe-west1/agents/a2/environments/prod/sessions/s1/entityTypes/food"
    );
}

#[test]
fn normalize_without_environment_returns_input() {
    assert_eq!(normalize_session_id(SESSION, None).unwrap(), SESSION);
    assert_eq!(normalize_session_id(SESSION, Some("")).unwrap(), SESSION);
    assert_eq!(normalize_session_entity_type_id(SET, None).unwrap(), SET);
}

#[test]
fn normalize_with_environment_splices_segment() {
    let env = "projects/p1/locations/us-central1/agents/a1/environments/prod";
    assert_eq!(
        normalize_session_id(SESSION, Some(env)).unwrap(),
        "projects/p1/locations/us-central1/agents/a1/environments/prod/sessions/s1"
    );
    assert_eq!(
        normalize_session_entity_type_id(SET, Some(env)).unwrap(),
        "projects/p1/locations/us-central1/agents/a1/environments/prod/sessions/s1/entityTypes/food"
    );
}

#[test]
fn normalize_is_idempotent() {
    let first = normalize_session_id(SESSION, Some(ENV)).unwrap();
    let second = normalize_session_id(SESSION, Some(ENV)).unwrap();
    assert_eq!(first, second);

    let first = normalize_session_entity_type_id(SET, Some(ENV)).unwrap();
    let second = normalize_session_entity_type_id(SET, Some(ENV)).unwrap();
    assert_eq!(first, second);
}

#[test]
fn normalize_rejects_malformed_inputs() {
    let err = normalize_session_id("projects/p/sessions/s", None).unwrap_err();
    assert!(is_malformed(&err, "session"));

    let err = normalize_session_id(SESSION, Some("projects/p/environments/e")).unwrap_err();
    assert!(is_malformed(&err, "environment"));

    let err = normalize_session_entity_type_id(SESSION, Some(ENV)).unwrap_err();
    assert!(is_malformed(&err, "session_entity_type"));
}

#[test]
fn agent_builds_child_paths() {
    let agent = AgentPath::new("p", "global", "a");
    assert_eq!(
        agent.session("s").entity_type("t").to_string(),
        "projects/p/locations/global/agents/a/sessions/s/entityTypes/t"
    );
    assert_eq!(
        agent.environment("prod").to_string(),
        "projects/p/locations/global/agents/a/environments/prod"
    );
}

#[test]
fn api_host_follows_location() {
    assert_eq!(api_host_for_location("global"), "dialogflow.googleapis.com");
    assert_eq!(
        api_host_for_location("us-central1"),
        "us-central1-dialogflow.googleapis.com"
    );
}

#[test]
fn location_of_finds_segment() {
    assert_eq!(location_of(SESSION), Some("us-central1"));
    assert_eq!(location_of(ENV), Some("europe-west1"));
    assert_eq!(location_of("projects/p"), None);
    assert_eq!(location_of("projects/p/locations/"), None);
}

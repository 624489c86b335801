use super::*;
use std::sync::Mutex;

static ENV_LOCK: Mutex<()> = Mutex::new(());

/// # Safety
/// Callers hold `ENV_LOCK` so no other test touches the environment concurrently.
unsafe fn clear_agent_env() {
    unsafe {
        std::env::remove_var("AGENT_API_URL");
        std::env::remove_var("AGENT_API_KEY_ENV");
        std::env::remove_var("AGENT_REQUEST_TIMEOUT_SECS");
        std::env::remove_var("AGENT_CONNECT_TIMEOUT_SECS");
        std::env::remove_var("TEST_AGENT_KEY");
        for kind in AgentKind::ALL {
            std::env::remove_var(kind.id_env_var());
        }
    }
}

#[test]
fn from_env_missing_url_is_not_configured() {
    let _guard = ENV_LOCK.lock().unwrap_or_else(std::sync::PoisonError::into_inner);
    unsafe { clear_agent_env() };

    let err = AgentConfig::from_env().unwrap_err();
    assert!(matches!(err, AgentError::NotConfigured(_)));
}

#[test]
fn from_env_defaults() {
    let _guard = ENV_LOCK.lock().unwrap_or_else(std::sync::PoisonError::into_inner);
    unsafe {
        clear_agent_env();
        std::env::set_var("AGENT_API_URL", " https://agents.example.test/v3/chat ");
    }

    let cfg = AgentConfig::from_env().unwrap();
    assert_eq!(cfg.api_url, "https://agents.example.test/v3/chat");
    assert_eq!(cfg.api_key, None);
    assert_eq!(
        cfg.timeouts,
        AgentTimeouts {
            request_secs: DEFAULT_AGENT_REQUEST_TIMEOUT_SECS,
            connect_secs: DEFAULT_AGENT_CONNECT_TIMEOUT_SECS
        }
    );
    for kind in AgentKind::ALL {
        assert_eq!(cfg.agent_id(kind), kind.default_id());
    }

    unsafe { clear_agent_env() };
}

#[test]
fn from_env_reads_key_ids_and_timeouts() {
    let _guard = ENV_LOCK.lock().unwrap_or_else(std::sync::PoisonError::into_inner);
    unsafe {
        clear_agent_env();
        std::env::set_var("AGENT_API_URL", "https://agents.example.test");
        std::env::set_var("AGENT_API_KEY_ENV", "TEST_AGENT_KEY");
        std::env::set_var("TEST_AGENT_KEY", "secret");
        std::env::set_var("AGENT_ID_RISK_SCORING", "custom-risk");
        std::env::set_var("AGENT_REQUEST_TIMEOUT_SECS", "15");
        std::env::set_var("AGENT_CONNECT_TIMEOUT_SECS", "not-a-number");
    }

    let cfg = AgentConfig::from_env().unwrap();
    assert_eq!(cfg.api_key.as_deref(), Some("secret"));
    assert_eq!(cfg.agent_id(AgentKind::RiskScoring), "custom-risk");
    assert_eq!(cfg.agent_id(AgentKind::CaseManager), AgentKind::CaseManager.default_id());
    assert_eq!(cfg.timeouts, AgentTimeouts { request_secs: 15, connect_secs: DEFAULT_AGENT_CONNECT_TIMEOUT_SECS });

    unsafe { clear_agent_env() };
}

#[test]
fn from_env_missing_named_key_errors() {
    let _guard = ENV_LOCK.lock().unwrap_or_else(std::sync::PoisonError::into_inner);
    unsafe {
        clear_agent_env();
        std::env::set_var("AGENT_API_URL", "https://agents.example.test");
        std::env::set_var("AGENT_API_KEY_ENV", "TEST_AGENT_KEY");
    }

    let err = AgentConfig::from_env().unwrap_err().to_string();
    assert!(err.contains("TEST_AGENT_KEY"));

    unsafe { clear_agent_env() };
}

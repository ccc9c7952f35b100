use super::*;

/// # Safety
/// Callers must hold `ENV_LOCK` so parallel tests do not race on env vars.
unsafe fn clear_server_env() {
    unsafe {
        std::env::remove_var("PORT");
        std::env::remove_var("AUTH_BACKEND_URL");
        std::env::remove_var("AUTH_REQUEST_TIMEOUT_SECS");
        std::env::remove_var("AUTH_CONNECT_TIMEOUT_SECS");
    }
}

static ENV_LOCK: std::sync::Mutex<()> = std::sync::Mutex::new(());

#[test]
fn from_env_defaults() {
    let _guard = ENV_LOCK.lock().unwrap_or_else(std::sync::PoisonError::into_inner);
    unsafe { clear_server_env() };

    let cfg = ServerConfig::from_env().unwrap();
    assert_eq!(cfg.port, DEFAULT_PORT);
    assert_eq!(cfg.auth_backend_url, None);
    assert_eq!(
        cfg.auth_timeouts,
        AuthTimeouts {
            request_secs: DEFAULT_AUTH_REQUEST_TIMEOUT_SECS,
            connect_secs: DEFAULT_AUTH_CONNECT_TIMEOUT_SECS
        }
    );
}

#[test]
fn from_env_parses_overrides() {
    let _guard = ENV_LOCK.lock().unwrap_or_else(std::sync::PoisonError::into_inner);
    unsafe {
        clear_server_env();
        std::env::set_var("PORT", "8080");
        std::env::set_var("AUTH_BACKEND_URL", "https://auth.example.test/login/");
        std::env::set_var("AUTH_REQUEST_TIMEOUT_SECS", "30");
        std::env::set_var("AUTH_CONNECT_TIMEOUT_SECS", "2");
    }

    let cfg = ServerConfig::from_env().unwrap();
    assert_eq!(cfg.port, 8080);
    assert_eq!(cfg.auth_backend_url.as_deref(), Some("https://auth.example.test/login"));
    assert_eq!(cfg.auth_timeouts, AuthTimeouts { request_secs: 30, connect_secs: 2 });

    unsafe { clear_server_env() };
}

#[test]
fn from_env_rejects_invalid_port() {
    let _guard = ENV_LOCK.lock().unwrap_or_else(std::sync::PoisonError::into_inner);
    unsafe {
        clear_server_env();
        std::env::set_var("PORT", "not-a-port");
    }

    let err = ServerConfig::from_env().unwrap_err();
    assert!(matches!(err, ConfigError::InvalidPort(ref v) if v == "not-a-port"));

    unsafe { clear_server_env() };
}

#[test]
fn from_env_treats_blank_backend_url_as_unset() {
    let _guard = ENV_LOCK.lock().unwrap_or_else(std::sync::PoisonError::into_inner);
    unsafe {
        clear_server_env();
        std::env::set_var("AUTH_BACKEND_URL", "   ");
    }

    let cfg = ServerConfig::from_env().unwrap();
    assert_eq!(cfg.auth_backend_url, None);

    unsafe { clear_server_env() };
}

#[test]
fn from_env_falls_back_on_bad_timeouts() {
    let _guard = ENV_LOCK.lock().unwrap_or_else(std::sync::PoisonError::into_inner);
    unsafe {
        clear_server_env();
        std::env::set_var("AUTH_REQUEST_TIMEOUT_SECS", "soon");
        std::env::set_var("AUTH_CONNECT_TIMEOUT_SECS", "-1");
    }

    let cfg = ServerConfig::from_env().unwrap();
    assert_eq!(cfg.auth_timeouts.request_secs, DEFAULT_AUTH_REQUEST_TIMEOUT_SECS);
    assert_eq!(cfg.auth_timeouts.connect_secs, DEFAULT_AUTH_CONNECT_TIMEOUT_SECS);

    unsafe { clear_server_env() };
}

#[test]
fn parse_port_trims_whitespace() {
    assert_eq!(parse_port(Some(" 4000 ")).unwrap(), 4000);
}

#[test]
fn parse_port_rejects_out_of_range() {
    assert!(parse_port(Some("70000")).is_err());
}

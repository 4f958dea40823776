use std::sync::{Mutex, MutexGuard, PoisonError};

use super::*;

static ENV_LOCK: Mutex<()> = Mutex::new(());

/// Serializes tests that mutate the shared server env vars.
fn env_lock() -> MutexGuard<'static, ()> {
    ENV_LOCK.lock().unwrap_or_else(PoisonError::into_inner)
}

/// # Safety
/// Callers must hold [`env_lock`].
unsafe fn clear_server_env() {
    unsafe {
        std::env::remove_var("DATABASE_URL");
        std::env::remove_var("PORT");
        std::env::remove_var("DB_MAX_CONNECTIONS");
        std::env::remove_var("SESSION_TTL_HOURS");
        std::env::remove_var("COOKIE_SECURE");
        std::env::remove_var("ADMIN_EMAIL");
        std::env::remove_var("ADMIN_PASSWORD");
    }
}

// =============================================================================
// parse_bool
// =============================================================================

#[test]
fn parse_bool_true_variants() {
    for val in ["1", "true", "yes", "on", "TRUE", "On", "  yes  "] {
        assert_eq!(parse_bool(val), Some(true), "expected true for {val:?}");
    }
}

#[test]
fn parse_bool_false_variants() {
    for val in ["0", "false", "no", "off", "NO"] {
        assert_eq!(parse_bool(val), Some(false), "expected false for {val:?}");
    }
}

#[test]
fn parse_bool_rejects_garbage() {
    assert_eq!(parse_bool("maybe"), None);
    assert_eq!(parse_bool(""), None);
}

// =============================================================================
// ServerConfig::from_env
// =============================================================================

#[test]
fn from_env_requires_database_url() {
    let _guard = env_lock();
    unsafe { clear_server_env() };
    assert_eq!(ServerConfig::from_env(), Err(ConfigError::Missing("DATABASE_URL")));
}

#[test]
fn from_env_applies_defaults() {
    let _guard = env_lock();
    unsafe {
        clear_server_env();
        std::env::set_var("DATABASE_URL", "postgres://localhost/stuff");
    }

    let cfg = ServerConfig::from_env().unwrap();
    assert_eq!(cfg.database_url, "postgres://localhost/stuff");
    assert_eq!(cfg.port, DEFAULT_PORT);
    assert_eq!(cfg.db_max_connections, DEFAULT_DB_MAX_CONNECTIONS);
    assert_eq!(cfg.session_ttl_hours, DEFAULT_SESSION_TTL_HOURS);
    assert!(!cfg.cookie_secure);
    assert!(cfg.admin.is_none());

    unsafe { clear_server_env() };
}

#[test]
fn from_env_parses_overrides() {
    let _guard = env_lock();
    unsafe {
        clear_server_env();
        std::env::set_var("DATABASE_URL", "postgres://db/stuff");
        std::env::set_var("PORT", "8080");
        std::env::set_var("DB_MAX_CONNECTIONS", "12");
        std::env::set_var("SESSION_TTL_HOURS", "2");
        std::env::set_var("COOKIE_SECURE", "yes");
        std::env::set_var("ADMIN_EMAIL", "admin@foo.com");
        std::env::set_var("ADMIN_PASSWORD", "changeme");
    }

    let cfg = ServerConfig::from_env().unwrap();
    assert_eq!(cfg.port, 8080);
    assert_eq!(cfg.db_max_connections, 12);
    assert_eq!(cfg.session_ttl_hours, 2);
    assert!(cfg.cookie_secure);
    let admin = cfg.admin.unwrap();
    assert_eq!(admin.email, "admin@foo.com");
    assert_eq!(admin.password, "changeme");

    unsafe { clear_server_env() };
}

#[test]
fn from_env_rejects_bad_port() {
    let _guard = env_lock();
    unsafe {
        clear_server_env();
        std::env::set_var("DATABASE_URL", "postgres://db/stuff");
        std::env::set_var("PORT", "eighty");
    }

    assert_eq!(
        ServerConfig::from_env(),
        Err(ConfigError::Invalid { key: "PORT", value: "eighty".into() })
    );

    unsafe { clear_server_env() };
}

#[test]
fn from_env_rejects_zero_session_ttl() {
    let _guard = env_lock();
    unsafe {
        clear_server_env();
        std::env::set_var("DATABASE_URL", "postgres://db/stuff");
        std::env::set_var("SESSION_TTL_HOURS", "0");
    }

    assert!(matches!(
        ServerConfig::from_env(),
        Err(ConfigError::Invalid { key: "SESSION_TTL_HOURS", .. })
    ));

    unsafe { clear_server_env() };
}

#[test]
fn from_env_rejects_session_ttl_past_one_year() {
    let _guard = env_lock();
    unsafe {
        clear_server_env();
        std::env::set_var("DATABASE_URL", "postgres://db/stuff");
        std::env::set_var("SESSION_TTL_HOURS", "4294967295");
    }

    assert_eq!(
        ServerConfig::from_env(),
        Err(ConfigError::Invalid { key: "SESSION_TTL_HOURS", value: "4294967295".into() })
    );

    unsafe {
        std::env::set_var("SESSION_TTL_HOURS", &MAX_SESSION_TTL_HOURS.to_string());
    }
    assert_eq!(ServerConfig::from_env().unwrap().session_ttl_hours, MAX_SESSION_TTL_HOURS);

    unsafe { clear_server_env() };
}

#[test]
fn from_env_requires_admin_pair() {
    let _guard = env_lock();
    unsafe {
        clear_server_env();
        std::env::set_var("DATABASE_URL", "postgres://db/stuff");
        std::env::set_var("ADMIN_EMAIL", "admin@foo.com");
    }

    assert_eq!(ServerConfig::from_env(), Err(ConfigError::Missing("ADMIN_PASSWORD")));

    unsafe { clear_server_env() };
}

#[test]
fn admin_bootstrap_debug_redacts_password() {
    let admin = AdminBootstrap { email: "admin@foo.com".into(), password: "hunter22".into() };
    let debug = format!("{admin:?}");
    assert!(debug.contains("admin@foo.com"));
    assert!(!debug.contains("hunter22"));
}

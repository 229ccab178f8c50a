use foodshare_portal::{
    AppConfig,
    config::{ConfigError, Env},
};
use serial_test::serial;
use std::{env, panic};

// --- Setup/Teardown Utilities ---

const CONFIG_VARS: [&str; 6] = [
    "APP_ENV",
    "SESSION_JWT_SECRET",
    "BIND_ADDRESS",
    "SESSION_COOKIE",
    "APP_TITLE",
    "ASSETS_DIR",
];

/// Utility to run a test function with a clean configuration environment
/// and restore the original variables afterward.
fn run_with_env<T, R>(test: T) -> R
where
    T: FnOnce() -> R + panic::UnwindSafe,
{
    let originals: Vec<(&str, Option<String>)> = CONFIG_VARS
        .iter()
        .map(|&var| (var, env::var(var).ok()))
        .collect();

    unsafe {
        for var in CONFIG_VARS {
            env::remove_var(var);
        }
    }

    let result = panic::catch_unwind(test);

    for (key, original_value) in originals.into_iter().rev() {
        unsafe {
            if let Some(val) = original_value {
                env::set_var(key, val);
            } else {
                env::remove_var(key);
            }
        }
    }

    match result {
        Ok(value) => value,
        Err(e) => panic::resume_unwind(e),
    }
}

// --- Tests ---

#[test]
#[serial]
fn test_app_config_production_fail_fast() {
    let result = run_with_env(|| {
        unsafe {
            env::set_var("APP_ENV", "production");
        }
        AppConfig::load()
    });

    assert_eq!(
        result.unwrap_err(),
        ConfigError::MissingVar("SESSION_JWT_SECRET")
    );
}

#[test]
#[serial]
fn test_app_config_production_with_secret() {
    let config = run_with_env(|| {
        unsafe {
            env::set_var("APP_ENV", "production");
            env::set_var("SESSION_JWT_SECRET", "prod-secret");
            env::set_var("BIND_ADDRESS", "127.0.0.1:8080");
        }
        AppConfig::load()
    })
    .unwrap();

    assert_eq!(config.env, Env::Production);
    assert_eq!(config.jwt_secret, "prod-secret");
    assert_eq!(config.bind_address, "127.0.0.1:8080");
}

#[test]
#[serial]
fn test_app_config_local_env_defaults() {
    let config = run_with_env(|| {
        unsafe {
            env::set_var("APP_ENV", "local");
        }
        AppConfig::load()
    })
    .unwrap();

    let defaults = AppConfig::default();
    assert_eq!(config.env, Env::Local);
    assert_eq!(config.jwt_secret, "super-secure-test-secret-value-local");
    assert_eq!(config.bind_address, defaults.bind_address);
    assert_eq!(config.session_cookie, "session");
    assert_eq!(config.app_title, "Food Donation Portal");
    assert_eq!(config.assets_dir, "dist/assets");
}

#[test]
#[serial]
fn test_app_config_unknown_env_is_local() {
    let config = run_with_env(|| {
        unsafe {
            env::set_var("APP_ENV", "staging");
            env::set_var("SESSION_COOKIE", "fdp_token");
            env::set_var("APP_TITLE", "Pantry");
        }
        AppConfig::load()
    })
    .unwrap();

    assert_eq!(config.env, Env::Local);
    assert_eq!(config.session_cookie, "fdp_token");
    assert_eq!(config.app_title, "Pantry");
}

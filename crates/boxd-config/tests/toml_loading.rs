//! Integration tests for TOML configuration loading.
//!
//! Uses figment::Jail for safe, sandboxed env var manipulation.

use figment::{
    Figment, Jail,
    providers::{Env, Format, Serialized, Toml},
};
use boxd_config::BoxdConfig;
use pretty_assertions::assert_eq;

#[test]
fn loads_turso_config_from_toml() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r#"
[turso]
url = "libsql://test.turso.io"
auth_token = "turso-token"
sync_interval_secs = 120
read_your_writes = false
local_replica_path = "./replica.db"
"#,
        )?;

        let config: BoxdConfig = Figment::from(Serialized::defaults(BoxdConfig::default()))
            .merge(Toml::file("config.toml"))
            .extract()?;

        assert_eq!(config.turso.url, "libsql://test.turso.io");
        assert_eq!(config.turso.auth_token, "turso-token");
        assert_eq!(config.turso.sync_interval_secs, 120);
        assert!(!config.turso.read_your_writes);
        assert_eq!(config.turso.local_replica_path, "./replica.db");
        assert!(config.turso.is_configured());
        assert!(config.turso.has_local_replica());
        Ok(())
    });
}

#[test]
fn loads_session_config_from_toml() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r#"
[session]
user_id = "user-abc123"
email = "alice@example.com"
"#,
        )?;

        let config: BoxdConfig = Figment::from(Serialized::defaults(BoxdConfig::default()))
            .merge(Toml::file("config.toml"))
            .extract()?;

        let user = config.session.current_user().expect("logged in");
        assert_eq!(user.user_id, "user-abc123");
        assert_eq!(user.email, "alice@example.com");
        Ok(())
    });
}

#[test]
fn partial_toml_keeps_defaults() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r#"
[general]
db_path = "/tmp/boxd-test.db"
"#,
        )?;

        let config: BoxdConfig = Figment::from(Serialized::defaults(BoxdConfig::default()))
            .merge(Toml::file("config.toml"))
            .extract()?;

        assert_eq!(config.general.db_path, "/tmp/boxd-test.db");
        assert_eq!(config.general.default_limit, 20);
        assert_eq!(config.turso.sync_interval_secs, 60);
        Ok(())
    });
}

#[test]
fn env_overrides_toml() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r#"
[turso]
url = "libsql://from-toml.turso.io"
"#,
        )?;
        jail.set_env("BOXD_TURSO__URL", "libsql://from-env.turso.io");

        let config: BoxdConfig = Figment::from(Serialized::defaults(BoxdConfig::default()))
            .merge(Toml::file("config.toml"))
            .merge(Env::prefixed("BOXD_").split("__"))
            .extract()?;

        assert_eq!(config.turso.url, "libsql://from-env.turso.io");
        Ok(())
    });
}

use boxd_config::BoxdConfig;
use boxd_db::service::BoxdService;

/// Shared state for command handlers: loaded config plus the store
/// service bound to the configured session identity.
pub struct AppContext {
    pub config: BoxdConfig,
    pub service: BoxdService,
}

impl AppContext {
    /// Open the store per config: a Turso embedded replica when the
    /// `[turso]` section is configured, a plain local file otherwise.
    pub async fn init(config: BoxdConfig) -> anyhow::Result<Self> {
        let identity = config.session.current_user();

        let service = if config.turso.is_configured() {
            let replica_path = if config.turso.has_local_replica() {
                config.turso.local_replica_path.as_str()
            } else {
                config.general.db_path.as_str()
            };
            BoxdService::new_synced(
                replica_path,
                &config.turso.url,
                &config.turso.auth_token,
                config.turso.sync_interval_secs,
                config.turso.read_your_writes,
                identity,
            )
            .await?
        } else {
            BoxdService::new_local(&config.general.db_path, identity).await?
        };

        Ok(Self { config, service })
    }

    /// Warn once when running without a session identity; read-only
    /// commands still work, mutations will fail with Unauthenticated.
    pub fn warn_unconfigured(&self) {
        if self.service.current_user().is_none() {
            tracing::warn!(
                "no [session] identity configured; set session.user_id and session.email \
                 (or BOXD_SESSION__USER_ID / BOXD_SESSION__EMAIL) to write"
            );
        }
    }
}

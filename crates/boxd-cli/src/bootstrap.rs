use boxd_config::BoxdConfig;

/// Load layered config, pulling in a `.env` file when one exists.
pub fn load_config() -> anyhow::Result<BoxdConfig> {
    BoxdConfig::load_with_dotenv().map_err(anyhow::Error::from)
}

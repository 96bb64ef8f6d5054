use confique::Config as _;
use std::sync::OnceLock;

#[derive(confique::Config)]
pub struct Config {
    #[cfg(test)]
    #[config(env = "PROVYSDB_CONTAINER_RAMDISKED", default = true)]
    pub container_ramdisked: bool,
    #[cfg(test)]
    #[config(env = "PROVYSDB_CONTAINER_LOGS", default = false)]
    pub container_logs: bool,
    /// Capacity of the shared normalized-statement cache.
    #[config(env = "PROVYSDB_STATEMENT_CACHE_CAPACITY", default = 1024)]
    pub statement_cache_capacity: u64,
}

pub fn config() -> &'static Config {
    static CONFIG: OnceLock<Config> = OnceLock::new();
    CONFIG.get_or_init(|| {
        Config::builder()
            .env()
            .load()
            .expect("Failed to load one or more value configuration from the current environment")
    })
}

use once_cell::sync::OnceCell;

static CONFIG: OnceCell<GlobalConfig> = OnceCell::new();
static DEFAULT_CONFIG: GlobalConfig = GlobalConfig { verbose: false };

pub fn init_global_config(config: GlobalConfig) {
    CONFIG.set(config).unwrap();
}

/// Falls back to the defaults when the binary has not initialized the config,
/// which is the case in unit tests.
pub fn global_config() -> &'static GlobalConfig {
    CONFIG.get().unwrap_or(&DEFAULT_CONFIG)
}

#[derive(Debug)]
pub struct GlobalConfig {
    pub verbose: bool,
}

use env_logger::Env;

const LOG_LEVEL_ENV_VAR: &str = "SCHEMA_GEN_LOG";
const DEFAULT_LOG_LEVEL: &str = "warn";

/// Route `log` records to stderr, filtered by `SCHEMA_GEN_LOG`.
pub fn init() {
    env_logger::Builder::from_env(Env::default().filter_or(LOG_LEVEL_ENV_VAR, DEFAULT_LOG_LEVEL))
        .init();
}

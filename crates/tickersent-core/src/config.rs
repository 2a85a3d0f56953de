use crate::app_config::AppConfig;
use crate::ConfigError;

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if a set env var holds an invalid value.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load application configuration from environment variables already in the process.
///
/// Unlike [`load_app_config`], this does NOT load `.env` files — useful for testing
/// or when the caller manages env setup.
///
/// # Errors
///
/// Returns `ConfigError` if a set env var holds an invalid value.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// This is the core parsing/validation logic, decoupled from the actual environment
/// so it can be tested with a pure `HashMap` lookup — no `set_var`/`remove_var` needed.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let parse_usize = |var: &str, default: &str| -> Result<usize, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<usize>()
            .map_err(|e| ConfigError::InvalidEnvVar {
                var: var.to_string(),
                reason: e.to_string(),
            })
    };

    let log_level = or_default("TICKERSENT_LOG_LEVEL", "info");
    let inference_url = lookup("TICKERSENT_INFERENCE_URL").ok();

    let model_max_chars = parse_usize("TICKERSENT_MODEL_MAX_CHARS", "512")?;
    if model_max_chars == 0 {
        return Err(ConfigError::InvalidEnvVar {
            var: "TICKERSENT_MODEL_MAX_CHARS".to_string(),
            reason: "must be positive".to_string(),
        });
    }

    let twitter_auth_token = lookup("TWITTER_AUTH_TOKEN").ok();
    let twitter_ct0 = lookup("TWITTER_CT0").ok();

    Ok(AppConfig {
        log_level,
        inference_url,
        model_max_chars,
        twitter_auth_token,
        twitter_ct0,
    })
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::env::VarError;

    use super::*;

    fn lookup_from_map<'a>(
        map: &'a HashMap<&'a str, &'a str>,
    ) -> impl Fn(&str) -> Result<String, VarError> + 'a {
        move |key| {
            map.get(key)
                .map(|v| (*v).to_string())
                .ok_or(VarError::NotPresent)
        }
    }

    #[test]
    fn build_app_config_uses_defaults_with_empty_env() {
        let map: HashMap<&str, &str> = HashMap::new();
        let cfg = build_app_config(lookup_from_map(&map)).unwrap();
        assert_eq!(cfg.log_level, "info");
        assert!(cfg.inference_url.is_none());
        assert_eq!(cfg.model_max_chars, 512);
        assert!(cfg.twitter_auth_token.is_none());
        assert!(cfg.twitter_ct0.is_none());
    }

    #[test]
    fn build_app_config_reads_overrides() {
        let mut map = HashMap::new();
        map.insert("TICKERSENT_LOG_LEVEL", "debug");
        map.insert("TICKERSENT_INFERENCE_URL", "http://localhost:8080");
        map.insert("TICKERSENT_MODEL_MAX_CHARS", "256");
        map.insert("TWITTER_AUTH_TOKEN", "tok");
        map.insert("TWITTER_CT0", "ct0");
        let cfg = build_app_config(lookup_from_map(&map)).unwrap();
        assert_eq!(cfg.log_level, "debug");
        assert_eq!(cfg.inference_url.as_deref(), Some("http://localhost:8080"));
        assert_eq!(cfg.model_max_chars, 256);
        assert_eq!(cfg.twitter_auth_token.as_deref(), Some("tok"));
        assert_eq!(cfg.twitter_ct0.as_deref(), Some("ct0"));
    }

    #[test]
    fn build_app_config_rejects_invalid_max_chars() {
        let mut map = HashMap::new();
        map.insert("TICKERSENT_MODEL_MAX_CHARS", "not-a-number");
        let result = build_app_config(lookup_from_map(&map));
        assert!(
            matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "TICKERSENT_MODEL_MAX_CHARS"),
            "expected InvalidEnvVar(TICKERSENT_MODEL_MAX_CHARS), got: {result:?}"
        );
    }

    #[test]
    fn build_app_config_rejects_zero_max_chars() {
        let mut map = HashMap::new();
        map.insert("TICKERSENT_MODEL_MAX_CHARS", "0");
        let result = build_app_config(lookup_from_map(&map));
        assert!(
            matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "TICKERSENT_MODEL_MAX_CHARS"),
            "expected InvalidEnvVar(TICKERSENT_MODEL_MAX_CHARS), got: {result:?}"
        );
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub listen_addr: String,
    /// Largest `limit` accepted by /fizzbuzz, `None` for no cap
    pub max_limit: Option<i64>,
    /// How long in-flight requests get to finish after a shutdown signal
    pub shutdown_grace_secs: u64,
    pub debug: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            listen_addr: "0.0.0.0:8080".to_string(),
            max_limit: Some(100_000),
            shutdown_grace_secs: 10,
            debug: false,
        }
    }
}

pub fn load_config() -> anyhow::Result<Config> {
    load_config_from(|key| std::env::var(key).ok())
}

/// Build the configuration from an arbitrary variable source.
///
/// Unparseable numeric values fall back to their defaults.
/// `FIZZBUZZ_MAX_LIMIT=none` (or `off`) disables the limit cap.
pub fn load_config_from<F>(var: F) -> anyhow::Result<Config>
where
    F: Fn(&str) -> Option<String>,
{
    let defaults = Config::default();

    let listen_addr = var("FIZZBUZZ_LISTEN_ADDR").unwrap_or(defaults.listen_addr);

    let max_limit = match var("FIZZBUZZ_MAX_LIMIT") {
        Some(v) => match v.trim().to_lowercase().as_str() {
            "none" | "off" => None,
            n => n.parse().ok().or(defaults.max_limit),
        },
        None => defaults.max_limit,
    };

    let shutdown_grace_secs = var("FIZZBUZZ_SHUTDOWN_GRACE_SECS")
        .and_then(|v| v.trim().parse().ok())
        .unwrap_or(defaults.shutdown_grace_secs);

    let debug = var("DEBUG").is_some();

    if let Some(max) = max_limit.filter(|max| *max < 0) {
        anyhow::bail!("FIZZBUZZ_MAX_LIMIT must not be negative (got {})", max);
    }

    Ok(Config {
        listen_addr,
        max_limit,
        shutdown_grace_secs,
        debug,
    })
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn load_with(vars: &[(&str, &str)]) -> anyhow::Result<Config> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        load_config_from(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_default_config() {
        let cfg = Config::default();
        assert_eq!(cfg.listen_addr, "0.0.0.0:8080");
        assert_eq!(cfg.max_limit, Some(100_000));
        assert_eq!(cfg.shutdown_grace_secs, 10);
        assert!(!cfg.debug);
    }

    #[test]
    fn test_load_config_defaults() {
        let cfg = load_with(&[]).unwrap();
        assert_eq!(cfg.listen_addr, "0.0.0.0:8080");
        assert_eq!(cfg.max_limit, Some(100_000));
        assert!(!cfg.debug);
    }

    #[test]
    fn test_load_config_reads_process_env() {
        std::env::set_var("FIZZBUZZ_SHUTDOWN_GRACE_SECS", "3");
        let cfg = load_config().unwrap();
        assert_eq!(cfg.shutdown_grace_secs, 3);
        std::env::remove_var("FIZZBUZZ_SHUTDOWN_GRACE_SECS");
    }

    #[test]
    fn test_load_config_with_custom_listen_addr() {
        let cfg = load_with(&[("FIZZBUZZ_LISTEN_ADDR", "127.0.0.1:9000")]).unwrap();
        assert_eq!(cfg.listen_addr, "127.0.0.1:9000");
    }

    #[test]
    fn test_load_config_with_max_limit() {
        let cfg = load_with(&[("FIZZBUZZ_MAX_LIMIT", "500")]).unwrap();
        assert_eq!(cfg.max_limit, Some(500));
    }

    #[test]
    fn test_load_config_max_limit_disabled() {
        for value in ["none", "OFF", " off "] {
            let cfg = load_with(&[("FIZZBUZZ_MAX_LIMIT", value)]).unwrap();
            assert_eq!(cfg.max_limit, None, "{value}");
        }
    }

    #[test]
    fn test_load_config_negative_max_limit_rejected() {
        let err = load_with(&[("FIZZBUZZ_MAX_LIMIT", "-1")]).unwrap_err();
        assert!(err.to_string().contains("FIZZBUZZ_MAX_LIMIT"));
    }

    #[test]
    fn test_load_config_with_debug() {
        let cfg = load_with(&[("DEBUG", "1")]).unwrap();
        assert!(cfg.debug);
    }

    #[test]
    fn test_load_config_parse_error_uses_default() {
        let cfg = load_with(&[
            ("FIZZBUZZ_MAX_LIMIT", "lots"),
            ("FIZZBUZZ_SHUTDOWN_GRACE_SECS", "soon"),
        ])
        .unwrap();
        assert_eq!(cfg.max_limit, Some(100_000));
        assert_eq!(cfg.shutdown_grace_secs, 10);
    }

    #[test]
    fn test_config_debug() {
        let cfg = Config::default();
        let debug_str = format!("{:?}", cfg);
        assert!(debug_str.contains("listen_addr"));
        assert!(debug_str.contains("0.0.0.0:8080"));
    }
}

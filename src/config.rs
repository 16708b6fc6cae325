use serde::Deserialize;
use std::path::Path;

use crate::error::ConsoleError;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default = "default_cluster_name")]
    pub cluster_name: String,
    #[serde(default = "default_listen_port")]
    pub listen_port: u16,
    /// Serve data from a real backend instead of fixtures.
    #[serde(default)]
    pub backend: Option<BackendConfig>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct BackendConfig {
    pub base_url: String,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    #[serde(default = "default_health_interval_secs")]
    pub health_interval_secs: u64,
}

fn default_cluster_name() -> String {
    "cilikube".to_string()
}

fn default_listen_port() -> u16 {
    9090
}

fn default_timeout_secs() -> u64 {
    10
}

fn default_health_interval_secs() -> u64 {
    15
}

impl Default for Config {
    fn default() -> Self {
        Self {
            cluster_name: default_cluster_name(),
            listen_port: default_listen_port(),
            backend: None,
        }
    }
}

impl Config {
    pub fn load(path: &Path) -> Result<Self, ConsoleError> {
        let data = std::fs::read_to_string(path).map_err(|source| ConsoleError::ConfigRead {
            path: path.display().to_string(),
            source,
        })?;
        Self::parse(&data)
    }

    pub fn parse(data: &str) -> Result<Self, ConsoleError> {
        let mut cfg: Config = serde_yaml::from_str(data)?;

        if let Some(backend) = cfg.backend.as_mut() {
            let url = backend.base_url.trim().trim_end_matches('/').to_string();
            if url.is_empty() {
                return Err(ConsoleError::ConfigInvalid(
                    "backend.base_url must not be empty".to_string(),
                ));
            }
            if !url.starts_with("http://") && !url.starts_with("https://") {
                return Err(ConsoleError::ConfigInvalid(format!(
                    "backend.base_url {:?} must start with http:// or https://",
                    url
                )));
            }
            if backend.health_interval_secs == 0 {
                return Err(ConsoleError::ConfigInvalid(
                    "backend.health_interval_secs must be at least 1".to_string(),
                ));
            }
            backend.base_url = url;
        }

        Ok(cfg)
    }

    pub fn listen_addr(&self) -> String {
        format!("0.0.0.0:{}", self.listen_port)
    }

    pub fn backend_url(&self) -> String {
        self.backend
            .as_ref()
            .map(|b| b.base_url.clone())
            .unwrap_or_default()
    }
}

/// Picks the config path from command-line arguments (program name
/// already skipped): `--config <path>`, `-config <path>`, or a bare path.
pub fn config_path_from_args<I>(args: I) -> Result<Option<String>, ConsoleError>
where
    I: IntoIterator<Item = String>,
{
    let mut args = args.into_iter();
    let Some(first) = args.next() else {
        return Ok(None);
    };

    if first == "--config" || first == "-config" {
        return match args.next() {
            Some(path) if !path.starts_with('-') => Ok(Some(path)),
            _ => Err(ConsoleError::Usage(format!("{first} requires a path"))),
        };
    }
    if first.starts_with('-') {
        return Err(ConsoleError::Usage(format!("unknown flag {first}")));
    }
    Ok(Some(first))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn empty_file_uses_defaults() {
        let cfg = Config::parse("{}").unwrap();
        assert_eq!(cfg.cluster_name, "cilikube");
        assert_eq!(cfg.listen_addr(), "0.0.0.0:9090");
        assert!(cfg.backend.is_none());
        assert_eq!(cfg.backend_url(), "");
    }

    #[test]
    fn backend_url_is_normalized() {
        let cfg = Config::parse(
            "cluster_name: prod\nlisten_port: 8088\nbackend:\n  base_url: http://api:8080/\n",
        )
        .unwrap();
        let backend = cfg.backend.as_ref().unwrap();
        assert_eq!(backend.base_url, "http://api:8080");
        assert_eq!(backend.timeout_secs, 10);
        assert_eq!(backend.health_interval_secs, 15);
        assert_eq!(cfg.listen_addr(), "0.0.0.0:8088");
    }

    #[test]
    fn backend_url_needs_scheme() {
        let err = Config::parse("backend:\n  base_url: api:8080\n").unwrap_err();
        assert!(matches!(err, ConsoleError::ConfigInvalid(_)));

        let err = Config::parse("backend:\n  base_url: ''\n").unwrap_err();
        assert!(matches!(err, ConsoleError::ConfigInvalid(_)));

        let err = Config::parse("backend:\n  base_url: http://api\n  health_interval_secs: 0\n")
            .unwrap_err();
        assert!(matches!(err, ConsoleError::ConfigInvalid(_)));
    }

    #[test]
    fn load_reads_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "cluster_name: staging").unwrap();
        let cfg = Config::load(file.path()).unwrap();
        assert_eq!(cfg.cluster_name, "staging");
    }

    #[test]
    fn load_reports_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = Config::load(&dir.path().join("missing.yaml")).unwrap_err();
        assert!(matches!(err, ConsoleError::ConfigRead { .. }));
    }

    #[test]
    fn malformed_yaml_is_a_parse_error() {
        let err = Config::parse("listen_port: [").unwrap_err();
        assert!(matches!(err, ConsoleError::ConfigParse(_)));
    }

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn config_flag_takes_next_argument() {
        assert_eq!(
            config_path_from_args(args(&["--config", "/tmp/c.yaml"])).unwrap(),
            Some("/tmp/c.yaml".to_string())
        );
        assert_eq!(
            config_path_from_args(args(&["-config", "c.yaml"])).unwrap(),
            Some("c.yaml".to_string())
        );
    }

    #[test]
    fn config_flag_without_value_is_a_usage_error() {
        let err = config_path_from_args(args(&["--config"])).unwrap_err();
        assert!(matches!(err, ConsoleError::Usage(ref m) if m.contains("--config")));
        assert!(matches!(
            config_path_from_args(args(&["-config", "--verbose"])),
            Err(ConsoleError::Usage(_))
        ));
        assert!(matches!(
            config_path_from_args(args(&["--port"])),
            Err(ConsoleError::Usage(_))
        ));
    }

    #[test]
    fn positional_path_and_no_args() {
        assert_eq!(
            config_path_from_args(args(&["./console.yaml"])).unwrap(),
            Some("./console.yaml".to_string())
        );
        assert_eq!(config_path_from_args(Vec::new()).unwrap(), None);
    }
}

use serde::Deserialize;
use sqlfill::DataSource;
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct ProjectConfig {
    pub config_path: PathBuf,
    pub file: ConfigFile,
}

impl ProjectConfig {
    pub fn load(config_path: PathBuf) -> anyhow::Result<Self> {
        let raw = std::fs::read_to_string(&config_path).map_err(|e| {
            anyhow::anyhow!(
                "failed to read config file {}: {e}",
                config_path.display()
            )
        })?;

        let file = ConfigFile::parse(&raw).map_err(|e| {
            anyhow::anyhow!(
                "invalid config file {}: {e:#}",
                config_path.display()
            )
        })?;

        tracing::debug!(path = %config_path.display(), "loaded config");
        Ok(Self { config_path, file })
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct ConfigFile {
    pub version: String,
    pub database: DataSource,
}

impl ConfigFile {
    /// Parse, expand `${VAR}` references, and validate.
    pub fn parse(raw: &str) -> anyhow::Result<Self> {
        let mut file: ConfigFile =
            toml::from_str(raw).map_err(|e| anyhow::anyhow!("failed to parse toml: {e}"))?;
        file.expand_env()?;
        file.validate()?;
        Ok(file)
    }

    fn expand_env(&mut self) -> anyhow::Result<()> {
        let db = &mut self.database;
        db.user = expand_env_vars(&db.user)?;
        db.password = expand_env_vars(&db.password)?;
        db.host = expand_env_vars(&db.host)?;
        db.database = expand_env_vars(&db.database)?;
        Ok(())
    }

    fn validate(&self) -> anyhow::Result<()> {
        if self.version.trim() != "1" {
            anyhow::bail!("unsupported config version: {}", self.version);
        }
        self.database
            .validate()
            .map_err(|e| anyhow::anyhow!("[database]: {e}"))?;
        Ok(())
    }
}

fn expand_env_vars(input: &str) -> anyhow::Result<String> {
    expand_with(input, |key| std::env::var(key).ok())
}

fn expand_with(input: &str, lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<String> {
    let mut out = String::with_capacity(input.len());
    let mut chars = input.chars().peekable();

    while let Some(c) = chars.next() {
        if c == '$' && chars.peek() == Some(&'{') {
            chars.next(); // consume '{'

            let mut key = String::new();
            let mut closed = false;
            for ch in chars.by_ref() {
                if ch == '}' {
                    closed = true;
                    break;
                }
                key.push(ch);
            }

            if !closed {
                anyhow::bail!("unterminated env var reference: ${{{key}");
            }
            if key.is_empty() {
                anyhow::bail!("invalid env var reference: ${{}}");
            }

            let v = lookup(&key)
                .ok_or_else(|| anyhow::anyhow!("missing env var for config expansion: {key}"))?;
            out.push_str(&v);
            continue;
        }

        out.push(c);
    }

    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lookup(key: &str) -> Option<String> {
        match key {
            "DB_USER" => Some("app".to_string()),
            "DB_PASS" => Some("s3cret".to_string()),
            _ => None,
        }
    }

    #[test]
    fn expand_replaces_references() {
        assert_eq!(
            expand_with("${DB_USER}:${DB_PASS}", lookup).unwrap(),
            "app:s3cret"
        );
        assert_eq!(expand_with("plain", lookup).unwrap(), "plain");
        assert_eq!(expand_with("cost$5", lookup).unwrap(), "cost$5");
    }

    #[test]
    fn expand_rejects_bad_references() {
        assert!(expand_with("${DB_USER", lookup).is_err());
        assert!(expand_with("${}", lookup).is_err());
        assert!(expand_with("${NOPE}", lookup).is_err());
    }

    #[test]
    fn parse_minimal_config() {
        let file = ConfigFile::parse(
            r#"
version = "1"

[database]
user = "root"
database = "app"
"#,
        )
        .unwrap();
        assert_eq!(
            file.database.to_dsn().unwrap(),
            "root:@tcp(127.0.0.1:3306)/app"
        );
    }

    #[test]
    fn parse_rejects_unknown_version() {
        let err = ConfigFile::parse(
            r#"
version = "2"

[database]
user = "root"
database = "app"
"#,
        )
        .unwrap_err();
        assert!(err.to_string().contains("unsupported config version"));
    }

    #[test]
    fn parse_rejects_empty_database() {
        let err = ConfigFile::parse(
            r#"
version = "1"

[database]
user = "root"
database = ""
"#,
        )
        .unwrap_err();
        assert!(err.to_string().contains("database must not be empty"));
    }

    #[test]
    fn parse_requires_database_table() {
        assert!(ConfigFile::parse(r#"version = "1""#).is_err());
    }
}

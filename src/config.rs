use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{MinderError, Result};
use crate::input::prompt_line;

/// The four connection fields, persisted verbatim as flat JSON. The embedded
/// database only needs `database` (the file path); host, user and password are
/// kept for parity with server-backed setups and round-trip untouched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    pub host: String,
    pub user: String,
    pub password: String,
    pub database: String,
}

pub struct ConfigStore {
    path: PathBuf,
}

impl ConfigStore {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn default_path() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".config")
            .join("moneyminder")
            .join("config.json")
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    pub fn load(&self) -> Result<Config> {
        if !self.exists() {
            return Err(MinderError::Config(format!(
                "configuration file not found at {}; run `moneyminder` to create it",
                self.path.display()
            )));
        }
        let content = std::fs::read_to_string(&self.path)?;
        serde_json::from_str(&content).map_err(|e| MinderError::Config(e.to_string()))
    }

    pub fn save(&self, config: &Config) -> Result<()> {
        if let Some(dir) = self.path.parent() {
            std::fs::create_dir_all(dir)?;
        }
        let json =
            serde_json::to_string_pretty(config).map_err(|e| MinderError::Config(e.to_string()))?;
        std::fs::write(&self.path, format!("{json}\n"))?;
        Ok(())
    }

    /// Load the config, or walk the user through creating one when the file is
    /// missing. Field contents are not validated; empty answers are kept as-is.
    pub fn load_or_create<R: BufRead, W: Write>(&self, input: &mut R, out: &mut W) -> Result<Config> {
        if self.exists() {
            return self.load();
        }
        writeln!(out, "Please complete the configuration file")?;
        let config = prompt_config(input, out)?;
        self.save(&config)?;
        writeln!(out, "New configuration file created successfully.")?;
        Ok(config)
    }
}

fn prompt_config<R: BufRead, W: Write>(input: &mut R, out: &mut W) -> Result<Config> {
    Ok(Config {
        host: prompt_line(input, out, "Enter host: ")?,
        user: prompt_line(input, out, "Enter user: ")?,
        password: prompt_line(input, out, "Enter password: ")?,
        database: prompt_line(input, out, "Enter database: ")?,
    })
}

/// Re-prompt every field with the current value as the Enter-keeps default.
pub fn prompt_config_update<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    current: &Config,
) -> Result<Config> {
    writeln!(out, "Enter new configuration (press Enter to keep the old value):")?;
    let mut next = current.clone();
    for (label, field) in [
        ("Host", &mut next.host),
        ("User", &mut next.user),
        ("Password", &mut next.password),
        ("Database", &mut next.database),
    ] {
        let answer = prompt_line(input, out, &format!("{label} [{field}]: "))?;
        if !answer.is_empty() {
            *field = answer;
        }
    }
    Ok(next)
}

//! This is the `ConfigFile` struct.
//!
//! It finds the default location of the configuration file for `igcinfo` and loads it.
//! A missing default file is not an error, we run with the built-in defaults.  A file given
//! explicitly on the command line MUST exist.
//!
//! ```hcl
//! version = 1
//! timeout = 30
//! info    = "Service for IGC tracks"
//! ```
//!

use std::fmt::Debug;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, trace};

use crate::makepath;

#[cfg(unix)]
const BASEDIR: &str = ".config";

/// Main name for the directory base
const TAG: &str = "igcinfo";

/// Config filename
const CONFIG: &str = "igcinfo.hcl";

/// Current version
pub const CVERSION: usize = 1;

/// Default bound on a single fetch, in seconds
pub const DEF_TIMEOUT: u64 = 30;

/// Default description for the meta record
pub const DEF_INFO: &str = "Service for IGC tracks";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Can not read configuration file {0}: {1}")]
    Unreadable(String, String),
    #[error("Bad configuration syntax: {0}")]
    Syntax(String),
    #[error("Bad file version v{0}, need v{1}")]
    BadVersion(usize, usize),
}

/// Configuration for the service.
///
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct ConfigFile {
    /// Version in the file MUST match `CVERSION`
    pub version: usize,
    /// Timeout for fetching one track, in seconds.
    #[serde(default = "default_timeout")]
    pub timeout: u64,
    /// Free text returned as `info` in the meta record.
    #[serde(default = "default_info")]
    pub info: String,
    /// Override the HTTP user-agent.
    #[serde(default)]
    pub user_agent: Option<String>,
}

fn default_timeout() -> u64 {
    DEF_TIMEOUT
}

fn default_info() -> String {
    DEF_INFO.to_string()
}

impl Default for ConfigFile {
    fn default() -> Self {
        ConfigFile {
            version: CVERSION,
            timeout: DEF_TIMEOUT,
            info: default_info(),
            user_agent: None,
        }
    }
}

impl ConfigFile {
    /// Returns the path of the default config directory
    ///
    #[cfg(unix)]
    pub fn config_path() -> Option<PathBuf> {
        let homedir = home::home_dir()?;
        Some(makepath!(homedir, BASEDIR, TAG))
    }

    /// Returns the path of the default config directory
    ///
    #[cfg(windows)]
    pub fn config_path() -> Option<PathBuf> {
        let local = std::env::var("LOCALAPPDATA").ok()?;
        Some(makepath!(local, TAG))
    }

    /// Returns the path of the default config file
    ///
    pub fn default_file() -> Option<PathBuf> {
        Self::config_path().map(|p| p.join(CONFIG))
    }

    /// Load either the file specified as parameter or the default file if `None`.
    ///
    #[tracing::instrument]
    pub fn load(fname: Option<&Path>) -> Result<ConfigFile, ConfigError> {
        trace!("loading config");

        let fname = match fname {
            Some(fname) => fname.to_path_buf(),
            None => match Self::default_file() {
                Some(def) if def.exists() => def,
                _ => {
                    debug!("no default configuration file, using defaults");
                    return Ok(ConfigFile::default());
                }
            },
        };

        let data = fs::read_to_string(&fname)
            .map_err(|e| ConfigError::Unreadable(fname.to_string_lossy().to_string(), e.to_string()))?;
        Self::from_hcl(&data)
    }

    /// Decode and check the version.
    ///
    pub fn from_hcl(data: &str) -> Result<ConfigFile, ConfigError> {
        let cfg: ConfigFile = hcl::from_str(data).map_err(|e| ConfigError::Syntax(e.to_string()))?;
        debug!("struct data = {cfg:?}");

        if cfg.version != CVERSION {
            return Err(ConfigError::BadVersion(cfg.version, CVERSION));
        }
        Ok(cfg)
    }

    /// Fetch timeout as a `Duration`
    ///
    #[inline]
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout)
    }
}

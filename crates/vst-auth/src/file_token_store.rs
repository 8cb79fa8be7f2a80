//! Token persisted on disk, one file per backend origin.
//!
//! File location: `<token_dir>/<scheme>_<host>_<port>.token`
//!
//! Keying by origin keeps sessions for different backends apart, the same
//! way browser storage is scoped to the page origin.

use crate::{AuthError, AuthResult, TokenStore};

use std::io::ErrorKind;
use std::panic::Location;
use std::path::{Path, PathBuf};

use error_location::ErrorLocation;
use log::debug;
use url::Url;

const TOKEN_EXTENSION: &str = "token";

#[derive(Debug, Clone)]
pub struct FileTokenStore {
    path: PathBuf,
}

impl FileTokenStore {
    /// Store for the origin of `base_url` inside `token_dir`.
    #[track_caller]
    pub fn for_origin(token_dir: &Path, base_url: &str) -> AuthResult<Self> {
        let key = Self::origin_key(base_url)?;
        Ok(Self {
            path: token_dir.join(format!("{key}.{TOKEN_EXTENSION}")),
        })
    }

    /// Store backed by an explicit file.
    pub fn at_path(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// `scheme_host_port`, lowercased, with anything outside `[a-z0-9]`
    /// replaced by `_`. The scheme's default port is used when omitted.
    #[track_caller]
    pub fn origin_key(base_url: &str) -> AuthResult<String> {
        let url = Url::parse(base_url).map_err(|e| AuthError::InvalidOrigin {
            origin: base_url.to_string(),
            message: e.to_string(),
            location: ErrorLocation::from(Location::caller()),
        })?;

        let host = url.host_str().ok_or_else(|| AuthError::InvalidOrigin {
            origin: base_url.to_string(),
            message: "URL has no host".to_string(),
            location: ErrorLocation::from(Location::caller()),
        })?;

        let origin = match url.port_or_known_default() {
            Some(port) => format!("{}_{}_{}", url.scheme(), host, port),
            None => format!("{}_{}", url.scheme(), host),
        };

        Ok(origin
            .to_lowercase()
            .chars()
            .map(|c| if c.is_ascii_alphanumeric() { c } else { '_' })
            .collect())
    }

    #[track_caller]
    fn io_error(&self, source: std::io::Error) -> AuthError {
        AuthError::Store {
            path: self.path.clone(),
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    fn ensure_parent_dir(&self) -> AuthResult<()> {
        if let Some(dir) = self.path.parent()
            && !dir.exists()
        {
            std::fs::create_dir_all(dir).map_err(|e| self.io_error(e))?;
        }
        Ok(())
    }

    #[cfg(unix)]
    fn restrict_permissions(path: &Path) -> std::io::Result<()> {
        use std::os::unix::fs::PermissionsExt;
        std::fs::set_permissions(path, std::fs::Permissions::from_mode(0o600))
    }

    #[cfg(not(unix))]
    fn restrict_permissions(_path: &Path) -> std::io::Result<()> {
        Ok(())
    }
}

impl TokenStore for FileTokenStore {
    fn save(&self, token: &str) -> AuthResult<()> {
        self.ensure_parent_dir()?;

        // Write-then-rename so a crash never leaves a half-written token.
        let tmp = self.path.with_extension(format!("{TOKEN_EXTENSION}.tmp"));
        std::fs::write(&tmp, token).map_err(|e| self.io_error(e))?;
        Self::restrict_permissions(&tmp).map_err(|e| self.io_error(e))?;
        std::fs::rename(&tmp, &self.path).map_err(|e| self.io_error(e))?;

        debug!("Token saved to {}", self.path.display());
        Ok(())
    }

    fn load(&self) -> AuthResult<Option<String>> {
        match std::fs::read_to_string(&self.path) {
            Ok(contents) => {
                let token = contents.trim();
                if token.is_empty() {
                    Ok(None)
                } else {
                    Ok(Some(token.to_string()))
                }
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(self.io_error(e)),
        }
    }

    fn clear(&self) -> AuthResult<()> {
        match std::fs::remove_file(&self.path) {
            Ok(()) => {
                debug!("Token removed from {}", self.path.display());
                Ok(())
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(self.io_error(e)),
        }
    }
}

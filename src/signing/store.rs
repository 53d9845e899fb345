//! Key store: persists the keypair as two base64 text files

use super::crypto::generate_keypair;
use super::defaults::{DEFAULT_PRIVATE_KEY_FILE, DEFAULT_PUBLIC_KEY_FILE};
use super::keys::{self, KeyPair};
use crate::exceptions::{GallifreyError, Result};
use crate::utils::encoding;
use log::{debug, info, warn};
use std::fs;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

/// Location of the private and public key files
#[derive(Debug, Clone)]
pub struct KeyStore {
    private_key_path: PathBuf,
    public_key_path: PathBuf,
}

impl KeyStore {
    /// Key files with their default names inside `dir`
    pub fn new(dir: impl AsRef<Path>) -> Self {
        let dir = dir.as_ref();
        KeyStore {
            private_key_path: dir.join(DEFAULT_PRIVATE_KEY_FILE),
            public_key_path: dir.join(DEFAULT_PUBLIC_KEY_FILE),
        }
    }

    pub fn with_paths(private_key_path: PathBuf, public_key_path: PathBuf) -> Self {
        KeyStore {
            private_key_path,
            public_key_path,
        }
    }

    pub fn private_key_path(&self) -> &Path {
        &self.private_key_path
    }

    pub fn public_key_path(&self) -> &Path {
        &self.public_key_path
    }

    /// Whether a private key has been stored
    pub fn exists(&self) -> bool {
        self.private_key_path.exists()
    }

    /// Load the stored keypair, or generate and store one on first use
    ///
    /// The private key is installed with a no-clobber rename. If another
    /// process installs one first, that key is used and ours is dropped.
    /// A private key without its public key file (another process is still
    /// writing it, or it was lost) is completed from the private key.
    pub fn load_or_create(&self) -> Result<KeyPair> {
        if self.exists() {
            return self.load_or_restore();
        }

        info!(
            "🔑 No private key at {:?}, generating a new keypair",
            self.private_key_path
        );
        let keypair = generate_keypair();

        if let Some(dir) = parent_dir(&self.private_key_path) {
            fs::create_dir_all(dir).map_err(|e| GallifreyError::io(dir, e))?;
        }

        if !save_key_exclusive(&keypair.to_keypair_bytes(), &self.private_key_path)? {
            warn!(
                "⚠️ Private key appeared at {:?} during generation, using the existing key",
                self.private_key_path
            );
            return self.load_or_restore();
        }

        save_key(keypair.verifying_key().as_bytes(), &self.public_key_path)?;
        info!(
            "✅ Stored new keypair (fingerprint {})",
            keys::fingerprint(&keypair.verifying_key())
        );
        Ok(keypair)
    }

    /// Load both key files and check that they belong together
    pub fn load(&self) -> Result<KeyPair> {
        let keypair = self.load_private()?;
        let public_key = keys::public_key_from_bytes(&load_key(&self.public_key_path)?)?;

        if public_key != keypair.verifying_key() {
            return Err(GallifreyError::InvalidKey(format!(
                "{} does not match {}",
                self.public_key_path.display(),
                self.private_key_path.display()
            )));
        }

        debug!(
            "✅ Loaded keys from files (fingerprint {})",
            keys::fingerprint(&public_key)
        );
        Ok(keypair)
    }

    /// `load`, but a missing public key file is rewritten from the private key
    fn load_or_restore(&self) -> Result<KeyPair> {
        match self.load() {
            Err(GallifreyError::KeyFileMissing(path)) if path == self.public_key_path => {
                let keypair = self.load_private()?;
                warn!("⚠️ {path:?} not found, deriving it from the private key");
                save_key(keypair.verifying_key().as_bytes(), &self.public_key_path)?;
                Ok(keypair)
            }
            other => other,
        }
    }

    fn load_private(&self) -> Result<KeyPair> {
        KeyPair::from_keypair_bytes(&load_key(&self.private_key_path)?)
    }
}

/// Write `bytes` as base64 to `path`, replacing any existing file
pub fn save_key(bytes: &[u8], path: &Path) -> Result<()> {
    let tmp = write_temp(bytes, path)?;
    tmp.persist(path)
        .map_err(|e| GallifreyError::io(path, e.error))?;
    debug!("💾 Saved key to {path:?}");
    Ok(())
}

/// Write `bytes` as base64 to `path` unless it already exists
///
/// Returns `false` without touching the file if `path` exists.
pub fn save_key_exclusive(bytes: &[u8], path: &Path) -> Result<bool> {
    let tmp = write_temp(bytes, path)?;
    match tmp.persist_noclobber(path) {
        Ok(_) => {
            debug!("💾 Saved key to {path:?}");
            Ok(true)
        }
        Err(e) if e.error.kind() == ErrorKind::AlreadyExists => Ok(false),
        Err(e) => Err(GallifreyError::io(path, e.error)),
    }
}

/// Read a base64 key file and return the raw bytes
pub fn load_key(path: &Path) -> Result<Vec<u8>> {
    let text = fs::read_to_string(path).map_err(|e| {
        if e.kind() == ErrorKind::NotFound {
            GallifreyError::KeyFileMissing(path.to_path_buf())
        } else {
            GallifreyError::io(path, e)
        }
    })?;

    encoding::decode(text.trim()).map_err(|e| GallifreyError::Decode {
        what: format!("key from {}", path.display()),
        reason: e.to_string(),
    })
}

/// Stage the encoded key in a temp file beside `path`
fn write_temp(bytes: &[u8], path: &Path) -> Result<NamedTempFile> {
    let dir = parent_dir(path).unwrap_or_else(|| Path::new("."));
    let mut tmp = NamedTempFile::new_in(dir).map_err(|e| GallifreyError::io(dir, e))?;

    tmp.write_all(encoding::encode(bytes).as_bytes())
        .and_then(|()| tmp.as_file().sync_all())
        .map_err(|e| GallifreyError::io(tmp.path(), e))?;

    #[cfg(unix)]
    {
        use super::defaults::DEFAULT_FILE_PERMS;
        use std::os::unix::fs::PermissionsExt;
        let permissions = fs::Permissions::from_mode(u32::from(DEFAULT_FILE_PERMS));
        fs::set_permissions(tmp.path(), permissions)
            .map_err(|e| GallifreyError::io(tmp.path(), e))?;
    }

    Ok(tmp)
}

fn parent_dir(path: &Path) -> Option<&Path> {
    path.parent().filter(|p| !p.as_os_str().is_empty())
}

// Centralized defaults for key storage, configuration and output

// =================================
// Key files
// =================================
pub const DEFAULT_PRIVATE_KEY_FILE: &str = "private_key.pem";
pub const DEFAULT_PUBLIC_KEY_FILE: &str = "public_key.pem";
pub const DEFAULT_FILE_PERMS: u16 = 0o600; // Read/write for owner only

// =================================
// Key material sizes (Ed25519)
// =================================
pub const SECRET_KEY_LEN: usize = 32;
pub const PUBLIC_KEY_LEN: usize = 32;
pub const KEYPAIR_LEN: usize = 64; // seed || public key, as stored on disk
pub const SIGNATURE_LEN: usize = 64;

// =================================
// Environment variables
// =================================
pub const KEY_DIR_ENV: &str = "GALLIFREY_KEY_DIR";
pub const LOG_LEVEL_ENV: &str = "GALLIFREY_LOG_LEVEL";
pub const LOG_PATH_ENV: &str = "GALLIFREY_LOG_PATH";
pub const NO_COLOR_ENV: &str = "NO_COLOR";

pub const DEFAULT_LOG_LEVEL: &str = "warn";

// =================================
// Verification banners
// =================================
pub const BANNER_OK: &str = "### SIGNATURE OK ###";
pub const BANNER_INVALID: &str = "### SIGNATURE INVALID ###";
pub const ANSI_OK: &str = "\x1b[42;30;1m";
pub const ANSI_INVALID: &str = "\x1b[41;30;1m";
pub const ANSI_RESET: &str = "\x1b[m";

//! CLI command handlers

use super::defaults::{ANSI_INVALID, ANSI_OK, ANSI_RESET, BANNER_INVALID, BANNER_OK};
use crate::api::{self, SignOptions};
use crate::exceptions::{GallifreyError, Result};
use std::io::{BufRead, Write};

/// Read one line, keeping the trailing newline if there is one
///
/// EOF before a newline yields whatever was read, possibly nothing.
pub fn read_message<R: BufRead>(input: &mut R) -> Result<Vec<u8>> {
    let mut message = Vec::new();
    input
        .read_until(b'\n', &mut message)
        .map_err(GallifreyError::Input)?;
    log::trace!("📝 Read {} message bytes", message.len());
    Ok(message)
}

/// `sign`: read a line, sign it, print signature and public key
pub fn sign<R: BufRead, W: Write>(input: &mut R, out: &mut W, options: &SignOptions) -> Result<()> {
    let message = read_message(input)?;
    let signed = api::sign_message(&message, options)?;

    writeln!(out, "Signature: {}", signed.signature)
        .and_then(|()| writeln!(out, "Public Key: {}", signed.public_key))
        .map_err(|e| GallifreyError::io("<stdout>", e))
}

/// `verify`: read a line and print the OK or INVALID banner
///
/// Returns the verification outcome.
pub fn verify<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    public_key: &str,
    signature: &str,
    color: bool,
) -> Result<bool> {
    let message = read_message(input)?;
    let valid = api::verify_message(public_key, &message, signature)?;

    writeln!(out, "{}", banner(valid, color)).map_err(|e| GallifreyError::io("<stdout>", e))?;
    Ok(valid)
}

/// Verification banner, optionally wrapped in ANSI colors
pub fn banner(valid: bool, color: bool) -> String {
    let (ansi, text) = if valid {
        (ANSI_OK, BANNER_OK)
    } else {
        (ANSI_INVALID, BANNER_INVALID)
    };

    if color {
        format!("{ansi}{text}{ANSI_RESET}")
    } else {
        text.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;
    use tempfile::TempDir;

    fn sign_line(dir: &TempDir, line: &str) -> (String, String) {
        let mut out = Vec::new();
        let options = SignOptions {
            key_dir: Some(dir.path().to_path_buf()),
        };
        sign(&mut Cursor::new(line.as_bytes()), &mut out, &options).unwrap();

        let text = String::from_utf8(out).unwrap();
        let mut lines = text.lines();
        let signature = lines.next().unwrap().strip_prefix("Signature: ").unwrap();
        let public_key = lines.next().unwrap().strip_prefix("Public Key: ").unwrap();
        (signature.to_string(), public_key.to_string())
    }

    #[test]
    fn test_read_message_stops_after_newline() {
        let mut input = Cursor::new(b"first\nsecond\n".to_vec());
        assert_eq!(read_message(&mut input).unwrap(), b"first\n");
        assert_eq!(read_message(&mut input).unwrap(), b"second\n");
        assert_eq!(read_message(&mut input).unwrap(), b"");
    }

    #[test]
    fn test_read_message_without_newline() {
        let mut input = Cursor::new(b"no newline".to_vec());
        assert_eq!(read_message(&mut input).unwrap(), b"no newline");
    }

    #[test]
    fn test_verify_prints_ok_banner() {
        let temp_dir = TempDir::new().unwrap();
        let (signature, public_key) = sign_line(&temp_dir, "hello\n");

        let mut out = Vec::new();
        let valid = verify(
            &mut Cursor::new(b"hello\n".to_vec()),
            &mut out,
            &public_key,
            &signature,
            true,
        )
        .unwrap();

        assert!(valid);
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "\x1b[42;30;1m### SIGNATURE OK ###\x1b[m\n"
        );
    }

    #[test]
    fn test_single_character_mutation_prints_invalid() {
        let temp_dir = TempDir::new().unwrap();
        let (signature, public_key) = sign_line(&temp_dir, "hello\n");

        let mut mutated: Vec<char> = signature.chars().collect();
        mutated[5] = if mutated[5] == 'A' { 'B' } else { 'A' };
        let mutated: String = mutated.into_iter().collect();

        let mut out = Vec::new();
        let valid = verify(
            &mut Cursor::new(b"hello\n".to_vec()),
            &mut out,
            &public_key,
            &mutated,
            false,
        )
        .unwrap();

        assert!(!valid);
        assert_eq!(String::from_utf8(out).unwrap(), "### SIGNATURE INVALID ###\n");
    }

    #[test]
    fn test_banner_colors() {
        assert_eq!(banner(true, false), "### SIGNATURE OK ###");
        assert!(banner(false, true).starts_with("\x1b[41;30;1m"));
        assert!(banner(false, true).ends_with("\x1b[m"));
    }
}

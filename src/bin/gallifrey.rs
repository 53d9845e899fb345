//! Gallifrey command-line signer and verifier

use clap::{Parser, Subcommand};
use gallifrey::exit_codes::{EXIT_INVALID_ARGS, EXIT_PANIC, EXIT_SUCCESS, exit_code_for};
use gallifrey::signing::{cli, defaults::NO_COLOR_ENV};
use gallifrey::utils::is_env_set;
use gallifrey::{GallifreyError, SignOptions};
use std::io::{self, Write};
use std::{panic, path::PathBuf, process};

const VERSION: &str = gallifrey::version::VERSION;

#[derive(Parser, Debug)]
#[command(
    name = "gallifrey",
    version = VERSION,
    about = "Sign and verify a line of stdin with a persistent Ed25519 keypair",
    arg_required_else_help = true
)]
struct Args {
    /// Directory holding private_key.pem and public_key.pem (default: GALLIFREY_KEY_DIR or CWD)
    #[arg(long, global = true)]
    key_dir: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error, off; prefix with json: for JSON lines)
    #[arg(long, global = true)]
    log_level: Option<String>,

    #[command(subcommand)]
    mode: Mode,
}

#[derive(Subcommand, Debug)]
enum Mode {
    /// Sign one line of stdin, generating a keypair on first use
    Sign,
    /// Verify one line of stdin against a public key and signature
    Verify {
        /// Signer's public key (base64)
        public_key: String,
        /// Signature to check (base64)
        signature: String,
    },
}

fn main() {
    panic::set_hook(Box::new(|panic_info| {
        eprintln!("PANIC: {}", panic_info);
        process::exit(EXIT_PANIC);
    }));

    let result = panic::catch_unwind(run);

    match result {
        Ok(exit_code) => process::exit(exit_code),
        Err(_) => {
            eprintln!("Fatal: Unhandled panic in gallifrey");
            process::exit(EXIT_PANIC);
        }
    }
}

fn run() -> i32 {
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(e) => {
            // --help and --version land here too and are not failures
            let _ = e.print();
            return if e.use_stderr() {
                EXIT_INVALID_ARGS
            } else {
                EXIT_SUCCESS
            };
        }
    };

    if let Some(ref level) = args.log_level {
        gallifrey::logger::JsonLogger::init_with_level(level);
    } else {
        gallifrey::logger::JsonLogger::init();
    }

    log::debug!("🚀 gallifrey {} started", gallifrey::version::full_version());

    match dispatch(args) {
        Ok(()) => EXIT_SUCCESS,
        Err(e) => {
            log::error!("❌ {e}");
            eprintln!("Error: {e}");
            exit_code_for(&e)
        }
    }
}

fn dispatch(args: Args) -> Result<(), GallifreyError> {
    let stdin = io::stdin();
    let mut input = stdin.lock();
    let stdout = io::stdout();
    let mut out = stdout.lock();

    match args.mode {
        Mode::Sign => {
            let options = SignOptions {
                key_dir: args.key_dir,
            };
            cli::sign(&mut input, &mut out, &options)?;
        }
        Mode::Verify {
            public_key,
            signature,
        } => {
            let color = !is_env_set(NO_COLOR_ENV);
            cli::verify(&mut input, &mut out, &public_key, &signature, color)?;
        }
    }

    out.flush().map_err(|e| GallifreyError::io("<stdout>", e))
}

use anyhow::Context;
use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use std::io::{self, Read};
use tracing::error;

use cronus::api::{ExchangeConfig, GenerateConfig, SignConfig, SignatureScheme, VerifyConfig};

#[derive(Parser, Debug)]
#[command(name = "cronus")]
#[command(about = "RSA key pairs, signatures and key encapsulation", version)]
pub struct Cli {
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate a 2048-bit RSA key pair as two PEM files
    GeneratePem {
        /// Public key file; ".pem" is appended unless the name already contains it
        #[arg(long)]
        public: Option<String>,

        /// Private key file; ".pem" is appended unless the name already contains it
        #[arg(long)]
        private: Option<String>,
    },

    /// Sign a message and write the base64 signature to sign.txt
    Sign {
        #[arg(long)]
        public: Option<String>,

        #[arg(long)]
        private: Option<String>,

        /// Message to sign. Read from stdin if not provided
        #[arg(long)]
        message: Option<String>,

        #[arg(long, default_value = "pkcs1v15")]
        scheme: SchemeArg,
    },

    /// Check a signature file against a message
    Verify {
        #[arg(long)]
        public: Option<String>,

        /// Signature file (default: sign.txt)
        #[arg(long)]
        signature: Option<String>,

        /// Message that was signed. Read from stdin if not provided
        #[arg(long)]
        message: Option<String>,

        #[arg(long, default_value = "pkcs1v15")]
        scheme: SchemeArg,
    },

    /// Encapsulate a key, encrypt a message under it, then recover both
    Exchange {
        #[arg(long)]
        public: Option<String>,

        #[arg(long)]
        private: Option<String>,

        /// Plaintext. Read from stdin if not provided
        #[arg(long)]
        message: Option<String>,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum SchemeArg {
    Pkcs1v15,
    Pss,
}

impl From<SchemeArg> for SignatureScheme {
    fn from(arg: SchemeArg) -> Self {
        match arg {
            SchemeArg::Pkcs1v15 => SignatureScheme::Pkcs1v15Sha256,
            SchemeArg::Pss => SignatureScheme::PssSha256,
        }
    }
}

fn message_or_stdin(message: Option<String>) -> io::Result<Vec<u8>> {
    match message {
        Some(text) => Ok(text.into_bytes()),
        None => {
            let mut buf = Vec::new();
            io::stdin().read_to_end(&mut buf)?;
            Ok(buf)
        }
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_max_level(cli.verbosity)
        .with_writer(io::stderr)
        .init();

    match cli.command {
        Commands::GeneratePem { public, private } => {
            let config = GenerateConfig::resolve(public.as_deref(), private.as_deref());
            let (public_path, private_path) = (config.public_path.clone(), config.private_path.clone());

            cronus::generate_pem_with_config(config).context("failed to generate key pair")?;
            println!("{}", public_path.display());
            println!("{}", private_path.display());
        }

        Commands::Sign {
            public,
            private,
            message,
            scheme,
        } => {
            let config = SignConfig::new(public.as_deref(), private.as_deref(), scheme.into(), Vec::new())?;
            let config = SignConfig {
                message: message_or_stdin(message).context("failed to read message")?,
                ..config
            };
            let signature_path = config.signature_path.clone();

            let signature = cronus::sign(config).context("failed to sign message")?;
            println!("{}", signature.to_base64());
            tracing::info!("Signature written to {}", signature_path.display());
        }

        Commands::Verify {
            public,
            signature,
            message,
            scheme,
        } => {
            let config = VerifyConfig::new(public.as_deref(), signature.as_deref(), scheme.into(), Vec::new())?;
            let config = VerifyConfig {
                message: message_or_stdin(message).context("failed to read message")?,
                ..config
            };

            if cronus::verify(config).context("failed to verify signature")? {
                println!("valid");
            } else {
                println!("invalid");
                error!("Signature does not verify");
                std::process::exit(1);
            }
        }

        Commands::Exchange {
            public,
            private,
            message,
        } => {
            let config = ExchangeConfig::new(public.as_deref(), private.as_deref(), Vec::new())?;
            let config = ExchangeConfig {
                plaintext: message_or_stdin(message).context("failed to read message")?,
                ..config
            };

            let transcript = cronus::exchange(config).context("key exchange failed")?;
            println!("encapsulation: {}", hex::encode(&transcript.encapsulation));
            println!("iv: {}", hex::encode(transcript.sealed.iv));
            println!("tag: {}", hex::encode(transcript.sealed.tag));
            println!("ciphertext: {}", hex::encode(&transcript.sealed.ciphertext));
            println!("recovered: {}", String::from_utf8_lossy(&transcript.recovered));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use assert_cmd::Command;

    #[test]
    fn test_cli_version_parameter() {
        let mut cmd = Command::cargo_bin("cronus").unwrap();
        let assert = cmd.arg("--version").assert();
        assert.success();
    }

    #[test]
    fn test_cli_rejects_unknown_scheme() {
        let mut cmd = Command::cargo_bin("cronus").unwrap();
        cmd.args(["sign", "--public", "a.pem", "--private", "b.pem", "--scheme", "dsa"])
            .assert()
            .failure();
    }

    #[test]
    fn test_cli_sign_requires_private_key() {
        let dir = tempfile::TempDir::new().unwrap();
        let mut cmd = Command::cargo_bin("cronus").unwrap();
        let assert = cmd
            .current_dir(dir.path())
            .args(["sign", "--public", "public.pem", "--message", "hello"])
            .assert()
            .failure();

        let stderr = String::from_utf8_lossy(&assert.get_output().stderr);
        assert!(stderr.contains("private"), "stderr: {}", stderr);
        assert!(!dir.path().join("sign.txt").exists());
    }
}

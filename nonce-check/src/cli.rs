//! Command-line front end.

use std::fs;
use std::io::Write;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use secp256k1_scalar::{BigUintBackend, MontgomeryBackend, ScalarBackend};
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::checker::{CheckReport, ConsistencyChecker};
use crate::constants::DEFAULT_LOG_FILTER;
use crate::inputs::SignatureInputs;

/// Arithmetic backend selection.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum Backend {
    /// Arbitrary-precision integers
    #[default]
    Biguint,
    /// Fixed-width Montgomery scalars
    Montgomery,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Parser, Debug)]
#[command(
    name = "nonce-check",
    version,
    about = "Check whether a candidate nonce k reproduces the s of a secp256k1 ECDSA signature."
)]
pub struct NonceCheckCmd {
    /// JSON file holding r, s, z, k and d as hex strings.
    #[arg(long, conflicts_with_all = ["r", "s", "z", "k", "d"])]
    pub input: Option<PathBuf>,

    /// Signature component r (hex).
    #[arg(long, required_unless_present = "input")]
    pub r: Option<String>,

    /// Signature component s (hex).
    #[arg(long, required_unless_present = "input")]
    pub s: Option<String>,

    /// Message hash z (hex).
    #[arg(long, required_unless_present = "input")]
    pub z: Option<String>,

    /// Candidate nonce k (hex).
    #[arg(long, required_unless_present = "input")]
    pub k: Option<String>,

    /// Private key d (hex).
    #[arg(long, required_unless_present = "input")]
    pub d: Option<String>,

    #[arg(long, value_enum, default_value_t = Backend::Biguint)]
    pub backend: Backend,

    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

impl NonceCheckCmd {
    /// Loads the inputs from `--input` or from the individual flags.
    pub fn inputs(&self) -> Result<SignatureInputs> {
        if let Some(path) = &self.input {
            let text = fs::read_to_string(path)
                .with_context(|| format!("while reading `{}`", path.display()))?;
            return serde_json::from_str(&text)
                .with_context(|| format!("while parsing `{}`", path.display()));
        }

        // clap guarantees all five are present without --input
        let field = |value: &Option<String>, name: &str| {
            value
                .clone()
                .with_context(|| format!("missing --{name}"))
        };
        let inputs = SignatureInputs::from_hex(
            &field(&self.r, "r")?,
            &field(&self.s, "s")?,
            &field(&self.z, "z")?,
            &field(&self.k, "k")?,
            &field(&self.d, "d")?,
        )?;
        Ok(inputs)
    }

    /// Runs the check and writes the report to `out`.
    pub fn run<W: Write>(&self, out: &mut W) -> Result<CheckReport> {
        let inputs = self.inputs()?;
        let report = match self.backend {
            Backend::Biguint => run_check(BigUintBackend::secp256k1(), &inputs)?,
            Backend::Montgomery => run_check(MontgomeryBackend, &inputs)?,
        };

        match self.format {
            OutputFormat::Text => writeln!(out, "{report}")?,
            OutputFormat::Json => writeln!(out, "{}", serde_json::to_string(&report)?)?,
        }

        Ok(report)
    }
}

fn run_check<B: ScalarBackend>(backend: B, inputs: &SignatureInputs) -> Result<CheckReport> {
    info!(backend = backend.name(), "checking candidate nonce");
    let report = ConsistencyChecker::new(backend)
        .check(inputs)
        .context("could not recompute s")?;
    Ok(report)
}

/// Installs a stderr logger filtered by `RUST_LOG`.
pub fn init_logging() {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

//! Cross-platform determinism audit (`fixcheck digest`, `fixcheck lut`).
//!
//! Each operation is swept over its own deterministic sample stream and every
//! outcome is fed to a BLAKE3 hasher:
//!
//! - `Ok(v)` hashes the tag byte `0` followed by `v.raw()` little-endian.
//! - `Err(e)` hashes the tag byte `1` followed by the error code.
//!
//! Two builds agree on an operation exactly when their digests agree. The
//! report is written as JSON so it can be checked in as a golden file and
//! compared on another machine.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use anyhow::{bail, Context, Result};
use comfy_table::Table;
use fixmath::lut::Lut;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::ops::{self, Kernel, Op};
use crate::sweep::Prng;

/// Seed used when none is given.
pub const DEFAULT_SEED: u64 = 0x5131_3332_F1C5_CEED;
/// Samples per operation when none is given.
pub const DEFAULT_SAMPLES: u32 = 4_096;

/// Per-operation digests of one sweep.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DigestReport {
    /// Sweep seed.
    pub seed: u64,
    /// Samples per operation.
    pub samples: u32,
    /// Hex BLAKE3 digest keyed by operation name.
    pub digests: BTreeMap<String, String>,
}

impl DigestReport {
    /// Sweeps every registered operation.
    pub fn sweep(seed: u64, samples: u32) -> Self {
        let digests = ops::OPS
            .iter()
            .map(|op| (op.name.to_owned(), digest_op(op, seed, samples)))
            .collect();
        info!(seed, samples, ops = ops::OPS.len(), "digest sweep complete");
        Self {
            seed,
            samples,
            digests,
        }
    }

    /// Reads a golden report.
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("failed to read golden digest {}", path.display()))?;
        serde_json::from_str(&text)
            .with_context(|| format!("failed to parse golden digest {}", path.display()))
    }

    /// Writes the report as pretty JSON.
    pub fn save(&self, path: &Path) -> Result<()> {
        let mut text = serde_json::to_string_pretty(self)?;
        text.push('\n');
        fs::write(path, text)
            .with_context(|| format!("failed to write digest {}", path.display()))?;
        info!(path = %path.display(), "wrote digest");
        Ok(())
    }

    /// Checks `self` against `golden`, failing on the first operation (in
    /// registry order) whose digest differs or is missing.
    pub fn compare(&self, golden: &Self) -> Result<()> {
        if (self.seed, self.samples) != (golden.seed, golden.samples) {
            bail!(
                "sweep parameters differ: seed {:#x}/{} samples vs golden seed {:#x}/{} samples",
                self.seed,
                self.samples,
                golden.seed,
                golden.samples
            );
        }
        for op in ops::OPS {
            let actual = self.digests.get(op.name);
            let expected = golden.digests.get(op.name);
            match (actual, expected) {
                (Some(a), Some(e)) if a == e => debug!(op = op.name, "digest matches"),
                (Some(a), Some(e)) => {
                    warn!(op = op.name, expected = %e, actual = %a, "digest mismatch");
                    bail!("digest mismatch for `{}`: expected {e}, got {a}", op.name);
                }
                (_, None) => bail!("golden digest has no entry for `{}`", op.name),
                (None, Some(_)) => bail!("no digest computed for `{}`", op.name),
            }
        }
        if let Some(extra) = golden
            .digests
            .keys()
            .find(|name| ops::find(name).is_none())
        {
            bail!("golden digest names unknown operation `{extra}`");
        }
        Ok(())
    }

    /// Table of operation digests.
    pub fn table(&self) -> Table {
        let mut table = Table::new();
        table.set_header(vec!["op", "blake3"]);
        for op in ops::OPS {
            if let Some(digest) = self.digests.get(op.name) {
                table.add_row(vec![op.name, digest.as_str()]);
            }
        }
        table
    }
}

fn stream_seed(seed: u64, name: &str) -> u64 {
    let salt = blake3::hash(name.as_bytes());
    let mut bytes = [0_u8; 8];
    bytes.copy_from_slice(&salt.as_bytes()[..8]);
    seed ^ u64::from_le_bytes(bytes)
}

/// Hex BLAKE3 digest of `samples` outcomes of `op`.
pub fn digest_op(op: &Op, seed: u64, samples: u32) -> String {
    let mut prng = Prng::from_seed(stream_seed(seed, op.name));
    let mut hasher = blake3::Hasher::new();
    hasher.update(op.name.as_bytes());

    let mut errors = 0_u32;
    for _ in 0..samples {
        let outcome = match op.kernel {
            Kernel::Unary(f, domain) => f(prng.next_fix(domain)),
            Kernel::Binary(f, lhs, rhs) => {
                let a = prng.next_fix(lhs);
                let b = prng.next_fix(rhs);
                f(a, b)
            }
        };
        match outcome {
            Ok(value) => {
                hasher.update(&[0]);
                hasher.update(&value.to_le_bytes());
            }
            Err(err) => {
                errors += 1;
                hasher.update(&[1, ops::error_code(&err)]);
            }
        }
    }

    let digest = hex::encode(hasher.finalize().as_bytes());
    debug!(op = op.name, samples, errors, %digest, "swept operation");
    digest
}

/// Size and digest of one embedded lookup table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LutDigest {
    /// Table name.
    pub name: &'static str,
    /// Entry count.
    pub entries: usize,
    /// Byte length.
    pub bytes: usize,
    /// Hex BLAKE3 digest of the little-endian table bytes.
    pub blake3: String,
}

impl LutDigest {
    fn of(lut: &Lut) -> Self {
        Self {
            name: lut.name(),
            entries: lut.len(),
            bytes: lut.as_bytes().len(),
            blake3: hex::encode(blake3::hash(lut.as_bytes()).as_bytes()),
        }
    }
}

/// Digests of every embedded table.
pub fn lut_digests() -> Vec<LutDigest> {
    Lut::all().into_iter().map(LutDigest::of).collect()
}

/// Table of [`lut_digests`].
pub fn lut_table(digests: &[LutDigest]) -> Table {
    let mut table = Table::new();
    table.set_header(vec!["table", "entries", "bytes", "blake3"]);
    for d in digests {
        table.add_row(vec![
            d.name.to_owned(),
            d.entries.to_string(),
            d.bytes.to_string(),
            d.blake3.clone(),
        ]);
    }
    table
}

// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

//! Library half of the `fixcheck` binary.
//!
//! `fixcheck` answers one question: does this build of `fixmath` produce the
//! same raw bits as every other build? It evaluates single operations for
//! spot checks ([`eval`]) and hashes whole operation sweeps into digests that
//! can be diffed across machines ([`audit`]).
//!
//! Invariants:
//! - Sample streams depend only on the seed and the operation name, so adding
//!   an operation never changes the digest of another.
//! - Digests hash raw little-endian bits and stable error codes, never the
//!   display form of a value.

pub mod audit;
pub mod eval;
pub mod ops;
pub mod sweep;

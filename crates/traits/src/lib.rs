//! Checksum traits for the EN 13757 CRC crates.
//!
//! This crate holds the small, dependency-free interface that checksum
//! implementations conform to, so that generic code (test harnesses, framing
//! layers) can be written once against any 16-bit CRC engine.
//!
//! | Trait | Purpose |
//! |-------|---------|
//! | [`Checksum`] | One-shot and streaming checksum computation |
//! | [`ChecksumCombine`] | `crc(A || B)` from `crc(A)`, `crc(B)` and `len(B)` |
//!
//! # Error Types
//!
//! - [`VerificationError`] - a received checksum did not match the data
//!
//! # Fallibility Discipline
//!
//! Non-test code denies `unwrap`, `expect`, and indexing.
#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![cfg_attr(not(test), deny(clippy::expect_used))]
#![cfg_attr(not(test), deny(clippy::indexing_slicing))]
#![no_std]

mod checksum;
pub mod error;

pub use checksum::{Checksum, ChecksumCombine};
pub use error::VerificationError;

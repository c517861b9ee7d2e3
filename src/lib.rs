//! # Mnemonic Shamir Secret Sharing
//!
//! This library splits a secret into `N` shares such that any `M` of them bring it back, and writes
//! every share as lines of ordinary dictionary words. Word shares can be copied by hand, printed or
//! read out loud, which opaque binary or base64 shares cannot.
//!
//! ## Shares as words
//!
//! A share token is URL-safe base64 text made of 44 character blocks. Each block decodes to 33
//! bytes and every byte picks one word out of a 256 word dictionary, so one block becomes one line
//! of 33 words. Reading the share file maps the words back to bytes, re-encodes each line and
//! concatenates the blocks into the original token.
//!
//! ```text
//! # Share 1
//! <word> <word> ... <word>
//!
//! # Share 2
//! <word> <word> ... <word>
//!
//! # You need 2 shares out of these 2 shares to be able to get your secret back.
//! ```
//!
//! Both sides have to use the same dictionary. A different word order decodes to different bytes
//! and reconstruction fails.
//!
//! ## Shamir's Secret Sharing (SSS)
//!
//! The default provider shares every byte of the secret with its own random polynomial of degree
//! `t-1` over GF(2^8):
//!
//! ```ignore
//! f(x) = a0 + a1*x + a2*x^2 + ... + a(t-1)*x^(t-1)
//! ```
//!
//! where `a0` is the secret byte. Share `i` holds `f(i)`; with at least `t` points the polynomial,
//! and hence the secret, is recovered using Lagrange interpolation.
//!
//! ### Example: Creating and revealing shares
//!
//! ```ignore
//! use wordshare::workflow::{CreateOptions, RevealOptions, ShareWorkflow};
//!
//! let workflow = ShareWorkflow::new();
//! workflow.create(&CreateOptions {
//!     threshold: 2,
//!     total: 3,
//!     secret: "hello".to_string(),
//!     dictionary: "english.txt".into(),
//!     destination: "shares.txt".into(),
//!     allow_overwrite: false,
//! })?;
//!
//! let secret = workflow.reveal(&RevealOptions {
//!     dictionary: "english.txt".into(),
//!     source: "shares.txt".into(),
//! })?;
//! assert_eq!(secret, "hello");
//! ```
//!
//! ## Modules
//!
//! - `dictionary`: Loads and validates word lists.
//! - `codec`: Maps bytes to words and back.
//! - `token`: Share tokens and their 44 character blocks.
//! - `format`: Writes and parses share files.
//! - `provider`: The secret sharing seam and its Shamir implementation.
//! - `sss`: Shamir's Secret Sharing over GF(2^8).
//! - `workflow`: The `create` and `reveal` operations.
//! - `config`: Layered defaults for the command line.

/// The `constants` module defines block sizes, limits and defaults used across the library.
pub mod constants;

/// The `error` module defines the error type shared by every operation.
pub mod error;

/// The `dictionary` module loads word lists and checks that they can serve as a 256 word alphabet.
pub mod dictionary;

/// The `codec` module maps single bytes to dictionary words and back.
pub mod codec;

/// The `token` module wraps share tokens and converts their blocks between text and bytes.
pub mod token;

/// The `format` module writes share files and parses them back into tokens.
pub mod format;

/// The `sss` (Shamir's Secret Sharing) module splits byte strings into shares and combines them
/// again using polynomials over GF(2^8).
pub mod sss;

/// The `provider` module defines the `SecretSharingProvider` trait the workflow splits and combines
/// through, and the Shamir based provider used by default.
pub mod provider;

/// The `workflow` module ties dictionary, codec, format and provider together.
pub mod workflow;

/// The `config` module loads command line defaults from a file and the environment.
pub mod config;

pub use error::{Error, Result};

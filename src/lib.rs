// SPDX-License-Identifier: MIT

// Clippy suppressions. These are the global ones I don't care about.
#![allow(clippy::needless_return)]

pub mod emit;
pub mod error;
pub mod file;
pub mod header;
pub mod logger;
pub mod version;

pub(crate) mod prelude;

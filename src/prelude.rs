// SPDX-License-Identifier: MIT

#![allow(unused_imports)]

pub(crate) use tracing::debug;
pub(crate) use tracing::error;
pub(crate) use tracing::info;
pub(crate) use tracing::trace;
pub(crate) use tracing::warn;

pub(crate) use anyhow::Context;
pub(crate) use anyhow::Result;

pub(crate) use crate::error::HeaderError;

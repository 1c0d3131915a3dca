// Copyright (c) 2026 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Shared plumbing: logging, clipboard, and where input comes from.

pub mod clipboard_service;
pub mod input_source;
pub mod log_support;
pub mod mirrored_output;
pub mod rolling_file_appender_impl;

pub use clipboard_service::*;
pub use input_source::*;
pub use log_support::*;
pub use mirrored_output::*;

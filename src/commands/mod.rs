//! # Commands
//!
//! CLI command implementations for tabgen.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

pub mod check;
pub mod generate;
pub mod install;

pub use self::{
    check::execute as check,
    generate::{execute as generate, GenerateArgs},
    install::execute as install,
};

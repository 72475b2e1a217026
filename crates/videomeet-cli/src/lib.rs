//! videomeet CLI: loads config and meetings documents, renders the core's output.

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod input;
pub mod render;

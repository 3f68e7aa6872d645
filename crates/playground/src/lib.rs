//! WebGAL Parser Playground.
//!
//! A headless playground for WebGAL scene scripts: parse a script, publish the
//! parse tree as JSON, and map script lines to the output nodes that represent
//! them. Provides both a CLI application and a library.

#![forbid(unsafe_code)]

// Public modules for library usage
pub mod config;
pub mod domain;
pub mod error;
pub mod parser;
pub mod provider;
pub mod session;

// Public CLI module (needed by binary)
pub mod cli;

// Output formatting
pub mod output;

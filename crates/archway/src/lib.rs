//! Archway - cross-team sprint dependency visualization from the terminal.
//!
//! This crate provides the CLI around `archway-layout`: it reads a board
//! dependency payload (JSON file or stdin), runs the layout engine, and
//! prints the resulting grid, relation list, or cycle report.

#![forbid(unsafe_code)]

pub mod cli;
pub mod output;

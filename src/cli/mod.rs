//! CLI infrastructure for the lookahead tool
//!
//! This module provides the command-line interface for analyzing positions
//! and playing interactive games.

pub mod commands;
pub mod output;

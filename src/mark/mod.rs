//! Main module for mark library functionality

pub mod ast;
pub mod blocks;
pub mod options;
pub mod parser;
pub mod source;
pub mod state;

//! Main module for registry library functionality

pub mod ast;
pub mod backend;
pub mod formats;
pub mod lexing;
pub mod loader;
pub mod parsing;
pub mod testing;
pub mod token;

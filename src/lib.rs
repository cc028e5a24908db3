pub mod config;
pub mod engine;
pub mod error;
pub mod export;
pub mod input;
pub mod session;
pub mod tokenizer;
// cmd and reports belong to the binary.

pub mod error;
pub mod parse;
pub mod report;
pub mod validate;
pub mod wasm;

pub mod identifier;
pub mod parse;

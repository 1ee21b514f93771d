pub mod adaptors;
pub mod parser;
pub mod payload;

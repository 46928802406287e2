pub mod decoding;
pub mod evaluation;
pub mod search;

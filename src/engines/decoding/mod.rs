pub mod chromosome;
pub mod decoder;

pub use chromosome::Chromosome;
pub use decoder::Decoder;

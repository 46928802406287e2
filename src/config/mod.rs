pub mod evaluation;
pub mod manager;
pub mod population;
pub mod search;
pub mod traits;

pub use evaluation::EvaluationConfig;
pub use manager::{AppConfig, ConfigManager};
pub use population::PopulationConfig;
pub use search::SearchConfig;

pub mod driver;
pub mod evolver;
pub mod local_search;
pub mod progress;
pub mod rkga;

pub use driver::{CancelToken, DriverReport, SearchDriver};
pub use evolver::{Evolver, Objective};
pub use local_search::{ElitePerturbation, LocalSearch, NoRefinement};
pub use progress::{ChannelProgress, LogProgress, ProgressCallback, ProgressMessage};
pub use rkga::RandomKeyGa;

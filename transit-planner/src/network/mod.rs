//! Network representations.
//!
//! Both networks are adjacency matrices over the same station index space.
//! A zero entry means "no link". Shape is validated once at construction,
//! so the planner can index freely afterwards.

mod error;
mod load;
mod matrix;
mod timetabled;
mod weighted;

pub use error::NetworkError;
pub use load::{load_static, load_timetabled};
pub use matrix::Matrix;
pub use timetabled::TimetabledNetwork;
pub use weighted::StaticNetwork;

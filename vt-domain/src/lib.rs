pub mod catalog;
pub mod economy;
pub mod model;
pub mod routes;

pub use catalog::*;
pub use economy::*;
pub use model::*;
pub use routes::*;

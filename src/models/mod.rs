pub mod field_profile;
pub mod recommendation;
pub mod resource_plan;
pub mod scenario;
pub mod variety;

pub use field_profile::*;
pub use recommendation::*;
pub use resource_plan::*;
pub use scenario::*;
pub use variety::*;

//! Domain models for the HatWorks manufacturing platform

pub mod batch;
pub mod dashboard;
pub mod inspection;
pub mod material;
pub mod product;
pub mod request;

pub use batch::*;
pub use dashboard::*;
pub use inspection::*;
pub use material::*;
pub use product::*;
pub use request::*;

pub mod patterns;
pub mod request;
pub mod response;
pub mod style;

pub use patterns::*;
pub use request::*;
pub use response::*;
pub use style::*;

pub mod error;
pub mod showcase;

pub use error::ShowcaseError;

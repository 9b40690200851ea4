pub mod csv;
pub mod description;
pub mod traits;

pub mod prelude {
    pub use super::csv::prelude::*;
    pub use super::description::prelude::*;
    pub use super::traits::DescriptionParser;
}

mod derive_display_items;
mod error;
mod filter_display_items;
mod load_display_items;
mod reference_point;

#[cfg(test)]
pub mod tests;

pub use self::{
    derive_display_items::*, error::Error, filter_display_items::*, load_display_items::*,
    reference_point::*,
};

mod prelude {
    pub use super::error::Error;
    pub type Result<T> = std::result::Result<T, Error>;
    pub use crate::{entities::*, repositories::*};
}

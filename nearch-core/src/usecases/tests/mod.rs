use super::prelude::*;
use std::cell::{Cell, RefCell};

type RepoResult<T> = std::result::Result<T, RepoError>;

pub use crate::repositories::Error as RepoError;

#[derive(Debug, Default)]
pub struct MockDb {
    pub places: RefCell<Vec<PlaceRecord>>,
    pub unavailable: Cell<bool>,
}

impl PlaceRepo for MockDb {
    fn all_places(&self) -> RepoResult<Vec<PlaceRecord>> {
        if self.unavailable.get() {
            return Err(RepoError::Other(anyhow::anyhow!("Store unavailable")));
        }
        Ok(self.places.borrow().clone())
    }
}

use std::sync::Arc;

use crate::domain::{
    dict::ports::DictRepository,
    mapping::{DictFieldMapper, UserFieldMapper},
    user::ports::UserRepository,
};

/// Application service over the repositories, shared behind `Arc`s.
#[derive(Clone)]
pub struct Service<U, D>
where
    U: UserRepository,
    D: DictRepository,
{
    pub(crate) user_repository: U,
    pub(crate) dict_repository: D,
    pub(crate) user_mapper: Arc<UserFieldMapper>,
    pub(crate) dict_mapper: Arc<DictFieldMapper>,
}

impl<U, D> Service<U, D>
where
    U: UserRepository,
    D: DictRepository,
{
    pub fn new(user_repository: U, dict_repository: D) -> Self {
        Self {
            user_repository,
            dict_repository,
            user_mapper: Arc::new(UserFieldMapper::new()),
            dict_mapper: Arc::new(DictFieldMapper::new()),
        }
    }
}

use std::{rc::Rc, sync::Arc};

use crate::domain::User;

/// Storage for users.
///
/// `save` returns the stored entity, which is usually the user that was
/// passed in. Failures are reported as `anyhow::Error` and are not
/// interpreted by callers.
pub trait UserRepository {
    fn save(&self, user: User) -> Result<User, anyhow::Error>;
}

impl<R: UserRepository + ?Sized> UserRepository for &R {
    fn save(&self, user: User) -> Result<User, anyhow::Error> {
        (**self).save(user)
    }
}

impl<R: UserRepository + ?Sized> UserRepository for Box<R> {
    fn save(&self, user: User) -> Result<User, anyhow::Error> {
        (**self).save(user)
    }
}

impl<R: UserRepository + ?Sized> UserRepository for Rc<R> {
    fn save(&self, user: User) -> Result<User, anyhow::Error> {
        (**self).save(user)
    }
}

impl<R: UserRepository + ?Sized> UserRepository for Arc<R> {
    fn save(&self, user: User) -> Result<User, anyhow::Error> {
        (**self).save(user)
    }
}

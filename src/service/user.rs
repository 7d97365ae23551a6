use crate::domain::User;
use crate::repository::UserRepository;

/// Builds users and hands them to the injected repository.
pub struct UserService<R> {
    user_repository: R,
}

impl<R: UserRepository> UserService<R> {
    pub fn new(user_repository: R) -> Self {
        Self { user_repository }
    }

    pub fn repository(&self) -> &R {
        &self.user_repository
    }

    /// Saves a user made of `username` and `password` and returns whatever
    /// the repository returned. Repository errors are passed back untouched.
    #[tracing::instrument(
        name = "Creating a new user",
        skip(self, username, password),
        fields(user_name = %username)
    )]
    pub fn create_new_user(
        &self,
        username: String,
        password: String,
    ) -> Result<User, anyhow::Error> {
        let user = User::new(username, password);

        self.user_repository.save(user).inspect_err(|e| {
            tracing::error!(error.cause_chain = ?e, "Failed to save the new user");
        })
    }
}

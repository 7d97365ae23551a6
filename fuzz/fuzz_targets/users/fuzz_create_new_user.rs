// Run with: cargo fuzz run fuzz_create_new_user
// Purpose: Arbitrary credentials must reach the repository byte for byte
#![no_main]

use std::cell::RefCell;

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use usersvc::domain::User;
use usersvc::repository::UserRepository;
use usersvc::service::UserService;

#[derive(Arbitrary, Debug)]
struct Credentials {
    username: String,
    password: String,
}

#[derive(Default)]
struct CapturingRepository {
    saved: RefCell<Vec<User>>,
}

impl UserRepository for CapturingRepository {
    fn save(&self, user: User) -> Result<User, anyhow::Error> {
        self.saved.borrow_mut().push(user.clone());
        Ok(user)
    }
}

fuzz_target!(|input: Credentials| {
    let service = UserService::new(CapturingRepository::default());
    let expected = User::new(input.username.clone(), input.password.clone());

    let returned = service
        .create_new_user(input.username, input.password)
        .expect("Capturing repository never fails");

    assert_eq!(returned, expected);
    assert_eq!(*service.repository().saved.borrow(), vec![expected]);
});

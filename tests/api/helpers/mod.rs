
pub use fixture::*;
pub use user::*;

use std::sync::OnceLock;
use usersvc::configuration;
use usersvc::service::UserService;
use usersvc::telemetry;

// Ensure that the `tracing` stack is only initialised once using `OnceLock`
static TRACING: OnceLock<()> = OnceLock::new();

pub fn init_tracing() {
    TRACING.get_or_init(|| {
        let settings = configuration::get_config()
            .expect("Failed to read configuration.")
            .application;

        // If TEST_LOG env variable is set then output the logs to stdout while running tests
        if std::env::var("TEST_LOG").is_ok() {
            let subscriber = telemetry::get_subscriber_for(settings, std::io::stdout);
            telemetry::init_subscriber(subscriber);
        } else {
            let subscriber = telemetry::get_subscriber_for(settings, std::io::sink);
            telemetry::init_subscriber(subscriber);
        };
    });
}

pub struct TestApp {
    pub user_service: UserService<RecordingUserRepository>,
}

impl TestApp {
    pub fn repository(&self) -> &RecordingUserRepository {
        self.user_service.repository()
    }
}

pub fn spawn_app() -> TestApp {
    init_tracing();

    TestApp {
        user_service: UserService::new(RecordingUserRepository::default()),
    }
}

pub fn spawn_app_with(repository: RecordingUserRepository) -> TestApp {
    init_tracing();

    TestApp {
        user_service: UserService::new(repository),
    }
}

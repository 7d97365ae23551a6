// Run with: cargo fuzz run fuzz_user_json
// Purpose: Deserializing a user from untrusted JSON must never panic
#![no_main]

use libfuzzer_sys::fuzz_target;
use usersvc::domain::User;

fuzz_target!(|data: &[u8]| {
    if let Ok(user) = serde_json::from_slice::<User>(data) {
        // Debug output must stay printable for any accepted input
        let _ = format!("{user:?}");
    }
});

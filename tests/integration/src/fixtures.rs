//! Test fixtures and data generators
//!
//! Provides reusable test data for integration tests.

use std::sync::atomic::{AtomicU64, Ordering};

use horacio_bot::{CommandOption, Invoker};
use horacio_core::Snowflake;

/// Counter for unique test data
static COUNTER: AtomicU64 = AtomicU64::new(1);

/// Get a unique suffix for test data
pub fn unique_suffix() -> u64 {
    COUNTER.fetch_add(1, Ordering::SeqCst)
}

/// Snowflake unlikely to collide with other test runs sharing a database
pub fn unique_snowflake() -> Snowflake {
    let process = u64::from(std::process::id());
    Snowflake::from_u64((process << 20) | unique_suffix())
}

/// Character name that is unique and passes the name rules (letters only)
pub fn unique_name(prefix: &str) -> String {
    let mut n = unique_suffix();
    let mut tag = String::new();
    loop {
        tag.push(char::from(b'a' + u8::try_from(n % 26).unwrap_or(0)));
        n /= 26;
        if n == 0 {
            break;
        }
    }
    format!("{prefix} {tag}")
}

/// A Discord user in a test guild
#[derive(Debug, Clone)]
pub struct TestUser {
    pub id: Snowflake,
    pub username: String,
    pub guild_id: Snowflake,
}

impl TestUser {
    pub fn unique() -> Self {
        let id = unique_snowflake();
        Self {
            id,
            username: format!("player{id}"),
            guild_id: Snowflake::new(4242),
        }
    }

    pub fn invoker(&self) -> Invoker {
        Invoker::new(self.id, self.username.clone()).in_guild(self.guild_id)
    }
}

/// String command option
pub fn opt_str(name: &str, value: &str) -> (String, CommandOption) {
    (name.to_string(), CommandOption::String(value.to_string()))
}

/// Integer command option
pub fn opt_int(name: &str, value: i64) -> (String, CommandOption) {
    (name.to_string(), CommandOption::Integer(value))
}

/// Boolean command option
pub fn opt_bool(name: &str, value: bool) -> (String, CommandOption) {
    (name.to_string(), CommandOption::Boolean(value))
}

// Primitives the core needs from the environment: wall-clock time and identity.
//
// Both are traits so services can be driven deterministically in tests.

use chrono::{DateTime, Utc};
use uuid::Uuid;

pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Produces opaque identifiers for new records.
pub trait IdGenerator: Send + Sync {
    fn next_id(&self) -> String;
}

/// Time-ordered UUIDs, unique across the process lifetime.
#[derive(Debug, Default, Clone, Copy)]
pub struct UuidV7Ids;

impl IdGenerator for UuidV7Ids {
    fn next_id(&self) -> String {
        Uuid::now_v7().to_string()
    }
}

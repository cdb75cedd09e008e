use chrono::{DateTime, Utc};

use crate::modules::users::core::user::{NewUser, UpdateFields, User};

pub fn register(id: String, input: NewUser, now: DateTime<Utc>) -> User {
    User {
        id,
        name: input.name,
        address: input.address,
        nickname: input.nickname,
        version: 1,
        created_at: now,
        updated_at: now,
    }
}

/// Merges `fields` into `user` and bumps the version by one.
///
/// `updated_at` never moves backwards, even if the clock does.
pub fn apply_update(user: User, fields: UpdateFields, now: DateTime<Utc>) -> User {
    User {
        name: fields.name.unwrap_or(user.name),
        address: fields.address.unwrap_or(user.address),
        nickname: fields.nickname.unwrap_or(user.nickname),
        version: user.version + 1,
        updated_at: now.max(user.updated_at),
        ..user
    }
}

use crate::modules::users::core::user::{NewUser, User};
use chrono::{TimeZone, Utc};

pub struct NewUserBuilder {
    inner: NewUser,
}

impl Default for NewUserBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[allow(dead_code)]
impl NewUserBuilder {
    pub fn new() -> Self {
        Self {
            inner: NewUser {
                name: "Ayrton".to_string(),
                address: "Pringles".to_string(),
                nickname: "Chiche".to_string(),
            },
        }
    }

    pub fn name(mut self, v: impl Into<String>) -> Self {
        self.inner.name = v.into();
        self
    }

    pub fn address(mut self, v: impl Into<String>) -> Self {
        self.inner.address = v.into();
        self
    }

    pub fn nickname(mut self, v: impl Into<String>) -> Self {
        self.inner.nickname = v.into();
        self
    }

    pub fn build(self) -> NewUser {
        self.inner
    }
}

/// A stored record at version 1, as the service would produce it.
pub fn make_user(id: &str) -> User {
    let at = Utc.timestamp_millis_opt(1_700_000_000_000).unwrap();
    let input = NewUserBuilder::new().build();
    User {
        id: id.to_string(),
        name: input.name,
        address: input.address,
        nickname: input.nickname,
        version: 1,
        created_at: at,
        updated_at: at,
    }
}

#[cfg(test)]
mod new_user_builder_tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn setters_override_all_fields_and_build_returns_inner() {
        let custom = NewUserBuilder::new()
            .name("Emerson")
            .address("Sao Paulo")
            .nickname("Emmo")
            .build();
        assert_eq!(custom.name, "Emerson");
        assert_eq!(custom.address, "Sao Paulo");
        assert_eq!(custom.nickname, "Emmo");
    }
}

use async_graphql::{Context, ErrorExtensions, ID, Object, Result as GqlResult, SimpleObject};

use crate::modules::users::application::errors::UserServiceError;
use crate::modules::users::core::user::{NewUser, UpdateFields, User};
use crate::shell::state::AppState;

#[derive(SimpleObject)]
#[graphql(name = "User")]
pub struct UserNode {
    pub id: ID,
    pub name: String,
    pub address: String,
    pub nickname: String,
    pub version: u64,
    pub created_at: String,
    pub updated_at: String,
}

impl From<User> for UserNode {
    fn from(user: User) -> Self {
        UserNode {
            id: ID(user.id),
            name: user.name,
            address: user.address,
            nickname: user.nickname,
            version: user.version,
            created_at: user.created_at.to_rfc3339(),
            updated_at: user.updated_at.to_rfc3339(),
        }
    }
}

fn to_graphql_error(err: UserServiceError) -> async_graphql::Error {
    let code = if err.is_not_found() {
        "NOT_FOUND"
    } else {
        tracing::error!(error = %err, "user service failure");
        "INTERNAL"
    };
    async_graphql::Error::new(err.to_string()).extend_with(|_, e| e.set("code", code))
}

pub struct QueryRoot;

#[Object]
impl QueryRoot {
    async fn user(&self, context: &Context<'_>, id: ID) -> GqlResult<UserNode> {
        let state = context.data_unchecked::<AppState>();
        state
            .users
            .get(&id)
            .await
            .map(UserNode::from)
            .map_err(to_graphql_error)
    }
}

pub struct MutationRoot;

#[Object]
impl MutationRoot {
    async fn create_user(
        &self,
        context: &Context<'_>,
        name: String,
        address: String,
        nickname: String,
    ) -> GqlResult<UserNode> {
        let state = context.data_unchecked::<AppState>();
        let input = NewUser {
            name,
            address,
            nickname,
        };
        let user = state.users.create(input).await.map_err(to_graphql_error)?;
        tracing::info!(user_id = %user.id, "user created");
        Ok(user.into())
    }

    async fn update_user(
        &self,
        context: &Context<'_>,
        id: ID,
        name: Option<String>,
        address: Option<String>,
        nickname: Option<String>,
    ) -> GqlResult<UserNode> {
        let state = context.data_unchecked::<AppState>();
        let fields = UpdateFields {
            name,
            address,
            nickname,
        };
        state
            .users
            .update(&id, fields)
            .await
            .map(UserNode::from)
            .map_err(to_graphql_error)
    }

    async fn delete_user(&self, context: &Context<'_>, id: ID) -> GqlResult<bool> {
        let state = context.data_unchecked::<AppState>();
        state.users.delete(&id).await.map_err(to_graphql_error)?;
        Ok(true)
    }
}

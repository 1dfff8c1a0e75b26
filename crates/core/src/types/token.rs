//! Access tokens issued on login.

use serde::Serialize;

use crate::store::Entity;
use crate::types::TokenId;

/// A token before it is stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewToken {
    pub username: String,
    pub token: String,
}

/// A stored token. Serializes as `{ "username", "token" }`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Token {
    #[serde(skip_serializing)]
    pub id: TokenId,
    #[serde(flatten)]
    pub attrs: NewToken,
}

impl Entity for Token {
    type Id = TokenId;
    type New = NewToken;

    fn from_new(id: Self::Id, new: Self::New) -> Self {
        Self { id, attrs: new }
    }

    fn id(&self) -> Self::Id {
        self.id
    }
}

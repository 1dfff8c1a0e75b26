//! Shoppers who can log in.
//!
//! User fixtures follow the randomuser.me shape. Only the `login` block is
//! interpreted; everything else is kept as opaque profile JSON.

use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Deserializer};
use serde_json::{Map, Value};

use crate::store::Entity;
use crate::types::UserId;

/// Login credentials for a user.
///
/// Passwords are stored in plaintext (this is a mock backend) but wrapped in
/// `SecretString` so they never show up in `Debug` output or logs.
#[derive(Debug, Clone, Deserialize)]
pub struct Login {
    pub username: String,
    #[serde(deserialize_with = "deserialize_secret")]
    pub password: SecretString,
    /// Remaining login fields (salt, hashes, ...), unused.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Login {
    /// Exact, case-sensitive match on both username and password.
    #[must_use]
    pub fn matches(&self, username: &str, password: &str) -> bool {
        self.username == username && self.password.expose_secret() == password
    }
}

fn deserialize_secret<'de, D>(deserializer: D) -> Result<SecretString, D::Error>
where
    D: Deserializer<'de>,
{
    String::deserialize(deserializer).map(SecretString::from)
}

/// A user before it has an ID.
#[derive(Debug, Clone, Deserialize)]
pub struct NewUser {
    pub login: Login,
    #[serde(flatten)]
    pub profile: Map<String, Value>,
}

/// A stored user.
#[derive(Debug, Clone)]
pub struct User {
    pub id: UserId,
    pub login: Login,
    pub profile: Map<String, Value>,
}

impl Entity for User {
    type Id = UserId;
    type New = NewUser;

    fn from_new(id: Self::Id, new: Self::New) -> Self {
        Self {
            id,
            login: new.login,
            profile: new.profile,
        }
    }

    fn id(&self) -> Self::Id {
        self.id
    }
}

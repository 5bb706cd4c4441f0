//! Scopes over which a concurrency limit applies, and the identifiers that
//! key them.

use serde::{Deserialize, Serialize};

macro_rules! string_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl From<&str> for $name {
            fn from(id: &str) -> Self {
                Self(id.to_string())
            }
        }

        impl From<String> for $name {
            fn from(id: String) -> Self {
                Self(id)
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(&self.0)
            }
        }
    };
}

string_id!(
    /// Identifier of a connection definition.
    ConnectionId
);

string_id!(
    /// Identifier of a connection group.
    GroupId
);

string_id!(
    /// Identifier of a user.
    UserId
);

/// A limit scope. Variants are declared in evaluation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Scope {
    /// Every connection through the gateway.
    Global,
    /// One connection definition.
    Connection,
    /// One connection group.
    Group,
    /// One user on one connection.
    UserConnection,
    /// One user within one group.
    UserGroup,
}

impl Scope {
    pub const ALL: [Scope; 5] = [
        Scope::Global,
        Scope::Connection,
        Scope::Group,
        Scope::UserConnection,
        Scope::UserGroup,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Scope::Global => "global",
            Scope::Connection => "connection",
            Scope::Group => "group",
            Scope::UserConnection => "user_connection",
            Scope::UserGroup => "user_group",
        }
    }

    /// Name of the denial reason reported when this scope is exceeded.
    pub fn exceeded_reason(&self) -> &'static str {
        match self {
            Scope::Global => "GlobalLimitExceeded",
            Scope::Connection => "ConnectionLimitExceeded",
            Scope::Group => "GroupLimitExceeded",
            Scope::UserConnection => "UserConnectionLimitExceeded",
            Scope::UserGroup => "UserGroupLimitExceeded",
        }
    }
}

impl std::fmt::Display for Scope {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A concrete scope instance: the key under which live counts and overrides
/// are stored.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ScopeKey {
    Global,
    Connection(ConnectionId),
    Group(GroupId),
    UserConnection(UserId, ConnectionId),
    UserGroup(UserId, GroupId),
}

impl ScopeKey {
    pub fn scope(&self) -> Scope {
        match self {
            ScopeKey::Global => Scope::Global,
            ScopeKey::Connection(_) => Scope::Connection,
            ScopeKey::Group(_) => Scope::Group,
            ScopeKey::UserConnection(..) => Scope::UserConnection,
            ScopeKey::UserGroup(..) => Scope::UserGroup,
        }
    }
}

impl std::fmt::Display for ScopeKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ScopeKey::Global => write!(f, "global"),
            ScopeKey::Connection(c) => write!(f, "connection:{c}"),
            ScopeKey::Group(g) => write!(f, "group:{g}"),
            ScopeKey::UserConnection(u, c) => write!(f, "user:{u}/connection:{c}"),
            ScopeKey::UserGroup(u, g) => write!(f, "user:{u}/group:{g}"),
        }
    }
}

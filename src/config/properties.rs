//! Property names read from the configuration source.
//!
//! Names are kebab-case. A source may prepend a backend prefix
//! (e.g. `postgresql-absolute-max-connections`).

/// Maximum concurrent connections overall. Cannot be overridden per entity.
pub const ABSOLUTE_MAX_CONNECTIONS: &str = "absolute-max-connections";

/// Default maximum concurrent connections to any one connection.
pub const DEFAULT_MAX_CONNECTIONS: &str = "default-max-connections";

/// Default maximum concurrent connections to any one connection group.
pub const DEFAULT_MAX_GROUP_CONNECTIONS: &str = "default-max-group-connections";

/// Default maximum concurrent connections to any one connection by one user.
pub const DEFAULT_MAX_CONNECTIONS_PER_USER: &str = "default-max-connections-per-user";

/// Default maximum concurrent connections to any one group by one user.
pub const DEFAULT_MAX_GROUP_CONNECTIONS_PER_USER: &str = "default-max-group-connections-per-user";

/// Whether a database user account is required for every authentication.
pub const USER_REQUIRED: &str = "user-required";

/// All limit properties, in scope evaluation order.
pub const LIMIT_PROPERTIES: [&str; 5] = [
    ABSOLUTE_MAX_CONNECTIONS,
    DEFAULT_MAX_CONNECTIONS,
    DEFAULT_MAX_GROUP_CONNECTIONS,
    DEFAULT_MAX_CONNECTIONS_PER_USER,
    DEFAULT_MAX_GROUP_CONNECTIONS_PER_USER,
];

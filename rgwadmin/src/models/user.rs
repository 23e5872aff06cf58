use std::fmt;

use serde::{Deserialize, Serialize};

/// A gateway user as returned by `/user`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UserInfo {
    /// Tenant qualified user id.
    pub user_id: String,
    /// Display name.
    pub display_name: String,
    /// Email address, empty if unset.
    pub email: String,
    /// `1` when the user is suspended.
    pub suspended: u8,
    /// Maximum number of buckets the user may own.
    pub max_buckets: i64,
    /// Subusers of the user.
    pub subusers: Vec<SubUserInfo>,
    /// S3 keys.
    pub keys: Vec<KeyInfo>,
    /// Swift keys.
    pub swift_keys: Vec<SwiftKeyInfo>,
    /// Admin capabilities.
    pub caps: Vec<UserCap>,
    /// Operations the user may perform, e.g. `read, write, delete`.
    pub op_mask: String,
    /// Default placement target.
    pub default_placement: String,
    /// Quota applied to each bucket of the user.
    pub bucket_quota: Quota,
    /// Quota applied to the user as a whole.
    pub user_quota: Quota,
    /// Account type, e.g. `rgw` or `ldap`.
    #[serde(rename = "type")]
    pub user_type: String,
    /// Storage statistics, only present when requested with `stats=true`.
    pub stats: Option<UserStats>,
}

/// A subuser of a gateway user.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SubUserInfo {
    /// Subuser id as `uid:name`.
    pub id: String,
    /// Granted permissions, e.g. `full-control`.
    pub permissions: String,
}

impl fmt::Display for SubUserInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.id)
    }
}

/// An S3 key pair.
#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct KeyInfo {
    /// Owner of the key, user or subuser id.
    pub user: String,
    /// Access key id.
    pub access_key: String,
    /// Secret key.
    pub secret_key: String,
}

impl fmt::Debug for KeyInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KeyInfo")
            .field("user", &self.user)
            .field("access_key", &self.access_key)
            .field(
                "secret_key",
                &rgwadmin_core::utils::Redact::from(&self.secret_key),
            )
            .finish()
    }
}

/// A swift secret.
#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SwiftKeyInfo {
    /// Owner of the key, usually a subuser id.
    pub user: String,
    /// Secret key.
    pub secret_key: String,
}

impl fmt::Debug for SwiftKeyInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SwiftKeyInfo")
            .field("user", &self.user)
            .field(
                "secret_key",
                &rgwadmin_core::utils::Redact::from(&self.secret_key),
            )
            .finish()
    }
}

/// An admin capability like `usage=read`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UserCap {
    /// Capability type, e.g. `usage`, `users`, `buckets`, `metadata`.
    #[serde(rename = "type")]
    pub cap_type: String,
    /// `read`, `write` or `*`.
    pub perm: String,
}

impl fmt::Display for UserCap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}={}", self.cap_type, self.perm)
    }
}

/// Storage usage of a user.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UserStats {
    pub size: u64,
    pub size_actual: u64,
    pub size_utilized: u64,
    pub size_kb: u64,
    pub size_kb_actual: u64,
    pub size_kb_utilized: u64,
    pub num_objects: u64,
}

/// A user or bucket quota.
///
/// Negative limits mean unlimited.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Quota {
    /// Is the quota enforced?
    pub enabled: bool,
    /// Account raw sizes instead of rounded ones.
    pub check_on_raw: bool,
    /// Size limit in bytes.
    pub max_size: i64,
    /// Size limit in KiB.
    pub max_size_kb: i64,
    /// Object count limit.
    pub max_objects: i64,
}

impl Quota {
    /// An enabled quota with the given limits, `None` for unlimited.
    pub fn limited(max_size: Option<i64>, max_objects: Option<i64>) -> Self {
        let max_size = max_size.unwrap_or(-1);
        Self {
            enabled: true,
            check_on_raw: false,
            max_size,
            max_size_kb: if max_size < 0 { 0 } else { max_size / 1024 },
            max_objects: max_objects.unwrap_or(-1),
        }
    }
}

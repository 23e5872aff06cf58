use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::Quota;

/// Bucket details as returned by `/bucket?stats=true`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BucketInfo {
    /// Bucket name.
    pub bucket: String,
    /// Number of index shards.
    pub num_shards: u32,
    /// Tenant of the bucket, empty for the default tenant.
    pub tenant: String,
    /// Zonegroup id.
    pub zonegroup: String,
    /// Placement rule, e.g. `default-placement`.
    pub placement_rule: String,
    /// Bucket instance id.
    pub id: String,
    /// Bucket marker.
    pub marker: String,
    /// Index type, e.g. `Normal`.
    pub index_type: String,
    /// Owning user id.
    pub owner: String,
    /// Index version per shard.
    pub ver: String,
    /// Master index version per shard.
    pub master_ver: String,
    /// Last modification time.
    pub mtime: String,
    /// Creation time.
    pub creation_time: String,
    /// Highest marker per shard.
    pub max_marker: String,
    /// Usage per storage category, e.g. `rgw.main`.
    pub usage: BTreeMap<String, BucketUsage>,
    /// Quota applied to this bucket.
    pub bucket_quota: Quota,
}

/// Usage of one storage category of a bucket.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BucketUsage {
    pub size: u64,
    pub size_actual: u64,
    pub size_utilized: u64,
    pub size_kb: u64,
    pub size_kb_actual: u64,
    pub size_kb_utilized: u64,
    pub num_objects: u64,
}

/// Access policy of a bucket or object.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BucketPolicy {
    /// Access control list.
    pub acl: BucketPolicyAcl,
    /// Owner of the resource.
    pub owner: PolicyOwner,
}

/// Access control list of a policy.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BucketPolicyAcl {
    /// Permission bits per group.
    pub acl_group_map: Vec<AclGroupEntry>,
    /// Permission bits per user.
    pub acl_user_map: Vec<AclUserEntry>,
    /// Individual grants.
    pub grant_map: Vec<AclGrantEntry>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AclGroupEntry {
    pub group: u32,
    pub acl: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AclUserEntry {
    pub user: String,
    pub acl: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AclGrantEntry {
    pub id: String,
    pub grant: AclGrant,
}

/// A single grant of an access control list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AclGrant {
    #[serde(rename = "type")]
    pub grant_type: AclGrantType,
    pub id: String,
    pub email: String,
    pub permission: AclPermission,
    pub name: String,
    pub group: u32,
    pub url_spec: String,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AclGrantType {
    #[serde(rename = "type")]
    pub grant_type: u32,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AclPermission {
    pub flags: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PolicyOwner {
    pub id: String,
    pub display_name: String,
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_decode_policy() -> serde_json::Result<()> {
        let policy: BucketPolicy = serde_json::from_str(
            r#"{
                "acl": {
                    "acl_user_map": [{"user": "alice", "acl": 15}],
                    "acl_group_map": [{"group": 1, "acl": 1}],
                    "grant_map": [{
                        "id": "alice",
                        "grant": {
                            "type": {"type": 0},
                            "id": "alice",
                            "email": "",
                            "permission": {"flags": 15},
                            "name": "Alice",
                            "group": 0,
                            "url_spec": ""
                        }
                    }]
                },
                "owner": {"id": "alice", "display_name": "Alice"}
            }"#,
        )?;

        assert_eq!(policy.owner.display_name, "Alice");
        assert_eq!(policy.acl.acl_user_map[0].acl, 15);
        assert_eq!(policy.acl.acl_group_map[0].group, 1);
        assert_eq!(policy.acl.grant_map[0].grant.permission.flags, 15);
        assert_eq!(policy.acl.grant_map[0].grant.grant_type.grant_type, 0);
        Ok(())
    }

    #[test]
    fn test_decode_bucket_info_usage() -> serde_json::Result<()> {
        let info: BucketInfo = serde_json::from_str(
            r#"{
                "bucket": "photos",
                "num_shards": 11,
                "placement_rule": "default-placement",
                "id": "6e7a3b7c.4167.1",
                "owner": "alice",
                "usage": {
                    "rgw.main": {"size": 2048, "size_actual": 8192, "num_objects": 2}
                },
                "bucket_quota": {"enabled": false, "max_size": -1, "max_objects": -1}
            }"#,
        )?;

        assert_eq!(info.bucket, "photos");
        assert_eq!(info.usage["rgw.main"].num_objects, 2);
        assert_eq!(info.usage["rgw.main"].size_kb, 0);
        assert_eq!(info.bucket_quota.max_size, -1);
        assert!(info.tenant.is_empty());
        Ok(())
    }
}

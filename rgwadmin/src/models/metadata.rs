use serde::{Deserialize, Serialize};

use super::Quota;

/// A metadata entry returned by `/metadata/{section}?key=`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, bound(deserialize = "T: Deserialize<'de> + Default"))]
pub struct MetadataEntry<T> {
    /// Key of the entry, e.g. `bucket.instance:photos:6e7a3b7c.4167.1`.
    pub key: String,
    /// Object version used for optimistic concurrency.
    pub ver: MetadataVersion,
    /// Last modification time.
    pub mtime: String,
    /// Section specific payload.
    pub data: T,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MetadataVersion {
    pub tag: String,
    pub ver: u64,
}

/// Payload of a `bucket.instance` entry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MetadataBucketInstance {
    pub bucket_info: MetadataBucketInstanceInfo,
    /// Extended attributes, values are base64 encoded.
    pub attrs: Vec<MetadataAttr>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MetadataAttr {
    pub key: String,
    pub val: String,
}

/// Bucket instance description.
///
/// Several flags are rendered by the gateway as the strings `"true"` and
/// `"false"` and are kept as strings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MetadataBucketInstanceInfo {
    pub bucket: MetadataBucketInfo,
    pub creation_time: String,
    pub owner: String,
    pub flags: u32,
    pub zonegroup: String,
    pub placement_rule: String,
    pub has_instance_obj: String,
    pub quota: Quota,
    pub num_shards: u32,
    pub bi_shard_hash_type: u32,
    pub requester_pays: String,
    pub has_website: String,
    pub swift_versioning: String,
    pub swift_ver_location: String,
    pub index_type: u32,
    pub mdsearch_config: Vec<serde_json::Value>,
    pub reshard_status: u32,
    pub new_bucket_instance_id: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MetadataBucketInfo {
    pub name: String,
    pub marker: String,
    pub bucket_id: String,
    pub tenant: String,
    pub explicit_placement: ExplicitPlacement,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExplicitPlacement {
    pub data_pool: String,
    pub data_extra_pool: String,
    pub index_pool: String,
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_decode_bucket_instance() -> serde_json::Result<()> {
        let entry: MetadataEntry<MetadataBucketInstance> = serde_json::from_str(
            r#"{
                "key": "bucket.instance:photos:6e7a3b7c.4167.1",
                "ver": {"tag": "_mCQaXbU0LyEyB1vIUZxJaSY", "ver": 3},
                "mtime": "2024-01-01 00:00:00.000000Z",
                "data": {
                    "bucket_info": {
                        "bucket": {
                            "name": "photos",
                            "marker": "6e7a3b7c.4167.1",
                            "bucket_id": "6e7a3b7c.4167.1",
                            "tenant": "",
                            "explicit_placement": {"data_pool": "", "data_extra_pool": "", "index_pool": ""}
                        },
                        "owner": "alice",
                        "flags": 0,
                        "placement_rule": "default-placement",
                        "has_instance_obj": "true",
                        "quota": {"enabled": false, "check_on_raw": false, "max_size": -1, "max_size_kb": 0, "max_objects": -1},
                        "num_shards": 11,
                        "requester_pays": "false",
                        "mdsearch_config": [],
                        "new_bucket_instance_id": ""
                    },
                    "attrs": [{"key": "user.rgw.acl", "val": "AgK4AAAAAwIZAAAA"}]
                }
            }"#,
        )?;

        assert_eq!(entry.ver.ver, 3);
        let info = &entry.data.bucket_info;
        assert_eq!(info.bucket.name, "photos");
        assert_eq!(info.num_shards, 11);
        assert_eq!(info.has_instance_obj, "true");
        assert_eq!(info.quota.max_objects, -1);
        assert_eq!(entry.data.attrs[0].key, "user.rgw.acl");
        Ok(())
    }

    #[test]
    fn test_decode_generic_entry() -> serde_json::Result<()> {
        let entry: MetadataEntry<serde_json::Value> =
            serde_json::from_str(r#"{"key": "user:alice", "data": {"user_id": "alice"}}"#)?;
        assert_eq!(entry.key, "user:alice");
        assert_eq!(entry.data["user_id"], "alice");
        assert_eq!(entry.ver, MetadataVersion::default());
        Ok(())
    }
}

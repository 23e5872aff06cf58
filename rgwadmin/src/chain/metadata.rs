use rgwadmin_core::{validators, Parameter};

use super::decode_json;
use crate::models::{MetadataBucketInstance, MetadataEntry};

root_link! {
    /// Operations under `/metadata`.
    MetadataRootLink => "/metadata"
}

leaf_link! {
    /// `GET /metadata/{section}`
    ListMetadata: MetadataRootLink, GET => Vec<String>, decode_json
}

leaf_link! {
    /// `GET /metadata/{section}?key=`
    GetMetadata: MetadataRootLink, GET => MetadataEntry<serde_json::Value>, decode_json
}

leaf_link! {
    /// `GET /metadata/bucket.instance?key=`
    GetBucketInstanceMetadata: MetadataRootLink, GET => MetadataEntry<MetadataBucketInstance>, decode_json
}

const SECTION_URI: &str = "/{section}";

fn section(section: &str) -> Parameter {
    Parameter::path("section")
        .require_value()
        .with_validator(validators::metadata_section())
        .bind(section)
}

fn key(key: &str) -> Parameter {
    Parameter::query("key")
        .require_value()
        .require_not_empty()
        .with_validator(validators::string())
        .bind(key)
}

impl<'c> MetadataRootLink<'c> {
    /// List the keys of a section: `user`, `bucket` or `bucket.instance`.
    pub fn list(self, section: &str) -> ListMetadata<'c> {
        ListMetadata::new(self, vec![self::section(section)]).with_uri(SECTION_URI)
    }

    /// Get one entry of a section.
    pub fn get(self, section: &str, key: &str) -> GetMetadata<'c> {
        GetMetadata::new(self, vec![self::section(section), self::key(key)]).with_uri(SECTION_URI)
    }

    /// Get a bucket instance entry, `key` is `bucket:instance_id`.
    pub fn bucket_instance(self, key: &str) -> GetBucketInstanceMetadata<'c> {
        GetBucketInstanceMetadata::new(self, vec![self::section("bucket.instance"), self::key(key)])
            .with_uri(SECTION_URI)
    }
}

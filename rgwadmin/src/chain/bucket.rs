use rgwadmin_core::{validators, Parameter};

use super::{decode_empty, decode_json};
use crate::models::{BucketInfo, BucketPolicy};

root_link! {
    /// Operations under `/bucket`.
    BucketRootLink => "/bucket"
}

leaf_link! {
    /// `PUT /bucket?bucket=`
    CreateBucket: BucketRootLink, PUT => (), decode_empty
}

leaf_link! {
    /// `GET /bucket?bucket=&stats=true`
    GetBucketInfo: BucketRootLink, GET => BucketInfo, decode_json
}

leaf_link! {
    /// `GET /bucket?uid=`
    ListBuckets: BucketRootLink, GET => Vec<String>, decode_json
}

leaf_link! {
    /// `DELETE /bucket?bucket=`
    RemoveBucket: BucketRootLink, DELETE => (), decode_empty
}

leaf_link! {
    /// `PUT /bucket?bucket=&bucket-id=&uid=`
    LinkBucket: BucketRootLink, PUT => (), decode_empty
}

leaf_link! {
    /// `POST /bucket?bucket=&uid=`
    UnlinkBucket: BucketRootLink, POST => (), decode_empty
}

leaf_link! {
    /// `GET /bucket?index&bucket=`
    CheckBucketIndex: BucketRootLink, GET => serde_json::Value, decode_json
}

leaf_link! {
    /// `GET /bucket?policy&bucket=`
    GetBucketPolicy: BucketRootLink, GET => BucketPolicy, decode_json
}

leaf_link! {
    /// `DELETE /bucket?object&bucket=&object=`
    RemoveObject: BucketRootLink, DELETE => (), decode_empty
}

fn bucket(name: &str) -> Parameter {
    Parameter::query("bucket")
        .require_value()
        .require_not_empty()
        .with_validator(validators::bucket_name())
        .bind(name)
}

fn uid(uid: &str) -> Parameter {
    Parameter::query("uid")
        .require_value()
        .require_not_empty()
        .with_validator(validators::string())
        .bind(uid)
}

fn flag(name: &'static str, value: Option<bool>) -> Parameter {
    Parameter::query(name)
        .with_validator(validators::boolean())
        .bind_opt(value)
}

impl<'c> BucketRootLink<'c> {
    /// Create a bucket.
    pub fn create(self, bucket: &str) -> CreateBucket<'c> {
        CreateBucket::new(self, vec![self::bucket(bucket)])
    }

    /// Create a bucket with a canned ACL like `public-read`.
    pub fn create_with_acl(self, bucket: &str, acl: &str) -> CreateBucket<'c> {
        CreateBucket::new(
            self,
            vec![
                self::bucket(bucket),
                Parameter::header("x-amz-acl")
                    .require_value()
                    .with_validator(validators::canned_acl())
                    .bind(acl),
            ],
        )
    }

    /// Get a bucket with its usage stats.
    pub fn info(self, bucket: &str) -> GetBucketInfo<'c> {
        GetBucketInfo::new(self, vec![self::bucket(bucket), flag("stats", Some(true))])
    }

    /// List bucket names, of one user if `uid` is given.
    pub fn list(self, uid: Option<&str>) -> ListBuckets<'c> {
        ListBuckets::new(
            self,
            vec![Parameter::query("uid")
                .require_not_empty()
                .with_validator(validators::string())
                .bind_opt(uid)],
        )
    }

    /// Remove a bucket, with its objects if `purge_objects` is set.
    pub fn remove(self, bucket: &str, purge_objects: Option<bool>) -> RemoveBucket<'c> {
        RemoveBucket::new(
            self,
            vec![self::bucket(bucket), flag("purge-objects", purge_objects)],
        )
    }

    /// Link a bucket instance to a user.
    pub fn link(self, bucket: &str, bucket_id: &str, uid: &str) -> LinkBucket<'c> {
        LinkBucket::new(
            self,
            vec![
                self::bucket(bucket),
                Parameter::query("bucket-id")
                    .require_value()
                    .require_not_empty()
                    .with_validator(validators::string())
                    .bind(bucket_id),
                self::uid(uid),
            ],
        )
    }

    /// Unlink a bucket from a user.
    pub fn unlink(self, bucket: &str, uid: &str) -> UnlinkBucket<'c> {
        UnlinkBucket::new(self, vec![self::bucket(bucket), self::uid(uid)])
    }

    /// Check the bucket index, optionally checking objects and fixing it.
    pub fn check_index(
        self,
        bucket: &str,
        check_objects: Option<bool>,
        fix: Option<bool>,
    ) -> CheckBucketIndex<'c> {
        CheckBucketIndex::new(
            self,
            vec![
                Parameter::flag("index"),
                self::bucket(bucket),
                flag("check-objects", check_objects),
                flag("fix", fix),
            ],
        )
    }

    /// Get the policy of a bucket, or of one of its objects.
    pub fn policy(self, bucket: &str, object: Option<&str>) -> GetBucketPolicy<'c> {
        GetBucketPolicy::new(
            self,
            vec![
                Parameter::flag("policy"),
                self::bucket(bucket),
                Parameter::query("object")
                    .require_not_empty()
                    .with_validator(validators::string())
                    .bind_opt(object),
            ],
        )
    }

    /// Remove an object.
    pub fn remove_object(self, bucket: &str, object: &str) -> RemoveObject<'c> {
        RemoveObject::new(
            self,
            vec![
                Parameter::flag("object"),
                self::bucket(bucket),
                Parameter::query("object")
                    .require_value()
                    .require_not_empty()
                    .with_validator(validators::string())
                    .bind(object),
            ],
        )
    }
}

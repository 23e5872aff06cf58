//! Response models of the admin API.
//!
//! Field names follow the JSON emitted by the gateway. Every field is
//! defaulted, so documents from older or newer gateways that lack or add
//! fields still decode.

mod bucket;
pub use bucket::{
    AclGrant, AclGrantEntry, AclGrantType, AclGroupEntry, AclPermission, AclUserEntry,
    BucketInfo, BucketPolicy, BucketPolicyAcl, BucketUsage, PolicyOwner,
};

mod metadata;
pub use metadata::{
    ExplicitPlacement, MetadataAttr, MetadataBucketInfo, MetadataBucketInstance,
    MetadataBucketInstanceInfo, MetadataEntry, MetadataVersion,
};

mod usage;
pub use usage::{UsageBucket, UsageCategory, UsageEntry, UsageInfo, UsageSummary, UsageTotals};

mod user;
pub use user::{KeyInfo, Quota, SubUserInfo, SwiftKeyInfo, UserCap, UserInfo, UserStats};

use bytes::Bytes;
use rgwadmin_core::{validators, Parameter};

use super::{decode_empty, decode_json};
use crate::models::{KeyInfo, Quota, SubUserInfo, UserCap, UserInfo};

root_link! {
    /// Operations under `/user`.
    UserRootLink => "/user"
}

leaf_link! {
    /// `GET /user?uid=`
    GetUserInfo: UserRootLink, GET => UserInfo, decode_json
}

leaf_link! {
    /// `PUT /user?uid=&display-name=`
    CreateUser: UserRootLink, PUT => UserInfo, decode_json
}

leaf_link! {
    /// `POST /user?uid=`
    ModifyUser: UserRootLink, POST => UserInfo, decode_json
}

leaf_link! {
    /// `DELETE /user?uid=`
    RemoveUser: UserRootLink, DELETE => (), decode_empty
}

leaf_link! {
    /// `PUT /user?subuser&uid=&subuser=`
    CreateSubUser: UserRootLink, PUT => Vec<SubUserInfo>, decode_json
}

leaf_link! {
    /// `POST /user?subuser&uid=&subuser=`
    ModifySubUser: UserRootLink, POST => Vec<SubUserInfo>, decode_json
}

leaf_link! {
    /// `DELETE /user?subuser&uid=&subuser=`
    RemoveSubUser: UserRootLink, DELETE => (), decode_empty
}

leaf_link! {
    /// `PUT /user?key&uid=`
    CreateKey: UserRootLink, PUT => Vec<KeyInfo>, decode_json
}

leaf_link! {
    /// `DELETE /user?key&access-key=`
    RemoveKey: UserRootLink, DELETE => (), decode_empty
}

leaf_link! {
    /// `PUT /user?caps&uid=&user-caps=`
    AddCaps: UserRootLink, PUT => Vec<UserCap>, decode_json
}

leaf_link! {
    /// `DELETE /user?caps&uid=&user-caps=`
    RemoveCaps: UserRootLink, DELETE => Vec<UserCap>, decode_json
}

leaf_link! {
    /// `GET /user?quota&uid=&quota-type=`
    GetQuota: UserRootLink, GET => Quota, decode_json
}

leaf_link! {
    /// `PUT /user?quota&uid=&quota-type=` with the quota as JSON body.
    SetQuota: UserRootLink, PUT => (), decode_empty
}

/// Optional fields of [`UserRootLink::create`].
#[derive(Debug, Clone, Default)]
pub struct CreateUserOptions {
    pub email: Option<String>,
    /// `s3` or `swift`.
    pub key_type: Option<String>,
    pub access_key: Option<String>,
    pub secret_key: Option<String>,
    /// Caps like `usage=read;users=*`.
    pub user_caps: Option<String>,
    /// Generate a key pair, defaults to true on the gateway.
    pub generate_key: Option<bool>,
    pub max_buckets: Option<u32>,
    pub suspended: Option<bool>,
}

/// Fields of [`UserRootLink::modify`], unset fields are left unchanged.
#[derive(Debug, Clone, Default)]
pub struct ModifyUserOptions {
    pub display_name: Option<String>,
    pub email: Option<String>,
    pub key_type: Option<String>,
    pub access_key: Option<String>,
    pub secret_key: Option<String>,
    pub generate_key: Option<bool>,
    pub max_buckets: Option<u32>,
    pub suspended: Option<bool>,
}

/// Fields of the subuser operations.
#[derive(Debug, Clone, Default)]
pub struct SubUserOptions {
    pub secret_key: Option<String>,
    /// `s3` or `swift`.
    pub key_type: Option<String>,
    /// `read`, `write`, `readwrite` or `full`.
    pub access: Option<String>,
    pub generate_secret: Option<bool>,
}

/// Fields of [`UserRootLink::create_key`].
#[derive(Debug, Clone, Default)]
pub struct CreateKeyOptions {
    /// Create the key for this subuser instead of the user.
    pub subuser: Option<String>,
    /// `s3` or `swift`.
    pub key_type: Option<String>,
    pub access_key: Option<String>,
    pub secret_key: Option<String>,
    pub generate_key: Option<bool>,
}

fn uid(uid: &str) -> Parameter {
    required("uid", uid)
}

fn required(name: &'static str, value: &str) -> Parameter {
    Parameter::query(name)
        .require_value()
        .require_not_empty()
        .with_validator(validators::string())
        .bind(value)
}

fn optional(name: &'static str, value: Option<&String>) -> Parameter {
    Parameter::query(name)
        .require_not_empty()
        .with_validator(validators::string())
        .bind_opt(value)
}

fn boolean(name: &'static str, value: Option<bool>) -> Parameter {
    Parameter::query(name)
        .with_validator(validators::boolean())
        .bind_opt(value)
}

fn key_type(value: Option<&String>) -> Parameter {
    Parameter::query("key-type")
        .with_validator(validators::key_type())
        .bind_opt(value)
}

fn max_buckets(value: Option<u32>) -> Parameter {
    Parameter::query("max-buckets")
        .with_validator(validators::integer())
        .bind_opt(value)
}

fn quota_type(value: &str) -> Parameter {
    Parameter::query("quota-type")
        .require_value()
        .with_validator(validators::quota_type())
        .bind(value)
}

impl<'c> UserRootLink<'c> {
    /// Get a user, with storage stats if `stats` is set.
    pub fn info(self, uid: &str, stats: Option<bool>) -> GetUserInfo<'c> {
        GetUserInfo::new(self, vec![self::uid(uid), boolean("stats", stats)])
    }

    /// Create a user.
    pub fn create(self, uid: &str, display_name: &str, opts: CreateUserOptions) -> CreateUser<'c> {
        CreateUser::new(
            self,
            vec![
                self::uid(uid),
                required("display-name", display_name),
                optional("email", opts.email.as_ref()),
                key_type(opts.key_type.as_ref()),
                optional("access-key", opts.access_key.as_ref()),
                optional("secret-key", opts.secret_key.as_ref()),
                optional("user-caps", opts.user_caps.as_ref()),
                boolean("generate-key", opts.generate_key),
                max_buckets(opts.max_buckets),
                boolean("suspended", opts.suspended),
            ],
        )
    }

    /// Modify a user.
    pub fn modify(self, uid: &str, opts: ModifyUserOptions) -> ModifyUser<'c> {
        ModifyUser::new(
            self,
            vec![
                self::uid(uid),
                optional("display-name", opts.display_name.as_ref()),
                optional("email", opts.email.as_ref()),
                key_type(opts.key_type.as_ref()),
                optional("access-key", opts.access_key.as_ref()),
                optional("secret-key", opts.secret_key.as_ref()),
                boolean("generate-key", opts.generate_key),
                max_buckets(opts.max_buckets),
                boolean("suspended", opts.suspended),
            ],
        )
    }

    /// Remove a user, with its buckets and objects if `purge_data` is set.
    pub fn remove(self, uid: &str, purge_data: Option<bool>) -> RemoveUser<'c> {
        RemoveUser::new(
            self,
            vec![self::uid(uid), boolean("purge-data", purge_data)],
        )
    }

    /// Create a subuser.
    pub fn create_subuser(
        self,
        uid: &str,
        subuser: &str,
        opts: SubUserOptions,
    ) -> CreateSubUser<'c> {
        CreateSubUser::new(self, subuser_parameters(uid, subuser, &opts))
    }

    /// Modify a subuser.
    pub fn modify_subuser(
        self,
        uid: &str,
        subuser: &str,
        opts: SubUserOptions,
    ) -> ModifySubUser<'c> {
        ModifySubUser::new(self, subuser_parameters(uid, subuser, &opts))
    }

    /// Remove a subuser, with its keys unless `purge_keys` is false.
    pub fn remove_subuser(
        self,
        uid: &str,
        subuser: &str,
        purge_keys: Option<bool>,
    ) -> RemoveSubUser<'c> {
        RemoveSubUser::new(
            self,
            vec![
                Parameter::flag("subuser"),
                self::uid(uid),
                required("subuser", subuser),
                boolean("purge-keys", purge_keys),
            ],
        )
    }

    /// Create a key for a user or one of its subusers.
    pub fn create_key(self, uid: &str, opts: CreateKeyOptions) -> CreateKey<'c> {
        CreateKey::new(
            self,
            vec![
                Parameter::flag("key"),
                self::uid(uid),
                optional("subuser", opts.subuser.as_ref()),
                key_type(opts.key_type.as_ref()),
                optional("access-key", opts.access_key.as_ref()),
                optional("secret-key", opts.secret_key.as_ref()),
                boolean("generate-key", opts.generate_key),
            ],
        )
    }

    /// Remove a key. `uid` is required for swift keys.
    pub fn remove_key(
        self,
        access_key: &str,
        uid: Option<&str>,
        key_type: Option<&str>,
    ) -> RemoveKey<'c> {
        RemoveKey::new(
            self,
            vec![
                Parameter::flag("key"),
                required("access-key", access_key),
                Parameter::query("uid")
                    .require_not_empty()
                    .with_validator(validators::string())
                    .bind_opt(uid),
                Parameter::query("key-type")
                    .with_validator(validators::key_type())
                    .bind_opt(key_type),
            ],
        )
    }

    /// Add caps like `usage=read;users=*`.
    pub fn add_caps(self, uid: &str, caps: &str) -> AddCaps<'c> {
        AddCaps::new(self, caps_parameters(uid, caps))
    }

    /// Remove caps like `usage=read;users=*`.
    pub fn remove_caps(self, uid: &str, caps: &str) -> RemoveCaps<'c> {
        RemoveCaps::new(self, caps_parameters(uid, caps))
    }

    /// Get the `user` or `bucket` quota of a user.
    pub fn quota(self, uid: &str, quota_type: &str) -> GetQuota<'c> {
        GetQuota::new(
            self,
            vec![
                Parameter::flag("quota"),
                self::uid(uid),
                self::quota_type(quota_type),
            ],
        )
    }

    /// Set the `user` or `bucket` quota of a user.
    pub fn set_quota(self, uid: &str, quota_type: &str, quota: &Quota) -> SetQuota<'c> {
        let body = serde_json::json!({
            "enabled": quota.enabled,
            "check_on_raw": quota.check_on_raw,
            "max_size": quota.max_size,
            "max_size_kb": quota.max_size_kb,
            "max_objects": quota.max_objects,
        });

        SetQuota::new(
            self,
            vec![
                Parameter::flag("quota"),
                self::uid(uid),
                self::quota_type(quota_type),
                Parameter::header("content-type").bind("application/json"),
            ],
        )
        .with_body(Bytes::from(body.to_string()))
    }
}

fn subuser_parameters(uid: &str, subuser: &str, opts: &SubUserOptions) -> Vec<Parameter> {
    vec![
        Parameter::flag("subuser"),
        self::uid(uid),
        required("subuser", subuser),
        optional("secret-key", opts.secret_key.as_ref()),
        key_type(opts.key_type.as_ref()),
        Parameter::query("access")
            .with_validator(validators::subuser_access())
            .bind_opt(opts.access.as_ref()),
        boolean("generate-secret", opts.generate_secret),
    ]
}

fn caps_parameters(uid: &str, caps: &str) -> Vec<Parameter> {
    vec![
        Parameter::flag("caps"),
        self::uid(uid),
        required("user-caps", caps),
    ]
}

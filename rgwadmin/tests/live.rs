// Licensed to the Apache Software Foundation (ASF) under one
// or more contributor license agreements.  See the NOTICE file
// distributed with this work for additional information
// regarding copyright ownership.  The ASF licenses this file
// to you under the Apache License, Version 2.0 (the
// "License"); you may not use this file except in compliance
// with the License.  You may obtain a copy of the License at
//
//   http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing,
// software distributed under the License is distributed on an
// "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY
// KIND, either express or implied.  See the License for the
// specific language governing permissions and limitations
// under the License.

use std::env;

use anyhow::Result;
use log::warn;
use rgwadmin::{Client, ErrorKind, ExecutableLink};

fn init_client() -> Option<Client> {
    let _ = env_logger::builder().is_test(true).try_init();

    dotenv::from_filename(".env").ok();

    if env::var("RGW_ADMIN_TEST").ok().as_deref() != Some("on") {
        return None;
    }

    Some(Client::from_env())
}

#[tokio::test]
async fn test_user_lifecycle() -> Result<()> {
    let Some(client) = init_client() else {
        warn!("RGW_ADMIN_TEST is not set, skipped");
        return Ok(());
    };

    let uid = "rgwadmin-live-test";
    let user = client
        .user()
        .create(uid, "rgwadmin live test", Default::default())
        .execute()
        .await?;
    assert_eq!(user.user_id, uid);

    let user = client.user().info(uid, Some(true)).execute().await?;
    assert_eq!(user.display_name, "rgwadmin live test");

    client.user().remove(uid, Some(true)).execute().await?;

    let err = client.user().info(uid, None).execute().await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Api);
    assert_eq!(err.api_error().unwrap().code, "NoSuchUser");
    Ok(())
}

#[tokio::test]
async fn test_list_metadata() -> Result<()> {
    let Some(client) = init_client() else {
        warn!("RGW_ADMIN_TEST is not set, skipped");
        return Ok(());
    };

    let users = client.metadata().list("user").execute().await?;
    assert!(!users.is_empty());
    Ok(())
}

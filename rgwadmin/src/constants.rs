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

// Env values used to configure the client.
pub const RGW_ADMIN_ADDRESS: &str = "RGW_ADMIN_ADDRESS";
pub const RGW_ADMIN_PATH: &str = "RGW_ADMIN_PATH";
pub const RGW_ADMIN_NO_SSL: &str = "RGW_ADMIN_NO_SSL";
pub const RGW_ADMIN_SILENT: &str = "RGW_ADMIN_SILENT";
pub use rgwadmin_signature_v2::{RGW_ADMIN_ACCESS_KEY_ID, RGW_ADMIN_SECRET_ACCESS_KEY};

/// Admin path used when none is configured.
pub const DEFAULT_ADMIN_PATH: &str = "admin";

use chrono::NaiveDateTime;
use rgwadmin_core::time::format_admin_datetime;
use rgwadmin_core::{validators, Parameter};

use super::{decode_empty, decode_json};
use crate::models::UsageInfo;

root_link! {
    /// Operations under `/usage`.
    UsageRootLink => "/usage"
}

leaf_link! {
    /// `GET /usage?uid=`
    GetUsage: UsageRootLink, GET => UsageInfo, decode_json
}

leaf_link! {
    /// `DELETE /usage`
    TrimUsage: UsageRootLink, DELETE => (), decode_empty
}

/// Filters of [`UsageRootLink::info`].
///
/// Dates are `YYYY-MM-DD HH:MM:SS`, interpreted by the gateway as UTC.
#[derive(Debug, Clone, Default)]
pub struct UsageRange {
    pub show_entries: Option<bool>,
    pub show_summary: Option<bool>,
    pub start: Option<String>,
    pub end: Option<String>,
}

impl UsageRange {
    /// Only report usage from `start` on.
    pub fn since(mut self, start: NaiveDateTime) -> Self {
        self.start = Some(format_admin_datetime(start));
        self
    }

    /// Only report usage before `end`.
    pub fn until(mut self, end: NaiveDateTime) -> Self {
        self.end = Some(format_admin_datetime(end));
        self
    }
}

fn boolean(name: &'static str, value: Option<bool>) -> Parameter {
    Parameter::query(name)
        .with_validator(validators::boolean())
        .bind_opt(value)
}

fn date_time<V: Into<rgwadmin_core::ParameterValue>>(
    name: &'static str,
    value: Option<V>,
) -> Parameter {
    Parameter::query(name)
        .with_validator(validators::date_time())
        .bind_opt(value)
}

impl<'c> UsageRootLink<'c> {
    /// Get the usage of a user.
    pub fn info(self, uid: &str, range: UsageRange) -> GetUsage<'c> {
        GetUsage::new(
            self,
            vec![
                Parameter::query("uid")
                    .require_value()
                    .require_not_empty()
                    .with_validator(validators::string())
                    .bind(uid),
                boolean("show-entries", range.show_entries),
                boolean("show-summary", range.show_summary),
                date_time("start", range.start),
                date_time("end", range.end),
            ],
        )
    }

    /// Trim usage logs, of all users only if `remove_all` is set.
    pub fn trim(
        self,
        uid: Option<&str>,
        start: Option<NaiveDateTime>,
        end: Option<NaiveDateTime>,
        remove_all: Option<bool>,
    ) -> TrimUsage<'c> {
        TrimUsage::new(
            self,
            vec![
                Parameter::query("uid")
                    .require_not_empty()
                    .with_validator(validators::string())
                    .bind_opt(uid),
                date_time("start", start),
                date_time("end", end),
                boolean("remove-all", remove_all),
            ],
        )
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use pretty_assertions::assert_eq;
    use rgwadmin_core::{Context, ErrorKind, Request, Result};

    use super::*;
    use crate::{Client, Config};

    fn client() -> Client {
        Client::new(
            Context::new(),
            Config::default().with_address("rgw.local"),
        )
    }

    fn at(h: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 3, 1)
            .unwrap()
            .and_hms_opt(h, 0, 0)
            .unwrap()
    }

    #[test]
    fn test_info() -> Result<()> {
        let client = client();
        let range = UsageRange {
            show_entries: Some(false),
            ..Default::default()
        }
        .since(at(8))
        .until(at(20));

        let req = Request::compile(&client.usage().info("alice", range))?;
        assert_eq!(req.method(), http::Method::GET);
        assert_eq!(req.path(), "/usage");
        assert_eq!(
            req.query_string(),
            "uid=alice&show-entries=false&start=2024-03-01%2008%3A00%3A00&end=2024-03-01%2020%3A00%3A00"
        );
        Ok(())
    }

    #[test]
    fn test_info_rejects_bad_dates() {
        let client = client();
        let range = UsageRange {
            start: Some("2024-03-01".to_string()),
            ..Default::default()
        };

        let err = Request::compile(&client.usage().info("alice", range)).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ParameterInvalid);
        let detail = err.validation_error().unwrap();
        assert_eq!(detail.parameter, "start");
        assert_eq!(detail.value.as_deref(), Some("2024-03-01"));

        let err = Request::compile(&client.usage().info("", UsageRange::default())).unwrap_err();
        assert_eq!(err.validation_error().unwrap().parameter, "uid");
    }

    #[test]
    fn test_trim() -> Result<()> {
        let client = client();
        let req = Request::compile(&client.usage().trim(None, None, Some(at(0)), Some(true)))?;
        assert_eq!(req.method(), http::Method::DELETE);
        assert_eq!(
            req.query_string(),
            "end=2024-03-01%2000%3A00%3A00&remove-all=true"
        );
        Ok(())
    }
}

use serde::{Deserialize, Serialize};

/// Usage report returned by `/usage`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UsageInfo {
    /// Per user, per bucket entries, present unless `show-entries=false`.
    pub entries: Vec<UsageEntry>,
    /// Per user summary, present unless `show-summary=false`.
    pub summary: Vec<UsageSummary>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UsageEntry {
    pub user: String,
    pub buckets: Vec<UsageBucket>,
}

/// Usage of one bucket during one logging period.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UsageBucket {
    pub bucket: String,
    /// Start of the period, `YYYY-MM-DD HH:MM:SS.ffffffZ`.
    pub time: String,
    /// Start of the period as unix seconds.
    pub epoch: u64,
    pub owner: String,
    pub categories: Vec<UsageCategory>,
}

/// Counters of one operation category, e.g. `put_obj`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UsageCategory {
    pub category: String,
    pub bytes_sent: u64,
    pub bytes_received: u64,
    pub ops: u64,
    pub successful_ops: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UsageSummary {
    pub user: String,
    pub categories: Vec<UsageCategory>,
    pub total: UsageTotals,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UsageTotals {
    pub bytes_sent: u64,
    pub bytes_received: u64,
    pub ops: u64,
    pub successful_ops: u64,
}

impl UsageInfo {
    /// Sum of the summary totals over all users.
    pub fn totals(&self) -> UsageTotals {
        self.summary
            .iter()
            .fold(UsageTotals::default(), |mut acc, s| {
                acc.bytes_sent = acc.bytes_sent.saturating_add(s.total.bytes_sent);
                acc.bytes_received = acc.bytes_received.saturating_add(s.total.bytes_received);
                acc.ops = acc.ops.saturating_add(s.total.ops);
                acc.successful_ops = acc.successful_ops.saturating_add(s.total.successful_ops);
                acc
            })
    }
}

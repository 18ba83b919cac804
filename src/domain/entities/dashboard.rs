use serde::Serialize;

#[derive(Debug, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSummary {
    pub companies: u64,
    pub faqs: u64,
    pub updates: u64,
    pub new_updates: u64,
    pub students: u64,
}

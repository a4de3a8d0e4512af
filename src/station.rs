use std::sync::Arc;
use serde::{Deserialize, Serialize};
use tabled::Tabled;

pub type StationCode = Arc<str>;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, Tabled)]
pub struct Station {
    #[tabled(rename = "Code")]
    pub code: StationCode,
    #[tabled(rename = "Name")]
    pub name: String,
    #[tabled(rename = "GMT")]
    pub gmt: String,
}


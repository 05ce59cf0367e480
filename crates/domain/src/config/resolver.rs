use serde::{Deserialize, Serialize};

use super::local_records::LocalDnsRecord;

#[derive(Debug, Clone, Copy, Deserialize, Serialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum ResolverMode {
    /// Fixed answer per record type; every question gets exactly one answer.
    #[default]
    Static,
    /// Answers come from `records`; unknown names get no answers.
    Local,
}

impl std::str::FromStr for ResolverMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "static" => Ok(ResolverMode::Static),
            "local" => Ok(ResolverMode::Local),
            _ => Err(format!("Unknown resolver mode: {}", s)),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ResolverConfig {
    #[serde(default)]
    pub mode: ResolverMode,

    #[serde(default = "default_ttl")]
    pub default_ttl: u32,

    #[serde(default)]
    pub records: Vec<LocalDnsRecord>,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            mode: ResolverMode::default(),
            default_ttl: default_ttl(),
            records: Vec::new(),
        }
    }
}

fn default_ttl() -> u32 {
    300
}

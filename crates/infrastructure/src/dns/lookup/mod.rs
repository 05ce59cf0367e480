mod local_records;
mod static_lookup;

pub use local_records::LocalRecordLookup;
pub use static_lookup::{
    StaticRecordLookup, STATIC_CNAME, STATIC_IPV4, STATIC_IPV6, STATIC_MX_HOST,
    STATIC_MX_PREFERENCE, STATIC_TTL, STATIC_TXT,
};

use emberdns_application::ports::RecordLookup;
use emberdns_domain::config::{ResolverConfig, ResolverMode};
use emberdns_domain::DomainError;
use std::sync::Arc;

/// Picks the lookup implementation named by `config.mode`.
pub fn build_lookup(config: &ResolverConfig) -> Result<Arc<dyn RecordLookup>, DomainError> {
    match config.mode {
        ResolverMode::Static => Ok(Arc::new(
            StaticRecordLookup::new().with_ttl(config.default_ttl),
        )),
        ResolverMode::Local => Ok(Arc::new(LocalRecordLookup::from_config(config)?)),
    }
}

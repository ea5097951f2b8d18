//! Custom extractors.

mod query;
mod validated_json;

pub use query::ListQuery;
pub use validated_json::ValidatedJson;

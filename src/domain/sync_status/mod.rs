pub mod error_aggregator;
pub mod reconciler;
pub mod sms_policy;

pub use error_aggregator::ErrorAggregator;
pub use reconciler::reconcile;
pub use sms_policy::is_offered;

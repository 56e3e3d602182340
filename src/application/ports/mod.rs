pub mod sync_sources;

pub use sync_sources::{DeviceCapabilityProbe, SyncErrorSource, SyncStateSource};

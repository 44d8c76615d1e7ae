mod asset_record;
mod degradation_event;
mod vision_report;

pub use asset_record::AssetRecord;
pub use degradation_event::DegradationEvent;
pub use vision_report::{VisionReport, VisionVerdict};

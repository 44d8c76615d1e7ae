use crate::models::VisionReport;

/// Image-based severity classifier.
///
/// Never fails: undecodable input is reported through the returned verdict.
pub trait IVisualInspector: Send + Sync {
    fn inspect(&self, image: &[u8]) -> VisionReport;
}

use std::path::Path;

use image::GrayImage;

use labwear_core::config::VisionConfig;
use labwear_core::models::{VisionReport, VisionVerdict};
use labwear_core::traits::IVisualInspector;

/// Dark-pixel ratio classifier.
///
/// ```text
/// dark_area_percent = count(luma < dark_threshold) × 100 / pixel_count
/// severe            = dark_area_percent > severe_area_percent
/// ```
#[derive(Debug, Clone, Copy)]
pub struct DarknessHeuristic {
    dark_threshold: u8,
    severe_area_percent: f64,
}

impl DarknessHeuristic {
    pub fn new(dark_threshold: u8, severe_area_percent: f64) -> Self {
        Self {
            dark_threshold,
            severe_area_percent,
        }
    }

    pub fn from_config(config: &VisionConfig) -> Self {
        Self::new(config.dark_threshold, config.severe_area_percent)
    }

    pub fn dark_threshold(&self) -> u8 {
        self.dark_threshold
    }

    pub fn severe_area_percent(&self) -> f64 {
        self.severe_area_percent
    }

    /// Decode an encoded image (PNG, JPEG) and classify it.
    pub fn analyze_bytes(&self, bytes: &[u8]) -> VisionReport {
        match image::load_from_memory(bytes) {
            Ok(img) => self.analyze_luma(&img.to_luma8()),
            Err(e) => {
                tracing::warn!(error = %e, len = bytes.len(), "image decode failed");
                VisionReport::unreadable(e)
            }
        }
    }

    /// Open an image file and classify it.
    pub fn analyze_path(&self, path: &Path) -> VisionReport {
        match image::open(path) {
            Ok(img) => self.analyze_luma(&img.to_luma8()),
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "image open failed");
                VisionReport::unreadable(e)
            }
        }
    }

    /// Classify an already-decoded grayscale buffer.
    pub fn analyze_luma(&self, gray: &GrayImage) -> VisionReport {
        let total = u64::from(gray.width()) * u64::from(gray.height());
        if total == 0 {
            return VisionReport::unreadable("image has no pixels");
        }
        let dark = gray
            .pixels()
            .filter(|p| p.0[0] < self.dark_threshold)
            .count() as u64;
        // Multiply first so exact ratios such as 10/100 stay exact.
        let percent = (dark as f64 * 100.0) / total as f64;
        self.classify(percent)
    }

    fn classify(&self, dark_area_percent: f64) -> VisionReport {
        let report = if dark_area_percent > self.severe_area_percent {
            VisionReport {
                verdict: VisionVerdict::Critical,
                severe: true,
                diagnosis: format!(
                    "carbonized zone detected ({dark_area_percent:.1}% dark area)"
                ),
                dark_area_percent,
            }
        } else {
            VisionReport {
                verdict: VisionVerdict::Normal,
                severe: false,
                diagnosis: format!(
                    "within normal parameters ({dark_area_percent:.1}% dark area)"
                ),
                dark_area_percent,
            }
        };
        tracing::debug!(
            verdict = ?report.verdict,
            dark_area_percent,
            threshold = self.severe_area_percent,
            "visual inspection classified"
        );
        report
    }
}

impl Default for DarknessHeuristic {
    fn default() -> Self {
        Self::from_config(&VisionConfig::default())
    }
}

impl IVisualInspector for DarknessHeuristic {
    fn inspect(&self, image: &[u8]) -> VisionReport {
        self.analyze_bytes(image)
    }
}

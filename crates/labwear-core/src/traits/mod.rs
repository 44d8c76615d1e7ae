mod asset_repository;
mod visual_inspector;
mod wear_strategy;

pub use asset_repository::IAssetRepository;
pub use visual_inspector::IVisualInspector;
pub use wear_strategy::IWearStrategy;

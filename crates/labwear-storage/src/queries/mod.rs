pub mod asset_ops;
pub mod incident_ops;

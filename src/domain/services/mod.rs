pub mod availability;
pub mod confirmation;
pub mod heatmap;
pub mod ranking;
pub mod slots;

pub mod aggregator;
pub mod dose_times;
pub mod projector;

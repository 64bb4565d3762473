pub mod day_summary;
pub mod dose;
pub mod frequency;
pub mod medication;
pub mod schedule;

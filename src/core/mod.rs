pub mod add;
pub mod briefing;
pub mod calculator;
pub mod del;
pub mod log;
pub mod logic;
pub mod planner;
pub mod take;

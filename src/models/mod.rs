pub mod match_announcement;
pub mod team;
pub mod user;

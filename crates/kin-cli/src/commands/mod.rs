pub mod dispatch;
pub mod recommend;
pub mod schema;
pub mod similarity;
pub mod stats;

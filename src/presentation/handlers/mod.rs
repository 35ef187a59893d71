mod analyze;
mod health;

pub use analyze::{AnalyzeRequest, analyze_handler};
pub use health::{HEALTH_MESSAGE, health_handler};

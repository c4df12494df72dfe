mod counters;
mod reader;
mod surveyor;

pub use counters::PatternCounters;
pub use reader::{FileReader, RealFileReader};
pub use surveyor::{SurveyReport, Surveyor};

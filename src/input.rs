mod reader;

pub use reader::{OptionFormat, OptionReader};

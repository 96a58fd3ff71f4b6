pub mod duration;

pub use duration::{duration2compact, duration2whole_minutes, mins2compact, parse_duration};

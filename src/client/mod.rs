mod console;

pub use console::{parse_answer, Console, NEGATIVE_ANSWERS, POSITIVE_ANSWERS};

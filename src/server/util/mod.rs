pub mod money;
pub mod time;
pub mod words;

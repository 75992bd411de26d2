pub mod file;
pub mod line;
pub mod options;
pub mod token;

pub mod images;
pub mod prompts;
pub mod word;

pub mod question_loader;

pub use question_loader::load_question_set;

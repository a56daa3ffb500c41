pub mod form_url;
pub mod loaders;
pub mod question;

pub use form_url::form_response_url;
pub use loaders::load_question_set;
pub use question::{ChoiceOption, Question, QuestionKind, QuestionSet};

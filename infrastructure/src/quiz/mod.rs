//! Quiz answers input from files.

mod answers_file;

pub use answers_file::{AnswersFileError, AnswersFormat, QuizAnswersLoader};

use dna_common::error::CommonError;

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error(transparent)]
    Common(#[from] CommonError),

    #[error("config error: {0}")]
    Config(String),

    #[error("got selections for {given} questions but the quiz has {questions}")]
    TooManySelections { given: usize, questions: usize },

    #[error("question {question} has {available} answers, answer index {answer} is out of range")]
    AnswerOutOfRange {
        question: usize,
        answer: usize,
        available: usize,
    },

    #[error("quiz incomplete: question {question} has no answer")]
    Incomplete { question: usize },

    #[error("unknown category: {0}")]
    UnknownCategory(String),

    #[error("no stored result for visitor: {0}")]
    NotFound(String),

    #[error("invalid request: {0}")]
    InvalidRequest(String),
}

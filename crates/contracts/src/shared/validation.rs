use thiserror::Error;

/// Client-side validation failure. The message is shown to the user as is.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Назва, кількість і ціна є обов'язковими полями!")]
    MissingRequired,

    #[error("Поле «{0}» має бути числом")]
    NotANumber(&'static str),

    #[error("Оберіть період для побудови графіка!")]
    MissingPeriod,

    #[error("Некоректна дата: {0}")]
    InvalidDate(String),

    #[error("Початкова дата не може бути пізніше кінцевої")]
    InvertedPeriod,
}

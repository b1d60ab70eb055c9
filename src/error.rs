use thiserror::Error;

pub type Result<T> = std::result::Result<T, DetkeyError>;

#[derive(Debug, Error)]
pub enum DetkeyError {
    #[error("Пароль не может быть пустым")]
    EmptyPassword,

    #[error("Контекст не может быть пустым")]
    EmptyContext,

    #[error("Неподдерживаемый тип ключа: '{0}'. Доступные типы: ed25519, rsa2048, rsa4096")]
    UnsupportedKeyType(String),

    #[error("Неподдерживаемый формат вывода: '{0}'. Доступные форматы: auto, ssh, pem")]
    UnsupportedFormat(String),

    #[error("Ошибка растяжения пароля: {0}")]
    StretchFailed(String),

    #[error("Поток энтропии исчерпан")]
    EntropyExhausted,

    #[error("Ошибка генерации ключа: {0}")]
    KeyGenerationFailed(String),

    #[error("Ошибка сериализации ключа: {0}")]
    SerializationFailed(String),

    #[error("Ошибка ввода-вывода: {0}")]
    Io(#[from] std::io::Error),
}

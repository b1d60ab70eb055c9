//! Реализация CLI команд

pub mod key;
pub mod pubkey;

use std::env;
use std::io::{self, BufRead};

use crossterm::tty::IsTty;

use crate::derive::{self, KeyType, PrivateKeyMaterial, SecretBytes, DEFAULT_SALT};
use crate::error::{DetkeyError, Result};
use crate::output::{self, OutputFormat};

/// Переменная окружения для переопределения соли
pub const SALT_ENV_VAR: &str = "DETKEY_SALT";

/// Прочитать мастер-пароль: в терминале — без эха, иначе одной строкой из stdin
pub fn read_password() -> Result<SecretBytes> {
    let password = if io::stdin().is_tty() {
        rpassword::prompt_password("Введите мастер-пароль: ")?
    } else {
        let mut line = String::new();
        io::stdin().lock().read_line(&mut line)?;
        while line.ends_with('\n') || line.ends_with('\r') {
            line.pop();
        }
        line
    };

    let secret = SecretBytes::from(password);
    if secret.is_empty() {
        return Err(DetkeyError::EmptyPassword);
    }

    Ok(secret)
}

/// Определить соль: флаг, затем переменная окружения, затем встроенное значение
pub fn resolve_salt(flag: Option<String>) -> String {
    flag.filter(|s| !s.is_empty())
        .or_else(|| env::var(SALT_ENV_VAR).ok().filter(|s| !s.is_empty()))
        .unwrap_or_else(|| DEFAULT_SALT.to_string())
}

/// Общий путь derive-команд: проверка аргументов, запрос пароля, деривация
fn derive_from_args(
    context: &str,
    key_type: &str,
    format: &str,
    salt: Option<String>,
) -> Result<(PrivateKeyMaterial, OutputFormat)> {
    // Аргументы проверяются до запроса пароля
    let key_type: KeyType = key_type.parse()?;
    if context.is_empty() {
        return Err(DetkeyError::EmptyContext);
    }
    let format = match format {
        "auto" => output::detect_format(context, key_type),
        other => other.parse()?,
    };

    let salt = resolve_salt(salt);
    let password = read_password()?;

    let material = derive::derive_key(&password, salt.as_bytes(), context, key_type)?;

    Ok((material, format))
}

//! Вывод публичного ключа

use crate::error::Result;
use crate::output;

pub fn run(context: &str, key_type: &str, format: &str, salt: Option<String>) -> Result<()> {
    let (material, format) = super::derive_from_args(context, key_type, format, salt)?;

    let text = output::public_key_text(&material, format)?;
    println!("{}", text.trim_end());

    Ok(())
}

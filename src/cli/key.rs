//! Вывод приватного ключа

use crate::error::Result;
use crate::output;

pub fn run(context: &str, key_type: &str, format: &str, salt: Option<String>) -> Result<()> {
    let (material, format) = super::derive_from_args(context, key_type, format, salt)?;

    let text = output::private_key_text(&material, format)?;
    // Ключ идёт в stdout без оформления, чтобы вывод можно было перенаправить
    print!("{}", text.as_str());

    Ok(())
}

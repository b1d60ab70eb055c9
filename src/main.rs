use clap::{Args, Parser, Subcommand};
use colored::Colorize;
use std::process::ExitCode;

mod cli;
mod derive;
mod error;
mod output;

use error::Result;

#[derive(Parser)]
#[command(name = "detkey")]
#[command(author = "Oleg")]
#[command(version = "0.1.0")]
#[command(about = "Детерминированная генерация SSH/TLS-ключей из мастер-пароля", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Вывести приватный ключ для заданного контекста
    Key(DeriveArgs),

    /// Вывести публичный ключ для заданного контекста
    Pubkey(DeriveArgs),
}

#[derive(Args)]
struct DeriveArgs {
    /// Строка контекста, например 'ssh/prod-server/v1' или 'mtls/ca/v1'
    #[arg(long)]
    context: String,

    /// Тип ключа: ed25519, rsa2048 или rsa4096
    #[arg(long = "type", default_value = "ed25519")]
    key_type: String,

    /// Формат вывода: auto, ssh или pem
    #[arg(long, default_value = "auto")]
    format: String,

    /// Соль для деривации (по умолчанию — DETKEY_SALT или встроенная)
    #[arg(long)]
    salt: Option<String>,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let result = run(cli);

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{} {}", "Ошибка:".red().bold(), e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Key(args) => cli::key::run(&args.context, &args.key_type, &args.format, args.salt),
        Commands::Pubkey(args) => {
            cli::pubkey::run(&args.context, &args.key_type, &args.format, args.salt)
        }
    }
}

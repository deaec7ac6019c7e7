//! passgen: an offline password and UUID generator.
//!
//! Console front end: reads defaults from the settings file, applies command
//! line overrides, generates and prints the result with its analysis.

use std::io::Write;
use std::process::ExitCode;
use std::str::FromStr;

use clap::{Args, Parser, Subcommand};
use log::LevelFilter;

use passgen::app::{GeneratorSession, PasswordOutcome};
use passgen::services::localization_engine::{
    is_supported_locale, LocalizationEngine, LocalizationEngineTrait,
};
use passgen::services::settings_engine::{SettingsEngine, SettingsEngineTrait};
use passgen::services::uuid_engine::join_for_copy;
use passgen::types::analysis::Tip;
use passgen::types::errors::LocaleError;
use passgen::types::settings::GeneratorSettings;

#[derive(Parser)]
#[command(name = "passgen", version, about = "Offline password and UUID generator")]
struct Cli {
    /// Display language (en, zh). Defaults to the saved setting.
    #[arg(long, global = true)]
    lang: Option<String>,

    /// Settings file to read and write instead of the platform default.
    #[arg(long, global = true)]
    settings: Option<String>,

    /// Persist the effective options as the new defaults.
    #[arg(long, global = true)]
    save: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Generate a password (default).
    Password(PasswordArgs),
    /// Generate version-4 UUIDs.
    Uuid(UuidArgs),
}

#[derive(Args, Default)]
struct PasswordArgs {
    /// Number of characters (4-64).
    #[arg(short, long)]
    length: Option<usize>,
    /// Include uppercase letters.
    #[arg(long, overrides_with = "no_uppercase")]
    uppercase: bool,
    #[arg(long, overrides_with = "uppercase")]
    no_uppercase: bool,
    /// Include lowercase letters.
    #[arg(long, overrides_with = "no_lowercase")]
    lowercase: bool,
    #[arg(long, overrides_with = "lowercase")]
    no_lowercase: bool,
    /// Include digits.
    #[arg(long, overrides_with = "no_numbers")]
    numbers: bool,
    #[arg(long, overrides_with = "numbers")]
    no_numbers: bool,
    /// Include symbols.
    #[arg(long, overrides_with = "no_symbols")]
    symbols: bool,
    #[arg(long, overrides_with = "symbols")]
    no_symbols: bool,
}

#[derive(Args, Default)]
struct UuidArgs {
    /// How many UUIDs to generate (1-50).
    #[arg(short, long)]
    quantity: Option<usize>,
    /// Print in uppercase.
    #[arg(short, long, overrides_with = "lowercase")]
    uppercase: bool,
    /// Print in lowercase.
    #[arg(long, overrides_with = "uppercase")]
    lowercase: bool,
}

/// Resolves an `--x` / `--no-x` pair; `None` keeps the saved value.
fn toggle(on: bool, off: bool) -> Option<bool> {
    match (on, off) {
        (true, _) => Some(true),
        (_, true) => Some(false),
        _ => None,
    }
}

fn init_logger() {
    let filter =
        LevelFilter::from_str(&std::env::var("RUST_LOG").unwrap_or_else(|_| "warn".to_owned()))
            .unwrap_or(LevelFilter::Warn);

    env_logger::Builder::new()
        .filter_level(filter)
        .format(|buf, record| {
            writeln!(
                buf,
                "[{} {}] {}",
                chrono::Local::now().format("%T%.3f"),
                record.level(),
                record.args()
            )
        })
        .init();
}

fn main() -> ExitCode {
    init_logger();
    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{}", e);
            eprintln!("passgen: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let mut settings_engine = SettingsEngine::new(cli.settings.clone());
    let mut settings = settings_engine.load()?;

    if let Some(lang) = &cli.lang {
        if !is_supported_locale(lang) {
            return Err(LocaleError::UnsupportedLocale(lang.clone()).into());
        }
        settings.language = lang.clone();
    } else if !std::path::Path::new(settings_engine.get_config_path()).exists() {
        settings.language = LocalizationEngine::new().detect_system_locale();
    }

    let command = cli
        .command
        .unwrap_or_else(|| Command::Password(PasswordArgs::default()));
    apply_overrides(&mut settings, &command);
    let settings = settings.clamped();

    let mut session = GeneratorSession::new(&settings)?;
    match command {
        Command::Password(_) => {
            let outcome = session.generate_password()?;
            print!("{}", render_password(&outcome, session.locale())?);
        }
        Command::Uuid(_) => {
            let uuids = session.generate_uuids()?;
            println!("{}", join_for_copy(&uuids));
            println!();
            println!("- {}", session.locale().tip(&Tip::UuidInfo));
        }
    }

    if cli.save {
        settings_engine.set_settings(settings)?;
    }
    Ok(())
}

fn apply_overrides(settings: &mut GeneratorSettings, command: &Command) {
    match command {
        Command::Password(args) => {
            let options = &mut settings.password;
            if let Some(length) = args.length {
                options.length = length;
            }
            let flags = [
                (&mut options.include_uppercase, args.uppercase, args.no_uppercase),
                (&mut options.include_lowercase, args.lowercase, args.no_lowercase),
                (&mut options.include_numbers, args.numbers, args.no_numbers),
                (&mut options.include_symbols, args.symbols, args.no_symbols),
            ];
            for (field, on, off) in flags {
                if let Some(enabled) = toggle(on, off) {
                    *field = enabled;
                }
            }
        }
        Command::Uuid(args) => {
            if let Some(quantity) = args.quantity {
                settings.uuid.quantity = quantity;
            }
            if let Some(uppercase) = toggle(args.uppercase, args.lowercase) {
                settings.uuid.uppercase = uppercase;
            }
        }
    }
}

/// Renders a password with its analysis.
///
/// An empty outcome means no character class was enabled; that is reported
/// as an error so nothing resembling a secret reaches stdout.
fn render_password(outcome: &PasswordOutcome, locale: &LocalizationEngine) -> Result<String, String> {
    if outcome.password.is_empty() {
        return Err(locale.t("labels.no_class"));
    }

    let mut out = format!(
        "{}\n\n{}: {} ({}/100)\n",
        outcome.password,
        locale.t("labels.strength"),
        locale.strength_label(outcome.strength.strength),
        outcome.strength.score
    );
    if let Some(analysis) = &outcome.analysis {
        out.push_str(&format!(
            "{}: {:.1} {}\n",
            locale.t("labels.entropy"),
            analysis.entropy,
            locale.t("labels.bits")
        ));
        out.push_str(&format!(
            "{}: {}\n",
            locale.t("labels.crack_time"),
            analysis.cracking_time
        ));
        out.push_str(&format!("{}:\n", locale.t("labels.tips")));
        for tip in &analysis.tips {
            out.push_str(&format!("  - {}\n", tip));
        }
    }
    Ok(out)
}

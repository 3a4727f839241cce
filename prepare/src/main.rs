use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use unicode_properties_prepare::output::{self, stats, OutputSettings, FORMAT_STRING_LENGTH};
use unicode_properties_prepare::{prepare, PrepareError};
use unicode_properties_source::SourceData;

/// Сборка компактных таблиц свойств символов Unicode из файлов UCD.
///
/// Результат - выражение Rust, которое подключается через include!
#[derive(Debug, Parser)]
struct CliArgs
{
    /// каталог с UnicodeData.txt, PropList.txt, DerivedCoreProperties.txt,
    /// CaseFolding.txt, SpecialCasing.txt и Scripts.txt
    #[arg(long)]
    ucd: PathBuf,

    /// файл для записи таблиц
    #[arg(long, default_value = "./data/tables.rs.txt")]
    output: PathBuf,

    /// длина строки с числами
    #[arg(long, default_value_t = FORMAT_STRING_LENGTH)]
    line_width: usize,

    /// версия Unicode для заголовка файла
    #[arg(long)]
    unicode_version: Option<String>,
}

fn main() -> ExitCode
{
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    let args = CliArgs::parse();

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{e}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: CliArgs) -> Result<(), PrepareError>
{
    let CliArgs {
        ucd,
        output,
        line_width,
        unicode_version,
    } = args;

    let source = SourceData::from_dir(&ucd)?;

    log::info!("кодпоинтов: {}, со скриптом: {}", source.characters.len(), source.scripts.len());

    let tables = prepare(&source)?;

    stats::report(&tables);

    output::write(
        &tables,
        &output,
        &OutputSettings {
            line_width,
            unicode_version,
        },
    )
}

use std::process::ExitCode;

use clap::{Parser, ValueEnum};
use tracing_subscriber::EnvFilter;
use ultracode::core::types::HumanReadableLocation;
use ultracode::{encode, DataType, EncodeOptions, Symbology};

/// Закодировать строку и напечатать ширины модулей.
///
/// Примеры:
///   cargo run --bin encode_row -- --symbology codabar A40156B
///   cargo run --bin encode_row -- --symbology nve18 --json 1
///   RUST_LOG=debug cargo run --bin encode_row -- -s code39 --check-digit CODE39
#[derive(Debug, Parser)]
#[command(name = "encode_row", version)]
struct Args {
    /// Данные для кодирования.
    content: String,

    #[arg(short, long, value_enum, default_value_t = Kind::Code128)]
    symbology: Kind,

    /// Необязательная контрольная цифра (Codabar, Code 39, Code 39 Extended).
    #[arg(long)]
    check_digit: bool,

    /// Данные в синтаксисе GS1 (только Code 128).
    #[arg(long)]
    gs1: bool,

    #[arg(long, value_enum, default_value_t = Location::Bottom)]
    text: Location,

    /// Вывести результат целиком в JSON.
    #[arg(long)]
    json: bool,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Kind {
    Codabar,
    Code39,
    Code39Extended,
    Logmars,
    Code32,
    Pzn,
    Code128,
    Nve18,
    KoreaPost,
    Pharmacode,
}

impl From<Kind> for Symbology {
    fn from(k: Kind) -> Self {
        match k {
            Kind::Codabar => Symbology::Codabar,
            Kind::Code39 => Symbology::Code39,
            Kind::Code39Extended => Symbology::Code39Extended,
            Kind::Logmars => Symbology::Logmars,
            Kind::Code32 => Symbology::Code32,
            Kind::Pzn => Symbology::Pzn,
            Kind::Code128 => Symbology::Code128,
            Kind::Nve18 => Symbology::Nve18,
            Kind::KoreaPost => Symbology::KoreaPost,
            Kind::Pharmacode => Symbology::Pharmacode,
        }
    }
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Location {
    None,
    Top,
    Bottom,
}

impl From<Location> for HumanReadableLocation {
    fn from(l: Location) -> Self {
        match l {
            Location::None => HumanReadableLocation::None,
            Location::Top => HumanReadableLocation::Top,
            Location::Bottom => HumanReadableLocation::Bottom,
        }
    }
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let opts = EncodeOptions::default()
        .with_check_digit(args.check_digit)
        .with_data_type(if args.gs1 { DataType::Gs1 } else { DataType::Generic })
        .with_readable_location(args.text.into());

    let symbology: Symbology = args.symbology.into();
    let result = match encode(symbology, &args.content, &opts) {
        Ok(r) => r,
        Err(e) => {
            eprintln!("{symbology}: {e}");
            return ExitCode::from(2);
        }
    };

    if args.json {
        match serde_json::to_string_pretty(&result) {
            Ok(s) => println!("{s}"),
            Err(e) => {
                eprintln!("Ошибка сериализации: {e}");
                return ExitCode::FAILURE;
            }
        }
        return ExitCode::SUCCESS;
    }

    println!("{}: {}", result.symbology, result.readable);
    for (y, row) in result.pattern.rows().iter().enumerate() {
        println!("row {y}: {row}");
    }
    println!("width: {} modules", result.width());
    if let Some(cws) = result.codewords() {
        let list: Vec<String> = cws.iter().map(ToString::to_string).collect();
        println!("codewords: {}", list.join(" "));
    }
    print!("{}", result.info);
    ExitCode::SUCCESS
}

use std::path::Path;

use clap::{Parser, Subcommand};
use locsheet::workspace::{self, DEFAULT_SHEET_FILE};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[command(subcommand)]
    commands: Commands,
}

/// Supported subcommands.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Export per-language text files into one localization sheet.
    Export {
        /// Directory holding the key file and language files
        #[arg(short, long, default_value = ".")]
        dir: String,

        /// Name of the sheet file to write
        #[arg(short, long, default_value = DEFAULT_SHEET_FILE)]
        output: String,
    },

    /// Import a localization sheet back into per-language text files.
    Import {
        /// Sheet file name; `.csv` is appended when the name has no extension
        sheet: Option<String>,

        /// Directory to read the sheet from and write the text files into
        #[arg(short, long, default_value = ".")]
        dir: String,
    },
}

fn main() {
    let args = Args::parse();

    match args.commands {
        Commands::Export { dir, output } => match workspace::export_sheet(&dir, &output) {
            Ok(keys) => println!("Generated {} with {} keys.", output, keys),
            Err(e) => {
                eprintln!("Error: {}", e);
                std::process::exit(1);
            }
        },
        Commands::Import { sheet, dir } => {
            let sheet = sheet.map_or_else(|| DEFAULT_SHEET_FILE.to_string(), with_csv_extension);
            match workspace::import_sheet(&dir, &sheet) {
                Ok(keys) => println!("Generated language files from {} with {} keys.", sheet, keys),
                Err(e) => {
                    eprintln!("Error: {}", e);
                    std::process::exit(1);
                }
            }
        }
    }
}

/// Appends `.csv` to a bare sheet name, leaving explicit extensions alone.
fn with_csv_extension(name: String) -> String {
    if Path::new(&name).extension().is_none() {
        format!("{name}.csv")
    } else {
        name
    }
}

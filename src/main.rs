mod args;
mod commands;

use crate::args::{Cli, Commands};
use clap::Parser;

pub type Error = Box<dyn std::error::Error>;
pub type Result<T> = std::result::Result<T, Error>;

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Dump {
            file_path,
            begin,
            end,
        } => println!("{}", commands::dump(&file_path, begin, end)?),
        Commands::Checksum {
            file_path,
            begin,
            end,
        } => println!("0x{:08X}", commands::checksum(&file_path, begin, end)?),
        Commands::Read {
            file_path,
            offset,
            width,
            order,
        } => println!(
            "{}",
            commands::read(&file_path, offset, width, order.into())?
        ),
    };
    Ok(())
}

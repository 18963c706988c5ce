use bufslice::byte_order::ByteOrder;
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print a range of a file as hex bytes
    ///
    /// The range is half-open: BEGIN is included, END is not. It must hold
    /// at least one byte and lie within the file.
    ///
    /// Example:
    ///   dump photo.png 8 16
    Dump {
        /// Path to the file to look into
        file_path: PathBuf,

        /// Offset of the first byte to print
        begin: usize,

        /// Offset of the first byte NOT to print (defaults to the end of the file)
        end: Option<usize>,
    },

    /// Compute the CRC-32 of a range of a file
    ///
    /// Uses the same CRC-32 (ISO-HDLC) as PNG chunks and zip archives.
    ///
    /// Example:
    ///   checksum photo.png 12 29
    Checksum {
        /// Path to the file to look into
        file_path: PathBuf,

        /// Offset of the first byte to include
        begin: usize,

        /// Offset of the first byte NOT to include (defaults to the end of the file)
        end: Option<usize>,
    },

    /// Read an unsigned integer stored at an offset of a file
    ///
    /// Example:
    ///   read photo.png 16 --width 4 --order big
    Read {
        /// Path to the file to look into
        file_path: PathBuf,

        /// Offset of the integer's first byte
        offset: usize,

        /// Size of the integer in bytes
        #[arg(long, value_enum, default_value_t = Width::Four)]
        width: Width,

        /// Byte order of the integer
        #[arg(long, value_enum, default_value_t = Order::Big)]
        order: Order,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Width {
    #[value(name = "1")]
    One,
    #[value(name = "2")]
    Two,
    #[value(name = "4")]
    Four,
    #[value(name = "8")]
    Eight,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Order {
    Big,
    Little,
}

impl From<Order> for ByteOrder {
    fn from(order: Order) -> Self {
        match order {
            Order::Big => ByteOrder::Big,
            Order::Little => ByteOrder::Little,
        }
    }
}

use std::io;
use std::io::Read;

use flate2::bufread::{DeflateEncoder, GzEncoder};
use flate2::Compression;
use flate2::read::{DeflateDecoder, GzDecoder};

#[derive(PartialEq, Debug, Clone, Copy)]
pub enum CompressionAlgorithm {
    GZIP,
    DEFLATE,
    BROTLI,
    NONE,
}

impl CompressionAlgorithm {
    /// Maps a `Content-Encoding` value; `None` for codings we cannot decode.
    pub fn from_content_encoding(value: &str) -> Option<CompressionAlgorithm> {
        match value.trim().to_ascii_lowercase().as_str() {
            "gzip" | "x-gzip" => Some(CompressionAlgorithm::GZIP),
            "deflate" => Some(CompressionAlgorithm::DEFLATE),
            "br" => Some(CompressionAlgorithm::BROTLI),
            "" | "identity" => Some(CompressionAlgorithm::NONE),
            _ => None
        }
    }
}

pub struct Codex {}

impl Codex {
    pub fn encode(reader: &[u8], compression: CompressionAlgorithm) -> io::Result<Vec<u8>> {
        let mut writer = Vec::new();
        match compression {
            CompressionAlgorithm::GZIP => {
                GzEncoder::new(reader, Compression::fast()).read_to_end(&mut writer)?;
            }
            CompressionAlgorithm::DEFLATE => {
                DeflateEncoder::new(reader, Compression::fast()).read_to_end(&mut writer)?;
            }
            CompressionAlgorithm::BROTLI => {
                brotli::CompressorReader::new(reader, 4096, 5, 22).read_to_end(&mut writer)?;
            }
            CompressionAlgorithm::NONE => writer.extend_from_slice(reader)
        }
        Ok(writer)
    }

    pub fn decode(reader: &[u8], compression: CompressionAlgorithm) -> io::Result<Vec<u8>> {
        let mut writer = Vec::new();
        match compression {
            CompressionAlgorithm::GZIP => {
                GzDecoder::new(reader).read_to_end(&mut writer)?;
            }
            CompressionAlgorithm::DEFLATE => {
                DeflateDecoder::new(reader).read_to_end(&mut writer)?;
            }
            CompressionAlgorithm::BROTLI => {
                brotli::Decompressor::new(reader, 4096).read_to_end(&mut writer)?;
            }
            CompressionAlgorithm::NONE => writer.extend_from_slice(reader)
        }
        Ok(writer)
    }
}

#[cfg(test)]
mod tests {
    use http4t_core::codex::{Codex, CompressionAlgorithm};
    use http4t_core::codex::CompressionAlgorithm::{BROTLI, DEFLATE, GZIP, NONE};

    #[test]
    fn gzip_encode_and_decode_with_flate2() {
        let original_string = "hello world my baby boo".repeat(200);
        let bytestring = original_string.as_bytes();

        let encoded = Codex::encode(bytestring, GZIP).unwrap();
        assert!(encoded.len() < bytestring.len());

        let decoded = Codex::decode(&encoded, GZIP).unwrap();
        assert_eq!(decoded.as_slice(), bytestring);
    }

    #[test]
    fn deflate_encode_and_decode_with_flate2() {
        let original_string = "hello world my baby boo".repeat(200);
        let bytestring = original_string.as_bytes();

        let encoded = Codex::encode(bytestring, DEFLATE).unwrap();
        assert!(encoded.len() < bytestring.len());

        let decoded = Codex::decode(&encoded, DEFLATE).unwrap();
        assert_eq!(decoded.as_slice(), bytestring);
    }

    #[test]
    fn brotli_encode_and_decode() {
        let original_string = "hello world my baby boo".repeat(200);
        let bytestring = original_string.as_bytes();

        let encoded = Codex::encode(bytestring, BROTLI).unwrap();
        assert!(encoded.len() < bytestring.len());

        let decoded = Codex::decode(&encoded, BROTLI).unwrap();
        assert_eq!(decoded.as_slice(), bytestring);
    }

    #[test]
    fn no_compression_is_a_copy() {
        assert_eq!(Codex::encode(b"plain", NONE).unwrap(), b"plain".to_vec());
        assert_eq!(Codex::decode(b"plain", NONE).unwrap(), b"plain".to_vec());
    }

    #[test]
    fn corrupt_gzip_is_an_error_not_a_panic() {
        let result = Codex::decode(b"definitely not gzip", GZIP);
        assert!(result.is_err());
    }

    #[test]
    fn content_encoding_names() {
        assert_eq!(CompressionAlgorithm::from_content_encoding("gzip"), Some(GZIP));
        assert_eq!(CompressionAlgorithm::from_content_encoding(" GZIP "), Some(GZIP));
        assert_eq!(CompressionAlgorithm::from_content_encoding("deflate"), Some(DEFLATE));
        assert_eq!(CompressionAlgorithm::from_content_encoding("br"), Some(BROTLI));
        assert_eq!(CompressionAlgorithm::from_content_encoding("identity"), Some(NONE));
        assert_eq!(CompressionAlgorithm::from_content_encoding("zstd"), None);
    }
}

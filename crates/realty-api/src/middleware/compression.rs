//! Response compression layer.

use tower_http::compression::CompressionLayer;

/// Gzip compression for responses whose client accepts it.
pub fn build_compression_layer() -> CompressionLayer {
    CompressionLayer::new().gzip(true)
}

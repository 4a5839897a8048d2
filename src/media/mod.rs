/// Image format normalization
///
/// This module handles:
/// - Decoding any recognized raster format
/// - Flattening transparency onto a white background
/// - Encoding JPEGs at a fixed quality
/// - Removing the original once the JPEG is written

pub mod convert;

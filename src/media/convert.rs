//! Raster to JPEG conversion
//!
//! Decodes any recognized image, flattens transparency onto white and writes
//! a `.jpg` next to the original. The original is deleted only after the JPEG
//! has been fully written. An existing `.jpg` is never overwritten.

use image::codecs::jpeg::JpegEncoder;
use image::{ColorType, DynamicImage, ImageReader, RgbImage};
use std::fs::{self, File, OpenOptions};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::error::RenameError;
use crate::scan;
use crate::state::data::{is_image_extension, SourceFile};
use crate::state::events::{EventSink, Reporter};
use crate::state::summary::{ItemOutcome, RunSummary};

/// JPEG quality used for every converted file
pub const JPEG_QUALITY: u8 = 95;

/// What happened to a file handed to the converter
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Conversion {
    /// JPEG written and original removed; carries the new file
    Converted(SourceFile),
    /// A `.jpg` with the same stem already exists; original kept
    TargetExists(PathBuf),
}

/// Convert one image to JPEG at the same base path
pub fn convert_to_jpeg(source: &SourceFile) -> Result<Conversion, RenameError> {
    let target = source.path.with_extension("jpg");
    if scan::is_occupied(&target) {
        return Ok(Conversion::TargetExists(target));
    }

    let image = decode(&source.path).map_err(|e| RenameError::Decode {
        path: source.path.clone(),
        source: e,
    })?;
    let rgb = flatten_onto_white(&image);

    let file = match OpenOptions::new().write(true).create_new(true).open(&target) {
        Ok(file) => file,
        Err(e) if e.kind() == io::ErrorKind::AlreadyExists => {
            return Ok(Conversion::TargetExists(target));
        }
        Err(e) => {
            return Err(RenameError::Write {
                path: target,
                source: e,
            });
        }
    };

    if let Err(e) = write_jpeg(file, &target, &rgb) {
        // Never leave a truncated JPEG behind
        let _ = fs::remove_file(&target);
        return Err(e);
    }

    fs::remove_file(&source.path).map_err(|e| RenameError::RemoveOriginal {
        path: source.path.clone(),
        source: e,
    })?;

    Ok(Conversion::Converted(SourceFile {
        path: target,
        stem: source.stem.clone(),
        extension: "jpg".to_string(),
    }))
}

/// Convert every recognized image in `folder` that is not already a `.jpg`
///
/// `.jpeg` files are re-encoded as well so the folder ends up with a single
/// extension.
pub fn convert_folder_to_jpeg(folder: &Path, sink: &dyn EventSink) -> Result<RunSummary, RenameError> {
    let reporter = Reporter::new(sink);
    let mut summary = RunSummary::default();
    convert_folder(folder, &reporter, &mut summary)?;
    Ok(summary)
}

pub(crate) fn convert_folder(
    folder: &Path,
    reporter: &Reporter<'_>,
    summary: &mut RunSummary,
) -> Result<(), RenameError> {
    let files = scan::list_files(folder, is_image_extension)?;
    summary.discovered_count = files.len();
    normalize(files, |file| file.extension != "jpg", reporter, summary);
    Ok(())
}

/// Convert the files selected by `needs_conversion` and return the JPEGs
/// usable downstream, in input order
///
/// Files that fail to convert, or whose target already exists, are logged
/// and left out of the result.
pub fn normalize(
    files: Vec<SourceFile>,
    needs_conversion: impl Fn(&SourceFile) -> bool,
    reporter: &Reporter<'_>,
    summary: &mut RunSummary,
) -> Vec<SourceFile> {
    let mut ready = Vec::with_capacity(files.len());

    for file in files {
        if !needs_conversion(&file) {
            ready.push(file);
            continue;
        }

        match convert_to_jpeg(&file) {
            Ok(Conversion::Converted(jpeg)) => {
                reporter.info(format!("Converted {} → {}", file.file_name(), jpeg.file_name()));
                summary.record(ItemOutcome::Converted);
                ready.push(jpeg);
            }
            Ok(Conversion::TargetExists(target)) => {
                reporter.warn(format!(
                    "{} already exists, skipping conversion of {}",
                    target.file_name().unwrap_or_default().to_string_lossy(),
                    file.file_name()
                ));
                summary.record(ItemOutcome::Skipped);
            }
            Err(e) => {
                reporter.error(format!("Error converting {}: {}", file.file_name(), e));
                summary.record(ItemOutcome::Failed(e.to_string()));
            }
        }
    }

    ready
}

fn decode(path: &Path) -> image::ImageResult<DynamicImage> {
    ImageReader::open(path)?.with_guessed_format()?.decode()
}

/// Drop the alpha channel by compositing onto an opaque white canvas
///
/// Images without alpha are converted straight to RGB8. Palette images with a
/// transparency entry arrive here already expanded to RGBA by the decoder.
pub fn flatten_onto_white(image: &DynamicImage) -> RgbImage {
    if !image.color().has_alpha() {
        return image.to_rgb8();
    }

    let rgba = image.to_rgba8();
    let mut flat = RgbImage::new(rgba.width(), rgba.height());
    for (dst, src) in flat.pixels_mut().zip(rgba.pixels()) {
        let alpha = src[3];
        for c in 0..3 {
            dst[c] = blend_over_white(src[c], alpha);
        }
    }
    flat
}

fn blend_over_white(channel: u8, alpha: u8) -> u8 {
    let (c, a) = (u32::from(channel), u32::from(alpha));
    ((c * a + 255 * (255 - a) + 127) / 255) as u8
}

fn write_jpeg(file: File, target: &Path, rgb: &RgbImage) -> Result<(), RenameError> {
    let mut writer = BufWriter::new(file);
    let mut encoder = JpegEncoder::new_with_quality(&mut writer, JPEG_QUALITY);
    encoder
        .encode(rgb.as_raw(), rgb.width(), rgb.height(), ColorType::Rgb8.into())
        .map_err(|e| RenameError::Encode {
            path: target.to_path_buf(),
            source: e,
        })?;

    writer.flush().map_err(|e| RenameError::Write {
        path: target.to_path_buf(),
        source: e,
    })
}

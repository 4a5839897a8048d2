//! Folder pass orchestration
//!
//! One pass: convert → list → parse → group → order → rename. Per-file
//! failures are logged and counted; only an unusable folder ends a pass
//! early.

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use crate::error::RenameError;
use crate::media::convert;
use crate::naming::generic::parse_generic;
use crate::naming::structured::parse_structured;
use crate::rename::executor::{self, Progress};
use crate::rename::plan::{self, Group};
use crate::scan;
use crate::state::data::{is_jpeg_extension, OrderKey, ParsedEntry, Scheme};
use crate::state::events::{EventSink, Reporter};
use crate::state::summary::{ItemOutcome, RunSummary};

/// Rename a folder with the generic 6-character prefix scheme
///
/// Every non-`.jpg` image is converted first, then all `.jpg` files are
/// numbered per prefix in filename order.
pub fn rename_generic(folder: &Path, sink: &dyn EventSink) -> Result<RunSummary, RenameError> {
    let reporter = Reporter::new(sink);
    scan::ensure_folder(folder)?;
    reporter.info(format!("Folder: {}", folder.display()));

    let mut summary = RunSummary::default();
    convert::convert_folder(folder, &reporter, &mut summary)?;

    let files = scan::list_files(folder, |ext| ext == "jpg")?;
    reporter.info(format!("Images found: {}", files.len()));
    if files.is_empty() {
        reporter.warn("No images found.");
    }

    let codes: BTreeSet<&str> = files.iter().map(|f| parse_generic(&f.stem)).collect();
    if codes.is_empty() {
        reporter.info("Found 0 distinct codes");
    } else {
        reporter.info(format!(
            "Found {} distinct codes: {}",
            codes.len(),
            codes.into_iter().collect::<Vec<_>>().join(", ")
        ));
    }

    let entries = files
        .into_iter()
        .enumerate()
        .map(|(position, source)| ParsedEntry {
            group_key: parse_generic(&source.stem).to_string(),
            order_key: OrderKey::Listing(position),
            source,
        })
        .collect();

    execute_groups(folder, plan::group_contiguous(entries), "CODE", &reporter, &mut summary);
    Ok(summary)
}

/// Rename a folder with the structured article/view scheme
///
/// PNGs are converted first; JPEGs and converted PNGs are grouped by article
/// and numbered by camera view. Names that do not parse are left untouched.
pub fn rename_structured(folder: &Path, sink: &dyn EventSink) -> Result<RunSummary, RenameError> {
    let reporter = Reporter::new(sink);
    scan::ensure_folder(folder)?;
    reporter.info(format!("Folder: {}", folder.display()));

    let files = scan::list_files(folder, |ext| is_jpeg_extension(ext) || ext == "png")?;
    reporter.info(format!("Images found: {} (JPG + PNG)", files.len()));
    if files.is_empty() {
        reporter.warn("No images found.");
    }

    let mut summary = RunSummary {
        discovered_count: files.len(),
        ..RunSummary::default()
    };
    let files = convert::normalize(files, |file| file.extension == "png", &reporter, &mut summary);

    let mut entries = Vec::with_capacity(files.len());
    for file in files {
        match parse_structured(&file.stem) {
            Some(name) => entries.push(ParsedEntry {
                order_key: name.order_key(),
                group_key: name.article_code,
                source: file,
            }),
            None => {
                reporter.info(format!("[SKIP] Unrecognized name: {}", file.file_name()));
                summary.record(ItemOutcome::Unparsed);
            }
        }
    }

    let groups = plan::group_by_key(entries);
    reporter.info(format!("Article codes: {}", groups.len()));

    execute_groups(folder, groups, "ARTICLE", &reporter, &mut summary);
    Ok(summary)
}

/// Run one pass with the given scheme
pub fn run(folder: &Path, scheme: Scheme, sink: &dyn EventSink) -> Result<RunSummary, RenameError> {
    match scheme {
        Scheme::Generic => rename_generic(folder, sink),
        Scheme::Structured => rename_structured(folder, sink),
    }
}

/// Run one pass on a blocking worker thread
///
/// Events reach `sink` from the worker thread while the pass runs. The pass
/// cannot be cancelled once started.
pub async fn run_in_background<S>(folder: PathBuf, scheme: Scheme, sink: S) -> Result<RunSummary, RenameError>
where
    S: EventSink + Send + 'static,
{
    tokio::task::spawn_blocking(move || run(&folder, scheme, &sink))
        .await
        .map_err(|e| RenameError::Worker(e.to_string()))?
}

fn execute_groups(
    folder: &Path,
    groups: Vec<Group>,
    label: &str,
    reporter: &Reporter<'_>,
    summary: &mut RunSummary,
) {
    let total = groups.iter().map(|g| g.entries.len()).sum();
    let mut progress = Progress::new(total);
    if total == 0 {
        reporter.progress(0, 0);
    }

    summary.group_count = groups.len();
    for group in groups {
        reporter.info(format!("[{}] {} – images: {}", label, group.key, group.entries.len()));
        reporter.group(&group.key);
        executor::execute_group(folder, group.into_plan(), &mut progress, reporter, summary);
    }

    reporter.group("");
    reporter.info(format!(
        "Rename complete: {} renamed, {} skipped, {} failed.",
        summary.renamed_count, summary.skipped_count, summary.failed_count
    ));
}

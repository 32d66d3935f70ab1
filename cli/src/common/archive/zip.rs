//! # clikit ZIP Archive Operations (`common::archive::zip`)
//!
//! File: cli/src/common/archive/zip.rs
//!
//! ## Overview
//!
//! This module creates and extracts standard zip containers on the local
//! filesystem:
//!
//! - [`archive`] walks a source directory (or a single file) and writes each entry
//!   into a new container, deflating file contents.
//! - [`unarchive`] reconstructs the directory/file structure of a container below
//!   a target directory.
//! - [`list_entries`] reports the entries of a container without extracting it.
//!
//! ## Architecture
//!
//! The module leverages the `zip` crate for the container format and `walkdir` for
//! the depth-first traversal. Entry names come from
//! [`PathNormalizer`](super::naming::PathNormalizer), so archiving `/tmp/foo`
//! produces `foo/`-prefixed entries and never an entry for `foo` itself.
//!
//! Both operations stop at the first error. Nothing already written is removed: a
//! failed `archive` may leave a partial container behind, and a failed `unarchive`
//! leaves the files extracted so far. Cleaning up is the caller's decision.
//!
//! Traversal order is whatever the filesystem enumerates; no sorting is applied.
//!
//! ## Usage
//!
//! ```rust
//! use clikit::common::archive::zip;
//! use clikit::core::error::Result;
//! # use std::fs;
//!
//! # fn main() -> Result<()> {
//! # let tmp = tempfile::tempdir()?;
//! # fs::create_dir_all(tmp.path().join("site/css"))?;
//! # fs::write(tmp.path().join("site/css/main.css"), "body {}")?;
//! let site = tmp.path().join("site");
//! let bundle = tmp.path().join("site.zip");
//!
//! zip::archive(&site, &bundle)?;
//! zip::unarchive(&bundle, &tmp.path().join("restored"))?;
//!
//! assert!(tmp.path().join("restored/site/css/main.css").is_file());
//! # Ok(())
//! # }
//! ```
//!
use super::naming::{extraction_path, PathNormalizer};
use crate::common::fs::io::{ensure_dir_exists, set_mode};
use crate::core::error::{KitError, Result};
use std::fs::{self, File};
use std::io::{self, ErrorKind};
use std::path::Path;
use tracing::{debug, info};
use walkdir::WalkDir;
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipArchive, ZipWriter};

/// Entries larger than this need zip64 records.
const ZIP64_THRESHOLD: u64 = u32::MAX as u64;

/// One entry of a zip container, as reported by [`list_entries`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArchiveEntry {
    /// Relative `/`-separated name; directory markers end with `/`.
    pub name: String,
    pub is_directory: bool,
    /// Unix permission bits, when the container records them.
    pub mode: Option<u32>,
    /// Uncompressed size in bytes.
    pub size: u64,
    pub compressed_size: u64,
    pub compression: CompressionMethod,
}

/// # Create Zip Archive (`archive`)
///
/// Writes the tree rooted at `source` into a new zip container at `target`.
///
/// - Directories become directory markers (`name/`, no content).
/// - Files become deflate-compressed entries with their bytes streamed in.
/// - Unix permission bits of the source entries are recorded.
/// - If `target` lies inside `source`, it is not archived into itself.
///
/// ## Errors
///
/// - `KitError::InvalidArgument` if `source` or `target` is empty; nothing is
///   created in that case.
/// - `KitError::Io` if the container cannot be created or any entry cannot be read.
/// - `KitError::NotFound` if `source` does not exist. The container has already
///   been created at this point and is left behind without entries.
/// - `KitError::Archive` if the zip writer fails.
pub fn archive(source: &Path, target: &Path) -> Result<()> {
    if target.as_os_str().is_empty() {
        return Err(KitError::InvalidArgument(
            "The 'target' parameter was empty. A target is required to create a Zip Archive"
                .into(),
        )
        .into());
    }
    if source.as_os_str().is_empty() {
        return Err(KitError::InvalidArgument(
            "The 'source' parameter was empty. A source is required to create a Zip Archive"
                .into(),
        )
        .into());
    }

    info!("Creating archive {:?} from {:?}", target, source);
    let zip_file = File::create(target).map_err(|e| KitError::io(target, e))?;
    let mut writer = ZipWriter::new(zip_file);

    let source_metadata = match fs::metadata(source) {
        Ok(metadata) => metadata,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            // Leave a valid, empty container behind.
            writer.finish().map_err(KitError::from)?;
            return Err(KitError::NotFound(format!(
                "Archive source '{}' doesn't exist",
                source.display()
            ))
            .into());
        }
        Err(e) => return Err(KitError::io(source, e).into()),
    };

    let normalizer = PathNormalizer::new(source, source_metadata.is_dir());
    let output = fs::canonicalize(target).ok();
    let mut entries = 0usize;

    for walked in WalkDir::new(source) {
        let entry = walked.map_err(|e| {
            let path = e.path().map(Path::to_path_buf).unwrap_or_else(|| source.to_path_buf());
            KitError::io(path, io::Error::from(e))
        })?;
        let path = entry.path();

        let Some(name) = normalizer.archive_name(path) else {
            debug!("Skipping archive root {:?}", path);
            continue;
        };
        let metadata = entry
            .metadata()
            .map_err(|e| KitError::io(path, io::Error::from(e)))?;

        if entry.file_type().is_dir() {
            let options = entry_options(&metadata, CompressionMethod::Stored);
            writer
                .add_directory(format!("{}/", name), options)
                .map_err(KitError::from)?;
            debug!("Added directory entry '{}/'", name);
            entries += 1;
            continue;
        }

        if is_same_file(path, output.as_deref()) {
            debug!("Skipping the archive being written: {:?}", path);
            continue;
        }

        let options = entry_options(&metadata, CompressionMethod::Deflated);
        writer
            .start_file(name.as_str(), options)
            .map_err(KitError::from)?;
        let mut file = File::open(path).map_err(|e| KitError::io(path, e))?;
        let copied = io::copy(&mut file, &mut writer).map_err(|e| KitError::io(path, e))?;
        debug!("Added file entry '{}' ({} bytes)", name, copied);
        entries += 1;
    }

    writer.finish().map_err(KitError::from)?;
    info!("Wrote {} entries to {:?}", entries, target);
    Ok(())
}

/// # Extract Zip Archive (`unarchive`)
///
/// Extracts every entry of the container at `source` below `target`. An empty
/// `target` means the current working directory; a missing one is created.
///
/// Directory markers are created with their recorded permission bits (existing
/// directories are fine). File entries get any missing parent directories first,
/// so entries may appear in any order inside the container.
///
/// ## Errors
///
/// - `KitError::NotFound` if `source` is missing or is not a valid zip container.
/// - `KitError::InvalidArgument` if an entry name points outside `target`.
/// - `KitError::Io` / `KitError::Archive` for the first entry that fails to extract.
pub fn unarchive(source: &Path, target: &Path) -> Result<()> {
    let mut archive = open_archive(source)?;
    info!(
        "Extracting {} entries from {:?} into {:?}",
        archive.len(),
        source,
        target
    );

    for index in 0..archive.len() {
        let mut entry = archive.by_index(index).map_err(KitError::from)?;
        let out_path = extraction_path(target, entry.name())?;

        if entry.is_dir() {
            create_dir_with_mode(&out_path, entry.unix_mode())?;
            debug!("Created directory {:?}", out_path);
            continue;
        }

        if let Some(parent) = out_path.parent().filter(|p| !p.as_os_str().is_empty()) {
            ensure_dir_exists(parent)?;
        }
        let mut out_file = File::create(&out_path).map_err(|e| KitError::io(&out_path, e))?;
        let copied =
            io::copy(&mut entry, &mut out_file).map_err(|e| KitError::io(&out_path, e))?;
        if let Some(mode) = entry.unix_mode() {
            set_mode(&out_path, mode & 0o777)?;
        }
        debug!("Extracted {:?} ({} bytes)", out_path, copied);
    }

    info!("Finished extracting {:?}", source);
    Ok(())
}

/// Lists the entries of the container at `source` in stored order.
///
/// ## Errors
///
/// `KitError::NotFound` if `source` is missing or is not a valid zip container.
pub fn list_entries(source: &Path) -> Result<Vec<ArchiveEntry>> {
    let mut archive = open_archive(source)?;
    let mut entries = Vec::with_capacity(archive.len());
    for index in 0..archive.len() {
        let entry = archive.by_index(index).map_err(KitError::from)?;
        entries.push(ArchiveEntry {
            name: entry.name().to_string(),
            is_directory: entry.is_dir(),
            mode: entry.unix_mode().map(|mode| mode & 0o7777),
            size: entry.size(),
            compressed_size: entry.compressed_size(),
            compression: entry.compression(),
        });
    }
    Ok(entries)
}

fn open_archive(source: &Path) -> Result<ZipArchive<File>> {
    let file = File::open(source).map_err(|e| {
        KitError::NotFound(format!(
            "Archive '{}' could not be opened: {}",
            source.display(),
            e
        ))
    })?;
    let archive = ZipArchive::new(file).map_err(|e| {
        KitError::NotFound(format!(
            "'{}' is not a valid zip archive: {}",
            source.display(),
            e
        ))
    })?;
    Ok(archive)
}

fn entry_options(metadata: &fs::Metadata, method: CompressionMethod) -> SimpleFileOptions {
    let options = SimpleFileOptions::default()
        .compression_method(method)
        .large_file(metadata.len() >= ZIP64_THRESHOLD);
    #[cfg(unix)]
    let options = {
        use std::os::unix::fs::PermissionsExt;
        options.unix_permissions(metadata.permissions().mode())
    };
    options
}

fn is_same_file(path: &Path, output: Option<&Path>) -> bool {
    match output {
        Some(output) => fs::canonicalize(path).map(|p| p == output).unwrap_or(false),
        None => false,
    }
}

fn create_dir_with_mode(path: &Path, mode: Option<u32>) -> Result<()> {
    let mut builder = fs::DirBuilder::new();
    builder.recursive(true);
    #[cfg(unix)]
    {
        use std::os::unix::fs::DirBuilderExt;
        if let Some(mode) = mode {
            builder.mode(mode & 0o777);
        }
    }
    #[cfg(not(unix))]
    let _ = mode;
    builder.create(path).map_err(|e| KitError::io(path, e))?;
    Ok(())
}

// --- Unit Tests ---
#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::error::kit_error;
    use std::collections::HashSet;
    use std::io::{Read, Write};
    use tempfile::tempdir;

    fn entry_names(archive_path: &Path) -> Result<Vec<String>> {
        Ok(list_entries(archive_path)?
            .into_iter()
            .map(|entry| entry.name)
            .collect())
    }

    fn read_entry(archive_path: &Path, name: &str) -> Result<String> {
        let mut archive = ZipArchive::new(File::open(archive_path)?)?;
        let mut entry = archive.by_name(name)?;
        let mut content = String::new();
        entry.read_to_string(&mut content)?;
        Ok(content)
    }

    #[test]
    fn test_archive_directory_prefixes_base_name() -> Result<()> {
        let temp_dir = tempdir()?;
        let source = temp_dir.path().join("foo");
        fs::create_dir_all(source.join("sub"))?;
        fs::write(source.join("bar.txt"), "bar")?;
        fs::write(source.join("sub/baz.txt"), "baz")?;
        let target = temp_dir.path().join("foo.zip");

        archive(&source, &target)?;

        let names: HashSet<String> = entry_names(&target)?.into_iter().collect();
        let expected: HashSet<String> = ["foo/bar.txt", "foo/sub/", "foo/sub/baz.txt"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        assert_eq!(names, expected);
        assert_eq!(read_entry(&target, "foo/sub/baz.txt")?, "baz");
        Ok(())
    }

    #[test]
    fn test_archive_entries_are_deflated_files_and_directory_markers() -> Result<()> {
        let temp_dir = tempdir()?;
        let source = temp_dir.path().join("a");
        fs::create_dir_all(&source)?;
        fs::write(source.join("b.txt"), "hello")?;
        fs::create_dir(source.join("empty"))?;
        let target = temp_dir.path().join("a.zip");

        archive(&source, &target)?;

        for entry in list_entries(&target)? {
            if entry.is_directory {
                assert_eq!(entry.name, "a/empty/");
                assert_eq!(entry.size, 0);
            } else {
                assert_eq!(entry.name, "a/b.txt");
                assert_eq!(entry.compression, CompressionMethod::Deflated);
                assert_eq!(entry.size, 5);
            }
        }
        assert_eq!(read_entry(&target, "a/b.txt")?, "hello");
        Ok(())
    }

    #[test]
    fn test_archive_single_file_source() -> Result<()> {
        let temp_dir = tempdir()?;
        let source = temp_dir.path().join("report.csv");
        fs::write(&source, "a,b\n1,2\n")?;
        let target = temp_dir.path().join("report.zip");

        archive(&source, &target)?;

        assert_eq!(entry_names(&target)?, vec!["report.csv".to_string()]);
        assert_eq!(read_entry(&target, "report.csv")?, "a,b\n1,2\n");
        Ok(())
    }

    #[test]
    fn test_archive_rejects_empty_arguments() -> Result<()> {
        let temp_dir = tempdir()?;
        let target = temp_dir.path().join("never.zip");

        let err = archive(Path::new(""), &target).unwrap_err();
        assert!(matches!(kit_error(&err), Some(KitError::InvalidArgument(_))));
        assert!(!target.exists());

        let err = archive(temp_dir.path(), Path::new("")).unwrap_err();
        assert!(matches!(kit_error(&err), Some(KitError::InvalidArgument(_))));
        Ok(())
    }

    #[test]
    fn test_archive_missing_source() -> Result<()> {
        let temp_dir = tempdir()?;
        let target = temp_dir.path().join("missing.zip");

        let err = archive(&temp_dir.path().join("does-not-exist"), &target).unwrap_err();
        assert!(matches!(kit_error(&err), Some(KitError::NotFound(_))));
        // The container was created first; it holds no entries.
        if target.exists() {
            assert!(list_entries(&target).map(|e| e.is_empty()).unwrap_or(true));
        }
        Ok(())
    }

    #[test]
    fn test_archive_skips_output_inside_source() -> Result<()> {
        let temp_dir = tempdir()?;
        let source = temp_dir.path().join("proj");
        fs::create_dir_all(&source)?;
        fs::write(source.join("main.rs"), "fn main() {}")?;
        let target = source.join("proj.zip");

        archive(&source, &target)?;

        assert_eq!(entry_names(&target)?, vec!["proj/main.rs".to_string()]);
        Ok(())
    }

    #[test]
    fn test_round_trip_preserves_paths_and_contents() -> Result<()> {
        let temp_dir = tempdir()?;
        let source = temp_dir.path().join("tree");
        fs::create_dir_all(source.join("x/y"))?;
        fs::create_dir_all(source.join("empty"))?;
        fs::write(source.join("top.txt"), "top")?;
        fs::write(source.join("x/mid.bin"), [0u8, 1, 2, 255])?;
        fs::write(source.join("x/y/leaf.txt"), "leaf")?;
        let target = temp_dir.path().join("tree.zip");
        let restored = temp_dir.path().join("out/nested");

        archive(&source, &target)?;
        unarchive(&target, &restored)?;

        let root = restored.join("tree");
        assert_eq!(fs::read_to_string(root.join("top.txt"))?, "top");
        assert_eq!(fs::read(root.join("x/mid.bin"))?, vec![0u8, 1, 2, 255]);
        assert_eq!(fs::read_to_string(root.join("x/y/leaf.txt"))?, "leaf");
        assert!(root.join("empty").is_dir());
        Ok(())
    }

    #[cfg(unix)]
    #[test]
    fn test_round_trip_preserves_file_mode() -> Result<()> {
        use std::os::unix::fs::PermissionsExt;
        let temp_dir = tempdir()?;
        let source = temp_dir.path().join("bin");
        fs::create_dir_all(&source)?;
        let script = source.join("run.sh");
        fs::write(&script, "#!/bin/sh\n")?;
        fs::set_permissions(&script, fs::Permissions::from_mode(0o750))?;
        let target = temp_dir.path().join("bin.zip");
        let restored = temp_dir.path().join("restored");

        archive(&source, &target)?;
        unarchive(&target, &restored)?;

        let mode = fs::metadata(restored.join("bin/run.sh"))?.permissions().mode();
        assert_eq!(mode & 0o777, 0o750);
        Ok(())
    }

    #[test]
    fn test_unarchive_file_before_its_directory() -> Result<()> {
        let temp_dir = tempdir()?;
        let target = temp_dir.path().join("handmade.zip");
        {
            let mut writer = ZipWriter::new(File::create(&target)?);
            writer.start_file("deep/nested/file.txt", SimpleFileOptions::default())?;
            writer.write_all(b"early")?;
            writer.add_directory("deep/", SimpleFileOptions::default())?;
            writer.finish()?;
        }
        let restored = temp_dir.path().join("restored");

        unarchive(&target, &restored)?;

        assert_eq!(
            fs::read_to_string(restored.join("deep/nested/file.txt"))?,
            "early"
        );
        Ok(())
    }

    #[test]
    fn test_unarchive_is_idempotent_for_directories() -> Result<()> {
        let temp_dir = tempdir()?;
        let source = temp_dir.path().join("d");
        fs::create_dir_all(source.join("inner"))?;
        let target = temp_dir.path().join("d.zip");
        let restored = temp_dir.path().join("restored");
        fs::create_dir_all(restored.join("d/inner"))?;

        archive(&source, &target)?;
        unarchive(&target, &restored)?;
        unarchive(&target, &restored)?;

        assert!(restored.join("d/inner").is_dir());
        Ok(())
    }

    #[test]
    fn test_unarchive_missing_or_invalid_archive() -> Result<()> {
        let temp_dir = tempdir()?;

        let err = unarchive(&temp_dir.path().join("nope.zip"), temp_dir.path()).unwrap_err();
        assert!(matches!(kit_error(&err), Some(KitError::NotFound(_))));

        let bogus = temp_dir.path().join("bogus.zip");
        fs::write(&bogus, "this is not a zip file")?;
        let err = unarchive(&bogus, temp_dir.path()).unwrap_err();
        assert!(matches!(kit_error(&err), Some(KitError::NotFound(_))));
        Ok(())
    }

    #[test]
    fn test_unarchive_rejects_escaping_entries() -> Result<()> {
        let temp_dir = tempdir()?;
        let target = temp_dir.path().join("evil.zip");
        {
            let mut writer = ZipWriter::new(File::create(&target)?);
            writer.start_file("../escaped.txt", SimpleFileOptions::default())?;
            writer.write_all(b"gotcha")?;
            writer.finish()?;
        }
        let restored = temp_dir.path().join("restored");

        let err = unarchive(&target, &restored).unwrap_err();
        assert!(matches!(kit_error(&err), Some(KitError::InvalidArgument(_))));
        assert!(!temp_dir.path().join("escaped.txt").exists());
        Ok(())
    }
}

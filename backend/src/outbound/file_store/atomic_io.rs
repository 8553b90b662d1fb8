//! Atomic file replacement inside a capability directory.
//!
//! Contents go to a hidden temporary file in the same directory which is
//! then renamed over the target, so readers never observe a partial write.

use std::io::{self, Write};

use cap_std::fs::OpenOptions;
use cap_std::fs_utf8::Dir;
use uuid::Uuid;

/// Replace `file_name` in `dir` with `contents`.
///
/// # Errors
///
/// Returns the underlying I/O error when the temporary file cannot be
/// written or renamed; the temporary file is removed on a best-effort basis.
pub(crate) fn write_atomic(dir: &Dir, file_name: &str, contents: &str) -> io::Result<()> {
    if file_name.is_empty() || file_name.contains(['/', '\\']) {
        return Err(io::Error::new(
            io::ErrorKind::InvalidInput,
            "state file name must be a single path component",
        ));
    }
    let tmp_name = temp_name(file_name);

    write_temp_file(dir, &tmp_name, contents)?;
    if let Err(error) = replace(dir, &tmp_name, file_name) {
        drop(dir.remove_file(&tmp_name));
        return Err(error);
    }
    sync_directory(dir);
    Ok(())
}

fn temp_name(file_name: &str) -> String {
    format!(".{file_name}.tmp.{}", Uuid::new_v4().simple())
}

fn write_temp_file(dir: &Dir, tmp_name: &str, contents: &str) -> io::Result<()> {
    let mut options = OpenOptions::new();
    options.write(true).create_new(true);
    let mut file = dir.open_with(tmp_name, &options)?;

    let written = file
        .write_all(contents.as_bytes())
        .and_then(|()| file.sync_all());
    if let Err(error) = written {
        drop(file);
        drop(dir.remove_file(tmp_name));
        return Err(error);
    }
    Ok(())
}

#[cfg(windows)]
fn replace(dir: &Dir, tmp_name: &str, target_name: &str) -> io::Result<()> {
    // Windows rename fails if the target exists.
    match dir.remove_file(target_name) {
        Ok(()) => {}
        Err(error) if error.kind() == io::ErrorKind::NotFound => {}
        Err(error) => return Err(error),
    }
    dir.rename(tmp_name, dir, target_name)
}

#[cfg(not(windows))]
fn replace(dir: &Dir, tmp_name: &str, target_name: &str) -> io::Result<()> {
    dir.rename(tmp_name, dir, target_name)
}

fn sync_directory(dir: &Dir) {
    // Best effort; not every platform can fsync a directory handle.
    drop(dir.open(".").and_then(|handle| handle.sync_all()));
}

#[cfg(test)]
mod tests {
    use cap_std::ambient_authority;
    use rstest::rstest;

    use super::*;
    use crate::test_support::state_dir::TempStateDir;

    fn open(state: &TempStateDir) -> Dir {
        Dir::open_ambient_dir(state.path(), ambient_authority()).expect("open temp dir")
    }

    #[rstest]
    fn replaces_existing_contents() {
        let state = TempStateDir::new();
        let dir = open(&state);

        write_atomic(&dir, "records.json", "first").expect("first write");
        write_atomic(&dir, "records.json", "second").expect("second write");

        assert_eq!(dir.read_to_string("records.json").expect("read back"), "second");
    }

    #[rstest]
    fn leaves_no_temporary_files_behind() {
        let state = TempStateDir::new();
        let dir = open(&state);

        write_atomic(&dir, "records.json", "{}").expect("write");

        let names: Vec<String> = dir
            .entries()
            .expect("list dir")
            .map(|entry| entry.expect("entry").file_name().expect("utf-8 name"))
            .collect();
        assert_eq!(names, vec!["records.json".to_owned()]);
    }

    #[rstest]
    fn temporary_names_are_hidden_and_unique() {
        let first = temp_name("records.json");
        let second = temp_name("records.json");

        assert!(first.starts_with(".records.json.tmp."));
        assert_eq!(first.len(), ".records.json.tmp.".len() + 32);
        assert_ne!(first, second);
    }

    #[rstest]
    #[case("")]
    #[case("nested/records.json")]
    fn rejects_non_component_names(#[case] name: &str) {
        let state = TempStateDir::new();
        let dir = open(&state);

        let error = write_atomic(&dir, name, "{}").expect_err("invalid name");

        assert_eq!(error.kind(), io::ErrorKind::InvalidInput);
    }
}

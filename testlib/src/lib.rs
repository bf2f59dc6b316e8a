use std::path::{Path, PathBuf};
use std::{fs, io};

pub fn read_file<P: AsRef<Path>>(file_name: P) -> String {
    fs::read_to_string(&file_name)
        .unwrap_or_else(|e| panic!("failed to read {}: {e}", file_name.as_ref().display()))
}

/// Collect every file under `root` with the given extension, returned as
/// extension-less stems in a stable (sorted) order.
pub fn find(root: &Path, ext: &str) -> io::Result<Vec<PathBuf>> {
    let mut res = Vec::new();

    fn walk(dir: &Path, ext: &str, out: &mut Vec<PathBuf>) -> io::Result<()> {
        for x in fs::read_dir(dir)? {
            let entry = x?;
            let path = entry.path();
            if path.is_dir() {
                walk(&path, ext, out)?;
            } else if let Some(e) = path.extension().and_then(|s| s.to_str()) {
                if e == ext.trim_start_matches('.') {
                    let mut stem = path.clone();
                    stem.set_extension("");
                    out.push(stem);
                }
            }
        }
        Ok(())
    }

    walk(root, ext, &mut res)?;
    res.sort();
    Ok(res)
}

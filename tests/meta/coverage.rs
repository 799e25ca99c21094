//! Keeps `tests/unit` a compiled mirror of `src`

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;
    use std::fs;
    use std::io;
    use std::path::{Path, PathBuf};

    const SRC_DIR: &str = "src";
    const UNIT_DIR: &str = "tests/unit";

    // Module organization files and entry points carry no logic of their own
    fn is_structural(relative: &str) -> bool {
        relative == "lib.rs" || relative == "main.rs" || relative.ends_with("mod.rs")
    }

    fn rust_files(root: &Path) -> io::Result<BTreeSet<String>> {
        let mut found = BTreeSet::new();
        let mut pending = vec![root.to_path_buf()];

        while let Some(dir) = pending.pop() {
            for entry in fs::read_dir(&dir)? {
                let path = entry?.path();
                if path.is_dir() {
                    pending.push(path);
                } else if path.extension().is_some_and(|ext| ext == "rs") {
                    let relative = path
                        .strip_prefix(root)
                        .map_err(|_| io::Error::other("path outside root"))?;
                    found.insert(relative.to_string_lossy().replace('\\', "/"));
                }
            }
        }

        Ok(found)
    }

    fn logic_files(root: &str) -> BTreeSet<String> {
        let files = rust_files(Path::new(root))
            .unwrap_or_else(|error| unreachable!("cannot scan {root}: {error}"));
        files.into_iter().filter(|file| !is_structural(file)).collect()
    }

    fn declared_modules(mod_file: &Path) -> BTreeSet<String> {
        let content = fs::read_to_string(mod_file).unwrap_or_default();
        content
            .lines()
            .filter_map(|line| {
                let line = line.trim().strip_prefix("pub ").unwrap_or_else(|| line.trim());
                line.strip_prefix("mod ")?
                    .strip_suffix(';')
                    .map(|name| name.trim().to_string())
            })
            .collect()
    }

    #[test]
    fn test_every_source_file_has_unit_tests() {
        let sources = logic_files(SRC_DIR);
        let tests = logic_files(UNIT_DIR);

        let missing: Vec<_> = sources.difference(&tests).collect();
        assert!(
            missing.is_empty(),
            "Source files without a tests/unit counterpart: {missing:?}"
        );
    }

    #[test]
    fn test_every_unit_test_has_source_file() {
        let sources = logic_files(SRC_DIR);
        let tests = logic_files(UNIT_DIR);

        let orphaned: Vec<_> = tests.difference(&sources).collect();
        assert!(
            orphaned.is_empty(),
            "tests/unit files without a src counterpart: {orphaned:?}"
        );
    }

    #[test]
    fn test_every_unit_test_contains_tests() {
        let empty: Vec<String> = logic_files(UNIT_DIR)
            .into_iter()
            .filter(|file| {
                let content =
                    fs::read_to_string(Path::new(UNIT_DIR).join(file)).unwrap_or_default();
                !content.contains("#[test]")
            })
            .collect();

        assert!(
            empty.is_empty(),
            "Unit test files without any #[test] function: {empty:?}"
        );
    }

    // A file that no mod.rs declares is never compiled, so its tests silently never run
    #[test]
    fn test_every_unit_test_is_compiled() {
        let mut directories: BTreeSet<PathBuf> = BTreeSet::new();
        for file in logic_files(UNIT_DIR) {
            if let Some(parent) = Path::new(UNIT_DIR).join(&file).parent() {
                directories.insert(parent.to_path_buf());
            }
        }

        let mut undeclared = Vec::new();
        for dir in &directories {
            let declared = declared_modules(&dir.join("mod.rs"));

            let mut current = dir.as_path();
            while current != Path::new(UNIT_DIR) {
                let Some(name) = current.file_name() else {
                    break;
                };
                let Some(parent) = current.parent() else {
                    break;
                };
                let name = name.to_string_lossy().to_string();
                if !declared_modules(&parent.join("mod.rs")).contains(&name) {
                    undeclared.push(current.display().to_string());
                }
                current = parent;
            }

            let entries: Vec<_> = fs::read_dir(dir)
                .map(|entries| entries.flatten().collect())
                .unwrap_or_default();
            for entry in entries {
                let path = entry.path();
                let Some(stem) = path.file_stem().map(|s| s.to_string_lossy().to_string()) else {
                    continue;
                };
                if path.extension().is_some_and(|ext| ext == "rs")
                    && stem != "mod"
                    && !declared.contains(&stem)
                {
                    undeclared.push(path.display().to_string());
                }
            }
        }

        undeclared.sort();
        undeclared.dedup();
        assert!(
            undeclared.is_empty(),
            "Unit test modules not declared in their parent mod.rs: {undeclared:?}"
        );
    }
}

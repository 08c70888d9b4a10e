//! Source file discovery and loading.

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use style_lint_core::{AnalyzerConfig, SourceFile};

const UTF8_BOM: &[u8] = b"\xef\xbb\xbf";

/// Finds every file under `root` with a configured extension, minus excludes.
///
/// The result is sorted so that runs over an unchanged tree are identical.
/// A `root` that is itself a file is returned as-is.
///
/// # Errors
///
/// Returns an error if an exclude pattern is not a valid glob or the walk
/// fails.
pub fn discover_files(root: &Path, config: &AnalyzerConfig) -> Result<Vec<PathBuf>> {
    let excludes = config
        .exclude
        .iter()
        .map(|p| glob::Pattern::new(p).with_context(|| format!("Invalid exclude pattern: {p}")))
        .collect::<Result<Vec<_>>>()?;

    if root.is_file() {
        return Ok(vec![root.to_path_buf()]);
    }

    let respect = config.respect_gitignore;
    let mut builder = ignore::WalkBuilder::new(root);
    builder
        .hidden(false)
        .require_git(false)
        .git_ignore(respect)
        .git_global(respect)
        .git_exclude(respect)
        .ignore(respect);

    let mut files = Vec::new();
    for entry in builder.build() {
        let entry = entry?;
        if !entry.file_type().is_some_and(|t| t.is_file()) {
            continue;
        }

        let path = entry.path();
        if !has_extension(path, &config.extensions) {
            continue;
        }

        let rel = file_id(root, path);
        if excludes.iter().any(|p| p.matches(&rel)) {
            tracing::debug!("Excluding: {rel}");
            continue;
        }

        files.push(path.to_path_buf());
    }

    files.sort();
    Ok(files)
}

/// Reads each file into a [`SourceFile`], recording read failures explicitly.
///
/// Invalid UTF-8 is decoded with replacement characters rather than treated
/// as a read failure, and a leading byte order mark is dropped.
#[must_use]
pub fn load_sources(root: &Path, files: &[PathBuf]) -> Vec<SourceFile> {
    files
        .iter()
        .map(|path| {
            let id = file_id(root, path);
            match std::fs::read(path) {
                Ok(bytes) => SourceFile::text(id, decode(&bytes)),
                Err(e) => {
                    tracing::debug!("Failed to read {id}: {e}");
                    SourceFile::unreadable(id, e.to_string())
                }
            }
        })
        .collect()
}

fn decode(bytes: &[u8]) -> String {
    let bytes = bytes.strip_prefix(UTF8_BOM).unwrap_or(bytes);
    String::from_utf8_lossy(bytes).into_owned()
}

/// Root-relative path with `/` separators, used as the file identifier.
fn file_id(root: &Path, path: &Path) -> String {
    match path.strip_prefix(root) {
        Ok(rel) if !rel.as_os_str().is_empty() => rel
            .components()
            .map(|c| c.as_os_str().to_string_lossy())
            .collect::<Vec<_>>()
            .join("/"),
        _ => path.to_string_lossy().into_owned(),
    }
}

fn has_extension(path: &Path, extensions: &[String]) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|ext| extensions.iter().any(|want| want.eq_ignore_ascii_case(ext)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use style_lint_core::{Analyzer, RuleKind, RunSummary, SourceContents};
    use style_lint_rules::all_rules;
    use tempfile::TempDir;

    fn write(root: &Path, rel: &str, content: &str) {
        let path = root.join(rel);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, content).unwrap();
    }

    fn ids(root: &Path, config: &AnalyzerConfig) -> Vec<String> {
        discover_files(root, config)
            .unwrap()
            .iter()
            .map(|p| file_id(root, p))
            .collect()
    }

    #[test]
    fn finds_matching_extensions_sorted() {
        let tmp = TempDir::new().unwrap();
        write(tmp.path(), "src/b/Zeta.cs", "");
        write(tmp.path(), "src/Alpha.CS", "");
        write(tmp.path(), "README.md", "");
        write(tmp.path(), "src/a.java", "");

        assert_eq!(
            ids(tmp.path(), &AnalyzerConfig::default()),
            vec!["src/Alpha.CS", "src/b/Zeta.cs"]
        );

        let config = AnalyzerConfig {
            extensions: vec!["java".into()],
            ..AnalyzerConfig::default()
        };
        assert_eq!(ids(tmp.path(), &config), vec!["src/a.java"]);
    }

    #[test]
    fn default_excludes_skip_build_output() {
        let tmp = TempDir::new().unwrap();
        write(tmp.path(), "App/Program.cs", "");
        write(tmp.path(), "App/obj/Debug/Generated.cs", "");
        write(tmp.path(), "App/bin/Release/Other.cs", "");

        assert_eq!(
            ids(tmp.path(), &AnalyzerConfig::default()),
            vec!["App/Program.cs"]
        );
    }

    #[test]
    fn gitignore_is_respected_when_enabled() {
        let tmp = TempDir::new().unwrap();
        write(tmp.path(), ".gitignore", "Generated/\n");
        write(tmp.path(), "Generated/Auto.cs", "");
        write(tmp.path(), "Main.cs", "");

        assert_eq!(ids(tmp.path(), &AnalyzerConfig::default()), vec!["Main.cs"]);

        let config = AnalyzerConfig {
            respect_gitignore: false,
            ..AnalyzerConfig::default()
        };
        assert_eq!(
            ids(tmp.path(), &config),
            vec!["Generated/Auto.cs", "Main.cs"]
        );
    }

    #[test]
    fn file_root_is_checked_directly() {
        let tmp = TempDir::new().unwrap();
        write(tmp.path(), "notes.txt", "");
        let file = tmp.path().join("notes.txt");

        let files = discover_files(&file, &AnalyzerConfig::default()).unwrap();
        assert_eq!(files, vec![file.clone()]);
        assert_eq!(file_id(&file, &file), file.to_string_lossy());
    }

    #[test]
    fn invalid_exclude_pattern_is_an_error() {
        let tmp = TempDir::new().unwrap();
        let config = AnalyzerConfig {
            exclude: vec!["[".into()],
            ..AnalyzerConfig::default()
        };
        assert!(discover_files(tmp.path(), &config).is_err());
    }

    #[test]
    fn missing_files_are_marked_unreadable() {
        let tmp = TempDir::new().unwrap();
        write(tmp.path(), "Good.cs", "class A {}\n");

        let files = vec![tmp.path().join("Good.cs"), tmp.path().join("Gone.cs")];
        let sources = load_sources(tmp.path(), &files);

        assert_eq!(sources[0], SourceFile::text("Good.cs", "class A {}\n"));
        assert_eq!(sources[1].id, "Gone.cs");
        assert!(matches!(
            sources[1].contents,
            SourceContents::Unreadable { .. }
        ));
    }

    fn analyze(sources: &[SourceFile]) -> RunSummary {
        Analyzer::builder()
            .rules(all_rules().unwrap())
            .build()
            .unwrap()
            .run(sources)
    }

    #[test]
    fn legacy_encoded_file_is_still_analyzed() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("Legacy.cs"), b"// caf\xe9\n  foo();\n").unwrap();

        let sources = load_sources(tmp.path(), &[tmp.path().join("Legacy.cs")]);
        assert_eq!(
            sources[0],
            SourceFile::text("Legacy.cs", "// caf\u{fffd}\n  foo();\n")
        );

        let summary = analyze(&sources);
        assert_eq!(summary.files_scanned(), 1);
        assert!(summary.unreadable.is_empty());
        let found: Vec<(RuleKind, usize)> = summary
            .findings()
            .map(|f| (f.rule, f.location.line))
            .collect();
        assert_eq!(
            found,
            vec![(RuleKind::Indentation, 2), (RuleKind::MethodNaming, 2)]
        );
    }

    #[test]
    fn byte_order_mark_is_stripped() {
        let tmp = TempDir::new().unwrap();
        write(tmp.path(), "Bom.cs", "\u{feff}   class A {}\n   class B {}\n");

        let sources = load_sources(tmp.path(), &[tmp.path().join("Bom.cs")]);
        assert_eq!(
            sources[0],
            SourceFile::text("Bom.cs", "   class A {}\n   class B {}\n")
        );

        let lines: Vec<usize> = analyze(&sources)
            .findings()
            .filter(|f| f.rule == RuleKind::Indentation)
            .map(|f| f.location.line)
            .collect();
        assert_eq!(lines, vec![1, 2]);
    }
}

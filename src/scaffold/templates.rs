//! Template catalog for generated projects
//!
//! Static files are embedded at compile time from `resources/python/`.
//! README and the requirement manifests are rendered from the project name
//! and the dependency lists.

/// Runtime dependencies, one per line in `requirements.txt`
pub const BASE_DEPENDENCIES: &[&str] = &["psycopg2-binary"];

/// Development dependencies, one per line in `requirements-dev.txt`
pub const DEV_DEPENDENCIES: &[&str] = &["ruff", "pytest"];

// =============================================================================
// Embedded Templates
// =============================================================================

mod embedded {
    pub const GITIGNORE: &str = include_str!("../../resources/python/gitignore");
    pub const LICENSE: &str = include_str!("../../resources/python/LICENSE");
    pub const PYPROJECT_TOML: &str = include_str!("../../resources/python/pyproject.toml");
    pub const CLI_MAIN_PY: &str = include_str!("../../resources/python/cli_main.py");

    // Web frontend
    pub const WEBAPP_APP_PY: &str = include_str!("../../resources/python/webapp/app.py");
    pub const WEBAPP_INDEX_HTML: &str = include_str!("../../resources/python/webapp/index.html");
}

/// One file to write: path relative to the project root, literal content
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileTemplate {
    pub path: &'static str,
    pub content: String,
}

impl FileTemplate {
    fn new(path: &'static str, content: impl Into<String>) -> Self {
        Self {
            path,
            content: content.into(),
        }
    }
}

/// `README.md` naming the project
pub fn readme(name: &str) -> String {
    format!("# {name}\n\nProject generated with `newproj`.")
}

/// One identifier per line, newline-terminated
pub fn requirements(deps: &[&str]) -> String {
    let mut out = deps.join("\n");
    out.push('\n');
    out
}

/// Every file for a project, root files first
pub fn catalog(name: &str, include_web: bool) -> Vec<FileTemplate> {
    let mut files = vec![
        FileTemplate::new("README.md", readme(name)),
        FileTemplate::new(".gitignore", embedded::GITIGNORE),
        FileTemplate::new("LICENSE", embedded::LICENSE),
        FileTemplate::new("requirements.txt", requirements(BASE_DEPENDENCIES)),
        FileTemplate::new("requirements-dev.txt", requirements(DEV_DEPENDENCIES)),
        FileTemplate::new("pyproject.toml", embedded::PYPROJECT_TOML),
        FileTemplate::new("cli/main.py", embedded::CLI_MAIN_PY),
    ];

    if include_web {
        files.push(FileTemplate::new("webapp/app.py", embedded::WEBAPP_APP_PY));
        files.push(FileTemplate::new(
            "webapp/templates/index.html",
            embedded::WEBAPP_INDEX_HTML,
        ));
    }

    files
}

#[cfg(test)]
mod tests {
    use super::*;

    fn content_of<'a>(files: &'a [FileTemplate], path: &str) -> &'a str {
        files
            .iter()
            .find(|f| f.path == path)
            .map(|f| f.content.as_str())
            .unwrap_or_else(|| panic!("missing template {path}"))
    }

    #[test]
    fn test_catalog_without_web() {
        let files = catalog("demo", false);
        assert_eq!(files.len(), 7);
        assert!(files.iter().all(|f| !f.path.starts_with("webapp")));
        assert_eq!(
            files.iter().filter(|f| !f.path.contains('/')).count(),
            6,
            "six root files"
        );
    }

    #[test]
    fn test_catalog_with_web() {
        let files = catalog("demo", true);
        assert_eq!(files.len(), 9);
        let html = content_of(&files, "webapp/templates/index.html");
        assert_eq!(html.matches("{{ title }}").count(), 2);
        assert!(content_of(&files, "webapp/app.py").contains(r#"title="Welcome""#));
    }

    #[test]
    fn test_requirements_manifests() {
        assert_eq!(requirements(BASE_DEPENDENCIES), "psycopg2-binary\n");
        assert_eq!(requirements(DEV_DEPENDENCIES), "ruff\npytest\n");
    }

    #[test]
    fn test_fixed_contents() {
        let files = catalog("demo", false);
        assert_eq!(
            content_of(&files, "README.md"),
            "# demo\n\nProject generated with `newproj`."
        );
        assert_eq!(
            content_of(&files, ".gitignore"),
            ".venv/\n__pycache__/\n*.pyc\n.env\n"
        );
        assert_eq!(content_of(&files, "LICENSE"), "MIT License\n");

        let pyproject = content_of(&files, "pyproject.toml");
        assert!(pyproject.starts_with("[tool.ruff]\n"));
        assert!(pyproject.contains("line-length = 100\n"));
        assert!(pyproject.contains(r#"exclude = ["migrations", "tests/data"]"#));
        assert!(pyproject.ends_with("target-version = \"py311\"\n"));

        assert!(content_of(&files, "cli/main.py").contains(r#"print("CLI is working!")"#));
    }
}

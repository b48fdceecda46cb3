use std::{
    collections::BTreeMap,
    path::{Component, Path, PathBuf},
};

use tokio::fs;

use crate::error::ServiceError;

/// Directory of plain-text templates with a fixed file extension.
#[derive(Debug, Clone)]
pub struct TemplateStore {
    dir: PathBuf,
    extension: String,
}

impl TemplateStore {
    pub fn new(dir: impl Into<PathBuf>, extension: impl Into<String>) -> Self {
        Self {
            dir: dir.into(),
            extension: extension.into(),
        }
    }

    /// Lists matching templates numbered from 1, sorted by file name.
    ///
    /// Entries are judged through `fs::metadata`, which follows symlinks, so
    /// the listing agrees with [`TemplateStore::resolve`].
    pub async fn list(&self) -> Result<BTreeMap<usize, String>, ServiceError> {
        let is_dir = fs::metadata(&self.dir)
            .await
            .map(|meta| meta.is_dir())
            .unwrap_or(false);
        if !is_dir {
            return Err(ServiceError::NotFound("Template folder not found".into()));
        }

        let suffix = format!(".{}", self.extension);
        let mut names = Vec::new();
        let mut entries = fs::read_dir(&self.dir).await?;
        while let Some(entry) = entries.next_entry().await? {
            let Some(name) = entry.file_name().to_str().map(str::to_string) else {
                continue;
            };
            if !name.ends_with(&suffix) {
                continue;
            }
            // dangling links have no metadata and are skipped
            let is_file = fs::metadata(entry.path())
                .await
                .map(|meta| meta.is_file())
                .unwrap_or(false);
            if is_file {
                names.push(name);
            }
        }

        if names.is_empty() {
            return Err(ServiceError::NotFound("No templates found".into()));
        }
        names.sort();

        Ok(names
            .into_iter()
            .enumerate()
            .map(|(idx, name)| (idx + 1, name))
            .collect())
    }

    /// Resolves a template name to an existing file inside the store.
    pub fn resolve(&self, name: &str) -> Result<PathBuf, ServiceError> {
        let not_found = || ServiceError::NotFound("Template not found".into());

        if !is_plain_file_name(name) {
            return Err(not_found());
        }
        let path = self.dir.join(name);
        if !path.is_file() {
            return Err(not_found());
        }
        Ok(path)
    }
}

/// True when `name` is a single normal path component.
pub(crate) fn is_plain_file_name(name: &str) -> bool {
    let mut components = Path::new(name).components();
    matches!(
        (components.next(), components.next()),
        (Some(Component::Normal(_)), None)
    ) && !name.contains(['/', '\\'])
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::*;

    #[tokio::test]
    async fn missing_directory_is_not_found() {
        let tmp = tempfile::tempdir().unwrap();
        let store = TemplateStore::new(tmp.path().join("absent"), "txt");
        let err = store.list().await.unwrap_err();
        assert!(matches!(err, ServiceError::NotFound(ref msg) if msg == "Template folder not found"));
    }

    #[tokio::test]
    async fn empty_directory_is_not_found() {
        let tmp = tempfile::tempdir().unwrap();
        fs::write(tmp.path().join("notes.md"), "not a template").unwrap();
        let store = TemplateStore::new(tmp.path(), "txt");
        let err = store.list().await.unwrap_err();
        assert!(matches!(err, ServiceError::NotFound(ref msg) if msg == "No templates found"));
    }

    #[tokio::test]
    async fn lists_matching_files_from_one() {
        let tmp = tempfile::tempdir().unwrap();
        fs::write(tmp.path().join("resume.txt"), "").unwrap();
        fs::write(tmp.path().join("cover.txt"), "").unwrap();
        fs::write(tmp.path().join("readme.md"), "").unwrap();
        fs::create_dir(tmp.path().join("nested.txt")).unwrap();

        let listed = TemplateStore::new(tmp.path(), "txt").list().await.unwrap();
        assert_eq!(listed.len(), 2);
        assert_eq!(listed[&1], "cover.txt");
        assert_eq!(listed[&2], "resume.txt");
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn symlinked_templates_are_listed_and_resolvable() {
        let tmp = tempfile::tempdir().unwrap();
        let real = tmp.path().join("real");
        let tpl = tmp.path().join("tpl");
        fs::create_dir(&real).unwrap();
        fs::create_dir(&tpl).unwrap();
        fs::write(real.join("resume.txt"), "Place_Holder_Name").unwrap();
        std::os::unix::fs::symlink(real.join("resume.txt"), tpl.join("resume.txt")).unwrap();
        std::os::unix::fs::symlink(real.join("gone.txt"), tpl.join("dangling.txt")).unwrap();

        let store = TemplateStore::new(&tpl, "txt");
        let listed = store.list().await.unwrap();
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[&1], "resume.txt");
        assert!(store.resolve("resume.txt").is_ok());
        assert!(matches!(store.resolve("dangling.txt"), Err(ServiceError::NotFound(_))));
    }

    #[test]
    fn resolve_rejects_escapes_and_missing_files() {
        let tmp = tempfile::tempdir().unwrap();
        fs::write(tmp.path().join("resume.txt"), "").unwrap();
        let store = TemplateStore::new(tmp.path(), "txt");

        assert_eq!(store.resolve("resume.txt").unwrap(), tmp.path().join("resume.txt"));
        for name in ["missing.txt", "../resume.txt", "sub/resume.txt", "", ".", ".."] {
            assert!(
                matches!(store.resolve(name), Err(ServiceError::NotFound(_))),
                "{name:?} should not resolve"
            );
        }
    }
}

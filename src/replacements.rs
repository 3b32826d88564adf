use crate::{answers::Answers, config::Placeholders};
use indexmap::IndexMap;

/// Ordered literal substitutions derived from the placeholders and answers.
///
/// Entries are applied one after another to the whole text, so an entry sees
/// the output of every entry before it. Re-inserting an existing search
/// string updates its replacement but keeps its position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReplacementTable {
    entries: IndexMap<String, String>,
}

impl ReplacementTable {
    pub fn build(placeholders: &Placeholders, answers: &Answers) -> Self {
        let Placeholders {
            package_name,
            project_name,
            author_name,
            author_email,
            github_username,
            repo_name,
        } = placeholders;
        let new_user = &answers.github_username;
        let new_project = &answers.project_name;

        let mut entries = IndexMap::new();
        // Imports, Dockerfile CMD, mkdocs references.
        entries.insert(package_name.clone(), answers.package_name.clone());
        entries.insert(
            format!("name = \"{project_name}\""),
            format!("name = \"{new_project}\""),
        );
        entries.insert(author_name.clone(), answers.author_name.clone());
        entries.insert(author_email.clone(), answers.author_email.clone());
        entries.insert(
            format!("github.com/{github_username}/{package_name}"),
            format!("github.com/{new_user}/{new_project}"),
        );
        // README badges.
        entries.insert(
            format!("github.com/{github_username}/{repo_name}"),
            format!("github.com/{new_user}/{new_project}"),
        );
        // GitHub Pages documentation.
        entries.insert(
            format!("https://{github_username}.github.io/{package_name}"),
            format!("https://{new_user}.github.io/{new_project}"),
        );
        entries.insert(
            format!("{github_username}/{project_name}"),
            format!("{new_user}/{new_project}"),
        );

        Self { entries }
    }

    /// Applies every entry in order over the whole content.
    pub fn apply(&self, content: &str) -> String {
        self.entries
            .iter()
            .fold(content.to_string(), |acc, (old, new)| acc.replace(old.as_str(), new))
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(old, new)| (old.as_str(), new.as_str()))
    }
}

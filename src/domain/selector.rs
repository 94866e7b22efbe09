use crate::domain::Version;

/// Pick the latest semantic version among a repository's tag names.
///
/// Tags that are not semantic versions are skipped. Returns `None` when no
/// tag parses.
pub fn select_latest<I, S>(tags: I) -> Option<Version>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    tags.into_iter()
        .filter_map(|tag| {
            let tag = tag.as_ref();
            match Version::parse(tag) {
                Ok(version) => Some(version),
                Err(e) => {
                    tracing::debug!(tag, error = %e, "Skipping non-version tag");
                    None
                }
            }
        })
        .max_by(|a, b| a.cmp_precedence(b))
}

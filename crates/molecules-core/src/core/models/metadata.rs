/// Publication and structure metadata collected from PDB header records.
///
/// Each field is the space-joined text of every contributing record, in file order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MolecularMetadata {
    pub title: String,
    pub compound: String,
    pub authors: String,
    pub source: String,
    pub journal: String,
    pub sequence: String,
}

impl MolecularMetadata {
    pub fn is_empty(&self) -> bool {
        self.title.is_empty()
            && self.compound.is_empty()
            && self.authors.is_empty()
            && self.source.is_empty()
            && self.journal.is_empty()
            && self.sequence.is_empty()
    }

    /// Returns `(label, value)` pairs for the non-empty fields, for display.
    pub fn entries(&self) -> Vec<(&'static str, &str)> {
        [
            ("Title", self.title.as_str()),
            ("Compound", self.compound.as_str()),
            ("Authors", self.authors.as_str()),
            ("Source", self.source.as_str()),
            ("Journal", self.journal.as_str()),
            ("Sequence", self.sequence.as_str()),
        ]
        .into_iter()
        .filter(|(_, value)| !value.is_empty())
        .collect()
    }
}

/// Appends a fragment of free text to a metadata field, separating fragments by one space.
pub(crate) fn append_text(field: &mut String, fragment: &str) {
    let fragment = fragment.trim();
    if fragment.is_empty() {
        return;
    }
    if !field.is_empty() {
        field.push(' ');
    }
    field.push_str(fragment);
}

/// Which document a run prints
///
/// The persisted summary artifact is written regardless; this only selects
/// what goes to stdout or `--output`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputDocument {
    /// Bounded summary (default)
    #[default]
    Summary,
    /// Unreduced collector output
    Raw,
}

impl OutputDocument {
    pub fn from_raw_flag(raw: bool) -> Self {
        if raw {
            OutputDocument::Raw
        } else {
            OutputDocument::Summary
        }
    }
}

impl std::fmt::Display for OutputDocument {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputDocument::Summary => write!(f, "summary"),
            OutputDocument::Raw => write!(f, "raw inventory"),
        }
    }
}

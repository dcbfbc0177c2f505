/// Summary of a completed validation run.
///
/// The record count is the only state a run accumulates; it is discarded
/// once reported.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Report {
    /// Number of records that parsed and matched their expected value.
    pub records: usize,
}

impl Report {
    /// Creates an empty `Report`.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

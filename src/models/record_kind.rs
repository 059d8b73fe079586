
/// The three row shapes sharing the ledger format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordKind {
    /// Timestamps present, net column holds the net hours
    Worked,
    /// Zero hours, no timestamps
    FreeDay,
    /// Net column holds the signed delta
    OvertimeTaken,
}

impl RecordKind {
    pub fn code(&self) -> &'static str {
        match self {
            RecordKind::Worked => "W",
            RecordKind::FreeDay => "F",
            RecordKind::OvertimeTaken => "O",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            RecordKind::Worked => "worked",
            RecordKind::FreeDay => "free day",
            RecordKind::OvertimeTaken => "overtime taken",
        }
    }
}

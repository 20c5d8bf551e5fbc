use crate::domain::Track;

/// How a candidate left the pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Listing row had no track link
    SkippedNoUrl,
    /// Already stored before this run looked at it
    SkippedDuplicate,
    Saved,
    /// Stored by someone else between the check and the insert
    SaveSkippedDuplicate,
    SaveFailed,
}

/// What happened to the audio file of one candidate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Download {
    NotAttempted,
    Downloaded,
    Failed,
}

#[derive(Debug, Clone)]
pub struct CandidateReport {
    pub track: Track,
    pub download: Download,
    pub outcome: Outcome,
}

impl CandidateReport {
    pub fn new(track: Track, download: Download, outcome: Outcome) -> Self {
        Self {
            track,
            download,
            outcome,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct RunReport {
    pub candidates: Vec<CandidateReport>,
    /// Track pages opened during the run
    pub detail_pages_visited: usize,
}

impl RunReport {
    pub fn processed(&self) -> usize {
        self.candidates.len()
    }

    pub fn saved(&self) -> usize {
        self.count(Outcome::Saved)
    }

    pub fn count(&self, outcome: Outcome) -> usize {
        self.candidates
            .iter()
            .filter(|c| c.outcome == outcome)
            .count()
    }

    pub fn downloaded(&self) -> usize {
        self.candidates
            .iter()
            .filter(|c| c.download == Download::Downloaded)
            .count()
    }
}

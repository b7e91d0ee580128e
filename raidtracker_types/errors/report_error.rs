use thiserror::Error;

use crate::section::SectionMarker;

/// Reasons a text is refused before parsing.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ReportError {
    #[error("Please paste the attack report text")]
    EmptyInput,

    #[error("Invalid attack report format: missing {} section(s)", join_markers(.0))]
    MissingSections(Vec<SectionMarker>),
}

fn join_markers(markers: &[SectionMarker]) -> String {
    markers
        .iter()
        .map(SectionMarker::as_str)
        .collect::<Vec<_>>()
        .join(", ")
}

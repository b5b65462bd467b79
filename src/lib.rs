pub mod classify;
pub mod io;
pub mod models;

pub use classify::{
    aggregate_durations, build_profiles, build_records, classify, count_interactions,
    extract_labels, select_host, split_guests, ClassificationOutcome, ClassifyConfig,
    DurationTable, GuestSplit, GuestThresholds, InteractionWindow, LabelExtractor, NoHostFound,
    RegexLabelExtractor,
};
pub use io::{
    read_segments_csv, read_segments_file, session_paths, write_records_file, ReportTable,
    SessionPaths,
};
pub use models::{Role, RoleRecord, Segment, SegmentKind, SpeakerProfile};

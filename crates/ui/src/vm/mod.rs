mod exam_vm;
mod lesson_vm;
mod markdown_vm;
mod stats_vm;
mod subject_vm;
mod summary_vm;

pub use exam_vm::{map_exam_progress, map_score, ExamProgressVm, ScoreVm};
pub use lesson_vm::{format_duration, map_lesson_cards, LessonCardVm};
pub use markdown_vm::markdown_to_html;
pub use stats_vm::{map_stat_tiles, StatTileVm};
pub use subject_vm::{map_subject_cards, SubjectCardVm};
pub use summary_vm::{map_summary_cards, SummaryCardVm};

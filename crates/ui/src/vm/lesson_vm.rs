use backpack_core::model::{LessonId, LessonWithProgress, ProgressStatus};

/// Render-ready lesson card.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LessonCardVm {
    pub id: LessonId,
    pub title: String,
    pub description: String,
    pub link_href: String,
    pub duration_label: String,
    pub subject_label: Option<String>,
    pub completed: bool,
    pub status_label: &'static str,
}

/// `605` seconds renders as "10 min"; hour-long content gets "1 h 05 min".
#[must_use]
pub fn format_duration(duration_secs: u32) -> String {
    let minutes = duration_secs / 60;
    if minutes >= 60 {
        format!("{} h {:02} min", minutes / 60, minutes % 60)
    } else {
        format!("{minutes} min")
    }
}

fn status_label(status: ProgressStatus) -> &'static str {
    match status {
        ProgressStatus::Completed => "Watched",
        ProgressStatus::InProgress => "In progress",
        ProgressStatus::NotStarted => "Not started",
    }
}

impl From<&LessonWithProgress> for LessonCardVm {
    fn from(item: &LessonWithProgress) -> Self {
        Self {
            id: item.lesson.id,
            title: item.lesson.title.clone(),
            description: item.lesson.description.clone(),
            link_href: item.lesson.link.to_string(),
            duration_label: format_duration(item.lesson.duration_secs),
            subject_label: item.lesson.subject_name.clone(),
            completed: item.is_completed(),
            status_label: status_label(item.status),
        }
    }
}

#[must_use]
pub fn map_lesson_cards(items: &[LessonWithProgress]) -> Vec<LessonCardVm> {
    items.iter().map(LessonCardVm::from).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use backpack_core::model::Lesson;

    #[test]
    fn durations_render_in_minutes_and_hours() {
        assert_eq!(format_duration(0), "0 min");
        assert_eq!(format_duration(605), "10 min");
        assert_eq!(format_duration(3900), "1 h 05 min");
    }

    #[test]
    fn completed_lessons_carry_the_watched_badge() {
        let lesson = Lesson::new(
            LessonId::new(1),
            "Limits",
            "Intro to limits",
            "https://videos.example.com/watch?v=1",
            605,
            Some("Math".to_string()),
        )
        .unwrap();
        let card = LessonCardVm::from(&LessonWithProgress {
            lesson,
            status: ProgressStatus::Completed,
        });

        assert!(card.completed);
        assert_eq!(card.status_label, "Watched");
        assert_eq!(card.duration_label, "10 min");
    }
}

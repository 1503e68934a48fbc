/// Lesson-watching statistics as the backend aggregates them.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct LessonStats {
    pub watched: u64,
    pub pending: u64,
    pub total: u64,
    pub per_day_avg: f64,
}

/// Summary-reading statistics.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct SummaryStats {
    pub completed: u64,
    pub pending: u64,
    pub total: u64,
    pub per_day_avg: f64,
}

/// The combined statistics payload behind the dashboard tiles.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct UserStatistics {
    pub lessons: LessonStats,
    pub summaries: SummaryStats,
}

impl LessonStats {
    /// Watched share in 0.0..=1.0; an empty catalog counts as zero progress.
    #[must_use]
    pub fn completion_fraction(&self) -> f64 {
        fraction(self.watched, self.total)
    }
}

impl SummaryStats {
    #[must_use]
    pub fn completion_fraction(&self) -> f64 {
        fraction(self.completed, self.total)
    }
}

fn fraction(done: u64, total: u64) -> f64 {
    if total == 0 {
        return 0.0;
    }
    done as f64 / total as f64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fraction_guards_division_by_zero() {
        let stats = LessonStats::default();
        assert_eq!(stats.completion_fraction(), 0.0);
    }

    #[test]
    fn fraction_is_done_over_total() {
        let stats = LessonStats {
            watched: 3,
            pending: 1,
            total: 4,
            per_day_avg: 0.5,
        };
        assert_eq!(stats.completion_fraction(), 0.75);

        let summaries = SummaryStats {
            completed: 1,
            pending: 3,
            total: 4,
            per_day_avg: 0.1,
        };
        assert_eq!(summaries.completion_fraction(), 0.25);
    }
}

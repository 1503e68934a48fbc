use backpack_core::model::UserStatistics;

/// One dashboard tile.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StatTileVm {
    pub label: &'static str,
    pub value: String,
}

/// The dashboard's tile row, in display order.
#[must_use]
pub fn map_stat_tiles(statistics: &UserStatistics) -> Vec<StatTileVm> {
    let lessons = &statistics.lessons;
    let summaries = &statistics.summaries;

    vec![
        StatTileVm {
            label: "Lessons watched",
            value: format!("{} of {}", lessons.watched, lessons.total),
        },
        StatTileVm {
            label: "Lessons per day",
            value: format!("{:.1}", lessons.per_day_avg),
        },
        StatTileVm {
            label: "Summaries read",
            value: format!("{} of {}", summaries.completed, summaries.total),
        },
        StatTileVm {
            label: "Overall lesson progress",
            value: format!("{:.0}%", lessons.completion_fraction() * 100.0),
        },
    ]
}

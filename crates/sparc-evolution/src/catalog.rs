//! Fixed milestone catalog shared by every chart.
//!
//! All chart labels, release months and hand-authored scores live here so the
//! figures stay consistent with one another. None of it is read from the
//! input document.
use chrono::NaiveDate;
use ndarray::{arr2, s, Array2};

/// Chart-facing attributes of one milestone.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MilestoneEntry {
    /// Column header in the full feature matrix
    pub short: &'static str,
    /// Label on the standalone timeline
    pub title: &'static str,
    /// Label on the dashboard timeline
    pub dashboard_title: &'static str,
    /// Two-line axis label for the impact bars
    pub bar_label: &'static str,
    /// Compact label for dashboard panels
    pub compact: &'static str,
    pub release: (i32, u32),
    /// Innovation impact, 0-10
    pub impact: f64,
    /// Technical complexity, 0-10
    pub complexity: f64,
    pub color: &'static str,
}

impl MilestoneEntry {
    /// First day of the release month.
    pub fn release_date(&self) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(self.release.0, self.release.1, 1)
    }

    pub fn release_label(&self) -> String {
        format!("{:04}-{:02}", self.release.0, self.release.1)
    }
}

pub const MILESTONES: [MilestoneEntry; 5] = [
    MilestoneEntry {
        short: "SPARC",
        title: "Original SPARC",
        dashboard_title: "Original SPARC",
        bar_label: "Original<br>SPARC",
        compact: "SPARC",
        release: (2023, 6),
        impact: 7.0,
        complexity: 3.0,
        color: "#FF6B6B",
    },
    MilestoneEntry {
        short: "SPARC2",
        title: "SPARC2 Package",
        dashboard_title: "SPARC2",
        bar_label: "SPARC2<br>Package",
        compact: "SPARC2",
        release: (2024, 3),
        impact: 8.5,
        complexity: 5.0,
        color: "#4ECDC4",
    },
    MilestoneEntry {
        short: "Create-SPARC",
        title: "Create-SPARC",
        dashboard_title: "Create-SPARC",
        bar_label: "Create-SPARC<br>Tool",
        compact: "Create",
        release: (2024, 6),
        impact: 7.5,
        complexity: 4.0,
        color: "#45B7D1",
    },
    MilestoneEntry {
        short: "Claude-Flow NPM",
        title: "Claude-Flow NPM",
        dashboard_title: "Claude-Flow NPM",
        bar_label: "Claude-Flow<br>NPM",
        compact: "CF-NPM",
        release: (2024, 9),
        impact: 9.2,
        complexity: 8.0,
        color: "#96CEB4",
    },
    MilestoneEntry {
        short: "Claude-Flow Repo",
        title: "Claude-Flow Repo",
        dashboard_title: "Claude-Flow Repo",
        bar_label: "Claude-Flow<br>Repo",
        compact: "CF-Repo",
        release: (2025, 1),
        impact: 9.8,
        complexity: 9.0,
        color: "#FECA57",
    },
];

/// Upper bound of the maturity scale.
pub const MAX_MATURITY: u8 = 5;

const FEATURES: [&str; 9] = [
    "AI Integration",
    "Automation Level",
    "Package Management",
    "Developer Experience",
    "Swarm Coordination",
    "Production Ready",
    "Community Features",
    "Documentation",
    "Testing Framework",
];

const DASHBOARD_FEATURES: [&str; 5] = [
    "AI Integration",
    "Automation",
    "Packaging",
    "DevEx",
    "Swarm Coord",
];

// Rows follow FEATURES, columns follow MILESTONES.
const MATURITY: [[u8; 5]; 9] = [
    [2, 3, 4, 5, 5],
    [1, 3, 4, 5, 5],
    [0, 4, 5, 5, 5],
    [2, 3, 5, 4, 5],
    [0, 1, 2, 5, 5],
    [1, 2, 3, 4, 5],
    [1, 2, 3, 4, 5],
    [2, 3, 4, 4, 5],
    [1, 2, 3, 4, 5],
];

/// Feature maturity per milestone on a 0-5 scale.
#[derive(Debug, Clone, PartialEq)]
pub struct FeatureMatrix {
    pub features: Vec<&'static str>,
    pub milestones: Vec<&'static str>,
    pub values: Array2<u8>,
}

impl FeatureMatrix {
    /// The nine-feature grid used by the standalone heatmap.
    pub fn full() -> Self {
        FeatureMatrix {
            features: FEATURES.to_vec(),
            milestones: MILESTONES.iter().map(|m| m.short).collect(),
            values: arr2(&MATURITY),
        }
    }

    /// The first five features under compact labels, for the dashboard panel.
    pub fn dashboard() -> Self {
        FeatureMatrix {
            features: DASHBOARD_FEATURES.to_vec(),
            milestones: MILESTONES.iter().map(|m| m.compact).collect(),
            values: arr2(&MATURITY).slice(s![..DASHBOARD_FEATURES.len(), ..]).to_owned(),
        }
    }

    pub fn nrows(&self) -> usize {
        self.values.nrows()
    }

    pub fn ncols(&self) -> usize {
        self.values.ncols()
    }

    /// Row-major copy of the grid, the shape Plotly expects for `z`.
    pub fn rows(&self) -> Vec<Vec<u8>> {
        self.values.outer_iter().map(|row| row.to_vec()).collect()
    }
}

use plotly::common::{
    Anchor, ColorBar, ColorScale, ColorScaleElement, Line, Marker, MarkerSymbol, Mode,
    TextPosition,
};
use plotly::layout::{Annotation, Axis, AxisType, Layout, Legend};
use plotly::{Bar, HeatMap, Plot, Scatter};

use crate::catalog::{FeatureMatrix, MilestoneEntry, MAX_MATURITY};
use crate::simulation::AdoptionSeries;

const LABEL_BOX: &str = "rgba(255, 255, 0, 0.7)";
const MARKER_SYMBOLS: [MarkerSymbol; 4] = [
    MarkerSymbol::Circle,
    MarkerSymbol::Square,
    MarkerSymbol::TriangleUp,
    MarkerSymbol::Diamond,
];

/// Red-yellow-green scale, low maturity in red.
fn maturity_color_scale() -> ColorScale {
    ColorScale::Vector(vec![
        ColorScaleElement(0.0, "#a50026".to_string()),
        ColorScaleElement(0.25, "#f46d43".to_string()),
        ColorScaleElement(0.5, "#ffffbf".to_string()),
        ColorScaleElement(0.75, "#66bd63".to_string()),
        ColorScaleElement(1.0, "#006837".to_string()),
    ])
}

fn date_axis(title: &str) -> Axis {
    Axis::new()
        .title(title)
        .type_(AxisType::Date)
        .tick_format("%Y-%m")
        .tick_angle(-45.0)
        .show_grid(true)
}

fn panel_title(text: &str, x: f64, y: f64) -> Annotation {
    Annotation::new()
        .text(&format!("<b>{}</b>", text))
        .x_ref("paper")
        .y_ref("paper")
        .x(x)
        .y(y)
        .x_anchor(Anchor::Center)
        .show_arrow(false)
}

fn score_labels(scores: &[f64]) -> Vec<String> {
    scores.iter().map(|s| format!("<b>{}</b>", s)).collect()
}

/// Timeline of the milestones, one evolution phase per release.
pub fn plot_timeline(milestones: &[MilestoneEntry]) -> Plot {
    let dates: Vec<String> = milestones.iter().map(|m| m.release_label()).collect();
    let phases: Vec<usize> = (1..=milestones.len()).collect();

    let mut plot = Plot::new();

    // Connecting line
    plot.add_trace(
        Scatter::new(dates.clone(), phases.clone())
            .mode(Mode::Lines)
            .name("Evolution path")
            .opacity(0.5)
            .line(Line::new().color("blue").width(2.0))
            .show_legend(false),
    );

    plot.add_trace(
        Scatter::new(dates.clone(), phases.clone())
            .mode(Mode::Markers)
            .name("Milestones")
            .marker(Marker::new().size(16).color("red").opacity(0.7))
            .show_legend(false),
    );

    let labels = milestones
        .iter()
        .zip(dates.iter().zip(phases.iter()))
        .map(|(m, (date, phase))| {
            Annotation::new()
                .x(date.clone())
                .y(*phase as f64)
                .text(m.title)
                .show_arrow(false)
                .x_anchor(Anchor::Left)
                .x_shift(10.0)
                .y_shift(10.0)
                .background_color(LABEL_BOX)
                .border_pad(5.0)
        })
        .collect();

    plot.set_layout(
        Layout::new()
            .title(concat!(
                "<b>SPARC Framework Evolution Timeline</b>",
                "<br>Reuven Cohen's Journey from Concept to Production Platform",
            ))
            .width(1500)
            .height(800)
            .x_axis(date_axis("Timeline"))
            .y_axis(
                Axis::new()
                    .title("Evolution Phase")
                    .range(vec![0.5, 5.5])
                    .show_grid(true),
            )
            .annotations(labels),
    );

    plot
}

/// Heatmap of the feature maturity grid with the score printed in each cell.
///
/// Plotly draws the first row at the bottom, so rows are reversed to keep the
/// first feature on top.
pub fn plot_feature_matrix(matrix: &FeatureMatrix) -> Plot {
    let mut plot = Plot::new();
    plot.add_trace(
        heatmap_trace(matrix)
            .color_bar(ColorBar::new().title("Feature Maturity Level"))
            .name("Maturity"),
    );

    plot.set_layout(
        Layout::new()
            .title(concat!(
                "<b>SPARC Framework Feature Evolution Matrix</b>",
                "<br>Maturity Level (0=None, 5=Excellent)",
            ))
            .width(1200)
            .height(800)
            .x_axis(Axis::new().tick_angle(-45.0))
            .annotations(cell_annotations(matrix, "x", "y")),
    );

    plot
}

/// Colours are pinned to the 0..=5 maturity scale whatever the grid holds.
fn heatmap_trace(matrix: &FeatureMatrix) -> Box<HeatMap<&'static str, &'static str, Vec<u8>>> {
    let features: Vec<&'static str> = matrix.features.iter().rev().copied().collect();
    let rows: Vec<Vec<u8>> = matrix.rows().into_iter().rev().collect();
    HeatMap::new(matrix.milestones.clone(), features, rows)
        .color_scale(maturity_color_scale())
        .zmin(0.0)
        .zmax(f64::from(MAX_MATURITY))
}

fn cell_annotations(matrix: &FeatureMatrix, x_ref: &str, y_ref: &str) -> Vec<Annotation> {
    let mut annotations = Vec::with_capacity(matrix.nrows() * matrix.ncols());
    for (feature, row) in matrix.features.iter().zip(matrix.values.outer_iter()) {
        for (milestone, value) in matrix.milestones.iter().zip(row.iter()) {
            annotations.push(
                Annotation::new()
                    .x(milestone.to_string())
                    .y(feature.to_string())
                    .x_ref(x_ref)
                    .y_ref(y_ref)
                    .text(&format!("<b>{}</b>", value))
                    .show_arrow(false),
            );
        }
    }
    annotations
}

/// Line chart of the simulated adoption curves.
pub fn plot_adoption_trends(series: &[AdoptionSeries]) -> Plot {
    let mut plot = Plot::new();

    for (curve, symbol) in series.iter().zip(MARKER_SYMBOLS.iter().cycle()) {
        plot.add_trace(
            Scatter::new(curve.date_labels(), curve.values.clone())
                .name(&curve.label)
                .mode(Mode::LinesMarkers)
                .line(Line::new().width(3.0))
                .marker(Marker::new().size(6).symbol(symbol.clone())),
        );
    }

    plot.set_layout(
        Layout::new()
            .title(concat!(
                "<b>SPARC Framework Adoption Growth Trends</b>",
                "<br>(Simulated Data - Replace with Actual Metrics)",
            ))
            .width(1400)
            .height(800)
            .x_axis(date_axis("Timeline"))
            .y_axis(
                Axis::new()
                    .title("Cumulative Adoption Index (simulated)")
                    .show_grid(true),
            )
            .legend(Legend::new().x(0.01).y(0.99)),
    );

    plot
}

fn score_bars(
    milestones: &[MilestoneEntry],
    labels: Vec<&'static str>,
    scores: Vec<f64>,
    name: &str,
) -> Box<Bar<&'static str, f64>> {
    let colors: Vec<&'static str> = milestones.iter().map(|m| m.color).collect();
    Bar::new(labels, scores.clone())
        .name(name)
        .opacity(0.8)
        .marker(Marker::new().color_array(colors).line(Line::new().color("black").width(1.0)))
        .text_array(score_labels(&scores))
        .text_position(TextPosition::Outside)
        .show_legend(false)
}

fn score_axis(title: &str) -> Axis {
    Axis::new().title(title).range(vec![0.0, 10.0]).show_grid(true)
}

/// Side-by-side impact and complexity bars with each score printed above its bar.
pub fn plot_innovation_impact(milestones: &[MilestoneEntry]) -> Plot {
    let labels: Vec<&'static str> = milestones.iter().map(|m| m.bar_label).collect();
    let impact: Vec<f64> = milestones.iter().map(|m| m.impact).collect();
    let complexity: Vec<f64> = milestones.iter().map(|m| m.complexity).collect();

    let mut plot = Plot::new();
    plot.add_trace(score_bars(milestones, labels.clone(), impact, "Innovation Impact"));
    plot.add_trace(
        score_bars(milestones, labels, complexity, "Technical Complexity")
            .x_axis("x2")
            .y_axis("y2"),
    );

    plot.set_layout(
        Layout::new()
            .width(1600)
            .height(600)
            .x_axis(Axis::new().domain(&[0.0, 0.45]).anchor("y"))
            .y_axis(score_axis("Innovation Impact Score").anchor("x"))
            .x_axis2(Axis::new().domain(&[0.55, 1.0]).anchor("y2"))
            .y_axis2(score_axis("Technical Complexity Score").anchor("x2"))
            .annotations(vec![
                panel_title("Innovation Impact by Milestone", 0.225, 1.08),
                panel_title("Technical Complexity by Milestone", 0.775, 1.08),
            ]),
    );

    plot
}

fn panel_axis(domain: &[f64], anchor: &str) -> Axis {
    Axis::new().domain(domain).anchor(anchor)
}

/// Four-panel overview: timeline on top, maturity grid bottom-left, simulated
/// trends and impact bars stacked on the right.
pub fn plot_dashboard(
    milestones: &[MilestoneEntry],
    matrix: &FeatureMatrix,
    series: &[AdoptionSeries],
) -> Plot {
    let mut plot = Plot::new();
    let mut annotations = Vec::new();

    // Timeline, every milestone on one line
    let dates: Vec<String> = milestones.iter().map(|m| m.release_label()).collect();
    let baseline = vec![1.0; milestones.len()];
    plot.add_trace(
        Scatter::new(dates.clone(), baseline)
            .mode(Mode::LinesMarkers)
            .name("Evolution Timeline")
            .line(Line::new().color("blue").width(2.0))
            .marker(Marker::new().size(14).color("red").opacity(0.7))
            .show_legend(false),
    );
    for (m, date) in milestones.iter().zip(dates.iter()) {
        annotations.push(
            Annotation::new()
                .x(date.clone())
                .y(1.0)
                .x_ref("x")
                .y_ref("y")
                .text(m.dashboard_title)
                .show_arrow(false)
                .y_shift(20.0)
                .background_color(LABEL_BOX)
                .border_pad(3.0),
        );
    }

    // Feature maturity
    plot.add_trace(heatmap_trace(matrix).show_scale(false).x_axis("x2").y_axis("y2"));

    // Simulated trends
    for curve in series {
        plot.add_trace(
            Scatter::new(curve.date_labels(), curve.values.clone())
                .name(&curve.label)
                .mode(Mode::Lines)
                .line(Line::new().width(2.0))
                .x_axis("x3")
                .y_axis("y3"),
        );
    }

    // Innovation impact
    let compact: Vec<&'static str> = milestones.iter().map(|m| m.compact).collect();
    let impact: Vec<f64> = milestones.iter().map(|m| m.impact).collect();
    plot.add_trace(
        score_bars(milestones, compact, impact, "Innovation Impact")
            .opacity(1.0)
            .x_axis("x4")
            .y_axis("y4"),
    );

    annotations.push(panel_title("Evolution Timeline", 0.5, 1.0));
    annotations.push(panel_title("Feature Maturity", 0.14, 0.64));
    annotations.push(panel_title("Adoption Trends (Simulated)", 0.69, 0.64));
    annotations.push(panel_title("Innovation Impact", 0.69, 0.28));

    plot.set_layout(
        Layout::new()
            .title(concat!(
                "<b>SPARC Framework Evolution: Comprehensive Analysis Dashboard</b>",
                "<br>Reuven Cohen's Journey in AI-Assisted Development",
            ))
            .width(2000)
            .height(1200)
            .x_axis(panel_axis(&[0.0, 1.0], "y").type_(AxisType::Date).tick_format("%Y-%m"))
            .y_axis(
                panel_axis(&[0.72, 0.96], "x")
                    .range(vec![0.5, 1.5])
                    .show_tick_labels(false),
            )
            .x_axis2(panel_axis(&[0.0, 0.28], "y2").tick_angle(-45.0))
            .y_axis2(panel_axis(&[0.0, 0.62], "x2"))
            .x_axis3(panel_axis(&[0.38, 1.0], "y3").type_(AxisType::Date).tick_format("%Y-%m"))
            .y_axis3(panel_axis(&[0.36, 0.62], "x3").show_grid(true))
            .x_axis4(panel_axis(&[0.38, 1.0], "y4"))
            .y_axis4(panel_axis(&[0.0, 0.26], "x4").range(vec![0.0, 10.0]))
            .legend(Legend::new().x(0.39).y(0.61))
            .annotations(annotations),
    );

    plot
}

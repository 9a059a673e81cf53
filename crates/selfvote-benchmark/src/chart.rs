use std::path::Path;

use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};
use selfvote_core::report::format_percent;
use selfvote_core::{load_results, AccuracyReport, Result, SelfVoteError};

pub const CHART_TITLE: &str = "Chain-of-Thought: Deterministic vs Self-Consistency";
pub const METHOD_LABELS: [&str; 2] = ["Deterministic (temp=0)", "Majority Vote (temp=1.1)"];

const CHART_SIZE: (u32, u32) = (1200, 900);
const LIGHT_CORAL: RGBColor = RGBColor(240, 128, 128);
const LIGHT_BLUE: RGBColor = RGBColor(173, 216, 230);
const BAR_ALPHA: f64 = 0.7;

fn chart_err(e: impl ToString) -> SelfVoteError {
    SelfVoteError::Chart(e.to_string())
}

/// Bar heights in label order, each in `0.0..=1.0`.
pub fn bar_values(report: &AccuracyReport) -> [f64; 2] {
    [report.deterministic_accuracy(), report.majority_accuracy()]
}

fn segment_label(value: &SegmentValue<u32>) -> String {
    match value {
        SegmentValue::CenterOf(i) => METHOD_LABELS
            .get(*i as usize)
            .map(|label| label.to_string())
            .unwrap_or_default(),
        _ => String::new(),
    }
}

/// Draws the two-bar accuracy comparison and writes it to `path` as PNG.
pub fn render_accuracy_chart(report: &AccuracyReport, path: &Path) -> Result<()> {
    let values = bar_values(report);
    let colors = [LIGHT_CORAL, LIGHT_BLUE];

    let root = BitMapBackend::new(path, CHART_SIZE).into_drawing_area();
    root.fill(&WHITE).map_err(chart_err)?;

    let mut chart = ChartBuilder::on(&root)
        .caption(CHART_TITLE, ("sans-serif", 34))
        .margin(24)
        .x_label_area_size(60)
        .y_label_area_size(80)
        .build_cartesian_2d((0u32..2u32).into_segmented(), 0f64..1f64)
        .map_err(chart_err)?;

    chart
        .configure_mesh()
        .disable_x_mesh()
        .y_desc("Accuracy")
        .y_labels(6)
        .x_label_formatter(&segment_label)
        .label_style(("sans-serif", 22))
        .axis_desc_style(("sans-serif", 24))
        .draw()
        .map_err(chart_err)?;

    chart
        .draw_series(values.iter().zip(colors).enumerate().map(|(i, (value, color))| {
            let i = i as u32;
            let mut bar = Rectangle::new(
                [
                    (SegmentValue::Exact(i), 0.0),
                    (SegmentValue::Exact(i + 1), *value),
                ],
                color.mix(BAR_ALPHA).filled(),
            );
            bar.set_margin(0, 0, 60, 60);
            bar
        }))
        .map_err(chart_err)?;

    let label_style = TextStyle::from(("sans-serif", 26).into_font())
        .color(&BLACK)
        .pos(Pos::new(HPos::Center, VPos::Bottom));
    chart
        .draw_series(values.iter().enumerate().map(|(i, value)| {
            Text::new(
                format_percent(*value),
                (SegmentValue::CenterOf(i as u32), (value + 0.01).min(1.0)),
                label_style.clone(),
            )
        }))
        .map_err(chart_err)?;

    root.present().map_err(chart_err)?;
    tracing::info!("Rendered accuracy chart to {}", path.display());
    Ok(())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartOutcome {
    /// No results file yet; nothing was drawn.
    MissingResults,
    Rendered(AccuracyReport),
}

/// Loads `results_path` and, if it exists, renders its accuracy chart to `chart_path`.
pub fn generate_report(results_path: &Path, chart_path: &Path) -> Result<ChartOutcome> {
    let Some(results) = load_results(results_path)? else {
        tracing::warn!("No results file at {}", results_path.display());
        return Ok(ChartOutcome::MissingResults);
    };

    let report = AccuracyReport::from_results(&results);
    render_accuracy_chart(&report, chart_path)?;
    Ok(ChartOutcome::Rendered(report))
}

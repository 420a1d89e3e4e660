use std::path::Path;

use plotters::prelude::*;

use crate::pipeline::stage5_roc::RocEntry;
use crate::report::ReportError;

const PLOT_SIZE: (u32, u32) = (800, 600);
const TITLE: &str = "ROC Curves with AUC, Cutoff, and Accuracy";
const X_DESC: &str = "False Positive Rate (1 - Specificity)";
const Y_DESC: &str = "True Positive Rate (Sensitivity)";
const PALETTE: [RGBColor; 4] = [BLUE, GREEN, RGBColor(255, 165, 0), RED];
const GREY: RGBColor = RGBColor(128, 128, 128);
const DASH: f64 = 0.02;

fn plot_err<E: std::fmt::Display>(err: E) -> ReportError {
    ReportError::Plot(err.to_string())
}

pub fn legend_label(entry: &RocEntry) -> String {
    let res = &entry.result;
    format!(
        "{} (AUC={:.2}, Cutoff={:.2}, Acc={:.2})",
        entry.name,
        res.auc,
        res.threshold.abs(),
        res.accuracy
    )
}

/// One curve per score with its Youden-optimal point marked, over a
/// dashed chance diagonal.
pub fn render_roc_svg(entries: &[RocEntry], path: &Path) -> Result<(), ReportError> {
    let root = SVGBackend::new(path, PLOT_SIZE).into_drawing_area();
    root.fill(&WHITE).map_err(plot_err)?;

    let mut chart = ChartBuilder::on(&root)
        .margin(20)
        .caption(TITLE, ("sans-serif", 22))
        .x_label_area_size(50)
        .y_label_area_size(60)
        .build_cartesian_2d(0.0..1.0, 0.0..1.0)
        .map_err(plot_err)?;

    chart
        .configure_mesh()
        .x_desc(X_DESC)
        .y_desc(Y_DESC)
        .draw()
        .map_err(plot_err)?;

    let dashes = (0..)
        .map(|i| i as f64 * 2.0 * DASH)
        .take_while(|&start| start < 1.0)
        .map(|start| {
            let end = (start + DASH).min(1.0);
            PathElement::new(vec![(start, start), (end, end)], GREY.stroke_width(1))
        });
    chart.draw_series(dashes).map_err(plot_err)?;

    for (idx, entry) in entries.iter().enumerate() {
        let color = PALETTE[idx % PALETTE.len()];
        let points: Vec<(f64, f64)> = entry
            .result
            .curve
            .iter()
            .map(|p| (p.fpr, p.tpr))
            .collect();
        chart
            .draw_series(LineSeries::new(points, color.stroke_width(2)))
            .map_err(plot_err)?
            .label(legend_label(entry))
            .legend(move |(x, y)| PathElement::new(vec![(x - 10, y), (x + 10, y)], color));

        let best = entry.result.optimal_point();
        chart
            .draw_series(std::iter::once(Circle::new(
                (best.fpr, best.tpr),
                5,
                color.filled(),
            )))
            .map_err(plot_err)?;
    }

    chart
        .configure_series_labels()
        .position(SeriesLabelPosition::LowerRight)
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK)
        .draw()
        .map_err(plot_err)?;

    root.present().map_err(plot_err)?;
    Ok(())
}

//! PNG chart reporter.
//!
//! Draws the run's history with `plotters` on a bitmap backend: one line
//! per sensor series with a marker on every sample, the recorded timestamps
//! as rotated x-axis labels, a title, axis descriptions and a legend.
//!
//! The y axis spans zero (or the lowest sample, if negative) to the highest
//! sample plus 5 % headroom.  Non-finite samples get no marker and break
//! the line they sit on.

use std::path::{Path, PathBuf};

use plotters::prelude::*;

use crate::app::events::HistoryEntry;
use crate::app::ports::ReportPort;
use crate::error::{Error, Result};
use crate::sensors::SensorKind;

pub const TITLE: &str = "Coal Mine Safety System Report";
const X_DESC: &str = "Timestamp";
const Y_DESC: &str = "Sensor Values";
const FONT: &str = "sans-serif";

/// Series colours, in legend order.
pub const SERIES: [(SensorKind, RGBColor); 3] = [
    (SensorKind::Temperature, RGBColor(31, 119, 180)),
    (SensorKind::Gas, RGBColor(255, 127, 14)),
    (SensorKind::Humidity, RGBColor(44, 160, 44)),
];

/// Room below the plot for the rotated `YYYY-MM-DD HH:MM:SS` labels.
const X_LABEL_AREA: u32 = 150;
const Y_LABEL_AREA: u32 = 60;
const MARKER_RADIUS: u32 = 4;
pub const MIN_WIDTH: u32 = 200;
pub const MIN_HEIGHT: u32 = 240;

/// Legend text for a series, unit included.
pub fn legend_label(kind: SensorKind) -> &'static str {
    match kind {
        SensorKind::Temperature => "Temperature (\u{00b0}C)",
        SensorKind::Gas => "Gas Level (ppm)",
        SensorKind::Humidity => "Humidity (%)",
    }
}

#[derive(Debug, Clone)]
pub struct PngChartReporter {
    path: PathBuf,
    width: u32,
    height: u32,
}

impl PngChartReporter {
    pub fn new(path: impl AsRef<Path>, width: u32, height: u32) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            width,
            height,
        }
    }

    fn chart_error(&self, reason: impl ToString) -> Error {
        Error::Chart {
            path: self.path.clone(),
            reason: reason.to_string(),
        }
    }

    fn draw(
        &self,
        entries: &[HistoryEntry],
    ) -> core::result::Result<(), Box<dyn std::error::Error>> {
        let root = BitMapBackend::new(&self.path, (self.width, self.height)).into_drawing_area();
        root.fill(&WHITE)?;

        // One slot per entry, samples centred in their slot.
        let x_end = entries.len().max(1) as f64 - 0.5;
        let (y_min, y_max) = value_span(entries);

        let mut chart = ChartBuilder::on(&root)
            .caption(TITLE, (FONT, 24))
            .margin(15)
            .x_label_area_size(X_LABEL_AREA)
            .y_label_area_size(Y_LABEL_AREA)
            .build_cartesian_2d(-0.5_f64..x_end, y_min..y_max)?;

        let tick_style =
            TextStyle::from((FONT, 11).into_font()).transform(FontTransform::Rotate90);
        let tick_formatter = |x: &f64| tick_label(entries, *x);
        chart
            .configure_mesh()
            .x_desc(X_DESC)
            .y_desc(Y_DESC)
            .x_labels(entries.len().max(1))
            .x_label_formatter(&tick_formatter)
            .x_label_style(tick_style)
            .disable_x_mesh()
            .draw()?;

        for (kind, colour) in SERIES {
            let samples: Vec<(f64, f64)> = entries
                .iter()
                .enumerate()
                .map(|(i, e)| (i as f64, sample(e, kind)))
                .collect();

            chart
                .draw_series(
                    samples
                        .iter()
                        .filter(|(_, y)| y.is_finite())
                        .map(|&point| Circle::new(point, MARKER_RADIUS, colour.filled())),
                )?
                .label(legend_label(kind))
                .legend(move |(x, y)| {
                    PathElement::new(vec![(x, y), (x + 20, y)], colour.stroke_width(2))
                });

            for segment in samples.split(|(_, y)| !y.is_finite()) {
                if segment.len() > 1 {
                    chart.draw_series(LineSeries::new(
                        segment.iter().copied(),
                        colour.stroke_width(2),
                    ))?;
                }
            }
        }

        chart
            .configure_series_labels()
            .position(SeriesLabelPosition::UpperRight)
            .background_style(WHITE.mix(0.85))
            .border_style(BLACK)
            .label_font((FONT, 13))
            .draw()?;

        root.present()?;
        Ok(())
    }
}

impl ReportPort for PngChartReporter {
    fn render(&self, entries: &[HistoryEntry]) -> Result<PathBuf> {
        if self.width < MIN_WIDTH || self.height < MIN_HEIGHT {
            return Err(self.chart_error(format!(
                "{}x{} leaves no room for the plot area",
                self.width, self.height
            )));
        }

        self.draw(entries).map_err(|e| self.chart_error(e))?;
        log::info!(
            "chart: {} samples rendered to {}",
            entries.len(),
            self.path.display()
        );
        Ok(self.path.clone())
    }
}

fn sample(entry: &HistoryEntry, kind: SensorKind) -> f64 {
    match kind {
        SensorKind::Temperature => entry.reading.temperature_c,
        SensorKind::Gas => entry.reading.gas_ppm,
        SensorKind::Humidity => entry.reading.humidity_pct,
    }
}

/// Timestamp of the entry sitting at `x`; blank between entries.
fn tick_label(entries: &[HistoryEntry], x: f64) -> String {
    let index = x.round();
    if (x - index).abs() > 1e-6 || index < 0.0 {
        return String::new();
    }
    entries
        .get(index as usize)
        .map(|e| e.timestamp.clone())
        .unwrap_or_default()
}

/// `(low, high)` covering every finite sample, anchored at zero.
fn value_span(entries: &[HistoryEntry]) -> (f64, f64) {
    let finite = entries
        .iter()
        .flat_map(|e| SensorKind::ALL.map(|kind| sample(e, kind)))
        .filter(|v| v.is_finite());

    let (mut low, mut high) = (0.0_f64, f64::NEG_INFINITY);
    for v in finite {
        low = low.min(v);
        high = high.max(v);
    }
    if !high.is_finite() {
        return (0.0, 100.0);
    }
    if high - low < 1.0 {
        high = low + 1.0;
    }
    (low, high + (high - low) * 0.05)
}

use std::{
    fmt, fs,
    ops::Range,
    path::PathBuf,
    str::FromStr,
};

use chrono::{Days, NaiveDate};
use fitguide_model::{
    entry::{Series, DATE_FORMAT},
    metric::Metric,
};
use log::{debug, info};
use plotters::coord::Shift;
use plotters::prelude::*;
use plotters::style::{FontDesc, FontFamily, FontStyle, FontTransform};

const SIZE: (u32, u32) = (1000, 600);
const MAX_DATE_LABELS: usize = 12;
const LINE_COLOR: RGBColor = BLUE;
const AREA_COLOR: RGBColor = RGBColor(135, 206, 235);
const GRID_COLOR: RGBColor = RGBColor(128, 128, 128);

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("{0} entries cannot be plotted")]
    NotPlottable(Metric),
    #[error("nothing to plot")]
    Empty,
    #[error("cannot write chart: {0}")]
    Io(#[from] std::io::Error),
    #[error("chart rendering failed: {0}")]
    Drawing(String),
}

type Result<T> = std::result::Result<T, Error>;

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum ChartFormat {
    #[default]
    Png,
    Svg,
}

impl ChartFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            ChartFormat::Png => "png",
            ChartFormat::Svg => "svg",
        }
    }
}

impl fmt::Display for ChartFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

impl FromStr for ChartFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "png" => Ok(ChartFormat::Png),
            "svg" => Ok(ChartFormat::Svg),
            _ => Err(format!("Unsupported chart format \"{}\"", s)),
        }
    }
}

#[mockall::automock]
pub trait Plotter: Send + Sync {
    /// Render `series` as a dated line chart and return the path of the
    /// written image.
    fn plot(&self, metric: Metric, series: &Series, y_label: &str, title: &str)
        -> Result<PathBuf>;
}

pub struct PlotterImpl {
    directory: PathBuf,
    format: ChartFormat,
}

impl PlotterImpl {
    fn new(directory: PathBuf, format: ChartFormat) -> Self {
        Self { directory, format }
    }

    pub fn path(&self, metric: Metric) -> PathBuf {
        self.directory
            .join(format!("{}_plot.{}", metric.slug(), self.format.extension()))
    }
}

pub fn create(directory: impl Into<PathBuf>, format: ChartFormat) -> impl Plotter {
    PlotterImpl::new(directory.into(), format)
}

impl Plotter for PlotterImpl {
    fn plot(
        &self,
        metric: Metric,
        series: &Series,
        y_label: &str,
        title: &str,
    ) -> Result<PathBuf> {
        if !metric.is_plottable() {
            return Err(Error::NotPlottable(metric));
        }
        if series.is_empty() {
            return Err(Error::Empty);
        }

        fs::create_dir_all(&self.directory)?;
        let path = self.path(metric);
        debug!(
            "Plotting {} readings of {} to {}",
            series.readings.len(),
            metric,
            path.display()
        );
        match self.format {
            ChartFormat::Png => draw(
                BitMapBackend::new(&path, SIZE).into_drawing_area(),
                series,
                y_label,
                title,
            )?,
            ChartFormat::Svg => draw(
                SVGBackend::new(&path, SIZE).into_drawing_area(),
                series,
                y_label,
                title,
            )?,
        }
        info!("Saved {} chart to {}", metric, path.display());
        Ok(path)
    }
}

fn draw<DB>(root: DrawingArea<DB, Shift>, series: &Series, y_label: &str, title: &str) -> Result<()>
where
    DB: DrawingBackend,
    DB::ErrorType: 'static,
{
    let x_range = date_range(series).ok_or(Error::Empty)?;
    let y_range = value_range(series).ok_or(Error::Empty)?;
    let baseline = y_range.start;

    root.fill(&WHITE).map_err(drawing_error)?;
    let mut chart = ChartBuilder::on(&root)
        .caption(
            title,
            FontDesc::new(FontFamily::SansSerif, 30.0, FontStyle::Italic).color(&BLACK),
        )
        .margin(20)
        .set_label_area_size(LabelAreaPosition::Left, 70)
        .set_label_area_size(LabelAreaPosition::Bottom, 120)
        .build_cartesian_2d(x_range, y_range)
        .map_err(drawing_error)?;

    let label_font = FontDesc::new(FontFamily::SansSerif, 14.0, FontStyle::Normal);
    chart
        .configure_mesh()
        .x_desc("Date")
        .y_desc(y_label)
        .axis_desc_style(FontDesc::new(FontFamily::SansSerif, 18.0, FontStyle::Bold))
        .x_labels(MAX_DATE_LABELS)
        .x_label_formatter(&|date: &NaiveDate| date.format(DATE_FORMAT).to_string())
        .x_label_style(label_font.clone().transform(FontTransform::Rotate90))
        .y_label_style(label_font)
        .bold_line_style(&GRID_COLOR.mix(0.3))
        .light_line_style(&TRANSPARENT)
        .draw()
        .map_err(drawing_error)?;

    chart
        .draw_series(AreaSeries::new(series.points(), baseline, &AREA_COLOR.mix(0.3)))
        .map_err(drawing_error)?;
    chart
        .draw_series(LineSeries::new(series.points(), LINE_COLOR.stroke_width(2)))
        .map_err(drawing_error)?;
    chart
        .draw_series(
            series
                .points()
                .map(|point| Circle::new(point, 4, LINE_COLOR.filled())),
        )
        .map_err(drawing_error)?;

    root.present().map_err(drawing_error)?;
    Ok(())
}

fn drawing_error<E>(e: DrawingAreaErrorKind<E>) -> Error
where
    E: std::error::Error + Send + Sync,
{
    Error::Drawing(e.to_string())
}

/// Dates of the series padded by one day on both sides.
fn date_range(series: &Series) -> Option<Range<NaiveDate>> {
    let first = series.readings.iter().map(|r| r.date).min()?;
    let last = series.readings.iter().map(|r| r.date).max()?;
    let start = first.checked_sub_days(Days::new(1)).unwrap_or(first);
    let end = last.checked_add_days(Days::new(1)).unwrap_or(last);
    Some(start..end)
}

/// Values of the series padded by 5% of their span, or by 1 when flat.
fn value_range(series: &Series) -> Option<Range<f64>> {
    let mut values = series.readings.iter().map(|r| r.value);
    let first = values.next()?;
    let (min, max) = values.fold((first, first), |(lo, hi), v| (lo.min(v), hi.max(v)));
    let pad = if max - min > f64::EPSILON {
        (max - min) * 0.05
    } else {
        1.0
    };
    Some((min - pad)..(max + pad))
}

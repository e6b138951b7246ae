use crate::F;
use svg::Document;
use svg::node::element::{Circle, Line, Path, Rectangle, Text, path::Data};

const WIDTH: F = 640.;
const HEIGHT: F = 480.;

// plot area margins
const LEFT: F = 80.;
const RIGHT: F = 64.;
const TOP: F = 58.;
const BOTTOM: F = 53.;

const TICKS: usize = 6;

/// Per-series stroke colors, in draw order.
const COLORS: [&str; 4] = ["#1f77b4", "#ff7f0e", "#2ca02c", "#d62728"];

/// A single data series and its legend label. An empty label keeps the
/// series out of the legend.
#[derive(Debug, Clone)]
pub struct Series {
    pub label: String,
    pub points: Vec<[F; 2]>,
}

impl Series {
    pub fn from_xy(label: impl Into<String>, xs: &[F], ys: &[F]) -> Self {
        Self {
            label: label.into(),
            points: xs.iter().zip(ys).map(|(&x, &y)| [x, y]).collect(),
        }
    }
}

/// A line chart with markers, a title and axis labels.
#[derive(Debug, Clone)]
pub struct Chart {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub series: Vec<Series>,
}

fn fmt_tick(v: F) -> String {
    if v == v.trunc() {
        format!("{}", v as i64)
    } else {
        format!("{v:.2}")
    }
}

impl Chart {
    // Data bounds over all series, padded 5% per side.
    fn bounds(&self) -> ([F; 2], [F; 2]) {
        let mut lo = [F::INFINITY; 2];
        let mut hi = [F::NEG_INFINITY; 2];
        for p in self.series.iter().flat_map(|s| &s.points) {
            for i in 0..2 {
                lo[i] = lo[i].min(p[i]);
                hi[i] = hi[i].max(p[i]);
            }
        }
        for i in 0..2 {
            if lo[i] > hi[i] {
                (lo[i], hi[i]) = (0., 1.);
            }
            let pad = ((hi[i] - lo[i]) * 0.05).max(0.5);
            lo[i] -= pad;
            hi[i] += pad;
        }
        (lo, hi)
    }

    pub fn to_document(&self) -> Document {
        let ([x0, y0], [x1, y1]) = self.bounds();
        let plot_w = WIDTH - LEFT - RIGHT;
        let plot_h = HEIGHT - TOP - BOTTOM;
        let sx = move |x: F| LEFT + (x - x0) / (x1 - x0) * plot_w;
        let sy = move |y: F| HEIGHT - BOTTOM - (y - y0) / (y1 - y0) * plot_h;

        let mut doc = Document::new()
            .set("viewBox", (0., 0., WIDTH, HEIGHT))
            .set("width", WIDTH)
            .set("height", HEIGHT)
            .set("font-family", "sans-serif");

        doc = doc.add(
            Rectangle::new()
                .set("x", 0)
                .set("y", 0)
                .set("width", WIDTH)
                .set("height", HEIGHT)
                .set("fill", "white"),
        );
        doc = doc.add(
            Rectangle::new()
                .set("x", LEFT)
                .set("y", TOP)
                .set("width", plot_w)
                .set("height", plot_h)
                .set("fill", "none")
                .set("stroke", "black"),
        );

        for i in 0..TICKS {
            let t = i as F / (TICKS - 1) as F;

            let xv = x0 + t * (x1 - x0);
            let px = sx(xv);
            doc = doc.add(
                Line::new()
                    .set("x1", px)
                    .set("y1", HEIGHT - BOTTOM)
                    .set("x2", px)
                    .set("y2", HEIGHT - BOTTOM + 4.)
                    .set("stroke", "black"),
            );
            doc = doc.add(
                Text::new(fmt_tick(xv))
                    .set("x", px)
                    .set("y", HEIGHT - BOTTOM + 16.)
                    .set("text-anchor", "middle")
                    .set("font-size", 10),
            );

            let yv = y0 + t * (y1 - y0);
            let py = sy(yv);
            doc = doc.add(
                Line::new()
                    .set("x1", LEFT - 4.)
                    .set("y1", py)
                    .set("x2", LEFT)
                    .set("y2", py)
                    .set("stroke", "black"),
            );
            doc = doc.add(
                Text::new(fmt_tick(yv))
                    .set("x", LEFT - 8.)
                    .set("y", py + 3.)
                    .set("text-anchor", "end")
                    .set("font-size", 10),
            );
        }

        for (si, s) in self.series.iter().enumerate() {
            let color = COLORS[si % COLORS.len()];
            let mut points = s.points.iter();
            let Some(&[fx, fy]) = points.next() else {
                continue;
            };
            let mut data = Data::new().move_to((sx(fx), sy(fy)));
            for &[x, y] in points {
                data = data.line_to((sx(x), sy(y)));
            }
            doc = doc.add(
                Path::new()
                    .set("fill", "none")
                    .set("stroke", color)
                    .set("stroke-width", 1.5)
                    .set("d", data),
            );
            for &[x, y] in &s.points {
                doc = doc.add(
                    Circle::new()
                        .set("cx", sx(x))
                        .set("cy", sy(y))
                        .set("r", 3)
                        .set("fill", color),
                );
            }
        }

        let mut row = 0;
        for (si, s) in self.series.iter().enumerate() {
            if s.label.is_empty() {
                continue;
            }
            let y = TOP + 16. + row as F * 16.;
            doc = doc.add(
                Line::new()
                    .set("x1", LEFT + 12.)
                    .set("y1", y)
                    .set("x2", LEFT + 36.)
                    .set("y2", y)
                    .set("stroke", COLORS[si % COLORS.len()])
                    .set("stroke-width", 1.5),
            );
            doc = doc.add(
                Text::new(s.label.as_str())
                    .set("x", LEFT + 42.)
                    .set("y", y + 4.)
                    .set("font-size", 11),
            );
            row += 1;
        }

        doc = doc.add(
            Text::new(self.title.as_str())
                .set("x", LEFT + plot_w / 2.)
                .set("y", TOP - 16.)
                .set("text-anchor", "middle")
                .set("font-size", 14),
        );
        doc = doc.add(
            Text::new(self.x_label.as_str())
                .set("x", LEFT + plot_w / 2.)
                .set("y", HEIGHT - 14.)
                .set("text-anchor", "middle")
                .set("font-size", 12),
        );
        let cy = TOP + plot_h / 2.;
        doc = doc.add(
            Text::new(self.y_label.as_str())
                .set("x", 18.)
                .set("y", cy)
                .set("text-anchor", "middle")
                .set("font-size", 12)
                .set("transform", format!("rotate(-90 18 {cy})")),
        );

        doc
    }

    /// Renders the chart as an SVG file.
    pub fn save(&self, dst: impl AsRef<std::path::Path>) -> std::io::Result<()> {
        svg::save(dst, &self.to_document())
    }
}

#[test]
fn test_chart_document() {
    let chart = Chart {
        title: "Render Performance".to_string(),
        x_label: "Resolution".to_string(),
        y_label: "Render Time (ms)".to_string(),
        series: vec![
            Series::from_xy("baseline", &[1., 2., 3.], &[0.5, 1.0, 2.0]),
            Series::from_xy("extended", &[1., 2., 3.], &[0.6, 1.5, 3.0]),
        ],
    };
    let s = chart.to_document().to_string();

    // one polyline per series, one marker per point
    assert_eq!(s.matches("<path").count(), 2);
    assert_eq!(s.matches("<circle").count(), 6);
    assert!(s.contains("Render Performance"));
    assert!(s.contains("Resolution"));
    assert!(s.contains("Render Time (ms)"));
    assert!(s.contains("baseline"));
    assert!(s.contains("extended"));
}

#[test]
fn test_unlabeled_series_has_no_legend() {
    let chart = Chart {
        title: "t".to_string(),
        x_label: "x".to_string(),
        y_label: "y".to_string(),
        series: vec![Series::from_xy("", &[0., 1.], &[0., 1.])],
    };
    let s = chart.to_document().to_string();
    assert_eq!(s.matches("<path").count(), 1);
    // only the axis frame and tick lines, no legend swatch
    assert_eq!(s.matches("<line").count(), 2 * TICKS);
}

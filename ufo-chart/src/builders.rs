//! One builder per chart: derived dataset in, Vega-Lite description out.

use crate::spec::{
    AggregateOp, Autosize, Data, DataFormat, Encoding, FieldDef, FieldType, Layer, Legend, Mark,
    MarkDef, MarkType, Projection, Size, Transform, VegaLiteSpec,
};
use ufo_data::models::{DurationSample, GeoPoint, HistogramBin, ShapeCount, StateCount, YearCount};

/// Height of the fixed-height charts, in pixels.
const CHART_HEIGHT: u32 = 300;

/// A container-width chart with the dashboard's fit autosize.
fn fitted(height: Size) -> VegaLiteSpec {
    let mut spec = VegaLiteSpec::new(Size::Container, height);
    spec.autosize = Some(Autosize::fit());
    spec
}

/// US map: gray state shapes with a red circle per sighting.
pub fn map_spec(points: &[GeoPoint], base_map_url: &str) -> anyhow::Result<VegaLiteSpec> {
    let mut spec = VegaLiteSpec::new(Size::Container, Size::Container);
    spec.projection = Some(Projection { kind: "albersUsa" });

    let mut base = MarkDef::new(MarkType::Geoshape);
    base.fill = Some("lightgray");
    base.stroke = Some("white");

    let mut dots = MarkDef::new(MarkType::Circle);
    dots.color = Some("red");
    dots.opacity = Some(0.6);
    dots.size = Some(20.0);

    spec.layer = vec![
        Layer {
            data: Some(Data::Url {
                url: base_map_url.to_string(),
                format: Some(DataFormat {
                    kind: "topojson",
                    feature: Some("states"),
                }),
            }),
            transform: Vec::new(),
            mark: Mark::Detailed(base),
            encoding: None,
        },
        Layer {
            data: Some(Data::values(&points)?),
            transform: Vec::new(),
            mark: Mark::Detailed(dots),
            encoding: Some(Encoding {
                longitude: Some(FieldDef::quantitative("longitude")),
                latitude: Some(FieldDef::quantitative("latitude")),
                tooltip: vec![
                    FieldDef::field("date", FieldType::Temporal)
                        .title("Date")
                        .format("%Y-%m-%d %H:%M:%S"),
                    FieldDef::nominal("shape").title("Shape"),
                    FieldDef::quantitative("duration").title("Duration (s)"),
                    FieldDef::nominal("comments").title("Comments"),
                    FieldDef::quantitative("latitude").title("Latitude"),
                    FieldDef::quantitative("longitude").title("Longitude"),
                ],
                ..Encoding::default()
            }),
        },
    ];
    Ok(spec)
}

/// Sightings per year as a line with point markers.
pub fn time_series_spec(rows: &[YearCount]) -> anyhow::Result<VegaLiteSpec> {
    let mut spec = fitted(Size::Pixels(CHART_HEIGHT));
    spec.data = Some(Data::values(&rows)?);

    let mut line = MarkDef::new(MarkType::Line);
    line.point = Some(true);
    spec.mark = Some(Mark::Detailed(line));

    spec.encoding = Some(Encoding {
        x: Some(FieldDef::field("year", FieldType::Ordinal).title("Year")),
        y: Some(FieldDef::quantitative("count").title("Sightings")),
        ..Encoding::default()
    });
    Ok(spec)
}

/// Duration histogram, one bar per kept bin at its midpoint.
pub fn histogram_spec(bins: &[HistogramBin]) -> anyhow::Result<VegaLiteSpec> {
    let mut spec = fitted(Size::Pixels(CHART_HEIGHT));
    spec.data = Some(Data::values(&bins)?);
    spec.mark = Some(Mark::Simple(MarkType::Bar));
    spec.encoding = Some(Encoding {
        x: Some(
            FieldDef::quantitative("center")
                .title("Duration (min)")
                .axis_format(".1f"),
        ),
        y: Some(FieldDef::quantitative("count").title("Frequency")),
        tooltip: vec![
            FieldDef::quantitative("center")
                .title("Duration (min)")
                .format(".1f"),
            FieldDef::quantitative("count").title("Count"),
        ],
        ..Encoding::default()
    });
    Ok(spec)
}

/// Horizontal bars of the top states, longest first.
pub fn state_bar_spec(rows: &[StateCount]) -> anyhow::Result<VegaLiteSpec> {
    let mut spec = fitted(Size::Container);
    spec.data = Some(Data::values(&rows)?);
    spec.mark = Some(Mark::Simple(MarkType::Bar));
    spec.encoding = Some(Encoding {
        y: Some(FieldDef::nominal("state").sort("-x").title("State")),
        x: Some(FieldDef::quantitative("count").title("Count")),
        tooltip: vec![
            FieldDef::nominal("state").title("State"),
            FieldDef::quantitative("count").title("Count"),
        ],
        ..Encoding::default()
    });
    Ok(spec)
}

/// Donut of the top shapes. The tooltip's percentage is of the shapes shown.
pub fn shape_donut_spec(rows: &[ShapeCount]) -> anyhow::Result<VegaLiteSpec> {
    let mut spec = fitted(Size::Pixels(CHART_HEIGHT));
    spec.data = Some(Data::values(&rows)?);
    spec.transform = vec![
        Transform::JoinAggregate {
            joinaggregate: vec![AggregateOp {
                op: "sum",
                field: "count".to_string(),
                output: "total".to_string(),
            }],
        },
        Transform::Calculate {
            calculate: "datum.count / datum.total * 100".to_string(),
            output: "pct".to_string(),
        },
    ];

    let mut arc = MarkDef::new(MarkType::Arc);
    arc.inner_radius = Some(60.0);
    arc.stroke = Some("#fff");
    spec.mark = Some(Mark::Detailed(arc));

    spec.encoding = Some(Encoding {
        theta: Some(FieldDef::quantitative("count").title("Count")),
        color: Some(FieldDef::nominal("shape").title("Shape").legend(Legend {
            orient: "right",
            columns: 1,
        })),
        tooltip: vec![
            FieldDef::nominal("shape").title("Shape"),
            FieldDef::quantitative("count").title("Count"),
            FieldDef::quantitative("pct")
                .title(&format!("% of Top {}", rows.len()))
                .format(".1f"),
        ],
        ..Encoding::default()
    });
    Ok(spec)
}

/// Violin of raw durations: density area, min-max box plot and points.
/// Density and box statistics are computed by the renderer.
pub fn duration_violin_spec(samples: &[DurationSample]) -> anyhow::Result<VegaLiteSpec> {
    let mut spec = fitted(Size::Pixels(CHART_HEIGHT));
    spec.data = Some(Data::values(&samples)?);

    let mut area = MarkDef::new(MarkType::Area);
    area.orient = Some("horizontal");
    area.opacity = Some(0.3);

    let mut boxplot = MarkDef::new(MarkType::Boxplot);
    boxplot.extent = Some("min-max");

    spec.layer = vec![
        Layer {
            data: None,
            transform: vec![Transform::Density {
                density: "duration (seconds)".to_string(),
                bandwidth: 30.0,
                output: ["duration".to_string(), "density".to_string()],
            }],
            mark: Mark::Detailed(area),
            encoding: Some(Encoding {
                y: Some(FieldDef::quantitative("duration").title("Duration (s)")),
                x: Some(FieldDef::quantitative("density").title("Density")),
                color: Some(FieldDef::constant("#69b3a2")),
                ..Encoding::default()
            }),
        },
        Layer {
            data: None,
            transform: Vec::new(),
            mark: Mark::Detailed(boxplot),
            encoding: Some(Encoding {
                y: Some(FieldDef::quantitative("duration (seconds)")),
                ..Encoding::default()
            }),
        },
        Layer {
            data: None,
            transform: Vec::new(),
            mark: Mark::Simple(MarkType::Point),
            encoding: Some(Encoding {
                y: Some(FieldDef::quantitative("duration (seconds)")),
                tooltip: vec![FieldDef::quantitative("duration (seconds)").title("Duration (s)")],
                ..Encoding::default()
            }),
        },
    ];
    Ok(spec)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn year_rows() -> Vec<YearCount> {
        vec![
            YearCount { year: 1999, count: 1 },
            YearCount { year: 2000, count: 3 },
        ]
    }

    #[test]
    fn time_series_encodes_year_and_count() {
        let spec = time_series_spec(&year_rows()).unwrap();
        let v = serde_json::to_value(&spec).unwrap();
        assert_eq!(v["mark"], json!({"type": "line", "point": true}));
        assert_eq!(v["encoding"]["x"]["field"], "year");
        assert_eq!(v["encoding"]["x"]["type"], "ordinal");
        assert_eq!(v["encoding"]["y"]["field"], "count");
        assert_eq!(v["data"]["values"][1], json!({"year": 2000, "count": 3}));
        assert_eq!(v["height"], 300);
        assert_eq!(v["autosize"]["type"], "fit");
    }

    #[test]
    fn map_has_base_layer_and_points() {
        let points = vec![GeoPoint {
            latitude: 34.0,
            longitude: -118.2,
            duration: 60.0,
            comments: "Bright light".to_string(),
            date: Some("2000-01-01T12:00:00.000Z".to_string()),
            shape: "light".to_string(),
        }];
        let spec = map_spec(&points, "data/us-10m.json").unwrap();
        let v = serde_json::to_value(&spec).unwrap();
        assert_eq!(v["projection"]["type"], "albersUsa");
        assert_eq!(v["width"], "container");
        assert_eq!(v["height"], "container");
        assert_eq!(v["layer"][0]["data"]["url"], "data/us-10m.json");
        assert_eq!(v["layer"][0]["mark"]["type"], "geoshape");
        assert_eq!(v["layer"][1]["mark"]["type"], "circle");
        assert_eq!(v["layer"][1]["data"]["values"][0]["shape"], "light");
        assert_eq!(v["layer"][1]["encoding"]["tooltip"].as_array().unwrap().len(), 6);
    }

    #[test]
    fn histogram_uses_bin_centers() {
        let bins = vec![HistogramBin {
            start: 1.0,
            end: 3.0,
            center: 2.0,
            count: 7,
        }];
        let v = serde_json::to_value(histogram_spec(&bins).unwrap()).unwrap();
        assert_eq!(v["mark"], "bar");
        assert_eq!(v["encoding"]["x"]["field"], "center");
        assert_eq!(v["encoding"]["x"]["axis"]["format"], ".1f");
        assert_eq!(v["data"]["values"][0]["count"], 7);
    }

    #[test]
    fn state_bar_sorts_by_count() {
        let rows = vec![StateCount {
            state: "CA".to_string(),
            count: 4,
        }];
        let v = serde_json::to_value(state_bar_spec(&rows).unwrap()).unwrap();
        assert_eq!(v["encoding"]["y"]["sort"], "-x");
        assert_eq!(v["encoding"]["y"]["type"], "nominal");
        assert_eq!(v["height"], "container");
    }

    #[test]
    fn donut_computes_share_of_shown_shapes() {
        let rows = vec![
            ShapeCount {
                shape: "light".to_string(),
                count: 3,
            },
            ShapeCount {
                shape: "disk".to_string(),
                count: 1,
            },
        ];
        let v = serde_json::to_value(shape_donut_spec(&rows).unwrap()).unwrap();
        assert_eq!(v["mark"]["innerRadius"], 60.0);
        assert_eq!(v["transform"][0]["joinaggregate"][0]["as"], "total");
        assert_eq!(v["transform"][1]["as"], "pct");
        assert_eq!(v["encoding"]["theta"]["field"], "count");
        assert_eq!(v["encoding"]["color"]["legend"]["orient"], "right");
        assert_eq!(v["encoding"]["tooltip"][2]["title"], "% of Top 2");
    }

    #[test]
    fn empty_rows_still_build_a_chart() {
        let v = serde_json::to_value(state_bar_spec(&[]).unwrap()).unwrap();
        assert_eq!(v["data"]["values"], json!([]));
    }

    #[test]
    fn violin_delegates_statistics_to_renderer() {
        let samples = vec![
            DurationSample {
                duration_seconds: 60.0,
            },
            DurationSample {
                duration_seconds: 300.0,
            },
        ];
        let v = serde_json::to_value(duration_violin_spec(&samples).unwrap()).unwrap();
        assert_eq!(v["layer"].as_array().unwrap().len(), 3);
        assert_eq!(v["layer"][0]["transform"][0]["density"], "duration (seconds)");
        assert_eq!(v["layer"][1]["mark"]["type"], "boxplot");
        assert_eq!(v["layer"][2]["mark"], "point");
        assert_eq!(v["data"]["values"][1]["duration (seconds)"], 300.0);
    }
}

//! Declarative Vega-Lite v5 chart descriptions.
//!
//! Only the subset of the grammar the dashboard uses is modeled. Optional
//! properties are skipped when unset so the serialized JSON matches what one
//! would write by hand.

use serde::{Serialize, Serializer};

pub const VEGA_LITE_SCHEMA: &str = "https://vega.github.io/schema/vega-lite/v5.json";

/// A top-level chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VegaLiteSpec {
    #[serde(rename = "$schema")]
    pub schema: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub autosize: Option<Autosize>,
    pub width: Size,
    pub height: Size,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub projection: Option<Projection>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<Data>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub transform: Vec<Transform>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mark: Option<Mark>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub encoding: Option<Encoding>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub layer: Vec<Layer>,
}

impl VegaLiteSpec {
    /// An empty chart of the given size; builders fill in the rest.
    pub fn new(width: Size, height: Size) -> Self {
        Self {
            schema: VEGA_LITE_SCHEMA,
            autosize: None,
            width,
            height,
            projection: None,
            data: None,
            transform: Vec::new(),
            mark: None,
            encoding: None,
            layer: Vec::new(),
        }
    }
}

/// Chart width/height: fill the container or a fixed pixel size.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Size {
    Container,
    Pixels(u32),
}

impl Serialize for Size {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Size::Container => serializer.serialize_str("container"),
            Size::Pixels(px) => serializer.serialize_u32(*px),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Autosize {
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub contains: &'static str,
    pub resize: bool,
}

impl Autosize {
    /// Fit the container including padding, resizing with it.
    pub fn fit() -> Self {
        Self {
            kind: "fit",
            contains: "padding",
            resize: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Projection {
    #[serde(rename = "type")]
    pub kind: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Data {
    /// Inline rows.
    Values { values: serde_json::Value },
    /// Rows fetched by the renderer.
    Url {
        url: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        format: Option<DataFormat>,
    },
}

impl Data {
    /// Serialize derived rows into inline data.
    pub fn values<T: Serialize>(rows: &T) -> anyhow::Result<Self> {
        Ok(Data::Values {
            values: serde_json::to_value(rows)?,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DataFormat {
    #[serde(rename = "type")]
    pub kind: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub feature: Option<&'static str>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MarkType {
    Arc,
    Area,
    Bar,
    Boxplot,
    Circle,
    Geoshape,
    Line,
    Point,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Mark {
    Simple(MarkType),
    Detailed(MarkDef),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MarkDef {
    #[serde(rename = "type")]
    pub kind: MarkType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub point: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fill: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stroke: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub opacity: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub inner_radius: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub orient: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extent: Option<&'static str>,
}

impl MarkDef {
    pub fn new(kind: MarkType) -> Self {
        Self {
            kind,
            point: None,
            fill: None,
            stroke: None,
            color: None,
            opacity: None,
            size: None,
            inner_radius: None,
            orient: None,
            extent: None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldType {
    Quantitative,
    Temporal,
    Ordinal,
    Nominal,
}

/// A field-to-channel mapping, or a constant `value` for the channel.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FieldDef {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<FieldType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub axis: Option<Axis>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub legend: Option<Legend>,
}

impl FieldDef {
    pub fn field(name: &str, kind: FieldType) -> Self {
        Self {
            field: Some(name.to_string()),
            kind: Some(kind),
            value: None,
            title: None,
            sort: None,
            format: None,
            axis: None,
            legend: None,
        }
    }

    pub fn quantitative(name: &str) -> Self {
        Self::field(name, FieldType::Quantitative)
    }

    pub fn nominal(name: &str) -> Self {
        Self::field(name, FieldType::Nominal)
    }

    /// A constant channel value, e.g. a fixed color.
    pub fn constant(value: &str) -> Self {
        Self {
            field: None,
            kind: None,
            value: Some(value.to_string()),
            title: None,
            sort: None,
            format: None,
            axis: None,
            legend: None,
        }
    }

    pub fn title(mut self, title: &str) -> Self {
        self.title = Some(title.to_string());
        self
    }

    pub fn sort(mut self, sort: &str) -> Self {
        self.sort = Some(sort.to_string());
        self
    }

    pub fn format(mut self, format: &str) -> Self {
        self.format = Some(format.to_string());
        self
    }

    pub fn axis_format(mut self, format: &str) -> Self {
        self.axis = Some(Axis {
            format: format.to_string(),
        });
        self
    }

    pub fn legend(mut self, legend: Legend) -> Self {
        self.legend = Some(legend);
        self
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Axis {
    pub format: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Legend {
    pub orient: &'static str,
    pub columns: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Encoding {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub x: Option<FieldDef>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub y: Option<FieldDef>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub theta: Option<FieldDef>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<FieldDef>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub latitude: Option<FieldDef>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub longitude: Option<FieldDef>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub tooltip: Vec<FieldDef>,
}

/// Data transforms applied by the renderer.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Transform {
    /// Kernel density estimate of `density`, output as `[value, density]`.
    Density {
        density: String,
        bandwidth: f64,
        #[serde(rename = "as")]
        output: [String; 2],
    },
    /// Attach an aggregate over all rows to every row.
    JoinAggregate {
        joinaggregate: Vec<AggregateOp>,
    },
    /// Derive a field from an expression.
    Calculate {
        calculate: String,
        #[serde(rename = "as")]
        output: String,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AggregateOp {
    pub op: &'static str,
    pub field: String,
    #[serde(rename = "as")]
    pub output: String,
}

/// One layer of a layered chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Layer {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<Data>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub transform: Vec<Transform>,
    pub mark: Mark,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub encoding: Option<Encoding>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn size_serializes_as_keyword_or_number() {
        assert_eq!(serde_json::to_value(Size::Container).unwrap(), json!("container"));
        assert_eq!(serde_json::to_value(Size::Pixels(300)).unwrap(), json!(300));
    }

    #[test]
    fn empty_spec_skips_unset_properties() {
        let spec = VegaLiteSpec::new(Size::Container, Size::Pixels(300));
        assert_eq!(
            serde_json::to_value(&spec).unwrap(),
            json!({
                "$schema": VEGA_LITE_SCHEMA,
                "width": "container",
                "height": 300,
            })
        );
    }

    #[test]
    fn mark_forms() {
        assert_eq!(serde_json::to_value(Mark::Simple(MarkType::Bar)).unwrap(), json!("bar"));
        let mut def = MarkDef::new(MarkType::Arc);
        def.inner_radius = Some(60.0);
        assert_eq!(
            serde_json::to_value(Mark::Detailed(def)).unwrap(),
            json!({"type": "arc", "innerRadius": 60.0})
        );
    }

    #[test]
    fn field_def_builders() {
        let def = FieldDef::nominal("state").sort("-x").title("State");
        assert_eq!(
            serde_json::to_value(def).unwrap(),
            json!({"field": "state", "type": "nominal", "title": "State", "sort": "-x"})
        );
        assert_eq!(
            serde_json::to_value(FieldDef::constant("#69b3a2")).unwrap(),
            json!({"value": "#69b3a2"})
        );
    }

    #[test]
    fn transforms_serialize_untagged() {
        let density = Transform::Density {
            density: "duration (seconds)".to_string(),
            bandwidth: 30.0,
            output: ["duration".to_string(), "density".to_string()],
        };
        assert_eq!(
            serde_json::to_value(density).unwrap(),
            json!({"density": "duration (seconds)", "bandwidth": 30.0, "as": ["duration", "density"]})
        );
    }

    #[test]
    fn data_forms() {
        let url = Data::Url {
            url: "data/us-10m.json".to_string(),
            format: Some(DataFormat {
                kind: "topojson",
                feature: Some("states"),
            }),
        };
        assert_eq!(
            serde_json::to_value(url).unwrap(),
            json!({"url": "data/us-10m.json", "format": {"type": "topojson", "feature": "states"}})
        );
        let values = Data::values(&vec![1, 2]).unwrap();
        assert_eq!(serde_json::to_value(values).unwrap(), json!({"values": [1, 2]}));
    }
}

use serde::Deserialize;

use super::DataSet;

// ── Property ──────────────────────────────────────────────────────────────

/// A single bound property as delivered by the host.
///
/// `raw` is `None` when the property is bound but currently has no value.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Property<T> {
    pub raw: Option<T>,
}

impl<T> Property<T> {
    pub fn new(raw: T) -> Self {
        Self { raw: Some(raw) }
    }

    pub fn null() -> Self {
        Self { raw: None }
    }
}

/// Returns the raw value of a property only when it is present and non-null.
fn present<T>(prop: &Option<Property<T>>) -> Option<&T> {
    prop.as_ref().and_then(|p| p.raw.as_ref())
}

// ── Parameters ────────────────────────────────────────────────────────────

/// The manifest-declared property bag.
///
/// Field names follow the manifest (`controlWidth`, `GradientDataSet`, …) when
/// deserialized. A missing key and an explicit `null` both map to `None`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Parameters {
    pub rotation: Option<Property<f64>>,
    pub control_width: Option<Property<f64>>,
    pub control_height: Option<Property<f64>>,
    pub offset_start: Option<Property<f64>>,
    pub offset_end: Option<Property<f64>>,
    /// `"Rectangle"` or `"Circle"`.
    pub shape: Option<Property<String>>,
    /// `"Linear"` or `"Radial"`.
    pub gradient: Option<Property<String>>,
    #[serde(rename = "GradientDataSet")]
    pub gradient_data_set: DataSet,
}

impl Parameters {
    pub fn rotation(&self) -> Option<f64> { present(&self.rotation).copied() }
    pub fn control_width(&self) -> Option<f64> { present(&self.control_width).copied() }
    pub fn control_height(&self) -> Option<f64> { present(&self.control_height).copied() }
    pub fn offset_start(&self) -> Option<f64> { present(&self.offset_start).copied() }
    pub fn offset_end(&self) -> Option<f64> { present(&self.offset_end).copied() }
    pub fn shape(&self) -> Option<&str> { present(&self.shape).map(String::as_str) }
    pub fn gradient(&self) -> Option<&str> { present(&self.gradient).map(String::as_str) }
}

// ── Mode ──────────────────────────────────────────────────────────────────

/// Host display mode flags a control may toggle.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Mode {
    tracking_container_resize: bool,
}

impl Mode {
    /// Asks the host to deliver updates when the container is resized.
    pub fn track_container_resize(&mut self, value: bool) {
        self.tracking_container_resize = value;
    }

    pub fn is_tracking_container_resize(&self) -> bool {
        self.tracking_container_resize
    }
}

// ── Context ───────────────────────────────────────────────────────────────

/// Everything the host passes to a lifecycle call.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Context {
    pub parameters: Parameters,
    pub mode: Mode,
}

impl Context {
    pub fn new(parameters: Parameters) -> Self {
        Self { parameters, mode: Mode::default() }
    }

    pub fn data_set(&self) -> &DataSet {
        &self.parameters.gradient_data_set
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_and_null_both_read_as_none() {
        let params = Parameters {
            control_width: Some(Property::null()),
            ..Default::default()
        };
        assert_eq!(params.control_width(), None);
        assert_eq!(params.control_height(), None);
    }

    #[test]
    fn present_value_reads_through() {
        let params = Parameters {
            rotation: Some(Property::new(45.0)),
            shape: Some(Property::new("Circle".to_string())),
            ..Default::default()
        };
        assert_eq!(params.rotation(), Some(45.0));
        assert_eq!(params.shape(), Some("Circle"));
    }

    #[test]
    fn deserializes_manifest_names() {
        let json = r#"{
            "parameters": {
                "controlWidth":  { "raw": 500 },
                "controlHeight": { "raw": null },
                "offsetStart":   {},
                "gradient":      { "raw": "Radial" },
                "GradientDataSet": {
                    "loading": false,
                    "sortedRecordIds": ["a"],
                    "records": { "a": { "offset": "4", "color": "black" } }
                }
            }
        }"#;
        let ctx: Context = serde_json::from_str(json).unwrap();
        let p = &ctx.parameters;
        assert_eq!(p.control_width(), Some(500.0));
        assert_eq!(p.control_height, Some(Property::null()));
        assert_eq!(p.offset_start, Some(Property::null()));
        assert_eq!(p.offset_end, None);
        assert_eq!(p.gradient(), Some("Radial"));
        assert_eq!(ctx.data_set().len(), 1);
        assert!(!ctx.mode.is_tracking_container_resize());
    }

    #[test]
    fn track_container_resize_toggles() {
        let mut mode = Mode::default();
        mode.track_container_resize(true);
        assert!(mode.is_tracking_container_resize());
    }
}

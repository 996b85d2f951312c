use crate::error::{AscseeError, AscseeResult};

/// What kind of media a job converts.
///
/// Unknown strings deserialize to [`TargetType::Other`] instead of failing the
/// whole order file; the runner rejects them per-job at dispatch time.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(from = "String", into = "String")]
pub enum TargetType {
    Image,
    Video,
    Other(String),
}

impl TargetType {
    pub fn label(&self) -> &str {
        match self {
            TargetType::Image => "image",
            TargetType::Video => "video",
            TargetType::Other(s) => s.as_str(),
        }
    }
}

impl From<String> for TargetType {
    fn from(s: String) -> Self {
        match s.as_str() {
            "image" => TargetType::Image,
            "video" => TargetType::Video,
            _ => TargetType::Other(s),
        }
    }
}

impl From<TargetType> for String {
    fn from(t: TargetType) -> Self {
        t.label().to_string()
    }
}

impl std::fmt::Display for TargetType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// One job's complete parameter set for converting one source media file.
///
/// Fully populated before it leaves the builder or the store; never mutated
/// afterwards. JSON keys match the order file format exactly.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct RenderSpec {
    #[serde(rename = "type")]
    pub target_type: TargetType,
    pub path: String,
    pub output: String, // destination base name, no extension
    pub warp: f64,
    #[serde(rename = "fontFile")]
    pub font_file: String,
    #[serde(rename = "fontSize")]
    pub font_size: u32,
    #[serde(rename = "fontColors")]
    pub font_colors: Vec<String>,
    #[serde(rename = "backgroundColor")]
    pub background_color: String,
}

impl RenderSpec {
    pub fn validate(&self) -> AscseeResult<()> {
        if self.path.trim().is_empty() {
            return Err(AscseeError::validation("source path must be non-empty"));
        }
        if self.output.trim().is_empty() {
            return Err(AscseeError::validation("output name must be non-empty"));
        }
        if self.font_size == 0 {
            return Err(AscseeError::validation("font size must be >= 1"));
        }
        if self.font_colors.is_empty() {
            return Err(AscseeError::validation(
                "at least one font color must be selected",
            ));
        }
        Ok(())
    }
}

/// An ordered batch of render specs, executed strictly in sequence.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct Order(pub Vec<RenderSpec>);

impl Order {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    pub fn push(&mut self, spec: RenderSpec) {
        self.0.push(spec);
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, RenderSpec> {
        self.0.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn basic_spec() -> RenderSpec {
        RenderSpec {
            target_type: TargetType::Image,
            path: "cat.png".to_string(),
            output: "cat_ascii".to_string(),
            warp: 10.0,
            font_file: "arial.ttf".to_string(),
            font_size: 16,
            font_colors: vec!["#FFFFFF".to_string()],
            background_color: "#000000".to_string(),
        }
    }

    #[test]
    fn json_keys_match_order_file_format() {
        let s = serde_json::to_string(&basic_spec()).unwrap();
        for key in [
            "\"type\"",
            "\"path\"",
            "\"output\"",
            "\"warp\"",
            "\"fontFile\"",
            "\"fontSize\"",
            "\"fontColors\"",
            "\"backgroundColor\"",
        ] {
            assert!(s.contains(key), "missing key {key} in {s}");
        }
        assert!(s.contains("\"type\":\"image\""));
    }

    #[test]
    fn order_roundtrip_preserves_fields_and_order() {
        let mut video = basic_spec();
        video.target_type = TargetType::Video;
        video.path = "clip.mp4".to_string();
        let order = Order(vec![basic_spec(), video]);

        let s = serde_json::to_string_pretty(&order).unwrap();
        let de: Order = serde_json::from_str(&s).unwrap();
        assert_eq!(de, order);
        assert_eq!(de.0[1].path, "clip.mp4");
    }

    #[test]
    fn unknown_type_survives_deserialization() {
        let s = serde_json::to_string(&basic_spec()).unwrap();
        let s = s.replace("\"image\"", "\"audio\"");
        let de: RenderSpec = serde_json::from_str(&s).unwrap();
        assert_eq!(de.target_type, TargetType::Other("audio".to_string()));
        assert_eq!(de.target_type.label(), "audio");
    }

    #[test]
    fn validate_rejects_empty_path_and_output() {
        let mut spec = basic_spec();
        spec.path = "  ".to_string();
        assert!(spec.validate().is_err());

        let mut spec = basic_spec();
        spec.output = String::new();
        assert!(spec.validate().is_err());
    }

    #[test]
    fn validate_rejects_zero_font_size_and_no_colors() {
        let mut spec = basic_spec();
        spec.font_size = 0;
        assert!(spec.validate().is_err());

        let mut spec = basic_spec();
        spec.font_colors.clear();
        assert!(spec.validate().is_err());
    }
}

use derive_more::Display;

/// Render pipeline the project is set up with.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Display)]
pub enum RenderPipeline {
    #[default]
    #[display("Standard")]
    Standard,
    #[display("URP")]
    Universal,
    #[display("HDRP")]
    HighDefinition,
}

impl RenderPipeline {
    pub fn from_config_str(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "standard" | "builtin" | "built-in" => Some(Self::Standard),
            "urp" | "universal" => Some(Self::Universal),
            "hdrp" | "high-definition" => Some(Self::HighDefinition),
            _ => None,
        }
    }

    /// Package that ships the pipeline, if it is not built in.
    pub fn package_id(&self) -> Option<&'static str> {
        match self {
            Self::Standard => None,
            Self::Universal => Some("com.unity.render-pipelines.universal"),
            Self::HighDefinition => Some("com.unity.render-pipelines.high-definition"),
        }
    }

    pub fn full_name(&self) -> &'static str {
        match self {
            Self::Standard => "Built-in Render Pipeline",
            Self::Universal => "Universal Render Pipeline",
            Self::HighDefinition => "High Definition Render Pipeline",
        }
    }
}

/// Descriptive metadata about the host project, used for the README.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProjectInfo {
    pub name: String,
    pub version: String,
    pub company: String,
    pub engine_version: String,
    pub render_pipeline: RenderPipeline,
}

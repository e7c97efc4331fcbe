use serde::{Deserialize, Serialize};

/// Stylistic filter applied before tone adjustment.
///
/// Each variant's intrinsic parameters (the monochrome tint, the
/// vignette strength) are fixed constants of the effect, not caller
/// inputs.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum FilterVariant {
    #[default]
    None,
    BlackAndWhite,
    Sepia,
    Monochrome,
    Noir,
    Vignette,
}

impl FilterVariant {
    pub const ALL: [FilterVariant; 6] = [
        FilterVariant::None,
        FilterVariant::BlackAndWhite,
        FilterVariant::Sepia,
        FilterVariant::Monochrome,
        FilterVariant::Noir,
        FilterVariant::Vignette,
    ];

    /// Stable identifier, used in log fields and by glue-layer parsing.
    pub fn name(&self) -> &'static str {
        match self {
            FilterVariant::None => "none",
            FilterVariant::BlackAndWhite => "black_and_white",
            FilterVariant::Sepia => "sepia",
            FilterVariant::Monochrome => "monochrome",
            FilterVariant::Noir => "noir",
            FilterVariant::Vignette => "vignette",
        }
    }

    /// Short human-facing label for a picker surface.
    pub fn label(&self) -> &'static str {
        match self {
            FilterVariant::None => "None",
            FilterVariant::BlackAndWhite => "B&W",
            FilterVariant::Sepia => "Sepia",
            FilterVariant::Monochrome => "Mono",
            FilterVariant::Noir => "Noir",
            FilterVariant::Vignette => "Vignette",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|v| v.name() == name)
    }
}

/// Non-destructive edit parameters for a photo.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct EditParams {
    pub filter: FilterVariant,
    /// Brightness offset, advisory range [-1, 1]. 0 is neutral. Values
    /// outside the range are applied as given; clamping is the
    /// caller's job.
    pub brightness: f32,
    /// Contrast factor, advisory range [0, 4]. 1 is neutral.
    pub contrast: f32,
}

impl Default for EditParams {
    fn default() -> Self {
        Self {
            filter: FilterVariant::None,
            brightness: 0.0,
            contrast: 1.0,
        }
    }
}

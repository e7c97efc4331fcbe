mod style_filter;
mod tone;

pub use style_filter::StyleFilter;
pub use tone::ToneAdjust;

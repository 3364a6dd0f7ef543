//! Typography - Font Sizes and Weights

/// Typography constants
pub struct Typography;

impl Typography {
    // Font sizes
    pub const TEXT_XS: f32 = 12.0;
    pub const TEXT_SM: f32 = 14.0;
    pub const TEXT_BASE: f32 = 16.0;
    pub const TEXT_LG: f32 = 18.0;
    pub const TEXT_XL: f32 = 20.0;
    pub const TEXT_2XL: f32 = 24.0;
    pub const TEXT_3XL: f32 = 30.0;
    pub const TEXT_5XL: f32 = 48.0;
}

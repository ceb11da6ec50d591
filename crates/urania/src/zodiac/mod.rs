pub mod glyphs;
pub mod normalizer;
pub mod signs;

pub use glyphs::planet_symbol;
pub use normalizer::{
    absolute_degree, format_degree, normalize_longitude, sign_from_abs_degree, split_degree,
    SignPosition,
};
pub use signs::{element_of, modality_of, sign_color, sign_name, Element, Locale, Modality};

//! Single-sided spectrum extraction and round-trip normalization

pub mod sample;
pub mod normalize;
pub mod single_sided;
pub mod extractor;
pub mod analysis;

pub use sample::{Sample, SpectralFloat};
pub use normalize::scale_in_place;
pub use single_sided::{
    amplitude_to_db, single_sided, single_sided_complex_scaled, single_sided_len,
    single_sided_mut, single_sided_spectrum, SpectrumPoint,
};
pub use extractor::{AmplitudeScale, ExtractorConfig, SpectrumExtractor};
pub use analysis::{peak, phase_spectrum, power_spectrum};


pub mod aspects;
pub mod chart;
pub mod error;
pub mod narrator;
pub mod source;
pub mod timezone;
pub mod zodiac;

pub use aspects::{Aspect, AspectCalculator, AspectType};
pub use chart::{
    BirthSubject, ChartAssembler, ChartData, GeneratedChart, House, Planet, SourceKind,
    SubjectRequest,
};
pub use error::{FieldIssue, ProviderError, ValidationError};
pub use narrator::{narrate, narrate_localized};
pub use source::{resolve_source, ChartProvider, ChartSource, FallbackReason};
pub use zodiac::{Locale, SignPosition};

pub mod assembler;
pub mod data;
pub mod fallback;
pub mod payload;
pub mod subject;

pub use assembler::ChartAssembler;
pub use data::{ChartData, GeneratedChart, House, Planet, SourceKind};
pub use subject::{BirthSubject, SubjectRequest};

pub mod feature;
pub mod schema;
pub mod value;

pub use feature::{FeatureDefinition, FeatureKind, OutputDefinition};
pub use schema::Schema;
pub use value::{FeatureValue, InputRecord, OutputRecord, TrainingDatum};

//! Shared data model for the posview list-view engine.
//!
//! Defines the typed row representation, per-view schemas, and the query
//! specs (filters, sort, page state) that the pipeline in `posview-core`
//! evaluates. Everything here is plain data: no I/O, no clock access.

pub mod error;
pub mod ids;
pub mod query;
pub mod schema;
pub mod value;

pub use error::{ModelError, Result};
pub use ids::{FieldName, RowId};
pub use query::{
    BucketChoice, DatePeriod, EnumChoice, FilterSpec, PageState, SortDirection, SortSpec,
};
pub use schema::{BadgeMap, BadgeTone, FieldDef, FieldType, Tier, TierThresholds, ViewSchema};
pub use value::{FieldValue, Row};

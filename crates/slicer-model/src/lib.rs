pub mod column;
pub mod error;
pub mod expr;
pub mod filter;
pub mod host;
pub mod point;
pub mod value;

pub use column::{CategoryColumn, ColumnMetadata, FIELDS_ROLE, VisualMetadata};
pub use error::{Result, SlicerError};
pub use expr::{QueryExpr, SourceRef};
pub use filter::{
    AdvancedCondition, AppliedFilter, FILTER_PROPERTY, FilterAction, FilterTarget, GENERAL_OBJECT,
    GeneralObject, LEGACY_FILTER_VALUES_PROPERTY, RawCell, StoredFilter, TUPLE_FILTER_SCHEMA,
    TUPLE_FILTER_TYPE, TupleCell, TupleFilter, VisualObjects, WhereItem,
};
pub use host::SlicerHost;
pub use point::{HierarchyDataPoint, SELECT_ALL_ID, SelectionTuple};
pub use value::{DataKind, TypedValue};

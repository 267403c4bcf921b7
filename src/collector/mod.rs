pub mod export;
pub mod types;

pub use export::{collect, export_csv, items_to_csv, raw_items_from_json};
pub use types::{
    CollectorError, CollectorResult, ExtractedItem, FieldLookup, ItemField, NOT_AVAILABLE, RawItem,
};

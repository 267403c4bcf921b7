use serde::{Deserialize, Serialize};

/// Sentinel substituted when a field cannot be resolved on the source element
pub const NOT_AVAILABLE: &str = "N/A";

/// The five named fields extracted per listing item
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemField {
    /// Product title
    Name,
    /// Display price, currency-formatted
    Price,
    /// Number of variants (colors/sizes) offered
    VariantCount,
    /// Availability or promotional messaging
    AvailabilityStatus,
    /// URL of the product detail page
    DetailLink,
}

impl ItemField {
    /// All fields in declared (column) order
    pub const ALL: [ItemField; 5] = [
        ItemField::Name,
        ItemField::Price,
        ItemField::VariantCount,
        ItemField::AvailabilityStatus,
        ItemField::DetailLink,
    ];

    /// Stable column name used in the CSV header
    pub fn column_name(self) -> &'static str {
        match self {
            ItemField::Name => "name",
            ItemField::Price => "price",
            ItemField::VariantCount => "variantCount",
            ItemField::AvailabilityStatus => "availabilityStatus",
            ItemField::DetailLink => "detailLink",
        }
    }
}

/// A source of raw per-item field lookups.
///
/// Implemented by whatever the page-query collaborator hands over: each
/// lookup either yields the field's text or `None` when the sub-element is
/// absent. Absence is a normal condition, not an error.
pub trait FieldLookup {
    /// Resolve the text content of a named field, if present
    fn field(&self, field: ItemField) -> Option<String>;
}

/// A raw item record as handed over across a process boundary.
///
/// Each field is `None` when the corresponding element was not found on the
/// page. This is the concrete `FieldLookup` used by the CLI and tests.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawItem {
    /// Product title text, if found
    pub name: Option<String>,

    /// Price text, if found
    pub price: Option<String>,

    /// Variant count text, if found
    pub variant_count: Option<String>,

    /// Availability messaging text, if found
    pub availability_status: Option<String>,

    /// Detail link href, if found
    pub detail_link: Option<String>,
}

impl FieldLookup for RawItem {
    fn field(&self, field: ItemField) -> Option<String> {
        match field {
            ItemField::Name => self.name.clone(),
            ItemField::Price => self.price.clone(),
            ItemField::VariantCount => self.variant_count.clone(),
            ItemField::AvailabilityStatus => self.availability_status.clone(),
            ItemField::DetailLink => self.detail_link.clone(),
        }
    }
}

/// One extracted listing item with a fixed schema.
///
/// Every field is always present; fields the source could not resolve hold
/// the [`NOT_AVAILABLE`] sentinel rather than an absent value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractedItem {
    /// Product title, or "N/A"
    pub name: String,

    /// Display price, or "N/A"
    pub price: String,

    /// Variant count, or "N/A"
    pub variant_count: String,

    /// Availability status, or "N/A"
    pub availability_status: String,

    /// Detail page URL, or "N/A"
    pub detail_link: String,
}

impl ExtractedItem {
    /// Build an item from a source, substituting the sentinel per missing field.
    ///
    /// Each field resolves independently; a miss on one never affects the rest.
    pub fn from_source<S: FieldLookup>(source: &S) -> Self {
        let resolve = |field| {
            source
                .field(field)
                .unwrap_or_else(|| NOT_AVAILABLE.to_string())
        };
        Self {
            name: resolve(ItemField::Name),
            price: resolve(ItemField::Price),
            variant_count: resolve(ItemField::VariantCount),
            availability_status: resolve(ItemField::AvailabilityStatus),
            detail_link: resolve(ItemField::DetailLink),
        }
    }

    /// Field values in declared column order
    pub fn values(&self) -> [&str; 5] {
        [
            &self.name,
            &self.price,
            &self.variant_count,
            &self.availability_status,
            &self.detail_link,
        ]
    }
}

/// Result type for collector operations
pub type CollectorResult<T> = Result<T, CollectorError>;

/// Error types for collector operations
#[derive(Debug)]
pub enum CollectorError {
    /// I/O error writing the export file
    Io(std::io::Error),

    /// Serialization error decoding raw item input
    Serialization(serde_json::Error),
}

impl std::fmt::Display for CollectorError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CollectorError::Io(err) => write!(f, "I/O error: {}", err),
            CollectorError::Serialization(err) => write!(f, "Serialization error: {}", err),
        }
    }
}

impl std::error::Error for CollectorError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CollectorError::Io(err) => Some(err),
            CollectorError::Serialization(err) => Some(err),
        }
    }
}

impl From<std::io::Error> for CollectorError {
    fn from(err: std::io::Error) -> Self {
        CollectorError::Io(err)
    }
}

impl From<serde_json::Error> for CollectorError {
    fn from(err: serde_json::Error) -> Self {
        CollectorError::Serialization(err)
    }
}

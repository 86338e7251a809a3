pub mod bond_page;
pub mod quote;

pub use bond_page::{extract_fields, BondPageExtractor, ExtractedFields, VALUE_CELL_CLASS_PREFIX};
pub use quote::{parse_chart_response, QuoteFetcher};

/// Marker label for a single shared "last update" timestamp cell
pub const LAST_UPDATE_MARKER: &str = "last_update";

/// Marker label for the per-source timestamp table
pub const ENTITY_UPDATED_AT_MARKER: &str = "entity_updated_at";

/// Synthetic column holding the owning source entity
pub const ENTITY_COLUMN: &str = "entity";

/// Synthetic column derived from the originating field path
pub const TYPE_COLUMN: &str = "investment_type";

/// Field rendered when a nested entity object sits in the entity column
pub const ENTITY_NAME_FIELD: &str = "name";

/// Field appended to investment paths
pub const DETAILS_FIELD: &str = "details";

/// Historic sheets always mirror this field
pub const HISTORIC_ENTRIES_FIELD: &str = "entries";

pub const DEFAULT_DATE_FORMAT: &str = "%d/%m/%Y";

pub const DEFAULT_DATETIME_FORMAT: &str = "%d/%m/%Y %H:%M:%S";

/// Rows in the blank block appended after projected data
pub const BLANK_BLOCK_ROWS: usize = 500;

/// Columns in each row of the blank block
pub const BLANK_BLOCK_COLUMNS: usize = 100;

/// Trailing blanks appended to a rebuilt per-source timestamp row
pub const ENTITY_UPDATES_TRAILING_BLANKS: usize = 10;

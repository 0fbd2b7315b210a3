//! Constants shared by the search page, the grid and the backend clients.

/// Page size used by the reader (card list) view.
pub const PAGE_SIZE: u64 = 20;

/// Default page size of the grid view.
pub const GRID_DEFAULT_PAGE_SIZE: u64 = 100;

/// Page sizes offered by the grid view selector.
pub const GRID_PAGE_SIZE_OPTIONS: [u64; 4] = [50, 100, 500, 1000];

/// Backend field names for the three facets.
pub const DOCTYPE_FIELD: &str = "DocType";
pub const BRANCH_FIELD: &str = "Branch";
pub const EXTENSION_FIELD: &str = "FileExtension";

/// Keys of the aggregation maps in a search response.
pub const DOCTYPE_COUNTS_KEY: &str = "doctype_counts";
pub const BRANCHTYPE_COUNTS_KEY: &str = "branchtype_counts";
pub const EXTENSIONTYPE_COUNTS_KEY: &str = "extensiontype_counts";

pub const SEARCH_ENDPOINT: &str = "/search";
pub const ATTACHMENT_LINK_ENDPOINT: &str = "/handle-attachment-link";

/// Text shown for documents that come back without any text.
pub const NO_TEXT_SENTINEL: &str = "No text found";

/// Extensions previewed as converted HTML inside the modal.
pub const MODAL_VIEW_EXTENSIONS: [&str; 3] = ["doc", "docx", "html"];

/// Grid columns that are never rendered as table cells.
pub const GRID_HIDDEN_COLUMNS: [&str; 2] = ["Text", "highlighted_text"];

pub const INVALID_QUERY_MESSAGE: &str = "Invalid or empty search query provided. Please use double quotes for phrases.";
pub const INCOMPLETE_DATE_RANGE_MESSAGE: &str = "Please provide a complete date range (both start and end dates).";
pub const FETCH_FAILED_MESSAGE: &str = "Failed to fetch documents.";
pub const EMPTY_PREVIEW_HTML: &str = "<p>Preview is empty or could not be generated.</p>";

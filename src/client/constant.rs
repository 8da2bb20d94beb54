pub const SITE_NAME: &str = "RentDesk";

/// Page sizes offered by list pages.
pub const PAGE_SIZES: [u64; 4] = [10, 25, 50, 100];

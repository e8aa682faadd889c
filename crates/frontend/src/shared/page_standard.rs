//! Page categories and page ids.
//!
//! Every routed page declares an `id` shaped `{area}--{category}` (e.g.
//! `"a004_request--list"`) and a `data-page-category`, so a page found in the
//! DOM inspector maps straight back to its `domain/` directory.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageCategory {
    /// Table with filters and pagination
    List,
    /// Form for a single record
    Detail,
    /// Editor for configuration (workflows, roles)
    Admin,
}

impl PageCategory {
    pub const ALL: [PageCategory; 3] = [PageCategory::List, PageCategory::Detail, PageCategory::Admin];

    pub fn as_str(&self) -> &'static str {
        match self {
            PageCategory::List => "list",
            PageCategory::Detail => "detail",
            PageCategory::Admin => "admin",
        }
    }

    pub fn root_class(&self) -> &'static str {
        match self {
            PageCategory::List => "page",
            PageCategory::Detail => "page page--detail",
            PageCategory::Admin => "page page--admin",
        }
    }
}

/// `true` for ids shaped `{area}--{category}` with a known category.
pub fn is_valid_page_id(id: &str) -> bool {
    match id.split_once("--") {
        Some((area, category)) => {
            !area.is_empty() && PageCategory::ALL.iter().any(|c| c.as_str() == category)
        }
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_id_format() {
        assert!(is_valid_page_id("a004_request--list"));
        assert!(is_valid_page_id("a005_workflow--admin"));
        assert!(!is_valid_page_id("a004_request"));
        assert!(!is_valid_page_id("--list"));
        assert!(!is_valid_page_id("a004_request--dashboard"));
    }
}

use serde::Serialize;

use crate::config::PaginationSettings;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub page: usize,
    pub per_page: usize,
}

impl PageRequest {
    /// Fills in defaults and clamps both values to at least 1.
    pub fn resolve(page: Option<usize>, per_page: Option<usize>, settings: &PaginationSettings) -> Self {
        Self {
            page: page.unwrap_or(settings.default_page).max(1),
            per_page: per_page.unwrap_or(settings.default_per_page).max(1),
        }
    }

    pub fn offset(&self) -> usize {
        (self.page - 1).saturating_mul(self.per_page)
    }

    pub fn meta(&self, total_players: usize) -> PageMeta {
        PageMeta {
            page: self.page,
            per_page: self.per_page,
            total_pages: total_players.div_ceil(self.per_page),
            total_players,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageMeta {
    pub page: usize,
    pub per_page: usize,
    pub total_pages: usize,
    pub total_players: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_and_clamping() {
        let settings = PaginationSettings::default();

        assert_eq!(PageRequest::resolve(None, None, &settings), PageRequest { page: 1, per_page: 50 });
        assert_eq!(PageRequest::resolve(Some(0), Some(0), &settings), PageRequest { page: 1, per_page: 1 });
    }

    #[test]
    fn test_offset_and_total_pages() {
        let request = PageRequest { page: 3, per_page: 20 };

        assert_eq!(request.offset(), 40);
        assert_eq!(request.meta(0).total_pages, 0);
        assert_eq!(request.meta(40).total_pages, 2);
        assert_eq!(request.meta(41).total_pages, 3);
    }

    #[test]
    fn test_offset_saturates_on_huge_page() {
        let request = PageRequest::resolve(Some(usize::MAX), Some(2), &PaginationSettings::default());

        assert_eq!(request.offset(), usize::MAX);
        assert_eq!(request.meta(10).total_pages, 5);
    }
}

use crate::config::settings::PaginationSettings;
use crate::errors::PaginationError;

/// Immutable description of a paginated list
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaginationConfig {
    total_records: u64,
    page_limit: u64,
    page_neighbours: u64,
    total_pages: u64,
}

impl PaginationConfig {
    /// Validate raw input, falling back to the default page limit when none is given.
    ///
    /// Negative record counts and non-positive page limits are rejected;
    /// `page_neighbours` is clamped into `[0, max_page_neighbours]`.
    pub fn new(
        total_records: i64,
        page_limit: Option<i64>,
        page_neighbours: i64,
    ) -> Result<Self, PaginationError> {
        Self::with_settings(
            total_records,
            page_limit,
            page_neighbours,
            &PaginationSettings::default(),
        )
    }

    pub fn with_settings(
        total_records: i64,
        page_limit: Option<i64>,
        page_neighbours: i64,
        settings: &PaginationSettings,
    ) -> Result<Self, PaginationError> {
        let total_records = validate_total_records(total_records)?;
        let page_limit = resolve_page_limit(page_limit, settings)?;
        let page_neighbours = clamp_neighbours(page_neighbours, settings.max_page_neighbours);

        Ok(Self {
            total_records,
            page_limit,
            page_neighbours,
            total_pages: total_records.div_ceil(page_limit),
        })
    }

    pub fn total_records(&self) -> u64 {
        self.total_records
    }

    pub fn page_limit(&self) -> u64 {
        self.page_limit
    }

    pub fn page_neighbours(&self) -> u64 {
        self.page_neighbours
    }

    pub fn total_pages(&self) -> u64 {
        self.total_pages
    }

    /// Distance travelled by a single left/right jump
    pub fn jump_size(&self) -> u64 {
        self.page_neighbours * 2 + 1
    }

    /// A control is only shown when there is more than one page of records.
    pub fn is_renderable(&self) -> bool {
        self.total_records > 0 && self.total_pages != 1
    }
}

fn validate_total_records(total_records: i64) -> Result<u64, PaginationError> {
    u64::try_from(total_records).map_err(|_| PaginationError::NegativeTotalRecords(total_records))
}

fn resolve_page_limit(
    page_limit: Option<i64>,
    settings: &PaginationSettings,
) -> Result<u64, PaginationError> {
    match page_limit {
        None => Ok(settings.page_limit.max(1)),
        Some(limit) if limit > 0 => Ok(limit as u64),
        Some(limit) => Err(PaginationError::InvalidPageLimit(limit)),
    }
}

fn clamp_neighbours(page_neighbours: i64, max: u64) -> u64 {
    page_neighbours.clamp(0, max as i64) as u64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_page_limit() {
        let config = PaginationConfig::new(95, None, 1).unwrap();

        assert_eq!(config.page_limit(), 30);
        assert_eq!(config.total_pages(), 4);
    }

    #[test]
    fn test_total_pages_rounds_up() {
        let config = PaginationConfig::new(101, Some(10), 0).unwrap();
        assert_eq!(config.total_pages(), 11);

        let exact = PaginationConfig::new(100, Some(10), 0).unwrap();
        assert_eq!(exact.total_pages(), 10);
    }

    #[test]
    fn test_neighbours_are_clamped() {
        assert_eq!(PaginationConfig::new(10, Some(1), 7).unwrap().page_neighbours(), 2);
        assert_eq!(PaginationConfig::new(10, Some(1), -3).unwrap().page_neighbours(), 0);
        assert_eq!(PaginationConfig::new(10, Some(1), 1).unwrap().page_neighbours(), 1);
    }

    #[test]
    fn test_rejects_malformed_input() {
        assert_eq!(
            PaginationConfig::new(-1, Some(10), 0),
            Err(PaginationError::NegativeTotalRecords(-1))
        );
        assert_eq!(
            PaginationConfig::new(10, Some(0), 0),
            Err(PaginationError::InvalidPageLimit(0))
        );
        assert_eq!(
            PaginationConfig::new(10, Some(-5), 0),
            Err(PaginationError::InvalidPageLimit(-5))
        );
    }

    #[test]
    fn test_renderable() {
        assert!(!PaginationConfig::new(0, Some(10), 0).unwrap().is_renderable());
        assert!(!PaginationConfig::new(10, Some(10), 0).unwrap().is_renderable());
        assert!(PaginationConfig::new(11, Some(10), 0).unwrap().is_renderable());
    }

    #[test]
    fn test_jump_size() {
        let config = PaginationConfig::new(500, Some(10), 2).unwrap();
        assert_eq!(config.jump_size(), 5);
    }
}

pub struct PaginationSettings {
    pub page_limit: u64,
    pub page_neighbours: i64,
    pub max_page_neighbours: u64,
}

impl Default for PaginationSettings {
    fn default() -> Self {
        Self {
            page_limit: 30,
            page_neighbours: 0,
            max_page_neighbours: 2,
        }
    }
}

pub struct RenderSettings {
    pub aria_label: &'static str,
    pub left_label: &'static str,
    pub right_label: &'static str,
}

impl Default for RenderSettings {
    fn default() -> Self {
        Self {
            aria_label: "Pagination",
            left_label: "«",
            right_label: "»",
        }
    }
}

pub struct AppConfig {
    pub pagination: PaginationSettings,
    pub render: RenderSettings,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl AppConfig {
    pub fn new() -> Self {
        Self {
            pagination: PaginationSettings::default(),
            render: RenderSettings::default(),
        }
    }
}

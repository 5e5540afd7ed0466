use blog_core::pagination::PageRequest;

/// Query string of a listing request.
#[derive(Debug, Clone, Default)]
pub struct PageParams {
    pub page: PageRequest,
    pub q: Option<String>,
}

impl PageParams {
    pub fn from_query(query: Option<&str>) -> Self {
        let pairs: Vec<(String, String)> = query
            .and_then(|q| serde_urlencoded::from_str(q).ok())
            .unwrap_or_default();
        let get = |key: &str| {
            pairs
                .iter()
                .find(|(k, _)| k == key)
                .map(|(_, v)| v.as_str())
        };
        Self {
            page: PageRequest::parse(get("page")),
            q: get("q").map(str::to_string),
        }
    }
}

pub struct GetSummaryDto {
    pub visitor_key: String,
}

#[derive(Debug, Clone)]
pub struct SummaryDto {
    pub num_books: i64,
    pub num_instances: i64,
    pub num_instances_available: i64,
    pub num_authors: i64,
    pub num_visits: i64,
}

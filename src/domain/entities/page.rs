use crate::domain::entities::record::AnalysisRecord;

pub const PAGE_SIZE: usize = 10;

pub fn filter_records<'a>(records: &'a [AnalysisRecord], term: &str) -> Vec<&'a AnalysisRecord> {
    let needle = term.to_lowercase();
    if needle.is_empty() {
        return records.iter().collect();
    }
    records
        .iter()
        .filter(|record| record.matches_search(&needle))
        .collect()
}

pub fn total_pages(count: usize) -> usize {
    count.div_ceil(PAGE_SIZE)
}

/// Rows `[(page-1)*PAGE_SIZE, page*PAGE_SIZE)` clipped to `items`; pages start at 1.
pub fn page_slice<T>(items: &[T], page: usize) -> &[T] {
    let start = page.max(1).saturating_sub(1).saturating_mul(PAGE_SIZE);
    if start >= items.len() {
        return &[];
    }
    let end = start.saturating_add(PAGE_SIZE).min(items.len());
    &items[start..end]
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageView {
    pub rows: Vec<AnalysisRecord>,
    pub current_page: usize,
    pub total_pages: usize,
    pub filtered_count: usize,
}

impl PageView {
    pub fn build(records: &[AnalysisRecord], term: &str, current_page: usize) -> Self {
        let filtered = filter_records(records, term);
        let rows = page_slice(&filtered, current_page)
            .iter()
            .map(|record| (*record).clone())
            .collect();
        Self {
            rows,
            current_page,
            total_pages: total_pages(filtered.len()),
            filtered_count: filtered.len(),
        }
    }

    pub fn has_prev(&self) -> bool {
        self.current_page > 1
    }

    pub fn has_next(&self) -> bool {
        self.current_page < self.total_pages
    }

    pub fn label(&self) -> String {
        format!("Page {} of {}", self.current_page, self.total_pages.max(1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(company: &str, date: &str) -> AnalysisRecord {
        AnalysisRecord {
            company_name: company.to_string(),
            date: date.to_string(),
            ..AnalysisRecord::default()
        }
    }

    fn numbered(count: usize) -> Vec<AnalysisRecord> {
        (0..count)
            .map(|idx| record(&format!("Company {idx}"), "2024-01-01"))
            .collect()
    }

    #[test]
    fn empty_term_keeps_every_record_in_order() {
        let records = vec![record("Acme", "2024-01-01"), record("Globex", "2024-02-02")];

        let filtered = filter_records(&records, "");

        assert_eq!(filtered.len(), 2);
        assert_eq!(filtered[0].company_name, "Acme");
        assert_eq!(filtered[1].company_name, "Globex");
    }

    #[test]
    fn term_matches_company_case_insensitively() {
        let records = vec![record("Acme", "2024-01-01"), record("Globex", "2024-02-02")];

        let filtered = filter_records(&records, "acme");

        assert_eq!(filtered, vec![&records[0]]);
    }

    #[test]
    fn term_matches_date_substring() {
        let records = vec![record("Acme", "2024-01-01"), record("Globex", "2024-02-02")];

        let filtered = filter_records(&records, "02-0");

        assert_eq!(filtered, vec![&records[1]]);
    }

    #[test]
    fn included_and_excluded_records_partition_on_match() {
        let records = vec![
            record("Initech", "2023-12-31"),
            record("INITROGEN", "2024-01-01"),
            record("Hooli", "2024-init"),
            record("Umbrella", "2024-03-03"),
        ];
        let term = "INIT";

        let filtered = filter_records(&records, term);

        let needle = term.to_lowercase();
        for item in &records {
            let contained = item.company_name.to_lowercase().contains(&needle)
                || item.date.to_lowercase().contains(&needle);
            assert_eq!(
                filtered.contains(&item),
                contained,
                "unexpected filter result for {item:?}"
            );
        }
        assert_eq!(filtered.len(), 3);
    }

    #[test]
    fn twenty_three_records_span_three_pages() {
        let records = numbered(23);

        assert_eq!(total_pages(records.len()), 3);
        assert_eq!(page_slice(&records, 1).len(), 10);
        assert_eq!(page_slice(&records, 3).len(), 3);
        assert_eq!(page_slice(&records, 3)[0].company_name, "Company 20");
    }

    #[test]
    fn no_records_means_zero_pages() {
        let records: Vec<AnalysisRecord> = Vec::new();

        assert_eq!(total_pages(0), 0);
        assert!(page_slice(&records, 1).is_empty());
    }

    #[test]
    fn page_past_the_end_is_empty() {
        let records = numbered(5);

        assert!(page_slice(&records, 2).is_empty());
    }

    #[test]
    fn page_view_reports_bounds_and_label() {
        let records = numbered(23);

        let view = PageView::build(&records, "", 3);

        assert_eq!(view.rows.len(), 3);
        assert_eq!(view.total_pages, 3);
        assert_eq!(view.filtered_count, 23);
        assert!(view.has_prev());
        assert!(!view.has_next());
        assert_eq!(view.label(), "Page 3 of 3");
    }

    #[test]
    fn empty_page_view_still_shows_first_page() {
        let view = PageView::build(&[], "", 1);

        assert_eq!(view.total_pages, 0);
        assert!(!view.has_prev());
        assert!(!view.has_next());
        assert_eq!(view.label(), "Page 1 of 1");
    }
}

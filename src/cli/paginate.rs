//! `paginate` command.

use anyhow::Result;
use serde::Serialize;

use super::OutputArgs;
use super::output::write_json;
use crate::config::FolioConfig;
use crate::paginate::{PageStrip, PageWindow, Pagination, VisibleRange, page_link};

/// Everything a listing template needs to draw its paginator.
#[derive(Debug, Serialize)]
pub struct PaginationReport {
    #[serde(flatten)]
    pub pagination: Pagination,
    pub total_pages: usize,
    pub window: PageWindow,
    pub visible_range: VisibleRange,
    /// `None` when there is nothing to paginate.
    pub summary: Option<String>,
    pub full_strip: PageStrip,
    pub mini_strip: PageStrip,
    pub links: Vec<PageLink>,
}

#[derive(Debug, Serialize)]
pub struct PageLink {
    pub page: usize,
    pub href: String,
}

impl PaginationReport {
    pub fn new(pagination: Pagination, base_path: &str) -> Self {
        let full_strip = pagination.full_strip();
        let links = full_strip
            .pages
            .iter()
            .map(|&page| PageLink {
                page,
                href: page_link(base_path, page),
            })
            .collect();

        Self {
            total_pages: pagination.total_pages(),
            window: pagination.window(),
            visible_range: pagination.visible_range(),
            summary: (!pagination.is_empty()).then(|| pagination.summary()),
            mini_strip: pagination.mini_strip(),
            full_strip,
            links,
            pagination,
        }
    }
}

pub fn run_paginate(
    total: usize,
    page: usize,
    output: &OutputArgs,
    config: &FolioConfig,
) -> Result<()> {
    let settings = &config.pagination;
    let pagination = Pagination::new(page, settings.per_page, total, settings.max_buttons);
    write_json(&PaginationReport::new(pagination, &settings.base_path), output)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report() {
        let report = PaginationReport::new(Pagination::new(5, 9, 90, 5), "/blog");
        assert_eq!(report.total_pages, 10);
        assert_eq!(report.summary.as_deref(), Some("Showing 37 to 45 of 90"));
        assert_eq!(report.full_strip.pages, vec![3, 4, 5, 6, 7]);

        let hrefs: Vec<_> = report.links.iter().map(|l| l.href.as_str()).collect();
        assert_eq!(hrefs, vec!["/blog/3", "/blog/4", "/blog/5", "/blog/6", "/blog/7"]);
    }

    #[test]
    fn test_report_first_page_links_to_base() {
        let report = PaginationReport::new(Pagination::new(1, 9, 20, 5), "/blog/");
        assert_eq!(report.links[0].href, "/blog/");
        assert_eq!(report.links[1].href, "/blog/2");
    }

    #[test]
    fn test_report_json_shape() {
        let report = PaginationReport::new(Pagination::new(1, 9, 0, 5), "/blog");
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["current_page"], 1);
        assert_eq!(json["total_pages"], 0);
        assert!(json["summary"].is_null());
        assert!(json["links"].as_array().unwrap().is_empty());
    }
}

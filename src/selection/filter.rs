use std::collections::HashMap;

use crate::selection::Selection;
use crate::types::Record;

/// Lookup from service id to its record, for resolving `hasSubCategory`.
/// First occurrence wins when the table carries duplicate ids.
#[derive(Debug, Default)]
pub struct ServiceIndex<'a> {
    by_id: HashMap<&'a str, &'a Record>,
}

impl<'a> ServiceIndex<'a> {
    pub fn from_records(services: &'a [Record]) -> Self {
        let mut by_id = HashMap::with_capacity(services.len());
        for record in services {
            by_id.entry(record.get("id")).or_insert(record);
        }
        ServiceIndex { by_id }
    }

    pub fn get(&self, id: &str) -> Option<&'a Record> {
        self.by_id.get(id).copied()
    }

    /// Whether the service filters through sub-categories. An id absent from
    /// the index resolves to false.
    pub fn has_sub_categories(&self, id: &str) -> bool {
        self.get(id).is_some_and(|record| record.flag("hasSubCategory"))
    }
}

/// Derive the visible project list from the full portfolio, the current
/// selection, and the service lookup.
///
/// No service selected shows everything. A service that filters through
/// sub-categories shows nothing until one is chosen, then the projects
/// matching both identifiers. A service without sub-categories shows its
/// whole category and ignores any stale sub-category. Pure function of its
/// three inputs; re-evaluate on every change to any of them.
pub fn filter_projects<'a>(
    portfolio: &'a [Record],
    selection: &Selection,
    services: &ServiceIndex<'_>,
) -> Vec<&'a Record> {
    let Some(service) = &selection.service else {
        return portfolio.iter().collect();
    };
    let service = service.as_str();

    if services.has_sub_categories(service) {
        match &selection.sub_category {
            Some(sub_category) => portfolio
                .iter()
                .filter(|project| {
                    project.get("category") == service
                        && project.get("sub_category_id") == sub_category.as_str()
                })
                .collect(),
            None => Vec::new(),
        }
    } else {
        portfolio
            .iter()
            .filter(|project| project.get("category") == service)
            .collect()
    }
}

/// The transform every grid applies before rendering: active records only,
/// stable sort by the numeric `order` column. Unparseable orders sort last,
/// ties keep source order.
pub fn visible(records: &[Record]) -> Vec<&Record> {
    let mut shown: Vec<&Record> = records.iter().filter(|r| r.flag("isActive")).collect();
    shown.sort_by(|a, b| a.order_key("order").total_cmp(&b.order_key("order")));
    shown
}

/// Active sub-categories belonging to one service, in source order.
pub fn sub_categories_for<'a>(sub_categories: &'a [Record], service_id: &str) -> Vec<&'a Record> {
    sub_categories
        .iter()
        .filter(|sc| sc.get("service_id") == service_id && sc.flag("isActive"))
        .collect()
}

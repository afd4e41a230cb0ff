use showcase_core::selection::{
    filter_projects, sub_categories_for, visible, Selection, ServiceIndex,
};
use showcase_core::types::Record;

fn record(pairs: &[(&str, &str)]) -> Record {
    let mut record = Record::new();
    for (label, value) in pairs {
        record.insert(*label, *value);
    }
    record
}

fn service(id: &str, has_sub_category: &str) -> Record {
    record(&[("id", id), ("hasSubCategory", has_sub_category)])
}

fn project(id: &str, category: &str, sub_category_id: &str) -> Record {
    record(&[
        ("id", id),
        ("category", category),
        ("sub_category_id", sub_category_id),
    ])
}

fn selection(service: Option<&str>, sub_category: Option<&str>) -> Selection {
    Selection {
        service: service.map(Into::into),
        sub_category: sub_category.map(Into::into),
    }
}

fn ids<'a>(records: &[&'a Record]) -> Vec<&'a str> {
    records.iter().map(|r| r.get("id")).collect()
}

#[test]
fn no_selection_shows_the_full_portfolio_in_order() {
    let services = [service("hospitality", "true")];
    let portfolio = [
        project("p3", "residential", ""),
        project("p1", "hospitality", "cafes"),
        project("p2", "hospitality", ""),
    ];
    let index = ServiceIndex::from_records(&services);

    let shown = filter_projects(&portfolio, &selection(None, None), &index);

    assert_eq!(ids(&shown), vec!["p3", "p1", "p2"]);
}

#[test]
fn service_without_sub_categories_shows_its_whole_category() {
    let services = [service("residential", "false")];
    let portfolio = [
        project("p1", "residential", "kitchens"),
        project("p2", "hospitality", ""),
        project("p3", "residential", ""),
    ];
    let index = ServiceIndex::from_records(&services);

    let shown = filter_projects(&portfolio, &selection(Some("residential"), None), &index);

    // sub_category_id values on the records are irrelevant here
    assert_eq!(ids(&shown), vec!["p1", "p3"]);
}

#[test]
fn service_without_sub_categories_ignores_a_stale_sub_category() {
    let services = [service("residential", "false")];
    let portfolio = [
        project("p1", "residential", "kitchens"),
        project("p2", "residential", "baths"),
    ];
    let index = ServiceIndex::from_records(&services);

    let shown = filter_projects(
        &portfolio,
        &selection(Some("residential"), Some("kitchens")),
        &index,
    );

    assert_eq!(ids(&shown), vec!["p1", "p2"]);
}

#[test]
fn service_with_sub_categories_shows_nothing_until_one_is_chosen() {
    let services = [service("hospitality", "true")];
    let portfolio = [
        project("p1", "hospitality", "cafes"),
        project("p2", "hospitality", "hotels"),
    ];
    let index = ServiceIndex::from_records(&services);

    let shown = filter_projects(&portfolio, &selection(Some("hospitality"), None), &index);

    assert!(shown.is_empty());
}

#[test]
fn chosen_sub_category_filters_on_both_identifiers() {
    let services = [service("hospitality", "true")];
    let portfolio = [
        project("p1", "hospitality", "cafes"),
        project("p2", "hospitality", "hotels"),
        project("p3", "residential", "cafes"),
        project("p4", "hospitality", "cafes"),
    ];
    let index = ServiceIndex::from_records(&services);

    let shown = filter_projects(
        &portfolio,
        &selection(Some("hospitality"), Some("cafes")),
        &index,
    );

    assert_eq!(ids(&shown), vec!["p1", "p4"]);
}

#[test]
fn has_sub_category_comparison_is_case_insensitive() {
    let services = [service("hospitality", "TRUE")];
    let portfolio = [project("p1", "hospitality", "cafes")];
    let index = ServiceIndex::from_records(&services);

    let shown = filter_projects(&portfolio, &selection(Some("hospitality"), None), &index);

    assert!(shown.is_empty());
}

#[test]
fn unknown_service_id_resolves_as_having_no_sub_categories() {
    let services = [service("hospitality", "true")];
    let portfolio = [project("p1", "hospitality", "cafes")];
    let index = ServiceIndex::from_records(&services);

    let shown = filter_projects(&portfolio, &selection(Some("ghost"), None), &index);

    assert!(shown.is_empty());
}

#[test]
fn duplicate_service_ids_keep_the_first_occurrence() {
    let services = [service("hospitality", "true"), service("hospitality", "false")];
    let index = ServiceIndex::from_records(&services);

    assert!(index.has_sub_categories("hospitality"));
}

#[test]
fn visible_drops_inactive_and_sorts_by_numeric_order() {
    let records = [
        record(&[("id", "a"), ("isActive", "true"), ("order", "10")]),
        record(&[("id", "b"), ("isActive", "false"), ("order", "1")]),
        record(&[("id", "c"), ("isActive", "True"), ("order", "2")]),
        record(&[("id", "d"), ("isActive", "true"), ("order", "")]),
    ];

    let shown = visible(&records);

    // "10" sorts after "2" numerically; unparseable order goes last
    assert_eq!(ids(&shown), vec!["c", "a", "d"]);
}

#[test]
fn visible_keeps_source_order_on_ties() {
    let records = [
        record(&[("id", "a"), ("isActive", "true"), ("order", "1")]),
        record(&[("id", "b"), ("isActive", "true"), ("order", "1")]),
        record(&[("id", "c"), ("isActive", "true"), ("order", "1")]),
    ];

    let shown = visible(&records);

    assert_eq!(ids(&shown), vec!["a", "b", "c"]);
}

#[test]
fn sub_categories_for_filters_by_service_and_activity() {
    let sub_categories = [
        record(&[("id", "cafes"), ("service_id", "hospitality"), ("isActive", "true")]),
        record(&[("id", "hotels"), ("service_id", "hospitality"), ("isActive", "false")]),
        record(&[("id", "kitchens"), ("service_id", "residential"), ("isActive", "true")]),
        record(&[("id", "bars"), ("service_id", "hospitality"), ("isActive", "true")]),
    ];

    let shown = sub_categories_for(&sub_categories, "hospitality");

    assert_eq!(ids(&shown), vec!["cafes", "bars"]);
}

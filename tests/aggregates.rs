//! Aggregate queries across a populated catalog

mod common;

use common::{init_tracing, CatalogBuilder};
use periodical::{LengthRange, Limits};
use std::collections::HashSet;

#[test]
fn contributing_authors_with_placeholder() {
    init_tracing();
    let seeded = CatalogBuilder::new()
        .author("Xavier")
        .author("Yolanda")
        .magazine("TechWeekly", "Tech")
        .articles("Xavier", "TechWeekly", 3)
        .articles("Yolanda", "TechWeekly", 1)
        .build();
    let view = seeded
        .catalog
        .magazine_view(seeded.magazine("TechWeekly"))
        .unwrap();

    assert_eq!(
        view.contributing_authors(),
        Some(vec![Some(seeded.author("Xavier")), None])
    );
}

#[test]
fn contributing_authors_none_without_articles() {
    let seeded = CatalogBuilder::new().magazine("TechWeekly", "Tech").build();
    let view = seeded
        .catalog
        .magazine_view(seeded.magazine("TechWeekly"))
        .unwrap();

    assert_eq!(view.contributing_authors(), None);
    assert_eq!(view.article_titles(), None);
}

#[test]
fn contributors_are_deduplicated() {
    let seeded = CatalogBuilder::new()
        .author("Xavier")
        .author("Yolanda")
        .author("Zed")
        .magazine("TechWeekly", "Tech")
        .magazine("Vogue", "Fashion")
        .articles("Xavier", "TechWeekly", 4)
        .articles("Yolanda", "TechWeekly", 2)
        .articles("Zed", "Vogue", 1)
        .build();
    let view = seeded
        .catalog
        .magazine_view(seeded.magazine("TechWeekly"))
        .unwrap();

    assert_eq!(
        view.contributors(),
        HashSet::from([seeded.author("Xavier"), seeded.author("Yolanda")])
    );
    assert_eq!(view.articles().len(), 6);
}

#[test]
fn topic_areas_span_every_magazine() {
    let seeded = CatalogBuilder::new()
        .author("Jane Doe")
        .author("John Roe")
        .magazine("TechWeekly", "Tech")
        .magazine("Vogue", "Fashion")
        .magazine("Byte", "Tech")
        .articles("Jane Doe", "TechWeekly", 1)
        .articles("Jane Doe", "Vogue", 1)
        .articles("Jane Doe", "Byte", 2)
        .build();

    let jane = seeded.catalog.author_view(seeded.author("Jane Doe")).unwrap();
    let topics: Vec<_> = jane.topic_areas().unwrap().into_iter().collect();
    assert_eq!(topics, vec!["Fashion", "Tech"]);

    let john = seeded.catalog.author_view(seeded.author("John Roe")).unwrap();
    assert_eq!(john.topic_areas(), None);
    assert!(john.magazines().is_empty());
}

#[test]
fn repeated_queries_are_stable() {
    let seeded = CatalogBuilder::new()
        .author("Xavier")
        .author("Yolanda")
        .magazine("TechWeekly", "Tech")
        .magazine("Vogue", "Fashion")
        .articles("Xavier", "TechWeekly", 3)
        .articles("Yolanda", "TechWeekly", 1)
        .articles("Xavier", "Vogue", 1)
        .build();
    let author = seeded.catalog.author_view(seeded.author("Xavier")).unwrap();
    let magazine = seeded
        .catalog
        .magazine_view(seeded.magazine("TechWeekly"))
        .unwrap();

    assert_eq!(author.articles().len(), author.articles().len());
    let first: Vec<_> = author.articles().iter().map(|a| a.id()).collect();
    let second: Vec<_> = author.articles().iter().map(|a| a.id()).collect();
    assert_eq!(first, second);
    assert_eq!(author.magazines(), author.magazines());
    assert_eq!(author.topic_areas(), author.topic_areas());
    assert_eq!(magazine.contributors(), magazine.contributors());
    assert_eq!(magazine.contributing_authors(), magazine.contributing_authors());
    assert_eq!(magazine.article_titles(), magazine.article_titles());
}

#[test]
fn limits_from_yaml_drive_queries() {
    init_tracing();
    let limits = Limits::from_yaml("contributor_threshold: 0\ntitle: { min: 5, max: 60 }\n").unwrap();
    assert_eq!(limits.title, LengthRange::new(5, 60));

    let seeded = CatalogBuilder::new()
        .with_limits(limits)
        .author("Xavier")
        .author("Yolanda")
        .magazine("TechWeekly", "Tech")
        .articles("Xavier", "TechWeekly", 1)
        .articles("Yolanda", "TechWeekly", 1)
        .build();
    let view = seeded
        .catalog
        .magazine_view(seeded.magazine("TechWeekly"))
        .unwrap();

    assert_eq!(
        view.contributing_authors(),
        Some(vec![Some(seeded.author("Xavier")), Some(seeded.author("Yolanda"))])
    );
}

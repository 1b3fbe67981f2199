//! Catalog store tests through the public API

use boruto::core::catalog::HeroRepository;
use boruto::core::error::BorutoError;
use std::fs;
use tempfile::TempDir;

use crate::common::sample_hero;

fn catalog(size: u32, page_size: usize) -> HeroRepository {
    let heroes = (1..=size)
        .map(|id| sample_hero(id, &format!("Hero {id}")))
        .collect();
    HeroRepository::new(heroes, page_size).unwrap()
}

#[test]
fn test_page_windows_match_catalog_positions() {
    for (size, page_size) in [(25, 5), (12, 4), (10, 3), (1, 1)] {
        let repo = catalog(size, page_size);
        let all: Vec<_> = repo.heroes().cloned().collect();

        for page in 1..=repo.page_count() as i32 {
            let start = (page as usize - 1) * page_size;
            let end = (start + page_size).min(all.len());
            assert_eq!(
                repo.get_page(page).unwrap().heroes,
                all[start..end].to_vec(),
                "size {size}, page size {page_size}, page {page}"
            );
        }
    }
}

#[test]
fn test_pointers_for_every_page() {
    let repo = catalog(20, 4);
    let last = repo.page_count() as i32;

    for page in 1..=last {
        let result = repo.get_page(page).unwrap();
        assert_eq!(result.page, page);
        assert_eq!(result.prev_page, (page > 1).then(|| page - 1));
        assert_eq!(result.next_page, (page < last).then(|| page + 1));
    }
}

#[test]
fn test_page_past_the_end() {
    let repo = catalog(20, 4);
    match repo.get_page(6) {
        Err(BorutoError::PageOutOfRange { page, page_count }) => {
            assert_eq!(page, 6);
            assert_eq!(page_count, 5);
        }
        other => panic!("Expected PageOutOfRange, got {other:?}"),
    }
}

#[test]
fn test_empty_search_for_any_catalog() {
    for size in [0, 1, 25] {
        assert!(catalog(size, 5).search("").is_empty());
    }
}

#[test]
fn test_search_matches_substring_anywhere() {
    let repo = HeroRepository::new(
        vec![
            sample_hero(1, "Rock Lee"),
            sample_hero(2, "Metal Lee"),
            sample_hero(3, "Might Guy"),
        ],
        2,
    )
    .unwrap();

    let names: Vec<_> = repo.search("LEE").into_iter().map(|h| h.name).collect();
    assert_eq!(names, vec!["Rock Lee", "Metal Lee"]);
    assert_eq!(repo.search("k l").len(), 1);
}

#[test]
fn test_reference_catalog_searches() {
    let repo = HeroRepository::bundled(5).unwrap();

    assert_eq!(repo.search("sas").len(), 1);
    assert_eq!(repo.search("sa").len(), 3);
    assert_eq!(repo.search("UNKNOWN").len(), 0);
}

#[test]
fn test_from_file_round_trips_bundled_format() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("heroes.json");
    let heroes: Vec<_> = HeroRepository::bundled(5).unwrap().heroes().cloned().collect();
    fs::write(&path, serde_json::to_string(&heroes).unwrap()).unwrap();

    let repo = HeroRepository::from_file(&path, 10).unwrap();
    assert_eq!(repo.len(), 25);
    assert_eq!(repo.page_count(), 3);
    assert_eq!(repo.get_page(3).unwrap().heroes.len(), 5);
}

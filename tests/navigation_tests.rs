// Host-side tests for anchor navigation and lazy image decisions.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod core {
    pub mod navigation {
        include!("../src/core/navigation.rs");
    }
}

use crate::core::navigation::*;

#[test]
fn overlay_only_with_element_and_motion_allowed() {
    assert_eq!(navigation_for(true, false), Navigation::Overlay);
    assert_eq!(navigation_for(true, true), Navigation::SmoothScroll);
    assert_eq!(navigation_for(false, false), Navigation::SmoothScroll);
    assert_eq!(navigation_for(false, true), Navigation::SmoothScroll);
}

#[test]
fn fragment_hrefs_become_selectors() {
    assert_eq!(anchor_selector("#helmets"), Some("#helmets"));
    assert_eq!(anchor_selector("#"), None);
    assert_eq!(anchor_selector(""), None);
    assert_eq!(anchor_selector("# x"), None);
    assert_eq!(anchor_selector("/about#team"), None);
}

#[test]
fn bare_hash_never_queries_the_page() {
    let mut queried = false;
    let found: Option<u32> = anchor_target("#", |_| {
        queried = true;
        Some(1)
    });
    assert_eq!(found, None);
    assert!(!queried);
}

#[test]
fn missing_target_is_ignored() {
    let found: Option<&str> = anchor_target("#nowhere", |_| None);
    assert_eq!(found, None);

    let found = anchor_target("#contact", |sel| (sel == "#contact").then_some("section"));
    assert_eq!(found, Some("section"));
}

#[test]
fn lazy_source_swaps_only_on_intersection() {
    let data = Some("img/helmet-2024.webp".to_string());
    assert_eq!(lazy_source(false, data.clone()), None);
    assert_eq!(lazy_source(true, data), Some("img/helmet-2024.webp".to_string()));
}

#[test]
fn lazy_source_keeps_images_without_data_src() {
    assert_eq!(lazy_source(true, None), None);
    assert_eq!(lazy_source(true, Some("  ".to_string())), None);
}

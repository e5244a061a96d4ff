mod common;

use common::{TestResult, fixture_site};
use folio::{CategoryEntry, FolioError, SidebarNode};

fn active_names(sidebar: &[SidebarNode]) -> Vec<&str> {
    sidebar
        .iter()
        .flat_map(|node| std::iter::once(&node.entry).chain(&node.children))
        .filter(|entry| entry.active)
        .map(|entry| entry.name.as_str())
        .collect()
}

fn names(entries: &[CategoryEntry]) -> Vec<&str> {
    entries.iter().map(|e| e.name.as_str()).collect()
}

#[test]
fn test_category_index_is_alphabetical_with_counts() -> TestResult {
    let site = fixture_site()?;
    let index = site.category_index();

    assert_eq!(
        names(&index),
        vec!["Anping", "Da'an", "Kaohsiung", "Tainan", "Taipei", "Xinyi", "高雄"]
    );
    let daan = &index[1];
    assert_eq!(daan.count, Some(1));
    assert_eq!(daan.href().as_deref(), Some("/categories/daan"));
    assert_eq!(daan.label(), "Da'an (1)");
    Ok(())
}

#[test]
fn test_sidebar_tree_shape() -> TestResult {
    let site = fixture_site()?;
    let sidebar = site.sidebar("/blog");

    let parents: Vec<_> = sidebar.iter().map(|n| n.entry.name.as_str()).collect();
    assert_eq!(parents, vec!["Kaohsiung", "Tainan", "Taipei"]);

    let taipei = &sidebar[2];
    assert_eq!(taipei.entry.count, Some(3));
    assert_eq!(names(&taipei.children), vec!["Xinyi", "Da'an"]);
    assert_eq!(taipei.children[0].count, Some(2));
    Ok(())
}

#[test]
fn test_category_page_lists_matching_posts() -> TestResult {
    let site = fixture_site()?;
    let view = site.category_page("xinyi")?;

    assert_eq!(view.title, "Xinyi");
    let paths: Vec<_> = view.posts.iter().map(|p| p.path.as_str()).collect();
    assert_eq!(paths, vec!["blog/taipei-night-markets", "blog/xinyi-skyline"]);
    assert!(view.pagination.is_none());
    assert_eq!(active_names(&view.sidebar), vec!["Xinyi"]);
    Ok(())
}

#[test]
fn test_category_page_highlights_parent() -> TestResult {
    let site = fixture_site()?;
    let view = site.category_page("taipei")?;

    assert_eq!(view.posts.len(), 3);
    assert_eq!(active_names(&view.sidebar), vec!["Taipei"]);
    let taipei = view.sidebar.iter().find(|n| n.entry.name == "Taipei").unwrap();
    assert_eq!(taipei.entry.href(), None);
    assert_eq!(taipei.children[0].href().as_deref(), Some("/categories/xinyi"));
    Ok(())
}

#[test]
fn test_category_page_for_punctuated_name() -> TestResult {
    let site = fixture_site()?;
    let view = site.category_page("daan")?;
    assert_eq!(view.posts.len(), 1);
    assert_eq!(view.title, "Daan");
    assert_eq!(active_names(&view.sidebar), vec!["Da'an"]);
    Ok(())
}

#[test]
fn test_category_page_with_encoded_unicode_param() -> TestResult {
    let site = fixture_site()?;
    let params = site.category_params();
    let encoded = params
        .iter()
        .find(|p| p.starts_with('%'))
        .expect("encoded param for 高雄");
    assert_eq!(encoded, "%E9%AB%98%E9%9B%84");

    let view = site.category_page(encoded)?;
    assert_eq!(view.title, "高雄");
    assert_eq!(view.posts.len(), 1);
    // Not part of the sidebar tree, so nothing is highlighted.
    assert!(active_names(&view.sidebar).is_empty());
    Ok(())
}

#[test]
fn test_category_params_cover_every_category() -> TestResult {
    let site = fixture_site()?;
    let params = site.category_params();
    assert_eq!(params.len(), 7);
    assert!(params.contains(&"Da'an".to_string()));
    Ok(())
}

#[test]
fn test_active_matching_normalizes_case_and_spaces() -> TestResult {
    let site = fixture_site()?;
    for path in ["/categories/TAIPEI", "/categories/Taipei", "/categories/taipei/page/2"] {
        assert_eq!(active_names(&site.sidebar(path)), vec!["Taipei"], "{path}");
    }
    assert!(active_names(&site.sidebar("/categories/hualien")).is_empty());
    Ok(())
}

#[test]
fn test_unknown_category_is_not_found() -> TestResult {
    let site = fixture_site()?;
    assert!(matches!(site.category_page("hualien"), Err(FolioError::NotFound(_))));
    assert!(matches!(site.category_page("%E5%8F"), Err(FolioError::NotFound(_))));
    Ok(())
}

use anyhow::{anyhow, Result};
use indexmap::IndexMap;

pub const FEED_URL: &str = "https://elm-greenwood.com";

/// Group package names by author, keeping the author order of first
/// appearance and the package order within each author.
pub fn group_by_author<'a, I>(ids: I) -> Result<IndexMap<&'a str, Vec<&'a str>>>
where
    I: IntoIterator<Item = &'a str>,
{
    ids.into_iter()
        .try_fold(IndexMap::new(), |mut groups: IndexMap<_, Vec<_>>, id| {
            // split on the first `/`; authors never contain one
            let (author, name) = id
                .split_once('/')
                .ok_or_else(|| anyhow!("dependency `{}` is not of the form author/package", id))?;
            groups.entry(author).or_default().push(name);
            Ok(groups)
        })
}

pub fn query_string(groups: &IndexMap<&str, Vec<&str>>) -> String {
    groups
        .iter()
        .map(|(author, packages)| format!("{}={}", author, packages.join("+")))
        .collect::<Vec<_>>()
        .join("&")
}

pub fn web_feed_url(query: &str) -> String {
    format!("{}?{}", FEED_URL, query)
}

pub fn rss_feed_url(query: &str) -> String {
    format!("{}/.rss?{}", FEED_URL, query)
}

#[test]
fn test_groups_packages_by_author() -> Result<()> {
    let groups = group_by_author(["a/x", "a/y", "b/z"])?;
    assert_eq!(query_string(&groups), "a=x+y&b=z");
    Ok(())
}

#[test]
fn test_author_order_is_first_seen() -> Result<()> {
    let groups = group_by_author(["b/z", "a/x", "b/w"])?;
    assert_eq!(query_string(&groups), "b=z+w&a=x");
    Ok(())
}

#[test]
fn test_empty_list_gives_empty_query() -> Result<()> {
    let groups = group_by_author([])?;
    assert_eq!(query_string(&groups), "");
    Ok(())
}

#[test]
fn test_identifier_without_separator_errors() {
    assert!(group_by_author(["no-author"]).is_err());
}

#[test]
fn test_splits_on_first_separator() -> Result<()> {
    let groups = group_by_author(["a/b/c"])?;
    assert_eq!(query_string(&groups), "a=b/c");
    Ok(())
}

#[test]
fn test_query_round_trips_to_groups() -> Result<()> {
    let groups = group_by_author(["elm/core", "elm/json", "elm-community/list-extra"])?;
    let query = query_string(&groups);

    let recovered: IndexMap<&str, Vec<&str>> = query
        .split('&')
        .map(|segment| {
            let (author, packages) = segment.split_once('=').unwrap();
            (author, packages.split('+').collect())
        })
        .collect();
    assert_eq!(recovered, groups);
    Ok(())
}

#[test]
fn test_feed_urls() {
    assert_eq!(
        web_feed_url("elm=core"),
        "https://elm-greenwood.com?elm=core"
    );
    assert_eq!(
        rss_feed_url("elm=core"),
        "https://elm-greenwood.com/.rss?elm=core"
    );
    assert_eq!(web_feed_url(""), "https://elm-greenwood.com?");
}

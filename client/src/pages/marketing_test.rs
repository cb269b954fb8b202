use super::*;

#[test]
fn monthly_price_formats_cents() {
    assert_eq!(monthly_price(&PRICING_TIERS[0]), "$49.00/mo");
    assert_eq!(monthly_price(&PRICING_TIERS[2]), "$999.00/mo");
}

#[test]
fn only_highlighted_tier_gets_modifier() {
    let highlighted: Vec<_> = PRICING_TIERS
        .iter()
        .filter(|t| tier_class(t).contains("--highlighted"))
        .map(|t| t.name)
        .collect();
    assert_eq!(highlighted, ["Industrial"]);
}

#[test]
fn post_links_resolve_back_to_posts() {
    for post in BLOG_POSTS {
        let href = post_href(post.slug);
        let slug = href.strip_prefix("/blog/").unwrap();
        assert_eq!(find_post(slug), Some(post));
    }
}

//! Listing extraction from search-results HTML.
//!
//! A pure function from HTML text to a list of listings. Each call parses
//! its own document and returns an owned collection, so concurrent searches
//! never see each other's intermediate state.

use scraper::{ElementRef, Html, Selector};
use tracing::debug;

use crate::types::Listing;

/// Listing containers inside the top-sellers results block.
const CONTAINER_SELECTOR: &str = "#TopSellersRows .tab_item";

/// Extract all listings from a search-results page, in document order.
///
/// A block missing a field yields an empty string for that field only; a
/// page with no matching blocks yields an empty vec. Neither case is an
/// error.
pub fn extract_listings(html: &str) -> Vec<Listing> {
    let document = Html::parse_document(html);
    let container = Selector::parse(CONTAINER_SELECTOR).expect("static selector");

    let listings: Vec<Listing> = document
        .select(&container)
        .map(extract_listing)
        .collect();

    debug!(count = listings.len(), "extracted listings");
    listings
}

/// Pull the fields of one listing out of its container element.
fn extract_listing(element: ElementRef) -> Listing {
    // The container itself is the anchor wrapping the whole tile.
    let link = element
        .value()
        .attr("href")
        .unwrap_or_default()
        .to_string();

    Listing {
        name: scoped_text(element, ".tab_item_name"),
        price: scoped_text(element, ".discount_final_price"),
        image_src: scoped_attr(element, ".tab_item_cap_img", "src"),
        link,
        tags: extract_tags(element),
    }
}

/// Tag labels joined with ", " in document order, empty when absent.
fn extract_tags(element: ElementRef) -> String {
    let tag_selector = Selector::parse(".tab_item_top_tags .top_tag").expect("static selector");

    element
        .select(&tag_selector)
        .map(|tag| {
            tag.text()
                .collect::<String>()
                .trim()
                .trim_end_matches(',')
                .to_string()
        })
        .filter(|label| !label.is_empty())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Text content of the first match under `element`, trimmed; empty if absent.
fn scoped_text(element: ElementRef, selector: &str) -> String {
    let selector = Selector::parse(selector).expect("static selector");
    element
        .select(&selector)
        .next()
        .map(|el| el.text().collect::<String>().trim().to_string())
        .unwrap_or_default()
}

/// Attribute of the first match under `element`; empty if absent.
fn scoped_attr(element: ElementRef, selector: &str, attr: &str) -> String {
    let selector = Selector::parse(selector).expect("static selector");
    element
        .select(&selector)
        .next()
        .and_then(|el| el.value().attr(attr))
        .unwrap_or_default()
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    /// One listing block in the storefront's search-results markup shape.
    fn listing_block(name: &str, price: &str, image: &str, link: &str, tags: &[&str]) -> String {
        let tag_spans: String = tags
            .iter()
            .map(|t| format!(r#"<span class="top_tag">{}</span>"#, t))
            .collect();
        format!(
            r#"<a class="tab_item" href="{link}">
                <img class="tab_item_cap_img" src="{image}">
                <div class="tab_item_content">
                    <div class="tab_item_name">{name}</div>
                    <div class="discount_final_price">{price}</div>
                    <div class="tab_item_top_tags">{tag_spans}</div>
                </div>
            </a>"#
        )
    }

    fn results_page(blocks: &[String]) -> String {
        format!(
            r#"<html><body><div id="TopSellersRows">{}</div></body></html>"#,
            blocks.join("\n")
        )
    }

    #[test]
    fn test_extracts_all_blocks_in_document_order() {
        let html = results_page(&[
            listing_block("Alpha", "$1.00", "http://x/a.png", "http://x/app/1", &["Indie"]),
            listing_block("Beta", "$2.00", "http://x/b.png", "http://x/app/2", &["RPG"]),
            listing_block("Gamma", "$3.00", "http://x/c.png", "http://x/app/3", &[]),
        ]);

        let listings = extract_listings(&html);

        assert_eq!(listings.len(), 3);
        assert_eq!(listings[0].name, "Alpha");
        assert_eq!(listings[1].name, "Beta");
        assert_eq!(listings[2].name, "Gamma");
        assert_eq!(listings[1].link, "http://x/app/2");
        assert_eq!(listings[1].image_src, "http://x/b.png");
    }

    #[test]
    fn test_missing_price_yields_empty_field_only() {
        let block = r#"<a class="tab_item" href="http://x/app/9">
            <img class="tab_item_cap_img" src="http://x/i.png">
            <div class="tab_item_name">NoPrice</div>
            <div class="tab_item_top_tags"><span class="top_tag">Free</span></div>
        </a>"#;
        let html = results_page(&[block.to_string()]);

        let listings = extract_listings(&html);

        assert_eq!(listings.len(), 1);
        assert_eq!(listings[0].price, "");
        assert_eq!(listings[0].name, "NoPrice");
        assert_eq!(listings[0].link, "http://x/app/9");
        assert_eq!(listings[0].image_src, "http://x/i.png");
        assert_eq!(listings[0].tags, "Free");
    }

    #[test]
    fn test_tags_joined_in_document_order() {
        let html = results_page(&[listing_block(
            "Foo",
            "$9.99",
            "http://x/img.png",
            "http://x/app/1",
            &["Indie", "RPG", "Roguelike"],
        )]);

        let listings = extract_listings(&html);
        assert_eq!(listings[0].tags, "Indie, RPG, Roguelike");
    }

    #[test]
    fn test_zero_tags_is_empty_string() {
        let html = results_page(&[listing_block(
            "Foo",
            "$9.99",
            "http://x/img.png",
            "http://x/app/1",
            &[],
        )]);

        let listings = extract_listings(&html);
        assert_eq!(listings[0].tags, "");
    }

    #[test]
    fn test_trailing_comma_in_tag_label_is_stripped() {
        // The live page renders all but the last label as "Action, ".
        let html = results_page(&[listing_block(
            "Foo",
            "$9.99",
            "http://x/img.png",
            "http://x/app/1",
            &["Action, ", "Adventure"],
        )]);

        let listings = extract_listings(&html);
        assert_eq!(listings[0].tags, "Action, Adventure");
    }

    #[test]
    fn test_no_matching_blocks_is_empty_collection() {
        let html = "<html><body><div id=\"OtherRows\"></div></body></html>";
        assert!(extract_listings(html).is_empty());
    }

    #[test]
    fn test_blocks_outside_results_container_are_ignored() {
        let inside = listing_block("In", "$1", "http://x/a.png", "http://x/app/1", &[]);
        let html = format!(
            r#"<html><body>
                <div id="TopSellersRows">{inside}</div>
                <div id="NewReleasesRows">{}</div>
            </body></html>"#,
            listing_block("Out", "$2", "http://x/b.png", "http://x/app/2", &[]),
        );

        let listings = extract_listings(&html);
        assert_eq!(listings.len(), 1);
        assert_eq!(listings[0].name, "In");
    }
}

use scraper::{
    ElementRef,
    Html,
    Selector,
};

use crate::core::{
    FemineError,
    Term,
};

// Placeholder labels, matching what the corpus files have historically
// contained when a page was missing a fragment.
const UNKNOWN_SUB_CATEGORY: &str = "不明な分野";
const UNKNOWN_MAJOR_CATEGORY: &str = "不明な大分類";
const UNKNOWN_TERM: &str = "不明な用語";
const NO_DESCRIPTION: &str = "説明なし";

/// Everything extracted from a single keyword page.
#[derive(Debug, Clone, PartialEq)]
pub struct PageData {
    pub major_category: String,
    pub sub_category: String,
    pub terms: Vec<Term>,
}

fn selector(css: &str) -> Result<Selector, FemineError> {
    Selector::parse(css).map_err(|e| FemineError::Custom(format!("Bad selector {css:?}: {e}")))
}

fn element_text(el: ElementRef) -> String {
    el.text().collect::<String>().trim().to_string()
}

/// Extract category labels and the term list from one page.
///
/// The sub-category heading reads like "離散数学 - 34語（シラバス9.1）";
/// only the part before the first dash is the label. The major-category
/// badge text is kept raw, leading number included, and stays that way in
/// the corpus file until the exporter derives a deck name from it.
pub fn parse_page(html: &str) -> Result<PageData, FemineError> {
    let document = Html::parse_document(html);

    let heading = selector("div.main.keyword h2")?;
    let sub_category = document
        .select(&heading)
        .next()
        .map(|h2| {
            let text = element_text(h2);
            text.split('-').next().unwrap_or_default().trim().to_string()
        })
        .filter(|label| !label.is_empty())
        .unwrap_or_else(|| UNKNOWN_SUB_CATEGORY.to_string());

    let badge = selector("a.category_badge")?;
    let major_category = document
        .select(&badge)
        .next()
        .map(element_text)
        .unwrap_or_else(|| UNKNOWN_MAJOR_CATEGORY.to_string());

    let article = selector("article.term-article")?;
    let title = selector("h3.term-article__title")?;
    let body = selector("div.term-article__body")?;

    let terms = document
        .select(&article)
        .map(|art| Term {
            name: art
                .select(&title)
                .next()
                .map(element_text)
                .unwrap_or_else(|| UNKNOWN_TERM.to_string()),
            description: art
                .select(&body)
                .next()
                .map(element_text)
                .unwrap_or_else(|| NO_DESCRIPTION.to_string()),
        })
        .collect();

    Ok(PageData { major_category, sub_category, terms })
}

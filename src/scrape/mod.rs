use std::{
    path::Path,
    thread,
    time::{
        Duration,
        Instant,
    },
};

use crate::core::{
    http::{
        fetch_text,
        http_client,
    },
    Corpus,
    FemineError,
};

pub mod parser;

pub const BASE_URL: &str = "https://www.fe-siken.com/keyword";

/// Pages per major category, indexed by major category number minus one.
/// Mirrors the site's fixed two-level keyword hierarchy.
pub const FIELD_HIERARCHY: &[usize] =
    &[5, 5, 5, 2, 5, 1, 2, 2, 5, 5, 5, 6, 4, 11, 5, 2, 4, 3, 4, 2, 5, 3, 5];

pub const OUTPUT_FILE: &str = "fe_keywords_data.json";

/// Fixed pauses that bound the request rate. Both are applied on every
/// page, whether or not the fetch succeeds.
#[derive(Debug, Clone, Copy)]
pub struct Pacing {
    pub pre_fetch: Duration,
    pub post_page: Duration,
}

impl Pacing {
    pub fn none() -> Self {
        Pacing { pre_fetch: Duration::ZERO, post_page: Duration::ZERO }
    }
}

impl Default for Pacing {
    fn default() -> Self {
        Pacing { pre_fetch: Duration::from_secs(1), post_page: Duration::from_secs(2) }
    }
}

pub fn page_url(major_index: usize, sub_index: usize) -> String {
    format!("{BASE_URL}/{major_index}/{major_index}-{sub_index}")
}

/// Walk the given hierarchy and accumulate every page the fetcher can
/// produce. A failed address is reported and skipped; the traversal never
/// retries and never aborts. Pages with no terms contribute nothing.
pub fn collect_pages<F>(mut fetch: F, pacing: Pacing, hierarchy: &[usize]) -> Corpus
where
    F: FnMut(&str) -> Result<String, FemineError>,
{
    let mut corpus = Corpus::new();

    for (i, &sub_count) in hierarchy.iter().enumerate() {
        let major_index = i + 1;

        for sub_index in 1..=sub_count {
            let url = page_url(major_index, sub_index);
            println!("Scraping {}", url);

            thread::sleep(pacing.pre_fetch);

            match fetch(&url).and_then(|body| parser::parse_page(&body)) {
                Ok(page) => {
                    if !page.terms.is_empty() {
                        if let Err(e) =
                            corpus.insert_page(page.major_category, page.sub_category, page.terms)
                        {
                            println!("Failed to store {}: {}", url, e);
                        }
                    }
                }
                Err(e) => println!("Failed to fetch {}: {}", url, e),
            }

            thread::sleep(pacing.post_page);
        }
    }

    corpus
}

pub fn collect_corpus<F>(fetch: F, pacing: Pacing) -> Corpus
where
    F: FnMut(&str) -> Result<String, FemineError>,
{
    collect_pages(fetch, pacing, FIELD_HIERARCHY)
}

/// Full collection run: fetch every page of the hierarchy and write the
/// corpus as one file at the end. A crash mid-run loses all progress, by
/// design of the original batch job.
pub fn run() -> Result<(), FemineError> {
    let start = Instant::now();
    let client = http_client()?;

    let corpus = collect_corpus(|url| fetch_text(&client, url), Pacing::default());

    corpus.save(Path::new(OUTPUT_FILE))?;
    println!(
        "Collected {} terms across {} major categories into {} ({:.1}s)",
        corpus.term_count(),
        corpus.major_count(),
        OUTPUT_FILE,
        start.elapsed().as_secs_f32()
    );

    Ok(())
}

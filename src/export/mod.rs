use std::{
    fs::File,
    io::{
        BufWriter,
        Write,
    },
    path::Path,
};

use crate::core::{
    Corpus,
    FemineError,
    Term,
};

pub const INPUT_FILE: &str = crate::scrape::OUTPUT_FILE;
pub const OUTPUT_FILE: &str = "anki_fe_cards.csv";

/// Strip the leading numeric token from a major-category label:
/// "1 基礎理論" becomes "基礎理論". Labels without a numeric prefix pass
/// through untouched, so applying this twice is a no-op.
pub fn deck_name(major: &str) -> String {
    match major.split_once(' ') {
        Some((prefix, rest)) if !prefix.is_empty() && prefix.bytes().all(|b| b.is_ascii_digit()) => {
            rest.trim().to_string()
        }
        _ => major.trim().to_string(),
    }
}

/// Turn a sub-category label into a single Anki tag token. Idempotent.
pub fn tag_token(sub: &str) -> String {
    sub.replace([' ', '-'], "_")
}

/// Minimal quoting: only fields containing a tab, CR, LF or quote get
/// wrapped, with inner quotes doubled. Everything else is written verbatim.
fn escape_field(field: &str) -> String {
    if field.contains(['\t', '\r', '\n', '"']) {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}

/// Write one tab-separated record per term, in corpus order, with a
/// leading BOM for spreadsheet compatibility and no header row.
/// Returns the number of records written.
pub fn write_cards<W: Write>(corpus: &Corpus, mut out: W) -> Result<usize, FemineError> {
    out.write_all("\u{feff}".as_bytes())?;

    let mut count = 0;
    for (major, subs) in corpus.entries() {
        let subs = subs.as_object().ok_or_else(|| {
            FemineError::MalformedCorpus(format!("major category {:?} is not an object", major))
        })?;
        let deck = deck_name(major);

        for (sub, terms) in subs {
            let terms: Vec<Term> = serde_json::from_value(terms.clone())?;
            let tags = format!("{} {}", deck.replace(' ', "_"), tag_token(sub));

            for term in &terms {
                writeln!(
                    out,
                    "{}\t{}\t{}\t{}",
                    escape_field(&term.name),
                    escape_field(&term.description),
                    escape_field(&tags),
                    escape_field(&deck)
                )?;
                count += 1;
            }
        }
    }

    Ok(count)
}

/// Flatten a corpus file into the Anki import file. A missing input file
/// is reported and swallowed; anything structurally wrong with an existing
/// file propagates as an error.
pub fn convert(input: &Path, output: &Path) -> Result<(), FemineError> {
    if !input.exists() {
        println!("Input file {} not found. Run the collector first.", input.display());
        return Ok(());
    }

    let corpus = Corpus::load(input)?;

    let mut writer = BufWriter::new(File::create(output)?);
    let count = write_cards(&corpus, &mut writer)?;
    writer.flush()?;

    println!("Wrote {} cards to {}", count, output.display());
    Ok(())
}

pub fn run() -> Result<(), FemineError> {
    convert(Path::new(INPUT_FILE), Path::new(OUTPUT_FILE))
}

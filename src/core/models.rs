use std::{
    fs,
    path::Path,
};

use serde::{
    Deserialize,
    Serialize,
};
use serde_json::{
    ser::PrettyFormatter,
    Map,
    Serializer,
    Value,
};

use super::FemineError;

/// One glossary entry. The serialized field names match the keys the
/// fe-siken.com corpus files have always used, so existing data files
/// stay readable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Term {
    #[serde(rename = "用語")]
    pub name: String,
    #[serde(rename = "説明")]
    pub description: String,
}

/// The full nested collection: major-category label -> sub-category label
/// -> list of terms. Key order is insertion order (serde_json is built with
/// `preserve_order`), so the persisted JSON walks in scrape order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Corpus(Map<String, Value>);

impl Corpus {
    pub fn new() -> Self {
        Corpus(Map::new())
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn major_count(&self) -> usize {
        self.0.len()
    }

    /// Total number of terms across all sub-categories. Non-array leaves
    /// count as zero rather than erroring; only the exporter treats a
    /// malformed corpus as fatal.
    pub fn term_count(&self) -> usize {
        self.0
            .values()
            .filter_map(|subs| subs.as_object())
            .flat_map(|subs| subs.values())
            .filter_map(|terms| terms.as_array())
            .map(|terms| terms.len())
            .sum()
    }

    /// Store one page's terms under its major and sub-category labels.
    /// Plain key assignment at the sub-category level: a repeated label
    /// within the same major category overwrites the earlier list.
    pub fn insert_page(
        &mut self,
        major: String,
        sub: String,
        terms: Vec<Term>,
    ) -> Result<(), FemineError> {
        let entry = self.0.entry(major).or_insert_with(|| Value::Object(Map::new()));
        let subs = entry
            .as_object_mut()
            .ok_or_else(|| FemineError::MalformedCorpus("major category is not an object".into()))?;
        subs.insert(sub, serde_json::to_value(terms)?);
        Ok(())
    }

    /// Iterate major categories in insertion order.
    pub fn entries(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.0.iter()
    }

    /// Serialize with 4-space indentation and multi-byte characters left
    /// unescaped, the shape the collector has always written.
    pub fn to_pretty_json(&self) -> Result<String, FemineError> {
        let mut buf = Vec::new();
        let formatter = PrettyFormatter::with_indent(b"    ");
        let mut ser = Serializer::with_formatter(&mut buf, formatter);
        self.0.serialize(&mut ser)?;
        String::from_utf8(buf).map_err(|e| FemineError::Custom(format!("Invalid UTF-8: {e}")))
    }

    pub fn save(&self, path: &Path) -> Result<(), FemineError> {
        fs::write(path, self.to_pretty_json()?)?;
        Ok(())
    }

    pub fn load(path: &Path) -> Result<Self, FemineError> {
        let text = fs::read_to_string(path)?;
        Ok(Corpus(serde_json::from_str(&text)?))
    }
}

impl From<Map<String, Value>> for Corpus {
    fn from(map: Map<String, Value>) -> Self {
        Corpus(map)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn term(name: &str, description: &str) -> Term {
        Term { name: name.to_string(), description: description.to_string() }
    }

    #[test]
    fn term_serializes_with_japanese_keys() {
        let json = serde_json::to_string(&term("2進数", "0と1で表す数")).unwrap();
        assert_eq!(json, r#"{"用語":"2進数","説明":"0と1で表す数"}"#);

        let back: Term = serde_json::from_str(&json).unwrap();
        assert_eq!(back, term("2進数", "0と1で表す数"));
    }

    #[test]
    fn insert_preserves_order_and_counts() {
        let mut corpus = Corpus::new();
        corpus
            .insert_page("2 アルゴリズム".into(), "探索".into(), vec![term("a", "b")])
            .unwrap();
        corpus
            .insert_page(
                "1 基礎理論".into(),
                "離散数学".into(),
                vec![term("c", "d"), term("e", "f")],
            )
            .unwrap();
        corpus.insert_page("2 アルゴリズム".into(), "整列".into(), vec![term("g", "h")]).unwrap();

        let majors: Vec<&String> = corpus.entries().map(|(label, _)| label).collect();
        assert_eq!(majors, ["2 アルゴリズム", "1 基礎理論"]);
        assert_eq!(corpus.major_count(), 2);
        assert_eq!(corpus.term_count(), 4);
    }

    #[test]
    fn repeated_sub_label_overwrites() {
        let mut corpus = Corpus::new();
        corpus.insert_page("1 基礎理論".into(), "離散数学".into(), vec![term("a", "b")]).unwrap();
        corpus
            .insert_page(
                "1 基礎理論".into(),
                "離散数学".into(),
                vec![term("c", "d"), term("e", "f")],
            )
            .unwrap();

        assert_eq!(corpus.term_count(), 2);
    }

    #[test]
    fn pretty_json_uses_four_space_indent_and_raw_utf8() {
        let mut corpus = Corpus::new();
        corpus.insert_page("1 基礎理論".into(), "離散数学".into(), vec![term("a", "b")]).unwrap();

        let json = corpus.to_pretty_json().unwrap();
        assert!(json.contains("\n    \"1 基礎理論\""));
        assert!(json.contains("\n        \"離散数学\""));
        assert!(!json.contains("\\u"));
    }

    #[test]
    fn save_load_round_trip_keeps_order() {
        let mut corpus = Corpus::new();
        corpus.insert_page("3 ハードウェア".into(), "メモリ".into(), vec![term("a", "b")]).unwrap();
        corpus.insert_page("1 基礎理論".into(), "応用数学".into(), vec![term("c", "d")]).unwrap();

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("corpus.json");
        corpus.save(&path).unwrap();

        let loaded = Corpus::load(&path).unwrap();
        assert_eq!(loaded, corpus);
        let majors: Vec<&String> = loaded.entries().map(|(label, _)| label).collect();
        assert_eq!(majors, ["3 ハードウェア", "1 基礎理論"]);
    }
}

use indexmap::IndexMap;
use serde::Serialize;
use std::collections::HashSet;

/// Normalised column names of the movie dataset.
pub mod field {
    pub const TITLE: &str = "series_title";
    /// Accepted in place of [`TITLE`] by datasets that use the short name.
    pub const TITLE_ALT: &str = "title";
    pub const RELEASED_YEAR: &str = "released_year";
    pub const CERTIFICATE: &str = "certificate";
    pub const RUNTIME: &str = "runtime";
    pub const GENRE: &str = "genre";
    pub const IMDB_RATING: &str = "imdb_rating";
    pub const OVERVIEW: &str = "overview";
    pub const META_SCORE: &str = "meta_score";
    pub const DIRECTOR: &str = "director";
    pub const STARS: [&str; 4] = ["star_1", "star_2", "star_3", "star_4"];
    /// Spelling of [`STARS`] used by datasets with `Star1`-style headers.
    pub const STARS_COMPACT: [&str; 4] = ["star1", "star2", "star3", "star4"];
    pub const NO_OF_VOTES: &str = "no_of_votes";
    pub const GROSS: &str = "gross";
}

/// Separator between entries of the multi-valued genre field.
pub const GENRE_SEPARATOR: &str = ", ";

/// Normalises a header cell: trimmed, lower-cased, every run of
/// non-alphanumeric characters collapsed to one `_`, no leading or trailing `_`.
pub fn normalize_header(name: &str) -> String {
    let mut result = String::with_capacity(name.len());
    let mut last_was_underscore = false;
    for c in name.trim().to_lowercase().chars() {
        if c.is_alphanumeric() {
            result.push(c);
            last_was_underscore = false;
        } else if !last_was_underscore {
            result.push('_');
            last_was_underscore = true;
        }
    }
    result.trim_matches('_').to_owned()
}

/// Normalises a whole header row. A name that collides with an earlier one
/// gets a `_1`, `_2`, ... suffix so every column stays addressable.
pub fn normalize_headers<'a, I>(names: I) -> Vec<String>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut seen = HashSet::new();
    names
        .into_iter()
        .map(|name| {
            let base = normalize_header(name);
            let mut clean = base.clone();
            let mut count = 0;
            while seen.contains(&clean) {
                count += 1;
                clean = format!("{base}_{count}");
            }
            seen.insert(clean.clone());
            clean
        })
        .collect()
}

/// One movie as loaded from the dataset: field name to raw text, in file column order.
///
/// Values are never coerced at load time. An empty value means "unknown", and a
/// field missing from the file reads as empty.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(transparent)]
pub struct MovieRecord {
    fields: IndexMap<String, String>,
}

impl MovieRecord {
    pub fn new(fields: IndexMap<String, String>) -> Self {
        Self { fields }
    }

    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            fields: pairs
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    /// Raw value of `name`, or `""` when the record has no such field.
    pub fn get(&self, name: &str) -> &str {
        self.fields.get(name).map_or("", String::as_str)
    }

    /// First non-empty value among `names`, or `""`.
    pub fn get_first(&self, names: &[&str]) -> &str {
        names
            .iter()
            .map(|name| self.get(name))
            .find(|value| !value.is_empty())
            .unwrap_or("")
    }

    pub fn fields(&self) -> &IndexMap<String, String> {
        &self.fields
    }

    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }

    pub fn title(&self) -> &str {
        self.get_first(&[field::TITLE, field::TITLE_ALT])
    }

    pub fn released_year(&self) -> &str {
        self.get(field::RELEASED_YEAR)
    }

    pub fn runtime(&self) -> &str {
        self.get(field::RUNTIME)
    }

    pub fn genre(&self) -> &str {
        self.get(field::GENRE)
    }

    /// Genre tokens split on `", "`; empty tokens are skipped.
    pub fn genres(&self) -> impl Iterator<Item = &str> {
        self.genre()
            .split(GENRE_SEPARATOR)
            .filter(|g| !g.is_empty())
    }

    pub fn imdb_rating(&self) -> &str {
        self.get(field::IMDB_RATING)
    }

    pub fn meta_score(&self) -> &str {
        self.get(field::META_SCORE)
    }

    pub fn director(&self) -> &str {
        self.get(field::DIRECTOR)
    }

    /// The four billed stars, `star_N` or `starN`.
    pub fn stars(&self) -> [&str; 4] {
        let mut stars = [""; 4];
        for (slot, (name, compact)) in stars
            .iter_mut()
            .zip(field::STARS.into_iter().zip(field::STARS_COMPACT))
        {
            *slot = self.get_first(&[name, compact]);
        }
        stars
    }

    pub fn no_of_votes(&self) -> &str {
        self.get(field::NO_OF_VOTES)
    }

    pub fn gross(&self) -> &str {
        self.get(field::GROSS)
    }
}

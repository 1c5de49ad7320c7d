use strum_macros::{Display, EnumIter};

/// Public FA Full-Time site.
pub const BASE_URL: &str = "https://fulltime.thefa.com";

/// The three pages scraped per run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter)]
#[strum(serialize_all = "lowercase")]
pub enum DataSource {
    Fixtures,
    Results,
    Table,
}

impl DataSource {
    /// Name of the JSON file this source is written to.
    pub fn file_name(self) -> String {
        format!("{self}.json")
    }

    /// Listing URL for league `lrcode` under `base_url`.
    pub fn url(self, base_url: &str, lrcode: &str) -> String {
        let base_url = base_url.trim_end_matches('/');
        match self {
            DataSource::Fixtures => format!(
                "{base_url}/fixtures.html?selectedLeague={lrcode}&selectedSeason=\
                 &selectedFixtureGroupAgeGroup=0&selectedFixtureDateStatus=\
                 &selectedRelatedFixtureOption=3"
            ),
            DataSource::Results => format!(
                "{base_url}/results.html?selectedLeague={lrcode}&selectedSeason=\
                 &selectedFixtureGroupAgeGroup=0&selectedRelatedFixtureOption=3"
            ),
            DataSource::Table => format!("{base_url}/table.html?selectedLeague={lrcode}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use strum::IntoEnumIterator;

    use super::*;

    #[test]
    fn test_urls() {
        assert_eq!(
            DataSource::Fixtures.url(BASE_URL, "123"),
            "https://fulltime.thefa.com/fixtures.html?selectedLeague=123&selectedSeason=\
             &selectedFixtureGroupAgeGroup=0&selectedFixtureDateStatus=&selectedRelatedFixtureOption=3"
        );
        assert_eq!(
            DataSource::Results.url(BASE_URL, "123"),
            "https://fulltime.thefa.com/results.html?selectedLeague=123&selectedSeason=\
             &selectedFixtureGroupAgeGroup=0&selectedRelatedFixtureOption=3"
        );
        assert_eq!(
            DataSource::Table.url("http://127.0.0.1:9000/", "77"),
            "http://127.0.0.1:9000/table.html?selectedLeague=77"
        );
    }

    #[test]
    fn test_file_names() {
        let names: Vec<_> = DataSource::iter().map(DataSource::file_name).collect();
        assert_eq!(names, vec!["fixtures.json", "results.json", "table.json"]);
    }
}

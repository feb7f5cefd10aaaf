use crate::cell::Cell;
use crate::model::WeatherData;

/// Shared state for a weather search UI.
///
/// The store owns the three cells the UI components share. Components hold a
/// clone of the store (cloning clones handles to the same cells) and
/// subscribe to the cells they render.
///
/// The store carries no policy: it performs no validation and applies no
/// transformation. Whatever a collaborator assigns to a cell is what every
/// other subscriber sees.
#[derive(Clone)]
pub struct WeatherStore {
    /// The search term currently entered by the user.
    pub query: Cell<String>,
    /// The most recently fetched weather payload, if any.
    pub weather_data: Cell<Option<WeatherData>>,
    /// Error text from the last failed fetch, empty when there is none.
    pub error_message: Cell<String>,
}

impl WeatherStore {
    /// Create a store with an empty query, no weather data, and no error.
    pub fn new() -> Self {
        Self {
            query: Cell::new(String::new()),
            weather_data: Cell::new(None),
            error_message: Cell::new(String::new()),
        }
    }
}

impl Default for WeatherStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_empty() {
        let store = WeatherStore::new();

        assert_eq!(store.query.get(), "");
        assert_eq!(store.weather_data.get(), None);
        assert_eq!(store.error_message.get(), "");
    }

    #[test]
    fn query_holds_the_last_search_term() {
        let store = WeatherStore::new();

        store.query.set("london".to_string());

        assert_eq!(store.query.get(), "london");
    }

    #[test]
    fn weather_payload_reads_back_unchanged() {
        let store = WeatherStore::new();
        let payload = WeatherData {
            city: "London".to_string(),
            temperature: 18.0,
            condition: "overcast".to_string(),
            humidity: None,
            wind_kph: None,
        };

        store.weather_data.set(Some(payload.clone()));

        assert_eq!(store.weather_data.get(), Some(payload));
    }

    #[test]
    fn clones_share_the_same_cells() {
        let store = WeatherStore::new();
        let view = store.clone();

        store.error_message.set("city not found".to_string());

        assert_eq!(view.error_message.get(), "city not found");
    }
}

//! Integration tests for Vane

use std::sync::{
    atomic::{AtomicUsize, Ordering},
    Arc, Mutex,
};
use vane::{Cell, WeatherData, WeatherStore};

#[test]
fn cell_integration() {
    let count = Cell::new(0);

    // Test read
    assert_eq!(count.get(), 0);

    // Test write
    count.set(42);
    assert_eq!(count.get(), 42);

    // Test update
    count.update(|n| *n += 10);
    assert_eq!(count.get(), 52);
}

#[test]
fn last_write_wins() {
    let query = Cell::new(String::new());

    query.set("lon".to_string());
    query.set("london".to_string());

    assert_eq!(query.get(), "london");
}

#[test]
fn subscription_lifecycle() {
    let cell = Cell::new(0);
    let counter = Arc::new(AtomicUsize::new(0));
    let counter_clone = counter.clone();

    let subscription = cell.subscribe(move |_| {
        counter_clone.fetch_add(1, Ordering::SeqCst);
    });

    // One immediate delivery at subscribe time
    assert_eq!(counter.load(Ordering::SeqCst), 1);

    cell.set(1);
    cell.update(|n| *n += 1);
    assert_eq!(counter.load(Ordering::SeqCst), 3);

    subscription.unsubscribe();
    cell.set(99);
    assert_eq!(counter.load(Ordering::SeqCst), 3);
}

#[test]
fn subscribers_fire_in_registration_order() {
    let cell = Cell::new(0);
    let order = Arc::new(Mutex::new(Vec::new()));

    for name in ["a", "b", "c"] {
        let order = order.clone();
        cell.subscribe(move |_| order.lock().unwrap().push(name));
    }

    order.lock().unwrap().clear();
    cell.set(1);

    assert_eq!(*order.lock().unwrap(), vec!["a", "b", "c"]);
}

#[test]
fn derived_cell_integration() {
    let store = WeatherStore::new();

    let headline = store.weather_data.map(|data| match data {
        Some(data) => format!("{} {}°C", data.city, data.temperature),
        None => "—".to_string(),
    });

    assert_eq!(headline.get(), "—");

    store.weather_data.set(Some(WeatherData {
        city: "London".to_string(),
        temperature: 18.0,
        condition: "light rain".to_string(),
        humidity: Some(82),
        wind_kph: Some(14.5),
    }));

    assert_eq!(headline.get(), "London 18°C");
}

#[test]
fn store_search_flow() {
    let store = WeatherStore::new();

    // Initial state
    assert_eq!(store.query.get(), "");
    assert_eq!(store.weather_data.get(), None);
    assert_eq!(store.error_message.get(), "");

    // A component records what it would render
    let rendered = Arc::new(Mutex::new(Vec::new()));
    let rendered_clone = rendered.clone();
    store.weather_data.subscribe(move |data| {
        rendered_clone
            .lock()
            .unwrap()
            .push(data.as_ref().map(|d| d.city.clone()));
    });

    // User types a query, the fetcher pushes a payload
    store.query.set("london".to_string());
    store.weather_data.set(Some(WeatherData {
        city: "London".to_string(),
        temperature: 18.0,
        condition: "overcast".to_string(),
        humidity: None,
        wind_kph: None,
    }));

    // A later fetch fails and only the error cell changes
    store.error_message.set("city not found: atlantis".to_string());

    assert_eq!(
        *rendered.lock().unwrap(),
        vec![None, Some("London".to_string())]
    );
    assert_eq!(store.error_message.get(), "city not found: atlantis");
    assert_eq!(store.query.get(), "london");
}

#[test]
fn read_only_view_cannot_miss_updates() {
    let store = WeatherStore::new();
    let errors = store.error_message.read_only();

    let seen = Arc::new(Mutex::new(Vec::new()));
    let seen_clone = seen.clone();
    errors.subscribe(move |message| {
        seen_clone.lock().unwrap().push(message.clone());
    });

    store.error_message.set("request timed out".to_string());

    assert_eq!(
        *seen.lock().unwrap(),
        vec![String::new(), "request timed out".to_string()]
    );
}

//! Weather store example simulating a full search flow

use vane::{WeatherData, WeatherStore};

fn main() {
    println!("=== Weather Store Example ===\n");

    let store = WeatherStore::new();

    // A results component re-renders whenever the payload changes
    store.weather_data.subscribe(|data| match data {
        Some(data) => println!(
            "[results] {}: {}°C, {}",
            data.city, data.temperature, data.condition
        ),
        None => println!("[results] nothing to show yet"),
    });

    // An error banner watches the error cell
    store.error_message.subscribe(|message| {
        if message.is_empty() {
            println!("[banner] clear");
        } else {
            println!("[banner] {message}");
        }
    });

    // The user types a query
    println!("\nSearching for 'london'...");
    store.query.set("london".to_string());

    // The fetcher hands back a JSON payload, typed at the boundary
    let payload: WeatherData = serde_json::from_str(
        r#"{ "city": "London", "temperature": 18.0, "condition": "light rain", "humidity": 82 }"#,
    )
    .expect("payload should parse");
    store.weather_data.set(Some(payload));

    // A second search fails, only the error cell changes
    println!("\nSearching for 'atlantis'...");
    store.query.set("atlantis".to_string());
    store.error_message.set("city not found: atlantis".to_string());

    println!("\nFinal query: {:?}", store.query.get());
}
